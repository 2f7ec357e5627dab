use core::fmt;

/// Format registry error
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Error {
    /// Ordinal does not name a format, i.e. it is outside of `0..Format::COUNT`
    InvalidFormatOrdinal(i64),
    /// String does not name a format
    UnknownFormatName(String),
    /// The format table or a classification partition breaks an invariant
    InconsistentTable(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidFormatOrdinal(ordinal) => write!(f, "Invalid format ordinal: {ordinal}"),
            Error::UnknownFormatName(name)       => write!(f, "Unknown format name: '{name}'"),
            Error::InconsistentTable(reason)     => write!(f, "Inconsistent format table: {reason}"),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = core::result::Result<T, Error>;
