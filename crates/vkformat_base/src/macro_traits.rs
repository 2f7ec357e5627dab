//! Contains traits implemented by the `vkformat_macros` derives


/// Number of variants in a fieldless enum.
pub trait EnumCountT {
    /// Number of variants, which is also one past the highest index for a dense enum
    const COUNT : usize;
}

/// Lookup of a fieldless enum variant from its discriminant.
pub trait EnumFromIndexT: Sized {
    /// Get the variant with discriminant `idx`, or `None` if no variant has it
    fn from_idx(idx: usize) -> Option<Self>;

    /// Get the variant with discriminant `idx`, or `default` if no variant has it
    fn from_idx_or(idx: usize, default: Self) -> Self {
        Self::from_idx(idx).unwrap_or(default)
    }
}

/// Lookup of a fieldless enum variant from its name.
pub trait EnumFromNameT: Sized {
    /// Try to parse the enum from a string slice, matching the exact variant name (or its `parse_name` override)
    fn parse(s: &str) -> Option<Self>;
}
