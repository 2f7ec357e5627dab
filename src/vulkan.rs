use ash::vk;

use crate::{Error, Format, Result};

impl From<Format> for vk::Format {
    fn from(format: Format) -> Self {
        vk::Format::from_raw(format.as_raw() as i32)
    }
}

impl TryFrom<vk::Format> for Format {
    type Error = Error;

    /// Fails for extension formats, as those are outside of the core range
    fn try_from(format: vk::Format) -> Result<Self> {
        Format::try_from(format.as_raw())
    }
}
