//! Size, channel count and classification lookup for the core Vulkan formats.
//!
//! Formats can be queried in two ways:
//! - through [`Format`], which can't hold an invalid ordinal, so its queries are infallible and `const`
//! - through the [`registry`] functions, which take a raw `VkFormat` ordinal and reject anything outside of `0..Format::COUNT`
//!
//! All data comes from constant LUTs indexed by the format ordinal, nothing is computed from format names at runtime.

mod result;
pub use result::*;

mod format;
pub use format::*;

pub mod format_set;
pub use format_set::FormatSet;

mod luts;

pub mod registry;

#[cfg(feature = "ash")]
mod vulkan;

pub use vkformat_base::{EnumCountT, EnumFromIndexT, EnumFromNameT};

use vkformat_logging::LogCategory;

pub(crate) const LOG_CAT: LogCategory = LogCategory::new("Format Registry");
