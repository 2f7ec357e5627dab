//! Lookups by raw `VkFormat` ordinal.
//!
//! Every function here validates the ordinal first, so an ordinal outside of `0..Format::COUNT` results in
//! [`Error::InvalidFormatOrdinal`] for all of them, instead of reading past the end of the format LUTs.
//! Callers that already hold a [`Format`] should use its methods directly, those can't fail.

use vkformat_base::EnumCountT;
use vkformat_logging::{log_error, log_verbose};
#[cfg(feature = "validation")]
use vkformat_logging::log_warning;

use crate::{Error, Format, FormatPartition, NumericClass, Result, LOG_CAT};

fn lookup(ordinal: u32) -> Result<Format> {
    let res = Format::from_raw(ordinal);
    #[cfg(feature = "validation")]
    if res.is_err() {
        log_warning!(LOG_CAT, "Format ordinal {ordinal} is out of range, valid ordinals are 0..{}", Format::COUNT);
    }
    res
}

/// Bytes per texel (or per block for compressed formats) of the format with the given ordinal
pub fn get_size(ordinal: u32) -> Result<usize> {
    lookup(ordinal).map(Format::byte_size)
}

/// Number of channels of the format with the given ordinal
pub fn get_channel_count(ordinal: u32) -> Result<u32> {
    lookup(ordinal).map(Format::channel_count)
}

pub fn is_depth_only(ordinal: u32) -> Result<bool> {
    lookup(ordinal).map(Format::is_depth_only)
}

pub fn is_stencil_only(ordinal: u32) -> Result<bool> {
    lookup(ordinal).map(Format::is_stencil_only)
}

pub fn is_depth_and_stencil(ordinal: u32) -> Result<bool> {
    lookup(ordinal).map(Format::is_depth_and_stencil)
}

pub fn is_depth_or_stencil(ordinal: u32) -> Result<bool> {
    lookup(ordinal).map(Format::is_depth_or_stencil)
}

pub fn is_normalized(ordinal: u32) -> Result<bool> {
    lookup(ordinal).map(Format::is_normalized)
}

pub fn is_scaled(ordinal: u32) -> Result<bool> {
    lookup(ordinal).map(Format::is_scaled)
}

pub fn is_unsigned_int(ordinal: u32) -> Result<bool> {
    lookup(ordinal).map(Format::is_unsigned_int)
}

pub fn is_signed_int(ordinal: u32) -> Result<bool> {
    lookup(ordinal).map(Format::is_signed_int)
}

pub fn is_integer(ordinal: u32) -> Result<bool> {
    lookup(ordinal).map(Format::is_integer)
}

pub fn is_float(ordinal: u32) -> Result<bool> {
    lookup(ordinal).map(Format::is_float)
}

pub fn is_srgb(ordinal: u32) -> Result<bool> {
    lookup(ordinal).map(Format::is_srgb)
}

pub fn is_compressed(ordinal: u32) -> Result<bool> {
    lookup(ordinal).map(Format::is_compressed)
}

/// Check the format LUTs for internal consistency.
///
/// The checks are:
/// - only [`Format::Undefined`] has a size or channel count of 0, and it is in no partition
/// - the numeric class partitions are pairwise disjoint
/// - the depth/stencil partitions are pairwise disjoint
/// - a format is compressed iff its block extent is not `(1, 1)`
///
/// Each violation is logged, the returned error describes the first one.
pub fn validate() -> Result<()> {
    let mut violations = Vec::new();

    for format in Format::iter() {
        let info = format.info();
        let is_sentinel = format == Format::Undefined;

        if (info.byte_size() == 0) != is_sentinel || (info.channel_count() == 0) != is_sentinel {
            violations.push(format!("{format} has size {} and {} channels", info.byte_size(), info.channel_count()));
        }

        if is_sentinel {
            if let Some(partition) = FormatPartition::iter().find(|partition| partition.contains(format)) {
                violations.push(format!("{format} is in the {partition} partition"));
            }
        } else if format.is_compressed() == (info.block_extent() == (1, 1)) {
            let (width, height) = info.block_extent();
            violations.push(format!("{format} has a {width}x{height} block extent, but compressed = {}", format.is_compressed()));
        }
    }

    let numeric: Vec<FormatPartition> = NumericClass::iter().map(NumericClass::partition).collect();
    let depth_stencil = [FormatPartition::DepthOnly, FormatPartition::StencilOnly, FormatPartition::DepthAndStencil];
    for group in [&numeric[..], &depth_stencil[..]] {
        for (i, a) in group.iter().enumerate() {
            for b in &group[i + 1..] {
                let overlap = a.set().intersection(*b.set());
                if !overlap.is_empty() {
                    violations.push(format!("{a} and {b} overlap: {overlap:?}"));
                }
            }
        }
    }

    for violation in &violations {
        log_error!(LOG_CAT, validate, "{violation}");
    }

    match violations.into_iter().next() {
        Some(first) => Err(Error::InconsistentTable(first)),
        None => {
            log_verbose!(LOG_CAT, "Validated {} formats over {} partitions", Format::COUNT, FormatPartition::COUNT);
            Ok(())
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_range_lookups() {
        assert_eq!(get_size(37), Ok(4));
        assert_eq!(get_channel_count(37), Ok(4));
        assert_eq!(is_normalized(37), Ok(true));
        assert_eq!(is_depth_only(126), Ok(true));
        assert_eq!(is_float(126), Ok(true));
        assert_eq!(is_depth_and_stencil(129), Ok(true));
        assert_eq!(is_stencil_only(127), Ok(true));
        assert_eq!(is_compressed(157), Ok(true));
        assert_eq!(get_size(157), Ok(16));
    }

    #[test]
    fn out_of_range_is_consistent() {
        let ordinal = Format::COUNT as u32;
        let err = Error::InvalidFormatOrdinal(ordinal as i64);
        assert_eq!(get_size(ordinal), Err(err.clone()));
        assert_eq!(get_channel_count(ordinal), Err(err.clone()));

        let predicates: [fn(u32) -> Result<bool>; 12] = [
            is_depth_only,
            is_stencil_only,
            is_depth_and_stencil,
            is_depth_or_stencil,
            is_normalized,
            is_scaled,
            is_unsigned_int,
            is_signed_int,
            is_integer,
            is_float,
            is_srgb,
            is_compressed,
        ];
        for predicate in predicates {
            assert_eq!(predicate(ordinal), Err(err.clone()));
            assert!(predicate(u32::MAX).is_err());
        }
    }

    #[test]
    fn luts_are_consistent() {
        assert_eq!(validate(), Ok(()));
    }
}
