use core::str::FromStr;

use static_assertions::const_assert_eq;
use vkformat_base::{EnumCountT, EnumFromIndexT, EnumFromNameT};
use vkformat_macros::{EnumCount, EnumDisplay, EnumFromIndex, EnumFromName};

use crate::{luts::*, Error, FormatSet, Result};

bitflags::bitflags! {
    /// Aspects of a texel that a format stores
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    pub struct FormatAspect: u8 {
        /// Color channels
        const COLOR   = 0x1;
        /// Depth channel
        const DEPTH   = 0x2;
        /// Stencil channel
        const STENCIL = 0x4;
    }
}

/// Numeric interpretation of the channels of a format
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, EnumCount, EnumFromIndex, EnumDisplay)]
pub enum NumericClass {
    /// Unsigned or signed normalized, i.e. `UNORM` and `SNORM`
    Normalized,
    /// Unsigned or signed integer converted to float, i.e. `USCALED` and `SSCALED`
    Scaled,
    /// Unsigned integer
    UnsignedInt,
    /// Signed integer
    SignedInt,
    /// Signed or unsigned floating point
    Float,
    /// Unsigned normalized with sRGB encoding
    Srgb,
}

impl NumericClass {
    /// Get the partition containing all formats of this class
    pub const fn partition(self) -> FormatPartition {
        match self {
            NumericClass::Normalized  => FormatPartition::Normalized,
            NumericClass::Scaled      => FormatPartition::Scaled,
            NumericClass::UnsignedInt => FormatPartition::UnsignedInt,
            NumericClass::SignedInt   => FormatPartition::SignedInt,
            NumericClass::Float       => FormatPartition::Float,
            NumericClass::Srgb        => FormatPartition::Srgb,
        }
    }

    /// Iterate over all numeric classes
    pub fn iter() -> impl Iterator<Item = NumericClass> + Clone {
        (0..Self::COUNT).filter_map(Self::from_idx)
    }
}

/// Hand-curated classification partition over all formats
///
/// Partitions are not derived from the format names, each one is an explicit list in the format LUTs.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, EnumCount, EnumFromIndex, EnumDisplay)]
pub enum FormatPartition {
    /// Formats only containing depth
    DepthOnly,
    /// Formats only containing stencil
    StencilOnly,
    /// Formats containing both depth and stencil
    DepthAndStencil,
    /// `UNORM` and `SNORM` formats
    Normalized,
    /// `USCALED` and `SSCALED` formats
    Scaled,
    /// `UINT` formats
    UnsignedInt,
    /// `SINT` formats
    SignedInt,
    /// `SFLOAT` and `UFLOAT` formats
    Float,
    /// `SRGB` formats
    Srgb,
    /// Block-compressed formats
    Compressed,
}

impl FormatPartition {
    /// Get the set of formats in this partition
    pub fn set(self) -> &'static FormatSet {
        &PARTITION_SETS[self as usize]
    }

    /// Check if the partition contains `format`
    pub fn contains(self, format: Format) -> bool {
        self.set().contains(format)
    }

    /// Iterate over all partitions
    pub fn iter() -> impl Iterator<Item = FormatPartition> + Clone {
        (0..Self::COUNT).filter_map(Self::from_idx)
    }
}

/// Size and layout of a single format
///
/// For block-compressed formats, the size describes a whole block of `block_extent` texels.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct FormatInfo {
    byte_size:     u8,
    channel_count: u8,
    block_extent:  (u8, u8),
}

impl FormatInfo {
    pub(crate) const UNDEFINED: FormatInfo = FormatInfo { byte_size: 0, channel_count: 0, block_extent: (0, 0) };

    /// Info of an uncompressed format
    pub(crate) const fn texel(byte_size: u8, channel_count: u8) -> Self {
        Self { byte_size, channel_count, block_extent: (1, 1) }
    }

    /// Info of a block-compressed format
    pub(crate) const fn block(byte_size: u8, channel_count: u8, block_width: u8, block_height: u8) -> Self {
        Self { byte_size, channel_count, block_extent: (block_width, block_height) }
    }

    /// Bytes per texel, or per block for compressed formats
    pub const fn byte_size(&self) -> usize {
        self.byte_size as usize
    }

    /// Number of channels
    pub const fn channel_count(&self) -> u32 {
        self.channel_count as u32
    }

    /// Width and height in texels covered by `byte_size` bytes
    pub const fn block_extent(&self) -> (u32, u32) {
        (self.block_extent.0 as u32, self.block_extent.1 as u32)
    }
}

/// Vulkan core format
///
/// The discriminant of each variant is its `VkFormat` value, the formats cover the dense range `0..Format::COUNT`.
#[repr(u32)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Default, EnumCount, EnumFromIndex, EnumDisplay, EnumFromName)]
pub enum Format {
    /// No format, the only format without a size or channels
    #[default]
    Undefined,

    // Packed 4/5/6-bit component
    R4G4UNormPack8,
    R4G4B4A4UNormPack16,
    B4G4R4A4UNormPack16,
    R5G6B5UNormPack16,
    B5G6R5UNormPack16,
    R5G5B5A1UNormPack16,
    B5G5R5A1UNormPack16,
    A1R5G5B5UNormPack16,

    // 8-bit component R
    R8UNorm,
    R8SNorm,
    R8UScaled,
    R8SScaled,
    R8UInt,
    R8SInt,
    R8Srgb,

    // 8-bit component RG
    R8G8UNorm,
    R8G8SNorm,
    R8G8UScaled,
    R8G8SScaled,
    R8G8UInt,
    R8G8SInt,
    R8G8Srgb,

    // 8-bit component RGB
    R8G8B8UNorm,
    R8G8B8SNorm,
    R8G8B8UScaled,
    R8G8B8SScaled,
    R8G8B8UInt,
    R8G8B8SInt,
    R8G8B8Srgb,

    // 8-bit component BGR
    B8G8R8UNorm,
    B8G8R8SNorm,
    B8G8R8UScaled,
    B8G8R8SScaled,
    B8G8R8UInt,
    B8G8R8SInt,
    B8G8R8Srgb,

    // 8-bit component RGBA
    R8G8B8A8UNorm,
    R8G8B8A8SNorm,
    R8G8B8A8UScaled,
    R8G8B8A8SScaled,
    R8G8B8A8UInt,
    R8G8B8A8SInt,
    R8G8B8A8Srgb,

    // 8-bit component BGRA
    B8G8R8A8UNorm,
    B8G8R8A8SNorm,
    B8G8R8A8UScaled,
    B8G8R8A8SScaled,
    B8G8R8A8UInt,
    B8G8R8A8SInt,
    B8G8R8A8Srgb,

    // 8-bit component ABGR, packed in 32-bits
    A8B8G8R8UNormPack32,
    A8B8G8R8SNormPack32,
    A8B8G8R8UScaledPack32,
    A8B8G8R8SScaledPack32,
    A8B8G8R8UIntPack32,
    A8B8G8R8SIntPack32,
    A8B8G8R8SrgbPack32,

    // 10-bit component RGB with 2-bit A, packed in 32-bits
    A2R10G10B10UNormPack32,
    A2R10G10B10SNormPack32,
    A2R10G10B10UScaledPack32,
    A2R10G10B10SScaledPack32,
    A2R10G10B10UIntPack32,
    A2R10G10B10SIntPack32,
    A2B10G10R10UNormPack32,
    A2B10G10R10SNormPack32,
    A2B10G10R10UScaledPack32,
    A2B10G10R10SScaledPack32,
    A2B10G10R10UIntPack32,
    A2B10G10R10SIntPack32,

    // 16-bit component R
    R16UNorm,
    R16SNorm,
    R16UScaled,
    R16SScaled,
    R16UInt,
    R16SInt,
    R16SFloat,

    // 16-bit component RG
    R16G16UNorm,
    R16G16SNorm,
    R16G16UScaled,
    R16G16SScaled,
    R16G16UInt,
    R16G16SInt,
    R16G16SFloat,

    // 16-bit component RGB
    R16G16B16UNorm,
    R16G16B16SNorm,
    R16G16B16UScaled,
    R16G16B16SScaled,
    R16G16B16UInt,
    R16G16B16SInt,
    R16G16B16SFloat,

    // 16-bit component RGBA
    R16G16B16A16UNorm,
    R16G16B16A16SNorm,
    R16G16B16A16UScaled,
    R16G16B16A16SScaled,
    R16G16B16A16UInt,
    R16G16B16A16SInt,
    R16G16B16A16SFloat,

    // 32-bit component
    R32UInt,
    R32SInt,
    R32SFloat,
    R32G32UInt,
    R32G32SInt,
    R32G32SFloat,
    R32G32B32UInt,
    R32G32B32SInt,
    R32G32B32SFloat,
    R32G32B32A32UInt,
    R32G32B32A32SInt,
    R32G32B32A32SFloat,

    // 64-bit component
    R64UInt,
    R64SInt,
    R64SFloat,
    R64G64UInt,
    R64G64SInt,
    R64G64SFloat,
    R64G64B64UInt,
    R64G64B64SInt,
    R64G64B64SFloat,
    R64G64B64A64UInt,
    R64G64B64A64SInt,
    R64G64B64A64SFloat,

    // Packed unsigned float
    /// 11-bit R and G, and 10-bit B
    B10G11R11UFloatPack32,
    /// 9-bit component RGB with 5-bit shared exponent
    E5B9G9R9UFloatPack32,

    // Depth/stencil
    /// 16-bit depth
    D16UNorm,
    /// 24-bit depth, packed in 32-bits
    X8D24UNormPack32,
    /// 32-bit depth
    D32SFloat,
    /// 8-bit stencil
    S8UInt,
    /// 16-bit depth with 8-bit stencil
    D16UNormS8UInt,
    /// 24-bit depth with 8-bit stencil
    D24UNormS8UInt,
    /// 32-bit depth with 8-bit stencil
    D32SFloatS8UInt,

    // Block compression
    BC1RgbUNormBlock,
    BC1RgbSrgbBlock,
    BC1RgbaUNormBlock,
    BC1RgbaSrgbBlock,
    BC2UNormBlock,
    BC2SrgbBlock,
    BC3UNormBlock,
    BC3SrgbBlock,
    BC4UNormBlock,
    BC4SNormBlock,
    BC5UNormBlock,
    BC5SNormBlock,
    BC6HUFloatBlock,
    BC6HSFloatBlock,
    BC7UNormBlock,
    BC7SrgbBlock,

    // Ericsson texture compression
    ETC2R8G8B8UNormBlock,
    ETC2R8G8B8SrgbBlock,
    ETC2R8G8B8A1UNormBlock,
    ETC2R8G8B8A1SrgbBlock,
    ETC2R8G8B8A8UNormBlock,
    ETC2R8G8B8A8SrgbBlock,
    EACR11UNormBlock,
    EACR11SNormBlock,
    EACR11G11UNormBlock,
    EACR11G11SNormBlock,

    // Adaptive scalable texture compression
    ASTC4x4UNormBlock,
    ASTC4x4SrgbBlock,
    ASTC5x4UNormBlock,
    ASTC5x4SrgbBlock,
    ASTC5x5UNormBlock,
    ASTC5x5SrgbBlock,
    ASTC6x5UNormBlock,
    ASTC6x5SrgbBlock,
    ASTC6x6UNormBlock,
    ASTC6x6SrgbBlock,
    ASTC8x5UNormBlock,
    ASTC8x5SrgbBlock,
    ASTC8x6UNormBlock,
    ASTC8x6SrgbBlock,
    ASTC8x8UNormBlock,
    ASTC8x8SrgbBlock,
    ASTC10x5UNormBlock,
    ASTC10x5SrgbBlock,
    ASTC10x6UNormBlock,
    ASTC10x6SrgbBlock,
    ASTC10x8UNormBlock,
    ASTC10x8SrgbBlock,
    ASTC10x10UNormBlock,
    ASTC10x10SrgbBlock,
    ASTC12x10UNormBlock,
    ASTC12x10SrgbBlock,
    ASTC12x12UNormBlock,
    ASTC12x12SrgbBlock,
}

// All LUTs are indexed by `format as usize`, which requires the discriminants to be dense
const_assert_eq!(Format::Undefined as usize, 0);
const_assert_eq!(Format::ASTC12x12SrgbBlock as usize + 1, Format::COUNT);

impl Format {
    /// Get the format with the given `VkFormat` value
    pub fn from_raw(raw: u32) -> Result<Format> {
        Self::from_idx(raw as usize).ok_or(Error::InvalidFormatOrdinal(raw as i64))
    }

    /// Get the `VkFormat` value of the format
    pub const fn as_raw(self) -> u32 {
        self as u32
    }

    /// Get the size and layout info for the format
    pub const fn info(self) -> FormatInfo {
        FORMAT_INFO[self as usize]
    }

    /// Bytes per texel, or bytes per block for a compressed format
    pub const fn byte_size(self) -> usize {
        self.info().byte_size()
    }

    /// Number of channels per texel
    pub const fn channel_count(self) -> u32 {
        self.info().channel_count()
    }

    /// Width and height of a block in texels, `(1, 1)` for uncompressed formats
    pub const fn block_extent(self) -> (u32, u32) {
        self.info().block_extent()
    }

    pub const fn is_depth_only(self) -> bool {
        DEPTH_ONLY.contains(self)
    }

    pub const fn is_stencil_only(self) -> bool {
        STENCIL_ONLY.contains(self)
    }

    pub const fn is_depth_and_stencil(self) -> bool {
        DEPTH_AND_STENCIL.contains(self)
    }

    /// Does the format contain depth, stencil, or both?
    pub const fn is_depth_or_stencil(self) -> bool {
        self.is_depth_and_stencil() || self.is_depth_only() || self.is_stencil_only()
    }

    /// Is the format a `UNORM` or `SNORM` format?
    ///
    /// sRGB formats are not considered normalized, see [`Format::is_srgb`].
    pub const fn is_normalized(self) -> bool {
        NORMALIZED.contains(self)
    }

    /// Is the format a `USCALED` or `SSCALED` format?
    pub const fn is_scaled(self) -> bool {
        SCALED.contains(self)
    }

    pub const fn is_unsigned_int(self) -> bool {
        UNSIGNED_INT.contains(self)
    }

    pub const fn is_signed_int(self) -> bool {
        SIGNED_INT.contains(self)
    }

    /// Is the format a signed or unsigned integer format?
    pub const fn is_integer(self) -> bool {
        self.is_unsigned_int() || self.is_signed_int()
    }

    /// Is the format a floating point format, including packed unsigned floats and `BC6H`?
    pub const fn is_float(self) -> bool {
        FLOAT.contains(self)
    }

    pub const fn is_srgb(self) -> bool {
        SRGB.contains(self)
    }

    /// Is the format a block-compressed format (BC, ETC2, EAC or ASTC)?
    pub const fn is_compressed(self) -> bool {
        COMPRESSED.contains(self)
    }

    /// Get the texel aspects stored by the format
    pub fn aspect(self) -> FormatAspect {
        if self == Format::Undefined {
            FormatAspect::empty()
        } else if self.is_depth_and_stencil() {
            FormatAspect::DEPTH | FormatAspect::STENCIL
        } else if self.is_depth_only() {
            FormatAspect::DEPTH
        } else if self.is_stencil_only() {
            FormatAspect::STENCIL
        } else {
            FormatAspect::COLOR
        }
    }

    /// Get the numeric class of the format
    ///
    /// Returns `None` for [`Format::Undefined`] and for combined depth/stencil formats, as their channels don't share a class.
    pub fn numeric_class(self) -> Option<NumericClass> {
        NumericClass::iter().find(|class| class.partition().contains(self))
    }

    /// Iterate over all formats, in ordinal order
    pub fn iter() -> impl Iterator<Item = Format> + Clone {
        (0..Self::COUNT).filter_map(Self::from_idx)
    }
}

impl From<Format> for u32 {
    fn from(format: Format) -> Self {
        format.as_raw()
    }
}

impl TryFrom<u32> for Format {
    type Error = Error;

    fn try_from(raw: u32) -> Result<Self> {
        Format::from_raw(raw)
    }
}

impl TryFrom<i32> for Format {
    type Error = Error;

    fn try_from(raw: i32) -> Result<Self> {
        u32::try_from(raw)
            .map_err(|_| Error::InvalidFormatOrdinal(raw as i64))
            .and_then(Format::from_raw)
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s).ok_or_else(|| Error::UnknownFormatName(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_no_numeric_class_except(format: Format, class: NumericClass) {
        for other in NumericClass::iter().filter(|other| *other != class) {
            assert!(!other.partition().contains(format), "{format} is unexpectedly in {other}");
        }
    }

    #[test]
    fn rgba8_unorm() {
        let format = Format::R8G8B8A8UNorm;
        assert_eq!(format.byte_size(), 4);
        assert_eq!(format.channel_count(), 4);
        assert!(format.is_normalized());
        assert!(!format.is_float());
        assert!(!format.is_integer());
        assert!(!format.is_srgb());
        assert!(!format.is_compressed());
        assert_eq!(format.aspect(), FormatAspect::COLOR);
        assert_eq!(format.numeric_class(), Some(NumericClass::Normalized));
    }

    #[test]
    fn d32_sfloat() {
        let format = Format::D32SFloat;
        assert_eq!(format.byte_size(), 4);
        assert_eq!(format.channel_count(), 1);
        assert!(format.is_depth_only());
        assert!(format.is_depth_or_stencil());
        assert!(!format.is_depth_and_stencil());
        assert!(format.is_float());
        assert_eq!(format.aspect(), FormatAspect::DEPTH);
    }

    #[test]
    fn d24_unorm_s8_uint() {
        let format = Format::D24UNormS8UInt;
        assert_eq!(format.byte_size(), 4);
        assert_eq!(format.channel_count(), 2);
        assert!(format.is_depth_and_stencil());
        assert!(format.is_depth_or_stencil());
        assert!(!format.is_depth_only());
        assert!(!format.is_stencil_only());
        assert_eq!(format.aspect(), FormatAspect::DEPTH | FormatAspect::STENCIL);
        assert_eq!(format.numeric_class(), None);
    }

    #[test]
    fn s8_uint() {
        let format = Format::S8UInt;
        assert!(format.is_stencil_only());
        assert!(format.is_depth_or_stencil());
        assert!(format.is_unsigned_int());
        assert_eq!(format.aspect(), FormatAspect::STENCIL);
    }

    #[test]
    fn srgb_is_not_normalized() {
        for format in [Format::R8G8B8A8Srgb, Format::B8G8R8A8Srgb, Format::A8B8G8R8SrgbPack32] {
            assert!(format.is_srgb());
            assert!(!format.is_normalized());
            assert_eq!(format.channel_count(), 4);
            assert_no_numeric_class_except(format, NumericClass::Srgb);
        }
    }

    #[test]
    fn astc_4x4_unorm() {
        let format = Format::ASTC4x4UNormBlock;
        assert!(format.is_compressed());
        assert_eq!(format.byte_size(), 16);
        assert_eq!(format.channel_count(), 4);
        assert_eq!(format.block_extent(), (4, 4));
        assert!(format.is_normalized());
    }

    #[test]
    fn astc_block_extents() {
        assert_eq!(Format::ASTC5x4SrgbBlock.block_extent(), (5, 4));
        assert_eq!(Format::ASTC10x8UNormBlock.block_extent(), (10, 8));
        assert_eq!(Format::ASTC12x12SrgbBlock.block_extent(), (12, 12));
    }

    #[test]
    fn bc_and_etc_blocks() {
        assert_eq!(Format::BC1RgbUNormBlock.byte_size(), 8);
        assert_eq!(Format::BC1RgbUNormBlock.channel_count(), 3);
        assert_eq!(Format::BC4UNormBlock.channel_count(), 1);
        assert_eq!(Format::BC5SNormBlock.channel_count(), 2);
        assert_eq!(Format::BC7SrgbBlock.byte_size(), 16);
        assert_eq!(Format::ETC2R8G8B8A8UNormBlock.byte_size(), 16);
        assert_eq!(Format::EACR11UNormBlock.byte_size(), 8);
        assert!(Format::BC6HSFloatBlock.is_float());
        assert!(Format::BC1RgbaSrgbBlock.is_srgb());
        assert_eq!(Format::BC2UNormBlock.block_extent(), (4, 4));
    }

    #[test]
    fn undefined_is_empty() {
        let format = Format::Undefined;
        assert_eq!(format.byte_size(), 0);
        assert_eq!(format.channel_count(), 0);
        assert_eq!(format.block_extent(), (0, 0));
        assert!(format.aspect().is_empty());
        assert_eq!(format.numeric_class(), None);
        for partition in FormatPartition::iter() {
            assert!(!partition.contains(format), "Undefined is in {partition}");
        }
        assert_eq!(Format::default(), Format::Undefined);
    }

    #[test]
    fn raw_conversion() {
        assert_eq!(Format::from_raw(0), Ok(Format::Undefined));
        assert_eq!(Format::from_raw(37), Ok(Format::R8G8B8A8UNorm));
        assert_eq!(Format::from_raw(126), Ok(Format::D32SFloat));
        assert_eq!(Format::from_raw(184), Ok(Format::ASTC12x12SrgbBlock));
        assert_eq!(Format::from_raw(185), Err(Error::InvalidFormatOrdinal(185)));
        assert_eq!(Format::try_from(-1i32), Err(Error::InvalidFormatOrdinal(-1)));
        assert_eq!(Format::try_from(129i32), Ok(Format::D24UNormS8UInt));
        assert_eq!(u32::from(Format::BC7SrgbBlock), 146);
    }

    #[test]
    fn names() {
        assert_eq!(Format::R16G16B16A16SFloat.to_string(), "R16G16B16A16SFloat");
        assert_eq!(format!("{:<10}|", Format::R8UNorm), "R8UNorm   |");
        assert_eq!("ASTC6x5SrgbBlock".parse::<Format>(), Ok(Format::ASTC6x5SrgbBlock));
        assert_eq!("r8unorm".parse::<Format>(), Err(Error::UnknownFormatName("r8unorm".to_string())));
        assert_eq!(FormatPartition::DepthAndStencil.to_string(), "DepthAndStencil");
    }
}
