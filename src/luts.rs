//! Format LUTs
//!
//! Every table here is indexed by `Format as usize`, adding a format means adding a row to [`FORMAT_INFO`]
//! and adding it to every partition it belongs to.

use vkformat_base::EnumCountT;

use crate::{Format, FormatInfo, FormatPartition, FormatSet};

use Format::*;

//==============================================================================================================================
// SIZES
//==============================================================================================================================

pub(crate) const FORMAT_INFO: [FormatInfo; Format::COUNT] = [
    //                                          Size, Channels, (Block width, Block height)
    /* Undefined                */ FormatInfo::UNDEFINED,
    /* R4G4UNormPack8           */ FormatInfo::texel( 1, 2),
    /* R4G4B4A4UNormPack16      */ FormatInfo::texel( 2, 4),
    /* B4G4R4A4UNormPack16      */ FormatInfo::texel( 2, 4),
    /* R5G6B5UNormPack16        */ FormatInfo::texel( 2, 3),
    /* B5G6R5UNormPack16        */ FormatInfo::texel( 2, 3),
    /* R5G5B5A1UNormPack16      */ FormatInfo::texel( 2, 4),
    /* B5G5R5A1UNormPack16      */ FormatInfo::texel( 2, 4),
    /* A1R5G5B5UNormPack16      */ FormatInfo::texel( 2, 4),
    /* R8UNorm                  */ FormatInfo::texel( 1, 1),
    /* R8SNorm                  */ FormatInfo::texel( 1, 1),
    /* R8UScaled                */ FormatInfo::texel( 1, 1),
    /* R8SScaled                */ FormatInfo::texel( 1, 1),
    /* R8UInt                   */ FormatInfo::texel( 1, 1),
    /* R8SInt                   */ FormatInfo::texel( 1, 1),
    /* R8Srgb                   */ FormatInfo::texel( 1, 1),
    /* R8G8UNorm                */ FormatInfo::texel( 2, 2),
    /* R8G8SNorm                */ FormatInfo::texel( 2, 2),
    /* R8G8UScaled              */ FormatInfo::texel( 2, 2),
    /* R8G8SScaled              */ FormatInfo::texel( 2, 2),
    /* R8G8UInt                 */ FormatInfo::texel( 2, 2),
    /* R8G8SInt                 */ FormatInfo::texel( 2, 2),
    /* R8G8Srgb                 */ FormatInfo::texel( 2, 2),
    /* R8G8B8UNorm              */ FormatInfo::texel( 3, 3),
    /* R8G8B8SNorm              */ FormatInfo::texel( 3, 3),
    /* R8G8B8UScaled            */ FormatInfo::texel( 3, 3),
    /* R8G8B8SScaled            */ FormatInfo::texel( 3, 3),
    /* R8G8B8UInt               */ FormatInfo::texel( 3, 3),
    /* R8G8B8SInt               */ FormatInfo::texel( 3, 3),
    /* R8G8B8Srgb               */ FormatInfo::texel( 3, 3),
    /* B8G8R8UNorm              */ FormatInfo::texel( 3, 3),
    /* B8G8R8SNorm              */ FormatInfo::texel( 3, 3),
    /* B8G8R8UScaled            */ FormatInfo::texel( 3, 3),
    /* B8G8R8SScaled            */ FormatInfo::texel( 3, 3),
    /* B8G8R8UInt               */ FormatInfo::texel( 3, 3),
    /* B8G8R8SInt               */ FormatInfo::texel( 3, 3),
    /* B8G8R8Srgb               */ FormatInfo::texel( 3, 3),
    /* R8G8B8A8UNorm            */ FormatInfo::texel( 4, 4),
    /* R8G8B8A8SNorm            */ FormatInfo::texel( 4, 4),
    /* R8G8B8A8UScaled          */ FormatInfo::texel( 4, 4),
    /* R8G8B8A8SScaled          */ FormatInfo::texel( 4, 4),
    /* R8G8B8A8UInt             */ FormatInfo::texel( 4, 4),
    /* R8G8B8A8SInt             */ FormatInfo::texel( 4, 4),
    /* R8G8B8A8Srgb             */ FormatInfo::texel( 4, 4),
    /* B8G8R8A8UNorm            */ FormatInfo::texel( 4, 4),
    /* B8G8R8A8SNorm            */ FormatInfo::texel( 4, 4),
    /* B8G8R8A8UScaled          */ FormatInfo::texel( 4, 4),
    /* B8G8R8A8SScaled          */ FormatInfo::texel( 4, 4),
    /* B8G8R8A8UInt             */ FormatInfo::texel( 4, 4),
    /* B8G8R8A8SInt             */ FormatInfo::texel( 4, 4),
    /* B8G8R8A8Srgb             */ FormatInfo::texel( 4, 4),
    /* A8B8G8R8UNormPack32      */ FormatInfo::texel( 4, 4),
    /* A8B8G8R8SNormPack32      */ FormatInfo::texel( 4, 4),
    /* A8B8G8R8UScaledPack32    */ FormatInfo::texel( 4, 4),
    /* A8B8G8R8SScaledPack32    */ FormatInfo::texel( 4, 4),
    /* A8B8G8R8UIntPack32       */ FormatInfo::texel( 4, 4),
    /* A8B8G8R8SIntPack32       */ FormatInfo::texel( 4, 4),
    /* A8B8G8R8SrgbPack32       */ FormatInfo::texel( 4, 4),
    /* A2R10G10B10UNormPack32   */ FormatInfo::texel( 4, 4),
    /* A2R10G10B10SNormPack32   */ FormatInfo::texel( 4, 4),
    /* A2R10G10B10UScaledPack32 */ FormatInfo::texel( 4, 4),
    /* A2R10G10B10SScaledPack32 */ FormatInfo::texel( 4, 4),
    /* A2R10G10B10UIntPack32    */ FormatInfo::texel( 4, 4),
    /* A2R10G10B10SIntPack32    */ FormatInfo::texel( 4, 4),
    /* A2B10G10R10UNormPack32   */ FormatInfo::texel( 4, 4),
    /* A2B10G10R10SNormPack32   */ FormatInfo::texel( 4, 4),
    /* A2B10G10R10UScaledPack32 */ FormatInfo::texel( 4, 4),
    /* A2B10G10R10SScaledPack32 */ FormatInfo::texel( 4, 4),
    /* A2B10G10R10UIntPack32    */ FormatInfo::texel( 4, 4),
    /* A2B10G10R10SIntPack32    */ FormatInfo::texel( 4, 4),
    /* R16UNorm                 */ FormatInfo::texel( 2, 1),
    /* R16SNorm                 */ FormatInfo::texel( 2, 1),
    /* R16UScaled               */ FormatInfo::texel( 2, 1),
    /* R16SScaled               */ FormatInfo::texel( 2, 1),
    /* R16UInt                  */ FormatInfo::texel( 2, 1),
    /* R16SInt                  */ FormatInfo::texel( 2, 1),
    /* R16SFloat                */ FormatInfo::texel( 2, 1),
    /* R16G16UNorm              */ FormatInfo::texel( 4, 2),
    /* R16G16SNorm              */ FormatInfo::texel( 4, 2),
    /* R16G16UScaled            */ FormatInfo::texel( 4, 2),
    /* R16G16SScaled            */ FormatInfo::texel( 4, 2),
    /* R16G16UInt               */ FormatInfo::texel( 4, 2),
    /* R16G16SInt               */ FormatInfo::texel( 4, 2),
    /* R16G16SFloat             */ FormatInfo::texel( 4, 2),
    /* R16G16B16UNorm           */ FormatInfo::texel( 6, 3),
    /* R16G16B16SNorm           */ FormatInfo::texel( 6, 3),
    /* R16G16B16UScaled         */ FormatInfo::texel( 6, 3),
    /* R16G16B16SScaled         */ FormatInfo::texel( 6, 3),
    /* R16G16B16UInt            */ FormatInfo::texel( 6, 3),
    /* R16G16B16SInt            */ FormatInfo::texel( 6, 3),
    /* R16G16B16SFloat          */ FormatInfo::texel( 6, 3),
    /* R16G16B16A16UNorm        */ FormatInfo::texel( 8, 4),
    /* R16G16B16A16SNorm        */ FormatInfo::texel( 8, 4),
    /* R16G16B16A16UScaled      */ FormatInfo::texel( 8, 4),
    /* R16G16B16A16SScaled      */ FormatInfo::texel( 8, 4),
    /* R16G16B16A16UInt         */ FormatInfo::texel( 8, 4),
    /* R16G16B16A16SInt         */ FormatInfo::texel( 8, 4),
    /* R16G16B16A16SFloat       */ FormatInfo::texel( 8, 4),
    /* R32UInt                  */ FormatInfo::texel( 4, 1),
    /* R32SInt                  */ FormatInfo::texel( 4, 1),
    /* R32SFloat                */ FormatInfo::texel( 4, 1),
    /* R32G32UInt               */ FormatInfo::texel( 8, 2),
    /* R32G32SInt               */ FormatInfo::texel( 8, 2),
    /* R32G32SFloat             */ FormatInfo::texel( 8, 2),
    /* R32G32B32UInt            */ FormatInfo::texel(12, 3),
    /* R32G32B32SInt            */ FormatInfo::texel(12, 3),
    /* R32G32B32SFloat          */ FormatInfo::texel(12, 3),
    /* R32G32B32A32UInt         */ FormatInfo::texel(16, 4),
    /* R32G32B32A32SInt         */ FormatInfo::texel(16, 4),
    /* R32G32B32A32SFloat       */ FormatInfo::texel(16, 4),
    /* R64UInt                  */ FormatInfo::texel( 8, 1),
    /* R64SInt                  */ FormatInfo::texel( 8, 1),
    /* R64SFloat                */ FormatInfo::texel( 8, 1),
    /* R64G64UInt               */ FormatInfo::texel(16, 2),
    /* R64G64SInt               */ FormatInfo::texel(16, 2),
    /* R64G64SFloat             */ FormatInfo::texel(16, 2),
    /* R64G64B64UInt            */ FormatInfo::texel(24, 3),
    /* R64G64B64SInt            */ FormatInfo::texel(24, 3),
    /* R64G64B64SFloat          */ FormatInfo::texel(24, 3),
    /* R64G64B64A64UInt         */ FormatInfo::texel(32, 4),
    /* R64G64B64A64SInt         */ FormatInfo::texel(32, 4),
    /* R64G64B64A64SFloat       */ FormatInfo::texel(32, 4),
    /* B10G11R11UFloatPack32    */ FormatInfo::texel( 4, 3),
    /* E5B9G9R9UFloatPack32     */ FormatInfo::texel( 4, 3),
    /* D16UNorm                 */ FormatInfo::texel( 2, 1),
    /* X8D24UNormPack32         */ FormatInfo::texel( 4, 1),
    /* D32SFloat                */ FormatInfo::texel( 4, 1),
    /* S8UInt                   */ FormatInfo::texel( 1, 1),
    /* D16UNormS8UInt           */ FormatInfo::texel( 3, 2),
    /* D24UNormS8UInt           */ FormatInfo::texel( 4, 2),
    /* D32SFloatS8UInt          */ FormatInfo::texel( 5, 2),
    /* BC1RgbUNormBlock         */ FormatInfo::block( 8, 3,  4,  4),
    /* BC1RgbSrgbBlock          */ FormatInfo::block( 8, 3,  4,  4),
    /* BC1RgbaUNormBlock        */ FormatInfo::block( 8, 4,  4,  4),
    /* BC1RgbaSrgbBlock         */ FormatInfo::block( 8, 4,  4,  4),
    /* BC2UNormBlock            */ FormatInfo::block(16, 4,  4,  4),
    /* BC2SrgbBlock             */ FormatInfo::block(16, 4,  4,  4),
    /* BC3UNormBlock            */ FormatInfo::block(16, 4,  4,  4),
    /* BC3SrgbBlock             */ FormatInfo::block(16, 4,  4,  4),
    /* BC4UNormBlock            */ FormatInfo::block( 8, 1,  4,  4),
    /* BC4SNormBlock            */ FormatInfo::block( 8, 1,  4,  4),
    /* BC5UNormBlock            */ FormatInfo::block(16, 2,  4,  4),
    /* BC5SNormBlock            */ FormatInfo::block(16, 2,  4,  4),
    /* BC6HUFloatBlock          */ FormatInfo::block(16, 3,  4,  4),
    /* BC6HSFloatBlock          */ FormatInfo::block(16, 3,  4,  4),
    /* BC7UNormBlock            */ FormatInfo::block(16, 4,  4,  4),
    /* BC7SrgbBlock             */ FormatInfo::block(16, 4,  4,  4),
    /* ETC2R8G8B8UNormBlock     */ FormatInfo::block( 8, 3,  4,  4),
    /* ETC2R8G8B8SrgbBlock      */ FormatInfo::block( 8, 3,  4,  4),
    /* ETC2R8G8B8A1UNormBlock   */ FormatInfo::block( 8, 4,  4,  4),
    /* ETC2R8G8B8A1SrgbBlock    */ FormatInfo::block( 8, 4,  4,  4),
    /* ETC2R8G8B8A8UNormBlock   */ FormatInfo::block(16, 4,  4,  4),
    /* ETC2R8G8B8A8SrgbBlock    */ FormatInfo::block(16, 4,  4,  4),
    /* EACR11UNormBlock         */ FormatInfo::block( 8, 1,  4,  4),
    /* EACR11SNormBlock         */ FormatInfo::block( 8, 1,  4,  4),
    /* EACR11G11UNormBlock      */ FormatInfo::block(16, 2,  4,  4),
    /* EACR11G11SNormBlock      */ FormatInfo::block(16, 2,  4,  4),
    /* ASTC4x4UNormBlock        */ FormatInfo::block(16, 4,  4,  4),
    /* ASTC4x4SrgbBlock         */ FormatInfo::block(16, 4,  4,  4),
    /* ASTC5x4UNormBlock        */ FormatInfo::block(16, 4,  5,  4),
    /* ASTC5x4SrgbBlock         */ FormatInfo::block(16, 4,  5,  4),
    /* ASTC5x5UNormBlock        */ FormatInfo::block(16, 4,  5,  5),
    /* ASTC5x5SrgbBlock         */ FormatInfo::block(16, 4,  5,  5),
    /* ASTC6x5UNormBlock        */ FormatInfo::block(16, 4,  6,  5),
    /* ASTC6x5SrgbBlock         */ FormatInfo::block(16, 4,  6,  5),
    /* ASTC6x6UNormBlock        */ FormatInfo::block(16, 4,  6,  6),
    /* ASTC6x6SrgbBlock         */ FormatInfo::block(16, 4,  6,  6),
    /* ASTC8x5UNormBlock        */ FormatInfo::block(16, 4,  8,  5),
    /* ASTC8x5SrgbBlock         */ FormatInfo::block(16, 4,  8,  5),
    /* ASTC8x6UNormBlock        */ FormatInfo::block(16, 4,  8,  6),
    /* ASTC8x6SrgbBlock         */ FormatInfo::block(16, 4,  8,  6),
    /* ASTC8x8UNormBlock        */ FormatInfo::block(16, 4,  8,  8),
    /* ASTC8x8SrgbBlock         */ FormatInfo::block(16, 4,  8,  8),
    /* ASTC10x5UNormBlock       */ FormatInfo::block(16, 4, 10,  5),
    /* ASTC10x5SrgbBlock        */ FormatInfo::block(16, 4, 10,  5),
    /* ASTC10x6UNormBlock       */ FormatInfo::block(16, 4, 10,  6),
    /* ASTC10x6SrgbBlock        */ FormatInfo::block(16, 4, 10,  6),
    /* ASTC10x8UNormBlock       */ FormatInfo::block(16, 4, 10,  8),
    /* ASTC10x8SrgbBlock        */ FormatInfo::block(16, 4, 10,  8),
    /* ASTC10x10UNormBlock      */ FormatInfo::block(16, 4, 10, 10),
    /* ASTC10x10SrgbBlock       */ FormatInfo::block(16, 4, 10, 10),
    /* ASTC12x10UNormBlock      */ FormatInfo::block(16, 4, 12, 10),
    /* ASTC12x10SrgbBlock       */ FormatInfo::block(16, 4, 12, 10),
    /* ASTC12x12UNormBlock      */ FormatInfo::block(16, 4, 12, 12),
    /* ASTC12x12SrgbBlock       */ FormatInfo::block(16, 4, 12, 12),
];

//==============================================================================================================================
// PARTITIONS
//==============================================================================================================================

pub(crate) const DEPTH_ONLY: FormatSet = FormatSet::from_formats(&[
    D16UNorm,
    X8D24UNormPack32,
    D32SFloat,
]);

pub(crate) const STENCIL_ONLY: FormatSet = FormatSet::from_formats(&[
    S8UInt,
]);

pub(crate) const DEPTH_AND_STENCIL: FormatSet = FormatSet::from_formats(&[
    D16UNormS8UInt,
    D24UNormS8UInt,
    D32SFloatS8UInt,
]);

pub(crate) const NORMALIZED: FormatSet = FormatSet::from_formats(&[
    // Packed
    R4G4UNormPack8,
    R4G4B4A4UNormPack16,
    B4G4R4A4UNormPack16,
    R5G6B5UNormPack16,
    B5G6R5UNormPack16,
    R5G5B5A1UNormPack16,
    B5G5R5A1UNormPack16,
    A1R5G5B5UNormPack16,
    A8B8G8R8UNormPack32,
    A8B8G8R8SNormPack32,
    A2R10G10B10UNormPack32,
    A2R10G10B10SNormPack32,
    A2B10G10R10UNormPack32,
    A2B10G10R10SNormPack32,
    // 8-bit
    R8UNorm,
    R8SNorm,
    R8G8UNorm,
    R8G8SNorm,
    R8G8B8UNorm,
    R8G8B8SNorm,
    B8G8R8UNorm,
    B8G8R8SNorm,
    R8G8B8A8UNorm,
    R8G8B8A8SNorm,
    B8G8R8A8UNorm,
    B8G8R8A8SNorm,
    // 16-bit
    R16UNorm,
    R16SNorm,
    R16G16UNorm,
    R16G16SNorm,
    R16G16B16UNorm,
    R16G16B16SNorm,
    R16G16B16A16UNorm,
    R16G16B16A16SNorm,
    // Depth
    D16UNorm,
    X8D24UNormPack32,
    // Block compression
    BC1RgbUNormBlock,
    BC1RgbaUNormBlock,
    BC2UNormBlock,
    BC3UNormBlock,
    BC4UNormBlock,
    BC4SNormBlock,
    BC5UNormBlock,
    BC5SNormBlock,
    BC7UNormBlock,
    ETC2R8G8B8UNormBlock,
    ETC2R8G8B8A1UNormBlock,
    ETC2R8G8B8A8UNormBlock,
    EACR11UNormBlock,
    EACR11SNormBlock,
    EACR11G11UNormBlock,
    EACR11G11SNormBlock,
    ASTC4x4UNormBlock,
    ASTC5x4UNormBlock,
    ASTC5x5UNormBlock,
    ASTC6x5UNormBlock,
    ASTC6x6UNormBlock,
    ASTC8x5UNormBlock,
    ASTC8x6UNormBlock,
    ASTC8x8UNormBlock,
    ASTC10x5UNormBlock,
    ASTC10x6UNormBlock,
    ASTC10x8UNormBlock,
    ASTC10x10UNormBlock,
    ASTC12x10UNormBlock,
    ASTC12x12UNormBlock,
]);

pub(crate) const SCALED: FormatSet = FormatSet::from_formats(&[
    R8UScaled,
    R8SScaled,
    R8G8UScaled,
    R8G8SScaled,
    R8G8B8UScaled,
    R8G8B8SScaled,
    B8G8R8UScaled,
    B8G8R8SScaled,
    R8G8B8A8UScaled,
    R8G8B8A8SScaled,
    B8G8R8A8UScaled,
    B8G8R8A8SScaled,
    A8B8G8R8UScaledPack32,
    A8B8G8R8SScaledPack32,
    A2R10G10B10UScaledPack32,
    A2R10G10B10SScaledPack32,
    A2B10G10R10UScaledPack32,
    A2B10G10R10SScaledPack32,
    R16UScaled,
    R16SScaled,
    R16G16UScaled,
    R16G16SScaled,
    R16G16B16UScaled,
    R16G16B16SScaled,
    R16G16B16A16UScaled,
    R16G16B16A16SScaled,
]);

pub(crate) const UNSIGNED_INT: FormatSet = FormatSet::from_formats(&[
    R8UInt,
    R8G8UInt,
    R8G8B8UInt,
    B8G8R8UInt,
    R8G8B8A8UInt,
    B8G8R8A8UInt,
    A8B8G8R8UIntPack32,
    A2R10G10B10UIntPack32,
    A2B10G10R10UIntPack32,
    R16UInt,
    R16G16UInt,
    R16G16B16UInt,
    R16G16B16A16UInt,
    R32UInt,
    R32G32UInt,
    R32G32B32UInt,
    R32G32B32A32UInt,
    R64UInt,
    R64G64UInt,
    R64G64B64UInt,
    R64G64B64A64UInt,
    S8UInt,
]);

pub(crate) const SIGNED_INT: FormatSet = FormatSet::from_formats(&[
    R8SInt,
    R8G8SInt,
    R8G8B8SInt,
    B8G8R8SInt,
    R8G8B8A8SInt,
    B8G8R8A8SInt,
    A8B8G8R8SIntPack32,
    A2R10G10B10SIntPack32,
    A2B10G10R10SIntPack32,
    R16SInt,
    R16G16SInt,
    R16G16B16SInt,
    R16G16B16A16SInt,
    R32SInt,
    R32G32SInt,
    R32G32B32SInt,
    R32G32B32A32SInt,
    R64SInt,
    R64G64SInt,
    R64G64B64SInt,
    R64G64B64A64SInt,
]);

pub(crate) const FLOAT: FormatSet = FormatSet::from_formats(&[
    R16SFloat,
    R16G16SFloat,
    R16G16B16SFloat,
    R16G16B16A16SFloat,
    R32SFloat,
    R32G32SFloat,
    R32G32B32SFloat,
    R32G32B32A32SFloat,
    R64SFloat,
    R64G64SFloat,
    R64G64B64SFloat,
    R64G64B64A64SFloat,
    B10G11R11UFloatPack32,
    E5B9G9R9UFloatPack32,
    D32SFloat,
    BC6HUFloatBlock,
    BC6HSFloatBlock,
]);

pub(crate) const SRGB: FormatSet = FormatSet::from_formats(&[
    R8Srgb,
    R8G8Srgb,
    R8G8B8Srgb,
    B8G8R8Srgb,
    R8G8B8A8Srgb,
    B8G8R8A8Srgb,
    A8B8G8R8SrgbPack32,
    BC1RgbSrgbBlock,
    BC1RgbaSrgbBlock,
    BC2SrgbBlock,
    BC3SrgbBlock,
    BC7SrgbBlock,
    ETC2R8G8B8SrgbBlock,
    ETC2R8G8B8A1SrgbBlock,
    ETC2R8G8B8A8SrgbBlock,
    ASTC4x4SrgbBlock,
    ASTC5x4SrgbBlock,
    ASTC5x5SrgbBlock,
    ASTC6x5SrgbBlock,
    ASTC6x6SrgbBlock,
    ASTC8x5SrgbBlock,
    ASTC8x6SrgbBlock,
    ASTC8x8SrgbBlock,
    ASTC10x5SrgbBlock,
    ASTC10x6SrgbBlock,
    ASTC10x8SrgbBlock,
    ASTC10x10SrgbBlock,
    ASTC12x10SrgbBlock,
    ASTC12x12SrgbBlock,
]);

pub(crate) const COMPRESSED: FormatSet = FormatSet::from_formats(&[
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
]);

/// Partition sets, indexed by `FormatPartition as usize`
pub(crate) static PARTITION_SETS: [FormatSet; FormatPartition::COUNT] = [
    /* DepthOnly       */ DEPTH_ONLY,
    /* StencilOnly     */ STENCIL_ONLY,
    /* DepthAndStencil */ DEPTH_AND_STENCIL,
    /* Normalized      */ NORMALIZED,
    /* Scaled          */ SCALED,
    /* UnsignedInt     */ UNSIGNED_INT,
    /* SignedInt       */ SIGNED_INT,
    /* Float           */ FLOAT,
    /* Srgb            */ SRGB,
    /* Compressed      */ COMPRESSED,
];
