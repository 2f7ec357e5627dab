use vkformat::*;

#[test]
fn only_undefined_is_empty() {
    for format in Format::iter() {
        let empty = format.byte_size() == 0 || format.channel_count() == 0;
        assert_eq!(empty, format == Format::Undefined, "{format}");
    }
}

#[test]
fn depth_or_stencil_is_union() {
    for format in Format::iter() {
        let expected = format.is_depth_only() || format.is_stencil_only() || format.is_depth_and_stencil();
        assert_eq!(format.is_depth_or_stencil(), expected, "{format}");
    }
}

#[test]
fn integer_is_union_of_signed_and_unsigned() {
    for format in Format::iter() {
        assert_eq!(format.is_integer(), format.is_unsigned_int() || format.is_signed_int(), "{format}");
        assert!(!(format.is_unsigned_int() && format.is_signed_int()), "{format} is both signed and unsigned");
    }
}

#[test]
fn numeric_classes_are_exclusive() {
    for format in Format::iter() {
        let classes = [
            format.is_normalized(),
            format.is_scaled(),
            format.is_integer(),
            format.is_float(),
            format.is_srgb(),
        ];
        let count = classes.iter().filter(|is_class| **is_class).count();

        match format {
            Format::Undefined |
            Format::D16UNormS8UInt |
            Format::D24UNormS8UInt |
            Format::D32SFloatS8UInt => assert_eq!(count, 0, "{format}"),
            _ => assert_eq!(count, 1, "{format} is in {count} numeric classes"),
        }
        assert_eq!(format.numeric_class().is_some(), count == 1, "{format}");
    }
}

#[test]
fn compressed_formats_have_blocks() {
    for format in Format::iter().filter(|format| *format != Format::Undefined) {
        assert_eq!(format.is_compressed(), format.block_extent() != (1, 1), "{format}");
    }
}

#[test]
fn aspects_follow_depth_stencil() {
    for format in Format::iter().filter(|format| *format != Format::Undefined) {
        let aspect = format.aspect();
        assert_eq!(aspect.contains(FormatAspect::DEPTH), format.is_depth_only() || format.is_depth_and_stencil(), "{format}");
        assert_eq!(aspect.contains(FormatAspect::STENCIL), format.is_stencil_only() || format.is_depth_and_stencil(), "{format}");
        assert_eq!(aspect.contains(FormatAspect::COLOR), !format.is_depth_or_stencil(), "{format}");
    }
    assert!(Format::Undefined.aspect().is_empty());
}

#[test]
fn partitions_match_predicates() {
    let cases: [(FormatPartition, fn(Format) -> bool); 10] = [
        (FormatPartition::DepthOnly,       Format::is_depth_only),
        (FormatPartition::StencilOnly,     Format::is_stencil_only),
        (FormatPartition::DepthAndStencil, Format::is_depth_and_stencil),
        (FormatPartition::Normalized,      Format::is_normalized),
        (FormatPartition::Scaled,          Format::is_scaled),
        (FormatPartition::UnsignedInt,     Format::is_unsigned_int),
        (FormatPartition::SignedInt,       Format::is_signed_int),
        (FormatPartition::Float,           Format::is_float),
        (FormatPartition::Srgb,            Format::is_srgb),
        (FormatPartition::Compressed,      Format::is_compressed),
    ];

    for (partition, predicate) in cases {
        let from_predicate: FormatSet = Format::iter().filter(|format| predicate(*format)).collect();
        assert_eq!(*partition.set(), from_predicate, "{partition}");
    }
}

/// Numeric class implied by the channel type in the format name
fn class_from_name(name: &str) -> Option<NumericClass> {
    const SUFFIXES: [(&str, NumericClass); 9] = [
        ("Srgb",    NumericClass::Srgb),
        ("UNorm",   NumericClass::Normalized),
        ("SNorm",   NumericClass::Normalized),
        ("UScaled", NumericClass::Scaled),
        ("SScaled", NumericClass::Scaled),
        ("UInt",    NumericClass::UnsignedInt),
        ("SInt",    NumericClass::SignedInt),
        ("SFloat",  NumericClass::Float),
        ("UFloat",  NumericClass::Float),
    ];

    let mut matches = SUFFIXES.iter().filter(|(suffix, _)| name.contains(suffix));
    let class = matches.next().map(|(_, class)| *class);
    assert!(matches.next().is_none(), "{name} names more than one channel type");
    class
}

#[test]
fn numeric_class_matches_name() {
    for format in Format::iter() {
        match format {
            // Depth and stencil channels have different types
            Format::Undefined |
            Format::D16UNormS8UInt |
            Format::D24UNormS8UInt |
            Format::D32SFloatS8UInt => assert_eq!(format.numeric_class(), None, "{format}"),
            _ => assert_eq!(format.numeric_class(), class_from_name(&format.to_string()), "{format}"),
        }
    }
}

#[test]
fn signed_and_unsigned_members() {
    for format in Format::iter() {
        let name = format.to_string();
        assert_eq!(format.is_unsigned_int(), name.contains("UInt") && !format.is_depth_and_stencil(), "{format}");
        assert_eq!(format.is_signed_int(), name.contains("SInt"), "{format}");
    }
    assert!(Format::R8UInt.is_unsigned_int());
    assert!(Format::R8SInt.is_signed_int());
}

#[test]
fn depth_stencil_members() {
    let depth_only: Vec<_> = FormatPartition::DepthOnly.set().iter().collect();
    let stencil_only: Vec<_> = FormatPartition::StencilOnly.set().iter().collect();
    let depth_and_stencil: Vec<_> = FormatPartition::DepthAndStencil.set().iter().collect();

    assert_eq!(depth_only, [Format::D16UNorm, Format::X8D24UNormPack32, Format::D32SFloat]);
    assert_eq!(stencil_only, [Format::S8UInt]);
    assert_eq!(depth_and_stencil, [Format::D16UNormS8UInt, Format::D24UNormS8UInt, Format::D32SFloatS8UInt]);
}

#[test]
fn compressed_members_and_extents() {
    for format in Format::iter() {
        let name = format.to_string();
        assert_eq!(format.is_compressed(), name.ends_with("Block"), "{format}");

        if let Some(dims) = name.strip_prefix("ASTC") {
            let (width, rest) = dims.split_once('x').unwrap();
            let height: String = rest.chars().take_while(char::is_ascii_digit).collect();
            assert_eq!(format.block_extent(), (width.parse().unwrap(), height.parse().unwrap()), "{format}");
        } else if format.is_compressed() {
            assert_eq!(format.block_extent(), (4, 4), "{format}");
        }
    }
}

#[test]
fn partition_sizes() {
    assert_eq!(FormatPartition::DepthOnly.set().len(), 3);
    assert_eq!(FormatPartition::StencilOnly.set().len(), 1);
    assert_eq!(FormatPartition::DepthAndStencil.set().len(), 3);
    assert_eq!(FormatPartition::Normalized.set().len(), 66);
    assert_eq!(FormatPartition::Scaled.set().len(), 26);
    assert_eq!(FormatPartition::UnsignedInt.set().len(), 22);
    assert_eq!(FormatPartition::SignedInt.set().len(), 21);
    assert_eq!(FormatPartition::Float.set().len(), 17);
    assert_eq!(FormatPartition::Srgb.set().len(), 29);
    assert_eq!(FormatPartition::Compressed.set().len(), 54);
}

#[test]
fn names_round_trip() {
    for format in Format::iter() {
        let name = format.to_string();
        assert_eq!(name.parse::<Format>(), Ok(format));
    }
    assert_eq!("R8G8B8A8_UNORM".parse::<Format>(), Err(Error::UnknownFormatName("R8G8B8A8_UNORM".to_string())));
}

#[test]
fn tables_validate() {
    assert_eq!(registry::validate(), Ok(()));
}
