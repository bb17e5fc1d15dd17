//! Walking a synthetic EXIF block.
//!
//! Tests verify:
//! - Entries decoded from raw directory bytes feed value contexts directly
//! - Both byte orders produce identical values
//! - A broken entry fails alone; its neighbours still decode
//! - Decoded values serialize to JSON

use exif_value::{
    ByteOrder, IfdTagEntry, Rational, SignedRational, TagType, TagValue, ValueContext,
    ValueContextBuilder, ValueError,
};

use super::test_utils::{encode_i32s, encode_u16s, encode_u32s, init_tracing, TestBlock, TestEntry};

const MAKE: u16 = 0x010F;
const ORIENTATION: u16 = 0x0112;
const X_RESOLUTION: u16 = 0x011A;
const EXIF_VERSION: u16 = 0x9000;
const EXPOSURE_BIAS: u16 = 0x9204;
const BROKEN: u16 = 0xC000;
const TIMEZONE_OFFSET: u16 = 0x882A;

fn sample_entries(byte_order: ByteOrder) -> Vec<TestEntry> {
    let mut broken = TestEntry::new(BROKEN, TagType::Long, 4, encode_u32s(&[1, 2, 3, 4], byte_order));
    broken.offset_override = Some(0xFFFF);

    vec![
        TestEntry::new(MAKE, TagType::Ascii, 6, b"Canon\0".to_vec()),
        TestEntry::new(ORIENTATION, TagType::Short, 1, encode_u16s(&[6], byte_order)),
        TestEntry::new(
            X_RESOLUTION,
            TagType::Rational,
            1,
            encode_u32s(&[72, 1], byte_order),
        ),
        TestEntry::new(EXIF_VERSION, TagType::Undefined, 4, b"0230".to_vec()),
        TestEntry::new(
            EXPOSURE_BIAS,
            TagType::SignedRational,
            1,
            encode_i32s(&[-2, 3], byte_order),
        ),
        broken,
        TestEntry::new(
            TIMEZONE_OFFSET,
            TagType::SignedLong,
            2,
            encode_i32s(&[-8, 9], byte_order),
        ),
    ]
}

fn parse_entries(block: &TestBlock) -> Vec<IfdTagEntry> {
    (0..block.entry_count)
        .map(|i| IfdTagEntry::parse(block.entry_bytes(i), block.byte_order, "IFD0").unwrap())
        .collect()
}

/// Decode every entry, resolving the one UNDEFINED tag we know the layout of.
fn decode_all<'a>(
    entries: &'a [IfdTagEntry],
    block: &'a TestBlock,
) -> Vec<(u16, Result<TagValue<'a>, ValueError>)> {
    entries
        .iter()
        .map(|entry| {
            let builder =
                ValueContextBuilder::from_tag_entry(entry, &block.bytes, block.byte_order);
            let result = if entry.tag_id == EXIF_VERSION {
                builder
                    .undefined_value(TagType::AsciiNoNul, 4)
                    .build()
                    .read_ascii_no_nul()
                    .map(TagValue::AsciiNoNul)
            } else {
                builder.build().values()
            };
            (entry.tag_id, result)
        })
        .collect()
}

// =============================================================================
// Walking
// =============================================================================

#[test]
fn test_walk_block_both_byte_orders() {
    init_tracing();

    for byte_order in [ByteOrder::LittleEndian, ByteOrder::BigEndian] {
        let block = TestBlock::build(byte_order, &sample_entries(byte_order));
        let entries = parse_entries(&block);
        let results = decode_all(&entries, &block);

        let value = |tag: u16| {
            results
                .iter()
                .find(|(id, _)| *id == tag)
                .map(|(_, r)| r.clone())
                .unwrap()
        };

        assert_eq!(value(MAKE), Ok(TagValue::Ascii("Canon".to_string())));
        assert_eq!(value(ORIENTATION), Ok(TagValue::Shorts(vec![6])));
        assert_eq!(
            value(X_RESOLUTION),
            Ok(TagValue::Rationals(vec![Rational::new(72, 1)]))
        );
        assert_eq!(
            value(EXIF_VERSION),
            Ok(TagValue::AsciiNoNul("0230".to_string()))
        );
        assert_eq!(
            value(EXPOSURE_BIAS),
            Ok(TagValue::SignedRationals(vec![SignedRational::new(-2, 3)]))
        );
        assert_eq!(value(TIMEZONE_OFFSET), Ok(TagValue::SignedLongs(vec![-8, 9])));
    }
}

#[test]
fn test_broken_entry_is_isolated() {
    let byte_order = ByteOrder::LittleEndian;
    let block = TestBlock::build(byte_order, &sample_entries(byte_order));
    let entries = parse_entries(&block);
    let results = decode_all(&entries, &block);

    let (failed, ok): (Vec<_>, Vec<_>) = results.iter().partition(|(_, r)| r.is_err());
    assert_eq!(failed.len(), 1);
    assert_eq!(ok.len(), entries.len() - 1);

    let (tag, err) = &failed[0];
    assert_eq!(*tag, BROKEN);
    match err {
        Err(ValueError::OutOfBounds {
            tag_id,
            offset,
            length,
            available,
            ..
        }) => {
            assert_eq!(*tag_id, BROKEN);
            assert_eq!(*offset, 0xFFFF);
            assert_eq!(*length, 16);
            assert_eq!(*available, block.bytes.len() as u64);
        }
        other => panic!("expected OutOfBounds, got {other:?}"),
    }
}

#[test]
fn test_undefined_entry_without_effective_type() {
    let byte_order = ByteOrder::BigEndian;
    let block = TestBlock::build(byte_order, &sample_entries(byte_order));
    let entries = parse_entries(&block);
    let version = entries.iter().find(|e| e.tag_id == EXIF_VERSION).unwrap();

    let ctx = ValueContext::from_tag_entry(version, &block.bytes, byte_order);
    assert!(matches!(
        ctx.read_raw(),
        Err(ValueError::UndefinedTypeNotConfigured {
            tag_id: EXIF_VERSION,
            ..
        })
    ));
    assert!(matches!(
        ctx.values(),
        Err(ValueError::UnsupportedType { .. })
    ));
}

// =============================================================================
// Formatting
// =============================================================================

#[test]
fn test_format_entries() {
    let byte_order = ByteOrder::BigEndian;
    let block = TestBlock::build(byte_order, &sample_entries(byte_order));
    let entries = parse_entries(&block);
    let format = |tag: u16, first_only: bool| {
        let entry = entries.iter().find(|e| e.tag_id == tag).unwrap();
        ValueContext::from_tag_entry(entry, &block.bytes, byte_order).format_with(first_only)
    };

    assert_eq!(format(MAKE, false).unwrap(), "Canon");
    assert_eq!(format(ORIENTATION, true).unwrap(), "6");
    assert_eq!(format(X_RESOLUTION, false).unwrap(), "[72/1]");
    assert_eq!(format(TIMEZONE_OFFSET, false).unwrap(), "[-8 9]");
    assert_eq!(format(TIMEZONE_OFFSET, true).unwrap(), "-8...");
    assert!(matches!(
        format(BROKEN, false),
        Err(ValueError::OutOfBounds { .. })
    ));
}

// =============================================================================
// Serialization
// =============================================================================

#[test]
fn test_values_serialize_to_json() {
    let byte_order = ByteOrder::LittleEndian;
    let block = TestBlock::build(byte_order, &sample_entries(byte_order));
    let entries = parse_entries(&block);
    let resolution = entries.iter().find(|e| e.tag_id == X_RESOLUTION).unwrap();

    let value = ValueContext::from_tag_entry(resolution, &block.bytes, byte_order)
        .values()
        .unwrap();
    let json = serde_json::to_value(&value).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "type": "rationals",
            "value": [{ "numerator": 72, "denominator": 1 }]
        })
    );

    assert_eq!(
        serde_json::to_value(byte_order).unwrap(),
        serde_json::json!("little_endian")
    );
    assert_eq!(
        serde_json::to_value(TagType::SignedRational).unwrap(),
        serde_json::json!("signed_rational")
    );
}
