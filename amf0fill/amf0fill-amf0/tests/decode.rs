use amf0fill_amf0::{Amf0Decoder, Amf0Error, DecodeLimits, Marker, decode_value};
use amf0fill_core::{Date, Value, ValueDecoder};

// ── helpers ──────────────────────────────────────────────────────────────────

fn number(buf: &mut Vec<u8>, n: f64) {
    buf.push(0x00);
    buf.extend_from_slice(&n.to_be_bytes());
}

fn short_str(buf: &mut Vec<u8>, s: &str) {
    buf.extend_from_slice(&(s.len() as u16).to_be_bytes());
    buf.extend_from_slice(s.as_bytes());
}

fn string(buf: &mut Vec<u8>, s: &str) {
    buf.push(0x02);
    short_str(buf, s);
}

fn object_end(buf: &mut Vec<u8>) {
    buf.extend_from_slice(&[0x00, 0x00, 0x09]);
}

fn decode_one(bytes: &[u8]) -> Result<Value, Amf0Error> {
    let mut cursor = bytes;
    decode_value(&mut cursor)
}

// ── scalars ──────────────────────────────────────────────────────────────────

#[test]
fn decodes_number() {
    let mut buf = Vec::new();
    number(&mut buf, 3.5);
    assert_eq!(decode_one(&buf).expect("number"), Value::Number(3.5));
}

#[test]
fn decodes_boolean_as_non_zero() {
    assert_eq!(decode_one(&[0x01, 0x00]).expect("false"), Value::Boolean(false));
    assert_eq!(decode_one(&[0x01, 0x02]).expect("true"), Value::Boolean(true));
}

#[test]
fn decodes_short_and_long_strings() {
    let mut buf = Vec::new();
    string(&mut buf, "connect");
    assert_eq!(decode_one(&buf).expect("string"), Value::string("connect"));

    let mut buf = vec![0x0c];
    buf.extend_from_slice(&4u32.to_be_bytes());
    buf.extend_from_slice(b"long");
    assert_eq!(
        decode_one(&buf).expect("long string"),
        Value::LongString("long".into())
    );

    let mut buf = vec![0x0f];
    buf.extend_from_slice(&4u32.to_be_bytes());
    buf.extend_from_slice(b"<a/>");
    assert_eq!(
        decode_one(&buf).expect("xml"),
        Value::XmlDocument("<a/>".into())
    );
}

#[test]
fn decodes_tag_only_markers() {
    assert_eq!(decode_one(&[0x05]).expect("null"), Value::Null);
    assert_eq!(decode_one(&[0x06]).expect("undefined"), Value::Undefined);
    assert_eq!(decode_one(&[0x0d]).expect("unsupported"), Value::Unsupported);
}

#[test]
fn decodes_reference_and_date() {
    assert_eq!(
        decode_one(&[0x07, 0x00, 0x02]).expect("reference"),
        Value::Reference(2)
    );

    let mut buf = vec![0x0b];
    buf.extend_from_slice(&1_000.0f64.to_be_bytes());
    buf.extend_from_slice(&(-60i16).to_be_bytes());
    assert_eq!(
        decode_one(&buf).expect("date"),
        Value::Date(Date::new(1_000.0, -60))
    );
}

// ── composites ───────────────────────────────────────────────────────────────

#[test]
fn decodes_object_in_order() {
    let mut buf = vec![0x03];
    short_str(&mut buf, "app");
    string(&mut buf, "live");
    short_str(&mut buf, "tcUrl");
    buf.push(0x05);
    object_end(&mut buf);

    assert_eq!(
        decode_one(&buf).expect("object"),
        Value::object([("app", Value::string("live")), ("tcUrl", Value::Null)])
    );
}

#[test]
fn decodes_ecma_array_until_end_marker() {
    let mut buf = vec![0x08];
    // Advisory count deliberately wrong.
    buf.extend_from_slice(&5u32.to_be_bytes());
    short_str(&mut buf, "duration");
    number(&mut buf, 12.0);
    object_end(&mut buf);

    assert_eq!(
        decode_one(&buf).expect("ecma array"),
        Value::EcmaArray(vec![("duration".into(), Value::Number(12.0))])
    );
}

#[test]
fn decodes_strict_array() {
    let mut buf = vec![0x0a];
    buf.extend_from_slice(&2u32.to_be_bytes());
    number(&mut buf, 1.0);
    string(&mut buf, "two");

    assert_eq!(
        decode_one(&buf).expect("strict array"),
        Value::StrictArray(vec![Value::Number(1.0), Value::string("two")])
    );
}

#[test]
fn decodes_typed_object() {
    let mut buf = vec![0x10];
    short_str(&mut buf, "Point");
    short_str(&mut buf, "x");
    number(&mut buf, 1.0);
    object_end(&mut buf);

    assert_eq!(
        decode_one(&buf).expect("typed object"),
        Value::TypedObject {
            class_name: "Point".into(),
            properties: vec![("x".into(), Value::Number(1.0))],
        }
    );
}

#[test]
fn decodes_consecutive_values_without_reading_ahead() {
    let mut buf = Vec::new();
    string(&mut buf, "a");
    number(&mut buf, 2.0);
    buf.push(0x05);

    let mut cursor = buf.as_slice();
    let mut decoder = Amf0Decoder::new();
    assert_eq!(decoder.decode(&mut cursor).expect("first"), Value::string("a"));
    assert_eq!(cursor.len(), 10);
    assert_eq!(decoder.decode(&mut cursor).expect("second"), Value::Number(2.0));
    assert_eq!(decoder.decode(&mut cursor).expect("third"), Value::Null);
    assert!(cursor.is_empty());
}

// ── errors ───────────────────────────────────────────────────────────────────

#[test]
fn truncated_number_is_eof() {
    let err = decode_one(&[0x00, 0x40, 0x00]).expect_err("short read");
    assert!(err.is_eof(), "unexpected error: {err}");
}

#[test]
fn truncated_string_payload_is_eof() {
    let err = decode_one(&[0x02, 0x00, 0x05, b'a', b'b']).expect_err("short string");
    assert!(err.is_eof(), "unexpected error: {err}");
}

#[test]
fn empty_input_is_eof() {
    let err = decode_one(&[]).expect_err("no marker");
    assert!(err.is_eof());
}

#[test]
fn rejects_unknown_marker() {
    assert!(matches!(
        decode_one(&[0x42]),
        Err(Amf0Error::UnknownMarker(0x42))
    ));
}

#[test]
fn rejects_reserved_and_amf3_markers() {
    for (byte, marker) in [
        (0x04, Marker::MovieClip),
        (0x0e, Marker::Recordset),
        (0x11, Marker::AvmPlusObject),
    ] {
        match decode_one(&[byte]) {
            Err(Amf0Error::UnsupportedMarker(m)) => assert_eq!(m, marker),
            other => panic!("unexpected result for 0x{byte:02x}: {other:?}"),
        }
    }
}

#[test]
fn rejects_stray_object_end() {
    assert!(matches!(
        decode_one(&[0x09]),
        Err(Amf0Error::UnexpectedObjectEnd)
    ));
}

#[test]
fn rejects_invalid_utf8() {
    assert!(matches!(
        decode_one(&[0x02, 0x00, 0x02, 0xff, 0xfe]),
        Err(Amf0Error::InvalidUtf8(_))
    ));
}

#[test]
fn enforces_depth_limit() {
    // [[ ]]
    let mut buf = vec![0x0a];
    buf.extend_from_slice(&1u32.to_be_bytes());
    buf.push(0x0a);
    buf.extend_from_slice(&0u32.to_be_bytes());

    let decoder = Amf0Decoder::with_limits(DecodeLimits::default().with_max_depth(1));
    assert!(matches!(
        decoder.decode_from(&mut buf.as_slice()),
        Err(Amf0Error::DepthLimitExceeded { limit: 1 })
    ));

    let decoder = Amf0Decoder::with_limits(DecodeLimits::default().with_max_depth(2));
    assert_eq!(
        decoder.decode_from(&mut buf.as_slice()).expect("within limit"),
        Value::StrictArray(vec![Value::StrictArray(Vec::new())])
    );
}

#[test]
fn enforces_length_limit() {
    let mut buf = vec![0x0c];
    buf.extend_from_slice(&u32::MAX.to_be_bytes());

    let decoder = Amf0Decoder::with_limits(DecodeLimits::default().with_max_length(1024));
    assert_eq!(decoder.limits().max_length, 1024);
    assert_eq!(decoder.limits().max_depth, DecodeLimits::default().max_depth);
    assert!(matches!(
        decoder.decode_from(&mut buf.as_slice()),
        Err(Amf0Error::LengthLimitExceeded {
            len,
            limit: 1024,
        }) if len == u32::MAX as usize
    ));
}

#[test]
fn marker_display_includes_hex_tag() {
    assert_eq!(Marker::EcmaArray.to_string(), "ecma-array (0x08)");
    assert_eq!(Marker::from_u8(0x10), Some(Marker::TypedObject));
    assert_eq!(Marker::from_u8(0x12), None);
}
