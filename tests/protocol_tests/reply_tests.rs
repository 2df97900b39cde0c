//! Reply Tests
//!
//! Tests for reply accessors, type tags and redis-cli style rendering.

use bytes::Bytes;
use respline::protocol::{BulkElement, ReplyValue, TypeTag};
use respline::ReplyError;

// =============================================================================
// Type Tag Tests
// =============================================================================

#[test]
fn test_type_tag_from_byte() {
    assert_eq!(TypeTag::try_from(b'+').unwrap(), TypeTag::Status);
    assert_eq!(TypeTag::try_from(b'-').unwrap(), TypeTag::Error);
    assert_eq!(TypeTag::try_from(b':').unwrap(), TypeTag::Integer);
    assert_eq!(TypeTag::try_from(b'$').unwrap(), TypeTag::Bulk);
    assert_eq!(TypeTag::try_from(b'*').unwrap(), TypeTag::Array);
}

#[test]
fn test_type_tag_unknown_byte() {
    assert!(matches!(
        TypeTag::try_from(b'_'),
        Err(ReplyError::UnsupportedTag(b'_'))
    ));
}

#[test]
fn test_type_tag_as_byte() {
    assert_eq!(TypeTag::Bulk.as_byte(), b'$');
    assert_eq!(TypeTag::Array.as_byte(), b'*');
}

// =============================================================================
// Accessor Tests
// =============================================================================

#[test]
fn test_reply_accessors() {
    let status = ReplyValue::Status("OK".into());
    assert_eq!(status.as_status(), Some("OK"));
    assert_eq!(status.as_integer(), None);

    let integer = ReplyValue::Integer(12);
    assert_eq!(integer.as_integer(), Some(12));
    assert!(integer.as_bulk().is_none());

    let bulk = ReplyValue::BulkString(Bytes::from_static(b"v"));
    assert_eq!(bulk.as_bulk().map(|b| &b[..]), Some(&b"v"[..]));
    assert!(bulk.into_array().is_none());
}

#[test]
fn test_reply_text_accessors() {
    let status = ReplyValue::Status(Bytes::from_static(b"caf\xe9"));
    assert_eq!(status.text_bytes(), Some(&b"caf\xe9"[..]));
    assert_eq!(status.as_status(), None);

    let error = ReplyValue::Error("ERR oops".into());
    assert_eq!(error.as_error(), Some("ERR oops"));
    assert_eq!(error.as_status(), None);
    assert_eq!(error.text_bytes(), Some(&b"ERR oops"[..]));

    assert_eq!(ReplyValue::Integer(1).text_bytes(), None);
}

#[test]
fn test_reply_into_result() {
    let err = ReplyValue::Error("WRONGTYPE bad".into()).into_result();
    assert_eq!(err, Err(Bytes::from_static(b"WRONGTYPE bad")));

    let ok = ReplyValue::Integer(1).into_result();
    assert_eq!(ok, Ok(ReplyValue::Integer(1)));
}

#[test]
fn test_bulk_element_accessors() {
    let value = BulkElement::from("hello");
    assert!(!value.is_absent());
    assert_eq!(value.as_bytes(), Some(&b"hello"[..]));
    assert_eq!(value.as_str(), Some("hello"));

    let invalid = BulkElement::Value(Bytes::from_static(b"\xff"));
    assert_eq!(invalid.as_str(), None);

    assert!(BulkElement::Absent.is_absent());
    assert_eq!(BulkElement::Absent.as_bytes(), None);
}

#[test]
fn test_bulk_element_into_option() {
    let present: Option<Bytes> = BulkElement::from("x").into();
    assert_eq!(present, Some(Bytes::from_static(b"x")));

    let absent: Option<Bytes> = BulkElement::Absent.into();
    assert_eq!(absent, None);
}

// =============================================================================
// Display Tests
// =============================================================================

#[test]
fn test_display_scalars() {
    assert_eq!(ReplyValue::Status("OK".into()).to_string(), "OK");
    assert_eq!(
        ReplyValue::Error("ERR oops".into()).to_string(),
        "(error) ERR oops"
    );
    assert_eq!(ReplyValue::Integer(-3).to_string(), "(integer) -3");
    assert_eq!(
        ReplyValue::BulkString(Bytes::from_static(b"a\nb")).to_string(),
        "\"a\\nb\""
    );
}

#[test]
fn test_display_array() {
    let reply = ReplyValue::Array(vec![
        BulkElement::from("hello"),
        BulkElement::Absent,
        BulkElement::from("world"),
    ]);
    assert_eq!(reply.to_string(), "1) \"hello\"\n2) (nil)\n3) \"world\"");
}

#[test]
fn test_display_array_pads_indices() {
    let elements: Vec<BulkElement> = (0..10).map(|_| BulkElement::from("x")).collect();
    let rendered = ReplyValue::Array(elements).to_string();
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines[0], " 1) \"x\"");
    assert_eq!(lines[9], "10) \"x\"");
}

#[test]
fn test_display_empty_array() {
    assert_eq!(ReplyValue::Array(vec![]).to_string(), "(empty array)");
}

#[test]
fn test_error_display() {
    assert_eq!(ReplyError::Nil.to_string(), "redis: nil");
    assert_eq!(
        ReplyError::UnsupportedTag(b'%').to_string(),
        "Unsupported reply type tag: 0x25"
    );
}
