//! Unit tests for the BER tag/length/value codec.

use pretty_assertions::assert_eq;
use snmp_endpoint::ber::{
    decode_signed_integer, decode_unsigned_integer, encode_length, encode_signed_integer,
    encode_unsigned_integer, parse_length, Tag, Value,
};
use snmp_endpoint::oid::ObjectIdentifier;

#[test]
fn length_short_form_boundary() {
    let mut out = Vec::new();
    encode_length(&mut out, 127);
    assert_eq!(out, vec![0x7f]);
    let mut out = Vec::new();
    encode_length(&mut out, 128);
    assert_eq!(out, vec![0x81, 0x80]);
}

#[test]
fn length_long_form_two_bytes() {
    let mut out = Vec::new();
    encode_length(&mut out, 300);
    assert_eq!(out, vec![0x82, 0x01, 0x2c]);
    let (len, next) = parse_length(&out, 0).unwrap();
    assert_eq!(len, 300);
    assert_eq!(next, 3);
}

#[test]
fn length_rejects_indefinite() {
    assert!(parse_length(&[0x80], 0).is_err());
}

#[test]
fn length_rejects_truncated() {
    assert!(parse_length(&[0x82, 0x01], 0).is_err());
}

#[test]
fn signed_integer_minimal_encodings() {
    let cases: &[(i64, &[u8])] = &[
        (0, &[0x00]),
        (-1, &[0xff]),
        (127, &[0x7f]),
        (128, &[0x00, 0x80]),
        (-128, &[0x80]),
        (i32::MAX as i64, &[0x7f, 0xff, 0xff, 0xff]),
        (i32::MIN as i64, &[0x80, 0x00, 0x00, 0x00]),
    ];
    for &(value, expected) in cases {
        let mut out = Vec::new();
        encode_signed_integer(value, &mut out);
        assert_eq!(out, expected, "encoding {value}");
        assert_eq!(decode_signed_integer(&out).unwrap(), value, "decoding {value}");
    }
}

#[test]
fn unsigned_integer_leading_zero_when_high_bit_set() {
    let mut out = Vec::new();
    encode_unsigned_integer(0x80000000, &mut out);
    assert_eq!(out, vec![0x00, 0x80, 0x00, 0x00, 0x00]);
    assert_eq!(decode_unsigned_integer(&out).unwrap(), 0x80000000);
}

#[test]
fn unsigned_integer_small_value_minimal() {
    let mut out = Vec::new();
    encode_unsigned_integer(42, &mut out);
    assert_eq!(out, vec![0x2a]);
}

fn roundtrip(v: Value) {
    let mut buf = Vec::new();
    v.encode(&mut buf);
    assert_eq!(buf.len(), v.encoded_len());
    let (parsed, consumed) = Value::parse(&buf, 0).unwrap();
    assert_eq!(consumed, buf.len());
    assert_eq!(parsed, v);
}

#[test]
fn roundtrips_primitives() {
    roundtrip(Value::Boolean(true));
    roundtrip(Value::Boolean(false));
    roundtrip(Value::Integer(0));
    roundtrip(Value::Integer(-1));
    roundtrip(Value::Integer(i32::MIN as i64));
    roundtrip(Value::Integer(i32::MAX as i64));
    roundtrip(Value::OctetString(vec![]));
    roundtrip(Value::OctetString(b"public".to_vec()));
    roundtrip(Value::Null);
    roundtrip(Value::ObjectIdentifier("1.3.6.1.2.1.1.5.0".parse().unwrap()));
    roundtrip(Value::IpAddress([192, 0, 2, 1]));
    roundtrip(Value::Counter32(0xffffffff));
    roundtrip(Value::Gauge32(0));
    roundtrip(Value::TimeTicks(100_000));
    roundtrip(Value::Opaque(vec![1, 2, 3]));
    roundtrip(Value::Counter64(u64::MAX));
    roundtrip(Value::Float(3.5));
    roundtrip(Value::NoSuchObject);
    roundtrip(Value::NoSuchInstance);
    roundtrip(Value::EndOfMibView);
}

#[test]
fn roundtrips_sequence_and_pdu() {
    roundtrip(Value::Sequence(vec![Value::Integer(1), Value::Null]));
    roundtrip(Value::Pdu {
        tag: Tag::PDU_GET_REQUEST,
        fields: vec![Value::Integer(1), Value::Integer(0), Value::Integer(0)],
    });
}

#[test]
fn oid_multi_byte_subidentifier() {
    let oid: ObjectIdentifier = format!("1.3.6.1.4.1.{}", 1u32 << 28).parse().unwrap();
    roundtrip(Value::ObjectIdentifier(oid));
}

#[test]
fn oid_second_arc_past_39_under_first_subidentifier_two() {
    // a=2, b=40: first octet packs to 2*40+40=120, past the a<2 arcs'
    // b<40 boundary. A naive first/40, first%40 split misreads this as
    // a=3, which isn't a legal first subidentifier.
    let oid = ObjectIdentifier::new(vec![2, 40, 1]);
    let mut buf = Vec::new();
    Value::ObjectIdentifier(oid.clone()).encode(&mut buf);
    let (parsed, _) = Value::parse(&buf, 0).unwrap();
    assert_eq!(parsed, Value::ObjectIdentifier(oid));
}

#[test]
fn oid_second_arc_at_maximum_under_first_subidentifier_two() {
    // a=2, b=175: first octet 2*40+175=255, the largest single-octet value.
    let oid = ObjectIdentifier::new(vec![2, 175, 1]);
    roundtrip(Value::ObjectIdentifier(oid));
}

#[test]
fn unknown_tag_is_malformed() {
    let err = Value::parse(&[0x99, 0x00], 0).unwrap_err();
    assert!(err.is_malformed());
}

#[test]
fn length_overrun_is_malformed() {
    // declared OctetString length 255, zero payload bytes follow
    let buf = [0x04, 0xff];
    assert!(Value::parse(&buf, 0).is_err());
}

#[test]
fn sequence_length_boundary_127_128() {
    let short = Value::OctetString(vec![0u8; 127]);
    let mut buf = Vec::new();
    short.encode(&mut buf);
    assert_eq!(buf[1], 0x7f);

    let long = Value::OctetString(vec![0u8; 128]);
    let mut buf = Vec::new();
    long.encode(&mut buf);
    assert_eq!(&buf[1..3], &[0x81, 0x80]);
}
