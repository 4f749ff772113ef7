//! ASN.1 Basic Encoding Rules codec for the tag/length/value triples SNMP
//! messages are built from.
//!
//! `encode`/`parse` on [`Value`] are the only entry points external
//! modules need; the length-field and integer helpers here are exposed so
//! `crate::message` can reuse them when it needs raw tag/length framing
//! (e.g. computing a PDU's payload length before it knows the PDU's own
//! tag).

mod tag;
mod value;

pub use tag::Tag;
pub use value::Value;

use crate::error::{Error, Result};

/// Writes a BER length field for `len` bytes of payload, using the
/// shortest valid form.
pub fn encode_length(out: &mut Vec<u8>, len: usize) {
    if len <= 0x7f {
        out.push(len as u8);
        return;
    }
    let mut be = len.to_be_bytes().to_vec();
    while be.first() == Some(&0) && be.len() > 1 {
        be.remove(0);
    }
    out.push(0x80 | be.len() as u8);
    out.extend_from_slice(&be);
}

/// Parses a BER length field starting at `buf[offset]`. Returns the
/// decoded length and the offset of the first payload byte.
///
/// Rejects indefinite length (long form with N=0) as `Malformed`.
pub fn parse_length(buf: &[u8], offset: usize) -> Result<(usize, usize)> {
    let first = *buf
        .get(offset)
        .ok_or_else(|| Error::malformed("truncated length field"))?;
    if first & 0x80 == 0 {
        return Ok((first as usize, offset + 1));
    }
    let n = (first & 0x7f) as usize;
    if n == 0 {
        return Err(Error::malformed("indefinite length not supported"));
    }
    let bytes = buf
        .get(offset + 1..offset + 1 + n)
        .ok_or_else(|| Error::malformed("truncated long-form length field"))?;
    if n > 8 {
        return Err(Error::malformed("length field too large"));
    }
    let mut len: usize = 0;
    for &b in bytes {
        len = len
            .checked_shl(8)
            .and_then(|v| v.checked_add(b as usize))
            .ok_or_else(|| Error::malformed("length field overflow"))?;
    }
    Ok((len, offset + 1 + n))
}

/// Encodes a signed integer in the fewest two's-complement big-endian
/// octets that preserve the sign bit.
pub fn encode_signed_integer(value: i64, out: &mut Vec<u8>) {
    let mut bytes = value.to_be_bytes().to_vec();
    // Drop redundant leading 0x00 / 0xFF octets, but keep at least one and
    // never strip the sign-carrying octet.
    while bytes.len() > 1 {
        let (a, b) = (bytes[0], bytes[1]);
        if a == 0x00 && b & 0x80 == 0 {
            bytes.remove(0);
        } else if a == 0xff && b & 0x80 != 0 {
            bytes.remove(0);
        } else {
            break;
        }
    }
    out.extend_from_slice(&bytes);
}

/// Decodes a signed big-endian two's-complement integer, sign-extending
/// to `i64`.
pub fn decode_signed_integer(bytes: &[u8]) -> Result<i64> {
    if bytes.is_empty() {
        return Err(Error::malformed("empty INTEGER payload"));
    }
    if bytes.len() > 8 {
        return Err(Error::malformed("INTEGER payload too large for 64 bits"));
    }
    let negative = bytes[0] & 0x80 != 0;
    let mut buf = [if negative { 0xff } else { 0x00 }; 8];
    buf[8 - bytes.len()..].copy_from_slice(bytes);
    Ok(i64::from_be_bytes(buf))
}

/// Encodes an unsigned integer (Counter32/Gauge32/TimeTicks/Counter64) the
/// same way signed integers are encoded, preceding with `0x00` whenever
/// the top bit of the natural encoding would otherwise read as negative.
pub fn encode_unsigned_integer(value: u64, out: &mut Vec<u8>) {
    let bytes = value.to_be_bytes();
    let mut i = 0;
    while i < bytes.len() - 1 && bytes[i] == 0 {
        i += 1;
    }
    if bytes[i] & 0x80 != 0 {
        out.push(0x00);
    }
    out.extend_from_slice(&bytes[i..]);
}

/// Decodes an unsigned big-endian integer without sign extension.
pub fn decode_unsigned_integer(bytes: &[u8]) -> Result<u64> {
    if bytes.is_empty() {
        return Err(Error::malformed("empty unsigned INTEGER payload"));
    }
    if bytes.len() > 9 || (bytes.len() == 9 && bytes[0] != 0) {
        return Err(Error::malformed("unsigned INTEGER payload too large for 64 bits"));
    }
    let mut buf = [0u8; 8];
    let trimmed = if bytes.len() == 9 { &bytes[1..] } else { bytes };
    buf[8 - trimmed.len()..].copy_from_slice(trimmed);
    Ok(u64::from_be_bytes(buf))
}
