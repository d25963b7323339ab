// Copyright (c) 2024-2025 triplite contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Order-preserving tuple key encoding
//!
//! Every tree key in the store is an encoded tuple of values. The encoding
//! has two properties the index layout depends on:
//!
//! 1. Byte order equals value order: comparing two encoded tuples as byte
//!    strings gives the same result as comparing the tuples
//!    lexicographically under the `Value` total order.
//! 2. Self-termination: no encoded value is a strict byte prefix of a
//!    different value's encoding. A prefix scan with an encoded sub-tuple
//!    therefore matches exactly the keys whose leading values equal that
//!    sub-tuple - never a key that merely shares bytes.
//!
//! # Layout
//!
//! Each value is a 1-byte type tag followed by the payload:
//!
//! - `Null`: `0x01`
//! - `Boolean`: `0x02` + `0x00` (false) or `0x01` (true)
//! - `Number`: `0x03` + 8 bytes (sign-massaged IEEE 754 bits, big-endian,
//!   ordered per `f64::total_cmp`)
//! - `DateTime`: `0x04` + 8 bytes (sign-flipped microsecond timestamp,
//!   big-endian; sub-microsecond precision is dropped)
//! - `String`: `0x05` + UTF-8 bytes with `0x00` escaped as `0x00 0x01`,
//!   terminated by `0x00 0x00`
//! - `Array`: `0x06` + encoded elements, terminated by `0x00`
//!
//! Tag values match `Value`'s cross-type rank. Terminators sort below every
//! tag, so a tuple that is a strict prefix of another sorts first.

use super::value::Value;
use chrono::DateTime;
use thiserror::Error;

mod tags {
    pub const NULL: u8 = 0x01;
    pub const BOOLEAN: u8 = 0x02;
    pub const NUMBER: u8 = 0x03;
    pub const DATETIME: u8 = 0x04;
    pub const STRING: u8 = 0x05;
    pub const ARRAY: u8 = 0x06;
}

const TERMINATOR: u8 = 0x00;
const ESCAPE: u8 = 0x01;
const SIGN_BIT: u64 = 1 << 63;

/// Errors decoding a stored tuple key
#[derive(Error, Debug)]
pub enum KeyError {
    #[error("truncated key")]
    Truncated,

    #[error("invalid type tag {0:#04x}")]
    InvalidTag(u8),

    #[error("invalid UTF-8 in string key")]
    InvalidUtf8,

    #[error("invalid escape byte {0:#04x} in string key")]
    InvalidEscape(u8),

    #[error("datetime key out of range")]
    DatetimeOutOfRange,
}

/// Encode a single value onto `buf`
pub fn encode_value(buf: &mut Vec<u8>, value: &Value) {
    match value {
        Value::Null => buf.push(tags::NULL),
        Value::Boolean(b) => {
            buf.push(tags::BOOLEAN);
            buf.push(u8::from(*b));
        }
        Value::Number(n) => {
            buf.push(tags::NUMBER);
            let bits = n.to_bits();
            let sortable = if bits & SIGN_BIT != 0 {
                !bits
            } else {
                bits | SIGN_BIT
            };
            buf.extend_from_slice(&sortable.to_be_bytes());
        }
        Value::DateTime(dt) => {
            buf.push(tags::DATETIME);
            let micros = dt.timestamp_micros();
            buf.extend_from_slice(&((micros as u64) ^ SIGN_BIT).to_be_bytes());
        }
        Value::String(s) => {
            buf.push(tags::STRING);
            for &byte in s.as_bytes() {
                buf.push(byte);
                if byte == TERMINATOR {
                    buf.push(ESCAPE);
                }
            }
            buf.push(TERMINATOR);
            buf.push(TERMINATOR);
        }
        Value::Array(arr) => {
            buf.push(tags::ARRAY);
            for item in arr {
                encode_value(buf, item);
            }
            buf.push(TERMINATOR);
        }
    }
}

/// Encode a tuple of values as a tree key
pub fn encode_tuple<'a, I>(values: I) -> Vec<u8>
where
    I: IntoIterator<Item = &'a Value>,
{
    let mut buf = Vec::new();
    for value in values {
        encode_value(&mut buf, value);
    }
    buf
}

/// Decode one value starting at `pos`; returns the value and the position
/// just past it
pub fn decode_value(buf: &[u8], pos: usize) -> Result<(Value, usize), KeyError> {
    let tag = *buf.get(pos).ok_or(KeyError::Truncated)?;
    let pos = pos + 1;
    match tag {
        tags::NULL => Ok((Value::Null, pos)),
        tags::BOOLEAN => {
            let byte = *buf.get(pos).ok_or(KeyError::Truncated)?;
            Ok((Value::Boolean(byte != 0), pos + 1))
        }
        tags::NUMBER => {
            let bytes = buf.get(pos..pos + 8).ok_or(KeyError::Truncated)?;
            let sortable = u64::from_be_bytes(bytes.try_into().expect("slice is 8 bytes"));
            let bits = if sortable & SIGN_BIT != 0 {
                sortable ^ SIGN_BIT
            } else {
                !sortable
            };
            Ok((Value::Number(f64::from_bits(bits)), pos + 8))
        }
        tags::DATETIME => {
            let bytes = buf.get(pos..pos + 8).ok_or(KeyError::Truncated)?;
            let sortable = u64::from_be_bytes(bytes.try_into().expect("slice is 8 bytes"));
            let micros = (sortable ^ SIGN_BIT) as i64;
            let dt = DateTime::from_timestamp_micros(micros)
                .ok_or(KeyError::DatetimeOutOfRange)?;
            Ok((Value::DateTime(dt), pos + 8))
        }
        tags::STRING => {
            let mut bytes = Vec::new();
            let mut i = pos;
            loop {
                let byte = *buf.get(i).ok_or(KeyError::Truncated)?;
                i += 1;
                if byte != TERMINATOR {
                    bytes.push(byte);
                    continue;
                }
                match *buf.get(i).ok_or(KeyError::Truncated)? {
                    ESCAPE => {
                        bytes.push(TERMINATOR);
                        i += 1;
                    }
                    TERMINATOR => {
                        i += 1;
                        break;
                    }
                    other => return Err(KeyError::InvalidEscape(other)),
                }
            }
            let s = String::from_utf8(bytes).map_err(|_| KeyError::InvalidUtf8)?;
            Ok((Value::String(s), i))
        }
        tags::ARRAY => {
            let mut items = Vec::new();
            let mut i = pos;
            loop {
                if *buf.get(i).ok_or(KeyError::Truncated)? == TERMINATOR {
                    return Ok((Value::Array(items), i + 1));
                }
                let (item, next) = decode_value(buf, i)?;
                items.push(item);
                i = next;
            }
        }
        other => Err(KeyError::InvalidTag(other)),
    }
}

/// Decode the first `arity` values of a tuple key, ignoring any trailing
/// bytes (index keys carry the full triple after the sub-tuple)
pub fn decode_tuple(buf: &[u8], arity: usize) -> Result<Vec<Value>, KeyError> {
    let mut values = Vec::with_capacity(arity);
    let mut pos = 0;
    for _ in 0..arity {
        let (value, next) = decode_value(buf, pos)?;
        values.push(value);
        pos = next;
    }
    Ok(values)
}
