//! Unsigned LEB128 varints, used as the payload of ID addresses.
//!
//! Encoding and decoding are delegated to
//! [`integer-encoding`](https://github.com/dermesser/integer-encoding-rs),
//! this module only maps its failures into [`Error`].
use integer_encoding::VarInt;

use crate::{Error, Result};

/// Most-significant byte, == 0x80
const MSB: u8 = 0b1000_0000;

/// Encode `n` as an unsigned LEB128 varint.
pub fn encode(n: u64) -> Vec<u8> {
    n.encode_var_vec()
}

/// Decode a varint from the start of `buf`, returning the value and the
/// number of bytes it occupied.
///
/// Bytes following the terminating byte are ignored.
pub fn decode_prefix(buf: &[u8]) -> Result<(u64, usize)> {
    match u64::decode_var(buf) {
        Some(decoded) => Ok(decoded),
        // A terminating byte exists but comes after the tenth byte.
        None if buf.iter().any(|b| b & MSB == 0) => Err(Error::VarintOverflow),
        None => Err(Error::TruncatedInput),
    }
}

/// Decode a varint from the start of `buf`.
pub fn decode(buf: &[u8]) -> Result<u64> {
    decode_prefix(buf).map(|(n, _)| n)
}
