use thiserror::Error;

use crate::Protocol;

/// Errors produced while building, encoding or decoding an [`Address`](crate::Address).
///
/// All variants describe deterministic input validation failures, retrying
/// the same call with the same input will always fail the same way.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Payload length does not match what the protocol requires.
    #[error("invalid payload length for {protocol:?} address, expected {expected} bytes, but received {received} instead")]
    InvalidPayloadLength {
        protocol: Protocol,
        expected: usize,
        received: usize,
    },

    /// Protocol discriminant outside of the known set.
    #[error("unsupported address protocol {0}")]
    UnsupportedProtocol(u8),

    /// The operation is not defined for the address protocol.
    #[error("operation not supported for {0:?} addresses")]
    UnsupportedOperation(Protocol),

    /// ID addresses must be strictly smaller than 2^63.
    #[error("ID {0} is out of range, IDs must be less than 2^63")]
    IdOutOfRange(u64),

    /// Decimal ID, as written in the address string, does not fit in 64 bits.
    #[error("ID {0} does not fit in 64 bits")]
    IdOverflow(String),

    /// Unrecognized network selector or string prefix.
    #[error("invalid network {0:?}")]
    InvalidNetwork(String),

    #[error("address string is empty")]
    EmptyAddress,

    /// Address string, or one of its decoded parts, has an invalid length.
    #[error("invalid address length {0}")]
    InvalidLength(usize),

    /// Protocol digit could not be parsed or is unknown.
    #[error("invalid address protocol {0:?}")]
    InvalidProtocol(String),

    /// Address body contains characters outside of the expected alphabet.
    #[error("invalid address encoding")]
    InvalidEncoding,

    /// The checksum embedded in the address does not match the recomputed one.
    #[error("address checksum mismatch")]
    ChecksumMismatch,

    /// Varint buffer ended before a terminating byte was found.
    #[error("varint input is truncated")]
    TruncatedInput,

    /// Varint does not fit in 64 bits.
    #[error("varint overflows 64 bits")]
    VarintOverflow,
}

pub type Result<T> = core::result::Result<T, Error>;
