//! Filecoin-style actor addresses.
//!
//! An address is a protocol byte followed by a protocol specific payload:
//!
//! | Protocol    | Digit | Payload                                   |
//! |-------------|-------|-------------------------------------------|
//! | ID          | 0     | LEB128 varint of an ID smaller than 2^63  |
//! | SECP256K1   | 1     | BLAKE2b-160 of the uncompressed public key |
//! | Actor       | 2     | BLAKE2b-160 of the actor creation data    |
//! | BLS         | 3     | 48 byte BLS public key                    |
//!
//! The string form is the network prefix (`f` for mainnet, `t` for testnet),
//! the protocol digit and a body. See [`codec`] for the body encoding.
//!
//! <https://spec.filecoin.io/appendix/address/>

pub mod address;
pub mod base32;
pub mod codec;
mod error;
pub mod hash;
mod network;
mod protocol;
pub mod varint;

pub use address::Address;
pub use codec::{decode, decode_with_network, encode};
pub use error::{Error, Result};
pub use network::Network;
pub use protocol::Protocol;

/// Hash length taken over addresses using the Actor and SECP256K1 protocols.
pub const PAYLOAD_HASH_LENGTH: usize = 20;

/// Hash length used for calculating address checksums.
pub const CHECKSUM_HASH_LENGTH: usize = 4;

/// Length of a BLS public key.
pub const BLS_PUBLIC_KEY_BYTES: usize = 48;

/// Length of a BLS private key.
pub const BLS_PRIVATE_KEY_BYTES: usize = 32;

/// Max length of an address encoded as a string, the network prefix, the
/// protocol and a BLS public key with its checksum.
pub const MAX_ADDRESS_STRING_LENGTH: usize = 2 + 84;

/// Min length of an address encoded as a string, a single digit ID address.
pub const MIN_ADDRESS_STRING_LENGTH: usize = 3;

/// Number of decimal digits in `u64::MAX`.
pub const MAX_ID_STRING_LENGTH: usize = 20;

/// Largest ID an ID address can hold.
pub const MAX_ID: u64 = i64::MAX as u64;
