//! Conversion between [`Address`] and its string form.
//!
//! The string form is `network prefix || protocol digit || body`. For
//! SECP256K1, Actor and BLS addresses the body is the unpadded lowercase
//! base32 of `payload || checksum`, for ID addresses it is the decimal ID.
use core::str::FromStr;

use crate::{
    base32, hash, Address, Error, Network, Protocol, Result, CHECKSUM_HASH_LENGTH,
    MAX_ADDRESS_STRING_LENGTH, MAX_ID_STRING_LENGTH, MIN_ADDRESS_STRING_LENGTH,
};

/// Encodes `address` into its string form for `network`.
///
/// ID addresses have no encoder, they return
/// [`Error::UnsupportedOperation`]. The empty address returns
/// [`Error::UnsupportedProtocol`].
pub fn encode(address: &Address, network: Network) -> Result<String> {
    let protocol = address.protocol();
    match protocol {
        Protocol::Secp256k1 | Protocol::Actor | Protocol::Bls => {
            let mut body = address.payload().to_vec();
            body.extend_from_slice(&address.checksum());

            let mut encoded = String::with_capacity(MAX_ADDRESS_STRING_LENGTH);
            encoded.push(network.prefix());
            encoded.push_str(&protocol.as_u8().to_string());
            encoded.push_str(&base32::encode(&body));
            Ok(encoded)
        }
        Protocol::Id => Err(Error::UnsupportedOperation(protocol)),
        Protocol::Unknown => Err(Error::UnsupportedProtocol(protocol.as_u8())),
    }
}

/// Decodes an address string, checking its structure and checksum.
///
/// Checks are applied in order and the first failure is returned:
/// 1. the string is not empty;
/// 2. its length is within the address string bounds;
/// 3. the first character is a network prefix;
/// 4. the second character is a known protocol digit;
/// 5. the body is valid for the protocol.
///
/// The network is not returned, both prefixes decode to the same address.
pub fn decode(a: &str) -> Result<Address> {
    match decode_inner(a) {
        Ok(address) => {
            tracing::trace!(input = a, ?address, "decoded address");
            Ok(address)
        }
        Err(Rejection { gate, error }) => {
            tracing::debug!(input = a, ?gate, %error, "rejected address string");
            Err(error)
        }
    }
}

/// Decodes an address string, also returning the network it was rendered for.
pub fn decode_with_network(a: &str) -> Result<(Network, Address)> {
    let address = decode(a)?;
    // `decode` already checked the prefix.
    let network = a
        .chars()
        .next()
        .ok_or(Error::EmptyAddress)
        .and_then(Network::from_prefix)?;
    Ok((network, address))
}

/// Decoder check that rejected an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Gate {
    Empty,
    Length,
    Network,
    Protocol,
    Body,
}

#[derive(Debug, PartialEq, Eq)]
struct Rejection {
    gate: Gate,
    error: Error,
}

impl Gate {
    fn reject(self, error: Error) -> Rejection {
        Rejection { gate: self, error }
    }
}

fn decode_inner(a: &str) -> core::result::Result<Address, Rejection> {
    if a.is_empty() {
        return Err(Gate::Empty.reject(Error::EmptyAddress));
    }

    // Every valid character is ASCII, so bytes and characters line up.
    if a.len() < MIN_ADDRESS_STRING_LENGTH || a.len() > MAX_ADDRESS_STRING_LENGTH {
        return Err(Gate::Length.reject(Error::InvalidLength(a.len())));
    }

    let mut chars = a.chars();
    let prefix = chars
        .next()
        .ok_or_else(|| Gate::Empty.reject(Error::EmptyAddress))?;
    Network::from_prefix(prefix).map_err(|err| Gate::Network.reject(err))?;

    let protocol = chars
        .next()
        .ok_or_else(|| Gate::Length.reject(Error::InvalidLength(a.len())))?;
    let protocol = parse_protocol(protocol).map_err(|err| Gate::Protocol.reject(err))?;

    let body = chars.as_str();
    match protocol {
        Protocol::Id => decode_id(body),
        _ => decode_hashed(protocol, body),
    }
    .map_err(|err| Gate::Body.reject(err))
}

fn parse_protocol(digit: char) -> Result<Protocol> {
    digit
        .to_digit(10)
        .and_then(|d| u8::try_from(d).ok())
        .and_then(|d| Protocol::try_from(d).ok())
        .ok_or_else(|| Error::InvalidProtocol(digit.to_string()))
}

fn decode_id(body: &str) -> Result<Address> {
    if body.len() > MAX_ID_STRING_LENGTH {
        return Err(Error::InvalidLength(body.len()));
    }
    if !body.bytes().all(|c| c.is_ascii_digit()) {
        return Err(Error::InvalidEncoding);
    }

    // Only overflow can fail here, the body is made of digits.
    let id = body
        .parse::<u64>()
        .map_err(|_| Error::IdOverflow(body.to_string()))?;
    Address::new_id(id)
}

fn decode_hashed(protocol: Protocol, body: &str) -> Result<Address> {
    let decoded = base32::decode(body)?;
    if decoded.len() < CHECKSUM_HASH_LENGTH {
        return Err(Error::InvalidLength(decoded.len()));
    }

    let (payload, checksum) = decoded.split_at(decoded.len() - CHECKSUM_HASH_LENGTH);

    let mut ingest = Vec::with_capacity(decoded.len() + 1);
    ingest.push(protocol.as_u8());
    ingest.extend_from_slice(payload);
    if !hash::verify_checksum(&ingest, checksum) {
        return Err(Error::ChecksumMismatch);
    }

    Address::new(protocol, payload)
}

impl FromStr for Address {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        decode(s)
    }
}
