use crate::Error;

/// Discriminant describing how an address payload is interpreted.
///
/// The discriminant is the first byte of the binary address and the digit
/// following the network prefix in the string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
#[repr(u8)]
pub enum Protocol {
    /// LEB128 encoded actor ID.
    Id = 0,
    /// BLAKE2b-160 hash of an uncompressed secp256k1 public key.
    Secp256k1 = 1,
    /// BLAKE2b-160 hash of actor creation data.
    Actor = 2,
    /// BLS12-381 public key.
    Bls = 3,
    /// Protocol of the empty address, never valid on the wire.
    Unknown = 255,
}

impl Protocol {
    /// Protocols that can appear in a valid address.
    pub const ALL: [Protocol; 4] = [
        Protocol::Id,
        Protocol::Secp256k1,
        Protocol::Actor,
        Protocol::Bls,
    ];

    /// Returns the protocol discriminant.
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Returns the payload length for protocols with a fixed size payload.
    pub fn payload_length(self) -> Option<usize> {
        match self {
            Protocol::Secp256k1 | Protocol::Actor => Some(crate::PAYLOAD_HASH_LENGTH),
            Protocol::Bls => Some(crate::BLS_PUBLIC_KEY_BYTES),
            Protocol::Id | Protocol::Unknown => None,
        }
    }
}

impl TryFrom<u8> for Protocol {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Protocol::Id),
            1 => Ok(Protocol::Secp256k1),
            2 => Ok(Protocol::Actor),
            3 => Ok(Protocol::Bls),
            v => Err(Error::UnsupportedProtocol(v)),
        }
    }
}

impl From<Protocol> for u8 {
    fn from(value: Protocol) -> Self {
        value.as_u8()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_protocols_convert_back_and_forth() {
        for protocol in Protocol::ALL {
            assert_eq!(Protocol::try_from(protocol.as_u8()).unwrap(), protocol);
        }
    }

    #[test]
    fn unknown_discriminants_are_unsupported() {
        assert_eq!(Protocol::try_from(4), Err(Error::UnsupportedProtocol(4)));
        // Unknown only describes the empty address
        assert_eq!(
            Protocol::try_from(255),
            Err(Error::UnsupportedProtocol(255))
        );
    }
}
