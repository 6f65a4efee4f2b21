use core::fmt;

use crate::{codec, hash, varint, Error, Network, Protocol, Result, CHECKSUM_HASH_LENGTH, MAX_ID};

/// A validated binary address, `protocol || payload`.
///
/// Addresses can only be built through the checked constructors, so every
/// non-empty `Address` holds a payload that is valid for its protocol. The
/// bytes never change after construction.
///
/// [`Address::default`] is the empty address, its protocol is
/// [`Protocol::Unknown`] and it cannot be encoded.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Address {
    raw: Vec<u8>,
}

impl Address {
    /// Creates an address from a protocol and its payload, checking the
    /// payload against the protocol requirements.
    ///
    /// * ID payloads must start with a terminated varint. The ID range is
    ///   only enforced by [`Address::new_id`].
    /// * SECP256K1 and Actor payloads must be 20 bytes long.
    /// * BLS payloads must be 48 bytes long.
    pub fn new(protocol: Protocol, payload: &[u8]) -> Result<Self> {
        match protocol {
            Protocol::Id => {
                varint::decode(payload)?;
            }
            Protocol::Secp256k1 | Protocol::Actor | Protocol::Bls => {
                let expected = protocol
                    .payload_length()
                    .ok_or(Error::UnsupportedProtocol(protocol.as_u8()))?;
                if payload.len() != expected {
                    return Err(Error::InvalidPayloadLength {
                        protocol,
                        expected,
                        received: payload.len(),
                    });
                }
            }
            Protocol::Unknown => return Err(Error::UnsupportedProtocol(protocol.as_u8())),
        }

        Ok(Self::from_parts(protocol, payload))
    }

    /// Creates an address using the ID protocol.
    pub fn new_id(id: u64) -> Result<Self> {
        if id > MAX_ID {
            return Err(Error::IdOutOfRange(id));
        }
        Self::new(Protocol::Id, &varint::encode(id))
    }

    /// Creates an address using the SECP256K1 protocol, the payload is the
    /// hash of the uncompressed public key.
    pub fn new_secp256k1(pubkey: &[u8]) -> Self {
        Self::from_parts(Protocol::Secp256k1, &hash::payload_hash(pubkey))
    }

    /// Creates an address using the Actor protocol, the payload is the hash of
    /// the actor creation data.
    pub fn new_actor(data: &[u8]) -> Self {
        Self::from_parts(Protocol::Actor, &hash::payload_hash(data))
    }

    /// Creates an address using the BLS protocol.
    pub fn new_bls(pubkey: &[u8]) -> Result<Self> {
        Self::new(Protocol::Bls, pubkey)
    }

    fn from_parts(protocol: Protocol, payload: &[u8]) -> Self {
        let mut raw = Vec::with_capacity(payload.len() + 1);
        raw.push(protocol.as_u8());
        raw.extend_from_slice(payload);
        Self { raw }
    }

    /// Parses the binary form of an address, `protocol || payload`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let (&protocol, payload) = bytes.split_first().ok_or(Error::EmptyAddress)?;
        Self::new(Protocol::try_from(protocol)?, payload)
    }

    /// Returns the address protocol, [`Protocol::Unknown`] for the empty
    /// address.
    pub fn protocol(&self) -> Protocol {
        match self.raw.first() {
            // The constructors only accept known protocols.
            Some(&protocol) => Protocol::try_from(protocol).unwrap_or(Protocol::Unknown),
            None => Protocol::Unknown,
        }
    }

    /// Returns the address payload, without the protocol byte.
    pub fn payload(&self) -> &[u8] {
        self.raw.get(1..).unwrap_or_default()
    }

    /// Returns the binary form of the address.
    pub fn as_bytes(&self) -> &[u8] {
        &self.raw
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.raw.clone()
    }

    /// Returns the checksum over the binary form of the address.
    pub fn checksum(&self) -> [u8; CHECKSUM_HASH_LENGTH] {
        hash::checksum(self.as_bytes())
    }

    /// Returns the actor ID of an ID address.
    ///
    /// Bytes following the varint in the payload are ignored.
    pub fn id(&self) -> Result<u64> {
        match self.protocol() {
            Protocol::Id => varint::decode(self.payload()),
            protocol => Err(Error::UnsupportedOperation(protocol)),
        }
    }

    /// Encodes the address into its string form for `network`.
    ///
    /// See [`codec::encode`].
    pub fn encode(&self, network: Network) -> Result<String> {
        codec::encode(self, network)
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Address")
            .field("protocol", &self.protocol())
            .field("payload", &hex::encode(self.payload()))
            .finish()
    }
}

impl TryFrom<&[u8]> for Address {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self> {
        Self::from_bytes(value)
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use core::fmt;

    use serde::{
        de::{self, SeqAccess, Visitor},
        Deserialize, Deserializer, Serialize, Serializer,
    };

    use super::Address;

    impl Serialize for Address {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_bytes(self.as_bytes())
        }
    }

    struct AddressVisitor;

    impl<'de> Visitor<'de> for AddressVisitor {
        type Value = Address;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("the binary form of an address")
        }

        fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Address::from_bytes(v).map_err(E::custom)
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
            A: SeqAccess<'de>,
        {
            let mut bytes = Vec::new();
            while let Some(b) = seq.next_element::<u8>()? {
                bytes.push(b);
            }
            Address::from_bytes(&bytes).map_err(de::Error::custom)
        }
    }

    impl<'de> Deserialize<'de> for Address {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_bytes(AddressVisitor)
        }
    }
}
