//! BLAKE2b digests used to derive address payloads and checksums.
use blake2b_simd::Params;

use crate::{CHECKSUM_HASH_LENGTH, PAYLOAD_HASH_LENGTH};

/// BLAKE2b over `data` with a digest of `out_len` bytes.
///
/// # Panics
///
/// Panics if `out_len` is zero or larger than 64.
pub fn hash(data: &[u8], out_len: usize) -> Vec<u8> {
    Params::new()
        .hash_length(out_len)
        .hash(data)
        .as_bytes()
        .to_vec()
}

fn hash_array<const N: usize>(data: &[u8]) -> [u8; N] {
    let digest = Params::new().hash_length(N).hash(data);
    let mut out = [0; N];
    out.copy_from_slice(digest.as_bytes());
    out
}

/// Hash used as the payload of SECP256K1 and Actor addresses.
pub fn payload_hash(data: &[u8]) -> [u8; PAYLOAD_HASH_LENGTH] {
    hash_array(data)
}

/// Checksum embedded in the string form of an address.
pub fn checksum(data: &[u8]) -> [u8; CHECKSUM_HASH_LENGTH] {
    hash_array(data)
}

/// Returns true if the checksum of `data` is equal to `expected`.
pub fn verify_checksum(data: &[u8], expected: &[u8]) -> bool {
    checksum(data)[..] == *expected
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;

    use super::*;

    #[test]
    fn digest_length_follows_parameter() {
        for len in [1, 4, 20, 32, 64] {
            assert_eq!(hash(b"filecoin", len).len(), len);
        }
    }

    #[test]
    fn truncated_digests_are_not_prefixes() {
        // The output length is part of the BLAKE2b parameter block.
        let long = hash(b"filecoin", 20);
        let short = checksum(b"filecoin");
        assert_ne!(&long[..CHECKSUM_HASH_LENGTH], &short[..]);
    }

    #[test]
    fn known_payload_hash() {
        assert_eq!(
            payload_hash(b"satoshi"),
            hex!("4716b023b7fe84b6e7dcda303c3d754b1a8ff2fc")
        );
    }

    #[test]
    fn checksum_verification() {
        let payload = hex!("01 5d03b099479151b3b65242fee18b4abfa6987280");
        assert_eq!(checksum(&payload), hex!("bf5d072c"));
        assert!(verify_checksum(&payload, &hex!("bf5d072c")));
        assert!(!verify_checksum(&payload, &hex!("bf5d072d")));
        assert!(!verify_checksum(&payload, &hex!("bf5d07")));
    }
}
