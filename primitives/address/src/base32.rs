//! Lowercase, unpadded RFC4648 base32 as used by the address string form.
//!
//! Output is always lowercase without `=` padding. Input is accepted in any
//! case and padding is restored before decoding.
use data_encoding::BASE32;

use crate::{Error, Result};

/// Base32 alphabet used by address strings.
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz234567";

/// Base32 processes input in 8 character blocks.
const BLOCK_LEN: usize = 8;

/// Encode `data` as lowercase base32 without padding.
pub fn encode(data: &[u8]) -> String {
    let mut encoded = BASE32.encode(data);
    encoded.make_ascii_lowercase();
    encoded.truncate(encoded.trim_end_matches('=').len());
    encoded
}

/// Decode a base32 string produced by [`encode`], ignoring case.
pub fn decode(s: &str) -> Result<Vec<u8>> {
    if !s.bytes().all(|c| ALPHABET.as_bytes().contains(&c.to_ascii_lowercase())) {
        return Err(Error::InvalidEncoding);
    }

    let mut padded = s.to_ascii_uppercase();
    let remainder = padded.len() % BLOCK_LEN;
    if remainder != 0 {
        padded.extend(std::iter::repeat('=').take(BLOCK_LEN - remainder));
    }

    BASE32
        .decode(padded.as_bytes())
        .map_err(|_| Error::InvalidEncoding)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    // RFC4648 section 10 test vectors.
    #[rstest]
    #[case(b"", "")]
    #[case(b"f", "my")]
    #[case(b"fo", "mzxq")]
    #[case(b"foo", "mzxw6")]
    #[case(b"foob", "mzxw6yq")]
    #[case(b"fooba", "mzxw6ytb")]
    #[case(b"foobar", "mzxw6ytboi")]
    fn rfc4648_vectors(#[case] data: &[u8], #[case] encoded: &str) {
        assert_eq!(encode(data), encoded);
        assert_eq!(decode(encoded).unwrap(), data);
    }

    #[test]
    fn decode_ignores_case() {
        assert_eq!(decode("MZXW6YTBOI").unwrap(), b"foobar");
        assert_eq!(decode("MzXw6YtBoI").unwrap(), b"foobar");
    }

    #[rstest]
    // padding is never part of the input
    #[case("my======")]
    // outside of the alphabet
    #[case("mzx0")]
    #[case("mzx1")]
    #[case("mzx8")]
    #[case("mz w6")]
    // impossible lengths for unpadded base32
    #[case("m")]
    #[case("mzx")]
    #[case("mzxw6y")]
    fn rejects_invalid_input(#[case] input: &str) {
        assert_eq!(decode(input), Err(Error::InvalidEncoding));
    }

    #[test]
    fn random_bytes_round_trip() {
        for len in 0..64 {
            let data: Vec<u8> = (0..len).map(|_| rand::random()).collect();
            let encoded = encode(&data);
            assert!(!encoded.contains('='));
            assert_eq!(encoded, encoded.to_lowercase());
            assert_eq!(decode(&encoded).unwrap(), data);
        }
    }
}
