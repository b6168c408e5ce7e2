//! SHA3-{224,256,384,512}, SHAKE256, cSHAKE256, and KMACXOF256, composed
//! from the sponge in `sponge.rs`. Suffix bytes and capacities follow
//! FIPS 202 §6.1/§6.2 and SP 800-185 §3/§4 exactly.

use crate::error::{CryptoError, Result};
use crate::sha3::aux_functions::nist_800_185::{bytepad, encode_string, right_encode};
use crate::sha3::sponge::sponge;

const SHAKE_RATE_BYTES: u32 = 136; // (1600 - 512) / 8

/// SHAKE256(in, L): sponge over `in || 0x1F`, capacity 512, squeeze `L`
/// bits.
fn shake256(input: &[u8], output_bits: u64) -> Result<Vec<u8>> {
    let mut padded = input.to_vec();
    padded.push(0x1F);
    sponge(&padded, output_bits, 512)
}

/// cSHAKE256(X, L, N, S). Falls through to `SHAKE256` when both `N` and `S`
/// are empty.
pub fn cshake256(input: &[u8], output_bits: u64, name: &[u8], custom: &[u8]) -> Result<Vec<u8>> {
    if name.is_empty() && custom.is_empty() {
        return shake256(input, output_bits);
    }
    let mut encoded = encode_string(name);
    encoded.extend_from_slice(&encode_string(custom));
    let mut prefix = bytepad(&encoded, SHAKE_RATE_BYTES as usize);
    prefix.extend_from_slice(input);
    prefix.push(0x04);
    sponge(&prefix, output_bits, 512)
}

/// KMACXOF256(K, X, L, S) per SP 800-185 §4.3.1 (arbitrary-length output
/// variant — `L` is a caller-chosen output length, not a fixed tag size).
pub fn kmac_xof256(key: &[u8], input: &[u8], output_bits: u64, custom: &str) -> Result<Vec<u8>> {
    let mut new_in = bytepad(&encode_string(key), SHAKE_RATE_BYTES as usize);
    new_in.extend_from_slice(input);
    new_in.extend_from_slice(&right_encode(0));
    cshake256(&new_in, output_bits, b"KMAC", custom.as_bytes())
}

/// SHA3-n(in): `n` must be one of 224, 256, 384, or 512. Sponge over
/// `in || 0x06`, capacity `2n`, squeeze `n` bits.
pub fn sha3_hash(input: &[u8], n: u64) -> Result<Vec<u8>> {
    match n {
        224 | 256 | 384 | 512 => {
            let mut padded = input.to_vec();
            padded.push(0x06);
            sponge(&padded, n, 2 * n)
        }
        _ => Err(CryptoError::InvalidLength(format!(
            "SHA3 output length must be 224, 256, 384, or 512 bits, got {n}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha3_rejects_unsupported_lengths() {
        assert!(sha3_hash(b"abc", 255).is_err());
        assert!(sha3_hash(b"abc", 0).is_err());
    }

    #[test]
    fn cshake_with_empty_name_and_custom_matches_shake() {
        let a = cshake256(b"hello", 256, b"", b"").unwrap();
        let b = shake256(b"hello", 256).unwrap();
        assert_eq!(a, b);
    }
}
