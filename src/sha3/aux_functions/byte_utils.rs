//! Byte-level helpers shared by the sponge-derived functions and the AE /
//! asymmetric layers: XOR, CSPRNG draws, big-integer <-> byte conversions,
//! and a timestamp helper for key-pair metadata.

use num_bigint::BigInt;
use rand::{rngs::OsRng, RngCore};

/// XORs `b` into `a` in place. Panics if the lengths differ — both AE and
/// ECDHIES constructions guarantee equal-length operands by construction
/// (mask length is derived from the plaintext/ciphertext length itself).
pub fn xor_bytes(a: &mut [u8], b: &[u8]) {
    assert_eq!(a.len(), b.len(), "xor_bytes requires equal-length operands");
    for (x, y) in a.iter_mut().zip(b.iter()) {
        *x ^= y;
    }
}

/// Draws `n` bytes from the operating system's CSPRNG. The single entry
/// point every encrypt/sign call routes its randomness through.
pub fn get_random_bytes(n: usize) -> Vec<u8> {
    let mut buf = vec![0u8; n];
    OsRng.fill_bytes(&mut buf);
    buf
}

/// Interprets `bytes` as an unsigned big-endian magnitude (used for message
/// digests / KMAC outputs, which carry no sign bit of their own).
pub fn bytes_to_big(bytes: &[u8]) -> BigInt {
    BigInt::from_bytes_be(num_bigint::Sign::Plus, bytes)
}

/// Two's-complement, sign-extending big-endian encoding of `value`,
/// left-padded (or sign-extended with `0xFF`) to exactly `len` bytes.
///
/// Non-negative values are zero-padded, negative values are
/// `0xFF`-extended, so callers get a fixed-width encoding regardless of
/// sign.
pub fn big_to_bytes_signed(value: &BigInt, len: usize) -> Vec<u8> {
    let raw = value.to_signed_bytes_be();
    debug_assert!(raw.len() <= len, "value does not fit in {len} bytes");
    let fill = if value.sign() == num_bigint::Sign::Minus { 0xFFu8 } else { 0x00u8 };
    let mut out = vec![fill; len - raw.len()];
    out.extend_from_slice(&raw);
    out
}

/// Inverse of [`big_to_bytes_signed`]: parses a big-endian two's-complement
/// integer of any length.
pub fn bytes_to_big_signed(bytes: &[u8]) -> BigInt {
    BigInt::from_signed_bytes_be(bytes)
}

/// Timestamp used for key-pair metadata.
pub fn get_date_and_time_as_string() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
