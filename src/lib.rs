//! A faithful Rust rendition of a Keccak/E_521 cryptographic suite:
//! Keccak-p[1600,24] and its sponge-derived functions (SHA3, SHAKE256,
//! cSHAKE256, KMACXOF256), arithmetic on the Edwards curve E_521, and the
//! password-based symmetric AE and ECDHIES/Schnorr asymmetric schemes
//! composed on top of them.
//!
//! # Layout
//! * [`sha3`] — Keccak-p[1600,24], the sponge, and the derived hash/XOF/MAC
//!   functions.
//! * [`curve`] — E_521 field and point arithmetic.
//! * [`Message`] / the [`Hashable`], [`PwEncryptable`], [`KeyEncryptable`],
//!   and [`Signable`] traits — the symmetric and asymmetric protocols.
//! * [`KeyPair`] — key derivation, signing, and at-rest persistence.

pub mod ae;
pub mod asym;
pub mod curve;
pub mod error;
pub mod hash;
pub mod keypair;
pub mod secret;
pub mod sha3;

pub use error::{CryptoError, Result};
pub use keypair::KeyPair;
pub use secret::Secret;

use curve::Point;

/// A Schnorr signature: `h` (64 bytes) and `z` (65 bytes), 129 bytes total.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    pub h: Vec<u8>,
    pub z: Vec<u8>,
}

/// The unit of work every operation in this crate acts on: a byte buffer
/// plus whatever digest, nonce, or signature the last operation attached to
/// it. All operations mutate `Message` in place, mirroring the source's
/// "operations are performed IN PLACE" design.
#[derive(Clone, Debug, Default)]
pub struct Message {
    /// Plaintext on construction; ciphertext after `*_encrypt`, recovered
    /// plaintext after `*_decrypt`.
    pub msg: Vec<u8>,
    /// The tag or hash produced by the last operation.
    pub digest: Option<Vec<u8>>,
    /// `z`, the symmetric AE nonce (§4.4), present after `pw_encrypt`/
    /// `pw_decrypt`.
    pub sym_nonce: Option<Secret>,
    /// `Z`, the ECDHIES ephemeral public point (§4.5), present after
    /// `key_encrypt`/`key_decrypt`.
    pub asym_nonce: Option<Point>,
    /// The Schnorr signature, present after `sign`/before `verify`.
    pub sig: Option<Signature>,
    /// Tag/signature validity of the last decrypt/verify call.
    pub op_result: Option<bool>,
}

impl Message {
    pub fn new(msg: Vec<u8>) -> Self {
        Message { msg, ..Default::default() }
    }
}

/// SHA3 hashing and KMAC-tagged hashing (C2, consumed directly rather than
/// through the AE/ECDHIES compositions).
pub trait Hashable {
    fn compute_sha3_hash(&mut self, n: u64) -> Result<()>;
    fn compute_tagged_hash(&mut self, key: &[u8], custom: &str) -> Result<()>;
}

/// Password-keyed symmetric authenticated encryption (C4).
pub trait PwEncryptable {
    fn pw_encrypt(&mut self, password: &[u8]) -> Result<()>;
    fn pw_decrypt(&mut self, password: &[u8]) -> Result<()>;
}

/// ECDHIES-style asymmetric authenticated encryption (C5).
pub trait KeyEncryptable {
    fn key_encrypt(&mut self, pub_key: &Point) -> Result<()>;
    fn key_decrypt(&mut self, prv_scalar: &num_bigint::BigInt) -> Result<()>;
}

/// Schnorr-style signing and verification over E_521 (C5).
pub trait Signable {
    fn sign(&mut self, key_pair: &KeyPair) -> Result<()>;
    fn verify(&mut self, pub_key: &Point) -> Result<()>;
}
