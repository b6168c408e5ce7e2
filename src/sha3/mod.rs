//! Keccak-p[1600, 24], the sponge construction, and the NIST FIPS 202 /
//! SP 800-185 functions built on top of it.

pub mod aux_functions;
pub mod functions;
pub mod keccak;
pub mod sponge;

pub use functions::{cshake256, kmac_xof256, sha3_hash};
