//! Error taxonomy for the suite.
//!
//! Validation failures surface as [`CryptoError`]; a symmetric/asymmetric tag
//! mismatch is *not* modeled here; those operations return a boolean
//! alongside the recovered plaintext instead of an `Err` (see `ae.rs` /
//! `asym.rs`).

use thiserror::Error;

/// The exhaustive error taxonomy for the suite: `InvalidLength`,
/// `NotOnCurve`, `NoSquareRoot`, `MalformedEncoding`, `MalformedRecord`,
/// `AuthFailed`, `Io`.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Requested output length is non-positive, or outside a function's
    /// allowed set (e.g. SHA3's `{224,256,384,512}`).
    #[error("invalid output length requested: {0}")]
    InvalidLength(String),

    /// A deserialized point fails the Edwards curve equation.
    #[error("point is not on curve E_521")]
    NotOnCurve,

    /// Point decompression was requested for an `x` with no valid `y`.
    #[error("no square root exists for the given x coordinate")]
    NoSquareRoot,

    /// A byte slice has the wrong length for a point or signature.
    #[error("malformed encoding: expected {expected} bytes, got {got}")]
    MalformedEncoding { expected: usize, got: usize },

    /// An AE or ECDHIES record is too short to contain its fixed fields.
    #[error("malformed record: {0}")]
    MalformedRecord(String),

    /// Tag mismatch while loading an encrypted private key (fatal, unlike
    /// the non-fatal boolean flag returned by ordinary decrypt calls).
    #[error("authentication failed while loading private key")]
    AuthFailed,

    /// File I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CryptoError>;
