//! SHA3 hashing and KMAC-tagged hashing on a [`Message`] (§4.2), consumed
//! directly rather than through the AE/ECDHIES compositions.

use crate::error::Result;
use crate::sha3::{kmac_xof256, sha3_hash};
use crate::{Hashable, Message};

impl Hashable for Message {
    /// Computes SHA3-`n` of `self.msg` and stores it in `self.digest`.
    /// `n` must be one of 224, 256, 384, or 512 (`sha3_hash` validates this
    /// and returns `CryptoError::InvalidLength` otherwise).
    fn compute_sha3_hash(&mut self, n: u64) -> Result<()> {
        self.digest = Some(sha3_hash(&self.msg, n)?);
        Ok(())
    }

    /// `t <- KMACXOF256(key, self.msg, 512, custom)`, stored in
    /// `self.digest`.
    fn compute_tagged_hash(&mut self, key: &[u8], custom: &str) -> Result<()> {
        self.digest = Some(kmac_xof256(key, &self.msg, 512, custom)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CryptoError;

    #[test]
    fn sha3_hash_sets_digest() {
        let mut msg = Message::new(b"abc".to_vec());
        msg.compute_sha3_hash(256).unwrap();
        assert_eq!(msg.digest, Some(sha3_hash(b"abc", 256).unwrap()));
    }

    #[test]
    fn sha3_hash_rejects_unsupported_length() {
        let mut msg = Message::new(b"abc".to_vec());
        let err = msg.compute_sha3_hash(160).unwrap_err();
        assert!(matches!(err, CryptoError::InvalidLength(_)));
    }

    #[test]
    fn tagged_hash_sets_digest() {
        let mut msg = Message::new(b"abc".to_vec());
        msg.compute_tagged_hash(b"key", "T").unwrap();
        assert_eq!(msg.digest, Some(kmac_xof256(b"key", b"abc", 512, "T").unwrap()));
    }
}
