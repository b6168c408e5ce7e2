//! EC key pairs: password-based derivation and at-rest persistence.

use num_bigint::BigInt;

use crate::ae::{parse_record, serialize_record};
use crate::curve::{Point, G};
use crate::error::{CryptoError, Result};
use crate::secret::Secret;
use crate::sha3::aux_functions::byte_utils::{bytes_to_big, get_date_and_time_as_string};
use crate::sha3::kmac_xof256;
use crate::{Message, PwEncryptable};

/// A Schnorr/ECDHIES key pair over E_521.
///
/// `prv_scalar` is the cofactor-premultiplied scalar (`4 * int(prv_bytes)`)
/// used for every private-key operation: signing, decryption, and deriving
/// `pub_point`. The cofactor multiply must land at every site the private
/// scalar is used, public-point derivation included — deriving `pub_point`
/// from the un-multiplied value would make every Schnorr signature fail to
/// verify against it.
#[derive(Clone, Debug)]
pub struct KeyPair {
    pub owner: String,
    pub pub_point: Point,
    pub prv_bytes: Secret,
    pub prv_scalar: BigInt,
    pub created_at: String,
}

impl KeyPair {
    /// `prv_bytes ← KMACXOF256(pwd, "", 512, "K")`; `prv_scalar ← 4 *
    /// int(prv_bytes)`; `pub_point ← G * prv_scalar`.
    pub fn new(password: &[u8], owner: impl Into<String>) -> Result<KeyPair> {
        let prv_bytes = kmac_xof256(password, &[], 512, "K")?;
        let prv_scalar = bytes_to_big(&prv_bytes) * 4;
        let pub_point = G.scalar_mul(&prv_scalar);
        Ok(KeyPair {
            owner: owner.into(),
            pub_point,
            prv_bytes: Secret::from(prv_bytes),
            prv_scalar,
            created_at: get_date_and_time_as_string(),
        })
    }

    /// The raw 132-byte public key, suitable for sharing or storage.
    pub fn public_key_bytes(&self) -> Vec<u8> {
        self.pub_point.to_bytes()
    }

    /// Loads a public key from its 132-byte encoding.
    pub fn public_key_from_bytes(bytes: &[u8]) -> Result<Point> {
        Point::from_bytes(bytes)
    }

    /// Encrypts `prv_bytes` under `password` into the AE cryptogram format
    /// (§4.4) so it can be written to disk without the password itself ever
    /// touching storage.
    pub fn private_key_record(&self, password: &[u8]) -> Result<Vec<u8>> {
        let mut msg = Message::new(self.prv_bytes.to_vec());
        msg.pw_encrypt(password)?;
        serialize_record(&msg)
    }

    /// Inverse of [`private_key_record`]: decrypts a stored private-key
    /// record and rebuilds the key pair. Fails with
    /// [`CryptoError::AuthFailed`] if `password` is wrong.
    pub fn from_private_key_record(
        record: &[u8],
        password: &[u8],
        owner: impl Into<String>,
    ) -> Result<KeyPair> {
        let mut msg = parse_record(record)?;
        msg.pw_decrypt(password)?;
        if msg.op_result != Some(true) {
            return Err(CryptoError::AuthFailed);
        }
        let prv_bytes = msg.msg;
        let prv_scalar = bytes_to_big(&prv_bytes) * 4;
        let pub_point = G.scalar_mul(&prv_scalar);
        Ok(KeyPair {
            owner: owner.into(),
            pub_point,
            prv_bytes: Secret::from(prv_bytes),
            prv_scalar,
            created_at: get_date_and_time_as_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derivation_is_deterministic_in_password() {
        let a = KeyPair::new(b"correct horse battery staple", "alice").unwrap();
        let b = KeyPair::new(b"correct horse battery staple", "bob").unwrap();
        assert_eq!(a.pub_point, b.pub_point);
        assert_eq!(a.prv_scalar, b.prv_scalar);
    }

    #[test]
    fn different_passwords_derive_different_keys() {
        let a = KeyPair::new(b"password one", "alice").unwrap();
        let b = KeyPair::new(b"password two", "alice").unwrap();
        assert_ne!(a.pub_point, b.pub_point);
    }

    #[test]
    fn private_key_record_round_trips() {
        let kp = KeyPair::new(b"pw", "alice").unwrap();
        let record = kp.private_key_record(b"store-pw").unwrap();
        let loaded = KeyPair::from_private_key_record(&record, b"store-pw", "alice").unwrap();
        assert_eq!(loaded.pub_point, kp.pub_point);
        assert_eq!(loaded.prv_scalar, kp.prv_scalar);
    }

    #[test]
    fn private_key_record_rejects_wrong_password() {
        let kp = KeyPair::new(b"pw", "alice").unwrap();
        let record = kp.private_key_record(b"store-pw").unwrap();
        let err = KeyPair::from_private_key_record(&record, b"wrong", "alice").unwrap_err();
        assert!(matches!(err, CryptoError::AuthFailed));
    }
}
