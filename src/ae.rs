//! Password-keyed symmetric authenticated encryption (§4.4): a cryptogram
//! is `z || c || t` — a 64-byte random nonce, the XOR-masked ciphertext,
//! and a 64-byte KMAC tag.

use subtle::ConstantTimeEq;

use crate::error::{CryptoError, Result};
use crate::secret::Secret;
use crate::sha3::aux_functions::byte_utils::{get_random_bytes, xor_bytes};
use crate::sha3::kmac_xof256;
use crate::{Message, PwEncryptable};

const NONCE_LEN: usize = 64;
const TAG_LEN: usize = 64;
const MIN_RECORD_LEN: usize = NONCE_LEN + TAG_LEN;

fn split_ke_ka(ke_ka: Vec<u8>) -> (Secret, Secret) {
    let ka = ke_ka[64..].to_vec();
    let mut ke_ka = ke_ka;
    ke_ka.truncate(64);
    (Secret::from(ke_ka), Secret::from(ka))
}

impl PwEncryptable for Message {
    /// `z ← random(512)`; `(ke || ka) ← KMACXOF256(z || pw, "", 1024, "S")`;
    /// `c ← KMACXOF256(ke, "", |m|, "SKE") ⊕ m`;
    /// `t ← KMACXOF256(ka, m, 512, "SKA")`.
    fn pw_encrypt(&mut self, password: &[u8]) -> Result<()> {
        let z = get_random_bytes(NONCE_LEN);
        let mut z_pw = z.clone();
        z_pw.extend_from_slice(password);
        let (ke, ka) = split_ke_ka(kmac_xof256(&z_pw, &[], 1024, "S")?);

        self.digest = Some(kmac_xof256(&ka, &self.msg, 512, "SKA")?);
        let c = kmac_xof256(&ke, &[], (self.msg.len() * 8) as u64, "SKE")?;
        xor_bytes(&mut self.msg, &c);
        self.sym_nonce = Some(Secret::from(z));
        Ok(())
    }

    /// Inverse of [`pw_encrypt`]: recovers `m` and sets `op_result` to
    /// whether the recomputed tag matches the stored one. A tag mismatch is
    /// not an error — the caller inspects `op_result`.
    fn pw_decrypt(&mut self, password: &[u8]) -> Result<()> {
        let z = self
            .sym_nonce
            .as_ref()
            .ok_or_else(|| CryptoError::MalformedRecord("missing symmetric nonce".into()))?;
        let expected_tag = self
            .digest
            .clone()
            .ok_or_else(|| CryptoError::MalformedRecord("missing tag".into()))?;

        let mut z_pw = z.to_vec();
        z_pw.extend_from_slice(password);
        let (ke, ka) = split_ke_ka(kmac_xof256(&z_pw, &[], 1024, "S")?);

        let m = kmac_xof256(&ke, &[], (self.msg.len() * 8) as u64, "SKE")?;
        xor_bytes(&mut self.msg, &m);
        let new_tag = kmac_xof256(&ka, &self.msg, 512, "SKA")?;
        self.op_result = Some(bool::from(expected_tag.ct_eq(&new_tag)));
        Ok(())
    }
}

/// Flattens a message that has already been through [`pw_encrypt`] into the
/// on-disk cryptogram format `z || c || t`.
pub fn serialize_record(msg: &Message) -> Result<Vec<u8>> {
    let z = msg
        .sym_nonce
        .as_ref()
        .ok_or_else(|| CryptoError::MalformedRecord("missing symmetric nonce".into()))?;
    let t = msg
        .digest
        .clone()
        .ok_or_else(|| CryptoError::MalformedRecord("missing tag".into()))?;
    let mut out = z.to_vec();
    out.extend_from_slice(&msg.msg);
    out.extend(t);
    Ok(out)
}

/// Parses a cryptogram `z || c || t` back into a `Message` ready for
/// [`pw_decrypt`]. Rejects records shorter than the fixed nonce and tag
/// overhead.
pub fn parse_record(record: &[u8]) -> Result<Message> {
    if record.len() < MIN_RECORD_LEN {
        return Err(CryptoError::MalformedRecord(format!(
            "record of {} bytes is shorter than the {}-byte nonce+tag overhead",
            record.len(),
            MIN_RECORD_LEN
        )));
    }
    let z = record[..NONCE_LEN].to_vec();
    let c = record[NONCE_LEN..record.len() - TAG_LEN].to_vec();
    let t = record[record.len() - TAG_LEN..].to_vec();
    Ok(Message {
        msg: c,
        digest: Some(t),
        sym_nonce: Some(Secret::from(z)),
        asym_nonce: None,
        sig: None,
        op_result: None,
    })
}
