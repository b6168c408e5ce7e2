//! ECDHIES-style asymmetric encryption and Schnorr signatures over E_521
//! (§4.5). Both share the same cofactor-premultiplied-scalar discipline as
//! [`crate::keypair::KeyPair`] derivation.

use num_bigint::BigInt;
use subtle::ConstantTimeEq;

use crate::curve::{reduce_mod_r, Point, COORD_LEN, G, R};
use crate::error::{CryptoError, Result};
use crate::secret::Secret;
use crate::sha3::aux_functions::byte_utils::{bytes_to_big, get_random_bytes, xor_bytes};
use crate::sha3::kmac_xof256;
use crate::{KeyEncryptable, KeyPair, Message, Signable, Signature};

/// Canonical fixed-width encoding of a coordinate, used wherever the source
/// feeds `x`-coordinate bytes into a KMAC call (ECDHIES key derivation,
/// Schnorr's `h`). Matches [`Point::to_bytes`]'s per-coordinate width so the
/// same bytes a peer would see in a serialized point are the ones hashed.
fn coord_bytes(fe: &crate::curve::FieldElement) -> Vec<u8> {
    crate::sha3::aux_functions::byte_utils::big_to_bytes_signed(fe.value(), COORD_LEN)
}

impl KeyEncryptable for Message {
    /// `k ← 4 * int(random(64))`; `W ← k * pub_key`; `Z ← k * G`;
    /// `(ke || ka) ← KMACXOF256(W.x, "", 1024, "P")`;
    /// `c ← KMACXOF256(ke, "", |m|, "PKE") ⊕ m`;
    /// `t ← KMACXOF256(ka, m, 512, "PKA")`.
    fn key_encrypt(&mut self, pub_key: &Point) -> Result<()> {
        let k = bytes_to_big(&get_random_bytes(64)) * 4;
        let w = pub_key.scalar_mul(&k);
        let z = G.scalar_mul(&k);

        let ke_ka = kmac_xof256(&coord_bytes(&w.x), &[], 1024, "P")?;
        let ke = Secret::from(ke_ka[..64].to_vec());
        let ka = Secret::from(ke_ka[64..].to_vec());

        self.digest = Some(kmac_xof256(&ka, &self.msg, 512, "PKA")?);
        let c = kmac_xof256(&ke, &[], (self.msg.len() * 8) as u64, "PKE")?;
        xor_bytes(&mut self.msg, &c);
        self.asym_nonce = Some(z);
        Ok(())
    }

    /// `W ← prv_scalar * Z`, then as [`key_encrypt`] in reverse. `op_result`
    /// reports tag validity rather than an error.
    fn key_decrypt(&mut self, prv_scalar: &BigInt) -> Result<()> {
        let z = self
            .asym_nonce
            .clone()
            .ok_or_else(|| CryptoError::MalformedRecord("missing asymmetric nonce".into()))?;
        let expected_tag = self
            .digest
            .clone()
            .ok_or_else(|| CryptoError::MalformedRecord("missing tag".into()))?;

        let w = z.scalar_mul(prv_scalar);
        let ke_ka = kmac_xof256(&coord_bytes(&w.x), &[], 1024, "P")?;
        let ke = Secret::from(ke_ka[..64].to_vec());
        let ka = Secret::from(ke_ka[64..].to_vec());

        let m = kmac_xof256(&ke, &[], (self.msg.len() * 8) as u64, "PKE")?;
        xor_bytes(&mut self.msg, &m);
        let new_tag = kmac_xof256(&ka, &self.msg, 512, "PKA")?;
        self.op_result = Some(bool::from(expected_tag.ct_eq(&new_tag)));
        Ok(())
    }
}

const TAG_LEN: usize = 64;

/// Flattens a message that has already been through [`KeyEncryptable::key_encrypt`]
/// into the on-disk ECDHIES cryptogram format `Z || c || t`.
pub fn serialize_ec_record(msg: &Message) -> Result<Vec<u8>> {
    let z = msg
        .asym_nonce
        .clone()
        .ok_or_else(|| CryptoError::MalformedRecord("missing asymmetric nonce".into()))?;
    let t = msg
        .digest
        .clone()
        .ok_or_else(|| CryptoError::MalformedRecord("missing tag".into()))?;
    let mut out = z.to_bytes();
    out.extend_from_slice(&msg.msg);
    out.extend(t);
    Ok(out)
}

/// Inverse of [`serialize_ec_record`]: parses `Z || c || t` back into a
/// `Message` ready for [`KeyEncryptable::key_decrypt`].
pub fn parse_ec_record(record: &[u8]) -> Result<Message> {
    let min_len = crate::curve::STD_BLEN + TAG_LEN;
    if record.len() < min_len {
        return Err(CryptoError::MalformedRecord(format!(
            "record of {} bytes is shorter than the {}-byte nonce+tag overhead",
            record.len(),
            min_len
        )));
    }
    let z = Point::from_bytes(&record[..crate::curve::STD_BLEN])?;
    let c = record[crate::curve::STD_BLEN..record.len() - TAG_LEN].to_vec();
    let t = record[record.len() - TAG_LEN..].to_vec();
    Ok(Message {
        msg: c,
        digest: Some(t),
        sym_nonce: None,
        asym_nonce: Some(z),
        sig: None,
        op_result: None,
    })
}

/// Signature field widths: `h` is a 512-bit KMAC output (64 bytes); `z` is
/// a scalar mod `r` (`r < 2^519`), encoded in 65 bytes. `129 = 64 + 65`.
pub const SIG_H_LEN: usize = 64;
pub const SIG_Z_LEN: usize = 65;

impl Signable for Message {
    /// `k ← 4 * int(KMACXOF256(prv_scalar_bytes, m, 512, "N"))`; `U ← k*G`;
    /// `h ← KMACXOF256(U.x, m, 512, "T")`; `z ← (k - h*prv_scalar) mod r`.
    fn sign(&mut self, key_pair: &KeyPair) -> Result<()> {
        let s_bytes = key_pair.prv_scalar.to_signed_bytes_be();
        let k = bytes_to_big(&kmac_xof256(&s_bytes, &self.msg, 512, "N")?) * 4;

        let u = G.scalar_mul(&k);
        let h = kmac_xof256(&coord_bytes(&u.x), &self.msg, 512, "T")?;
        let h_big = bytes_to_big(&h);
        let z = reduce_mod_r(&(k - h_big * &key_pair.prv_scalar));

        self.sig = Some(Signature {
            h,
            z: crate::sha3::aux_functions::byte_utils::big_to_bytes_signed(&z, SIG_Z_LEN),
        });
        Ok(())
    }

    /// `U' ← z*G + h*pub_key`; accepts iff `KMACXOF256(U'.x, m, 512, "T") ==
    /// h`.
    fn verify(&mut self, pub_key: &Point) -> Result<()> {
        let sig = self
            .sig
            .clone()
            .ok_or_else(|| CryptoError::MalformedRecord("missing signature".into()))?;
        let z = bytes_to_big(&sig.z);
        let h = bytes_to_big(&sig.h);

        let u = G.scalar_mul(&z).add(&pub_key.scalar_mul(&h));
        let h_prime = kmac_xof256(&coord_bytes(&u.x), &self.msg, 512, "T")?;
        self.op_result = Some(bool::from(sig.h.ct_eq(&h_prime)));
        Ok(())
    }
}

/// Flattens a [`Signature`] into its canonical 129-byte `h || z` encoding.
pub fn serialize_signature(sig: &Signature) -> Vec<u8> {
    let mut out = sig.h.clone();
    out.extend_from_slice(&sig.z);
    out
}

/// Inverse of [`serialize_signature`].
pub fn parse_signature(bytes: &[u8]) -> Result<Signature> {
    if bytes.len() != SIG_H_LEN + SIG_Z_LEN {
        return Err(CryptoError::MalformedEncoding {
            expected: SIG_H_LEN + SIG_Z_LEN,
            got: bytes.len(),
        });
    }
    Ok(Signature { h: bytes[..SIG_H_LEN].to_vec(), z: bytes[SIG_H_LEN..].to_vec() })
}
