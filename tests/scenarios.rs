//! Cross-component scenarios and algebraic properties from §8: key-pair
//! persistence round trips, tampering detection, and the curve/AE
//! invariants that must hold for arbitrary inputs.

use num_bigint::BigInt;

use keccrypt::curve::{Point, G};
use keccrypt::sha3::aux_functions::byte_utils::get_random_bytes;
use keccrypt::{ae, asym, KeyEncryptable, KeyPair, Message, PwEncryptable, Signable};

/// S4: generate a key pair, write both halves, reload them, and confirm the
/// reloaded key pair decrypts a message encrypted under its own public key.
#[test]
fn scenario_s4_keypair_persistence_round_trip() {
    let kp = KeyPair::new(b"TestPassword", "alice").unwrap();

    let pub_bytes = kp.public_key_bytes();
    let prv_record = kp.private_key_record(b"TestPassword").unwrap();

    let reloaded_pub = KeyPair::public_key_from_bytes(&pub_bytes).unwrap();
    let reloaded = KeyPair::from_private_key_record(&prv_record, b"TestPassword", "alice").unwrap();

    assert_eq!(reloaded_pub, kp.pub_point);
    assert_eq!(reloaded.pub_point, kp.pub_point);
    assert_eq!(reloaded.prv_scalar, kp.prv_scalar);

    let mut msg = Message::new(b"a message for the reloaded key".to_vec());
    msg.key_encrypt(&reloaded_pub).unwrap();
    msg.key_decrypt(&reloaded.prv_scalar).unwrap();
    assert_eq!(msg.op_result, Some(true));
    assert_eq!(msg.msg, b"a message for the reloaded key");
}

/// S5: sign a 100-byte all-`0xFF` message, verify succeeds, then flip any
/// byte of the signature and confirm verification fails.
#[test]
fn scenario_s5_signature_tamper_detection() {
    let kp = KeyPair::new(b"signing password", "alice").unwrap();
    let data = vec![0xFFu8; 100];

    let mut msg = Message::new(data.clone());
    msg.sign(&kp).unwrap();
    let good_sig = asym::serialize_signature(&msg.sig.clone().unwrap());

    let mut verifier = Message::new(data.clone());
    verifier.sig = Some(asym::parse_signature(&good_sig).unwrap());
    verifier.verify(&kp.pub_point).unwrap();
    assert_eq!(verifier.op_result, Some(true));

    for byte_index in [0usize, 64, 128] {
        let mut tampered = good_sig.clone();
        tampered[byte_index] ^= 0x01;
        let mut verifier = Message::new(data.clone());
        verifier.sig = Some(asym::parse_signature(&tampered).unwrap());
        verifier.verify(&kp.pub_point).unwrap();
        assert_eq!(
            verifier.op_result,
            Some(false),
            "tampering byte {byte_index} of the signature must flip verification"
        );
    }
}

/// Property 5: `(-P) + P = (0, 1)` and `P + (0, 1) = P`, for several
/// distinct points derived by scalar multiplication of the base point.
#[test]
fn property_negation_and_identity() {
    let neutral = Point::neutral();
    for k in [1u64, 2, 3, 100, 123456789] {
        let p = G.scalar_mul(&BigInt::from(k));
        assert_eq!(p.add(&p.negate()), neutral);
        assert_eq!(p.add(&neutral), p);
    }
}

/// Property 9: point serialization round-trips for the base point and a
/// handful of its multiples.
#[test]
fn property_point_serialization_round_trips() {
    for k in [1u64, 7, 42, 999] {
        let p = G.scalar_mul(&BigInt::from(k));
        let bytes = p.to_bytes();
        assert_eq!(bytes.len(), 132);
        assert_eq!(Point::from_bytes(&bytes).unwrap(), p);
    }
}

/// Property 6: signatures verify under their own key pair and reject a
/// changed message, across several random key pairs and messages.
#[test]
fn property_schnorr_sign_verify_round_trip() {
    for _ in 0..5 {
        let pw = get_random_bytes(32);
        let kp = KeyPair::new(&pw, "tester").unwrap();
        let m = get_random_bytes(256);
        let mut m_prime = m.clone();
        m_prime[0] ^= 0x01;

        let mut signed = Message::new(m.clone());
        signed.sign(&kp).unwrap();

        let mut verify_same = Message::new(m);
        verify_same.sig = signed.sig.clone();
        verify_same.verify(&kp.pub_point).unwrap();
        assert_eq!(verify_same.op_result, Some(true));

        let mut verify_diff = Message::new(m_prime);
        verify_diff.sig = signed.sig;
        verify_diff.verify(&kp.pub_point).unwrap();
        assert_eq!(verify_diff.op_result, Some(false));
    }
}

/// Property 7: ECDHIES decrypt recovers the original plaintext under the
/// matching private scalar, for several random key pairs and messages.
#[test]
fn property_ecdhies_round_trip() {
    for _ in 0..5 {
        let pw = get_random_bytes(32);
        let kp = KeyPair::new(&pw, "tester").unwrap();
        let plaintext = get_random_bytes(4096);

        let mut msg = Message::new(plaintext.clone());
        msg.key_encrypt(&kp.pub_point).unwrap();
        msg.key_decrypt(&kp.prv_scalar).unwrap();

        assert_eq!(msg.op_result, Some(true));
        assert_eq!(msg.msg, plaintext);
    }
}

/// Property 8: symmetric AE decrypt recovers the original plaintext under
/// the matching password, for several random passwords and messages.
#[test]
fn property_symmetric_ae_round_trip() {
    for _ in 0..5 {
        let pw = get_random_bytes(16);
        let plaintext = get_random_bytes(4096);

        let mut msg = Message::new(plaintext.clone());
        msg.pw_encrypt(&pw).unwrap();
        msg.pw_decrypt(&pw).unwrap();

        assert_eq!(msg.op_result, Some(true));
        assert_eq!(msg.msg, plaintext);
    }
}

/// Property 10: an empty-plaintext AE record is exactly 128 bytes
/// (64-byte nonce + empty ciphertext + 64-byte tag) and decrypts to empty.
#[test]
fn property_empty_plaintext_record_is_128_bytes() {
    let mut msg = Message::new(Vec::new());
    msg.pw_encrypt(b"pw").unwrap();
    let record = ae::serialize_record(&msg).unwrap();
    assert_eq!(record.len(), 128);

    let mut parsed = ae::parse_record(&record).unwrap();
    parsed.pw_decrypt(b"pw").unwrap();
    assert_eq!(parsed.op_result, Some(true));
    assert!(parsed.msg.is_empty());
}

/// Property 11: flipping any single byte of an AE record's ciphertext or
/// tag flips `valid` to false.
#[test]
fn property_tampering_flips_validity() {
    let mut msg = Message::new(b"do not tamper with this message".to_vec());
    msg.pw_encrypt(b"pw").unwrap();
    let record = ae::serialize_record(&msg).unwrap();

    for byte_index in [0usize, 64, record.len() - 1] {
        let mut tampered = record.clone();
        tampered[byte_index] ^= 0x01;
        let mut parsed = ae::parse_record(&tampered).unwrap();
        parsed.pw_decrypt(b"pw").unwrap();
        assert_eq!(
            parsed.op_result,
            Some(false),
            "tampering byte {byte_index} must flip the tag's validity"
        );
    }
}
