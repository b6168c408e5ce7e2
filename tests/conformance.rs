//! Bit-exact conformance against the published NIST FIPS 202 / SP 800-185
//! test values named in the spec's testable-properties list (§8, items
//! 1-4 and scenarios S1-S3).
//!
//! `cSHAKE256` with empty name/custom falls through to `SHAKE256` (§4.2),
//! so the SHAKE256 vectors below go through `cshake256(..., b"", b"")`
//! rather than a separate entry point.

use keccrypt::sha3::{cshake256, kmac_xof256, sha3_hash};

fn hex_eq(got: &[u8], want: &str) {
    assert_eq!(hex::encode(got), want.to_lowercase());
}

#[test]
fn sha3_256_of_empty_string() {
    let digest = sha3_hash(b"", 256).unwrap();
    hex_eq(
        &digest,
        "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a",
    );
}

#[test]
fn sha3_512_of_empty_string() {
    let digest = sha3_hash(b"", 512).unwrap();
    hex_eq(
        &digest,
        "a69f73cca23a9ac5c8b567dc185a756e97c982164fe25859e0d1dcc1475c80a\
         615b2123af1f5f94c11e3e9402c3ac558f500199d95b6d3e301758586281dcd26",
    );
}

#[test]
fn shake256_of_empty_string_256_bits() {
    let digest = cshake256(b"", 256, b"", b"").unwrap();
    hex_eq(
        &digest,
        "46b9dd2b0ba88d13233b3feb743eeb243fcd52ea62b81b82b50c27646ed5762f",
    );
}

#[test]
fn sha3_224_of_abc() {
    let digest = sha3_hash(b"abc", 224).unwrap();
    hex_eq(
        &digest,
        "e642824c3f8cf24ad09234ee7d3c766fc9a3a5168d0c94ad73b46fdf",
    );
}

#[test]
fn shake256_of_abc_512_bits() {
    let digest = cshake256(b"abc", 512, b"", b"").unwrap();
    hex_eq(
        &digest,
        "483366601360a8771c6863080cc4114d8db44530f8f1e1ee4f94ea37e78b573\
         9d5a15bef186a5386c75744c0527e1faa9f8726e462a12a4feb06bd8801e751e4",
    );
}

/// SP 800-185 KMACXOF256 example 4: 32-byte key `40 41 42 ... 5F`, message
/// `00 01 02 03`, customization string `"My Tagged Application"`.
#[test]
fn kmac_xof256_sp800_185_example_4() {
    let key: Vec<u8> = (0x40u8..=0x5Fu8).collect();
    let msg = hex::decode("00010203").unwrap();
    let digest = kmac_xof256(&key, &msg, 512, "My Tagged Application").unwrap();
    hex_eq(
        &digest,
        "1755133F1534752AAD0748F2C706FB5C784512CAB835CD15676B16C0C6647FA\
         96FAA7AF634A0BF8FF6DF39374FA00FAD9A39E322A7C92065A64EB1FB0801EB2B",
    );
}

#[test]
fn sha3_rejects_length_outside_allowed_set() {
    assert!(sha3_hash(b"abc", 160).is_err());
    assert!(sha3_hash(b"abc", 0).is_err());
}
