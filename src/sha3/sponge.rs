//! The absorb/squeeze sponge construction over [`KeccakState`], exactly as
//! FIPS 202 §4 describes it, specialized to Keccak-p[1600, 24] and to
//! byte-aligned domain-separation suffixes (every caller in this crate's
//! suffix is a whole byte, so pad10*1 reduces to "zero-pad, then set the
//! high bit of the final byte").

use crate::error::{CryptoError, Result};
use crate::sha3::keccak::KeccakState;

/// Pads `input` (which already carries its domain-separation suffix byte)
/// to a positive multiple of `rate_bytes` using pad10*1: zero bytes are
/// appended as needed, then the final byte's high bit is set.
fn pad10_star_1(input: &mut Vec<u8>, rate_bytes: usize) {
    let rem = input.len() % rate_bytes;
    let pad_len = if rem == 0 { rate_bytes } else { rate_bytes - rem };
    input.extend(std::iter::repeat(0u8).take(pad_len));
    let last = input.len() - 1;
    input[last] |= 0x80;
}

/// Absorbs `input` into a fresh state at the given `capacity` (bits),
/// returning the post-absorb state. `input` must already carry its
/// domain-separation suffix byte.
fn absorb(input: &[u8], capacity_bits: u64) -> KeccakState {
    let rate_bytes = (1600 - capacity_bits as usize) / 8;
    let mut padded = input.to_vec();
    pad10_star_1(&mut padded, rate_bytes);

    let mut state = KeccakState::new();
    for block in padded.chunks(rate_bytes) {
        state.xor_block(block);
        state.permute();
    }
    state
}

/// Squeezes `output_bits` bits (must be a multiple of 8) out of `state` at
/// the given `rate_bytes`, permuting between blocks as needed.
fn squeeze(mut state: KeccakState, output_bits: u64, rate_bytes: usize) -> Vec<u8> {
    let output_bytes = (output_bits / 8) as usize;
    let mut out = Vec::with_capacity(output_bytes);
    loop {
        let chunk = state.read_bytes(rate_bytes);
        let take = (output_bytes - out.len()).min(rate_bytes);
        out.extend_from_slice(&chunk[..take]);
        if out.len() >= output_bytes {
            break;
        }
        state.permute();
    }
    out
}

/// Sponge(input, output_bits, capacity): absorb then squeeze, truncated to
/// exactly `output_bits` (which must be a positive multiple of 8 in this
/// crate — every derived function here only ever requests byte-aligned
/// lengths).
pub fn sponge(input: &[u8], output_bits: u64, capacity_bits: u64) -> Result<Vec<u8>> {
    if output_bits == 0 || output_bits % 8 != 0 {
        return Err(CryptoError::InvalidLength(format!(
            "output_bits must be a positive multiple of 8, got {output_bits}"
        )));
    }
    let rate_bytes = (1600 - capacity_bits as usize) / 8;
    let state = absorb(input, capacity_bits);
    Ok(squeeze(state, output_bits, rate_bytes))
}
