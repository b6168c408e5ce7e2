//! Keccak-p[1600, 24], the permutation underlying every function in this
//! crate. Operates on twenty-five 64-bit lanes arranged `x + 5*y`, little-
//! endian within each lane, exactly as FIPS 202 §3.2 specifies.

/// Round constants for ι, one per round, `RC[round]`.
const RC: [u64; 24] = [
    0x0000000000000001,
    0x0000000000008082,
    0x800000000000808a,
    0x8000000080008000,
    0x000000000000808b,
    0x0000000080000001,
    0x8000000080008081,
    0x8000000000008009,
    0x000000000000008a,
    0x0000000000000088,
    0x0000000080008009,
    0x000000008000000a,
    0x000000008000808b,
    0x800000000000008b,
    0x8000000000008089,
    0x8000000000008003,
    0x8000000000008002,
    0x8000000000000080,
    0x000000000000800a,
    0x800000008000000a,
    0x8000000080008081,
    0x8000000000008080,
    0x0000000080000001,
    0x8000000080008008,
];

/// ρ rotation offsets, indexed in the π lane-traversal order below.
const RHO: [u32; 24] = [
    1, 3, 6, 10, 15, 21, 28, 36, 45, 55, 2, 14, 27, 41, 56, 8, 25, 43, 62, 18, 39, 61, 20, 44,
];

/// π lane permutation, applied in lock-step with ρ.
const PI: [usize; 24] = [
    10, 7, 11, 17, 18, 3, 5, 16, 8, 21, 24, 4, 15, 23, 19, 13, 12, 2, 20, 14, 22, 9, 6, 1,
];

/// A 1600-bit Keccak state: twenty-five 64-bit lanes, word `(x, y)` at
/// `x + 5*y`. Ephemeral — owned by the call that builds it.
#[derive(Clone, Default)]
pub struct KeccakState {
    lanes: [u64; 25],
}

impl KeccakState {
    pub fn new() -> Self {
        KeccakState { lanes: [0u64; 25] }
    }

    /// XORs `block` (little-endian, at most 200 bytes) into the state
    /// starting at lane 0.
    pub fn xor_block(&mut self, block: &[u8]) {
        debug_assert!(block.len() <= 200);
        for (i, chunk) in block.chunks(8).enumerate() {
            let mut buf = [0u8; 8];
            buf[..chunk.len()].copy_from_slice(chunk);
            self.lanes[i] ^= u64::from_le_bytes(buf);
        }
    }

    /// Copies the first `len` bytes of the state out, little-endian.
    pub fn read_bytes(&self, len: usize) -> Vec<u8> {
        debug_assert!(len <= 200);
        let mut out = Vec::with_capacity(len);
        for lane in self.lanes.iter() {
            if out.len() >= len {
                break;
            }
            let bytes = lane.to_le_bytes();
            let take = (len - out.len()).min(8);
            out.extend_from_slice(&bytes[..take]);
        }
        out
    }

    /// Applies all 24 rounds of Keccak-p[1600, 24] in place.
    pub fn permute(&mut self) {
        for round in 0..24 {
            self.theta();
            self.rho_pi();
            self.chi();
            self.iota(round);
        }
    }

    fn theta(&mut self) {
        let mut c = [0u64; 5];
        for x in 0..5 {
            c[x] = self.lanes[x] ^ self.lanes[x + 5] ^ self.lanes[x + 10] ^ self.lanes[x + 15] ^ self.lanes[x + 20];
        }
        let mut d = [0u64; 5];
        for x in 0..5 {
            d[x] = c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1);
        }
        for x in 0..5 {
            for y in 0..5 {
                self.lanes[x + 5 * y] ^= d[x];
            }
        }
    }

    fn rho_pi(&mut self) {
        let mut current = self.lanes[1];
        for i in 0..24 {
            let dest = PI[i];
            let tmp = self.lanes[dest];
            self.lanes[dest] = current.rotate_left(RHO[i]);
            current = tmp;
        }
    }

    fn chi(&mut self) {
        for y in 0..5 {
            let row = [
                self.lanes[5 * y],
                self.lanes[5 * y + 1],
                self.lanes[5 * y + 2],
                self.lanes[5 * y + 3],
                self.lanes[5 * y + 4],
            ];
            for x in 0..5 {
                self.lanes[5 * y + x] = row[x] ^ ((!row[(x + 1) % 5]) & row[(x + 2) % 5]);
            }
        }
    }

    fn iota(&mut self, round: usize) {
        self.lanes[0] ^= RC[round];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Permuting the all-zero state must not be a fixed point, and must not
    /// merely flip a handful of bits; this is the cheapest smoke test that
    /// theta/rho/pi/chi/iota are actually wired together. Bit-exact
    /// conformance is checked at the SHA3/SHAKE layer in `tests/`, against
    /// the NIST-published digests, which exercise this permutation
    /// end-to-end.
    #[test]
    fn permute_zero_state_changes_every_lane() {
        let mut state = KeccakState::new();
        state.permute();
        assert!(state.lanes.iter().all(|&lane| lane != 0));
    }

    #[test]
    fn permute_is_deterministic() {
        let mut a = KeccakState::new();
        let mut b = KeccakState::new();
        a.xor_block(b"some input bytes");
        b.xor_block(b"some input bytes");
        a.permute();
        b.permute();
        assert_eq!(a.read_bytes(200), b.read_bytes(200));
    }
}
