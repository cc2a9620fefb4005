//! The Von Neumann whitening lookup table.
//!
//! The whitening rule operates on bit pairs: `01` emits a `1`, `10`
//! emits a `0`, and `00`/`11` emit nothing. Applying the rule one pair
//! at a time is slow, so this module precomputes the result for every
//! possible input octet: each 8-bit value maps to at most 4 output bits
//! plus a count. The table is immutable for the process lifetime and
//! shared by every stream that uses it.

mod constants;

use constants::{VN_BITS, VN_COUNT};

/// Number of bits in one octet of the input or output stream.
pub const OCTET_BITS: u8 = 8;

/// Maximum whitened bits a single input octet can yield (4 pairs).
pub const MAX_YIELD_BITS: u8 = 4;

/// The whitened output for a single input octet.
///
/// `bits` holds the emitted bits in its low `count` positions, with the
/// bit from the lowest-order input pair in the lowest-order position.
/// Invariant: `count <= 4` and `bits < 2^count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableEntry {
    /// Number of valid output bits (0 to 4).
    pub count: u8,
    /// The output bits themselves (0 to 15).
    pub bits: u8,
}

/// The full 256-entry whitening table.
///
/// Constructed once (or taken from the embedded constants) and then
/// only read. Lookup is a total function over all octet values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhiteningTable {
    count: [u8; 256],
    bits: [u8; 256],
}

impl WhiteningTable {
    /// Returns the table backed by the compile-time constant arrays.
    ///
    /// This is the normal runtime path; `derive` exists to regenerate
    /// and cross-check the constants.
    pub const fn precomputed() -> Self {
        Self {
            count: VN_COUNT,
            bits: VN_BITS,
        }
    }

    /// Rebuilds the table from the bit-pair rule.
    ///
    /// Scans each octet value as 4 consecutive 2-bit pairs, lowest pair
    /// first: `01` appends a `1` bit, `10` appends a `0` bit, `00` and
    /// `11` append nothing. Behaviorally identical to `precomputed`;
    /// kept as the self-check and regeneration fallback.
    pub fn derive() -> Self {
        let mut count = [0u8; 256];
        let mut bits = [0u8; 256];

        for v in 0..=255u8 {
            let mut amt = 0u8;
            let mut out = 0u8;

            for pair_offset in (0..OCTET_BITS).step_by(2) {
                match (v >> pair_offset) & 0b11 {
                    0b01 => {
                        out |= 1 << amt;
                        amt += 1;
                    }
                    0b10 => {
                        // Emits a 0 bit; only the count advances.
                        amt += 1;
                    }
                    _ => {} // 00 or 11: pair is discarded
                }
            }

            count[v as usize] = amt;
            bits[v as usize] = out;
        }

        Self { count, bits }
    }

    /// Looks up the whitened output for one input octet.
    #[inline]
    pub fn lookup(&self, v: u8) -> TableEntry {
        TableEntry {
            count: self.count[v as usize],
            bits: self.bits[v as usize],
        }
    }
}

impl Default for WhiteningTable {
    fn default() -> Self {
        Self::precomputed()
    }
}
