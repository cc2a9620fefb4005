//! Sub-octet output buffer.
//!
//! Whitened bits arrive up to 4 at a time and rarely line up with
//! octet boundaries, so they accumulate here until a full octet can be
//! flushed. The buffer must hold at least 11 bits (7 carried over plus
//! a 4-bit merge); a u16 gives comfortable headroom.

use crate::table::{TableEntry, OCTET_BITS};

/// Accumulates whitened bits until full octets can be emitted.
///
/// Owned exclusively by one stream engine; never shared.
#[derive(Debug, Default)]
pub struct BitAccumulator {
    /// Pending bits, valid in the low `bit_count` positions.
    buffer: u16,
    /// Number of valid bits currently held (0 to 11).
    bit_count: u8,
}

impl BitAccumulator {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges a table entry's bits at the current bit offset.
    ///
    /// The new bits land above the bits already pending, preserving
    /// emission order. Callers must flush available octets afterwards;
    /// the count never exceeds 11 between a merge and its flush.
    #[inline]
    pub fn merge(&mut self, entry: TableEntry) {
        self.buffer |= u16::from(entry.bits) << self.bit_count;
        self.bit_count += entry.count;
        debug_assert!(self.bit_count < 12);
    }

    /// Returns true if a full octet is ready to emit.
    #[inline]
    pub fn has_octet(&self) -> bool {
        self.bit_count >= OCTET_BITS
    }

    /// Removes and returns the oldest 8 pending bits as one octet.
    ///
    /// Must only be called when `has_octet` is true.
    #[inline]
    pub fn take_octet(&mut self) -> u8 {
        debug_assert!(self.has_octet());
        let octet = (self.buffer & 0xFF) as u8;
        self.buffer >>= OCTET_BITS;
        self.bit_count -= OCTET_BITS;
        octet
    }

    /// Returns the number of valid bits currently pending.
    #[inline]
    pub fn bit_count(&self) -> u8 {
        self.bit_count
    }

    /// Returns the pending bits without removing them.
    ///
    /// Only the low `bit_count` bits are meaningful.
    #[inline]
    pub fn pending_bits(&self) -> u8 {
        (self.buffer & 0xFF) as u8
    }

    /// Drains any fractional tail, returning `(bit_count, bits)`.
    ///
    /// Used by the end-of-stream policy; leaves the accumulator empty.
    pub fn drain(&mut self) -> (u8, u8) {
        let tail = (self.bit_count, self.pending_bits());
        self.buffer = 0;
        self.bit_count = 0;
        tail
    }
}
