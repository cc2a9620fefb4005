//! Precomputed whitening table data.
//!
//! These arrays are mechanically generated from the bit-pair rule
//! (see `WhiteningTable::derive`); they are never edited by hand.
//! A test asserts that a fresh derivation reproduces them exactly.

/// Number of whitened bits produced by each input octet value.
///
/// For input octet `v`, the whitener emits `VN_COUNT[v]` bits
/// (0 to 4 inclusive, one per `01`/`10` pair in `v`).
pub(super) const VN_COUNT: [u8; 256] = [
    0, 1, 1, 0, 1, 2, 2, 1, 1, 2, 2, 1, 0, 1, 1, 0,
    1, 2, 2, 1, 2, 3, 3, 2, 2, 3, 3, 2, 1, 2, 2, 1,
    1, 2, 2, 1, 2, 3, 3, 2, 2, 3, 3, 2, 1, 2, 2, 1,
    0, 1, 1, 0, 1, 2, 2, 1, 1, 2, 2, 1, 0, 1, 1, 0,
    1, 2, 2, 1, 2, 3, 3, 2, 2, 3, 3, 2, 1, 2, 2, 1,
    2, 3, 3, 2, 3, 4, 4, 3, 3, 4, 4, 3, 2, 3, 3, 2,
    2, 3, 3, 2, 3, 4, 4, 3, 3, 4, 4, 3, 2, 3, 3, 2,
    1, 2, 2, 1, 2, 3, 3, 2, 2, 3, 3, 2, 1, 2, 2, 1,
    1, 2, 2, 1, 2, 3, 3, 2, 2, 3, 3, 2, 1, 2, 2, 1,
    2, 3, 3, 2, 3, 4, 4, 3, 3, 4, 4, 3, 2, 3, 3, 2,
    2, 3, 3, 2, 3, 4, 4, 3, 3, 4, 4, 3, 2, 3, 3, 2,
    1, 2, 2, 1, 2, 3, 3, 2, 2, 3, 3, 2, 1, 2, 2, 1,
    0, 1, 1, 0, 1, 2, 2, 1, 1, 2, 2, 1, 0, 1, 1, 0,
    1, 2, 2, 1, 2, 3, 3, 2, 2, 3, 3, 2, 1, 2, 2, 1,
    1, 2, 2, 1, 2, 3, 3, 2, 2, 3, 3, 2, 1, 2, 2, 1,
    0, 1, 1, 0, 1, 2, 2, 1, 1, 2, 2, 1, 0, 1, 1, 0,
];

/// Whitened output bits for each input octet value.
///
/// For input octet `v`, the emitted bits are the low `VN_COUNT[v]`
/// bits of `VN_BITS[v]` (0 to 15 inclusive), lowest-order pair first.
pub(super) const VN_BITS: [u8; 256] = [
    0x00, 0x01, 0x00, 0x00, 0x01, 0x03, 0x02, 0x01,
    0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00,
    0x01, 0x03, 0x02, 0x01, 0x03, 0x07, 0x06, 0x03,
    0x02, 0x05, 0x04, 0x02, 0x01, 0x03, 0x02, 0x01,
    0x00, 0x01, 0x00, 0x00, 0x01, 0x03, 0x02, 0x01,
    0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00,
    0x00, 0x01, 0x00, 0x00, 0x01, 0x03, 0x02, 0x01,
    0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00,
    0x01, 0x03, 0x02, 0x01, 0x03, 0x07, 0x06, 0x03,
    0x02, 0x05, 0x04, 0x02, 0x01, 0x03, 0x02, 0x01,
    0x03, 0x07, 0x06, 0x03, 0x07, 0x0f, 0x0e, 0x07,
    0x06, 0x0d, 0x0c, 0x06, 0x03, 0x07, 0x06, 0x03,
    0x02, 0x05, 0x04, 0x02, 0x05, 0x0b, 0x0a, 0x05,
    0x04, 0x09, 0x08, 0x04, 0x02, 0x05, 0x04, 0x02,
    0x01, 0x03, 0x02, 0x01, 0x03, 0x07, 0x06, 0x03,
    0x02, 0x05, 0x04, 0x02, 0x01, 0x03, 0x02, 0x01,
    0x00, 0x01, 0x00, 0x00, 0x01, 0x03, 0x02, 0x01,
    0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00,
    0x01, 0x03, 0x02, 0x01, 0x03, 0x07, 0x06, 0x03,
    0x02, 0x05, 0x04, 0x02, 0x01, 0x03, 0x02, 0x01,
    0x00, 0x01, 0x00, 0x00, 0x01, 0x03, 0x02, 0x01,
    0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00,
    0x00, 0x01, 0x00, 0x00, 0x01, 0x03, 0x02, 0x01,
    0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00,
    0x00, 0x01, 0x00, 0x00, 0x01, 0x03, 0x02, 0x01,
    0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00,
    0x01, 0x03, 0x02, 0x01, 0x03, 0x07, 0x06, 0x03,
    0x02, 0x05, 0x04, 0x02, 0x01, 0x03, 0x02, 0x01,
    0x00, 0x01, 0x00, 0x00, 0x01, 0x03, 0x02, 0x01,
    0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00,
    0x00, 0x01, 0x00, 0x00, 0x01, 0x03, 0x02, 0x01,
    0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00,
];
