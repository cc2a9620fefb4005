//! Stream accounting and error types.
//!
//! Counters are returned to the caller as a value at stream completion
//! instead of living in process-wide mutable state. They exist for
//! diagnostics only; no control decision reads them.

use std::io;

use super::policy::TailPolicy;

/// How the input stream ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEnd {
    /// Clean end-of-stream.
    Eof,
    /// A read failed; treated as end-of-stream for control flow but
    /// recorded here so diagnostics can tell the two apart.
    ReadError(io::ErrorKind),
}

impl InputEnd {
    /// Returns true if the input ended cleanly.
    #[inline]
    pub fn is_clean(self) -> bool {
        matches!(self, InputEnd::Eof)
    }
}

/// Accounting for one completed (or failed) whitening run.
#[derive(Debug, Clone, PartialEq)]
pub struct StreamReport {
    /// Octets consumed from the input stream.
    pub input_octets: u64,
    /// Octets written to the output stream (includes a padded tail
    /// octet under the zero-pad policy).
    pub output_octets: u64,
    /// Total whitened bits produced by table lookups.
    pub whitened_bits: u64,
    /// Fractional bits left in the accumulator at end of stream
    /// (0 to 7), before the tail policy was applied.
    pub leftover_bits: u8,
    /// Value of the leftover bits (low `leftover_bits` bits).
    pub leftover_value: u8,
    /// The tail policy that was applied.
    pub policy: TailPolicy,
    /// How the input stream terminated.
    pub input_end: InputEnd,
}

impl StreamReport {
    pub(super) fn new(policy: TailPolicy) -> Self {
        Self {
            input_octets: 0,
            output_octets: 0,
            whitened_bits: 0,
            leftover_bits: 0,
            leftover_value: 0,
            policy,
            input_end: InputEnd::Eof,
        }
    }

    /// Ratio of input bits to output bits, or 0.0 if nothing was
    /// produced. A balanced source averages about 4.0.
    pub fn input_to_output_ratio(&self) -> f64 {
        let output_bits = self.output_octets * 8
            + if self.policy.emits_tail() {
                0
            } else {
                u64::from(self.leftover_bits)
            };
        if output_bits == 0 {
            return 0.0;
        }
        (self.input_octets * 8) as f64 / output_bits as f64
    }

    /// Whitened bits that made it into the output stream.
    ///
    /// Under zero-pad this counts the tail bits (the pad bits are not
    /// whitened output); under discard it excludes the tossed tail.
    pub fn emitted_bits(&self) -> u64 {
        if self.policy.emits_tail() {
            self.whitened_bits
        } else {
            self.whitened_bits - u64::from(self.leftover_bits)
        }
    }
}

/// Errors surfaced by a whitening run.
///
/// Read failures are not errors here (they terminate input, see
/// `InputEnd`); only output failures abort a run.
#[derive(Debug, thiserror::Error)]
pub enum WhitenError {
    /// A write to the output stream failed. Processing stopped at the
    /// point of failure; octets already written stand as valid prefix
    /// output, and `report` holds the accounting up to the failure.
    #[error("output write failed after {} octet(s): {source}", .report.output_octets)]
    Write {
        /// Accounting up to the point of failure.
        report: StreamReport,
        /// The underlying I/O error.
        source: io::Error,
    },
}

impl WhitenError {
    /// Returns the partial accounting for the failed run.
    pub fn report(&self) -> &StreamReport {
        match self {
            WhitenError::Write { report, .. } => report,
        }
    }
}
