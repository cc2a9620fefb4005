//! The whitening stream engine.
//!
//! This module turns the per-octet table lookup into a stream filter:
//! it consumes input octets one at a time, accumulates their whitened
//! bits across octet boundaries, and flushes complete octets to the
//! output as they become available. Single-threaded and synchronous;
//! output octet `k` depends only on a prefix of the input, so the
//! engine can be driven incrementally with no look-ahead and no
//! buffering beyond the 11-bit accumulator.

mod accumulator;
mod policy;
mod report;

pub use accumulator::BitAccumulator;
pub use policy::TailPolicy;
pub use report::{InputEnd, StreamReport, WhitenError};

use std::io::{ErrorKind, Read, Write};

use crate::table::WhiteningTable;

/// Configuration for a whitening run.
///
/// Passed explicitly at engine construction; there is no process-wide
/// mutable configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitenerConfig {
    /// End-of-stream treatment of fractional trailing bits.
    pub policy: TailPolicy,
}

/// The Von Neumann whitening engine.
///
/// Composes the lookup table and the bit accumulator into a stream
/// transform. One engine handles one logical stream at a time; call
/// [`Whitener::process`] for the common reader-to-writer case, or
/// drive it octet-at-a-time with [`Whitener::push`] and
/// [`Whitener::finish`].
pub struct Whitener {
    table: WhiteningTable,
    acc: BitAccumulator,
    config: WhitenerConfig,
    report: StreamReport,
}

impl Whitener {
    /// Creates an engine with the given configuration, using the
    /// precomputed whitening table.
    pub fn new(config: WhitenerConfig) -> Self {
        Self {
            table: WhiteningTable::precomputed(),
            acc: BitAccumulator::new(),
            config,
            report: StreamReport::new(config.policy),
        }
    }

    /// Creates an engine with an explicitly supplied table.
    ///
    /// Only useful for cross-checking a derived table against the
    /// embedded constants; `new` is the normal path.
    pub fn with_table(config: WhitenerConfig, table: WhiteningTable) -> Self {
        Self {
            table,
            acc: BitAccumulator::new(),
            config,
            report: StreamReport::new(config.policy),
        }
    }

    /// Feeds one input octet; returns a whitened output octet if the
    /// accumulator filled.
    ///
    /// A single octet yields at most 4 bits, so at most one output
    /// octet becomes available per push.
    pub fn push(&mut self, v: u8) -> Option<u8> {
        let entry = self.table.lookup(v);
        self.report.input_octets += 1;
        self.report.whitened_bits += u64::from(entry.count);

        tracing::trace!(
            input = format_args!("0x{v:02x}"),
            count = entry.count,
            bits = format_args!("0x{:02x}", entry.bits),
            "whitened input octet"
        );

        self.acc.merge(entry);

        if self.acc.has_octet() {
            let octet = self.acc.take_octet();
            self.report.output_octets += 1;
            tracing::trace!(output = format_args!("0x{octet:02x}"), "flushing output octet");
            Some(octet)
        } else {
            None
        }
    }

    /// Ends the stream, applying the configured tail policy.
    ///
    /// Returns the padded tail octet under [`TailPolicy::ZeroPad`] (if
    /// any bits were pending) along with the final report. The engine
    /// is left empty and can be reused for another stream via
    /// [`Whitener::reset`].
    pub fn finish(&mut self) -> (Option<u8>, StreamReport) {
        let (leftover_bits, leftover_value) = self.acc.drain();
        self.report.leftover_bits = leftover_bits;
        self.report.leftover_value = leftover_value;

        let tail = if leftover_bits > 0 && self.config.policy.emits_tail() {
            // Leftover bits stay in the low positions; the unused high
            // positions are already zero.
            self.report.output_octets += 1;
            tracing::debug!(
                bits = leftover_bits,
                value = format_args!("0x{leftover_value:02x}"),
                "zero-padding fractional tail octet"
            );
            Some(leftover_value)
        } else {
            if leftover_bits > 0 {
                tracing::debug!(
                    bits = leftover_bits,
                    value = format_args!("0x{leftover_value:02x}"),
                    "tossing fractional tail bits"
                );
            }
            None
        };

        (tail, self.report.clone())
    }

    /// Resets the engine to process a fresh stream.
    pub fn reset(&mut self) {
        self.acc = BitAccumulator::new();
        self.report = StreamReport::new(self.config.policy);
    }

    /// Whitens `input` into `output` until the input is exhausted.
    ///
    /// A read failure terminates the input exactly like a clean EOF
    /// (recorded in the report's [`InputEnd`]); a write failure is
    /// terminal and surfaces as [`WhitenError::Write`] with the
    /// accounting up to the failure. Already-written octets are valid
    /// prefix output either way.
    pub fn process<R: Read, W: Write>(
        &mut self,
        mut input: R,
        mut output: W,
    ) -> Result<StreamReport, WhitenError> {
        self.reset();

        let mut buf = [0u8; 8192];
        loop {
            let n = match input.read(&mut buf) {
                Ok(0) => {
                    self.report.input_end = InputEnd::Eof;
                    break;
                }
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    tracing::warn!(error = %e, "input read failed; treating as end of stream");
                    self.report.input_end = InputEnd::ReadError(e.kind());
                    break;
                }
            };

            for &v in &buf[..n] {
                if let Some(octet) = self.push(v) {
                    if let Err(e) = output.write_all(&[octet]) {
                        // The octet was produced but never written, and
                        // no tail octet follows a failed stream.
                        self.report.output_octets -= 1;
                        let (leftover_bits, leftover_value) = self.acc.drain();
                        self.report.leftover_bits = leftover_bits;
                        self.report.leftover_value = leftover_value;
                        tracing::warn!(error = %e, "output write failed; stopping");
                        return Err(WhitenError::Write {
                            report: self.report.clone(),
                            source: e,
                        });
                    }
                }
            }
        }

        let (tail, mut report) = self.finish();
        if let Some(octet) = tail {
            if let Err(e) = output.write_all(&[octet]) {
                report.output_octets -= 1;
                tracing::warn!(error = %e, "output write failed on tail octet; stopping");
                return Err(WhitenError::Write { report, source: e });
            }
        }

        tracing::debug!(
            input_octets = report.input_octets,
            output_octets = report.output_octets,
            whitened_bits = report.whitened_bits,
            leftover_bits = report.leftover_bits,
            ratio = report.input_to_output_ratio(),
            "stream complete"
        );

        Ok(report)
    }
}

impl Default for Whitener {
    fn default() -> Self {
        Self::new(WhitenerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn run(policy: TailPolicy, input: &[u8]) -> (Vec<u8>, StreamReport) {
        let mut engine = Whitener::new(WhitenerConfig { policy });
        let mut out = Vec::new();
        let report = engine.process(input, &mut out).unwrap();
        (out, report)
    }

    #[test]
    fn test_empty_input_writes_nothing() {
        let (out, report) = run(TailPolicy::Discard, &[]);
        assert!(out.is_empty());
        assert_eq!(report.input_octets, 0);
        assert_eq!(report.output_octets, 0);
        assert_eq!(report.whitened_bits, 0);
        assert_eq!(report.input_end, InputEnd::Eof);
    }

    #[test]
    fn test_two_0x55_octets_make_0xff() {
        // 0x55 = 01 01 01 01: four `01` pairs, each emitting a 1.
        let (out, report) = run(TailPolicy::Discard, &[0x55, 0x55]);
        assert_eq!(out, vec![0xFF]);
        assert_eq!(report.output_octets, 1);
        assert_eq!(report.leftover_bits, 0);
    }

    #[test]
    fn test_zero_yield_octets_produce_nothing() {
        let input = vec![0x00u8; 1000];
        let (out, report) = run(TailPolicy::Discard, &input);
        assert!(out.is_empty());
        assert_eq!(report.input_octets, 1000);
        assert_eq!(report.whitened_bits, 0);
        assert_eq!(report.leftover_bits, 0);
    }

    #[test]
    fn test_single_0xaa_discard_vs_zero_pad() {
        // 0xAA = 10 10 10 10: four `10` pairs, four 0 bits.
        let (out, report) = run(TailPolicy::Discard, &[0xAA]);
        assert!(out.is_empty());
        assert_eq!(report.leftover_bits, 4);
        assert_eq!(report.leftover_value, 0x00);

        let (out, report) = run(TailPolicy::ZeroPad, &[0xAA]);
        assert_eq!(out, vec![0x00]);
        assert_eq!(report.output_octets, 1);
        assert_eq!(report.leftover_bits, 4);
    }

    #[test]
    fn test_tail_bits_are_low_justified() {
        // One 0x05 octet: pairs 01,01,00,00 -> 2 bits, both ones.
        let (out, report) = run(TailPolicy::ZeroPad, &[0x05]);
        assert_eq!(out, vec![0b0000_0011]);
        assert_eq!(report.leftover_bits, 2);
        assert_eq!(report.leftover_value, 0b11);
    }

    #[test]
    fn test_incremental_matches_batch() {
        let input: Vec<u8> = (0..=255).collect();

        let (batch_out, batch_report) = run(TailPolicy::ZeroPad, &input);

        let mut engine = Whitener::new(WhitenerConfig {
            policy: TailPolicy::ZeroPad,
        });
        let mut out = Vec::new();
        for &v in &input {
            if let Some(octet) = engine.push(v) {
                out.push(octet);
            }
        }
        let (tail, report) = engine.finish();
        out.extend(tail);

        assert_eq!(out, batch_out);
        assert_eq!(report.whitened_bits, batch_report.whitened_bits);
        assert_eq!(report.output_octets, batch_report.output_octets);
    }

    #[test]
    fn test_write_failure_is_terminal() {
        struct FailAfter {
            remaining: usize,
        }
        impl std::io::Write for FailAfter {
            fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                if self.remaining == 0 {
                    return Err(std::io::Error::new(
                        std::io::ErrorKind::BrokenPipe,
                        "sink closed",
                    ));
                }
                self.remaining -= 1;
                Ok(buf.len())
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        // 0x55 yields 4 bits per octet: one output octet per input pair.
        let input = vec![0x55u8; 10];
        let mut engine = Whitener::default();
        let err = engine
            .process(&input[..], FailAfter { remaining: 2 })
            .unwrap_err();

        let report = err.report();
        assert_eq!(report.output_octets, 2);
        assert!(matches!(err, WhitenError::Write { .. }));
    }

    #[test]
    fn test_read_error_treated_as_eof() {
        struct FailingReader {
            fed: bool,
        }
        impl std::io::Read for FailingReader {
            fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
                if self.fed {
                    return Err(std::io::Error::new(
                        std::io::ErrorKind::UnexpectedEof,
                        "device gone",
                    ));
                }
                self.fed = true;
                buf[..2].copy_from_slice(&[0x55, 0x55]);
                Ok(2)
            }
        }

        let mut engine = Whitener::default();
        let mut out = Vec::new();
        let report = engine.process(FailingReader { fed: false }, &mut out).unwrap();

        // Output up to the failure stands; the cause is recorded.
        assert_eq!(out, vec![0xFF]);
        assert_eq!(
            report.input_end,
            InputEnd::ReadError(std::io::ErrorKind::UnexpectedEof)
        );
    }

    #[test]
    fn test_derived_table_gives_identical_output() {
        let input: Vec<u8> = (0..=255).rev().collect();

        let mut a = Whitener::new(WhitenerConfig::default());
        let mut b = Whitener::with_table(
            WhitenerConfig::default(),
            crate::table::WhiteningTable::derive(),
        );

        let mut out_a = Vec::new();
        let mut out_b = Vec::new();
        a.process(&input[..], &mut out_a).unwrap();
        b.process(&input[..], &mut out_b).unwrap();

        assert_eq!(out_a, out_b);
    }

    proptest! {
        #[test]
        fn prop_bit_accounting_balances(input in proptest::collection::vec(any::<u8>(), 0..4096)) {
            let (out, report) = run(TailPolicy::Discard, &input);

            // Every whitened bit is either in a full output octet or
            // in the (dropped) tail.
            prop_assert_eq!(
                report.whitened_bits,
                8 * report.output_octets + u64::from(report.leftover_bits)
            );
            prop_assert_eq!(out.len() as u64, report.output_octets);
            prop_assert!(report.leftover_bits < 8);
        }

        #[test]
        fn prop_output_bounded_by_half_input(input in proptest::collection::vec(any::<u8>(), 0..4096)) {
            // At most 4 whitened bits per input octet.
            let (_, report) = run(TailPolicy::Discard, &input);
            prop_assert!(report.output_octets * 8 <= report.input_octets * 4);
            prop_assert!(report.whitened_bits <= report.input_octets * 4);
        }

        #[test]
        fn prop_zero_pad_writes_at_most_one_more_octet(input in proptest::collection::vec(any::<u8>(), 0..1024)) {
            let (discard_out, _) = run(TailPolicy::Discard, &input);
            let (pad_out, report) = run(TailPolicy::ZeroPad, &input);

            prop_assert_eq!(&pad_out[..discard_out.len()], &discard_out[..]);
            if report.leftover_bits > 0 {
                prop_assert_eq!(pad_out.len(), discard_out.len() + 1);
                prop_assert_eq!(*pad_out.last().unwrap(), report.leftover_value);
            } else {
                prop_assert_eq!(pad_out.len(), discard_out.len());
            }
        }

        #[test]
        fn prop_leftover_value_fits_leftover_count(input in proptest::collection::vec(any::<u8>(), 0..1024)) {
            let (_, report) = run(TailPolicy::Discard, &input);
            prop_assert!(u16::from(report.leftover_value) < (1u16 << report.leftover_bits));
        }
    }
}
