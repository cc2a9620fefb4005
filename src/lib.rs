//! Von Neumann Whitening Filter
//!
//! A streaming debiasing filter for raw random bit sources (hardware
//! RNGs, physical entropy harvesters). The input octet stream is
//! treated as a sequence of bit pairs; each pair either contributes one
//! unbiased output bit or is discarded:
//!
//! ```text
//! 0 0  ->  (nothing)
//! 1 0  ->  output 0
//! 0 1  ->  output 1
//! 1 1  ->  (nothing)
//! ```
//!
//! This removes simple (non-50/50) bias no matter how the bits were
//! generated, at an average cost of 4 input bits per output bit for an
//! already-balanced source. It does not remove serial correlation and
//! makes no claims about pathological inputs.
//!
//! # Architecture
//!
//! ```text
//! input octets → table lookup → bit accumulator → output octets
//!                                     ↓
//!                            stream report (diagnostics)
//! ```
//!
//! # Design Principles
//!
//! - **No globals**: configuration goes in at construction, counters
//!   come back out as a [`StreamReport`] value
//! - **Table as data**: the 256-entry lookup table is a compile-time
//!   constant, with the deriving routine kept as a self-check
//! - **Explicit tail policy**: fractional end-of-stream bits are either
//!   discarded or zero-padded, chosen by the caller and reported either way
//! - **Diagnostics off the data path**: tracing is never required for
//!   correctness
//!
//! # Example
//!
//! ```
//! use vnwhite::{TailPolicy, Whitener, WhitenerConfig};
//!
//! let mut engine = Whitener::new(WhitenerConfig {
//!     policy: TailPolicy::Discard,
//! });
//!
//! // 0x55 = 01 01 01 01: every pair emits a 1 bit.
//! let input: &[u8] = &[0x55, 0x55];
//! let mut output = Vec::new();
//!
//! let report = engine.process(input, &mut output).unwrap();
//! assert_eq!(output, vec![0xFF]);
//! assert_eq!(report.input_octets, 2);
//! assert_eq!(report.output_octets, 1);
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod table;
pub mod whitening;

// Re-export commonly used types at crate root
pub use table::{TableEntry, WhiteningTable};
pub use whitening::{
    BitAccumulator, InputEnd, StreamReport, TailPolicy, WhitenError, Whitener, WhitenerConfig,
};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
