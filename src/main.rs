//! Von Neumann whitener CLI
//!
//! A one-shot stdin→stdout stream filter. Diagnostics go to stderr
//! only, gated by the `-v` level; the primary output stream carries
//! nothing but whitened octets.

use std::io::{self, BufWriter, Write};

use clap::Parser;
use tracing::{info, warn};
use vnwhite::{TailPolicy, WhitenError, Whitener, WhitenerConfig};

/// Von Neumann whitening filter: debias a random octet stream.
#[derive(Debug, Parser)]
#[command(name = "vnwhite", version, about)]
struct Args {
    /// Debug verbosity level (0 = quiet, 1 = summary, 2 = stream
    /// events, 3+ = per-octet trace).
    #[arg(short = 'v', long = "verbose", value_name = "LEVEL", default_value_t = 0)]
    verbose: u8,

    /// Zero-pad and emit fractional trailing bits instead of
    /// discarding them (re-biases the final octet).
    #[arg(long = "pad")]
    pad: bool,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let policy = if args.pad {
        TailPolicy::ZeroPad
    } else {
        TailPolicy::Discard
    };

    info!("vnwhite v{} (tail policy: {})", vnwhite::VERSION, policy);

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let mut writer = BufWriter::new(stdout);

    let mut engine = Whitener::new(WhitenerConfig { policy });

    let report = match engine.process(stdin, &mut writer) {
        Ok(report) => report,
        Err(WhitenError::Write { report, source }) => {
            warn!(
                output_octets = report.output_octets,
                "output write failed: {source}"
            );
            std::process::exit(1);
        }
    };

    if let Err(e) = writer.flush() {
        warn!("output flush failed: {e}");
        std::process::exit(1);
    }

    if !report.input_end.is_clean() {
        info!("input ended on a read error, not EOF");
    }
    info!("input octet(s): {}", report.input_octets);
    info!("input bit(s): {}", report.input_octets * 8);
    info!("output octet(s): {}", report.output_octets);
    info!("output bit(s): {}", report.output_octets * 8);
    if report.leftover_bits > 0 {
        if policy.emits_tail() {
            info!(
                "zero-padded the final {} bit(s) of: 0x{:02x}",
                report.leftover_bits, report.leftover_value
            );
        } else {
            info!(
                "tossed the final {} bit(s) of: 0x{:02x}",
                report.leftover_bits, report.leftover_value
            );
        }
    }
    info!(
        "input bit(s) to output bit(s) ratio: {:.6}",
        report.input_to_output_ratio()
    );
}
