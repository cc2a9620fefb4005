//! End-of-stream handling for fractional trailing bits.
//!
//! A whitened stream almost never ends on an octet boundary. The two
//! defensible treatments of the leftover bits are not interchangeable,
//! so the choice is an explicit, documented configuration value rather
//! than a silent default buried in the engine.

/// What to do with leftover bits when the input stream ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TailPolicy {
    /// Drop the fractional tail unwritten.
    ///
    /// Padding the tail out to an octet would append deterministic
    /// zero bits, measurably re-biasing the final octet. A daemon
    /// could hold the tail for the next stream segment; a one-shot
    /// filter cannot, so it tosses the tail instead. This matches the
    /// classical filter behavior and is the default.
    #[default]
    Discard,
    /// Emit the tail as one final octet, zero-padded in the unused
    /// high-order positions.
    ///
    /// Preserves every whitened bit at the cost of a biased final
    /// octet. Callers that post-condition the output (e.g. feed it to
    /// a hash-based conditioner) may prefer this.
    ZeroPad,
}

impl TailPolicy {
    /// Returns true if leftover bits are written rather than dropped.
    #[inline]
    pub fn emits_tail(self) -> bool {
        matches!(self, TailPolicy::ZeroPad)
    }
}

impl std::fmt::Display for TailPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TailPolicy::Discard => write!(f, "discard"),
            TailPolicy::ZeroPad => write!(f, "zero-pad"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_discard() {
        assert_eq!(TailPolicy::default(), TailPolicy::Discard);
        assert!(!TailPolicy::default().emits_tail());
    }

    #[test]
    fn test_zero_pad_emits() {
        assert!(TailPolicy::ZeroPad.emits_tail());
    }
}
