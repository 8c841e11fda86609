//! Per-call match statistics.
//!
//! Counts what each rule contributed during a single negotiation. Stats are
//! plain values owned by the caller, so collecting them never touches shared
//! state.

use serde::Serialize;

/// Statistics for one matcher invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MatchStats {
    /// Number of non-empty header tokens processed
    pub tokens: usize,

    /// Tokens resolved by exact tag equality
    pub exact_hits: usize,

    /// Generic tokens that matched at least one region variant
    pub generic_expansions: usize,

    /// Wildcard tokens encountered
    pub wildcard_expansions: usize,

    /// Candidate tags skipped because they were already in the result
    pub duplicates_skipped: usize,

    /// Tokens that matched nothing in the supported set
    pub ignored: usize,

    /// Length of the final result
    pub matched: usize,
}

impl MatchStats {
    /// Fraction of tokens that contributed or re-selected a supported tag,
    /// as a percentage (0-100).
    pub fn token_hit_rate(&self) -> f64 {
        if self.tokens == 0 {
            return 0.0;
        }
        let hits = self.tokens - self.ignored;
        (hits as f64 / self.tokens as f64) * 100.0
    }
}
