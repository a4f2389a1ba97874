//! Scan configuration and fragment types.

// ── Configuration ───────────────────────────────────────────────────────────

/// Tunables for the heuristic scan.
///
/// The thresholds are empirically chosen; earlier revisions of the engine
/// shipped a fallback threshold of 3, the current default is 5. They are
/// fields rather than constants so callers can adjust them without a
/// rebuild.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Run the loose fallback pass only when the structured passes
    /// produced fewer fragments than this, combined (default: 5).
    pub fallback_threshold: usize,
    /// A repeated token is dropped during dedup only when it is at most
    /// this many chars; longer repeats are kept (default: 10).
    pub dedup_max_token_len: usize,
    /// Assembled output shorter than this is replaced by the no-text
    /// sentinel (default: 10).
    pub min_text_chars: usize,
    /// Minimum length of a loose text run (default: 5).
    pub min_run_chars: usize,
    /// All-uppercase runs at least this long are rejected as structural
    /// tokens rather than prose (default: 8).
    pub upper_run_limit: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            fallback_threshold: 5,
            dedup_max_token_len: 10,
            min_text_chars: 10,
            min_run_chars: 5,
            upper_run_limit: 8,
        }
    }
}

// ── Fragments ───────────────────────────────────────────────────────────────

/// Which pass recovered a fragment, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    StreamObject,
    ParenLiteral,
    HexLiteral,
    TextObject,
    LoosePattern,
}

/// One short text string recovered by a single pass, with its provenance.
/// Fragments are never mutated after creation; the assembler only reads
/// and filters them.
#[derive(Debug, Clone)]
pub struct Fragment {
    pub strategy: StrategyKind,
    /// 0-based order of discovery within the producing pass.
    pub position: usize,
    pub text: String,
}
