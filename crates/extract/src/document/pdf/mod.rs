//! Heuristic PDF text extraction.
//!
//! Best-effort recovery of readable text from bytes claimed to be a PDF,
//! without a PDF object model, cross-reference table, or stream filter
//! decoding. Independent passes scan the same normalized byte view in
//! fixed priority order; their fragments are assembled, deduplicated, and
//! checked against a minimum-quality gate. The call is total: it never
//! panics and never returns an empty string — when nothing useful is
//! found (or a pass blows up on adversarial input) a fixed sentinel
//! string comes back instead.

mod helpers;
mod strategies;
mod types;


use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, warn};

use helpers::{assemble, latin1_view};
use strategies::{structured_strategies, LoosePatternScan, Strategy};
pub use types::{Fragment, ScanConfig, StrategyKind};

/// Returned when scanning found nothing that clears the quality gate.
pub const NO_TEXT_SENTINEL: &str = "No readable text could be extracted from this PDF. \
     It may contain only images, be encrypted, or use an unsupported encoding.";

/// Returned when extraction itself failed on malformed input.
pub const EXTRACTION_FAILED_SENTINEL: &str =
    "Text extraction failed due to a parsing error in the PDF.";

/// Extract best-effort text from raw PDF bytes.
///
/// Always returns a non-empty string: recovered text, [`NO_TEXT_SENTINEL`]
/// when the scan came up short, or [`EXTRACTION_FAILED_SENTINEL`] if a
/// pass panicked. Deterministic for a fixed input.
pub fn extract_pdf(bytes: &[u8], config: &ScanConfig) -> String {
    match panic::catch_unwind(AssertUnwindSafe(|| scan(bytes, config))) {
        Ok(text) => text,
        Err(_) => {
            warn!(len = bytes.len(), "PDF extraction panicked on malformed input");
            EXTRACTION_FAILED_SENTINEL.to_string()
        }
    }
}

fn scan(bytes: &[u8], config: &ScanConfig) -> String {
    let view = latin1_view(bytes);

    let mut fragments = Vec::new();
    for strategy in structured_strategies() {
        let mut found = strategy.extract(&view, config);
        debug!(strategy = ?strategy.kind(), count = found.len(), "structured pass complete");
        fragments.append(&mut found);
    }

    // Loose scan only when the structured passes found too little to trust.
    if fragments.len() < config.fallback_threshold {
        let mut found = LoosePatternScan.extract(&view, config);
        debug!(count = found.len(), "loose fallback pass complete");
        fragments.append(&mut found);
    }

    let text = assemble(&fragments, config);
    if text.chars().count() < config.min_text_chars {
        return NO_TEXT_SENTINEL.to_string();
    }
    text
}
