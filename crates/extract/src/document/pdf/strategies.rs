//! The extraction passes, in fixed priority order.
//!
//! Each pass is an independent pure scan over the same normalized view,
//! producing zero or more fragments. A pass that matches nothing simply
//! contributes nothing — "this doesn't look like a PDF" is not an error.

use once_cell::sync::Lazy;
use regex::Regex;

use super::helpers::{decode_hex_pairs, decode_paren_escapes, push_fragment};
use super::types::{Fragment, ScanConfig, StrategyKind};

// ── Patterns ────────────────────────────────────────────────────────────────

static STREAM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)stream(.*?)endstream").unwrap());
static TJ_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(([^)\\]*(?:\\.[^)\\]*)*)\)\s*Tj").unwrap());
static PAREN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(([^)\\]*(?:\\.[^)\\]*)*)\)").unwrap());
static HEX_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<([0-9A-Fa-f\s]+)>").unwrap());
static TEXT_OBJECT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)BT\s+(.*?)\s+ET").unwrap());
static TJ_ARRAY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]*)\]\s*TJ").unwrap());
static ARRAY_STRING_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(([^)]*)\)").unwrap());
static LOOSE_RUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[A-Za-z][A-Za-z0-9 .,!?;:'"()-]*"#).unwrap());

// ── Strategy trait ──────────────────────────────────────────────────────────

/// A single heuristic pass over the normalized buffer.
pub(crate) trait Strategy {
    fn kind(&self) -> StrategyKind;
    fn extract(&self, view: &str, config: &ScanConfig) -> Vec<Fragment>;
}

/// The structured passes, in priority order. [`LoosePatternScan`] is not
/// part of this list; the engine gates it on the combined fragment count.
pub(crate) fn structured_strategies() -> [&'static dyn Strategy; 4] {
    [
        &StreamObjectScan,
        &ParenLiteralScan,
        &HexLiteralScan,
        &TextObjectScan,
    ]
}

// ── Stream-object scan ──────────────────────────────────────────────────────

/// Scans `stream`/`endstream` regions for `(..) Tj` show-text operators.
///
/// The delimiters are matched as plain text anchors, not as PDF objects.
/// Uncompressed content streams carry their text payload inline in this
/// form, making this the highest-precision pass when it fires.
pub(crate) struct StreamObjectScan;

impl Strategy for StreamObjectScan {
    fn kind(&self) -> StrategyKind {
        StrategyKind::StreamObject
    }

    fn extract(&self, view: &str, _config: &ScanConfig) -> Vec<Fragment> {
        let mut fragments = Vec::new();
        for region in STREAM_RE.captures_iter(view) {
            for caps in TJ_RE.captures_iter(region.get(1).map_or("", |m| m.as_str())) {
                let text = &caps[1];
                if text.chars().any(|c| c.is_ascii_alphabetic()) {
                    push_fragment(&mut fragments, StrategyKind::StreamObject, text.to_string());
                }
            }
        }
        fragments
    }
}

// ── Parenthesis-literal scan ────────────────────────────────────────────────

/// Scans the whole buffer for `(..)` literal strings, escape sequences
/// included. Broader and noisier than the stream scan; catches text that
/// sits outside stream/operator framing.
pub(crate) struct ParenLiteralScan;

impl Strategy for ParenLiteralScan {
    fn kind(&self) -> StrategyKind {
        StrategyKind::ParenLiteral
    }

    fn extract(&self, view: &str, _config: &ScanConfig) -> Vec<Fragment> {
        let mut fragments = Vec::new();
        for caps in PAREN_RE.captures_iter(view) {
            let decoded = decode_paren_escapes(&caps[1]);
            // Guard against binary noise that happens to sit in parens.
            if decoded.chars().count() > 1
                && decoded.chars().any(|c| c.is_ascii_alphanumeric())
            {
                push_fragment(&mut fragments, StrategyKind::ParenLiteral, decoded);
            }
        }
        fragments
    }
}

// ── Hex-literal scan ────────────────────────────────────────────────────────

/// Scans for `<..>` hex string literals, PDF's alternate literal-string
/// encoding. Independent of and complementary to the parenthesis scan.
pub(crate) struct HexLiteralScan;

impl Strategy for HexLiteralScan {
    fn kind(&self) -> StrategyKind {
        StrategyKind::HexLiteral
    }

    fn extract(&self, view: &str, _config: &ScanConfig) -> Vec<Fragment> {
        let mut fragments = Vec::new();
        for caps in HEX_RE.captures_iter(view) {
            let hex: String = caps[1].chars().filter(|c| !c.is_whitespace()).collect();
            let Some(decoded) = decode_hex_pairs(&hex) else {
                continue;
            };
            if decoded.chars().count() > 1 && decoded.chars().any(|c| c.is_ascii_alphabetic()) {
                push_fragment(&mut fragments, StrategyKind::HexLiteral, decoded);
            }
        }
        fragments
    }
}

// ── Text-object scan ────────────────────────────────────────────────────────

/// Scans `BT .. ET` text objects for single (`(..) Tj`) and array
/// (`[..] TJ`) show-text operators. Kerning adjustments interleaved in TJ
/// arrays are ignored. Best precision/recall balance of the structured
/// passes.
pub(crate) struct TextObjectScan;

impl Strategy for TextObjectScan {
    fn kind(&self) -> StrategyKind {
        StrategyKind::TextObject
    }

    fn extract(&self, view: &str, _config: &ScanConfig) -> Vec<Fragment> {
        let mut fragments = Vec::new();
        for region in TEXT_OBJECT_RE.captures_iter(view) {
            let body = region.get(1).map_or("", |m| m.as_str());

            for caps in TJ_RE.captures_iter(body) {
                let text = &caps[1];
                if text.chars().any(|c| c.is_ascii_alphanumeric()) {
                    push_fragment(&mut fragments, StrategyKind::TextObject, text.to_string());
                }
            }

            for arr in TJ_ARRAY_RE.captures_iter(body) {
                let inner = arr.get(1).map_or("", |m| m.as_str());
                for caps in ARRAY_STRING_RE.captures_iter(inner) {
                    let text = &caps[1];
                    if text.chars().any(|c| c.is_ascii_alphanumeric()) {
                        push_fragment(&mut fragments, StrategyKind::TextObject, text.to_string());
                    }
                }
            }
        }
        fragments
    }
}

// ── Loose pattern fallback ──────────────────────────────────────────────────

/// Raw-buffer scan for plausible prose runs. Trades precision for recall:
/// some producers emit content the structured passes miss entirely. The
/// engine only runs this pass when the structured passes found too little
/// to trust, to avoid polluting good output with structural noise.
pub(crate) struct LoosePatternScan;

impl Strategy for LoosePatternScan {
    fn kind(&self) -> StrategyKind {
        StrategyKind::LoosePattern
    }

    fn extract(&self, view: &str, config: &ScanConfig) -> Vec<Fragment> {
        let mut fragments = Vec::new();
        for m in LOOSE_RUN_RE.find_iter(view) {
            let run = m.as_str();
            if run.len() < config.min_run_chars {
                continue;
            }
            // Uppercase ASCII runs are usually structural tokens, not prose.
            if run.len() >= config.upper_run_limit
                && run.chars().all(|c| c.is_ascii_uppercase())
            {
                continue;
            }
            if run.chars().all(|c| c.is_ascii_digit()) {
                continue;
            }
            if !run.chars().any(|c| c.is_ascii_alphabetic()) {
                continue;
            }
            // Single words match binary coincidences too often; require at
            // least two space-separated tokens.
            if run.split(' ').filter(|t| !t.is_empty()).count() < 2 {
                continue;
            }
            push_fragment(
                &mut fragments,
                StrategyKind::LoosePattern,
                run.trim().to_string(),
            );
        }
        fragments
    }
}
