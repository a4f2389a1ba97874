use std::env;

use serde::{Deserialize, Serialize};

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_usize(key: &str, default: usize) -> usize {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

// ── Top-level config ──────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub extraction: ExtractionConfig,
    pub preview: PreviewConfig,
}

/// Tunables for the heuristic PDF scan. The thresholds are empirical and
/// deliberately kept configurable rather than hard-coded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// The loose fallback pass runs only when the structured passes
    /// produced fewer fragments than this (default: 5).
    pub fallback_threshold: usize,
    /// Repeated tokens up to this many chars are dropped during dedup
    /// (default: 10).
    pub dedup_max_token_len: usize,
    /// Assembled text shorter than this is replaced by the no-text
    /// sentinel (default: 10).
    pub min_text_chars: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewConfig {
    /// Content preview length in characters (default: 300).
    pub preview_chars: usize,
}

impl Config {
    /// Build config from environment variables (call `load_dotenv()` first).
    /// Missing or unparseable values fall back to defaults.
    pub fn from_env() -> Self {
        Self {
            extraction: ExtractionConfig {
                fallback_threshold: env_usize("TEXTSIFT_FALLBACK_THRESHOLD", 5),
                dedup_max_token_len: env_usize("TEXTSIFT_DEDUP_MAX_TOKEN_LEN", 10),
                min_text_chars: env_usize("TEXTSIFT_MIN_TEXT_CHARS", 10),
            },
            preview: PreviewConfig {
                preview_chars: env_usize("TEXTSIFT_PREVIEW_CHARS", 300),
            },
        }
    }
}
