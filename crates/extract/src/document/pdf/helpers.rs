//! Byte normalization, literal decoding, and fragment assembly.

use std::collections::HashSet;

use super::types::{Fragment, ScanConfig, StrategyKind};

/// Map raw bytes 1:1 onto chars U+0000..=U+00FF.
///
/// The passes match literal operators (`Tj`, parentheses, angle brackets)
/// against what is fundamentally binary data; a single-byte-per-char view
/// keeps pattern matching free of multi-byte decoding ambiguity.
pub(crate) fn latin1_view(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

/// Append a fragment, assigning its discovery position within the pass.
pub(crate) fn push_fragment(fragments: &mut Vec<Fragment>, strategy: StrategyKind, text: String) {
    let position = fragments.len();
    fragments.push(Fragment {
        strategy,
        position,
        text,
    });
}

/// Decode PDF literal-string escapes: `\n`, `\r`, `\t`, `\b`, `\f`,
/// `\(`, `\)`, `\\`. An unknown escape keeps the escaped char (backslash
/// dropped); a trailing lone backslash is dropped.
pub(crate) fn decode_paren_escapes(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('b') => out.push('\u{0008}'),
            Some('f') => out.push('\u{000C}'),
            Some(other) => out.push(other),
            None => {}
        }
    }
    out
}

/// Decode a run of hex digits to printable ASCII.
///
/// Odd-length input is malformed and rejected outright; non-printable
/// decoded bytes (outside 32..=126) are dropped from the result rather
/// than failing the whole fragment.
pub(crate) fn decode_hex_pairs(hex: &str) -> Option<String> {
    if hex.len() % 2 != 0 {
        return None;
    }
    let mut out = String::with_capacity(hex.len() / 2);
    for pair in hex.as_bytes().chunks(2) {
        let hi = (pair[0] as char).to_digit(16)?;
        let lo = (pair[1] as char).to_digit(16)?;
        let byte = (hi * 16 + lo) as u8;
        if (32..127).contains(&byte) {
            out.push(byte as char);
        }
    }
    Some(out)
}

/// Join kept fragments in discovery order (pass priority, then position),
/// collapse whitespace runs to single spaces, and apply word-level dedup.
pub(crate) fn assemble(fragments: &[Fragment], config: &ScanConfig) -> String {
    let joined = fragments
        .iter()
        .map(|f| f.text.trim())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    let collapsed = joined.split_whitespace().collect::<Vec<_>>().join(" ");
    dedup_tokens(&collapsed, config.dedup_max_token_len)
}

/// Approximate word-level dedup: walk tokens left to right and drop a
/// token when a case-insensitively equal one was already emitted and the
/// token is at most `max_len` chars. Short repeats are assumed spurious
/// overlap between passes; longer repeats are kept as meaningful. The
/// first occurrence of every token is always kept, in order.
pub(crate) fn dedup_tokens(text: &str, max_len: usize) -> String {
    let mut seen: HashSet<String> = HashSet::new();
    let mut kept: Vec<&str> = Vec::new();
    for token in text.split_whitespace() {
        let key = token.to_lowercase();
        if seen.contains(&key) && token.chars().count() <= max_len {
            continue;
        }
        seen.insert(key);
        kept.push(token);
    }
    kept.join(" ")
}
