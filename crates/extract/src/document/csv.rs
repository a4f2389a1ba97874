use super::txt;

/// CSV files are decoded as plain text; structure-aware parsing happens
/// downstream of extraction.
pub(crate) fn extract_csv(bytes: &[u8]) -> String {
    txt::extract_txt(bytes)
}

/// Preview for CSV content: the first five lines, with a marker when the
/// file continues past them.
pub(crate) fn preview(content: &str) -> String {
    let lines: Vec<&str> = content.lines().collect();
    if lines.len() <= 5 {
        content.to_string()
    } else {
        format!("{}\n...", lines[..5].join("\n"))
    }
}
