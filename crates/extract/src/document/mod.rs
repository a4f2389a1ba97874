//! Document parsing: per-type dispatch, preview derivation, and assembly
//! of the [`ParsedFile`] record handed to the ingestion layer.

mod csv;
pub mod pdf;
mod txt;

use chrono::Utc;
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use textsift_core::ParsedFile;

use pdf::ScanConfig;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Unsupported file type: {0}")]
    UnsupportedType(String),
}

/// File types with a dedicated parsing path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    Txt,
    Csv,
}

/// Resolve the parsing path from the declared MIME type and the filename
/// extension. A recognized MIME type wins; the extension is consulted
/// only when the MIME type is absent or unknown.
pub fn detect_kind(filename: &str, mime: Option<&str>) -> Result<FileKind, ExtractionError> {
    let mime = mime.unwrap_or("");
    match mime {
        "application/pdf" => return Ok(FileKind::Pdf),
        "text/plain" => return Ok(FileKind::Txt),
        "text/csv" => return Ok(FileKind::Csv),
        _ => {}
    }

    // A dot-less filename has no extension at all.
    let ext = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "pdf" => Ok(FileKind::Pdf),
        "txt" | "text" => Ok(FileKind::Txt),
        "csv" => Ok(FileKind::Csv),
        _ if !mime.is_empty() => Err(ExtractionError::UnsupportedType(mime.to_string())),
        _ if !ext.is_empty() => Err(ExtractionError::UnsupportedType(format!(".{ext}"))),
        _ => Err(ExtractionError::UnsupportedType(filename.to_string())),
    }
}

/// Options for [`parse_file`].
#[derive(Debug, Clone)]
pub struct ParseOptions {
    pub scan: ScanConfig,
    /// Content preview length in characters (default: 300).
    pub preview_chars: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            scan: ScanConfig::default(),
            preview_chars: 300,
        }
    }
}

/// Parse an uploaded file into a [`ParsedFile`] record.
///
/// Total on content: unknown file types fall back to the plain-text path,
/// and the PDF engine signals trouble through its sentinel strings rather
/// than errors.
pub fn parse_file(
    bytes: &[u8],
    filename: &str,
    mime: Option<&str>,
    opts: &ParseOptions,
) -> ParsedFile {
    let kind = detect_kind(filename, mime).unwrap_or_else(|err| {
        debug!(filename, "{err}; treating as plain text");
        FileKind::Txt
    });

    let parsed_content = match kind {
        FileKind::Pdf => pdf::extract_pdf(bytes, &opts.scan),
        FileKind::Txt => txt::extract_txt(bytes),
        FileKind::Csv => csv::extract_csv(bytes),
    };

    let content_preview = match kind {
        FileKind::Csv => csv::preview(&parsed_content),
        _ => char_preview(&parsed_content, opts.preview_chars),
    };

    ParsedFile {
        id: Uuid::new_v4(),
        filename: filename.to_string(),
        file_type: mime
            .filter(|m| !m.is_empty())
            .unwrap_or("application/octet-stream")
            .to_string(),
        file_size: bytes.len() as u64,
        content_preview,
        parsed_content,
        parsed_at: Utc::now(),
    }
}

/// First `max_chars` characters of `text`, with an ellipsis when truncated.
fn char_preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let head: String = text.chars().take(max_chars).collect();
    format!("{head}...")
}
