use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A parsed upload: raw-file metadata plus the extracted text fields the
/// ingestion service persists verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedFile {
    pub id: Uuid,
    pub filename: String,
    /// Declared MIME type ("application/octet-stream" when absent).
    pub file_type: String,
    /// Size of the raw upload in bytes.
    pub file_size: u64,
    /// Short preview of `parsed_content` for listing views.
    pub content_preview: String,
    /// Full extracted text, or one of the extraction sentinels.
    pub parsed_content: String,
    pub parsed_at: DateTime<Utc>,
}
