//! textsift-extract — best-effort document text extraction.
//!
//! Turns uploaded file bytes into readable text: plain-text and CSV files
//! are decoded directly, while files claiming to be PDFs go through a
//! heuristic scan engine that recovers text without a PDF object model.
//! Extraction is total — callers always get a usable string back.

pub mod document;

pub use document::pdf::{
    extract_pdf, ScanConfig, EXTRACTION_FAILED_SENTINEL, NO_TEXT_SENTINEL,
};
pub use document::{
    detect_kind, parse_file, ExtractionError, FileKind, ParseOptions,
};
