//! # certiscan-extract
//!
//! Best-effort text extraction for the certiscan pipeline.
//!
//! Two backends sit behind the `TextExtractor` trait:
//!
//! - `OcrTextExtractor` — Tesseract OCR for raster images
//! - `PdfTextExtractor` — text-layer extraction for PDFs
//!
//! Both are **infallible by contract**: every internal failure (missing
//! file, corrupt encoding, engine error) is logged and absorbed into
//! `ExtractionOutcome::Empty`.  The only extraction-related error the
//! pipeline ever raises is `UnsupportedFileType`, and that happens before
//! this crate is reached.  Extraction reads the input file and nothing
//! else — it never mutates or deletes it.

use std::path::Path;

use certiscan_contracts::{document::DocumentKind, extraction::ExtractionOutcome};

pub mod ocr;
pub mod pdf;

pub use ocr::OcrTextExtractor;
pub use pdf::PdfTextExtractor;

/// A text-extraction backend.
///
/// Implementations must be pure readers of the file at `path` and must
/// never panic or return an error — failure is always expressed as
/// `ExtractionOutcome::Empty`.
pub trait TextExtractor: Send + Sync {
    /// Produce lowercased plain text from the file at `path`, best effort.
    fn extract(&self, path: &Path) -> ExtractionOutcome;
}

/// Dispatches a document to the backend matching its `DocumentKind`.
///
/// Owns one instance of each backend; safe to share across threads since
/// neither backend holds mutable state.
#[derive(Debug, Clone, Default)]
pub struct DocumentTextExtractor {
    ocr: OcrTextExtractor,
    pdf: PdfTextExtractor,
}

impl DocumentTextExtractor {
    /// Create a dispatcher with default backends (English OCR).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a dispatcher whose OCR backend uses the given Tesseract
    /// language code.
    pub fn with_ocr_language(language: impl Into<String>) -> Self {
        Self {
            ocr: OcrTextExtractor::with_language(language),
            pdf: PdfTextExtractor::new(),
        }
    }

    /// Extract text from `path` using the backend for `kind`.
    pub fn extract(&self, path: &Path, kind: DocumentKind) -> ExtractionOutcome {
        match kind {
            DocumentKind::Image => self.ocr.extract(path),
            DocumentKind::Pdf => self.pdf.extract(path),
        }
    }
}
