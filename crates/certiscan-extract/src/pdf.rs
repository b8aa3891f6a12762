//! PDF text-layer extraction.
//!
//! Uses the `pdf-extract` crate, which walks every page in document order
//! and concatenates the text layer.  Scanned/image-only PDFs come back with
//! no usable text and surface as `ExtractionOutcome::Empty`; no OCR is
//! attempted on PDF inputs.

use std::path::Path;

use tracing::{debug, warn};

use certiscan_contracts::extraction::ExtractionOutcome;

use crate::TextExtractor;

/// Text-layer extractor for `pdf` inputs.
#[derive(Debug, Clone, Default)]
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for PdfTextExtractor {
    /// Extract the concatenated text layer of every page, lowercased.
    /// Never fails: a corrupt, encrypted, or image-only PDF is logged and
    /// absorbed into `ExtractionOutcome::Empty`.
    fn extract(&self, path: &Path) -> ExtractionOutcome {
        match pdf_extract::extract_text(path) {
            Ok(text) => {
                debug!(
                    path = %path.display(),
                    chars = text.len(),
                    "PDF text-layer extraction complete"
                );
                ExtractionOutcome::from_text(text.to_lowercase())
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "PDF extraction failed");
                ExtractionOutcome::Empty
            }
        }
    }
}
