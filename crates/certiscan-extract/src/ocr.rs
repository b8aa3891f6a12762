//! OCR text extraction for raster certificate images.
//!
//! Backed by the Tesseract CLI via `rusty-tesseract`, so nothing links
//! against libtesseract at build time.  A missing binary, an unreadable
//! image, or an engine failure all collapse into
//! `ExtractionOutcome::Empty` — the pipeline turns that into its
//! "could not assess" outcome.

use std::path::Path;

use rusty_tesseract::{Args, Image};
use tracing::{debug, warn};

use certiscan_contracts::extraction::ExtractionOutcome;

use crate::TextExtractor;

/// Tesseract-backed extractor for `png`/`jpg`/`jpeg` inputs.
#[derive(Debug, Clone)]
pub struct OcrTextExtractor {
    /// Tesseract language code passed as `-l` (default `"eng"`).
    language: String,
}

impl OcrTextExtractor {
    /// Create an extractor using the default English language model.
    pub fn new() -> Self {
        Self::with_language("eng")
    }

    /// Create an extractor using the given Tesseract language code.
    pub fn with_language(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
        }
    }
}

impl Default for OcrTextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextExtractor for OcrTextExtractor {
    /// Run OCR over the image at `path` and return the recognized text,
    /// lowercased.  Never fails: any error is logged and absorbed into
    /// `ExtractionOutcome::Empty`.
    fn extract(&self, path: &Path) -> ExtractionOutcome {
        let image = match Image::from_path(path) {
            Ok(image) => image,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to open image for OCR");
                return ExtractionOutcome::Empty;
            }
        };

        let args = Args {
            lang: self.language.clone(),
            ..Args::default()
        };

        match rusty_tesseract::image_to_string(&image, &args) {
            Ok(text) => {
                debug!(
                    path = %path.display(),
                    chars = text.len(),
                    "OCR extraction complete"
                );
                ExtractionOutcome::from_text(text.to_lowercase())
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "OCR engine failed");
                ExtractionOutcome::Empty
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use certiscan_contracts::extraction::ExtractionOutcome;

    use super::OcrTextExtractor;
    use crate::TextExtractor;

    /// A path that does not exist must yield Empty, not a panic or error.
    #[test]
    fn missing_file_yields_empty() {
        let extractor = OcrTextExtractor::new();
        let outcome = extractor.extract(std::path::Path::new("/nonexistent/cert.png"));
        assert_eq!(outcome, ExtractionOutcome::Empty);
    }

    /// A file with a .png extension but garbage content must yield Empty —
    /// this passes whether or not Tesseract is installed on the host.
    #[test]
    fn corrupt_image_yields_empty() {
        let mut file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        file.write_all(b"this is not a png").unwrap();

        let extractor = OcrTextExtractor::new();
        let outcome = extractor.extract(file.path());
        assert_eq!(outcome, ExtractionOutcome::Empty);
    }
}
