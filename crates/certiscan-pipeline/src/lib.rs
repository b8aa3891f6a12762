//! # certiscan-pipeline
//!
//! The verification orchestrator.  `Pipeline::verify` runs the straight-line
//! flow with no branching back and no retries:
//!
//!   extension → kind → extract → featurize → score → Verdict
//!
//! Two typed non-verdict outcomes exist:
//!
//! - `UnsupportedFileType` — the extension is outside the recognized set;
//!   raised before any extraction attempt.
//! - `EmptyExtraction` — extraction yielded nothing usable; "could not
//!   assess", never to be confused with a forged verdict.
//!
//! Each call is independent.  The pipeline holds only read-only state (the
//! issuer registry inside the feature extractor, the scoring model), so a
//! single instance is safe to share across concurrent callers.

use std::path::Path;

use tracing::{debug, info};

use certiscan_contracts::{
    document::DocumentKind,
    error::{CertiscanError, CertiscanResult},
    extraction::ExtractionOutcome,
    verdict::Verdict,
};
use certiscan_extract::DocumentTextExtractor;
use certiscan_features::{FeatureExtractor, IssuerRegistry};
use certiscan_score::ScoringModel;

/// One verification pipeline: extractor, feature extractor, scoring model.
///
/// Construct once at startup and reuse for every call.
pub struct Pipeline {
    extractor: DocumentTextExtractor,
    features: FeatureExtractor,
    model: ScoringModel,
}

impl Pipeline {
    /// Build a pipeline over `registry` with default extraction backends
    /// and the production scoring rubric.
    pub fn new(registry: IssuerRegistry) -> Self {
        Self {
            extractor: DocumentTextExtractor::new(),
            features: FeatureExtractor::new(registry),
            model: ScoringModel::default(),
        }
    }

    /// Replace the scoring model (e.g. one loaded from a TOML override).
    pub fn with_model(mut self, model: ScoringModel) -> Self {
        self.model = model;
        self
    }

    /// Use the given Tesseract language code for image OCR.
    pub fn with_ocr_language(mut self, language: impl Into<String>) -> Self {
        self.extractor = DocumentTextExtractor::with_ocr_language(language);
        self
    }

    /// Verify the document at `path` and return its `Verdict`.
    ///
    /// # Errors
    ///
    /// - `CertiscanError::UnsupportedFileType` when the extension (matched
    ///   case-insensitively) is not `png`, `jpg`, `jpeg`, or `pdf`.  A path
    ///   with no extension at all is reported the same way.  No extraction
    ///   is attempted in either case.
    /// - `CertiscanError::EmptyExtraction` when extraction produced no
    ///   usable text.  OCR/parse failures inside the extraction layer never
    ///   surface here directly — they are absorbed into the empty outcome.
    pub fn verify(&self, path: &Path) -> CertiscanResult<Verdict> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_string();

        let kind = DocumentKind::from_extension(&extension).ok_or_else(|| {
            CertiscanError::UnsupportedFileType {
                extension: extension.clone(),
            }
        })?;

        debug!(path = %path.display(), ?kind, "verification starting");

        let text = match self.extractor.extract(path, kind) {
            ExtractionOutcome::Text(text) => text,
            ExtractionOutcome::Empty => {
                return Err(CertiscanError::EmptyExtraction {
                    path: path.display().to_string(),
                })
            }
        };

        let verdict = self.assess_text(&text);

        info!(
            path = %path.display(),
            prediction = %verdict.prediction,
            confidence = %verdict.confidence_score,
            "verification complete"
        );

        Ok(verdict)
    }

    /// Featurize and score already-extracted text.
    ///
    /// Deterministic: identical text always yields an identical `Verdict`.
    /// `verify` delegates here after extraction; collaborators that obtain
    /// text through other means can call it directly.
    pub fn assess_text(&self, text: &str) -> Verdict {
        self.model.score(&self.features.extract(text))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::Path;

    use certiscan_contracts::error::CertiscanError;
    use certiscan_features::IssuerRegistry;

    use super::Pipeline;

    fn pipeline() -> Pipeline {
        Pipeline::new(IssuerRegistry::from_names(["trustedissuerx"]))
    }

    /// A .docx path fails before any extraction attempt — the file does not
    /// even need to exist.
    #[test]
    fn unsupported_extension_fails_fast() {
        let err = pipeline()
            .verify(Path::new("/nonexistent/certificate.docx"))
            .unwrap_err();
        match err {
            CertiscanError::UnsupportedFileType { extension } => {
                assert_eq!(extension, "docx");
            }
            other => panic!("expected UnsupportedFileType, got {:?}", other),
        }
    }

    #[test]
    fn extensionless_path_is_unsupported() {
        let err = pipeline().verify(Path::new("/nonexistent/certificate")).unwrap_err();
        match err {
            CertiscanError::UnsupportedFileType { extension } => {
                assert_eq!(extension, "");
            }
            other => panic!("expected UnsupportedFileType, got {:?}", other),
        }
    }

    /// Extension matching is case-insensitive, so an uppercase suffix is
    /// routed into extraction (and fails there with EmptyExtraction, since
    /// the file is missing — not with UnsupportedFileType).
    #[test]
    fn uppercase_extension_is_recognized() {
        let err = pipeline().verify(Path::new("/nonexistent/certificate.PNG")).unwrap_err();
        assert!(matches!(err, CertiscanError::EmptyExtraction { .. }));
    }

    /// A zero-byte image produces the typed EmptyExtraction outcome, not a
    /// verdict and not a panic.
    #[test]
    fn empty_image_is_empty_extraction() {
        let file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();

        let err = pipeline().verify(file.path()).unwrap_err();
        match err {
            CertiscanError::EmptyExtraction { path } => {
                assert_eq!(path, file.path().display().to_string());
            }
            other => panic!("expected EmptyExtraction, got {:?}", other),
        }
    }

    /// A .pdf file with non-PDF content is swallowed by the extraction
    /// layer and surfaces as EmptyExtraction.
    #[test]
    fn corrupt_pdf_is_empty_extraction() {
        let mut file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
        file.write_all(b"not a pdf document").unwrap();

        let err = pipeline().verify(file.path()).unwrap_err();
        assert!(matches!(err, CertiscanError::EmptyExtraction { .. }));
    }

    /// The canonical full-signal scenario assessed end-to-end from text.
    #[test]
    fn full_signal_text_is_authentic() {
        let verdict = pipeline().assess_text(
            "this diploma was signed by the director on 2024-01-15, issued by trustedissuerx",
        );
        assert_eq!(verdict.prediction.to_string(), "Authentic");
        assert_eq!(verdict.confidence_score, "1.00");
    }

    #[test]
    fn bare_text_is_potentially_forged() {
        let verdict = pipeline().assess_text("a plain document with no relevant markers");
        assert_eq!(verdict.prediction.to_string(), "Potentially Forged");
        assert_eq!(verdict.confidence_score, "0.00");
    }

    /// Identical text yields an identical verdict on every call.
    #[test]
    fn assessment_is_deterministic() {
        let pipeline = pipeline();
        let text = "certificate issued by trustedissuerx, signed 2023-06-30";
        assert_eq!(pipeline.assess_text(text), pipeline.assess_text(text));
    }

    /// The input file is read, never mutated or deleted.
    #[test]
    fn verify_does_not_touch_the_input_file() {
        let mut file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
        file.write_all(b"placeholder bytes").unwrap();

        let _ = pipeline().verify(file.path());

        let contents = std::fs::read(file.path()).unwrap();
        assert_eq!(contents, b"placeholder bytes");
    }
}
