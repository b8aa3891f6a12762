//! Error types for the certiscan verification pipeline.
//!
//! All fallible operations in the pipeline return `CertiscanResult<T>`.
//! Internal OCR and PDF-parse failures are NOT represented here — the
//! extraction layer absorbs those into `ExtractionOutcome::Empty` by
//! contract.  The variants below are the only outcomes a caller of
//! `Pipeline::verify` can observe besides a `Verdict`.

use thiserror::Error;

/// The unified error type for the certiscan workspace.
#[derive(Debug, Error)]
pub enum CertiscanError {
    /// The file's extension is outside the recognized set
    /// (`png`, `jpg`, `jpeg`, `pdf`).  Raised before any extraction attempt.
    #[error("unsupported file type '{extension}': expected png, jpg, jpeg, or pdf")]
    UnsupportedFileType { extension: String },

    /// Text extraction produced nothing usable.
    ///
    /// This signals "could not assess", not "looks forged" — callers must
    /// not translate it into a verdict.
    #[error("no text could be extracted from '{path}'")]
    EmptyExtraction { path: String },

    /// A configuration source (issuer registry, scoring model) is missing
    /// or malformed.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },
}

/// Convenience alias used throughout the certiscan crates.
pub type CertiscanResult<T> = Result<T, CertiscanError>;
