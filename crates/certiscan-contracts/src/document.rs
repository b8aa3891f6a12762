//! Document kind classification.
//!
//! The pipeline routes a file to an extraction backend based on its
//! extension alone — there is no content sniffing.  `from_extension` is the
//! single place where the recognized extension set lives.

use serde::{Deserialize, Serialize};

/// The extraction route for an uploaded document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// A raster image (`png`, `jpg`, `jpeg`) — routed through OCR.
    Image,
    /// A PDF document — routed through text-layer extraction.
    Pdf,
}

impl DocumentKind {
    /// Map a file extension (without the dot) to a `DocumentKind`.
    ///
    /// Matching is case-insensitive.  Returns `None` for any extension
    /// outside the recognized set, which the pipeline reports as
    /// `CertiscanError::UnsupportedFileType`.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" | "jpg" | "jpeg" => Some(Self::Image),
            "pdf" => Some(Self::Pdf),
            _ => None,
        }
    }
}
