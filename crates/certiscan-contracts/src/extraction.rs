//! The outcome of a text-extraction attempt.
//!
//! The original system caught every OCR/parse exception and substituted an
//! empty string.  That policy is kept, but made explicit: extraction
//! backends are infallible by contract and return this sum type instead of
//! hiding failure inside a sentinel value.

use serde::{Deserialize, Serialize};

/// Best-effort extracted text: either something usable, or nothing.
///
/// `Empty` covers both "the file could not be read/parsed" and "the file
/// parsed but contained no text" — the pipeline treats the two identically
/// and surfaces them as `CertiscanError::EmptyExtraction`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExtractionOutcome {
    /// Lowercased plain text with at least one non-whitespace character.
    Text(String),
    /// No usable text was extracted.
    Empty,
}

impl ExtractionOutcome {
    /// Classify raw extractor output.
    ///
    /// A string that is empty or whitespace-only becomes `Empty`; anything
    /// else is carried through unmodified (backends lowercase before
    /// calling this).
    pub fn from_text(text: String) -> Self {
        if text.trim().is_empty() {
            Self::Empty
        } else {
            Self::Text(text)
        }
    }

    /// True if no usable text was extracted.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::ExtractionOutcome;

    #[test]
    fn nonblank_text_is_kept() {
        let outcome = ExtractionOutcome::from_text("certificate of completion".to_string());
        assert_eq!(
            outcome,
            ExtractionOutcome::Text("certificate of completion".to_string())
        );
        assert!(!outcome.is_empty());
    }

    #[test]
    fn empty_string_becomes_empty() {
        assert!(ExtractionOutcome::from_text(String::new()).is_empty());
    }

    #[test]
    fn whitespace_only_becomes_empty() {
        assert!(ExtractionOutcome::from_text("  \n\t ".to_string()).is_empty());
    }
}
