//! The feature set derived from extracted document text.

use serde::{Deserialize, Serialize};

/// The four signals the feature extractor derives from document text.
///
/// Produced exactly once per document and never mutated afterwards.  The
/// scorer consumes this by reference; the struct is a plain value with no
/// behavior of its own.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FeatureSet {
    /// The first trusted issuer name found in the text, in registry order,
    /// or `None` if no registry entry matched.
    pub issuer_found: Option<String>,

    /// True if the text contains at least one certificate-type keyword
    /// (`certificate`, `award`, `completion`, `degree`, `diploma`).
    pub has_certificate_keyword: bool,

    /// True if the text contains at least one signature/authority keyword
    /// (`signature`, `signed`, `director`, `hod`, `head of department`).
    pub has_signature_keyword: bool,

    /// True if the text contains a date-shaped token (digits separated by
    /// `-` or `/`).  Syntactic only — no calendar validation.
    pub has_date: bool,
}
