//! Feature extraction from lowercased document text.
//!
//! Four independent signals, each scanned against the full text:
//!
//! 1. trusted-issuer match (first registry entry wins)
//! 2. certificate-type keyword
//! 3. signature/authority keyword
//! 4. date-shaped token
//!
//! `extract` is a pure function of the text and the injected registry —
//! no filesystem or config access happens here.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use certiscan_contracts::features::FeatureSet;

use crate::registry::IssuerRegistry;

/// Keywords indicating the document is some kind of certificate.
const CERTIFICATE_KEYWORDS: [&str; 5] =
    ["certificate", "award", "completion", "degree", "diploma"];

/// Keywords hinting at a signature or signing authority.
const SIGNATURE_KEYWORDS: [&str; 5] =
    ["signature", "signed", "director", "hod", "head of department"];

/// Date-shaped token: 2-4 digits, `-` or `/`, 2 digits, separator, 2-4
/// digits.  Covers `2024-01-15` and `15/01/2024` alike.  Syntactic only —
/// no calendar validation.
static DATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{2,4}[-/]\d{2}[-/]\d{2,4}").unwrap());

/// Derives a `FeatureSet` from extracted document text.
///
/// Holds the process-wide issuer registry as an injected dependency; the
/// extractor itself has no other state and is safe to share.
#[derive(Debug, Clone)]
pub struct FeatureExtractor {
    registry: IssuerRegistry,
}

impl FeatureExtractor {
    /// Create an extractor consulting the given registry.
    pub fn new(registry: IssuerRegistry) -> Self {
        Self { registry }
    }

    /// Scan `text` for all four signals and return the resulting
    /// `FeatureSet`.
    ///
    /// `text` is expected to be lowercased already (the extraction layer
    /// guarantees this); keyword and issuer matching are plain substring
    /// checks against it.
    pub fn extract(&self, text: &str) -> FeatureSet {
        let features = FeatureSet {
            issuer_found: self.registry.find_match(text).map(str::to_string),
            has_certificate_keyword: CERTIFICATE_KEYWORDS
                .iter()
                .any(|keyword| text.contains(keyword)),
            has_signature_keyword: SIGNATURE_KEYWORDS
                .iter()
                .any(|keyword| text.contains(keyword)),
            has_date: DATE_PATTERN.is_match(text),
        };

        debug!(
            issuer = features.issuer_found.as_deref().unwrap_or("<none>"),
            certificate_keyword = features.has_certificate_keyword,
            signature_keyword = features.has_signature_keyword,
            date = features.has_date,
            "features extracted"
        );

        features
    }
}
