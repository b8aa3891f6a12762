//! The fixed-rule scoring model.
//!
//! What the original system calls a "model" is a deterministic weighted-sum
//! classifier: four fixed point weights, one threshold.  It is represented
//! here as a plain configuration struct so the weights are trivially
//! testable and tunable — there is no learned-model abstraction anywhere.
//!
//! Scoring is total: every `FeatureSet` produces a `Verdict`, with no error
//! path.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use certiscan_contracts::{
    error::{CertiscanError, CertiscanResult},
    features::FeatureSet,
    verdict::{Prediction, Verdict},
};

/// Weights and threshold for the rule-based classifier.
///
/// The default values are the production rubric:
///
/// | signal              | points |
/// |---------------------|--------|
/// | issuer found        |   50   |
/// | certificate keyword |   20   |
/// | signature keyword   |   20   |
/// | date found          |   10   |
///
/// with `threshold = 60` (strictly-greater comparison) and
/// `max_score = 100`.  The issuer signal is load-bearing: issuer + any one
/// keyword passes, but all three non-issuer signals together (50) do not.
///
/// The struct is serde-derived so an alternative rubric can be loaded from
/// TOML via `from_file` for tuning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringModel {
    pub issuer_weight: u32,
    pub certificate_weight: u32,
    pub signature_weight: u32,
    pub date_weight: u32,
    /// A document is Authentic iff its raw score is strictly greater than
    /// this.
    pub threshold: u32,
    /// Denominator for the confidence ratio.
    pub max_score: u32,
}

impl Default for ScoringModel {
    fn default() -> Self {
        Self {
            issuer_weight: 50,
            certificate_weight: 20,
            signature_weight: 20,
            date_weight: 10,
            threshold: 60,
            max_score: 100,
        }
    }
}

impl ScoringModel {
    /// Parse `s` as a TOML scoring model.  Fields omitted from the document
    /// keep their default rubric values.
    pub fn from_toml_str(s: &str) -> CertiscanResult<Self> {
        toml::from_str(s).map_err(|e| CertiscanError::ConfigError {
            reason: format!("failed to parse scoring model TOML: {}", e),
        })
    }

    /// Read the file at `path` and parse it as a TOML scoring model.
    pub fn from_file(path: &Path) -> CertiscanResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| CertiscanError::ConfigError {
            reason: format!("failed to read scoring model '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// The weighted sum of the present features.
    ///
    /// Monotonic by construction: every weight is non-negative, so turning
    /// any feature on never decreases the score.
    pub fn raw_score(&self, features: &FeatureSet) -> u32 {
        let mut score = 0;
        if features.issuer_found.is_some() {
            score += self.issuer_weight;
        }
        if features.has_certificate_keyword {
            score += self.certificate_weight;
        }
        if features.has_signature_keyword {
            score += self.signature_weight;
        }
        if features.has_date {
            score += self.date_weight;
        }
        score
    }

    /// Score `features` and produce the final `Verdict`.
    ///
    /// Total function — every well-formed `FeatureSet` yields a verdict.
    /// Confidence is `raw_score / max_score` rendered with exactly two
    /// decimal places.  The details string reports each feature's raw value
    /// in fixed order for human audit; nothing downstream parses it.
    pub fn score(&self, features: &FeatureSet) -> Verdict {
        let score = self.raw_score(features);

        let prediction = if score > self.threshold {
            Prediction::Authentic
        } else {
            Prediction::PotentiallyForged
        };

        let confidence = f64::from(score) / f64::from(self.max_score);

        let issuer_clause = match &features.issuer_found {
            Some(issuer) => format!("Found ({})", issuer),
            None => "Not Found".to_string(),
        };
        let details = format!(
            "Issuer check: {}. Keywords valid: {}. Signature hint: {}. Date found: {}.",
            issuer_clause,
            features.has_certificate_keyword,
            features.has_signature_keyword,
            features.has_date,
        );

        debug!(score, threshold = self.threshold, %prediction, "features scored");

        Verdict {
            prediction,
            confidence_score: format!("{:.2}", confidence),
            details,
        }
    }
}
