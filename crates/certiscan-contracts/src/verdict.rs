//! The terminal output of the verification pipeline.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The classification a scored document receives.
///
/// Serialized with the same human-facing strings the original report format
/// uses, so a `--json` consumer sees `"Authentic"` / `"Potentially Forged"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Prediction {
    #[serde(rename = "Authentic")]
    Authentic,
    #[serde(rename = "Potentially Forged")]
    PotentiallyForged,
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prediction::Authentic => write!(f, "Authentic"),
            Prediction::PotentiallyForged => write!(f, "Potentially Forged"),
        }
    }
}

/// The final output of a verification call.
///
/// Not persisted anywhere — the verdict lives only as the return value of
/// `Pipeline::verify`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    /// The classification label.
    pub prediction: Prediction,

    /// Raw score divided by the maximum attainable score, rendered with
    /// exactly two decimal places (e.g. `"0.70"`).
    pub confidence_score: String,

    /// Fixed-order, human-readable summary of each feature's contribution.
    /// For audit display only; nothing parses this.
    pub details: String,
}

#[cfg(test)]
mod tests {
    use super::{Prediction, Verdict};

    #[test]
    fn prediction_display_matches_report_strings() {
        assert_eq!(Prediction::Authentic.to_string(), "Authentic");
        assert_eq!(Prediction::PotentiallyForged.to_string(), "Potentially Forged");
    }

    #[test]
    fn prediction_serializes_to_report_strings() {
        let json = serde_json::to_string(&Prediction::PotentiallyForged).unwrap();
        assert_eq!(json, "\"Potentially Forged\"");

        let decoded: Prediction = serde_json::from_str("\"Authentic\"").unwrap();
        assert_eq!(decoded, Prediction::Authentic);
    }

    #[test]
    fn verdict_round_trips_through_json() {
        let original = Verdict {
            prediction: Prediction::Authentic,
            confidence_score: "0.70".to_string(),
            details: "Issuer check: Found (trustedissuerx). ".to_string(),
        };
        let json = serde_json::to_string(&original).unwrap();
        let decoded: Verdict = serde_json::from_str(&json).unwrap();
        assert_eq!(original, decoded);
    }
}
