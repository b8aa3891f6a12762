//! # certiscan-score
//!
//! The fixed-rule scoring model: a weights table and a threshold, applied
//! to a `FeatureSet` to produce the final `Verdict`.  See `model` for the
//! rubric.

pub mod model;

pub use model::ScoringModel;
