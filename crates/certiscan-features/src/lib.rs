//! # certiscan-features
//!
//! The trusted-issuer registry and the feature extractor.
//!
//! The registry is loaded once at process start (TOML, `trusted = [...]`)
//! and injected into `FeatureExtractor`, which derives the four scoring
//! signals from extracted document text.  Both types are read-only after
//! construction.

pub mod extractor;
pub mod registry;

pub use extractor::FeatureExtractor;
pub use registry::IssuerRegistry;
