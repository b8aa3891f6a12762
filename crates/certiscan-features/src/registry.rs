//! The trusted-issuer registry.
//!
//! An ordered, read-only list of issuer names, loaded once at process start
//! and injected into the feature extractor.  Matching is first-match-wins in
//! stored order — never best or longest match.
//!
//! Issuer names are normalized to lowercase at load time.  Extracted text is
//! always lowercased, so an unnormalized registry entry containing uppercase
//! letters could never match anything; normalizing here keeps matching
//! effectively case-insensitive for any registry file.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use certiscan_contracts::error::{CertiscanError, CertiscanResult};

/// The top-level structure deserialized from a TOML registry file.
///
/// Example:
/// ```toml
/// trusted = [
///     "coursera",
///     "udemy",
///     "anna university",
/// ]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Ordered list of trusted issuer names.  First match wins.
    pub trusted: Vec<String>,
}

/// An ordered, immutable list of trusted issuer names.
///
/// Construct once via `from_file` (or `from_names` in tests), then share
/// freely — the registry is never mutated after construction, so it is safe
/// to use from concurrent callers without locking.
#[derive(Debug, Clone)]
pub struct IssuerRegistry {
    issuers: Vec<String>,
}

impl IssuerRegistry {
    /// Build a registry directly from a list of names.
    ///
    /// Names are lowercased; order is preserved.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let issuers: Vec<String> = names
            .into_iter()
            .map(|name| name.into().to_lowercase())
            .collect();
        debug!(count = issuers.len(), "issuer registry constructed");
        Self { issuers }
    }

    /// Parse `s` as a TOML `RegistryConfig` and build a registry.
    ///
    /// Returns `CertiscanError::ConfigError` if the TOML is malformed or
    /// does not match the expected schema.
    pub fn from_toml_str(s: &str) -> CertiscanResult<Self> {
        let config: RegistryConfig = toml::from_str(s).map_err(|e| CertiscanError::ConfigError {
            reason: format!("failed to parse issuer registry TOML: {}", e),
        })?;
        Ok(Self::from_names(config.trusted))
    }

    /// Read the file at `path` and parse it as a TOML registry.
    ///
    /// Returns `CertiscanError::ConfigError` if the file cannot be read or
    /// its contents are not valid TOML matching `RegistryConfig`.
    pub fn from_file(path: &Path) -> CertiscanResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| CertiscanError::ConfigError {
            reason: format!("failed to read issuer registry '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// Scan `text` for the first registry entry that occurs as a substring.
    ///
    /// Entries are tested in stored order; the first hit wins even when a
    /// later entry would also match.  Returns `None` when no entry matches.
    pub fn find_match<'a>(&'a self, text: &str) -> Option<&'a str> {
        self.issuers
            .iter()
            .find(|issuer| text.contains(issuer.as_str()))
            .map(String::as_str)
    }

    /// Number of issuers in the registry.
    pub fn len(&self) -> usize {
        self.issuers.len()
    }

    /// True if the registry holds no issuers.
    pub fn is_empty(&self) -> bool {
        self.issuers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::IssuerRegistry;

    #[test]
    fn first_match_wins_in_stored_order() {
        let registry = IssuerRegistry::from_names(["foo", "bar"]);
        // Both entries occur; "foo" is stored first.
        assert_eq!(registry.find_match("bar came before foo here"), Some("foo"));
    }

    #[test]
    fn no_match_returns_none() {
        let registry = IssuerRegistry::from_names(["coursera", "udemy"]);
        assert_eq!(registry.find_match("a plain document"), None);
    }

    #[test]
    fn names_are_lowercased_at_load() {
        // Extracted text is always lowercase; a mixed-case registry entry
        // must still match it.
        let registry = IssuerRegistry::from_names(["Anna University"]);
        assert_eq!(
            registry.find_match("issued by anna university in 2024"),
            Some("anna university")
        );
    }

    #[test]
    fn from_toml_str_parses_trusted_list() {
        let registry =
            IssuerRegistry::from_toml_str("trusted = [\"coursera\", \"udemy\"]").unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.find_match("verified by udemy"), Some("udemy"));
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        let err = IssuerRegistry::from_toml_str("trusted = not-a-list").unwrap_err();
        assert!(err.to_string().contains("configuration error"));
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let err =
            IssuerRegistry::from_file(std::path::Path::new("/nonexistent/issuers.toml"))
                .unwrap_err();
        assert!(err.to_string().contains("configuration error"));
    }

    #[test]
    fn empty_registry_matches_nothing() {
        let registry = IssuerRegistry::from_names(Vec::<String>::new());
        assert!(registry.is_empty());
        assert_eq!(registry.find_match("certificate from coursera"), None);
    }
}
