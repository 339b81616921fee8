//! # Country Codes
//!
//! Newtype for the jurisdiction classification carried on identity
//! records and used by country-filtered distribution.
//!
//! ## Validation
//!
//! [`CountryCode`] must be exactly two ASCII letters (ISO 3166-1 alpha-2)
//! and is normalized to lowercase at construction — `"NG"`, `"ng"`, and
//! `"Ng"` all compare equal after construction. Comparison elsewhere in
//! the stack is plain equality; normalization here is what makes that
//! sound.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

// -- Validating Deserialize for CountryCode -----------------------------------

impl<'de> Deserialize<'de> for CountryCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

/// An ISO 3166-1 alpha-2 country code, normalized to lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CountryCode(String);

impl CountryCode {
    /// Create a country code, validating format and normalizing case.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidCountryCode`] if the input is not
    /// exactly two ASCII letters.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.len() != 2 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ValidationError::InvalidCountryCode(raw));
        }
        Ok(Self(trimmed.to_ascii_lowercase()))
    }

    /// Access the lowercase country code string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CountryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for CountryCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn country_code_valid() {
        let cc = CountryCode::new("ng").unwrap();
        assert_eq!(cc.as_str(), "ng");
    }

    #[test]
    fn country_code_normalizes_case() {
        let upper = CountryCode::new("NG").unwrap();
        let lower = CountryCode::new("ng").unwrap();
        assert_eq!(upper, lower);
        assert_eq!(upper.as_str(), "ng");
    }

    #[test]
    fn country_code_rejects_bad_length() {
        assert!(CountryCode::new("").is_err());
        assert!(CountryCode::new("n").is_err());
        assert!(CountryCode::new("nga").is_err());
    }

    #[test]
    fn country_code_rejects_non_alpha() {
        assert!(CountryCode::new("n1").is_err());
        assert!(CountryCode::new("1n").is_err());
        assert!(CountryCode::new("  ").is_err());
    }

    #[test]
    fn country_code_from_str() {
        let cc: CountryCode = "SG".parse().unwrap();
        assert_eq!(cc.as_str(), "sg");
    }

    #[test]
    fn country_code_serde_roundtrip() {
        let cc = CountryCode::new("ng").unwrap();
        let json = serde_json::to_string(&cc).unwrap();
        let deser: CountryCode = serde_json::from_str(&json).unwrap();
        assert_eq!(cc, deser);
    }

    #[test]
    fn country_code_deserialize_rejects_invalid() {
        assert!(serde_json::from_str::<CountryCode>("\"nigeria\"").is_err());
    }
}
