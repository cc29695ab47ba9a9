// crates/resource-l10n-core/src/core/culture.rs
// ============================================================================
// Module: Culture Identifiers
// Description: Normalized, value-comparable culture (locale) tags.
// Purpose: Give cultures a canonical form so equality is by value.
// Dependencies: serde, thiserror, unic-langid
// ============================================================================

//! ## Overview
//! A [`CultureId`] is a BCP 47 language identifier such as `en`, `pl-PL`,
//! or `zh-Hant-TW`. Tags are validated and canonicalized with
//! [`unic_langid::LanguageIdentifier`], so `en_us`, `EN-us`, and `en-US`
//! compare equal. The identifier keeps only the canonical string; equality,
//! ordering, and hashing are by that value.
//!
//! No registry of known languages is consulted; any well-formed tag is
//! accepted.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;
use unic_langid::LanguageIdentifier;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Maximum accepted length of a raw culture tag, in bytes.
pub const MAX_CULTURE_TAG_LENGTH: usize = 64;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Canonical culture tag.
///
/// # Invariants
/// - Holds the canonical form of a valid BCP 47 language identifier.
/// - Two values are equal exactly when their canonical tags are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CultureId(String);

/// Culture tag parsing errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CultureError {
    /// The tag was empty or whitespace.
    #[error("culture tag is empty")]
    Empty,
    /// The tag exceeded [`MAX_CULTURE_TAG_LENGTH`].
    #[error("culture tag exceeds {MAX_CULTURE_TAG_LENGTH} bytes")]
    TooLong,
    /// The tag is not a well-formed language identifier.
    #[error("malformed culture tag '{tag}': {reason}")]
    Malformed {
        /// The raw tag being parsed.
        tag: String,
        /// Parser diagnostic.
        reason: String,
    },
}

impl CultureId {
    /// Parses and canonicalizes a culture tag; `_` is accepted as a separator.
    ///
    /// # Errors
    ///
    /// Returns [`CultureError`] when the tag is empty, too long, or malformed.
    pub fn parse(raw: &str) -> Result<Self, CultureError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CultureError::Empty);
        }
        if trimmed.len() > MAX_CULTURE_TAG_LENGTH {
            return Err(CultureError::TooLong);
        }
        let candidate = trimmed.replace('_', "-");
        let identifier =
            LanguageIdentifier::from_str(&candidate).map_err(|err| CultureError::Malformed {
                tag: trimmed.to_string(),
                reason: err.to_string(),
            })?;
        Ok(Self(identifier.to_string()))
    }

    /// Returns the canonical tag.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the language subtag (`pl` for `pl-PL`).
    #[must_use]
    pub fn language(&self) -> &str {
        self.0.split_once('-').map_or(self.0.as_str(), |(language, _)| language)
    }
}

impl fmt::Display for CultureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for CultureId {
    type Err = CultureError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl TryFrom<String> for CultureId {
    type Error = CultureError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for CultureId {
    type Error = CultureError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<CultureId> for String {
    fn from(value: CultureId) -> Self {
        value.0
    }
}
