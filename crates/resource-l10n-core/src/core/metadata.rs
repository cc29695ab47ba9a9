// crates/resource-l10n-core/src/core/metadata.rs
// ============================================================================
// Module: Resource Metadata
// Description: Inert metadata records for resources, overrides, and scopes.
// Purpose: Describe what exists and which text each culture maps to.
// Dependencies: crate::core::{culture, identifiers}, serde
// ============================================================================

//! ## Overview
//! Metadata is plain data: a resource carries its intrinsic text and an
//! ordered list of culture overrides; a scope optionally declares the base
//! culture of the un-annotated text inside it and may be nested in a parent
//! scope. Resolution logic lives in [`crate::runtime`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::culture::CultureId;
use crate::core::identifiers::ScopeId;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Culture-tagged alternate text attached to one resource.
///
/// # Invariants
/// - Cultures are not required to be unique across one resource's overrides;
///   declaration order decides which one is used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CultureOverride {
    /// Culture the text is written in.
    pub culture: CultureId,
    /// Literal text, possibly containing `{name}` placeholders.
    pub text: String,
}

impl CultureOverride {
    /// Creates a new override.
    #[must_use]
    pub fn new(culture: CultureId, text: impl Into<String>) -> Self {
        Self {
            culture,
            text: text.into(),
        }
    }
}

/// Registered resource metadata.
///
/// # Invariants
/// - `intrinsic` is always defined; it is the text for the base culture.
/// - `overrides` keep declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceEntry {
    /// Enclosing scope, if the resource is declared inside one.
    pub scope: Option<ScopeId>,
    /// Intrinsic (base) value.
    pub intrinsic: String,
    /// Culture overrides in declaration order.
    pub overrides: Vec<CultureOverride>,
}

/// Registered scope metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeEntry {
    /// Enclosing scope, if nested.
    pub parent: Option<ScopeId>,
    /// Base culture declared directly on this scope.
    pub base_culture: Option<CultureId>,
}
