// crates/resource-l10n-core/src/runtime/error.rs
// ============================================================================
// Module: Resolution Errors
// Description: Failures surfaced by resource resolution.
// Purpose: Give callers structured, non-retryable error values.
// Dependencies: crate::core, thiserror
// ============================================================================

//! ## Overview
//! Resolution fails only on caller-side mistakes. Absent base cultures,
//! missing overrides, and unused placeholders are not errors.

use thiserror::Error;

use crate::core::CultureId;
use crate::core::ResourceId;

/// Resolution errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// A supplied argument has no `{key}` placeholder in the selected text.
    #[error("localized text did not contain placeholder '{{{key}}}' in translation for culture {culture}")]
    UnmatchedParameter {
        /// The unmatched argument key.
        key: String,
        /// Culture whose text was selected.
        culture: CultureId,
    },
    /// The metadata provider does not know the resource.
    #[error("unknown localizable resource: {0}")]
    UnknownResource(ResourceId),
}
