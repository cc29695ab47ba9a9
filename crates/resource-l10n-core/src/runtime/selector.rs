// crates/resource-l10n-core/src/runtime/selector.rs
// ============================================================================
// Module: Override Selection
// Description: Chooses between a resource's intrinsic value and its overrides.
// Purpose: Apply the base-culture and first-match rules deterministically.
// Dependencies: crate::core, serde
// ============================================================================

//! ## Overview
//! Selection rules, in order:
//! 1. The target culture equals the base culture, or the resource has no
//!    overrides: the intrinsic value wins, even over an override tagged with
//!    the base culture.
//! 2. Otherwise the first override, in declaration order, whose culture equals
//!    the target culture.
//! 3. No matching override: the empty string. A missing translation does not
//!    fall back to the intrinsic value.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::CultureId;
use crate::core::CultureOverride;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Text chosen for a target culture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<'a> {
    /// The resource's intrinsic value.
    Intrinsic(&'a str),
    /// An override matching the target culture.
    Override(&'a str),
    /// No override matches the target culture.
    Missing,
}

impl<'a> Selection<'a> {
    /// Returns the selected text (empty for [`Selection::Missing`]).
    #[must_use]
    pub const fn text(self) -> &'a str {
        match self {
            Self::Intrinsic(text) | Self::Override(text) => text,
            Self::Missing => "",
        }
    }

    /// Returns the outcome label for this selection.
    #[must_use]
    pub const fn kind(self) -> SelectionKind {
        match self {
            Self::Intrinsic(_) => SelectionKind::Intrinsic,
            Self::Override(_) => SelectionKind::Override,
            Self::Missing => SelectionKind::MissingOverride,
        }
    }
}

/// Selection outcome without the borrowed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionKind {
    /// Intrinsic value used.
    Intrinsic,
    /// Override used.
    Override,
    /// Nothing matched; empty text returned.
    MissingOverride,
}

// ============================================================================
// SECTION: Selection
// ============================================================================

/// Selects the text of a resource for `target`.
#[must_use]
pub fn select_text<'a>(
    intrinsic: &'a str,
    overrides: &'a [CultureOverride],
    target: &CultureId,
    base: Option<&CultureId>,
) -> Selection<'a> {
    if base == Some(target) || overrides.is_empty() {
        return Selection::Intrinsic(intrinsic);
    }
    overrides
        .iter()
        .find(|entry| entry.culture == *target)
        .map_or(Selection::Missing, |entry| Selection::Override(entry.text.as_str()))
}
