// crates/resource-l10n-core/src/core/request.rs
// ============================================================================
// Module: Resolution Requests
// Description: Per-call inputs to resource resolution.
// Purpose: Bundle the resource, target culture, arguments, and live value.
// Dependencies: crate::core, serde
// ============================================================================

//! ## Overview
//! A [`ResolutionRequest`] is created for one call and discarded afterwards.
//! The target culture is optional; when omitted the caller-provided ambient
//! culture applies. A live intrinsic value may be supplied for resources
//! whose default text can change at runtime; it replaces the registered
//! intrinsic value for this call only.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::arguments::ArgumentBag;
use crate::core::culture::CultureId;
use crate::core::identifiers::ResourceId;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Inputs for one resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionRequest {
    /// Resource being resolved.
    pub resource: ResourceId,
    /// Explicit target culture; `None` selects the ambient culture.
    pub culture: Option<CultureId>,
    /// Placeholder arguments; `None` skips substitution entirely.
    pub arguments: Option<ArgumentBag>,
    /// Live intrinsic value overriding the registered one.
    pub intrinsic: Option<String>,
}

impl ResolutionRequest {
    /// Creates a request for `resource` in the ambient culture without arguments.
    #[must_use]
    pub fn new(resource: impl Into<ResourceId>) -> Self {
        Self {
            resource: resource.into(),
            culture: None,
            arguments: None,
            intrinsic: None,
        }
    }

    /// Sets an explicit target culture.
    #[must_use]
    pub fn in_culture(mut self, culture: CultureId) -> Self {
        self.culture = Some(culture);
        self
    }

    /// Supplies placeholder arguments.
    #[must_use]
    pub fn with_arguments(mut self, arguments: ArgumentBag) -> Self {
        self.arguments = Some(arguments);
        self
    }

    /// Supplies the live intrinsic value.
    #[must_use]
    pub fn with_intrinsic(mut self, value: impl Into<String>) -> Self {
        self.intrinsic = Some(value.into());
        self
    }

    /// Returns the explicit culture, or `ambient` when none was given.
    #[must_use]
    pub fn target_culture<'a>(&'a self, ambient: &'a CultureId) -> &'a CultureId {
        self.culture.as_ref().unwrap_or(ambient)
    }

    /// Reports where the target culture comes from.
    #[must_use]
    pub const fn culture_source(&self) -> CultureSource {
        if self.culture.is_some() { CultureSource::Explicit } else { CultureSource::Ambient }
    }
}

/// Origin of the target culture for a resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CultureSource {
    /// Supplied by the caller for this request.
    Explicit,
    /// Taken from the ambient current culture.
    Ambient,
}
