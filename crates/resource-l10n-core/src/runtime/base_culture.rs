// crates/resource-l10n-core/src/runtime/base_culture.rs
// ============================================================================
// Module: Base Culture Lookup
// Description: Outward scope walk for base-culture declarations.
// Purpose: Find the culture of a resource's un-annotated intrinsic text.
// Dependencies: crate::{core, interfaces}
// ============================================================================

//! ## Overview
//! The base culture of a resource is declared on a scope, not on the
//! resource. Lookup starts at the scope enclosing the resource and moves to
//! ever more general scopes until one declares a culture. An absent result
//! is a normal outcome.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::CultureId;
use crate::core::ResourceId;
use crate::core::ScopeId;
use crate::interfaces::MetadataProvider;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Maximum number of scopes visited by one walk.
///
/// Registries reject deeper nesting, so the bound only stops providers whose
/// parent links form a cycle.
pub const MAX_SCOPE_WALK: usize = 256;

// ============================================================================
// SECTION: Lookup
// ============================================================================

/// Returns the base culture inherited by `resource`, if any scope declares one.
#[must_use]
pub fn find_base_culture<'a, P>(provider: &'a P, resource: &ResourceId) -> Option<&'a CultureId>
where
    P: MetadataProvider + ?Sized,
{
    provider.enclosing_scope(resource).and_then(|scope| find_scope_base_culture(provider, scope))
}

/// Returns the base culture declared on `scope` or its nearest ancestor.
#[must_use]
pub fn find_scope_base_culture<'a, P>(provider: &'a P, scope: &ScopeId) -> Option<&'a CultureId>
where
    P: MetadataProvider + ?Sized,
{
    if let Some(culture) = provider.base_culture(scope) {
        return Some(culture);
    }
    let mut current = provider.parent_scope(scope);
    for _ in 1 .. MAX_SCOPE_WALK {
        let scope = current?;
        if let Some(culture) = provider.base_culture(scope) {
            return Some(culture);
        }
        current = provider.parent_scope(scope);
    }
    None
}
