// crates/resource-l10n-core/src/interfaces/mod.rs
// ============================================================================
// Module: Resource L10n Interfaces
// Description: Backend-agnostic metadata access and typed resource tokens.
// Purpose: Define the contract surfaces consumed by the resolver.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! The resolver never owns metadata. It asks a [`MetadataProvider`] for a
//! resource's intrinsic value, overrides, and enclosing scope, and for each
//! scope's base-culture declaration and parent. Any static table, generated
//! code, or loaded registry can implement the trait; the crate ships
//! [`InMemoryRegistry`](crate::runtime::InMemoryRegistry).
//!
//! Implementations must treat metadata as immutable for their lifetime.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use crate::core::CultureId;
use crate::core::CultureOverride;
use crate::core::ResourceId;
use crate::core::ScopeId;

// ============================================================================
// SECTION: Metadata Provider
// ============================================================================

/// Read-only metadata source for localizable resources.
pub trait MetadataProvider {
    /// Returns the intrinsic value of `resource`, or `None` when unknown.
    fn intrinsic_value(&self, resource: &ResourceId) -> Option<&str>;

    /// Returns the overrides of `resource` in declaration order.
    ///
    /// Unknown resources have no overrides.
    fn overrides(&self, resource: &ResourceId) -> &[CultureOverride];

    /// Returns the scope that directly encloses `resource`.
    fn enclosing_scope(&self, resource: &ResourceId) -> Option<&ScopeId>;

    /// Returns the base culture declared directly on `scope`.
    fn base_culture(&self, scope: &ScopeId) -> Option<&CultureId>;

    /// Returns the scope that directly encloses `scope`.
    fn parent_scope(&self, scope: &ScopeId) -> Option<&ScopeId>;
}

impl<P: MetadataProvider + ?Sized> MetadataProvider for &P {
    fn intrinsic_value(&self, resource: &ResourceId) -> Option<&str> {
        (**self).intrinsic_value(resource)
    }

    fn overrides(&self, resource: &ResourceId) -> &[CultureOverride] {
        (**self).overrides(resource)
    }

    fn enclosing_scope(&self, resource: &ResourceId) -> Option<&ScopeId> {
        (**self).enclosing_scope(resource)
    }

    fn base_culture(&self, scope: &ScopeId) -> Option<&CultureId> {
        (**self).base_culture(scope)
    }

    fn parent_scope(&self, scope: &ScopeId) -> Option<&ScopeId> {
        (**self).parent_scope(scope)
    }
}

impl<P: MetadataProvider + ?Sized> MetadataProvider for Arc<P> {
    fn intrinsic_value(&self, resource: &ResourceId) -> Option<&str> {
        (**self).intrinsic_value(resource)
    }

    fn overrides(&self, resource: &ResourceId) -> &[CultureOverride] {
        (**self).overrides(resource)
    }

    fn enclosing_scope(&self, resource: &ResourceId) -> Option<&ScopeId> {
        (**self).enclosing_scope(resource)
    }

    fn base_culture(&self, scope: &ScopeId) -> Option<&CultureId> {
        (**self).base_culture(scope)
    }

    fn parent_scope(&self, scope: &ScopeId) -> Option<&ScopeId> {
        (**self).parent_scope(scope)
    }
}

// ============================================================================
// SECTION: Typed Resource Tokens
// ============================================================================

/// A value that names a localizable resource.
///
/// Implement this for enums whose members are registered as resources, or
/// for statics that want to hand the resolver their current content.
pub trait LocalizedResource {
    /// Returns the stable resource identifier.
    fn resource_id(&self) -> ResourceId;

    /// Returns the live intrinsic value, when it differs from the registered one.
    fn live_value(&self) -> Option<String> {
        None
    }
}

impl LocalizedResource for ResourceId {
    fn resource_id(&self) -> ResourceId {
        self.clone()
    }
}

impl LocalizedResource for str {
    fn resource_id(&self) -> ResourceId {
        ResourceId::new(self)
    }
}

impl<T: LocalizedResource + ?Sized> LocalizedResource for &T {
    fn resource_id(&self) -> ResourceId {
        (**self).resource_id()
    }

    fn live_value(&self) -> Option<String> {
        (**self).live_value()
    }
}
