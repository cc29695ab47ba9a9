// crates/resource-l10n-core/src/runtime/registry.rs
// ============================================================================
// Module: In-Memory Metadata Registry
// Description: Explicit registration of scopes and resources.
// Purpose: Provide a reference MetadataProvider built once at startup.
// Dependencies: crate::{core, interfaces}, thiserror
// ============================================================================

//! ## Overview
//! [`RegistryBuilder`] collects scope and resource declarations and checks
//! them as they arrive:
//! - a scope's parent and a resource's scope must already be declared, so the
//!   scope graph is a forest and never contains a cycle;
//! - identifiers are unique, non-empty, and bounded in length;
//! - nesting depth and override counts stay within [`RegistryLimits`].
//!
//! [`InMemoryRegistry`] is the frozen result. It is immutable and can be
//! shared across threads.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashMap;

use thiserror::Error;

use crate::core::CultureId;
use crate::core::CultureOverride;
use crate::core::ResourceEntry;
use crate::core::ResourceId;
use crate::core::ScopeEntry;
use crate::core::ScopeId;
use crate::interfaces::MetadataProvider;
use crate::runtime::base_culture::MAX_SCOPE_WALK;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Maximum identifier length, in bytes.
pub const MAX_IDENTIFIER_LENGTH: usize = 256;

/// Default maximum scope nesting depth.
pub const DEFAULT_MAX_SCOPE_DEPTH: usize = 32;

/// Default maximum overrides per resource.
pub const DEFAULT_MAX_OVERRIDES_PER_RESOURCE: usize = 64;

/// Hard ceiling for scope depth; the base-culture walk never goes further.
pub const MAX_SCOPE_DEPTH_CEILING: usize = MAX_SCOPE_WALK;

/// Hard ceiling for overrides per resource.
pub const MAX_OVERRIDES_CEILING: usize = 1024;

/// Size limits enforced while building a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryLimits {
    /// Maximum scope nesting depth (a root scope has depth 1).
    pub max_scope_depth: usize,
    /// Maximum overrides attached to one resource.
    pub max_overrides_per_resource: usize,
}

impl Default for RegistryLimits {
    fn default() -> Self {
        Self {
            max_scope_depth: DEFAULT_MAX_SCOPE_DEPTH,
            max_overrides_per_resource: DEFAULT_MAX_OVERRIDES_PER_RESOURCE,
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Registry construction errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Identifier is empty or exceeds [`MAX_IDENTIFIER_LENGTH`].
    #[error("invalid identifier '{0}'")]
    InvalidIdentifier(String),
    /// Scope declared twice.
    #[error("duplicate scope: {0}")]
    DuplicateScope(ScopeId),
    /// Resource declared twice.
    #[error("duplicate resource: {0}")]
    DuplicateResource(ResourceId),
    /// Referenced scope has not been declared.
    #[error("unknown scope: {0}")]
    UnknownScope(ScopeId),
    /// A configured limit was exceeded.
    #[error("registry limit exceeded: {0}")]
    LimitExceeded(String),
}

// ============================================================================
// SECTION: Declarations
// ============================================================================

/// Declaration of one scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeDecl {
    /// Scope identifier.
    pub id: ScopeId,
    /// Enclosing scope.
    pub parent: Option<ScopeId>,
    /// Base culture declared on this scope.
    pub base_culture: Option<CultureId>,
}

impl ScopeDecl {
    /// Declares a root scope without a base culture.
    #[must_use]
    pub fn new(id: impl Into<ScopeId>) -> Self {
        Self {
            id: id.into(),
            parent: None,
            base_culture: None,
        }
    }

    /// Nests this scope inside `parent`.
    #[must_use]
    pub fn within(mut self, parent: impl Into<ScopeId>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Declares the base culture of un-annotated text in this scope.
    #[must_use]
    pub fn base_culture(mut self, culture: CultureId) -> Self {
        self.base_culture = Some(culture);
        self
    }
}

/// Declaration of one resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceDecl {
    /// Resource identifier.
    pub id: ResourceId,
    /// Enclosing scope.
    pub scope: Option<ScopeId>,
    /// Intrinsic value.
    pub intrinsic: String,
    /// Overrides in declaration order.
    pub overrides: Vec<CultureOverride>,
}

impl ResourceDecl {
    /// Declares a resource with its intrinsic value.
    #[must_use]
    pub fn new(id: impl Into<ResourceId>, intrinsic: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            scope: None,
            intrinsic: intrinsic.into(),
            overrides: Vec::new(),
        }
    }

    /// Declares a member of `scope` whose intrinsic value is its own name,
    /// as enumeration members render by default.
    #[must_use]
    pub fn member(scope: impl Into<ScopeId>, name: &str) -> Self {
        let scope = scope.into();
        Self {
            id: ResourceId::member(&scope, name),
            scope: Some(scope),
            intrinsic: name.to_string(),
            overrides: Vec::new(),
        }
    }

    /// Places the resource inside `scope`.
    #[must_use]
    pub fn in_scope(mut self, scope: impl Into<ScopeId>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Appends an override for `culture`.
    #[must_use]
    pub fn localized(mut self, culture: CultureId, text: impl Into<String>) -> Self {
        self.overrides.push(CultureOverride::new(culture, text));
        self
    }
}

// ============================================================================
// SECTION: Builder
// ============================================================================

/// Incremental registry builder.
#[derive(Debug, Clone, Default)]
pub struct RegistryBuilder {
    /// Limits applied to each declaration.
    limits: RegistryLimits,
    /// Declared scopes with their nesting depth.
    scopes: HashMap<ScopeId, (ScopeEntry, usize)>,
    /// Declared resources.
    resources: HashMap<ResourceId, ResourceEntry>,
}

impl RegistryBuilder {
    /// Creates a builder with default limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder with explicit limits.
    #[must_use]
    pub fn with_limits(limits: RegistryLimits) -> Self {
        Self {
            limits,
            ..Self::default()
        }
    }

    /// Declares a scope.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] when the identifier is invalid or already
    /// declared, the parent is unknown, or nesting exceeds the depth limit.
    pub fn declare_scope(&mut self, decl: ScopeDecl) -> Result<&mut Self, RegistryError> {
        validate_identifier(decl.id.as_str())?;
        if self.scopes.contains_key(&decl.id) {
            return Err(RegistryError::DuplicateScope(decl.id));
        }
        let depth = match &decl.parent {
            Some(parent) => {
                let (_, parent_depth) = self
                    .scopes
                    .get(parent)
                    .ok_or_else(|| RegistryError::UnknownScope(parent.clone()))?;
                parent_depth + 1
            }
            None => 1,
        };
        let limit = self.limits.max_scope_depth.min(MAX_SCOPE_DEPTH_CEILING);
        if depth > limit {
            return Err(RegistryError::LimitExceeded(format!(
                "scope {} nests {depth} levels deep (limit {limit})",
                decl.id
            )));
        }
        let entry = ScopeEntry {
            parent: decl.parent,
            base_culture: decl.base_culture,
        };
        self.scopes.insert(decl.id, (entry, depth));
        Ok(self)
    }

    /// Declares a resource.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] when the identifier is invalid or already
    /// declared, the scope is unknown, or the override count exceeds the limit.
    pub fn declare_resource(&mut self, decl: ResourceDecl) -> Result<&mut Self, RegistryError> {
        validate_identifier(decl.id.as_str())?;
        if self.resources.contains_key(&decl.id) {
            return Err(RegistryError::DuplicateResource(decl.id));
        }
        if let Some(scope) = &decl.scope
            && !self.scopes.contains_key(scope)
        {
            return Err(RegistryError::UnknownScope(scope.clone()));
        }
        let limit = self.limits.max_overrides_per_resource.min(MAX_OVERRIDES_CEILING);
        if decl.overrides.len() > limit {
            return Err(RegistryError::LimitExceeded(format!(
                "resource {} declares {} overrides (limit {limit})",
                decl.id,
                decl.overrides.len()
            )));
        }
        let entry = ResourceEntry {
            scope: decl.scope,
            intrinsic: decl.intrinsic,
            overrides: decl.overrides,
        };
        self.resources.insert(decl.id, entry);
        Ok(self)
    }

    /// Freezes the declarations into a registry.
    #[must_use]
    pub fn build(self) -> InMemoryRegistry {
        InMemoryRegistry {
            scopes: self.scopes.into_iter().map(|(id, (entry, _))| (id, entry)).collect(),
            resources: self.resources,
        }
    }
}

/// Rejects empty or oversized identifiers.
fn validate_identifier(id: &str) -> Result<(), RegistryError> {
    if id.trim().is_empty() || id.len() > MAX_IDENTIFIER_LENGTH {
        return Err(RegistryError::InvalidIdentifier(id.to_string()));
    }
    Ok(())
}

// ============================================================================
// SECTION: Registry
// ============================================================================

/// Immutable metadata registry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryRegistry {
    /// Scopes by identifier.
    scopes: HashMap<ScopeId, ScopeEntry>,
    /// Resources by identifier.
    resources: HashMap<ResourceId, ResourceEntry>,
}

impl InMemoryRegistry {
    /// Returns a builder with default limits.
    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Returns a registered resource.
    #[must_use]
    pub fn resource(&self, id: &ResourceId) -> Option<&ResourceEntry> {
        self.resources.get(id)
    }

    /// Returns a registered scope.
    #[must_use]
    pub fn scope(&self, id: &ScopeId) -> Option<&ScopeEntry> {
        self.scopes.get(id)
    }

    /// Iterates over registered resources (unordered).
    pub fn resources(&self) -> impl Iterator<Item = (&ResourceId, &ResourceEntry)> {
        self.resources.iter()
    }

    /// Number of registered resources.
    #[must_use]
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Returns true when no resources are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

impl MetadataProvider for InMemoryRegistry {
    fn intrinsic_value(&self, resource: &ResourceId) -> Option<&str> {
        self.resources.get(resource).map(|entry| entry.intrinsic.as_str())
    }

    fn overrides(&self, resource: &ResourceId) -> &[CultureOverride] {
        self.resources.get(resource).map(|entry| entry.overrides.as_slice()).unwrap_or_default()
    }

    fn enclosing_scope(&self, resource: &ResourceId) -> Option<&ScopeId> {
        self.resources.get(resource).and_then(|entry| entry.scope.as_ref())
    }

    fn base_culture(&self, scope: &ScopeId) -> Option<&CultureId> {
        self.scopes.get(scope).and_then(|entry| entry.base_culture.as_ref())
    }

    fn parent_scope(&self, scope: &ScopeId) -> Option<&ScopeId> {
        self.scopes.get(scope).and_then(|entry| entry.parent.as_ref())
    }
}
