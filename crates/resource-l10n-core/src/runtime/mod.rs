// crates/resource-l10n-core/src/runtime/mod.rs
// ============================================================================
// Module: Resource L10n Runtime
// Description: Resolution pipeline, reference registry, and audit sinks.
// Purpose: Turn resource metadata and a culture into display text.
// Dependencies: crate::{core, interfaces}
// ============================================================================

//! ## Overview
//! The runtime holds every piece of resolution logic:
//! [`base_culture`] walks scopes, [`selector`] picks text,
//! [`substitution`] fills placeholders, and [`resolver`] composes them.
//! [`registry`] is the reference metadata provider and [`audit`] carries the
//! structured event sinks.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod audit;
pub mod base_culture;
pub mod error;
pub mod registry;
pub mod resolver;
pub mod selector;
pub mod substitution;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use audit::FileAuditSink;
pub use audit::NoopAuditSink;
pub use audit::ResolutionAuditSink;
pub use audit::ResolutionEvent;
pub use audit::ResolutionEventParams;
pub use audit::ResolutionOutcome;
pub use audit::StderrAuditSink;
pub use base_culture::MAX_SCOPE_WALK;
pub use base_culture::find_base_culture;
pub use base_culture::find_scope_base_culture;
pub use error::ResolveError;
pub use registry::InMemoryRegistry;
pub use registry::RegistryBuilder;
pub use registry::RegistryError;
pub use registry::RegistryLimits;
pub use registry::ResourceDecl;
pub use registry::ScopeDecl;
pub use resolver::Localizer;
pub use resolver::Resolution;
pub use resolver::resolve;
pub use resolver::resolve_request;
pub use selector::Selection;
pub use selector::SelectionKind;
pub use selector::select_text;
pub use substitution::Placeholder;
pub use substitution::placeholder_names;
pub use substitution::placeholders;
pub use substitution::substitute;
