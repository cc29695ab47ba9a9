// crates/resource-l10n-core/src/core/mod.rs
// ============================================================================
// Module: Resource L10n Core Types
// Description: Canonical identifiers, cultures, metadata, and request types.
// Purpose: Provide stable, serializable types shared by providers and resolvers.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! Core types describe localizable resources and the requests made against
//! them. They carry no resolution logic.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod arguments;
pub mod culture;
pub mod identifiers;
pub mod metadata;
pub mod request;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use arguments::ArgumentBag;
pub use culture::CultureError;
pub use culture::CultureId;
pub use culture::MAX_CULTURE_TAG_LENGTH;
pub use identifiers::ResourceId;
pub use identifiers::ScopeId;
pub use metadata::CultureOverride;
pub use metadata::ResourceEntry;
pub use metadata::ScopeEntry;
pub use request::CultureSource;
pub use request::ResolutionRequest;
