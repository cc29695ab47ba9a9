// crates/resource-l10n-core/src/lib.rs
// ============================================================================
// Module: Resource L10n Core Library
// Description: Public API surface for scoped resource localization.
// Purpose: Expose core types, interfaces, and the resolution runtime.
// Dependencies: crate::{core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! Resource L10n resolves the display text of a localizable resource for a
//! culture. Each resource has an intrinsic value written in the base culture
//! of its enclosing scope, plus optional culture-tagged overrides. After
//! selecting the text, named `{placeholders}` are filled from an argument
//! bag; every supplied argument must be consumed.
//!
//! ```
//! use resource_l10n_core::CultureId;
//! use resource_l10n_core::InMemoryRegistry;
//! use resource_l10n_core::Localizer;
//! use resource_l10n_core::ResourceDecl;
//! use resource_l10n_core::ScopeDecl;
//! use resource_l10n_core::l10n_args;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let english = CultureId::parse("en")?;
//! let polish = CultureId::parse("pl-PL")?;
//! let mut builder = InMemoryRegistry::builder();
//! builder
//!     .declare_scope(ScopeDecl::new("Resources").base_culture(english.clone()))?
//!     .declare_resource(
//!         ResourceDecl::new("Resources.Hello", "Hello {name}!")
//!             .in_scope("Resources")
//!             .localized(polish.clone(), "Czesc {name}!"),
//!     )?;
//! let localizer = Localizer::new(builder.build(), english);
//! let args = l10n_args!(name = "Foo");
//! let text = localizer.localize_with("Resources.Hello", Some(&polish), Some(&args))?;
//! assert_eq!(text, "Czesc Foo!");
//! # Ok(())
//! # }
//! ```

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use crate::core::*;

pub use interfaces::LocalizedResource;
pub use interfaces::MetadataProvider;
pub use runtime::InMemoryRegistry;
pub use runtime::Localizer;
pub use runtime::RegistryBuilder;
pub use runtime::RegistryError;
pub use runtime::RegistryLimits;
pub use runtime::Resolution;
pub use runtime::ResolutionAuditSink;
pub use runtime::ResolutionEvent;
pub use runtime::ResolutionOutcome;
pub use runtime::ResolveError;
pub use runtime::ResourceDecl;
pub use runtime::ScopeDecl;
pub use runtime::resolve;
pub use runtime::resolve_request;
