// crates/resource-l10n-config/src/lib.rs
// ============================================================================
// Module: Resource L10n Config Library
// Description: Configuration model, ambient culture detection, and wiring.
// Purpose: Provide validated configuration for building localizers.
// Dependencies: resource-l10n-core, serde, sys-locale, toml
// ============================================================================

//! ## Overview
//! Loads `resource-l10n.toml`, resolves the ambient culture from the
//! environment and host locale, and builds a
//! [`resource_l10n_core::Localizer`] with the configured audit sink.
//! Resolution itself stays in the core crate.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod culture_env;
pub mod wiring;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::AuditConfig;
pub use config::AuditSinkKind;
pub use config::CONFIG_ENV_VAR;
pub use config::ConfigError;
pub use config::CultureConfig;
pub use config::L10nConfig;
pub use config::LimitsConfig;
pub use culture_env::EnvProvider;
pub use culture_env::SysLocale;
pub use culture_env::SystemEnv;
pub use culture_env::SystemLocale;
pub use culture_env::normalize_posix_locale;
pub use culture_env::resolve_ambient_culture;
pub use wiring::build_audit_sink;
pub use wiring::build_localizer;
pub use wiring::build_registry_builder;
