// crates/resource-l10n-config/src/wiring.rs
// ============================================================================
// Module: Localizer Wiring
// Description: Builds a configured Localizer from validated configuration.
// Purpose: Map config sections onto core audit sinks and ambient culture.
// Dependencies: resource-l10n-core, crate::{config, culture_env}
// ============================================================================

//! ## Overview
//! Turns an [`L10nConfig`] into runtime objects: a [`RegistryBuilder`]
//! bounded by `[limits]`, an audit sink for the `[audit]` section, and a
//! [`Localizer`] whose ambient culture follows the `[culture]` precedence
//! rules.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use resource_l10n_core::Localizer;
use resource_l10n_core::MetadataProvider;
use resource_l10n_core::RegistryBuilder;
use resource_l10n_core::ResolutionAuditSink;
use resource_l10n_core::runtime::FileAuditSink;
use resource_l10n_core::runtime::NoopAuditSink;
use resource_l10n_core::runtime::StderrAuditSink;

use crate::config::AuditConfig;
use crate::config::AuditSinkKind;
use crate::config::ConfigError;
use crate::config::L10nConfig;
use crate::culture_env::EnvProvider;
use crate::culture_env::SystemLocale;
use crate::culture_env::resolve_ambient_culture;

// ============================================================================
// SECTION: Builders
// ============================================================================

/// Returns a registry builder enforcing the configured `[limits]`.
#[must_use]
pub fn build_registry_builder(config: &L10nConfig) -> RegistryBuilder {
    RegistryBuilder::with_limits(config.limits.registry_limits())
}

/// Builds the audit sink described by `config`.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] when the file sink cannot be opened and
/// [`ConfigError::Invalid`] when the file sink has no path.
pub fn build_audit_sink(config: &AuditConfig) -> Result<Arc<dyn ResolutionAuditSink>, ConfigError> {
    if !config.enabled {
        return Ok(Arc::new(NoopAuditSink));
    }
    match config.sink {
        AuditSinkKind::Stderr => Ok(Arc::new(StderrAuditSink)),
        AuditSinkKind::File => {
            let path = config.path.as_deref().ok_or_else(|| {
                ConfigError::Invalid("audit.path is required for the file sink".to_string())
            })?;
            let sink = FileAuditSink::new(path)
                .map_err(|err| ConfigError::Io(format!("{}: {err}", path.display())))?;
            Ok(Arc::new(sink))
        }
    }
}

/// Builds a localizer over `provider` using `config`, the environment, and
/// the host locale.
///
/// # Errors
///
/// Returns [`ConfigError`] when validation, culture resolution, or audit
/// sink construction fails.
pub fn build_localizer<P: MetadataProvider>(
    config: &L10nConfig,
    provider: P,
    env: &impl EnvProvider,
    system: &impl SystemLocale,
) -> Result<Localizer<P>, ConfigError> {
    config.validate()?;
    let ambient = resolve_ambient_culture(&config.culture, env, system)?;
    let audit = build_audit_sink(&config.audit)?;
    Ok(Localizer::new(provider, ambient).with_audit_sink(audit))
}
