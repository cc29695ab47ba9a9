// crates/resource-l10n-config/src/culture_env.rs
// ============================================================================
// Module: Ambient Culture Detection
// Description: Resolves the process-wide default culture from the environment.
// Purpose: Centralize culture precedence rules outside the resolver.
// Dependencies: resource-l10n-core, sys-locale, crate::config
// ============================================================================

//! ## Overview
//! Precedence, first match wins:
//! 1. the configured override variable (`RESOURCE_L10N_CULTURE` by default);
//! 2. when `detect_from_env` is set, the host locale reported by
//!    [`SystemLocale`] (`sys-locale` reads `LC_ALL`, `LC_MESSAGES`, and
//!    `LANG` on Unix);
//! 3. `culture.default`.
//!
//! An invalid value in the override variable is an error. An invalid or
//! placeholder host locale (`C`, `POSIX`) is skipped.

// ============================================================================
// SECTION: Imports
// ============================================================================

use resource_l10n_core::CultureId;

use crate::config::ConfigError;
use crate::config::CultureConfig;

// ============================================================================
// SECTION: Environment Access
// ============================================================================

/// Read-only environment access used for culture resolution.
pub trait EnvProvider {
    /// Fetch the environment variable value for `key`.
    fn var(&self, key: &str) -> Option<String>;
}

/// Environment provider backed by the process environment.
#[derive(Debug, Default, Copy, Clone)]
pub struct SystemEnv;

impl EnvProvider for SystemEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Host locale access used for culture detection.
pub trait SystemLocale {
    /// Return the system locale string when available.
    fn system_locale(&self) -> Option<String>;
}

/// System locale provider backed by `sys-locale`.
#[derive(Debug, Default, Copy, Clone)]
pub struct SysLocale;

impl SystemLocale for SysLocale {
    fn system_locale(&self) -> Option<String> {
        sys_locale::get_locale()
    }
}

// ============================================================================
// SECTION: Normalization
// ============================================================================

/// Converts a POSIX locale string (`pl_PL.UTF-8@euro`) into a culture.
///
/// Returns `None` for empty values, `C`, `POSIX`, and malformed tags.
#[must_use]
pub fn normalize_posix_locale(raw: &str) -> Option<CultureId> {
    let stripped = raw.trim().split(['.', '@']).next().unwrap_or_default().trim();
    if stripped.is_empty()
        || stripped.eq_ignore_ascii_case("c")
        || stripped.eq_ignore_ascii_case("posix")
    {
        return None;
    }
    CultureId::parse(stripped).ok()
}

// ============================================================================
// SECTION: Resolution
// ============================================================================

/// Resolves the ambient culture for `config` from `env` and `system`.
///
/// # Errors
///
/// Returns [`ConfigError::Invalid`] when the override variable holds an
/// invalid culture or the configured default is malformed.
pub fn resolve_ambient_culture(
    config: &CultureConfig,
    env: &impl EnvProvider,
    system: &impl SystemLocale,
) -> Result<CultureId, ConfigError> {
    if let Some(value) = env.var(&config.env_var).filter(|value| !value.trim().is_empty()) {
        return normalize_posix_locale(&value).ok_or_else(|| {
            ConfigError::Invalid(format!("invalid culture in {}: {value}", config.env_var))
        });
    }
    if config.detect_from_env
        && let Some(culture) =
            system.system_locale().and_then(|value| normalize_posix_locale(&value))
    {
        return Ok(culture);
    }
    config.default_culture()
}
