// crates/resource-l10n-config/src/config.rs
// ============================================================================
// Module: Resource L10n Configuration
// Description: Configuration loading and validation for Resource L10n.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: resource-l10n-core, serde, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path limits.
//! Unknown keys and invalid values fail closed. Every section has defaults,
//! so an empty file is a valid configuration.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use resource_l10n_core::CultureId;
use resource_l10n_core::RegistryLimits;
use resource_l10n_core::runtime::registry::DEFAULT_MAX_OVERRIDES_PER_RESOURCE;
use resource_l10n_core::runtime::registry::DEFAULT_MAX_SCOPE_DEPTH;
use resource_l10n_core::runtime::registry::MAX_OVERRIDES_CEILING;
use resource_l10n_core::runtime::registry::MAX_SCOPE_DEPTH_CEILING;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::culture_env::EnvProvider;
use crate::culture_env::SystemEnv;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
const DEFAULT_CONFIG_NAME: &str = "resource-l10n.toml";
/// Environment variable pointing at the configuration file.
pub const CONFIG_ENV_VAR: &str = "RESOURCE_L10N_CONFIG";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Default culture when none is configured.
pub(crate) const DEFAULT_CULTURE: &str = "en";
/// Default environment variable overriding the ambient culture.
pub(crate) const DEFAULT_CULTURE_ENV_VAR: &str = "RESOURCE_L10N_CULTURE";
/// Maximum environment variable name length.
pub(crate) const MAX_ENV_VAR_NAME_LENGTH: usize = 128;

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Resource L10n configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct L10nConfig {
    /// Ambient culture configuration.
    #[serde(default)]
    pub culture: CultureConfig,
    /// Audit logging configuration.
    #[serde(default)]
    pub audit: AuditConfig,
    /// Registry limits.
    #[serde(default)]
    pub limits: LimitsConfig,
}

impl L10nConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_env(path, &SystemEnv)
    }

    /// Loads configuration, reading `RESOURCE_L10N_CONFIG` from `env` when
    /// no path is given.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load_with_env(path: Option<&Path>, env: &impl EnvProvider) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path, env)?;
        validate_path(&resolved)?;
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        Self::from_toml_str(content)
    }

    /// Parses and validates configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when parsing or validation fails.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.culture.validate()?;
        self.audit.validate()?;
        self.limits.validate()?;
        Ok(())
    }
}

/// Ambient culture configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CultureConfig {
    /// Culture used when nothing else selects one.
    #[serde(default = "default_culture")]
    pub default: String,
    /// Consult `LC_ALL`, `LC_MESSAGES`, and `LANG` for the ambient culture.
    #[serde(default)]
    pub detect_from_env: bool,
    /// Environment variable that overrides the ambient culture.
    #[serde(default = "default_culture_env_var")]
    pub env_var: String,
}

impl Default for CultureConfig {
    fn default() -> Self {
        Self {
            default: default_culture(),
            detect_from_env: false,
            env_var: default_culture_env_var(),
        }
    }
}

impl CultureConfig {
    /// Returns the parsed default culture.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when the tag is malformed.
    pub fn default_culture(&self) -> Result<CultureId, ConfigError> {
        CultureId::parse(&self.default)
            .map_err(|err| ConfigError::Invalid(format!("culture.default: {err}")))
    }

    /// Validates culture settings.
    fn validate(&self) -> Result<(), ConfigError> {
        self.default_culture()?;
        let name = self.env_var.as_str();
        if name.is_empty() || name.len() > MAX_ENV_VAR_NAME_LENGTH {
            return Err(ConfigError::Invalid(
                "culture.env_var must be 1-128 characters".to_string(),
            ));
        }
        if !name.bytes().all(|byte| byte.is_ascii_uppercase() || byte.is_ascii_digit() || byte == b'_')
        {
            return Err(ConfigError::Invalid(
                "culture.env_var must use [A-Z0-9_]".to_string(),
            ));
        }
        Ok(())
    }
}

/// Audit sink selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditSinkKind {
    /// JSON lines on stderr.
    #[default]
    Stderr,
    /// JSON lines appended to a file.
    File,
}

/// Audit logging configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuditConfig {
    /// Enables resolution audit events.
    #[serde(default)]
    pub enabled: bool,
    /// Sink receiving events.
    #[serde(default)]
    pub sink: AuditSinkKind,
    /// Output path for the file sink.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl AuditConfig {
    /// Validates audit settings.
    fn validate(&self) -> Result<(), ConfigError> {
        if !self.enabled {
            return Ok(());
        }
        match (self.sink, &self.path) {
            (AuditSinkKind::File, None) => {
                Err(ConfigError::Invalid("audit.path is required for the file sink".to_string()))
            }
            (AuditSinkKind::File, Some(path)) => validate_path(path),
            (AuditSinkKind::Stderr, Some(_)) => {
                Err(ConfigError::Invalid("audit.path is only valid for the file sink".to_string()))
            }
            (AuditSinkKind::Stderr, None) => Ok(()),
        }
    }
}

/// Registry limit configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LimitsConfig {
    /// Maximum scope nesting depth.
    #[serde(default = "default_max_scope_depth")]
    pub max_scope_depth: usize,
    /// Maximum overrides per resource.
    #[serde(default = "default_max_overrides_per_resource")]
    pub max_overrides_per_resource: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_scope_depth: DEFAULT_MAX_SCOPE_DEPTH,
            max_overrides_per_resource: DEFAULT_MAX_OVERRIDES_PER_RESOURCE,
        }
    }
}

impl LimitsConfig {
    /// Returns the registry limits for a builder.
    #[must_use]
    pub const fn registry_limits(&self) -> RegistryLimits {
        RegistryLimits {
            max_scope_depth: self.max_scope_depth,
            max_overrides_per_resource: self.max_overrides_per_resource,
        }
    }

    /// Validates limit ranges.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_scope_depth == 0 || self.max_scope_depth > MAX_SCOPE_DEPTH_CEILING {
            return Err(ConfigError::Invalid(format!(
                "limits.max_scope_depth must be between 1 and {MAX_SCOPE_DEPTH_CEILING}"
            )));
        }
        if self.max_overrides_per_resource > MAX_OVERRIDES_CEILING {
            return Err(ConfigError::Invalid(format!(
                "limits.max_overrides_per_resource must be at most {MAX_OVERRIDES_CEILING}"
            )));
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Default culture tag.
fn default_culture() -> String {
    DEFAULT_CULTURE.to_string()
}

/// Default culture override variable.
fn default_culture_env_var() -> String {
    DEFAULT_CULTURE_ENV_VAR.to_string()
}

/// Default scope depth limit.
const fn default_max_scope_depth() -> usize {
    DEFAULT_MAX_SCOPE_DEPTH
}

/// Default override limit.
const fn default_max_overrides_per_resource() -> usize {
    DEFAULT_MAX_OVERRIDES_PER_RESOURCE
}

/// Resolves the config path from the argument or environment defaults.
fn resolve_path(path: Option<&Path>, env: &impl EnvProvider) -> Result<PathBuf, ConfigError> {
    if let Some(path) = path {
        return Ok(path.to_path_buf());
    }
    if let Some(env_path) = env.var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok(PathBuf::from(env_path));
    }
    Ok(PathBuf::from(DEFAULT_CONFIG_NAME))
}

/// Validates a path against length limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("path component too long".to_string()));
        }
    }
    Ok(())
}
