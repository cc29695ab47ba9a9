// crates/resource-l10n-config/tests/common/mod.rs
// =============================================================================
// Module: Config Test Helpers
// Description: Shared helpers for resource-l10n-config integration tests.
// Purpose: Provide a deterministic environment and a small fixture registry.
// =============================================================================

#![allow(dead_code, reason = "Shared test helpers may be unused in some suites.")]

use std::collections::HashMap;

use resource_l10n_config::ConfigError;
use resource_l10n_config::EnvProvider;
use resource_l10n_config::SystemLocale;
use resource_l10n_core::CultureId;
use resource_l10n_core::InMemoryRegistry;
use resource_l10n_core::ResourceDecl;
use resource_l10n_core::ScopeDecl;

/// Result type used by tests that report failures as strings.
pub type TestResult = Result<(), String>;

/// In-memory environment for culture detection tests.
#[derive(Debug, Default, Clone)]
pub struct StubEnv {
    /// Variables visible to lookups.
    vars: HashMap<String, String>,
}

impl StubEnv {
    /// Creates an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one variable.
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_string(), value.to_string());
        self
    }
}

impl EnvProvider for StubEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

/// Fixed host locale for culture detection tests.
#[derive(Debug, Default, Clone)]
pub struct StubSystem(pub Option<String>);

impl StubSystem {
    /// Host reporting `locale`.
    pub fn reporting(locale: &str) -> Self {
        Self(Some(locale.to_string()))
    }

    /// Host reporting no locale.
    pub const fn silent() -> Self {
        Self(None)
    }
}

impl SystemLocale for StubSystem {
    fn system_locale(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Parses a culture tag, reporting failures as test errors.
pub fn culture(tag: &str) -> Result<CultureId, String> {
    CultureId::parse(tag).map_err(|err| err.to_string())
}

/// Asserts that `result` failed with a message containing `needle`.
pub fn assert_error_contains<T>(result: Result<T, ConfigError>, needle: &str) -> TestResult {
    match result {
        Err(error) => {
            let message = error.to_string();
            if message.contains(needle) {
                Ok(())
            } else {
                Err(format!("error '{message}' did not contain '{needle}'"))
            }
        }
        Ok(_) => Err(format!("expected error containing '{needle}'")),
    }
}

/// Registry with one English-based scope and a Polish override.
pub fn greeting_registry() -> Result<InMemoryRegistry, String> {
    let mut builder = InMemoryRegistry::builder();
    builder
        .declare_scope(ScopeDecl::new("Resources").base_culture(culture("en")?))
        .map_err(|err| err.to_string())?
        .declare_resource(
            ResourceDecl::new("Resources.Hello", "Hello {name}!")
                .in_scope("Resources")
                .localized(culture("pl")?, "Czesc {name}!"),
        )
        .map_err(|err| err.to_string())?;
    Ok(builder.build())
}
