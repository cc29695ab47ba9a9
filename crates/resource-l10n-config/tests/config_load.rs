//! Config load and validation tests for resource-l10n-config.
// crates/resource-l10n-config/tests/config_load.rs
// =============================================================================
// Module: Config Load Validation Tests
// Description: Validate config loading guards and section constraints.
// Purpose: Ensure config input handling is strict and fail-closed.
// =============================================================================

#![allow(
    clippy::use_debug,
    clippy::missing_docs_in_private_items,
    reason = "Test diagnostics format values with Debug."
)]

use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use resource_l10n_config::AuditSinkKind;
use resource_l10n_config::CONFIG_ENV_VAR;
use resource_l10n_config::L10nConfig;
use resource_l10n_core::RegistryLimits;
use tempfile::NamedTempFile;

mod common;

use common::StubEnv;
use common::TestResult;
use common::assert_error_contains;
use common::culture;

fn write_config(contents: &[u8]) -> Result<NamedTempFile, String> {
    let mut file = NamedTempFile::new().map_err(|err| err.to_string())?;
    file.write_all(contents).map_err(|err| err.to_string())?;
    Ok(file)
}

#[test]
fn empty_file_yields_defaults() -> TestResult {
    let file = write_config(b"")?;
    let config = L10nConfig::load(Some(file.path())).map_err(|err| err.to_string())?;
    if config != L10nConfig::default() {
        return Err(format!("unexpected config: {config:?}"));
    }
    if config.culture.default_culture().map_err(|err| err.to_string())? != culture("en")? {
        return Err("default culture should be en".to_string());
    }
    if config.culture.env_var != "RESOURCE_L10N_CULTURE" || config.culture.detect_from_env {
        return Err("unexpected culture defaults".to_string());
    }
    if config.audit.enabled || config.audit.sink != AuditSinkKind::Stderr {
        return Err("audit should default to disabled stderr".to_string());
    }
    if config.limits.registry_limits() != RegistryLimits::default() {
        return Err("limits should match registry defaults".to_string());
    }
    Ok(())
}

#[test]
fn full_file_round_trips_into_sections() -> TestResult {
    let file = write_config(
        br#"
[culture]
default = "pl_PL"
detect_from_env = true
env_var = "APP_CULTURE"

[audit]
enabled = true
sink = "file"
path = "audit/l10n.jsonl"

[limits]
max_scope_depth = 8
max_overrides_per_resource = 16
"#,
    )?;
    let config = L10nConfig::load(Some(file.path())).map_err(|err| err.to_string())?;
    if config.culture.default_culture().map_err(|err| err.to_string())? != culture("pl-PL")? {
        return Err("default culture should normalize to pl-PL".to_string());
    }
    if !config.culture.detect_from_env || config.culture.env_var != "APP_CULTURE" {
        return Err("culture section not applied".to_string());
    }
    if config.audit.sink != AuditSinkKind::File
        || config.audit.path != Some(PathBuf::from("audit/l10n.jsonl"))
    {
        return Err("audit section not applied".to_string());
    }
    let limits = config.limits.registry_limits();
    if limits.max_scope_depth != 8 || limits.max_overrides_per_resource != 16 {
        return Err(format!("unexpected limits: {limits:?}"));
    }
    Ok(())
}

#[test]
fn load_rejects_missing_file() -> TestResult {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let path = dir.path().join("absent.toml");
    assert_error_contains(L10nConfig::load(Some(&path)), "config io error")
}

#[test]
fn config_env_var_locates_file_when_no_path_given() -> TestResult {
    let file = write_config(b"[culture]\ndefault = \"pl\"\n")?;
    let env = StubEnv::new().with(CONFIG_ENV_VAR, &file.path().to_string_lossy());
    let config = L10nConfig::load_with_env(None, &env).map_err(|err| err.to_string())?;
    if config.culture.default != "pl" {
        return Err(format!("env-selected file not loaded: {config:?}"));
    }
    Ok(())
}

#[test]
fn explicit_path_wins_over_config_env_var() -> TestResult {
    let from_env = write_config(b"[culture]\ndefault = \"pl\"\n")?;
    let explicit = write_config(b"[culture]\ndefault = \"de\"\n")?;
    let env = StubEnv::new().with(CONFIG_ENV_VAR, &from_env.path().to_string_lossy());
    let config =
        L10nConfig::load_with_env(Some(explicit.path()), &env).map_err(|err| err.to_string())?;
    if config.culture.default != "de" {
        return Err(format!("explicit path ignored: {config:?}"));
    }
    Ok(())
}

#[test]
fn config_env_var_path_length_is_limited() -> TestResult {
    let env = StubEnv::new().with(CONFIG_ENV_VAR, &"a/".repeat(2_500));
    assert_error_contains(L10nConfig::load_with_env(None, &env), "config path exceeds max length")
}

#[test]
fn config_env_var_pointing_at_missing_file_is_io_error() -> TestResult {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let missing = dir.path().join("absent.toml");
    let env = StubEnv::new().with(CONFIG_ENV_VAR, &missing.to_string_lossy());
    assert_error_contains(L10nConfig::load_with_env(None, &env), "config io error")
}

#[test]
fn load_rejects_path_too_long() -> TestResult {
    let long_path = "a/".repeat(2_500);
    assert_error_contains(
        L10nConfig::load(Some(Path::new(&long_path))),
        "path exceeds max length",
    )
}

#[test]
fn load_rejects_path_component_too_long() -> TestResult {
    let long_component = "a".repeat(300);
    assert_error_contains(
        L10nConfig::load(Some(Path::new(&long_component))),
        "path component too long",
    )
}

#[test]
fn load_rejects_oversized_file() -> TestResult {
    let file = write_config(&vec![b'#'; 1_048_577])?;
    assert_error_contains(L10nConfig::load(Some(file.path())), "config file exceeds size limit")
}

#[test]
fn load_rejects_non_utf8_file() -> TestResult {
    let file = write_config(&[0xFF, 0xFE, 0xFF])?;
    assert_error_contains(L10nConfig::load(Some(file.path())), "config file must be utf-8")
}

#[test]
fn unknown_fields_are_rejected() -> TestResult {
    assert_error_contains(
        L10nConfig::from_toml_str("[culture]\nfallback = \"en\"\n"),
        "unknown field",
    )?;
    assert_error_contains(L10nConfig::from_toml_str("[server]\nport = 1\n"), "unknown field")
}

#[test]
fn invalid_default_culture_is_rejected() -> TestResult {
    assert_error_contains(
        L10nConfig::from_toml_str("[culture]\ndefault = \"not a culture\"\n"),
        "culture.default",
    )?;
    assert_error_contains(L10nConfig::from_toml_str("[culture]\ndefault = \"\"\n"), "culture.default")
}

#[test]
fn culture_env_var_name_is_validated() -> TestResult {
    assert_error_contains(
        L10nConfig::from_toml_str("[culture]\nenv_var = \"app_culture\"\n"),
        "culture.env_var must use",
    )?;
    assert_error_contains(
        L10nConfig::from_toml_str("[culture]\nenv_var = \"\"\n"),
        "culture.env_var must be 1-128 characters",
    )
}

#[test]
fn file_sink_requires_path() -> TestResult {
    assert_error_contains(
        L10nConfig::from_toml_str("[audit]\nenabled = true\nsink = \"file\"\n"),
        "audit.path is required",
    )
}

#[test]
fn stderr_sink_rejects_path() -> TestResult {
    assert_error_contains(
        L10nConfig::from_toml_str("[audit]\nenabled = true\npath = \"audit.jsonl\"\n"),
        "audit.path is only valid for the file sink",
    )
}

#[test]
fn disabled_audit_skips_sink_checks() -> TestResult {
    L10nConfig::from_toml_str("[audit]\nenabled = false\nsink = \"file\"\n")
        .map(|_| ())
        .map_err(|err| err.to_string())
}

#[test]
fn limits_are_range_checked() -> TestResult {
    assert_error_contains(
        L10nConfig::from_toml_str("[limits]\nmax_scope_depth = 0\n"),
        "limits.max_scope_depth",
    )?;
    assert_error_contains(
        L10nConfig::from_toml_str("[limits]\nmax_scope_depth = 257\n"),
        "limits.max_scope_depth",
    )?;
    assert_error_contains(
        L10nConfig::from_toml_str("[limits]\nmax_overrides_per_resource = 1025\n"),
        "limits.max_overrides_per_resource",
    )?;
    L10nConfig::from_toml_str("[limits]\nmax_scope_depth = 256\nmax_overrides_per_resource = 0\n")
        .map(|_| ())
        .map_err(|err| err.to_string())
}
