// crates/resource-l10n-core/tests/audit.rs
// ============================================================================
// Module: Resolution Audit Tests
// Description: Event recording through the Localizer and the file sink.
// ============================================================================
//! ## Overview
//! Confirms one audit event per call with the right outcome, and that
//! argument values never reach the log.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

mod support;

use std::sync::Arc;

use resource_l10n_core::CultureSource;
use resource_l10n_core::Localizer;
use resource_l10n_core::ResolutionOutcome;
use resource_l10n_core::ResourceId;
use resource_l10n_core::l10n_args;
use resource_l10n_core::runtime::FileAuditSink;
use serde_json::Value;
use support::RecordingAuditSink;
use support::english;
use support::fixture_registry;
use support::french;
use support::polish;

fn recording_localizer() -> (Localizer<resource_l10n_core::InMemoryRegistry>, Arc<RecordingAuditSink>) {
    let sink = Arc::new(RecordingAuditSink::default());
    let localizer = Localizer::new(fixture_registry(), polish()).with_audit_sink(sink.clone());
    (localizer, sink)
}

#[test]
fn records_one_event_per_call_with_outcome() {
    let (localizer, sink) = recording_localizer();
    localizer.localize("Resources.Yes").unwrap();
    localizer.localize_in("Resources.Yes", &english()).unwrap();
    localizer.localize_in("Resources.Yes", &french()).unwrap();
    localizer.localize("Resources.Missing").unwrap_err();

    let events = sink.events();
    let outcomes: Vec<_> = events.iter().map(|event| event.outcome).collect();
    assert_eq!(
        outcomes,
        vec![
            ResolutionOutcome::Override,
            ResolutionOutcome::Intrinsic,
            ResolutionOutcome::MissingOverride,
            ResolutionOutcome::UnknownResource,
        ]
    );
    assert_eq!(events[0].culture_source, CultureSource::Ambient);
    assert_eq!(events[0].target_culture, polish());
    assert_eq!(events[0].base_culture, Some(english()));
    assert_eq!(events[1].culture_source, CultureSource::Explicit);
    assert_eq!(events[3].base_culture, None);
}

#[test]
fn unmatched_parameter_event_keeps_base_culture() {
    let (localizer, sink) = recording_localizer();
    let hello = ResourceId::new("Resources.Hello");
    let args = l10n_args!(lastName = "secret-value");
    localizer.localize_with(&hello, None, Some(&args)).unwrap_err();

    let events = sink.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].outcome, ResolutionOutcome::UnmatchedParameter);
    assert_eq!(events[0].base_culture, Some(english()));
    assert_eq!(events[0].argument_count, 1);
}

#[test]
fn events_never_contain_argument_values_or_text() {
    let (localizer, sink) = recording_localizer();
    let hello = ResourceId::new("Resources.Hello");
    let args = l10n_args!(name = "secret-value");
    localizer.localize_with(&hello, None, Some(&args)).unwrap();

    let payload = serde_json::to_string(&sink.events()[0]).unwrap();
    assert!(!payload.contains("secret-value"));
    assert!(!payload.contains("Czesc"));
    let json: Value = serde_json::from_str(&payload).unwrap();
    assert_eq!(json["event"], "l10n_resolution");
    assert_eq!(json["outcome"], "override");
    assert_eq!(json["culture_source"], "ambient");
    assert_eq!(json["resource"], "Resources.Hello");
}

#[test]
fn file_sink_appends_json_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("audit.jsonl");
    let sink = Arc::new(FileAuditSink::new(&path).unwrap());
    let localizer = Localizer::new(fixture_registry(), english()).with_audit_sink(sink);
    localizer.localize("Resources.Yes").unwrap();
    localizer.localize_in("Resources.Yes", &polish()).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<Value> =
        contents.lines().map(|line| serde_json::from_str(line).unwrap()).collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["outcome"], "intrinsic");
    assert_eq!(lines[1]["outcome"], "override");
    assert_eq!(lines[1]["target_culture"], "pl");
}
