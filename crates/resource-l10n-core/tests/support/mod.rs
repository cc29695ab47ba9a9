// crates/resource-l10n-core/tests/support/mod.rs
// ============================================================================
// Module: Test Support
// Description: Shared fixtures and helpers for resolution integration tests.
// ============================================================================
//! ## Overview
//! Builds the fixture registry used across suites and provides culture
//! shorthands, typed resource tokens, and a recording audit sink.

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
#![allow(dead_code, reason = "Shared test helpers may be unused in some suites.")]

use std::sync::Mutex;

use resource_l10n_core::CultureId;
use resource_l10n_core::InMemoryRegistry;
use resource_l10n_core::LocalizedResource;
use resource_l10n_core::ResolutionAuditSink;
use resource_l10n_core::ResolutionEvent;
use resource_l10n_core::ResourceDecl;
use resource_l10n_core::ResourceId;
use resource_l10n_core::ScopeDecl;
use resource_l10n_core::ScopeId;

// ============================================================================
// SECTION: Cultures
// ============================================================================

/// Parses a culture tag, panicking on malformed fixtures.
pub fn culture(tag: &str) -> CultureId {
    CultureId::parse(tag).expect("fixture culture tag")
}

/// English, the base culture of the `Resources` scope.
pub fn english() -> CultureId {
    culture("en")
}

/// Polish.
pub fn polish() -> CultureId {
    culture("pl")
}

/// German.
pub fn german() -> CultureId {
    culture("de")
}

/// French (never translated in the fixtures).
pub fn french() -> CultureId {
    culture("fr")
}

// ============================================================================
// SECTION: Resource Tokens
// ============================================================================

/// Enumeration whose members are registered under the `EnumResource` scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumResource {
    /// Resource was not found.
    NotFound,
}

impl LocalizedResource for EnumResource {
    fn resource_id(&self) -> ResourceId {
        let scope = ScopeId::new("EnumResource");
        match self {
            Self::NotFound => ResourceId::member(&scope, "NotFound"),
        }
    }
}

/// Static greeting whose current value differs from the registered one.
#[derive(Debug, Clone)]
pub struct LiveGreeting(pub String);

impl LocalizedResource for LiveGreeting {
    fn resource_id(&self) -> ResourceId {
        ResourceId::new("Resources.Hello")
    }

    fn live_value(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

// ============================================================================
// SECTION: Fixture Registry
// ============================================================================

/// Builds the shared fixture registry.
pub fn fixture_registry() -> InMemoryRegistry {
    let mut builder = InMemoryRegistry::builder();
    builder
        .declare_scope(ScopeDecl::new("Resources").base_culture(english()))
        .expect("Resources scope")
        .declare_resource(
            ResourceDecl::new("Resources.Yes", "Yes")
                .in_scope("Resources")
                .localized(polish(), "Tak")
                .localized(german(), "Ja"),
        )
        .expect("Yes")
        .declare_resource(
            ResourceDecl::new("Resources.Hello", "Hello {name}!")
                .in_scope("Resources")
                .localized(polish(), "Czesc {name}!")
                .localized(german(), "Hallo {name}!"),
        )
        .expect("Hello")
        .declare_resource(
            ResourceDecl::new("Resources.Label", "Label")
                .in_scope("Resources")
                .localized(polish(), "Etykieta"),
        )
        .expect("Label")
        .declare_resource(ResourceDecl::new("Resources.Plain", "Plain {name}").in_scope("Resources"))
        .expect("Plain")
        .declare_resource(
            ResourceDecl::new("Resources.Duplicate", "Duplicate")
                .in_scope("Resources")
                .localized(polish(), "Pierwszy")
                .localized(polish(), "Drugi"),
        )
        .expect("Duplicate")
        .declare_resource(
            ResourceDecl::new("Resources.BaseTagged", "Intrinsic")
                .in_scope("Resources")
                .localized(english(), "Tagged English")
                .localized(polish(), "Polski"),
        )
        .expect("BaseTagged")
        .declare_scope(ScopeDecl::new("EnumResource"))
        .expect("EnumResource scope")
        .declare_resource(
            ResourceDecl::member("EnumResource", "NotFound")
                .localized(polish(), "Zasób nie został odnaleziony")
                .localized(english(), "Resource was not found"),
        )
        .expect("NotFound")
        .declare_scope(ScopeDecl::new("Outer").base_culture(english()))
        .expect("Outer scope")
        .declare_scope(ScopeDecl::new("Outer.Middle").within("Outer"))
        .expect("Middle scope")
        .declare_scope(ScopeDecl::new("Outer.Middle.Inner").within("Outer.Middle"))
        .expect("Inner scope")
        .declare_resource(
            ResourceDecl::new("Outer.Middle.Inner.Label", "Label")
                .in_scope("Outer.Middle.Inner")
                .localized(polish(), "Etykieta"),
        )
        .expect("nested Label")
        .declare_scope(ScopeDecl::new("Outer.Polish").within("Outer").base_culture(polish()))
        .expect("Polish scope")
        .declare_resource(
            ResourceDecl::new("Outer.Polish.Greeting", "Dzień dobry")
                .in_scope("Outer.Polish")
                .localized(english(), "Good morning"),
        )
        .expect("Greeting");
    builder.build()
}

// ============================================================================
// SECTION: Audit Recording
// ============================================================================

/// Audit sink that keeps every event in memory.
#[derive(Default)]
pub struct RecordingAuditSink {
    /// Recorded events in arrival order.
    events: Mutex<Vec<ResolutionEvent>>,
}

impl RecordingAuditSink {
    /// Returns a snapshot of recorded events.
    pub fn events(&self) -> Vec<ResolutionEvent> {
        self.events.lock().expect("audit lock").clone()
    }
}

impl ResolutionAuditSink for RecordingAuditSink {
    fn record(&self, event: &ResolutionEvent) {
        self.events.lock().expect("audit lock").push(event.clone());
    }
}
