// crates/resource-l10n-core/src/runtime/audit.rs
// ============================================================================
// Module: Resolution Audit Logging
// Description: Structured audit events for resource resolution.
// Purpose: Emit JSON-line resolution logs without hard dependencies.
// Dependencies: crate::core, serde, serde_json
// ============================================================================

//! ## Overview
//! Each call through [`Localizer`](crate::runtime::Localizer) records one
//! [`ResolutionEvent`]. Events name the resource, cultures, and outcome;
//! argument values and resolved text are never included. Sinks decide where
//! events go: nowhere, stderr, or an append-only file.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::OpenOptions;
use std::io;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use serde::Serialize;

use crate::core::CultureId;
use crate::core::CultureSource;
use crate::core::ResourceId;
use crate::runtime::selector::SelectionKind;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Final outcome of one resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionOutcome {
    /// Intrinsic value returned.
    Intrinsic,
    /// Override returned.
    Override,
    /// No override matched; empty text returned.
    MissingOverride,
    /// Substitution rejected an argument key.
    UnmatchedParameter,
    /// Resource unknown to the provider.
    UnknownResource,
}

impl From<SelectionKind> for ResolutionOutcome {
    fn from(kind: SelectionKind) -> Self {
        match kind {
            SelectionKind::Intrinsic => Self::Intrinsic,
            SelectionKind::Override => Self::Override,
            SelectionKind::MissingOverride => Self::MissingOverride,
        }
    }
}

/// Resolution audit event payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolutionEvent {
    /// Event identifier.
    pub event: &'static str,
    /// Event timestamp (milliseconds since epoch).
    pub timestamp_ms: u128,
    /// Resource resolved.
    pub resource: ResourceId,
    /// Culture the text was resolved for.
    pub target_culture: CultureId,
    /// Base culture inherited by the resource, if any.
    pub base_culture: Option<CultureId>,
    /// Whether the target culture was explicit or ambient.
    pub culture_source: CultureSource,
    /// Resolution outcome.
    pub outcome: ResolutionOutcome,
    /// Number of supplied placeholder arguments.
    pub argument_count: usize,
}

/// Inputs for [`ResolutionEvent::new`].
#[derive(Debug, Clone)]
pub struct ResolutionEventParams {
    /// Resource resolved.
    pub resource: ResourceId,
    /// Culture the text was resolved for.
    pub target_culture: CultureId,
    /// Base culture inherited by the resource.
    pub base_culture: Option<CultureId>,
    /// Whether the target culture was explicit or ambient.
    pub culture_source: CultureSource,
    /// Resolution outcome.
    pub outcome: ResolutionOutcome,
    /// Number of supplied placeholder arguments.
    pub argument_count: usize,
}

impl ResolutionEvent {
    /// Creates a new resolution event with a consistent timestamp.
    #[must_use]
    pub fn new(params: ResolutionEventParams) -> Self {
        let timestamp_ms =
            SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis();
        Self {
            event: "l10n_resolution",
            timestamp_ms,
            resource: params.resource,
            target_culture: params.target_culture,
            base_culture: params.base_culture,
            culture_source: params.culture_source,
            outcome: params.outcome,
            argument_count: params.argument_count,
        }
    }
}

// ============================================================================
// SECTION: Trait
// ============================================================================

/// Audit sink for resolution events.
pub trait ResolutionAuditSink: Send + Sync {
    /// Record a resolution event.
    fn record(&self, event: &ResolutionEvent);
}

/// Audit sink that logs JSON lines to stderr.
pub struct StderrAuditSink;

impl ResolutionAuditSink for StderrAuditSink {
    fn record(&self, event: &ResolutionEvent) {
        if let Ok(payload) = serde_json::to_string(event) {
            let _ = writeln!(std::io::stderr(), "{payload}");
        }
    }
}

/// Audit sink that logs JSON lines to a file.
pub struct FileAuditSink {
    /// File handle used for append-only logging.
    file: Mutex<std::fs::File>,
}

impl FileAuditSink {
    /// Opens the audit log file in append mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn new(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }
}

impl ResolutionAuditSink for FileAuditSink {
    fn record(&self, event: &ResolutionEvent) {
        if let Ok(payload) = serde_json::to_string(event)
            && let Ok(mut file) = self.file.lock()
        {
            let _ = writeln!(file, "{payload}");
            let _ = file.flush();
        }
    }
}

/// No-op audit sink.
pub struct NoopAuditSink;

impl ResolutionAuditSink for NoopAuditSink {
    fn record(&self, _event: &ResolutionEvent) {}
}
