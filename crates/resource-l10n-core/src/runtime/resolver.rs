// crates/resource-l10n-core/src/runtime/resolver.rs
// ============================================================================
// Module: Resource Resolver
// Description: Composes base-culture lookup, selection, and substitution.
// Purpose: Provide the single entry point for localized text resolution.
// Dependencies: crate::{core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! Resolution is one synchronous pass:
//! target culture (explicit or ambient) → inherited base culture → selected
//! text → placeholder substitution when arguments are supplied and the text
//! is non-empty. Errors propagate unchanged; there is no retry and no
//! fallback culture.
//!
//! [`resolve`] and [`resolve_request`] are pure. [`Localizer`] owns a
//! provider, the ambient culture, and an audit sink, and records one event
//! per call.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use crate::core::ArgumentBag;
use crate::core::CultureId;
use crate::core::ResolutionRequest;
use crate::core::ResourceId;
use crate::interfaces::LocalizedResource;
use crate::interfaces::MetadataProvider;
use crate::runtime::audit::NoopAuditSink;
use crate::runtime::audit::ResolutionAuditSink;
use crate::runtime::audit::ResolutionEvent;
use crate::runtime::audit::ResolutionEventParams;
use crate::runtime::audit::ResolutionOutcome;
use crate::runtime::base_culture::find_base_culture;
use crate::runtime::error::ResolveError;
use crate::runtime::selector::SelectionKind;
use crate::runtime::selector::select_text;
use crate::runtime::substitution::substitute;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Successful resolution with the decisions that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Final text.
    pub text: String,
    /// Culture the text was resolved for.
    pub culture: CultureId,
    /// Base culture inherited by the resource.
    pub base_culture: Option<CultureId>,
    /// Which text was selected.
    pub selection: SelectionKind,
}

// ============================================================================
// SECTION: Pure Resolution
// ============================================================================

/// Resolves `resource` for `culture`, substituting `args` when supplied.
///
/// # Errors
///
/// Returns [`ResolveError::UnknownResource`] when the provider does not know
/// the resource and [`ResolveError::UnmatchedParameter`] when an argument
/// has no placeholder in the selected text.
pub fn resolve<P>(
    provider: &P,
    resource: &ResourceId,
    culture: &CultureId,
    args: Option<&ArgumentBag>,
) -> Result<String, ResolveError>
where
    P: MetadataProvider + ?Sized,
{
    resolve_parts(provider, resource, None, culture, args).map(|resolution| resolution.text)
}

/// Resolves a full request, using `ambient` when it names no culture.
///
/// A live intrinsic value on the request replaces the registered one, and
/// lets unregistered resources resolve to that value.
///
/// # Errors
///
/// See [`resolve`].
pub fn resolve_request<P>(
    provider: &P,
    request: &ResolutionRequest,
    ambient: &CultureId,
) -> Result<Resolution, ResolveError>
where
    P: MetadataProvider + ?Sized,
{
    resolve_parts(
        provider,
        &request.resource,
        request.intrinsic.as_deref(),
        request.target_culture(ambient),
        request.arguments.as_ref(),
    )
}

/// Shared resolution pipeline.
fn resolve_parts<P>(
    provider: &P,
    resource: &ResourceId,
    live_intrinsic: Option<&str>,
    culture: &CultureId,
    args: Option<&ArgumentBag>,
) -> Result<Resolution, ResolveError>
where
    P: MetadataProvider + ?Sized,
{
    let intrinsic = live_intrinsic
        .or_else(|| provider.intrinsic_value(resource))
        .ok_or_else(|| ResolveError::UnknownResource(resource.clone()))?;
    let base_culture = find_base_culture(provider, resource);
    let selection = select_text(intrinsic, provider.overrides(resource), culture, base_culture);
    let selected = selection.text();
    let text = match args {
        Some(args) if !selected.is_empty() => substitute(selected, args, culture)?,
        _ => selected.to_string(),
    };
    Ok(Resolution {
        text,
        culture: culture.clone(),
        base_culture: base_culture.cloned(),
        selection: selection.kind(),
    })
}

// ============================================================================
// SECTION: Localizer
// ============================================================================

/// Caller-facing resolver bound to a provider and an ambient culture.
///
/// # Invariants
/// - The ambient culture is fixed at construction; the localizer never
///   changes it.
pub struct Localizer<P> {
    /// Metadata source.
    provider: P,
    /// Culture used when a call names none.
    ambient: CultureId,
    /// Destination for resolution events.
    audit: Arc<dyn ResolutionAuditSink>,
}

impl<P: MetadataProvider> Localizer<P> {
    /// Creates a localizer that does not record audit events.
    #[must_use]
    pub fn new(provider: P, ambient: CultureId) -> Self {
        Self {
            provider,
            ambient,
            audit: Arc::new(NoopAuditSink),
        }
    }

    /// Replaces the audit sink.
    #[must_use]
    pub fn with_audit_sink(mut self, audit: Arc<dyn ResolutionAuditSink>) -> Self {
        self.audit = audit;
        self
    }

    /// Returns the metadata provider.
    #[must_use]
    pub const fn provider(&self) -> &P {
        &self.provider
    }

    /// Returns the ambient culture.
    #[must_use]
    pub const fn ambient_culture(&self) -> &CultureId {
        &self.ambient
    }

    /// Resolves `resource` in the ambient culture.
    ///
    /// # Errors
    ///
    /// See [`resolve`].
    pub fn localize<R>(&self, resource: &R) -> Result<String, ResolveError>
    where
        R: LocalizedResource + ?Sized,
    {
        self.localize_with(resource, None, None)
    }

    /// Resolves `resource` in `culture`.
    ///
    /// # Errors
    ///
    /// See [`resolve`].
    pub fn localize_in<R>(&self, resource: &R, culture: &CultureId) -> Result<String, ResolveError>
    where
        R: LocalizedResource + ?Sized,
    {
        self.localize_with(resource, Some(culture), None)
    }

    /// Resolves `resource` with an optional culture and optional arguments.
    ///
    /// # Errors
    ///
    /// See [`resolve`].
    pub fn localize_with<R>(
        &self,
        resource: &R,
        culture: Option<&CultureId>,
        args: Option<&ArgumentBag>,
    ) -> Result<String, ResolveError>
    where
        R: LocalizedResource + ?Sized,
    {
        let request = ResolutionRequest {
            resource: resource.resource_id(),
            culture: culture.cloned(),
            arguments: args.cloned(),
            intrinsic: resource.live_value(),
        };
        self.resolve(&request)
    }

    /// Resolves a prepared request.
    ///
    /// # Errors
    ///
    /// See [`resolve`].
    pub fn resolve(&self, request: &ResolutionRequest) -> Result<String, ResolveError> {
        let result = resolve_request(&self.provider, request, &self.ambient);
        self.record(request, &result);
        result.map(|resolution| resolution.text)
    }

    /// Emits the audit event for one call.
    fn record(&self, request: &ResolutionRequest, result: &Result<Resolution, ResolveError>) {
        let (target_culture, base_culture, outcome) = match result {
            Ok(resolution) => (
                resolution.culture.clone(),
                resolution.base_culture.clone(),
                ResolutionOutcome::from(resolution.selection),
            ),
            Err(ResolveError::UnmatchedParameter {
                culture, ..
            }) => (
                culture.clone(),
                find_base_culture(&self.provider, &request.resource).cloned(),
                ResolutionOutcome::UnmatchedParameter,
            ),
            Err(ResolveError::UnknownResource(_)) => (
                request.target_culture(&self.ambient).clone(),
                None,
                ResolutionOutcome::UnknownResource,
            ),
        };
        let event = ResolutionEvent::new(ResolutionEventParams {
            resource: request.resource.clone(),
            target_culture,
            base_culture,
            culture_source: request.culture_source(),
            outcome,
            argument_count: request.arguments.as_ref().map_or(0, ArgumentBag::len),
        });
        self.audit.record(&event);
    }
}
