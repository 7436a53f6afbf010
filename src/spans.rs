// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Span creation helpers for assetrpc operations.
//!
//! Telemetry concerns are kept out of business logic: instead of using
//! `#[instrument]` attributes directly on functions, each instrumented operation
//! has a corresponding span helper function in this module.
//!
//! Usage pattern:
//! ```rust,ignore
//! pub fn my_operation(&self, param: Type) -> Result<T> {
//!     let span = spans::my_operation(param_value);
//!     let _guard = span.enter();
//!     // Business logic here
//! }
//! ```
//!
//! Async operations attach the span with `tracing::Instrument` instead of
//! holding a guard across `.await` points.

use tracing::Span;

use crate::cache::CacheNamespace;

/// Create span for invoking a procedure.
///
/// Parent: None (root span for one inbound call)
/// Children: validate_payload, invalidate_batch spans
#[inline]
pub(crate) fn invoke_procedure(procedure: &'static str, authenticated: bool) -> Span {
    tracing::info_span!(
        "assetrpc.invoke_procedure",
        procedure = procedure,
        authenticated = authenticated,
    )
}

/// Create span for validating a payload against a schema.
///
/// Parent: invoke_procedure span, when validation runs inside a call
/// Children: None
#[inline]
pub(crate) fn validate_payload(schema: &'static str) -> Span {
    tracing::debug_span!("assetrpc.validate_payload", schema = schema)
}

/// Create span for invalidating a batch of cache identifiers.
///
/// Parent: invoke_procedure span, when triggered by a handler
/// Children: None (one revalidation call per identifier, not traced individually)
#[inline]
pub(crate) fn invalidate_batch(
    namespace: CacheNamespace,
    backend: &'static str,
    identifier_count: usize,
) -> Span {
    tracing::info_span!(
        "assetrpc.invalidate_batch",
        namespace = %namespace,
        backend = backend,
        identifier_count = identifier_count,
    )
}

/// Create span for composing a request context.
///
/// Parent: None, or the server's request span
/// Children: None
#[inline]
pub(crate) fn compose_context(has_db_override: bool, has_auth_override: bool) -> Span {
    tracing::trace_span!(
        "assetrpc.compose_context",
        has_db_override = has_db_override,
        has_auth_override = has_auth_override,
    )
}
