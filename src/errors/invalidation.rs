// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for cache invalidation.

use crate::cache::{CacheNamespace, CacheTarget};

/// Errors that can occur while marking cached output stale.
///
/// Cache staleness is an availability concern, not a correctness one, so the
/// [`InvalidationGateway`](crate::InvalidationGateway) logs and reports these
/// instead of failing the operation that triggered the invalidation.
#[derive(Debug, thiserror::Error)]
pub enum InvalidationError {
    /// An empty identifier was passed; it never reaches the primitive.
    #[error("Empty {namespace} identifier")]
    EmptyIdentifier {
        /// Namespace the identifier was submitted to
        namespace: CacheNamespace,
    },

    /// The underlying revalidation primitive failed for one target.
    #[error("Failed to revalidate {target}")]
    RevalidateFailed {
        /// Target whose revalidation failed
        target: CacheTarget,
        /// The underlying primitive error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Some invalidations of a batch failed.
    ///
    /// Produced only when a caller opts into treating a partial batch as an
    /// error via [`InvalidationReport::into_result`](crate::InvalidationReport::into_result).
    #[error("{} of {attempted} {namespace} invalidations failed", .failures.len())]
    Incomplete {
        /// Namespace of the batch
        namespace: CacheNamespace,
        /// Number of identifiers in the batch
        attempted: usize,
        /// Every failure of the batch
        failures: Vec<InvalidationError>,
    },
}

impl InvalidationError {
    /// Helper to create a `RevalidateFailed` error from any error type.
    pub fn revalidate_failed(
        target: CacheTarget,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        InvalidationError::RevalidateFailed {
            target,
            source: source.into(),
        }
    }

    /// The target this error concerns, when it concerns exactly one
    pub fn target(&self) -> Option<&CacheTarget> {
        match self {
            InvalidationError::RevalidateFailed { target, .. } => Some(target),
            InvalidationError::EmptyIdentifier { .. } | InvalidationError::Incomplete { .. } => {
                None
            }
        }
    }
}
