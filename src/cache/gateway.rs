// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Batch invalidation of cache paths and tags

use futures::future::join_all;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn, Instrument};

use super::{CacheNamespace, CacheTarget, RevalidateError, Revalidator};
use crate::errors::InvalidationError;
use crate::schemas::AssetType;
use crate::spans;

/// Outcome of invalidating one batch of identifiers
///
/// Every identifier of the batch ends up either in [`invalidated`](Self::invalidated)
/// or in [`failures`](Self::failures).
#[derive(Debug)]
pub struct InvalidationReport {
    namespace: CacheNamespace,
    attempted: usize,
    invalidated: Vec<CacheTarget>,
    failures: Vec<InvalidationError>,
}

impl InvalidationReport {
    /// Namespace of the batch
    pub fn namespace(&self) -> CacheNamespace {
        self.namespace
    }

    /// Number of identifiers submitted
    pub fn attempted(&self) -> usize {
        self.attempted
    }

    /// Targets the primitive accepted
    pub fn invalidated(&self) -> &[CacheTarget] {
        &self.invalidated
    }

    /// Identifiers that could not be invalidated
    pub fn failures(&self) -> &[InvalidationError] {
        &self.failures
    }

    /// Whether every identifier was invalidated
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Treats a partial batch as an error
    ///
    /// # Errors
    ///
    /// Returns [`InvalidationError::Incomplete`] carrying every failure when at
    /// least one identifier was not invalidated.
    pub fn into_result(self) -> Result<Vec<CacheTarget>, InvalidationError> {
        if self.failures.is_empty() {
            Ok(self.invalidated)
        } else {
            Err(InvalidationError::Incomplete {
                namespace: self.namespace,
                attempted: self.attempted,
                failures: self.failures,
            })
        }
    }
}

impl fmt::Display for InvalidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} {} invalidations succeeded",
            self.invalidated.len(),
            self.attempted,
            self.namespace
        )
    }
}

/// Marks cached paths and tags stale through a [`Revalidator`]
///
/// The gateway never short-circuits: every identifier of a batch is sent to
/// the primitive, concurrently and in no particular order. Failures are logged
/// at `warn` and collected in the returned [`InvalidationReport`] rather than
/// propagated, so a failed cache signal never masks the outcome of the
/// operation that triggered it.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use assetrpc::{AssetType, InvalidationGateway, NoOpRevalidator};
///
/// # #[tokio::main]
/// # async fn main() {
/// let gateway = InvalidationGateway::new(Arc::new(NoOpRevalidator));
///
/// let report = gateway.invalidate_tags(["asset:bond", "portfolio"]).await;
/// assert_eq!(report.invalidated().len(), 2);
///
/// for report in gateway.invalidate_asset_views(AssetType::Bond).await {
///     assert!(report.is_complete());
/// }
/// # }
/// ```
#[derive(Clone)]
pub struct InvalidationGateway {
    revalidator: Arc<dyn Revalidator>,
}

impl InvalidationGateway {
    /// Creates a gateway over the given primitive
    pub fn new(revalidator: Arc<dyn Revalidator>) -> Self {
        Self { revalidator }
    }

    /// Name of the underlying backend
    pub fn backend(&self) -> &'static str {
        self.revalidator.name()
    }

    /// Marks every path stale
    pub async fn invalidate_paths<I>(&self, paths: I) -> InvalidationReport
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.invalidate(CacheNamespace::Path, paths).await
    }

    /// Marks every tag stale
    pub async fn invalidate_tags<I>(&self, tags: I) -> InvalidationReport
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.invalidate(CacheNamespace::Tag, tags).await
    }

    /// Marks the list view and the query tag of an asset type stale
    ///
    /// Returns the path report followed by the tag report.
    pub async fn invalidate_asset_views(&self, asset_type: AssetType) -> Vec<InvalidationReport> {
        let (paths, tags) = futures::join!(
            self.invalidate_paths([asset_type.list_path()]),
            self.invalidate_tags([asset_type.cache_tag()]),
        );
        vec![paths, tags]
    }

    async fn invalidate<I>(&self, namespace: CacheNamespace, identifiers: I) -> InvalidationReport
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let identifiers: Vec<String> = identifiers
            .into_iter()
            .map(|identifier| identifier.as_ref().to_owned())
            .collect();
        let attempted = identifiers.len();
        let span = spans::invalidate_batch(namespace, self.backend(), attempted);

        async move {
            let mut failures = Vec::new();
            let mut targets = Vec::with_capacity(attempted);
            for identifier in identifiers {
                if identifier.is_empty() {
                    warn!(namespace = %namespace, "Skipping empty cache identifier");
                    failures.push(InvalidationError::EmptyIdentifier { namespace });
                } else {
                    targets.push(namespace.target(identifier));
                }
            }

            let outcomes = join_all(targets.into_iter().map(|target| async move {
                let result = self.revalidate(&target).await;
                (target, result)
            }))
            .await;

            let mut invalidated = Vec::with_capacity(outcomes.len());
            for (target, result) in outcomes {
                match result {
                    Ok(()) => invalidated.push(target),
                    Err(source) => {
                        warn!(
                            cache_target = %target,
                            backend = self.backend(),
                            error = %source,
                            "Failed to revalidate cache target"
                        );
                        failures.push(InvalidationError::revalidate_failed(target, source));
                    }
                }
            }

            debug!(
                invalidated = invalidated.len(),
                failed = failures.len(),
                "Cache invalidation batch finished"
            );

            InvalidationReport {
                namespace,
                attempted,
                invalidated,
                failures,
            }
        }
        .instrument(span)
        .await
    }

    async fn revalidate(&self, target: &CacheTarget) -> Result<(), RevalidateError> {
        match target {
            CacheTarget::Path(path) => self.revalidator.revalidate_path(path).await,
            CacheTarget::Tag(tag) => self.revalidator.revalidate_tag(tag).await,
        }
    }
}

impl fmt::Debug for InvalidationGateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InvalidationGateway")
            .field("backend", &self.backend())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{CachePath, CacheTag, MemoryRevalidator};
    use async_trait::async_trait;

    /// Fails every target whose identifier contains "broken"
    struct PartiallyBroken;

    #[async_trait]
    impl Revalidator for PartiallyBroken {
        async fn revalidate_path(&self, path: &CachePath) -> Result<(), RevalidateError> {
            if path.as_str().contains("broken") {
                Err("cache store unreachable".into())
            } else {
                Ok(())
            }
        }

        async fn revalidate_tag(&self, tag: &CacheTag) -> Result<(), RevalidateError> {
            if tag.as_str().contains("broken") {
                Err("cache store unreachable".into())
            } else {
                Ok(())
            }
        }

        fn name(&self) -> &'static str {
            "PartiallyBroken"
        }
    }

    #[tokio::test]
    async fn test_failures_do_not_short_circuit() {
        let gateway = InvalidationGateway::new(Arc::new(PartiallyBroken));
        let report = gateway
            .invalidate_paths(["/broken", "/assets", "/broken/too", "/portfolio"])
            .await;

        assert_eq!(report.attempted(), 4);
        assert_eq!(report.invalidated().len(), 2);
        assert_eq!(report.failures().len(), 2);
        assert!(!report.is_complete());
        assert_eq!(report.to_string(), "2/4 path invalidations succeeded");

        let error = report.into_result().unwrap_err();
        assert_eq!(error.to_string(), "2 of 4 path invalidations failed");
    }

    #[tokio::test]
    async fn test_empty_identifier_never_reaches_primitive() {
        let backend = Arc::new(MemoryRevalidator::new());
        let gateway = InvalidationGateway::new(backend.clone());
        let report = gateway.invalidate_tags(["", "asset:fund"]).await;

        assert_eq!(report.invalidated().len(), 1);
        assert!(matches!(
            report.failures(),
            [InvalidationError::EmptyIdentifier {
                namespace: CacheNamespace::Tag
            }]
        ));
        assert_eq!(backend.stats().await.tag_signals, 1);
    }

    #[tokio::test]
    async fn test_empty_batch_is_complete() {
        let gateway = InvalidationGateway::new(Arc::new(PartiallyBroken));
        let report = gateway.invalidate_paths(Vec::<String>::new()).await;
        assert!(report.is_complete());
        assert_eq!(report.attempted(), 0);
        assert!(report.into_result().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_asset_views_use_both_namespaces() {
        let backend = Arc::new(MemoryRevalidator::new());
        let gateway = InvalidationGateway::new(backend.clone());
        let reports = gateway.invalidate_asset_views(AssetType::Stablecoin).await;

        assert_eq!(reports[0].namespace(), CacheNamespace::Path);
        assert_eq!(reports[1].namespace(), CacheNamespace::Tag);
        assert_eq!(
            backend.stale_targets().await,
            vec![
                CacheTarget::Path(CachePath::new("/assets/stablecoins")),
                CacheTarget::Tag(CacheTag::new("asset:stablecoin")),
            ]
        );
    }

    #[test]
    fn test_debug_names_backend() {
        let gateway = InvalidationGateway::new(Arc::new(PartiallyBroken));
        assert_eq!(
            format!("{gateway:?}"),
            "InvalidationGateway { backend: \"PartiallyBroken\" }"
        );
    }
}
