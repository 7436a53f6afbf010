// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! In-memory revalidation backend

use async_trait::async_trait;
use std::collections::BTreeSet;
use tokio::sync::Mutex;
use tracing::trace;

use super::{CachePath, CacheTag, CacheTarget, InvalidationStats, RevalidateError, Revalidator};

/// Internal state for the memory backend
#[derive(Debug, Default)]
struct MemoryState {
    /// Targets marked stale and not yet recomputed
    stale: BTreeSet<CacheTarget>,
    /// Signal counters
    stats: InvalidationStats,
}

impl MemoryState {
    fn mark_stale(&mut self, target: CacheTarget) {
        match target {
            CacheTarget::Path(_) => self.stats.path_signals += 1,
            CacheTarget::Tag(_) => self.stats.tag_signals += 1,
        }
        if !self.stale.insert(target) {
            self.stats.redundant_signals += 1;
        }
        self.stats.stale_entries = self.stale.len();
    }
}

/// Revalidation backend that keeps the set of stale targets in memory
///
/// Useful for single-process deployments and for asserting invalidation
/// behavior in tests. A cache layer reading through this backend calls
/// [`mark_fresh`](Self::mark_fresh) once it has recomputed a target.
///
/// Marking a target stale twice leaves the same state as marking it once;
/// only [`InvalidationStats::redundant_signals`] records the repeat.
#[derive(Debug, Default)]
pub struct MemoryRevalidator {
    state: Mutex<MemoryState>,
}

impl MemoryRevalidator {
    /// Creates an empty backend
    pub fn new() -> Self {
        Self::default()
    }

    /// Stale targets, paths before tags, each sorted by identifier
    pub async fn stale_targets(&self) -> Vec<CacheTarget> {
        self.state.lock().await.stale.iter().cloned().collect()
    }

    /// Whether `target` is stale
    pub async fn is_stale(&self, target: &CacheTarget) -> bool {
        self.state.lock().await.stale.contains(target)
    }

    /// Records that `target` was recomputed; returns whether it was stale
    pub async fn mark_fresh(&self, target: &CacheTarget) -> bool {
        let mut state = self.state.lock().await;
        let was_stale = state.stale.remove(target);
        state.stats.stale_entries = state.stale.len();
        was_stale
    }

    /// Current counters
    pub async fn stats(&self) -> InvalidationStats {
        self.state.lock().await.stats.clone()
    }

    /// Forgets every stale target and resets the counters
    pub async fn reset(&self) {
        *self.state.lock().await = MemoryState::default();
    }
}

#[async_trait]
impl Revalidator for MemoryRevalidator {
    async fn revalidate_path(&self, path: &CachePath) -> Result<(), RevalidateError> {
        trace!(path = %path, "Marking path stale");
        self.state
            .lock()
            .await
            .mark_stale(CacheTarget::Path(path.clone()));
        Ok(())
    }

    async fn revalidate_tag(&self, tag: &CacheTag) -> Result<(), RevalidateError> {
        trace!(tag = %tag, "Marking tag stale");
        self.state
            .lock()
            .await
            .mark_stale(CacheTarget::Tag(tag.clone()));
        Ok(())
    }

    fn name(&self) -> &'static str {
        "MemoryRevalidator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_double_signal_is_idempotent() {
        let backend = MemoryRevalidator::new();
        let path = CachePath::new("/assets/funds");

        backend.revalidate_path(&path).await.unwrap();
        let once = backend.stale_targets().await;
        backend.revalidate_path(&path).await.unwrap();
        let twice = backend.stale_targets().await;

        assert_eq!(once, twice);
        let stats = backend.stats().await;
        assert_eq!(stats.path_signals, 2);
        assert_eq!(stats.redundant_signals, 1);
        assert_eq!(stats.stale_entries, 1);
    }

    #[tokio::test]
    async fn test_mark_fresh() {
        let backend = MemoryRevalidator::new();
        let target = CacheTarget::Tag(CacheTag::new("asset:equity"));

        assert!(!backend.mark_fresh(&target).await);
        backend.revalidate_tag(&CacheTag::new("asset:equity")).await.unwrap();
        assert!(backend.is_stale(&target).await);
        assert!(backend.mark_fresh(&target).await);
        assert!(!backend.is_stale(&target).await);
        assert_eq!(backend.stats().await.stale_entries, 0);
    }

    #[tokio::test]
    async fn test_path_and_tag_kept_apart() {
        let backend = MemoryRevalidator::new();
        backend.revalidate_path(&CachePath::new("x")).await.unwrap();
        assert!(!backend.is_stale(&CacheTarget::Tag(CacheTag::new("x"))).await);

        backend.reset().await;
        assert!(backend.stale_targets().await.is_empty());
        assert_eq!(backend.stats().await, InvalidationStats::default());
    }
}
