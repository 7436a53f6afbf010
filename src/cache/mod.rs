// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Cache invalidation over an injected revalidation primitive
//!
//! Cached output is named either by a *path* (the rendered view at a route) or
//! by a *tag* (a label shared by every cached query over some data). The two
//! are separate namespaces: invalidating path `/assets` never touches tag
//! `/assets`.
//!
//! - [`InvalidationGateway`]: marks batches of paths or tags stale and reports failures
//! - [`Revalidator`]: the primitive the gateway drives
//! - [`MemoryRevalidator`]: in-process backend that records stale targets
//! - [`NoOpRevalidator`]: accepts every signal and does nothing
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//! use assetrpc::{CachePath, CacheTarget, InvalidationGateway, MemoryRevalidator};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let backend = Arc::new(MemoryRevalidator::new());
//! let gateway = InvalidationGateway::new(backend.clone());
//!
//! let report = gateway.invalidate_paths(&["/assets/bonds", "/portfolio"]).await;
//! assert!(report.is_complete());
//! assert!(backend.is_stale(&CacheTarget::Path(CachePath::new("/portfolio"))).await);
//! # }
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

mod gateway;
mod memory;
mod noop;

pub use gateway::{InvalidationGateway, InvalidationReport};
pub use memory::MemoryRevalidator;
pub use noop::NoOpRevalidator;

/// Error returned by a revalidation primitive
pub type RevalidateError = Box<dyn std::error::Error + Send + Sync>;

/// Identifier of a cached view, by route
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CachePath(String);

impl CachePath {
    /// Creates a cache path
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// The path as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CachePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a group of cached queries
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CacheTag(String);

impl CacheTag {
    /// Creates a cache tag
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// The tag as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The two invalidation namespaces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheNamespace {
    /// A cached route, such as `/assets/bonds`
    Path,
    /// A label shared by several cached entries
    Tag,
}

impl CacheNamespace {
    /// Builds a target in this namespace
    pub fn target(self, identifier: impl Into<String>) -> CacheTarget {
        match self {
            CacheNamespace::Path => CacheTarget::Path(CachePath::new(identifier)),
            CacheNamespace::Tag => CacheTarget::Tag(CacheTag::new(identifier)),
        }
    }
}

impl fmt::Display for CacheNamespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheNamespace::Path => f.write_str("path"),
            CacheNamespace::Tag => f.write_str("tag"),
        }
    }
}

/// A path or tag, kept apart by namespace
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "namespace", content = "identifier", rename_all = "lowercase")]
pub enum CacheTarget {
    /// Entry cached under a route
    Path(CachePath),
    /// Entries carrying a tag
    Tag(CacheTag),
}

impl CacheTarget {
    /// Namespace of the target
    pub fn namespace(&self) -> CacheNamespace {
        match self {
            CacheTarget::Path(_) => CacheNamespace::Path,
            CacheTarget::Tag(_) => CacheNamespace::Tag,
        }
    }

    /// Identifier within the namespace
    pub fn identifier(&self) -> &str {
        match self {
            CacheTarget::Path(path) => path.as_str(),
            CacheTarget::Tag(tag) => tag.as_str(),
        }
    }
}

impl From<CachePath> for CacheTarget {
    fn from(path: CachePath) -> Self {
        CacheTarget::Path(path)
    }
}

impl From<CacheTag> for CacheTarget {
    fn from(tag: CacheTag) -> Self {
        CacheTarget::Tag(tag)
    }
}

impl fmt::Display for CacheTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace(), self.identifier())
    }
}

/// Counters kept by revalidation backends
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidationStats {
    /// Path signals received
    pub path_signals: u64,
    /// Tag signals received
    pub tag_signals: u64,
    /// Signals for targets that were already stale
    pub redundant_signals: u64,
    /// Targets currently stale
    pub stale_entries: usize,
}

impl InvalidationStats {
    /// Total signals received
    pub fn total_signals(&self) -> u64 {
        self.path_signals + self.tag_signals
    }

    /// Share of signals that changed nothing, as a percentage (0.0 to 100.0)
    pub fn redundancy_rate(&self) -> f64 {
        let total = self.total_signals();
        if total == 0 {
            0.0
        } else {
            (self.redundant_signals as f64 / total as f64) * 100.0
        }
    }
}

impl fmt::Display for InvalidationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "path_signals={}, tag_signals={}, redundant={}, stale={}, redundancy_rate={:.1}%",
            self.path_signals,
            self.tag_signals,
            self.redundant_signals,
            self.stale_entries,
            self.redundancy_rate()
        )
    }
}

/// The cache-revalidation primitive
///
/// Implementations mark cached output stale so the next read recomputes it.
/// Both operations must be idempotent, and a target that was never cached
/// is not an error.
///
/// # Thread Safety
///
/// The gateway calls these methods concurrently from a single batch and from
/// unrelated requests. Use interior mutability as needed.
#[async_trait]
pub trait Revalidator: Send + Sync {
    /// Marks the view at `path` stale
    async fn revalidate_path(&self, path: &CachePath) -> Result<(), RevalidateError>;

    /// Marks every query tagged `tag` stale
    async fn revalidate_tag(&self, tag: &CacheTag) -> Result<(), RevalidateError>;

    /// Backend name for logging
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_display() {
        assert_eq!(
            CacheTarget::Path(CachePath::new("/assets")).to_string(),
            "path:/assets"
        );
        assert_eq!(
            CacheTarget::Tag(CacheTag::new("asset:bond")).to_string(),
            "tag:asset:bond"
        );
    }

    #[test]
    fn test_namespaces_never_match() {
        let path = CacheNamespace::Path.target("/assets");
        let tag = CacheNamespace::Tag.target("/assets");
        assert_ne!(path, tag);
        assert_eq!(path.identifier(), tag.identifier());
        assert_eq!(path.namespace(), CacheNamespace::Path);
        assert_eq!(tag.namespace(), CacheNamespace::Tag);
    }

    #[test]
    fn test_stats_display() {
        let stats = InvalidationStats {
            path_signals: 3,
            tag_signals: 1,
            redundant_signals: 1,
            stale_entries: 3,
        };
        assert_eq!(stats.total_signals(), 4);
        assert_eq!(stats.redundancy_rate(), 25.0);
        assert_eq!(
            stats.to_string(),
            "path_signals=3, tag_signals=1, redundant=1, stale=3, redundancy_rate=25.0%"
        );
        assert_eq!(InvalidationStats::default().redundancy_rate(), 0.0);
    }

    #[test]
    fn test_target_serde_shape() {
        let target = CacheTarget::Tag(CacheTag::new("asset:fund"));
        assert_eq!(
            serde_json::to_value(&target).unwrap(),
            serde_json::json!({ "namespace": "tag", "identifier": "asset:fund" })
        );
    }
}
