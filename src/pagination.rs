// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Pagination defaults for list queries.
//!
//! The resolver only fills in missing values: it never clamps and never fails.
//! Bounds enforcement lives in [`ListRequest`](crate::ListRequest), which is an
//! independent call site with its own default (10 rather than 100).

use serde::{Deserialize, Serialize};

/// Optional caller-supplied pagination overrides
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Number of items to skip
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    /// Number of items to return
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

impl PageRequest {
    /// Request with both values set
    pub const fn new(offset: i64, limit: i64) -> Self {
        Self {
            offset: Some(offset),
            limit: Some(limit),
        }
    }
}

/// Resolved pagination window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Page {
    /// Number of items to skip
    pub offset: i64,
    /// Number of items to return
    pub limit: i64,
}

/// Fills missing pagination values with fixed defaults
///
/// # Examples
///
/// ```
/// use assetrpc::{Page, PageRequest, PaginationResolver};
///
/// let resolver = PaginationResolver::default();
/// assert_eq!(resolver.resolve(None), Page { offset: 0, limit: 100 });
///
/// // No clamping: out-of-range values pass through
/// assert_eq!(
///     resolver.resolve(Some(PageRequest::new(5, 200))),
///     Page { offset: 5, limit: 200 }
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationResolver {
    default_limit: i64,
}

impl PaginationResolver {
    /// Default offset (0)
    pub const DEFAULT_OFFSET: i64 = 0;

    /// Default limit (100)
    pub const DEFAULT_LIMIT: i64 = 100;

    /// Resolver with a custom default limit
    pub const fn with_default_limit(default_limit: i64) -> Self {
        Self { default_limit }
    }

    /// The limit used when the request has none
    pub const fn default_limit(&self) -> i64 {
        self.default_limit
    }

    /// Resolve optional overrides into a page
    pub fn resolve(&self, input: Option<PageRequest>) -> Page {
        let input = input.unwrap_or_default();
        Page {
            offset: input.offset.unwrap_or(Self::DEFAULT_OFFSET),
            limit: input.limit.unwrap_or(self.default_limit),
        }
    }
}

impl Default for PaginationResolver {
    fn default() -> Self {
        Self::with_default_limit(Self::DEFAULT_LIMIT)
    }
}
