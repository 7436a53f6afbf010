// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration for assetrpc
//!
//! Controls the page sizes used by the two pagination call sites.
//!
//! # Example: Using defaults
//!
//! ```rust
//! use assetrpc::AssetRpcConfig;
//!
//! let config = AssetRpcConfig::default();
//! assert_eq!(config.pagination_default_limit, 100);
//! assert_eq!(config.list_limits.default_limit, 10);
//! ```
//!
//! # Example: Custom configuration
//!
//! ```rust
//! use assetrpc::AssetRpcConfigBuilder;
//!
//! let config = AssetRpcConfigBuilder::new()
//!     .list_default_limit(25)
//!     .list_max_limit(50)
//!     .build()
//!     .unwrap();
//! assert_eq!(config.list_limits.max_limit, 50);
//! ```
//!
//! # Example: From the environment
//!
//! ```rust,no_run
//! use assetrpc::AssetRpcConfig;
//!
//! // Reads ASSETRPC_* variables, loading a .env file if present
//! let config = AssetRpcConfig::from_env()?;
//! # Ok::<(), assetrpc::ConfigError>(())
//! ```

use std::str::FromStr;

use tracing::debug;

use crate::errors::ConfigError;
use crate::pagination::PaginationResolver;
use crate::schemas::ListLimits;

/// Environment variable for [`AssetRpcConfig::pagination_default_limit`]
pub const ENV_PAGINATION_DEFAULT_LIMIT: &str = "ASSETRPC_PAGINATION_DEFAULT_LIMIT";

/// Environment variable for the list request default limit
pub const ENV_LIST_DEFAULT_LIMIT: &str = "ASSETRPC_LIST_DEFAULT_LIMIT";

/// Environment variable for the list request maximum limit
pub const ENV_LIST_MAX_LIMIT: &str = "ASSETRPC_LIST_MAX_LIMIT";

/// Configuration for assetrpc
///
/// Use [`AssetRpcConfigBuilder`] for a fluent API to construct instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetRpcConfig {
    /// Limit the [`PaginationResolver`] fills in when a request has none
    /// Default: 100 (never clamped)
    pub pagination_default_limit: i64,

    /// Default and maximum page size of [`ListRequest`](crate::ListRequest)
    /// Default: 10, at most 100
    pub list_limits: ListLimits,
}

impl Default for AssetRpcConfig {
    fn default() -> Self {
        Self::minimal()
    }
}

impl AssetRpcConfig {
    /// Config with the built-in page sizes
    pub fn minimal() -> Self {
        Self {
            pagination_default_limit: PaginationResolver::DEFAULT_LIMIT,
            list_limits: ListLimits::default(),
        }
    }

    /// Load configuration from `ASSETRPC_*` environment variables
    ///
    /// A `.env` file in the working directory is loaded first when present.
    /// Unset variables keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is not a valid number or the
    /// resulting list limits are inconsistent.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            debug!(path = %path.display(), "Loaded environment file");
        }
        Self::from_lookup(|key| dotenvy::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// # Errors
    ///
    /// As [`from_env`](Self::from_env).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = AssetRpcConfigBuilder::new();

        if let Some(limit) = parse_var::<i64, _>(&lookup, ENV_PAGINATION_DEFAULT_LIMIT)? {
            builder = builder.pagination_default_limit(limit);
        }
        if let Some(limit) = parse_var::<u32, _>(&lookup, ENV_LIST_DEFAULT_LIMIT)? {
            builder = builder.list_default_limit(limit);
        }
        if let Some(limit) = parse_var::<u32, _>(&lookup, ENV_LIST_MAX_LIMIT)? {
            builder = builder.list_max_limit(limit);
        }

        builder.build()
    }

    /// Resolver using the configured default limit
    pub fn pagination_resolver(&self) -> PaginationResolver {
        PaginationResolver::with_default_limit(self.pagination_default_limit)
    }
}

fn parse_var<T, F>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e: T::Err| ConfigError::invalid_value(key, raw, e.to_string())),
    }
}

/// Builder for [`AssetRpcConfig`]
///
/// # Example
///
/// ```rust
/// use assetrpc::AssetRpcConfigBuilder;
///
/// let config = AssetRpcConfigBuilder::new()
///     .pagination_default_limit(50)
///     .build()
///     .unwrap();
/// assert_eq!(config.pagination_resolver().default_limit(), 50);
///
/// // A default above the maximum is rejected
/// assert!(AssetRpcConfigBuilder::new().list_default_limit(500).build().is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct AssetRpcConfigBuilder {
    config: AssetRpcConfig,
}

impl AssetRpcConfigBuilder {
    /// Create a new builder with the built-in defaults
    pub fn new() -> Self {
        Self {
            config: AssetRpcConfig::minimal(),
        }
    }

    /// Set the limit the pagination resolver fills in
    pub fn pagination_default_limit(mut self, limit: i64) -> Self {
        self.config.pagination_default_limit = limit;
        self
    }

    /// Set the list request default limit
    pub fn list_default_limit(mut self, limit: u32) -> Self {
        self.config.list_limits.default_limit = limit;
        self
    }

    /// Set the list request maximum limit
    pub fn list_max_limit(mut self, limit: u32) -> Self {
        self.config.list_limits.max_limit = limit;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InconsistentListLimits`] unless
    /// `1 <= list default limit <= list max limit`.
    pub fn build(self) -> Result<AssetRpcConfig, ConfigError> {
        let ListLimits {
            default_limit,
            max_limit,
        } = self.config.list_limits;
        if default_limit == 0 || default_limit > max_limit {
            return Err(ConfigError::InconsistentListLimits {
                default: default_limit,
                max: max_limit,
            });
        }
        Ok(self.config)
    }
}
