// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for configuration loading.

/// Errors that can occur while building an [`AssetRpcConfig`](crate::AssetRpcConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable held a value that could not be used.
    #[error("Invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        /// Name of the environment variable
        key: &'static str,
        /// The raw value found
        value: String,
        /// Why it was rejected
        reason: String,
    },

    /// The list default limit is outside `[1, max]`.
    #[error("List default limit {default} must be between 1 and the maximum {max}")]
    InconsistentListLimits {
        /// Configured default limit
        default: u32,
        /// Configured maximum limit
        max: u32,
    },
}

impl ConfigError {
    /// Create an `InvalidValue` error.
    pub fn invalid_value(
        key: &'static str,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ConfigError::InvalidValue {
            key,
            value: value.into(),
            reason: reason.into(),
        }
    }
}
