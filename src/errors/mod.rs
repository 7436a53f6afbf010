// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the assetrpc library.
//!
//! This module follows a hybrid approach:
//!
//! - **Module-specific errors** for fine-grained handling ([`ValidationError`],
//!   [`InvalidationError`], [`ProcedureError`], [`ConfigError`])
//! - **Unified error type** ([`AssetRpcError`]) for convenience when you don't need
//!   to distinguish between error sources
//!
//! Validation failures are recoverable by the caller and block the enclosing
//! procedure call. Invalidation failures are operational: the gateway logs and
//! reports them but never propagates them on its own.
//!
//! # Examples
//!
//! ```rust
//! use assetrpc::{AssetRpcError, EthereumAddress};
//!
//! fn parse_wallet(raw: &str) -> Result<EthereumAddress, AssetRpcError> {
//!     // ValidationError converts into AssetRpcError via From
//!     Ok(EthereumAddress::parse(raw)?)
//! }
//!
//! assert!(parse_wallet("0x0000000000000000000000000000000000000001").is_ok());
//! assert!(matches!(parse_wallet("nope"), Err(AssetRpcError::Validation(_))));
//! ```

mod config;
mod invalidation;
mod procedure;
mod validation;

pub use config::ConfigError;
pub use invalidation::InvalidationError;
pub use procedure::{HandlerError, ProcedureError};
pub use validation::{FieldIssue, FieldPath, PathSegment, ValidationError};

/// Unified error type for all assetrpc operations.
///
/// All module-specific error types convert to `AssetRpcError` via `From`
/// implementations, so `?` propagates them naturally.
#[derive(Debug, thiserror::Error)]
pub enum AssetRpcError {
    /// Malformed input rejected by a validator or schema.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The cache revalidation primitive failed.
    #[error("Invalidation error: {0}")]
    Invalidation(#[from] InvalidationError),

    /// A procedure call failed.
    #[error("Procedure error: {0}")]
    Procedure(#[from] ProcedureError),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
