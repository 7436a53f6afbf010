// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Validation, pagination, cache invalidation and request context plumbing for
//! blockchain asset management RPC procedures.
//!
//! # Overview
//!
//! An inbound procedure call carries a [`RequestContext`] (assembled by a
//! [`ContextComposer`]) and a raw JSON payload. The payload is validated by a
//! [`Schema`] built from [`Validator`]s; on success the [`Procedure`] handler
//! runs and may mark affected views stale through the [`InvalidationGateway`].
//! List procedures normalize their paging with [`ListRequest`] (bounded) or the
//! [`PaginationResolver`] (defaults only).
//!
//! # Example
//!
//! ```rust
//! use assetrpc::{PaginationResolver, Schema, UserProfile, ValidationError};
//! use serde_json::json;
//!
//! let profile = UserProfile::validate(&json!({
//!     "name": "Alice",
//!     "email": "a@b.com",
//!     "wallet": "0x000000000000000000000000000000000000dEaD",
//! }))?;
//! assert_eq!(profile.name, "Alice");
//!
//! let page = PaginationResolver::default().resolve(None);
//! assert_eq!((page.offset, page.limit), (0, 100));
//! # Ok::<(), ValidationError>(())
//! ```

mod cache;
mod config;
mod context;
mod errors;
mod pagination;
mod procedure;
mod schemas;
mod spans;
mod validators;

pub use cache::{
    CacheNamespace, CachePath, CacheTag, CacheTarget, InvalidationGateway, InvalidationReport,
    InvalidationStats, MemoryRevalidator, NoOpRevalidator, RevalidateError, Revalidator,
};
pub use config::{
    AssetRpcConfig, AssetRpcConfigBuilder, ENV_LIST_DEFAULT_LIMIT, ENV_LIST_MAX_LIMIT,
    ENV_PAGINATION_DEFAULT_LIMIT,
};
pub use context::{
    AuthSession, ContextComposer, ContextOverrides, ContextStage, Database, DbHandle, Headers,
    RequestContext,
};
pub use errors::{
    AssetRpcError, ConfigError, FieldIssue, FieldPath, HandlerError, InvalidationError,
    PathSegment, ProcedureError, ValidationError,
};
pub use pagination::{Page, PageRequest, PaginationResolver};
pub use procedure::{invoke, invoke_json, invoke_with, Procedure};
pub use schemas::{
    parse, parse_with, AssetType, AssetTypeRule, ListLimits, ListRequest, ObjectFields,
    PincodeRemovalResult, Schema, SchemaRule, Token, TokenList, UserProfile,
    WalletCreationResult,
};
pub use validators::{
    reasons, AssetAmount, AssetAmountRule, AssetDecimals, AssetDecimalsRule, BoolRule, Defaulted,
    EmailAddress, EmailRule, EthereumAddress, EthereumAddressRule, IntegerRule, ListOf,
    NonEmptyString, Optional, PinCode, PinCodeRule, Validated, Validator,
};
