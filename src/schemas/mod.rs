// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Request and response schemas for RPC procedures.
//!
//! A schema is a validator of a whole payload, composed from field validators
//! with [`ObjectFields`]. Validation is total: every field is checked even
//! after an earlier one fails, and the returned [`ValidationError`] lists all
//! of them.
//!
//! # Example
//!
//! ```rust
//! use assetrpc::{Schema, UserProfile};
//! use serde_json::json;
//!
//! let error = UserProfile::validate(&json!({
//!     "name": "",
//!     "email": "a@b.com",
//!     "wallet": "not-an-address",
//! }))
//! .unwrap_err();
//!
//! // Both failing fields are reported
//! assert_eq!(error.fields(), vec!["name".to_string(), "wallet".to_string()]);
//! ```

use std::marker::PhantomData;

use serde_json::{Map, Value};
use tracing::debug;

use crate::config::AssetRpcConfig;
use crate::errors::ValidationError;
use crate::spans;
use crate::validators::{require, type_mismatch, Validator};

mod list;
mod token;
mod user;
mod wallet;

pub use list::{ListLimits, ListRequest};
pub use token::{AssetType, AssetTypeRule, Token, TokenList};
pub use user::UserProfile;
pub use wallet::{PincodeRemovalResult, WalletCreationResult};

/// A validated, fully typed payload shape
pub trait Schema: Sized {
    /// Name used in logs and errors
    const NAME: &'static str;

    /// Validate a raw payload, reporting every failing field
    fn validate(raw: &Value) -> Result<Self, ValidationError>;

    /// Validate under a runtime configuration
    ///
    /// Schemas with configurable bounds (such as [`ListRequest`]) override
    /// this; the rest ignore `config`.
    fn validate_configured(
        raw: &Value,
        config: &AssetRpcConfig,
    ) -> Result<Self, ValidationError> {
        let _ = config;
        Self::validate(raw)
    }
}

/// Validate a payload against `S`, recording the outcome in a span
///
/// Uses the built-in configuration; calling [`Schema::validate`] directly is
/// equivalent but silent.
pub fn parse<S: Schema>(raw: &Value) -> Result<S, ValidationError> {
    parse_with(raw, &AssetRpcConfig::default())
}

/// Like [`parse`], validating under `config`
///
/// This is the entry point used by the procedure layer.
pub fn parse_with<S: Schema>(
    raw: &Value,
    config: &AssetRpcConfig,
) -> Result<S, ValidationError> {
    let span = spans::validate_payload(S::NAME);
    let _guard = span.enter();

    S::validate_configured(raw, config).inspect_err(|error| {
        debug!(
            schema = S::NAME,
            issue_count = error.issues().len(),
            error = %error,
            "Payload rejected"
        );
    })
}

/// Aggregates field validators over a JSON object
///
/// Each call to [`field`](Self::field) validates one key and records any
/// issues under that key; [`into_error`](Self::into_error) returns them all.
///
/// # Example
///
/// ```rust
/// use assetrpc::{IntegerRule, NonEmptyString, ObjectFields, Validator};
/// use serde_json::json;
///
/// let raw = json!({ "name": "", "age": -1 });
/// let mut fields = ObjectFields::new(&raw).unwrap();
/// let name = fields.field("name", &NonEmptyString);
/// let age = fields.field("age", &IntegerRule::at_least(0));
/// assert!(name.is_none() && age.is_none());
/// assert_eq!(fields.into_error().issues().len(), 2);
/// ```
#[derive(Debug)]
pub struct ObjectFields<'a> {
    object: &'a Map<String, Value>,
    issues: Vec<crate::errors::FieldIssue>,
}

impl<'a> ObjectFields<'a> {
    /// Start validating an object payload; fails for any other JSON type
    pub fn new(raw: &'a Value) -> Result<Self, ValidationError> {
        match raw {
            Value::Object(object) => Ok(Self {
                object,
                issues: Vec::new(),
            }),
            other => Err(type_mismatch("object", other)),
        }
    }

    /// Validate one key; `None` when it failed (the issue is recorded)
    pub fn field<V: Validator>(&mut self, key: &str, validator: &V) -> Option<V::Output> {
        match validator.validate(self.object.get(key)) {
            Ok(value) => Some(value),
            Err(error) => {
                self.issues.extend(error.at_field(key).into_issues());
                None
            }
        }
    }

    /// Whether every field checked so far passed
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    /// All recorded issues as one error
    pub fn into_error(self) -> ValidationError {
        // Only reachable without issues if a caller drops a field result,
        // so report the whole payload rather than an empty error
        ValidationError::from_issues(self.issues)
            .unwrap_or_else(|| ValidationError::new("incomplete payload"))
    }
}

/// Adapts a [`Schema`] into a [`Validator`] for nesting and lists
#[derive(Debug)]
pub struct SchemaRule<S>(PhantomData<fn() -> S>);

impl<S> SchemaRule<S> {
    /// Create the adapter
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<S> Default for SchemaRule<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Clone for SchemaRule<S> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<S: Schema> Validator for SchemaRule<S> {
    type Output = S;

    fn validate(&self, raw: Option<&Value>) -> Result<S, ValidationError> {
        S::validate(require(raw)?)
    }
}
