// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! List request schema

use serde::Serialize;
use serde_json::Value;

use super::{ObjectFields, Schema};
use crate::config::AssetRpcConfig;
use crate::errors::ValidationError;
use crate::validators::{IntegerRule, Validator};

/// Default and maximum page size for [`ListRequest`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListLimits {
    /// Page size when the request has none
    pub default_limit: u32,
    /// Largest accepted page size
    pub max_limit: u32,
}

impl ListLimits {
    /// Default page size (10)
    pub const DEFAULT_LIMIT: u32 = 10;

    /// Maximum page size (100)
    pub const MAX_LIMIT: u32 = 100;
}

impl Default for ListLimits {
    fn default() -> Self {
        Self {
            default_limit: Self::DEFAULT_LIMIT,
            max_limit: Self::MAX_LIMIT,
        }
    }
}

/// Bounded offset/limit input of list procedures
///
/// `offset` is an integer of at least 0 (default 0); `limit` is an integer in
/// `[1, 100]` (default 10). Unlike the [`PaginationResolver`](crate::PaginationResolver),
/// out-of-range values are rejected rather than passed through.
///
/// # Examples
///
/// ```
/// use assetrpc::{ListRequest, Schema};
/// use serde_json::json;
///
/// let request = ListRequest::validate(&json!({})).unwrap();
/// assert_eq!((request.offset, request.limit), (0, 10));
///
/// assert!(ListRequest::validate(&json!({ "limit": 200 })).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ListRequest {
    /// Number of items to skip
    pub offset: u64,
    /// Number of items to return
    pub limit: u32,
}

impl ListRequest {
    /// Validate against explicit limits instead of the defaults
    pub fn validate_with(raw: &Value, limits: &ListLimits) -> Result<Self, ValidationError> {
        let mut fields = ObjectFields::new(raw)?;
        let offset = fields.field("offset", &IntegerRule::at_least(0).with_default(0));
        let limit = fields.field(
            "limit",
            &IntegerRule::between(1, i64::from(limits.max_limit))
                .with_default(i64::from(limits.default_limit)),
        );

        match (offset, limit) {
            // Both casts are lossless: the rules above bound the values
            (Some(offset), Some(limit)) => Ok(Self {
                offset: offset as u64,
                limit: limit as u32,
            }),
            _ => Err(fields.into_error()),
        }
    }
}

impl Default for ListRequest {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: ListLimits::DEFAULT_LIMIT,
        }
    }
}

impl Schema for ListRequest {
    const NAME: &'static str = "ListRequest";

    fn validate(raw: &Value) -> Result<Self, ValidationError> {
        Self::validate_with(raw, &ListLimits::default())
    }

    fn validate_configured(
        raw: &Value,
        config: &AssetRpcConfig,
    ) -> Result<Self, ValidationError> {
        Self::validate_with(raw, &config.list_limits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_payload_uses_defaults() {
        let request = ListRequest::validate(&json!({})).unwrap();
        assert_eq!(request, ListRequest::default());
        assert_eq!(request, ListRequest { offset: 0, limit: 10 });
    }

    #[test]
    fn test_explicit_values() {
        let request = ListRequest::validate(&json!({ "offset": 40, "limit": 100 })).unwrap();
        assert_eq!(request, ListRequest { offset: 40, limit: 100 });
    }

    #[test]
    fn test_limit_bounds() {
        let error = ListRequest::validate(&json!({ "limit": 200 })).unwrap_err();
        assert_eq!(
            error.reason_for("limit"),
            Some("must be less than or equal to 100")
        );
        assert!(ListRequest::validate(&json!({ "limit": 0 })).is_err());
    }

    #[test]
    fn test_both_fields_reported() {
        let error = ListRequest::validate(&json!({ "offset": -1, "limit": 1.5 })).unwrap_err();
        assert_eq!(error.fields(), vec!["offset".to_string(), "limit".to_string()]);
    }

    #[test]
    fn test_custom_limits() {
        let limits = ListLimits {
            default_limit: 25,
            max_limit: 50,
        };
        let request = ListRequest::validate_with(&json!({}), &limits).unwrap();
        assert_eq!(request.limit, 25);
        assert!(ListRequest::validate_with(&json!({ "limit": 51 }), &limits).is_err());
    }

    #[test]
    fn test_non_object_payload() {
        let error = ListRequest::validate(&json!([1, 2])).unwrap_err();
        assert_eq!(error.to_string(), "expected object, received array");
    }
}
