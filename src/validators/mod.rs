// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Validators for domain values
//!
//! Every validator implements [`Validator`]: a pure, deterministic function from
//! a raw JSON value to a typed, normalized output or a [`ValidationError`].
//! `None` stands for an absent value so that defaults and optional fields are
//! expressed as combinators rather than special cases.
//!
//! # Type Relationships
//!
//! ```text
//! raw JSON (Option<&Value>)
//!     |
//!     | Validator::validate
//!     ↓
//! validated newtype (EthereumAddress, PinCode, AssetDecimals, AssetAmount, EmailAddress)
//!     |
//!     | ObjectFields (schemas module)
//!     ↓
//! request / response schema
//! ```
//!
//! Validated newtypes have private fields and deserialize through the same
//! validators, so a value that exists always satisfies its rule.

use serde_json::{Number, Value};

use crate::errors::ValidationError;

mod address;
mod amount;
mod decimals;
mod email;
mod pincode;
mod primitives;

pub use address::{EthereumAddress, EthereumAddressRule};
pub use amount::{AssetAmount, AssetAmountRule};
pub use decimals::{AssetDecimals, AssetDecimalsRule};
pub use email::{EmailAddress, EmailRule};
pub use pincode::{PinCode, PinCodeRule};
pub use primitives::{BoolRule, IntegerRule, NonEmptyString};

/// Rejection reasons shared across validators
pub mod reasons {
    /// A required value is absent
    pub const REQUIRED: &str = "required";
    /// An address does not match `0x` followed by 40 hex characters
    pub const MALFORMED_ADDRESS: &str = "malformed address";
    /// A PIN code is not exactly 6 decimal digits
    pub const INVALID_PIN_CODE: &str = "pin code must be exactly 6 digits";
    /// A number has a fractional part
    pub const NOT_AN_INTEGER: &str = "must be an integer";
    /// An integer does not fit the supported range
    pub const OUT_OF_RANGE: &str = "integer out of range";
    /// A string is empty
    pub const EMPTY: &str = "must not be empty";
    /// An email address is malformed
    pub const INVALID_EMAIL: &str = "invalid email";
}

/// A value that has passed a named validation rule
pub trait Validated {
    /// Name of the rule the value satisfies
    const RULE: &'static str;
}

/// A pure validation rule over raw JSON input
///
/// # Examples
///
/// ```
/// use assetrpc::{AssetDecimals, AssetDecimalsRule, Validator};
/// use serde_json::json;
///
/// let rule = AssetDecimalsRule;
/// assert_eq!(rule.validate(None).unwrap(), AssetDecimals::STANDARD);
/// assert_eq!(rule.validate_value(&json!(6)).unwrap().as_u8(), 6);
/// assert!(rule.validate_value(&json!(19)).is_err());
/// ```
pub trait Validator {
    /// The normalized value produced on success
    type Output;

    /// Validate a possibly absent raw value
    fn validate(&self, raw: Option<&Value>) -> Result<Self::Output, ValidationError>;

    /// Validate a present raw value
    fn validate_value(&self, raw: &Value) -> Result<Self::Output, ValidationError> {
        self.validate(Some(raw))
    }

    /// Substitute `default` when the value is absent
    fn with_default(self, default: Self::Output) -> Defaulted<Self>
    where
        Self: Sized,
        Self::Output: Clone,
    {
        Defaulted {
            inner: self,
            default,
        }
    }

    /// Accept an absent value as `None`
    fn optional(self) -> Optional<Self>
    where
        Self: Sized,
    {
        Optional(self)
    }
}

/// Validator that yields a default for absent values
#[derive(Debug, Clone)]
pub struct Defaulted<V: Validator> {
    inner: V,
    default: V::Output,
}

impl<V> Validator for Defaulted<V>
where
    V: Validator,
    V::Output: Clone,
{
    type Output = V::Output;

    fn validate(&self, raw: Option<&Value>) -> Result<Self::Output, ValidationError> {
        match raw {
            None => Ok(self.default.clone()),
            Some(value) => self.inner.validate(Some(value)),
        }
    }
}

/// Validator that yields `None` for absent values
#[derive(Debug, Clone)]
pub struct Optional<V>(V);

impl<V: Validator> Validator for Optional<V> {
    type Output = Option<V::Output>;

    fn validate(&self, raw: Option<&Value>) -> Result<Self::Output, ValidationError> {
        match raw {
            None => Ok(None),
            Some(value) => self.0.validate(Some(value)).map(Some),
        }
    }
}

/// Validator for arrays whose elements all satisfy `V`
///
/// Every element is checked; issues are reported under their index.
#[derive(Debug, Clone)]
pub struct ListOf<V>(pub V);

impl<V: Validator> Validator for ListOf<V> {
    type Output = Vec<V::Output>;

    fn validate(&self, raw: Option<&Value>) -> Result<Self::Output, ValidationError> {
        let items = match require(raw)? {
            Value::Array(items) => items,
            other => return Err(type_mismatch("array", other)),
        };

        let mut values = Vec::with_capacity(items.len());
        let mut issues = Vec::new();
        for (index, item) in items.iter().enumerate() {
            match self.0.validate(Some(item)) {
                Ok(value) => values.push(value),
                Err(error) => issues.extend(error.at_index(index).into_issues()),
            }
        }

        match ValidationError::from_issues(issues) {
            Some(error) => Err(error),
            None => Ok(values),
        }
    }
}

/// Require a value to be present
pub(crate) fn require(raw: Option<&Value>) -> Result<&Value, ValidationError> {
    raw.ok_or_else(|| ValidationError::new(reasons::REQUIRED))
}

/// Require a present string value
pub(crate) fn expect_str(raw: Option<&Value>) -> Result<&str, ValidationError> {
    match require(raw)? {
        Value::String(s) => Ok(s),
        other => Err(type_mismatch("string", other)),
    }
}

/// Require a present integral number that fits in `i64`
pub(crate) fn expect_integer(raw: Option<&Value>) -> Result<i64, ValidationError> {
    match require(raw)? {
        Value::Number(n) => integer_from_number(n),
        other => Err(type_mismatch("number", other)),
    }
}

fn integer_from_number(n: &Number) -> Result<i64, ValidationError> {
    if let Some(i) = n.as_i64() {
        return Ok(i);
    }
    if n.is_u64() {
        // Positive integer above i64::MAX
        return Err(ValidationError::new(reasons::OUT_OF_RANGE));
    }
    match n.as_f64() {
        Some(f) if f.fract() != 0.0 || !f.is_finite() => {
            Err(ValidationError::new(reasons::NOT_AN_INTEGER))
        }
        Some(f) if f >= i64::MIN as f64 && f < i64::MAX as f64 => Ok(f as i64),
        _ => Err(ValidationError::new(reasons::OUT_OF_RANGE)),
    }
}

pub(crate) fn type_mismatch(expected: &str, received: &Value) -> ValidationError {
    ValidationError::new(format!(
        "expected {expected}, received {}",
        json_kind(received)
    ))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaulted_only_applies_to_absent_values() {
        let rule = IntegerRule::between(1, 100).with_default(10);
        assert_eq!(rule.validate(None).unwrap(), 10);
        assert_eq!(rule.validate_value(&json!(42)).unwrap(), 42);
        // null is present, not absent
        assert!(rule.validate_value(&Value::Null).is_err());
        assert!(rule.validate_value(&json!(0)).is_err());
    }

    #[test]
    fn test_optional_passes_through_errors() {
        let rule = NonEmptyString.optional();
        assert_eq!(rule.validate(None).unwrap(), None);
        assert_eq!(
            rule.validate_value(&json!("Alice")).unwrap(),
            Some("Alice".to_string())
        );
        assert!(rule.validate_value(&json!("")).is_err());
    }

    #[test]
    fn test_list_of_reports_every_failing_index() {
        let rule = ListOf(PinCodeRule);
        let error = rule
            .validate_value(&json!(["123456", "12", "654321", 7]))
            .unwrap_err();
        assert_eq!(error.fields(), vec!["[1]".to_string(), "[3]".to_string()]);
        assert_eq!(error.reason_for("[1]"), Some(reasons::INVALID_PIN_CODE));
        assert_eq!(
            error.reason_for("[3]"),
            Some("expected string, received number")
        );
    }

    #[test]
    fn test_list_of_requires_array() {
        let error = ListOf(BoolRule).validate_value(&json!({})).unwrap_err();
        assert_eq!(error.to_string(), "expected array, received object");
    }

    #[test]
    fn test_integer_extraction() {
        assert_eq!(expect_integer(Some(&json!(5))).unwrap(), 5);
        assert_eq!(expect_integer(Some(&json!(-5))).unwrap(), -5);
        assert_eq!(expect_integer(Some(&json!(6.0))).unwrap(), 6);
        assert_eq!(
            expect_integer(Some(&json!(6.5))).unwrap_err().to_string(),
            reasons::NOT_AN_INTEGER
        );
        assert_eq!(
            expect_integer(Some(&json!(u64::MAX))).unwrap_err().to_string(),
            reasons::OUT_OF_RANGE
        );
        assert_eq!(
            expect_integer(None).unwrap_err().to_string(),
            reasons::REQUIRED
        );
    }
}
