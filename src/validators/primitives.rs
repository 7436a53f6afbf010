// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Rules for plain JSON scalars

use serde_json::Value;

use super::{expect_integer, expect_str, reasons, require, type_mismatch, Validator};
use crate::errors::ValidationError;

/// Integer with optional inclusive bounds
///
/// # Examples
///
/// ```
/// use assetrpc::{IntegerRule, Validator};
/// use serde_json::json;
///
/// let limit = IntegerRule::between(1, 100);
/// assert_eq!(limit.validate_value(&json!(100)).unwrap(), 100);
/// assert!(limit.validate_value(&json!(200)).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntegerRule {
    min: Option<i64>,
    max: Option<i64>,
}

impl IntegerRule {
    /// Any integer that fits in `i64`
    pub const fn any() -> Self {
        Self {
            min: None,
            max: None,
        }
    }

    /// Integers greater than or equal to `min`
    pub const fn at_least(min: i64) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    /// Integers in `[min, max]`
    pub const fn between(min: i64, max: i64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    pub(crate) fn check(&self, value: i64) -> Result<i64, ValidationError> {
        if let Some(min) = self.min {
            if value < min {
                return Err(ValidationError::new(format!(
                    "must be greater than or equal to {min}"
                )));
            }
        }
        if let Some(max) = self.max {
            if value > max {
                return Err(ValidationError::new(format!(
                    "must be less than or equal to {max}"
                )));
            }
        }
        Ok(value)
    }
}

impl Validator for IntegerRule {
    type Output = i64;

    fn validate(&self, raw: Option<&Value>) -> Result<i64, ValidationError> {
        self.check(expect_integer(raw)?)
    }
}

/// String with at least one character
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NonEmptyString;

impl Validator for NonEmptyString {
    type Output = String;

    fn validate(&self, raw: Option<&Value>) -> Result<String, ValidationError> {
        let s = expect_str(raw)?;
        if s.is_empty() {
            return Err(ValidationError::new(reasons::EMPTY));
        }
        Ok(s.to_string())
    }
}

/// JSON boolean
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoolRule;

impl Validator for BoolRule {
    type Output = bool;

    fn validate(&self, raw: Option<&Value>) -> Result<bool, ValidationError> {
        match require(raw)? {
            Value::Bool(b) => Ok(*b),
            other => Err(type_mismatch("boolean", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_integer_bounds_are_inclusive() {
        let rule = IntegerRule::between(1, 100);
        assert!(rule.validate_value(&json!(1)).is_ok());
        assert!(rule.validate_value(&json!(100)).is_ok());
        assert_eq!(
            rule.validate_value(&json!(0)).unwrap_err().to_string(),
            "must be greater than or equal to 1"
        );
        assert_eq!(
            rule.validate_value(&json!(101)).unwrap_err().to_string(),
            "must be less than or equal to 100"
        );
    }

    #[test]
    fn test_integer_rejects_strings() {
        let error = IntegerRule::any().validate_value(&json!("5")).unwrap_err();
        assert_eq!(error.to_string(), "expected number, received string");
    }

    #[test]
    fn test_at_least_has_no_upper_bound() {
        let rule = IntegerRule::at_least(0);
        assert_eq!(rule.validate_value(&json!(i64::MAX)).unwrap(), i64::MAX);
        assert!(rule.validate_value(&json!(-1)).is_err());
    }

    #[test]
    fn test_non_empty_string() {
        assert_eq!(
            NonEmptyString.validate_value(&json!("Alice")).unwrap(),
            "Alice"
        );
        // Whitespace counts as content
        assert!(NonEmptyString.validate_value(&json!(" ")).is_ok());
        assert_eq!(
            NonEmptyString
                .validate_value(&json!(""))
                .unwrap_err()
                .to_string(),
            reasons::EMPTY
        );
        assert_eq!(
            NonEmptyString.validate(None).unwrap_err().to_string(),
            reasons::REQUIRED
        );
    }

    #[test]
    fn test_bool_rule() {
        assert!(BoolRule.validate_value(&json!(true)).unwrap());
        assert!(!BoolRule.validate_value(&json!(false)).unwrap());
        assert!(BoolRule.validate_value(&json!("true")).is_err());
    }
}
