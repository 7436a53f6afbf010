// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Raw asset amount type

use std::fmt;
use std::str::FromStr;

use alloy_primitives::U256;
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use super::{reasons, require, type_mismatch, AssetDecimals, Validated, Validator};
use crate::errors::ValidationError;

/// A positive asset amount in base units (not normalized for decimals)
///
/// Amounts are arbitrary-precision integers of at least 1; they are not bound
/// to 64 or even 256 bits. Serialization uses a decimal digit string so no
/// precision is lost in JSON.
///
/// # Examples
///
/// ```
/// use assetrpc::{AssetAmount, AssetDecimals};
///
/// // 1500 ETH in wei (18 decimals), beyond u64 range
/// let amount = AssetAmount::parse("1500000000000000000000").unwrap();
/// assert_eq!(amount.format_units(AssetDecimals::STANDARD), "1500");
///
/// assert!(AssetAmount::parse("0").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "Value")]
pub struct AssetAmount(BigDecimal);

impl AssetAmount {
    /// Validate a decimal digit string with no upper limit
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        AssetAmountRule::new().check(parse_integer_string(raw)?)
    }

    /// Convert a 256-bit on-chain value; `None` for zero
    pub fn from_u256(value: U256) -> Option<Self> {
        if value.is_zero() {
            return None;
        }
        BigDecimal::from_str(&value.to_string()).ok().map(Self)
    }

    /// Get the amount as a [`BigDecimal`] with scale 0
    pub fn as_bigdecimal(&self) -> &BigDecimal {
        &self.0
    }

    /// Convert to a 256-bit value; `None` if the amount exceeds `U256::MAX`
    pub fn to_u256(&self) -> Option<U256> {
        U256::from_str(&self.digits()).ok()
    }

    /// Render as a human-readable decimal using the asset's precision
    ///
    /// Trailing zeros of the fractional part are removed, and the result never
    /// uses scientific notation.
    ///
    /// # Examples
    ///
    /// ```
    /// use assetrpc::{AssetAmount, AssetDecimals};
    ///
    /// // 100 USDC (6 decimals)
    /// let raw = AssetAmount::parse("100000000").unwrap();
    /// assert_eq!(raw.format_units(AssetDecimals::USDC), "100");
    ///
    /// let dust = AssetAmount::parse("1").unwrap();
    /// assert_eq!(dust.format_units(AssetDecimals::USDC), "0.000001");
    /// ```
    pub fn format_units(&self, decimals: AssetDecimals) -> String {
        let digits = self.digits();
        let decimals = decimals.as_u8() as usize;
        if decimals == 0 {
            return digits;
        }

        // Left-pad so there is always at least one whole digit
        let padded = format!("{:0>width$}", digits, width = decimals + 1);
        let (whole, fractional) = padded.split_at(padded.len() - decimals);
        let trimmed = fractional.trim_end_matches('0');

        if trimmed.is_empty() {
            whole.to_string()
        } else {
            format!("{whole}.{trimmed}")
        }
    }

    fn digits(&self) -> String {
        let (digits, _) = self.0.with_scale(0).as_bigint_and_exponent();
        digits.to_string()
    }
}

impl Validated for AssetAmount {
    const RULE: &'static str = "AssetAmount";
}

impl TryFrom<Value> for AssetAmount {
    type Error = ValidationError;

    fn try_from(raw: Value) -> Result<Self, Self::Error> {
        AssetAmountRule::new().validate_value(&raw)
    }
}

impl FromStr for AssetAmount {
    type Err = ValidationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::parse(raw)
    }
}

impl Serialize for AssetAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl fmt::Display for AssetAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.digits())
    }
}

/// Validator for [`AssetAmount`] with an optional inclusive upper limit
///
/// Accepts JSON integers and decimal digit strings (an optional leading `-`
/// followed by digits, so negative values are reported as below the minimum
/// rather than as malformed).
///
/// # Examples
///
/// ```
/// use assetrpc::{AssetAmountRule, Validator};
/// use serde_json::json;
///
/// let rule = AssetAmountRule::new().with_limit(1_000u64);
/// assert!(rule.validate_value(&json!("1000")).is_ok());
/// assert!(rule.validate_value(&json!(1001)).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetAmountRule {
    limit: Option<BigDecimal>,
}

impl AssetAmountRule {
    /// Amounts of at least 1, unbounded above
    pub fn new() -> Self {
        Self::default()
    }

    /// Also reject amounts greater than `limit`
    pub fn with_limit(mut self, limit: impl Into<BigDecimal>) -> Self {
        self.limit = Some(limit.into());
        self
    }

    /// The configured upper limit, if any
    pub fn limit(&self) -> Option<&BigDecimal> {
        self.limit.as_ref()
    }

    fn check(&self, value: BigDecimal) -> Result<AssetAmount, ValidationError> {
        let integral = value.with_scale(0);
        if integral != value {
            return Err(ValidationError::new(reasons::NOT_AN_INTEGER));
        }
        if integral < BigDecimal::from(1u32) {
            return Err(ValidationError::new("must be greater than or equal to 1"));
        }
        if let Some(limit) = &self.limit {
            if &integral > limit {
                return Err(ValidationError::new(format!(
                    "must be less than or equal to {}",
                    limit.with_scale(0)
                )));
            }
        }
        Ok(AssetAmount(integral))
    }
}

impl Validator for AssetAmountRule {
    type Output = AssetAmount;

    fn validate(&self, raw: Option<&Value>) -> Result<AssetAmount, ValidationError> {
        let value = match require(raw)? {
            Value::String(s) => parse_integer_string(s)?,
            Value::Number(n) => number_to_integer(n)?,
            other => return Err(type_mismatch("integer", other)),
        };
        self.check(value)
    }
}

/// Largest integer an `f64` represents exactly (2^53)
const MAX_EXACT_F64_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Integers beyond 64 bits arrive as `f64` and may already be rounded, so
/// only exactly representable values are accepted.
fn number_to_integer(n: &serde_json::Number) -> Result<BigDecimal, ValidationError> {
    if let Some(u) = n.as_u64() {
        return Ok(BigDecimal::from(u));
    }
    if let Some(i) = n.as_i64() {
        return Ok(BigDecimal::from(i));
    }
    match n.as_f64() {
        Some(f) if f.fract() != 0.0 => Err(ValidationError::new(reasons::NOT_AN_INTEGER)),
        Some(f) if f.is_finite() && f.abs() <= MAX_EXACT_F64_INTEGER => {
            Ok(BigDecimal::from(f as i64))
        }
        _ => Err(ValidationError::new(
            "integer exceeds JSON number precision; send as string",
        )),
    }
}

fn parse_integer_string(raw: &str) -> Result<BigDecimal, ValidationError> {
    let digits = raw.strip_prefix('-').unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::new("expected an integer string"));
    }
    BigDecimal::from_str(raw).map_err(|_| ValidationError::new("expected an integer string"))
}
