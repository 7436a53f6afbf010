// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Asset decimal precision type

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{expect_integer, IntegerRule, Validated, Validator};
use crate::errors::ValidationError;

/// Decimal precision of an asset
///
/// Represents the number of decimal places of a token, restricted to the
/// ERC-20 convention of at most 18. Most assets use 18 decimals (like ETH),
/// but some use fewer:
/// - USDC: 6 decimals
/// - WBTC: 8 decimals
/// - Standard: 18 decimals
///
/// # Examples
///
/// ```
/// use assetrpc::AssetDecimals;
///
/// let eth_decimals = AssetDecimals::STANDARD;
/// assert_eq!(eth_decimals.as_u8(), 18);
///
/// assert_eq!(AssetDecimals::new(6).unwrap(), AssetDecimals::USDC);
/// assert!(AssetDecimals::new(19).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct AssetDecimals(u8);

impl AssetDecimals {
    /// Maximum accepted decimals (following ERC-20 convention)
    pub const MAX: u8 = 18;

    /// Standard decimals for ETH-like tokens (18), used when none are given
    pub const STANDARD: Self = Self(18);

    /// USDC decimals (6)
    pub const USDC: Self = Self(6);

    /// WBTC decimals (8)
    pub const WBTC: Self = Self(8);

    /// Validate a decimal count
    pub fn new(decimals: u8) -> Result<Self, ValidationError> {
        IntegerRule::between(0, i64::from(Self::MAX)).check(i64::from(decimals))?;
        Ok(Self(decimals))
    }

    /// Get the inner u8 value
    pub const fn as_u8(&self) -> u8 {
        self.0
    }

    /// One whole unit in base units: 10^decimals
    pub fn unit(&self) -> U256 {
        U256::from(10u64).pow(U256::from(self.0))
    }
}

impl Default for AssetDecimals {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl Validated for AssetDecimals {
    const RULE: &'static str = "AssetDecimals";
}

impl TryFrom<u8> for AssetDecimals {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AssetDecimals> for u8 {
    fn from(value: AssetDecimals) -> Self {
        value.0
    }
}

impl std::fmt::Display for AssetDecimals {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} decimals", self.0)
    }
}

/// Validator for [`AssetDecimals`]; absent values yield [`AssetDecimals::STANDARD`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssetDecimalsRule;

impl Validator for AssetDecimalsRule {
    type Output = AssetDecimals;

    fn validate(&self, raw: Option<&Value>) -> Result<AssetDecimals, ValidationError> {
        let Some(raw) = raw else {
            return Ok(AssetDecimals::STANDARD);
        };
        let value = expect_integer(Some(raw))?;
        let value = IntegerRule::between(0, i64::from(AssetDecimals::MAX)).check(value)?;
        // The range check above guarantees the value fits in u8
        Ok(AssetDecimals(value as u8))
    }
}
