// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Ethereum address type

use std::fmt;
use std::str::FromStr;

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{expect_str, reasons, Validated, Validator};
use crate::errors::ValidationError;

/// A validated 20-byte Ethereum address
///
/// Accepts exactly `0x` followed by 40 hexadecimal characters. Checksum casing
/// is not enforced: any mix of upper and lower case hex digits is accepted and
/// the value is normalized to an [`Address`]. Display and serialization use the
/// EIP-55 checksummed spelling.
///
/// # Examples
///
/// ```
/// use assetrpc::EthereumAddress;
///
/// let wallet = EthereumAddress::parse("0x000000000000000000000000000000000000dEaD").unwrap();
/// assert_eq!(wallet.to_string(), "0x000000000000000000000000000000000000dEaD");
///
/// assert!(EthereumAddress::parse("not-an-address").is_err());
/// // The 0x prefix is mandatory
/// assert!(EthereumAddress::parse("000000000000000000000000000000000000dEaD").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EthereumAddress(Address);

impl EthereumAddress {
    /// Number of hex characters after the `0x` prefix
    pub const HEX_LENGTH: usize = 40;

    /// Validate a raw string
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let hex = raw
            .strip_prefix("0x")
            .ok_or_else(|| ValidationError::new(reasons::MALFORMED_ADDRESS))?;

        if hex.len() != Self::HEX_LENGTH || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ValidationError::new(reasons::MALFORMED_ADDRESS));
        }

        Address::from_str(raw)
            .map(Self)
            .map_err(|_| ValidationError::new(reasons::MALFORMED_ADDRESS))
    }

    /// Get the inner [`Address`]
    pub const fn as_address(&self) -> Address {
        self.0
    }

    /// Whether this is the zero address
    pub fn is_zero(&self) -> bool {
        self.0 == Address::ZERO
    }
}

impl Validated for EthereumAddress {
    const RULE: &'static str = "EthereumAddress";
}

impl From<Address> for EthereumAddress {
    fn from(address: Address) -> Self {
        Self(address)
    }
}

impl From<EthereumAddress> for Address {
    fn from(address: EthereumAddress) -> Self {
        address.0
    }
}

impl TryFrom<String> for EthereumAddress {
    type Error = ValidationError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl From<EthereumAddress> for String {
    fn from(address: EthereumAddress) -> Self {
        address.to_string()
    }
}

impl FromStr for EthereumAddress {
    type Err = ValidationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::parse(raw)
    }
}

impl fmt::Display for EthereumAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validator for [`EthereumAddress`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EthereumAddressRule;

impl Validator for EthereumAddressRule {
    type Output = EthereumAddress;

    fn validate(&self, raw: Option<&Value>) -> Result<EthereumAddress, ValidationError> {
        EthereumAddress::parse(expect_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;
    use serde_json::json;

    #[test]
    fn test_accepts_any_casing() {
        let lower = EthereumAddress::parse("0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48").unwrap();
        let upper = EthereumAddress::parse("0xA0B86991C6218B36C1D19D4A2E9EB0CE3606EB48").unwrap();
        let mixed = EthereumAddress::parse("0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48").unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower, mixed);
        assert_eq!(
            lower.as_address(),
            address!("a0b86991c6218b36c1d19d4a2e9eb0ce3606eb48")
        );
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert!(EthereumAddress::parse("0x").is_err());
        assert!(EthereumAddress::parse("0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb4").is_err());
        assert!(EthereumAddress::parse("0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb480").is_err());
    }

    #[test]
    fn test_rejects_bad_prefix_and_characters() {
        assert!(EthereumAddress::parse("0Xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48").is_err());
        assert!(EthereumAddress::parse("0xg0b86991c6218b36c1d19d4a2e9eb0ce3606eb48").is_err());
        assert!(EthereumAddress::parse(" 0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48").is_err());
    }

    #[test]
    fn test_error_reason() {
        let error = EthereumAddress::parse("not-an-address").unwrap_err();
        assert_eq!(error.to_string(), "malformed address");
    }

    #[test]
    fn test_rule_requires_string() {
        let error = EthereumAddressRule.validate_value(&json!(42)).unwrap_err();
        assert_eq!(error.to_string(), "expected string, received number");
    }

    #[test]
    fn test_zero_address() {
        let zero = EthereumAddress::from(Address::ZERO);
        assert!(zero.is_zero());
        assert_eq!(
            zero.to_string(),
            "0x0000000000000000000000000000000000000000"
        );
    }

    #[test]
    fn test_display_is_checksummed() {
        let address = EthereumAddress::parse("0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48").unwrap();
        assert_eq!(
            address.to_string(),
            "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48"
        );
    }

    #[test]
    fn test_serialization() {
        let address = EthereumAddress::parse("0xdac17f958d2ee523a2206206994597c13d831ec7").unwrap();
        let json = serde_json::to_string(&address).unwrap();
        assert_eq!(json, "\"0xdAC17F958D2ee523a2206206994597C13D831ec7\"");
        let deserialized: EthereumAddress = serde_json::from_str(&json).unwrap();
        assert_eq!(address, deserialized);
    }

    #[test]
    fn test_deserialization_validates() {
        let result: Result<EthereumAddress, _> = serde_json::from_str("\"0x1234\"");
        assert!(result.is_err());
    }
}
