// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Wallet PIN code type

use std::fmt;

use serde::Deserialize;
use serde_json::Value;

use super::{expect_str, reasons, Validated, Validator};
use crate::errors::ValidationError;

/// A validated 6-digit PIN code
///
/// The digits are never printed by `Debug` or `Display`; use
/// [`expose`](Self::expose) where the raw code is needed.
///
/// # Examples
///
/// ```
/// use assetrpc::PinCode;
///
/// let pin = PinCode::parse("012345").unwrap();
/// assert_eq!(pin.expose(), "012345");
/// assert_eq!(format!("{pin:?}"), "PinCode(******)");
///
/// assert!(PinCode::parse("12345").is_err());
/// assert!(PinCode::parse("12345a").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct PinCode(String);

impl PinCode {
    /// Number of digits in a PIN code
    pub const LENGTH: usize = 6;

    /// Validate a raw string
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        // ASCII digits are one byte each, so the byte length is the char count
        if raw.len() != Self::LENGTH || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::new(reasons::INVALID_PIN_CODE));
        }
        Ok(Self(raw.to_string()))
    }

    /// The raw digits
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl Validated for PinCode {
    const RULE: &'static str = "PinCode";
}

impl TryFrom<String> for PinCode {
    type Error = ValidationError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl fmt::Debug for PinCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PinCode(******)")
    }
}

impl fmt::Display for PinCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("******")
    }
}

/// Validator for [`PinCode`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PinCodeRule;

impl Validator for PinCodeRule {
    type Output = PinCode;

    fn validate(&self, raw: Option<&Value>) -> Result<PinCode, ValidationError> {
        PinCode::parse(expect_str(raw)?)
    }
}
