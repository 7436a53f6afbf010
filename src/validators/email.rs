// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Email address type

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{expect_str, reasons, Validated, Validator};
use crate::errors::ValidationError;

/// Characters allowed in the local part besides ASCII alphanumerics (RFC 5322 atext)
const LOCAL_SPECIALS: &[u8] = b"!#$%&'*+/=?^_`{|}~-.";

/// A syntactically valid email address
///
/// Implements the practical subset of RFC 5321/5322 used for account
/// addresses: a dot-atom local part of at most 64 characters, a domain of at
/// least two labels with an alphabetic top-level label, and at most 254
/// characters overall. Quoted local parts and IP-literal domains are rejected.
///
/// # Examples
///
/// ```
/// use assetrpc::EmailAddress;
///
/// assert!(EmailAddress::parse("a@b.com").is_ok());
/// assert!(EmailAddress::parse("first.last+tag@example.co.uk").is_ok());
/// assert!(EmailAddress::parse("no-at-sign.example.com").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Maximum total length of an address
    pub const MAX_LENGTH: usize = 254;

    /// Maximum length of the local part
    pub const MAX_LOCAL_LENGTH: usize = 64;

    /// Validate a raw string
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if is_valid(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(ValidationError::new(reasons::INVALID_EMAIL))
        }
    }

    /// The address as given
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The part after the `@`
    pub fn domain(&self) -> &str {
        self.0
            .rsplit_once('@')
            .map(|(_, domain)| domain)
            .unwrap_or_default()
    }
}

fn is_valid(raw: &str) -> bool {
    if raw.len() > EmailAddress::MAX_LENGTH {
        return false;
    }
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    is_valid_local(local) && is_valid_domain(domain)
}

fn is_valid_local(local: &str) -> bool {
    !local.is_empty()
        && local.len() <= EmailAddress::MAX_LOCAL_LENGTH
        && !local.starts_with('.')
        && !local.ends_with('.')
        && !local.contains("..")
        && local
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || LOCAL_SPECIALS.contains(&b))
}

fn is_valid_domain(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }
    let labels_ok = labels.iter().all(|label| {
        !label.is_empty()
            && label.len() <= 63
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
    });
    let tld_ok = labels
        .last()
        .is_some_and(|tld| tld.len() >= 2 && tld.bytes().all(|b| b.is_ascii_alphabetic()));
    labels_ok && tld_ok
}

impl Validated for EmailAddress {
    const RULE: &'static str = "EmailAddress";
}

impl TryFrom<String> for EmailAddress {
    type Error = ValidationError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl From<EmailAddress> for String {
    fn from(email: EmailAddress) -> Self {
        email.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validator for [`EmailAddress`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmailRule;

impl Validator for EmailRule {
    type Output = EmailAddress;

    fn validate(&self, raw: Option<&Value>) -> Result<EmailAddress, ValidationError> {
        EmailAddress::parse(expect_str(raw)?)
    }
}
