// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! User profile schema

use serde::Serialize;
use serde_json::Value;

use super::{ObjectFields, Schema};
use crate::errors::ValidationError;
use crate::validators::{
    EmailAddress, EmailRule, EthereumAddress, EthereumAddressRule, NonEmptyString,
};

/// Profile of a user and their wallet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserProfile {
    /// Display name, never empty
    pub name: String,
    /// Contact address
    pub email: EmailAddress,
    /// Wallet the user signs with
    pub wallet: EthereumAddress,
}

impl Schema for UserProfile {
    const NAME: &'static str = "UserProfile";

    fn validate(raw: &Value) -> Result<Self, ValidationError> {
        let mut fields = ObjectFields::new(raw)?;
        let name = fields.field("name", &NonEmptyString);
        let email = fields.field("email", &EmailRule);
        let wallet = fields.field("wallet", &EthereumAddressRule);

        match (name, email, wallet) {
            (Some(name), Some(email), Some(wallet)) => Ok(Self {
                name,
                email,
                wallet,
            }),
            _ => Err(fields.into_error()),
        }
    }
}
