// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Wallet procedure results

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{ObjectFields, Schema};
use crate::errors::ValidationError;
use crate::validators::{BoolRule, EthereumAddress, EthereumAddressRule};

/// Result of creating a wallet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletCreationResult {
    /// Address of the new wallet
    pub wallet: EthereumAddress,
}

impl Schema for WalletCreationResult {
    const NAME: &'static str = "WalletCreationResult";

    fn validate(raw: &Value) -> Result<Self, ValidationError> {
        let mut fields = ObjectFields::new(raw)?;
        match fields.field("wallet", &EthereumAddressRule) {
            Some(wallet) => Ok(Self { wallet }),
            None => Err(fields.into_error()),
        }
    }
}

/// Result of removing a wallet's PIN code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PincodeRemovalResult {
    /// Whether the PIN code was removed
    pub success: bool,
}

impl Schema for PincodeRemovalResult {
    const NAME: &'static str = "PincodeRemovalResult";

    fn validate(raw: &Value) -> Result<Self, ValidationError> {
        let mut fields = ObjectFields::new(raw)?;
        match fields.field("success", &BoolRule) {
            Some(success) => Ok(Self { success }),
            None => Err(fields.into_error()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wallet_creation_result() {
        let result = WalletCreationResult::validate(&json!({
            "wallet": "0xdac17f958d2ee523a2206206994597c13d831ec7"
        }))
        .unwrap();
        assert_eq!(
            serde_json::to_value(result).unwrap(),
            json!({ "wallet": "0xdAC17F958D2ee523a2206206994597C13D831ec7" })
        );

        let error = WalletCreationResult::validate(&json!({ "wallet": "0x" })).unwrap_err();
        assert_eq!(error.reason_for("wallet"), Some("malformed address"));
    }

    #[test]
    fn test_pincode_removal_result() {
        let result = PincodeRemovalResult::validate(&json!({ "success": true })).unwrap();
        assert!(result.success);

        let error = PincodeRemovalResult::validate(&json!({ "success": "yes" })).unwrap_err();
        assert!(error.has_field("success"));
        assert!(PincodeRemovalResult::validate(&json!({})).is_err());
    }
}
