// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Token listing schemas

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{ObjectFields, Schema, SchemaRule};
use crate::errors::ValidationError;
use crate::validators::{
    expect_str, AssetDecimals, AssetDecimalsRule, EthereumAddress, EthereumAddressRule, ListOf,
    NonEmptyString, Validator,
};

/// Class of a tokenized asset
///
/// The set is closed: code that maps asset types to views or cache entries
/// matches exhaustively, so adding a variant is a compile error until every
/// mapping handles it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    /// Tokenized debt
    Bond,
    /// Native or protocol token
    Cryptocurrency,
    /// Tokenized shares
    Equity,
    /// Fund units
    Fund,
    /// Fiat-pegged token
    Stablecoin,
    /// Tokenized bank deposit
    Deposit,
}

impl AssetType {
    /// Every asset type, in declaration order
    pub const ALL: [AssetType; 6] = [
        AssetType::Bond,
        AssetType::Cryptocurrency,
        AssetType::Equity,
        AssetType::Fund,
        AssetType::Stablecoin,
        AssetType::Deposit,
    ];

    /// Wire name of the asset type
    pub const fn as_str(&self) -> &'static str {
        match self {
            AssetType::Bond => "bond",
            AssetType::Cryptocurrency => "cryptocurrency",
            AssetType::Equity => "equity",
            AssetType::Fund => "fund",
            AssetType::Stablecoin => "stablecoin",
            AssetType::Deposit => "deposit",
        }
    }

    /// Path of the list view showing assets of this type
    pub const fn list_path(&self) -> &'static str {
        match self {
            AssetType::Bond => "/assets/bonds",
            AssetType::Cryptocurrency => "/assets/cryptocurrencies",
            AssetType::Equity => "/assets/equities",
            AssetType::Fund => "/assets/funds",
            AssetType::Stablecoin => "/assets/stablecoins",
            AssetType::Deposit => "/assets/deposits",
        }
    }

    /// Cache tag shared by every cached query over assets of this type
    pub const fn cache_tag(&self) -> &'static str {
        match self {
            AssetType::Bond => "asset:bond",
            AssetType::Cryptocurrency => "asset:cryptocurrency",
            AssetType::Equity => "asset:equity",
            AssetType::Fund => "asset:fund",
            AssetType::Stablecoin => "asset:stablecoin",
            AssetType::Deposit => "asset:deposit",
        }
    }
}

impl FromStr for AssetType {
    type Err = ValidationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        AssetType::ALL
            .into_iter()
            .find(|t| t.as_str() == raw)
            .ok_or_else(|| {
                let expected = AssetType::ALL.map(|t| t.as_str()).join(", ");
                ValidationError::new(format!("unknown asset type; expected one of {expected}"))
            })
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validator for [`AssetType`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssetTypeRule;

impl Validator for AssetTypeRule {
    type Output = AssetType;

    fn validate(&self, raw: Option<&Value>) -> Result<AssetType, ValidationError> {
        expect_str(raw)?.parse()
    }
}

/// A token as listed by the token procedures
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// Token contract address
    pub address: EthereumAddress,
    /// Human-readable name
    pub name: String,
    /// Ticker symbol
    pub symbol: String,
    /// Decimal precision, 18 when not given
    pub decimals: AssetDecimals,
    /// Asset class
    #[serde(rename = "type")]
    pub asset_type: AssetType,
}

impl Schema for Token {
    const NAME: &'static str = "Token";

    fn validate(raw: &Value) -> Result<Self, ValidationError> {
        let mut fields = ObjectFields::new(raw)?;
        let address = fields.field("address", &EthereumAddressRule);
        let name = fields.field("name", &NonEmptyString);
        let symbol = fields.field("symbol", &NonEmptyString);
        let decimals = fields.field("decimals", &AssetDecimalsRule);
        let asset_type = fields.field("type", &AssetTypeRule);

        match (address, name, symbol, decimals, asset_type) {
            (Some(address), Some(name), Some(symbol), Some(decimals), Some(asset_type)) => {
                Ok(Self {
                    address,
                    name,
                    symbol,
                    decimals,
                    asset_type,
                })
            }
            _ => Err(fields.into_error()),
        }
    }
}

/// Ordered sequence of tokens
///
/// Every token is validated; issues are reported by index, e.g. `[2].address`.
///
/// # Examples
///
/// ```
/// use assetrpc::{Schema, TokenList};
/// use serde_json::json;
///
/// let error = TokenList::validate(&json!([
///     { "address": "0xdac17f958d2ee523a2206206994597c13d831ec7", "name": "Tether",
///       "symbol": "USDT", "decimals": 6, "type": "stablecoin" },
///     { "address": "0x1", "name": "Broken", "symbol": "BRK", "type": "bond" },
/// ]))
/// .unwrap_err();
/// assert_eq!(error.fields(), vec!["[1].address".to_string()]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TokenList(Vec<Token>);

impl TokenList {
    /// Create a token list
    pub fn new(tokens: Vec<Token>) -> Self {
        Self(tokens)
    }

    /// Number of tokens
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the tokens in order
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.0.iter()
    }

    /// Consume the list, returning the tokens
    pub fn into_inner(self) -> Vec<Token> {
        self.0
    }
}

impl Schema for TokenList {
    const NAME: &'static str = "TokenList";

    fn validate(raw: &Value) -> Result<Self, ValidationError> {
        ListOf(SchemaRule::<Token>::new())
            .validate_value(raw)
            .map(Self)
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn usdt() -> Value {
        json!({
            "address": "0xdac17f958d2ee523a2206206994597c13d831ec7",
            "name": "Tether USD",
            "symbol": "USDT",
            "decimals": 6,
            "type": "stablecoin",
        })
    }

    #[test]
    fn test_token_defaults_decimals() {
        let mut raw = usdt();
        raw.as_object_mut().unwrap().remove("decimals");
        let token = Token::validate(&raw).unwrap();
        assert_eq!(token.decimals, AssetDecimals::STANDARD);
        assert_eq!(token.asset_type, AssetType::Stablecoin);
    }

    #[test]
    fn test_token_reports_all_fields() {
        let error = Token::validate(&json!({
            "address": "0x1",
            "name": "",
            "symbol": "X",
            "decimals": 30,
            "type": "collectible",
        }))
        .unwrap_err();
        assert_eq!(
            error.fields(),
            vec![
                "address".to_string(),
                "name".to_string(),
                "decimals".to_string(),
                "type".to_string()
            ]
        );
    }

    #[test]
    fn test_token_list_preserves_order() {
        let mut second = usdt();
        second["symbol"] = json!("USDT2");
        let list = TokenList::validate(&json!([usdt(), second])).unwrap();
        let symbols: Vec<&str> = list.iter().map(|t| t.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["USDT", "USDT2"]);
    }

    #[test]
    fn test_token_list_errors_are_indexed() {
        let error = TokenList::validate(&json!([usdt(), {}, usdt(), { "address": "0x1" }]))
            .unwrap_err();
        assert!(error.has_field("[1].address"));
        assert!(error.has_field("[1].type"));
        assert!(error.has_field("[3].address"));
        assert!(!error.fields().iter().any(|f| f.starts_with("[0]")));
        assert!(!error.fields().iter().any(|f| f.starts_with("[2]")));
    }

    #[test]
    fn test_empty_token_list() {
        let list = TokenList::validate(&json!([])).unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn test_asset_type_round_trip_names() {
        for asset_type in AssetType::ALL {
            assert_eq!(asset_type.as_str().parse::<AssetType>().unwrap(), asset_type);
            assert_eq!(
                serde_json::to_value(asset_type).unwrap(),
                json!(asset_type.as_str())
            );
        }
        assert!("Bond".parse::<AssetType>().is_err());
    }

    #[test]
    fn test_asset_type_mappings_are_distinct() {
        let mut paths: Vec<&str> = AssetType::ALL.iter().map(|t| t.list_path()).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), AssetType::ALL.len());
    }
}
