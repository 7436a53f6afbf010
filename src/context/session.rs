// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::validators::EthereumAddress;

/// An authenticated session, as established by the auth middleware
///
/// This crate never authenticates; it only carries the session a handler
/// needs to scope its work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    wallet: Option<EthereumAddress>,
    expires_at: DateTime<Utc>,
}

impl AuthSession {
    /// Session for a user, valid until `expires_at`
    pub fn new(user_id: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            user_id: user_id.into(),
            wallet: None,
            expires_at,
        }
    }

    /// Attaches the user's wallet
    pub fn with_wallet(mut self, wallet: EthereumAddress) -> Self {
        self.wallet = Some(wallet);
        self
    }

    /// Authenticated user
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Wallet bound to the session, if any
    pub fn wallet(&self) -> Option<&EthereumAddress> {
        self.wallet.as_ref()
    }

    /// End of validity
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Whether the session has expired at `now`
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Whether the session has expired
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_expiry_boundary() {
        let expires_at = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let session = AuthSession::new("user-1", expires_at);
        assert!(!session.is_expired_at(expires_at - Duration::seconds(1)));
        assert!(session.is_expired_at(expires_at));
    }

    #[test]
    fn test_serde_round_trip_keeps_wallet() {
        let wallet = EthereumAddress::parse("0x000000000000000000000000000000000000dEaD").unwrap();
        let session = AuthSession::new("user-1", Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap())
            .with_wallet(wallet);
        let json = serde_json::to_string(&session).unwrap();
        let back: AuthSession = serde_json::from_str(&json).unwrap();
        assert_eq!(back, session);
        assert_eq!(back.wallet(), Some(&wallet));
    }
}
