// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Per-request context handed to procedure handlers
//!
//! A [`RequestContext`] bundles the inbound headers with the optional auth
//! session and database handle. It is assembled once per call by a
//! [`ContextComposer`] and read, never written, by handlers.
//!
//! # Examples
//!
//! ```rust
//! use assetrpc::{ContextComposer, ContextOverrides, Database, DbHandle, Headers, RequestContext};
//!
//! #[derive(Debug)]
//! struct Primary;
//!
//! impl Database for Primary {
//!     fn label(&self) -> &str {
//!         "primary"
//!     }
//! }
//!
//! let composer = ContextComposer::new().with_default_db(DbHandle::new(Primary));
//!
//! let mut headers = Headers::new();
//! headers.insert("X-Request-Id", "req-1");
//! let base = RequestContext::new(headers);
//!
//! let ctx = composer.compose(&base, ContextOverrides::new());
//! assert_eq!(ctx.db().map(|db| db.label()), Some("primary"));
//! assert_eq!(ctx.headers().get("x-request-id"), Some("req-1"));
//! // The base context is left untouched
//! assert!(base.db().is_none());
//! ```

use std::collections::BTreeMap;
use std::fmt;

mod composer;
mod database;
mod session;

pub use composer::{ContextComposer, ContextOverrides, ContextStage};
pub use database::{Database, DbHandle};
pub use session::AuthSession;

/// Inbound request headers
///
/// Names are case-insensitive; they are stored lowercased.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers(BTreeMap<String, String>);

impl Headers {
    /// Creates an empty header map
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a header, replacing any previous value
    pub fn insert(&mut self, name: impl AsRef<str>, value: impl Into<String>) -> Option<String> {
        self.0
            .insert(name.as_ref().to_ascii_lowercase(), value.into())
    }

    /// Value of a header
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Whether a header is present
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(&name.to_ascii_lowercase())
    }

    /// Number of headers
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no headers
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Headers sorted by lowercased name
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for Headers {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut headers = Headers::new();
        for (name, value) in iter {
            headers.insert(name, value);
        }
        headers
    }
}

/// Ambient dependencies of one procedure call
#[derive(Clone, Default)]
pub struct RequestContext {
    headers: Headers,
    auth: Option<AuthSession>,
    db: Option<DbHandle>,
}

impl RequestContext {
    /// Context carrying only headers
    pub fn new(headers: Headers) -> Self {
        Self {
            headers,
            auth: None,
            db: None,
        }
    }

    /// Attaches an auth session
    pub fn with_auth(mut self, auth: AuthSession) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Attaches a database handle
    pub fn with_db(mut self, db: DbHandle) -> Self {
        self.db = Some(db);
        self
    }

    /// Inbound request headers
    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Session of the caller, if authenticated
    pub fn auth(&self) -> Option<&AuthSession> {
        self.auth.as_ref()
    }

    /// Database client for this request
    pub fn db(&self) -> Option<&DbHandle> {
        self.db.as_ref()
    }

    /// Whether an unexpired session is attached
    pub fn is_authenticated(&self) -> bool {
        self.auth.as_ref().is_some_and(|session| !session.is_expired())
    }
}

impl fmt::Debug for RequestContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestContext")
            .field("headers", &self.headers.len())
            .field("auth", &self.auth.as_ref().map(|s| s.user_id()))
            .field("db", &self.db)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headers_case_insensitive() {
        let mut headers = Headers::new();
        headers.insert("Content-Type", "application/json");
        assert_eq!(headers.get("content-type"), Some("application/json"));
        assert_eq!(headers.get("CONTENT-TYPE"), Some("application/json"));
        assert!(headers.contains("Content-type"));

        let previous = headers.insert("content-type", "text/plain");
        assert_eq!(previous.as_deref(), Some("application/json"));
        assert_eq!(headers.len(), 1);
    }

    #[test]
    fn test_headers_from_iter() {
        let headers: Headers = [("B", "2"), ("a", "1")].into_iter().collect();
        let names: Vec<&str> = headers.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_default_context_is_anonymous() {
        let ctx = RequestContext::default();
        assert!(ctx.auth().is_none());
        assert!(ctx.db().is_none());
        assert!(!ctx.is_authenticated());
        assert!(ctx.headers().is_empty());
    }
}
