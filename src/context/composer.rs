// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use tracing::trace;

use super::{AuthSession, DbHandle, RequestContext};
use crate::spans;

/// A middleware stage of context composition
///
/// Stages run in [`ContextStage::ORDER`]. The set is closed so composition
/// matches on it exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContextStage {
    /// Attach the auth session
    Auth,
    /// Attach the database handle
    Database,
}

impl ContextStage {
    /// Order in which stages are applied
    pub const ORDER: [ContextStage; 2] = [ContextStage::Auth, ContextStage::Database];
}

impl fmt::Display for ContextStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContextStage::Auth => f.write_str("auth"),
            ContextStage::Database => f.write_str("database"),
        }
    }
}

/// Where a composed field came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Source {
    Override,
    Base,
    Default,
    Absent,
}

impl Source {
    fn as_str(self) -> &'static str {
        match self {
            Source::Override => "override",
            Source::Base => "base",
            Source::Default => "default",
            Source::Absent => "absent",
        }
    }
}

fn pick<T: Clone>(
    override_value: Option<T>,
    base_value: Option<T>,
    default_value: &Option<T>,
) -> (Option<T>, Source) {
    match (override_value, base_value, default_value) {
        (Some(value), _, _) => (Some(value), Source::Override),
        (None, Some(value), _) => (Some(value), Source::Base),
        (None, None, Some(value)) => (Some(value.clone()), Source::Default),
        (None, None, None) => (None, Source::Absent),
    }
}

/// Per-call values that take precedence over everything else
#[derive(Debug, Clone, Default)]
pub struct ContextOverrides {
    auth: Option<AuthSession>,
    db: Option<DbHandle>,
}

impl ContextOverrides {
    /// No overrides
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the auth session
    pub fn auth(mut self, auth: AuthSession) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Override the database handle
    pub fn db(mut self, db: DbHandle) -> Self {
        self.db = Some(db);
        self
    }

    /// True when no stage is overridden
    pub fn is_empty(&self) -> bool {
        self.auth.is_none() && self.db.is_none()
    }
}

/// Assembles request contexts from overrides and injected defaults
///
/// For each stage the composed value is, in order of precedence: the override,
/// the value already on the base context, the composer's default. Composition
/// never fails and never validates; the base context is not modified.
///
/// Defaults are injected at construction, typically once at process startup,
/// and shared by every call.
#[derive(Debug, Clone, Default)]
pub struct ContextComposer {
    default_auth: Option<AuthSession>,
    default_db: Option<DbHandle>,
}

impl ContextComposer {
    /// Composer without defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Database handle used when neither override nor base provide one
    pub fn with_default_db(mut self, db: DbHandle) -> Self {
        self.default_db = Some(db);
        self
    }

    /// Session used when neither override nor base provide one
    ///
    /// Mostly useful for service-to-service calls and tests.
    pub fn with_default_auth(mut self, auth: AuthSession) -> Self {
        self.default_auth = Some(auth);
        self
    }

    /// Database client injected when a request has none
    pub fn default_db(&self) -> Option<&DbHandle> {
        self.default_db.as_ref()
    }

    /// Compose a new context from `base` and `overrides`
    pub fn compose(&self, base: &RequestContext, overrides: ContextOverrides) -> RequestContext {
        let span = spans::compose_context(overrides.db.is_some(), overrides.auth.is_some());
        let _guard = span.enter();

        let ContextOverrides {
            auth: mut auth_override,
            db: mut db_override,
        } = overrides;
        let mut context = base.clone();

        for stage in ContextStage::ORDER {
            let source = match stage {
                ContextStage::Auth => {
                    let (auth, source) =
                        pick(auth_override.take(), context.auth.take(), &self.default_auth);
                    context.auth = auth;
                    source
                }
                ContextStage::Database => {
                    let (db, source) =
                        pick(db_override.take(), context.db.take(), &self.default_db);
                    context.db = db;
                    source
                }
            };
            trace!(stage = %stage, source = source.as_str(), "Context stage applied");
        }

        context
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{Database, Headers};
    use chrono::{TimeZone, Utc};

    #[derive(Debug)]
    struct Named(&'static str);

    impl Database for Named {
        fn label(&self) -> &str {
            self.0
        }
    }

    fn session(user: &str) -> AuthSession {
        AuthSession::new(user, Utc.with_ymd_and_hms(2099, 1, 1, 0, 0, 0).unwrap())
    }

    #[test]
    fn test_override_wins() {
        let composer = ContextComposer::new().with_default_db(DbHandle::new(Named("default")));
        let base = RequestContext::default().with_db(DbHandle::new(Named("base")));

        let ctx = composer.compose(
            &base,
            ContextOverrides::new().db(DbHandle::new(Named("override"))),
        );
        assert_eq!(ctx.db().map(DbHandle::label), Some("override"));
    }

    #[test]
    fn test_base_beats_default() {
        let composer = ContextComposer::new()
            .with_default_db(DbHandle::new(Named("default")))
            .with_default_auth(session("service"));
        let base = RequestContext::default()
            .with_db(DbHandle::new(Named("base")))
            .with_auth(session("alice"));

        let ctx = composer.compose(&base, ContextOverrides::new());
        assert_eq!(ctx.db().map(DbHandle::label), Some("base"));
        assert_eq!(ctx.auth().map(AuthSession::user_id), Some("alice"));
    }

    #[test]
    fn test_default_fills_gaps() {
        let default_db = DbHandle::new(Named("default"));
        let composer = ContextComposer::new().with_default_db(default_db.clone());

        let ctx = composer.compose(&RequestContext::default(), ContextOverrides::new());
        assert!(ctx.db().is_some_and(|db| db.same_client(&default_db)));
        assert!(ctx.auth().is_none());
    }

    #[test]
    fn test_base_not_mutated() {
        let composer = ContextComposer::new().with_default_db(DbHandle::new(Named("default")));
        let headers: Headers = [("x-request-id", "abc")].into_iter().collect();
        let base = RequestContext::new(headers.clone());

        let ctx = composer.compose(&base, ContextOverrides::new().auth(session("bob")));
        assert!(base.auth().is_none());
        assert!(base.db().is_none());
        assert_eq!(ctx.headers(), &headers);
        assert_eq!(ctx.auth().map(AuthSession::user_id), Some("bob"));
    }

    #[test]
    fn test_stage_order_is_auth_then_database() {
        assert_eq!(
            ContextStage::ORDER,
            [ContextStage::Auth, ContextStage::Database]
        );
        assert!(ContextOverrides::new().is_empty());
        assert!(!ContextOverrides::new().auth(session("x")).is_empty());
    }
}
