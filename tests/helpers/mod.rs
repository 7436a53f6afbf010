// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for assetrpc integration tests
//!
//! Provides mock implementations of the crate's collaborator traits so the
//! gateway and procedures can be exercised without a real cache or database.

#![allow(dead_code)]

use std::collections::BTreeSet;
use std::sync::Mutex;

use assetrpc::{CachePath, CacheTag, CacheTarget, Database, RevalidateError, Revalidator};
use async_trait::async_trait;

/// Mock Revalidator that records every call and fails chosen targets
///
/// # Example
///
/// ```rust,ignore
/// let mock = FlakyRevalidator::new().failing_path("/assets/bonds");
/// let gateway = InvalidationGateway::new(Arc::new(mock));
/// ```
#[derive(Debug, Default)]
pub struct FlakyRevalidator {
    failing: BTreeSet<CacheTarget>,
    calls: Mutex<Vec<CacheTarget>>,
}

impl FlakyRevalidator {
    /// Create a mock that accepts every target
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every revalidation of `path`
    pub fn failing_path(mut self, path: &str) -> Self {
        self.failing.insert(CacheTarget::Path(CachePath::new(path)));
        self
    }

    /// Fail every revalidation of `tag`
    pub fn failing_tag(mut self, tag: &str) -> Self {
        self.failing.insert(CacheTarget::Tag(CacheTag::new(tag)));
        self
    }

    /// Every target the gateway sent, in arrival order
    pub fn calls(&self) -> Vec<CacheTarget> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, target: CacheTarget) -> Result<(), RevalidateError> {
        let fails = self.failing.contains(&target);
        self.calls.lock().unwrap().push(target.clone());
        if fails {
            Err(format!("revalidation backend rejected {target}").into())
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl Revalidator for FlakyRevalidator {
    async fn revalidate_path(&self, path: &CachePath) -> Result<(), RevalidateError> {
        self.record(CacheTarget::Path(path.clone()))
    }

    async fn revalidate_tag(&self, tag: &CacheTag) -> Result<(), RevalidateError> {
        self.record(CacheTarget::Tag(tag.clone()))
    }

    fn name(&self) -> &'static str {
        "FlakyRevalidator"
    }
}

/// In-memory stand-in for the wallet store
#[derive(Debug, Default)]
pub struct MockDatabase {
    label: &'static str,
    wallets: Mutex<Vec<String>>,
}

impl MockDatabase {
    /// Create an empty database with a label
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            wallets: Mutex::new(Vec::new()),
        }
    }

    /// Record a wallet for a user
    pub fn insert_wallet(&self, user_id: &str) -> usize {
        let mut wallets = self.wallets.lock().unwrap();
        wallets.push(user_id.to_string());
        wallets.len()
    }

    /// Users that own a wallet
    pub fn wallet_owners(&self) -> Vec<String> {
        self.wallets.lock().unwrap().clone()
    }
}

impl Database for MockDatabase {
    fn label(&self) -> &str {
        self.label
    }
}

/// Install a test subscriber once so `RUST_LOG` shows crate logs
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
