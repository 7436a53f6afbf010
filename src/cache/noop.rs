// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Revalidation backend that does nothing

use async_trait::async_trait;

use super::{CachePath, CacheTag, RevalidateError, Revalidator};

/// Accepts every signal and ignores it
///
/// Use this where no cache sits in front of the procedures, e.g. in batch jobs
/// or tests that do not assert on invalidation.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpRevalidator;

#[async_trait]
impl Revalidator for NoOpRevalidator {
    async fn revalidate_path(&self, _path: &CachePath) -> Result<(), RevalidateError> {
        Ok(())
    }

    async fn revalidate_tag(&self, _tag: &CacheTag) -> Result<(), RevalidateError> {
        Ok(())
    }

    fn name(&self) -> &'static str {
        "NoOpRevalidator"
    }
}
