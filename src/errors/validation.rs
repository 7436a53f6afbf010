// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Field-level validation errors.
//!
//! A [`ValidationError`] is an aggregate: it always carries at least one
//! [`FieldIssue`], and schemas merge the issues of every failing field into a
//! single error so the caller gets the complete report in one pass.

use std::fmt;

/// One step in a path into a structured payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Object key
    Key(String),
    /// Array index
    Index(usize),
}

/// Location of a failing value inside a payload.
///
/// The empty path designates the payload itself. Paths render the way a
/// client would address the field: `wallet`, `tokens[2].address`, `[0].symbol`.
///
/// # Examples
///
/// ```
/// use assetrpc::{FieldPath, PathSegment};
///
/// let path = FieldPath::from_segments(vec![
///     PathSegment::Key("tokens".into()),
///     PathSegment::Index(2),
///     PathSegment::Key("address".into()),
/// ]);
/// assert_eq!(path.to_string(), "tokens[2].address");
/// assert_eq!(path, "tokens[2].address");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath(Vec<PathSegment>);

impl FieldPath {
    /// The path of the payload itself
    pub const fn root() -> Self {
        Self(Vec::new())
    }

    /// Build a path from its segments, outermost first
    pub fn from_segments(segments: Vec<PathSegment>) -> Self {
        Self(segments)
    }

    /// Whether this path designates the payload itself
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// The segments of this path, outermost first
    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    fn prepend(&mut self, segment: PathSegment) {
        self.0.insert(0, segment);
    }
}

impl From<&str> for FieldPath {
    fn from(key: &str) -> Self {
        Self(vec![PathSegment::Key(key.to_string())])
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            match segment {
                PathSegment::Key(key) if i == 0 => write!(f, "{key}")?,
                PathSegment::Key(key) => write!(f, ".{key}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

impl PartialEq<str> for FieldPath {
    fn eq(&self, other: &str) -> bool {
        self.to_string() == other
    }
}

impl PartialEq<&str> for FieldPath {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

/// A single failing field and the reason it was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    /// Where the failing value sits in the payload
    pub field: FieldPath,
    /// Human-readable rejection reason (e.g. "malformed address")
    pub reason: String,
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.field.is_root() {
            write!(f, "{}", self.reason)
        } else {
            write!(f, "{}: {}", self.field, self.reason)
        }
    }
}

fn display_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Malformed input rejected by a validator or a schema.
///
/// Always recoverable: the caller re-prompts or re-submits. Never empty.
///
/// # Examples
///
/// ```
/// use assetrpc::ValidationError;
///
/// let error = ValidationError::new("malformed address").at_field("wallet");
/// assert_eq!(error.reason_for("wallet"), Some("malformed address"));
/// assert_eq!(error.to_string(), "wallet: malformed address");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", display_issues(.issues))]
pub struct ValidationError {
    issues: Vec<FieldIssue>,
}

impl ValidationError {
    /// Create an error for the value being validated itself (root path)
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            issues: vec![FieldIssue {
                field: FieldPath::root(),
                reason: reason.into(),
            }],
        }
    }

    /// Aggregate issues into an error; `None` when there are no issues
    pub fn from_issues(issues: Vec<FieldIssue>) -> Option<Self> {
        if issues.is_empty() {
            None
        } else {
            Some(Self { issues })
        }
    }

    /// Nest every issue under an object key
    pub fn at_field(self, key: &str) -> Self {
        self.nest(PathSegment::Key(key.to_string()))
    }

    /// Nest every issue under an array index
    pub fn at_index(self, index: usize) -> Self {
        self.nest(PathSegment::Index(index))
    }

    fn nest(mut self, segment: PathSegment) -> Self {
        for issue in &mut self.issues {
            issue.field.prepend(segment.clone());
        }
        self
    }

    /// All issues, in the order fields were checked
    pub fn issues(&self) -> &[FieldIssue] {
        &self.issues
    }

    /// Consume the error, returning its issues
    pub fn into_issues(self) -> Vec<FieldIssue> {
        self.issues
    }

    /// Rendered paths of every failing field
    pub fn fields(&self) -> Vec<String> {
        self.issues.iter().map(|i| i.field.to_string()).collect()
    }

    /// Whether the error names the given field path
    pub fn has_field(&self, field: &str) -> bool {
        self.issues.iter().any(|i| i.field == field)
    }

    /// The first reason recorded for the given field path
    pub fn reason_for(&self, field: &str) -> Option<&str> {
        self.issues
            .iter()
            .find(|i| i.field == field)
            .map(|i| i.reason.as_str())
    }
}
