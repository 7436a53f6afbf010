// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for procedure invocation.

use super::ValidationError;

/// Error returned by a procedure handler's business logic.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur when invoking a procedure.
#[derive(Debug, thiserror::Error)]
pub enum ProcedureError {
    /// The payload did not match the procedure's input schema.
    ///
    /// The handler never runs when this is returned.
    #[error("Invalid input for {procedure}: {source}")]
    InvalidInput {
        /// Name of the procedure that rejected the payload
        procedure: &'static str,
        /// Every failing field of the payload
        #[source]
        source: ValidationError,
    },

    /// The handler ran and failed.
    #[error("{procedure} failed: {source}")]
    Handler {
        /// Name of the failing procedure
        procedure: &'static str,
        /// The handler's error
        #[source]
        source: HandlerError,
    },
}

impl ProcedureError {
    /// Field-level validation failures, if the payload was rejected
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            ProcedureError::InvalidInput { source, .. } => Some(source),
            ProcedureError::Handler { .. } => None,
        }
    }

    /// Name of the procedure the error came from
    pub fn procedure(&self) -> &'static str {
        match self {
            ProcedureError::InvalidInput { procedure, .. }
            | ProcedureError::Handler { procedure, .. } => procedure,
        }
    }
}
