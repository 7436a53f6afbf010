// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! The procedure boundary
//!
//! A [`Procedure`] is an RPC-style callable: it declares an input [`Schema`]
//! and an output type, and its handler receives the request context plus an
//! already validated input. [`invoke`] runs the whole call: a payload that
//! fails validation never reaches the handler.
//!
//! # Examples
//!
//! ```rust
//! use assetrpc::{
//!     invoke, HandlerError, Procedure, ProcedureError, RequestContext, UserProfile,
//! };
//! use async_trait::async_trait;
//! use serde_json::json;
//!
//! struct Greet;
//!
//! #[async_trait]
//! impl Procedure for Greet {
//!     const NAME: &'static str = "greet";
//!     type Input = UserProfile;
//!     type Output = String;
//!
//!     async fn handle(
//!         &self,
//!         _ctx: &RequestContext,
//!         input: UserProfile,
//!     ) -> Result<String, HandlerError> {
//!         Ok(format!("hello {}", input.name))
//!     }
//! }
//!
//! # #[tokio::main]
//! # async fn main() {
//! let ctx = RequestContext::default();
//! let payload = json!({ "name": "Alice", "email": "a@b.com", "wallet": "nope" });
//!
//! let error = invoke(&Greet, &ctx, &payload).await.unwrap_err();
//! assert!(matches!(error, ProcedureError::InvalidInput { .. }));
//! # }
//! ```

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn, Instrument};

use crate::config::AssetRpcConfig;
use crate::context::RequestContext;
use crate::errors::{HandlerError, ProcedureError};
use crate::schemas::{self, Schema};
use crate::spans;

/// An RPC-style callable over a validated payload
#[async_trait]
pub trait Procedure: Send + Sync {
    /// Name used in logs and errors
    const NAME: &'static str;

    /// Validated payload shape
    type Input: Schema + Send;

    /// Value returned to the caller
    type Output: Serialize + Send;

    /// Run the business logic
    ///
    /// Handlers read the context; they cannot modify it.
    async fn handle(
        &self,
        ctx: &RequestContext,
        input: Self::Input,
    ) -> Result<Self::Output, HandlerError>;
}

/// Validate `payload` and run the procedure's handler
///
/// Payloads are validated with the built-in configuration; use
/// [`invoke_with`] to apply an [`AssetRpcConfig`].
///
/// # Errors
///
/// - [`ProcedureError::InvalidInput`] when the payload fails `P::Input`; the
///   handler is not called
/// - [`ProcedureError::Handler`] when the handler fails
pub async fn invoke<P: Procedure>(
    procedure: &P,
    ctx: &RequestContext,
    payload: &Value,
) -> Result<P::Output, ProcedureError> {
    invoke_with(procedure, ctx, payload, &AssetRpcConfig::default()).await
}

/// Like [`invoke`], validating the payload under `config`
///
/// # Errors
///
/// As [`invoke`].
pub async fn invoke_with<P: Procedure>(
    procedure: &P,
    ctx: &RequestContext,
    payload: &Value,
    config: &AssetRpcConfig,
) -> Result<P::Output, ProcedureError> {
    let span = spans::invoke_procedure(P::NAME, ctx.is_authenticated());

    async {
        let input = schemas::parse_with::<P::Input>(payload, config).map_err(|source| {
            ProcedureError::InvalidInput {
                procedure: P::NAME,
                source,
            }
        })?;

        match procedure.handle(ctx, input).await {
            Ok(output) => {
                debug!("Procedure succeeded");
                Ok(output)
            }
            Err(source) => {
                warn!(error = %source, "Procedure handler failed");
                Err(ProcedureError::Handler {
                    procedure: P::NAME,
                    source,
                })
            }
        }
    }
    .instrument(span)
    .await
}

/// Like [`invoke`], serializing the output to JSON
///
/// # Errors
///
/// As [`invoke`]; an output that fails to serialize is reported as
/// [`ProcedureError::Handler`].
pub async fn invoke_json<P: Procedure>(
    procedure: &P,
    ctx: &RequestContext,
    payload: &Value,
) -> Result<Value, ProcedureError> {
    let output = invoke(procedure, ctx, payload).await?;
    serde_json::to_value(output).map_err(|e| ProcedureError::Handler {
        procedure: P::NAME,
        source: Box::new(e),
    })
}
