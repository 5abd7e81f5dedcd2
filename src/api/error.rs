//! Local failures an invocation adapter can produce before classification.

use thiserror::Error;

use crate::actor::{EncodeError, ExecutorError};

/// Everything that can go wrong between receiving a request body and
/// obtaining an [`crate::actor::ExecutionResult`]. All variants map to
/// envelope error code 1 at the normalizer boundary.
#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("malformed request body: {0}")]
    DecodeRequest(#[from] serde_json::Error),
    #[error("could not encode actor input: {0}")]
    EncodeInput(#[from] EncodeError),
    #[error("actor invocation failed: {0}")]
    Invocation(#[from] ExecutorError),
}
