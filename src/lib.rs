//! actord: HTTP daemon dispatching machine-migration operations to external
//! actor pipelines.
//!
//! Each endpoint decodes typed request parameters, encodes them into the
//! input document an actor consumes on stdin, runs the actor group through
//! the [`actor::Executor`], and classifies the captured stdout/stderr/exit
//! status into a uniform JSON envelope. Failures never surface as HTTP
//! errors; the envelope carries either `data` or exactly one typed error.

pub mod actor;
pub mod api;
pub mod config;

pub use actor::{
    encode_actor_input, ActorInputValue, EncodeError, ExecutionResult, Executor, ExecutorError,
    ProcessExecutor,
};
pub use api::{
    build_router, endpoints, AdapterError, ApiError, ApiResponse, ApiState, EndpointEntry,
    ErrorCode,
};
pub use config::DaemonConfig;
