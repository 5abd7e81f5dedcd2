//! Actor input encoding and process execution.

pub mod executor;
pub mod input;

pub use executor::{ExecutionResult, Executor, ExecutorError, ProcessExecutor};
pub use input::{encode_actor_input, ActorInputValue, EncodeError};
