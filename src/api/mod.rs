//! HTTP API surface: envelope DTOs, adapters, normalizer, and routes.

pub mod error;
pub mod handlers;
pub mod models;

pub use error::AdapterError;
pub use handlers::{build_router, endpoints, ApiState, EndpointEntry};
pub use models::{
    ApiError, ApiResponse, CheckTargetParams, DestroyContainerParams, ErrorCode,
    MigrateMachineParams, PortInspectParams, PortMapParams,
};
