//! API DTOs: the response envelope and per-operation request parameters.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// Closed set of client-facing error codes carried in the envelope.
///
/// | code | meaning |
/// |---|---|
/// | 1 | request decode, actor-input encode, invocation, or output decode failure |
/// | 2 | actor exited non-zero |
/// | 3 | actor produced no output |
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCode {
    Invocation = 1,
    NonZeroExit = 2,
    EmptyOutput = 3,
}

impl Serialize for ErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
}

/// The envelope returned to API callers, always with HTTP status 200.
///
/// Carries either `data` (opaque JSON owned by the actor) or exactly one
/// error; classification stops at the first failing condition, so `errors`
/// never holds more than one entry.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ApiResponse {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ApiError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl ApiResponse {
    pub fn data(value: Value) -> Self {
        Self {
            errors: Vec::new(),
            data: Some(value),
        }
    }

    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            errors: vec![ApiError {
                code,
                message: message.into(),
            }],
            data: None,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MigrateMachineParams {
    pub source_host: String,
    pub target_host: String,
    pub container_name: String,
    pub source_user_name: String,
    pub target_user_name: String,
    pub force_create: bool,
    pub disable_start: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PortInspectParams {
    pub host: String,
    pub port_range: String,
    pub shallow_scan: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CheckTargetParams {
    pub target_host: String,
    pub check_target_service_status: bool,
    pub target_user_name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PortMapParams {
    pub source_host: String,
    pub target_host: String,
    pub default_port_map: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DestroyContainerParams {
    pub target_host: String,
    pub container_name: String,
    pub target_user_name: String,
}
