//! Axum handlers: invocation adapters, the response normalizer, and the
//! endpoint registry.
//!
//! Every migration operation flows through the same pipeline: decode the
//! typed parameters, encode the actor input document, run the actor group,
//! classify the captured result into the response envelope. Failures are
//! reported inside the envelope only; the HTTP status is always 200.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method};
use axum::middleware::{from_fn, Next};
use axum::routing::{get, post, MethodRouter};
use axum::{Json, Router};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::actor::{encode_actor_input, ExecutionResult, Executor};

use super::error::AdapterError;
use super::models::{
    ApiResponse, CheckTargetParams, DestroyContainerParams, ErrorCode, MigrateMachineParams,
    PortInspectParams, PortMapParams,
};

/// Shared per-request context. `verbose` is an explicit typed flag rather
/// than an ambient context value, so a missing flag cannot panic a handler.
#[derive(Clone)]
pub struct ApiState {
    pub executor: Arc<dyn Executor>,
    pub verbose: bool,
}

impl ApiState {
    pub fn new(executor: Arc<dyn Executor>, verbose: bool) -> Self {
        Self { executor, verbose }
    }
}

/// One route exposed by the daemon.
pub struct EndpointEntry {
    pub method: Method,
    pub path: &'static str,
    pub handler: MethodRouter<ApiState>,
}

/// The static route table. Built once at startup and folded into the
/// router; order is fixed.
pub fn endpoints() -> Vec<EndpointEntry> {
    vec![
        EndpointEntry {
            method: Method::POST,
            path: "/migrate-machine",
            handler: actor_endpoint::<MigrateMachineParams>("migrate-machine"),
        },
        EndpointEntry {
            method: Method::POST,
            path: "/port-inspect",
            handler: actor_endpoint::<PortInspectParams>("port-inspect"),
        },
        EndpointEntry {
            method: Method::POST,
            path: "/check-target",
            handler: actor_endpoint::<CheckTargetParams>("remote-target-check-group"),
        },
        EndpointEntry {
            method: Method::POST,
            path: "/port-map",
            handler: actor_endpoint::<PortMapParams>("port-map"),
        },
        EndpointEntry {
            method: Method::POST,
            path: "/destroy-container",
            handler: actor_endpoint::<DestroyContainerParams>("destroy-container"),
        },
    ]
}

pub fn build_router(state: ApiState) -> Router {
    let mut router = Router::new().route("/healthz", get(healthz));
    for entry in endpoints() {
        log::info!(
            "route_registered method={} path={}",
            entry.method,
            entry.path
        );
        router = router.route(entry.path, entry.handler);
    }
    router
        .layer(from_fn(request_log_middleware))
        .with_state(state)
}

/// Wraps the generic invocation adapter for one actor group into a handler.
fn actor_endpoint<P>(group: &'static str) -> MethodRouter<ApiState>
where
    P: DeserializeOwned + Serialize + Send + 'static,
{
    post(
        move |State(state): State<ApiState>, body: Bytes| async move {
            let outcome = invoke_actor::<P>(&state, group, &body).await;
            normalize(&state, group, outcome)
        },
    )
}

/// Invocation adapter shared by every operation: decode typed params, build
/// the actor input document, run the actor group to completion.
async fn invoke_actor<P>(
    state: &ApiState,
    group: &str,
    body: &[u8],
) -> Result<ExecutionResult, AdapterError>
where
    P: DeserializeOwned + Serialize,
{
    let params: P = serde_json::from_slice(body).map_err(AdapterError::DecodeRequest)?;
    let input = encode_actor_input(&params)?;
    let result = state.executor.execute(group, &input).await?;
    Ok(result)
}

/// Response normalizer: logs actor stderr when verbose, then classifies the
/// adapter outcome into the envelope.
fn normalize(
    state: &ApiState,
    group: &str,
    outcome: Result<ExecutionResult, AdapterError>,
) -> Json<ApiResponse> {
    if state.verbose {
        if let Ok(result) = &outcome {
            log::info!("actor_stderr group={} stderr={}", group, result.stderr);
        }
    }
    Json(classify(outcome))
}

/// Classification precedence, first match wins, exactly one branch per
/// request:
///
/// 1. adapter failed before or during invocation — code 1;
/// 2. actor exited non-zero — code 2;
/// 3. actor wrote nothing to stdout — code 3;
/// 4. stdout is not valid JSON — code 1;
/// 5. stdout parsed: success, the parsed value becomes `data`.
fn classify(outcome: Result<ExecutionResult, AdapterError>) -> ApiResponse {
    let result = match outcome {
        Ok(result) => result,
        Err(err) => {
            return ApiResponse::error(
                ErrorCode::Invocation,
                format!("error on endpoint handler execution: {err}"),
            )
        }
    };

    if result.exit_code != 0 {
        return ApiResponse::error(
            ErrorCode::NonZeroExit,
            format!("Actor execution failed with: {}", result.exit_code),
        );
    }

    if result.stdout.is_empty() {
        return ApiResponse::error(ErrorCode::EmptyOutput, "Actor didn't return data");
    }

    match serde_json::from_str::<Value>(&result.stdout) {
        Ok(data) => ApiResponse::data(data),
        Err(err) => ApiResponse::error(
            ErrorCode::Invocation,
            format!("could not decode actor output: {err}"),
        ),
    }
}

async fn healthz() -> Json<Value> {
    Json(serde_json::json!({"status": "ok"}))
}

fn request_id(headers: &HeaderMap) -> String {
    headers
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string())
}

async fn request_log_middleware(
    headers: HeaderMap,
    request: axum::extract::Request,
    next: Next,
) -> axum::response::Response {
    let rid = request_id(&headers);
    log::info!(
        "api_request request_id={} method={} path={}",
        rid,
        request.method(),
        request.uri().path()
    );
    next.run(request).await
}
