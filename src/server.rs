use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use http::{header, Method, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use crate::config::Config;
use crate::error::{RpcError, INVALID_REQUEST, PARSE_ERROR};
use crate::methods::Dispatcher;

/// JSON-RPC request envelope.
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    #[serde(default)]
    pub jsonrpc: Option<String>,
    /// A missing method is dispatched as the empty name and reported unsupported.
    #[serde(default)]
    pub method: String,
    /// Absent and `null` params both mean no params.
    #[serde(default)]
    pub params: Option<Vec<Value>>,
    #[serde(default)]
    pub id: Value,
}

/// JSON-RPC response envelope.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    pub id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct JsonRpcError {
    pub code: i64,
    pub message: String,
}

impl JsonRpcResponse {
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn error(id: Value, code: i64, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
            }),
        }
    }
}

/// Run one request through the dispatcher and build its envelope.
///
/// Unsupported methods are answered with HTTP 400; every other outcome,
/// failures included, with HTTP 200.
pub fn handle_request(
    dispatcher: &Dispatcher,
    request: JsonRpcRequest,
) -> (StatusCode, JsonRpcResponse) {
    let params = request.params.as_deref().unwrap_or_default();
    info!("Request: {} {:?} id={}", request.method, params, request.id);

    match dispatcher.dispatch(&request.method, params) {
        Ok(result) => (StatusCode::OK, JsonRpcResponse::success(request.id, result)),
        Err(e) => {
            warn!("{} failed: {}", request.method, e);
            let status = match e {
                RpcError::UnsupportedMethod(_) => StatusCode::BAD_REQUEST,
                _ => StatusCode::OK,
            };
            (status, JsonRpcResponse::error(request.id, e.code(), e.to_string()))
        }
    }
}

/// POST / handler.
async fn handle_rpc(State(dispatcher): State<Arc<Dispatcher>>, body: String) -> impl IntoResponse {
    let value: Value = match serde_json::from_str(&body) {
        Ok(value) => value,
        Err(e) => {
            warn!("Unparseable request body: {}", e);
            let response = JsonRpcResponse::error(Value::Null, PARSE_ERROR, "Parse error");
            return (StatusCode::BAD_REQUEST, Json(response));
        }
    };

    let id = value.get("id").cloned().unwrap_or(Value::Null);
    match serde_json::from_value::<JsonRpcRequest>(value) {
        Ok(request) => {
            let (status, response) = handle_request(&dispatcher, request);
            (status, Json(response))
        }
        Err(e) => {
            warn!("Invalid request: {}", e);
            let response = JsonRpcResponse::error(id, INVALID_REQUEST, "Invalid Request");
            (StatusCode::BAD_REQUEST, Json(response))
        }
    }
}

/// GET / handler: network details for manual wallet setup.
async fn network_info(State(dispatcher): State<Arc<Dispatcher>>) -> impl IntoResponse {
    Json(dispatcher.network_info())
}

/// Build the HTTP router with CORS applied.
pub fn router(dispatcher: Arc<Dispatcher>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .route("/", get(network_info).post(handle_rpc))
        .layer(cors)
        .with_state(dispatcher)
}

/// Start the HTTP server and serve until the process is interrupted.
pub async fn start_server(config: Config) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let dispatcher = Arc::new(Dispatcher::with_defaults(config));

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind server to {}", addr))?;

    info!("Mock RPC node listening on http://{}", addr);

    axum::serve(listener, router(dispatcher))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Mock RPC node stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(method: &str, params: Value) -> JsonRpcRequest {
        serde_json::from_value(json!({
            "jsonrpc": "2.0",
            "method": method,
            "params": params,
            "id": 7,
        }))
        .unwrap()
    }

    #[test]
    fn test_success_envelope() {
        let dispatcher = Dispatcher::with_defaults(Config::default());
        let (status, response) = handle_request(&dispatcher, request("eth_chainId", json!([])));
        assert_eq!(status, StatusCode::OK);
        assert_eq!(response, JsonRpcResponse::success(json!(7), json!("0x7a69")));

        let encoded = serde_json::to_value(&response).unwrap();
        assert_eq!(encoded, json!({ "jsonrpc": "2.0", "id": 7, "result": "0x7a69" }));
    }

    #[test]
    fn test_unsupported_method_is_bad_request() {
        let dispatcher = Dispatcher::with_defaults(Config::default());
        let (status, response) = handle_request(&dispatcher, request("eth_foo", json!([])));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error = response.error.unwrap();
        assert_eq!(error.code, -32601);
        assert_eq!(error.message, "Unsupported method: eth_foo");
        assert!(response.result.is_none());
    }

    #[test]
    fn test_handler_failure_keeps_ok_status() {
        let dispatcher = Dispatcher::with_defaults(Config::default());
        let (status, response) = handle_request(&dispatcher, request("eth_call", json!([{}])));
        assert_eq!(status, StatusCode::OK);
        assert_eq!(response.error.unwrap().code, -32000);
        assert_eq!(response.id, json!(7));
    }

    #[test]
    fn test_missing_params_default_to_empty() {
        let body = json!({ "jsonrpc": "2.0", "method": "eth_blockNumber", "id": "a" });
        let req: JsonRpcRequest = serde_json::from_value(body).unwrap();
        assert!(req.params.is_none());
        assert_eq!(req.id, json!("a"));
    }

    #[test]
    fn test_null_params_are_accepted() {
        let dispatcher = Dispatcher::with_defaults(Config::default());
        let body = json!({ "jsonrpc": "2.0", "method": "eth_chainId", "params": null, "id": 1 });
        let req: JsonRpcRequest = serde_json::from_value(body).unwrap();
        let (status, response) = handle_request(&dispatcher, req);
        assert_eq!(status, StatusCode::OK);
        assert_eq!(response.result, Some(json!("0x7a69")));
    }

    #[test]
    fn test_missing_method_is_unsupported() {
        let dispatcher = Dispatcher::with_defaults(Config::default());
        let req: JsonRpcRequest = serde_json::from_value(json!({ "id": 3 })).unwrap();
        let (status, response) = handle_request(&dispatcher, req);
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.unwrap().code, -32601);
        assert_eq!(response.id, json!(3));
    }
}
