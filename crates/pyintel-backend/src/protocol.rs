//! JSON-RPC 2.0 shapes for the engine pipe
//!
//! The engine speaks newline-delimited JSON-RPC over its stdio pipes: one
//! request per line in, one response per line out.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{BackendError, Result};

/// Request ID, monotonically increasing per proxy
pub type RequestId = u64;

/// JSON-RPC 2.0 request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcRequest {
    /// Always "2.0"
    pub jsonrpc: String,
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
    pub id: RequestId,
}

/// JSON-RPC 2.0 response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcResponse {
    pub jsonrpc: String,
    /// Mutually exclusive with `error`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
    pub id: RequestId,
}

/// JSON-RPC 2.0 error object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// Builds requests with fresh IDs and handles the wire encoding
pub struct RpcRequestBuilder {
    next_id: AtomicU64,
}

impl RpcRequestBuilder {
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
        }
    }

    pub fn next_request_id(&self) -> RequestId {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }

    pub fn request(&self, method: impl Into<String>, params: Option<Value>) -> RpcRequest {
        RpcRequest {
            jsonrpc: "2.0".to_string(),
            method: method.into(),
            params,
            id: self.next_request_id(),
        }
    }

    /// Encode a request as one wire line (no trailing newline)
    pub fn encode(&self, request: &RpcRequest) -> Result<String> {
        serde_json::to_string(request).map_err(|e| BackendError::Protocol(e.to_string()))
    }
}

impl Default for RpcRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode one wire line into a response
pub fn decode_response(line: &str) -> Result<RpcResponse> {
    serde_json::from_str(line).map_err(|e| BackendError::Protocol(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_ids_are_monotonic() {
        let builder = RpcRequestBuilder::new();
        let a = builder.request("completions", None);
        let b = builder.request("definitions", None);
        assert!(b.id > a.id);
    }

    #[test]
    fn test_encode_skips_absent_params() {
        let builder = RpcRequestBuilder::new();
        let request = builder.request("usages", None);
        let wire = builder.encode(&request).unwrap();
        assert!(!wire.contains("params"));
        assert!(wire.contains("\"method\":\"usages\""));
    }

    #[test]
    fn test_decode_result_response() {
        let response =
            decode_response(r#"{"jsonrpc":"2.0","result":{"items":[]},"id":7}"#).unwrap();
        assert_eq!(response.id, 7);
        assert_eq!(response.result, Some(json!({"items": []})));
        assert!(response.error.is_none());
    }

    #[test]
    fn test_decode_error_response() {
        let response =
            decode_response(r#"{"jsonrpc":"2.0","error":{"code":-32601,"message":"nope"},"id":3}"#)
                .unwrap();
        let error = response.error.unwrap();
        assert_eq!(error.code, -32601);
        assert_eq!(error.message, "nope");
    }

    #[test]
    fn test_decode_garbage_is_protocol_error() {
        let err = decode_response("not json").unwrap_err();
        assert!(matches!(err, BackendError::Protocol(_)));
    }
}
