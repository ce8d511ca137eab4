//! Intelligence backend process factory and proxy for pyintel
//!
//! The actual language intelligence (parsing, completion ranking, symbol
//! resolution) lives in an external Python engine process. This crate owns
//! that process: spawning it with piped stdio, speaking newline-delimited
//! JSON-RPC over its pipes, and tearing it down. It deliberately contains no
//! semantic logic; responses pass through as `serde_json::Value` for the
//! providers to shape.
//!
//! # Module Organization
//!
//! - `config`: backend process configuration
//! - `process`: child process lifecycle
//! - `protocol`: JSON-RPC request/response shapes
//! - `proxy`: request/response exchange with one engine process
//! - `factory`: one cached proxy per workspace root, mass teardown
//! - `error`: error types and result alias

pub mod config;
pub mod error;
pub mod factory;
pub mod process;
pub mod protocol;
pub mod proxy;

pub use config::BackendConfig;
pub use error::{BackendError, Result};
pub use factory::BackendFactory;
pub use process::{BackendProcess, BackendState};
pub use protocol::{RpcError, RpcRequest, RpcRequestBuilder, RpcResponse};
pub use proxy::BackendProxy;
