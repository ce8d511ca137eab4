//! Request/response exchange with one engine process

use std::path::PathBuf;
use std::time::Duration;

use serde_json::Value;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines};
use tokio::process::{ChildStdin, ChildStdout};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::config::BackendConfig;
use crate::error::{BackendError, Result};
use crate::process::BackendProcess;
use crate::protocol::{decode_response, RpcRequestBuilder};

struct Pipes {
    stdin: ChildStdin,
    stdout: Lines<BufReader<ChildStdout>>,
}

/// Proxy to one engine process, spawned lazily on first request
///
/// Requests are serialized: the pipe pair is held for the whole exchange, so
/// responses pair with requests by ID without a routing table.
pub struct BackendProxy {
    process: Mutex<BackendProcess>,
    pipes: Mutex<Option<Pipes>>,
    builder: RpcRequestBuilder,
    timeout_ms: u64,
}

impl BackendProxy {
    pub fn new(config: BackendConfig, root: impl Into<PathBuf>) -> Self {
        let timeout_ms = config.timeout_ms;
        Self {
            process: Mutex::new(BackendProcess::new(config, root)),
            pipes: Mutex::new(None),
            builder: RpcRequestBuilder::new(),
            timeout_ms,
        }
    }

    /// Spawn the engine if it is not running and capture its pipes
    async fn ensure_started(&self) -> Result<()> {
        let mut process = self.process.lock().await;
        if process.is_running() {
            return Ok(());
        }
        process.spawn()?;
        let stdin = process.stdin().ok_or(BackendError::NotRunning)?;
        let stdout = process.stdout().ok_or(BackendError::NotRunning)?;
        *self.pipes.lock().await = Some(Pipes {
            stdin,
            stdout: BufReader::new(stdout).lines(),
        });
        Ok(())
    }

    /// Issue one request and wait for its response
    ///
    /// Stale responses (IDs from requests that timed out earlier) are
    /// skipped. The configured timeout bounds the whole exchange.
    pub async fn request(&self, method: &str, params: Option<Value>) -> Result<Value> {
        self.ensure_started().await?;

        let request = self.builder.request(method, params);
        let wire = self.builder.encode(&request)?;

        let mut guard = self.pipes.lock().await;
        let pipes = guard.as_mut().ok_or(BackendError::NotRunning)?;

        debug!(method = %request.method, id = request.id, "Sending engine request");
        let exchange = async {
            pipes
                .stdin
                .write_all(wire.as_bytes())
                .await
                .map_err(|e| BackendError::Protocol(e.to_string()))?;
            pipes
                .stdin
                .write_all(b"\n")
                .await
                .map_err(|e| BackendError::Protocol(e.to_string()))?;
            pipes
                .stdin
                .flush()
                .await
                .map_err(|e| BackendError::Protocol(e.to_string()))?;

            loop {
                let line = pipes
                    .stdout
                    .next_line()
                    .await
                    .map_err(|e| BackendError::Protocol(e.to_string()))?
                    .ok_or(BackendError::NotRunning)?;
                if line.trim().is_empty() {
                    continue;
                }
                let response = decode_response(&line)?;
                if response.id != request.id {
                    warn!(
                        expected = request.id,
                        received = response.id,
                        "Skipping stale engine response"
                    );
                    continue;
                }
                if let Some(error) = response.error {
                    return Err(BackendError::Rpc {
                        code: error.code,
                        message: error.message,
                    });
                }
                return Ok(response.result.unwrap_or(Value::Null));
            }
        };

        tokio::time::timeout(Duration::from_millis(self.timeout_ms), exchange)
            .await
            .map_err(|_| BackendError::Timeout {
                timeout_ms: self.timeout_ms,
            })?
    }

    /// Close the pipes and tear the engine down
    pub async fn shutdown(&self) -> Result<()> {
        // Dropping stdin closes the engine's input before the kill
        self.pipes.lock().await.take();
        self.process.lock().await.shutdown().await
    }
}
