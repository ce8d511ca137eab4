//! Engine process lifecycle

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use tokio::process::{Child, Command};
use tracing::{debug, error, info, warn};

use crate::config::BackendConfig;
use crate::error::{BackendError, Result};

/// Grace period for the child to exit after a kill
const SHUTDOWN_WAIT: Duration = Duration::from_secs(5);

/// State of the engine process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendState {
    /// Not started
    Stopped,
    /// Spawn in progress
    Starting,
    /// Running
    Running,
    /// Teardown in progress
    ShuttingDown,
    /// Exited without being asked to
    Crashed,
}

/// Owns one engine child process
pub struct BackendProcess {
    config: BackendConfig,
    /// Working directory the engine runs in
    root: PathBuf,
    process: Option<Child>,
    state: BackendState,
}

impl BackendProcess {
    pub fn new(config: BackendConfig, root: impl Into<PathBuf>) -> Self {
        Self {
            config,
            root: root.into(),
            process: None,
            state: BackendState::Stopped,
        }
    }

    pub fn state(&self) -> BackendState {
        self.state
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Spawn the engine with piped stdio
    ///
    /// Allowed from `Stopped` or `Crashed`; a crashed engine may be
    /// respawned by the next request.
    pub fn spawn(&mut self) -> Result<()> {
        if !matches!(self.state, BackendState::Stopped | BackendState::Crashed) {
            return Err(BackendError::InvalidState { state: self.state });
        }

        self.state = BackendState::Starting;
        debug!(
            executable = %self.config.executable,
            root = %self.root.display(),
            "Starting intelligence engine process"
        );

        let mut cmd = Command::new(&self.config.executable);
        cmd.args(&self.config.args)
            .current_dir(&self.root)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        for (key, value) in &self.config.env {
            cmd.env(key, value);
        }

        match cmd.spawn() {
            Ok(child) => {
                info!(
                    executable = %self.config.executable,
                    pid = ?child.id(),
                    "Intelligence engine spawned"
                );
                self.process = Some(child);
                self.state = BackendState::Running;
                Ok(())
            }
            Err(e) => {
                error!(
                    executable = %self.config.executable,
                    error = %e,
                    "Failed to spawn intelligence engine"
                );
                self.state = BackendState::Stopped;
                Err(BackendError::Spawn(e))
            }
        }
    }

    /// Kill the engine and reap it with a bounded wait
    pub async fn shutdown(&mut self) -> Result<()> {
        if self.state == BackendState::Stopped {
            return Ok(());
        }

        self.state = BackendState::ShuttingDown;
        debug!(root = %self.root.display(), "Shutting down intelligence engine");

        if let Some(mut child) = self.process.take() {
            if let Err(e) = child.kill().await {
                warn!(error = %e, "Failed to kill intelligence engine");
            }
            match tokio::time::timeout(SHUTDOWN_WAIT, child.wait()).await {
                Ok(Ok(_)) => {
                    info!(root = %self.root.display(), "Intelligence engine shut down");
                }
                Ok(Err(e)) => {
                    warn!(error = %e, "Error waiting for intelligence engine to exit");
                }
                Err(_) => {
                    warn!("Timeout waiting for intelligence engine to exit");
                }
            }
        }

        self.state = BackendState::Stopped;
        Ok(())
    }

    /// Check liveness, updating state if the child exited behind our back
    pub fn is_running(&mut self) -> bool {
        let Some(child) = self.process.as_mut() else {
            return false;
        };
        match child.try_wait() {
            Ok(Some(_)) => {
                self.process = None;
                self.state = BackendState::Crashed;
                false
            }
            Ok(None) => true,
            Err(e) => {
                error!(error = %e, "Error checking engine process status");
                false
            }
        }
    }

    /// Take the child's stdin pipe
    pub fn stdin(&mut self) -> Option<tokio::process::ChildStdin> {
        self.process.as_mut().and_then(|child| child.stdin.take())
    }

    /// Take the child's stdout pipe
    pub fn stdout(&mut self) -> Option<tokio::process::ChildStdout> {
        self.process.as_mut().and_then(|child| child.stdout.take())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_process_starts_stopped() {
        let process = BackendProcess::new(BackendConfig::default(), "/tmp");
        assert_eq!(process.state(), BackendState::Stopped);
        assert_eq!(process.root(), Path::new("/tmp"));
    }

    #[tokio::test]
    async fn test_spawn_missing_executable_fails_and_resets_state() {
        let config = BackendConfig {
            executable: "pyintel-no-such-engine".to_string(),
            args: vec![],
            ..Default::default()
        };
        let mut process = BackendProcess::new(config, ".");
        let err = process.spawn().unwrap_err();
        assert!(matches!(err, BackendError::Spawn(_)));
        assert_eq!(process.state(), BackendState::Stopped);
    }

    #[tokio::test]
    async fn test_shutdown_when_stopped_is_noop() {
        let mut process = BackendProcess::new(BackendConfig::default(), ".");
        process.shutdown().await.unwrap();
        assert_eq!(process.state(), BackendState::Stopped);
    }

    #[tokio::test]
    async fn test_spawn_and_shutdown_real_child() {
        let config = BackendConfig {
            executable: "cat".to_string(),
            args: vec![],
            ..Default::default()
        };
        let mut process = BackendProcess::new(config, ".");
        process.spawn().unwrap();
        assert_eq!(process.state(), BackendState::Running);
        assert!(process.is_running());

        // Double spawn is rejected while running
        assert!(matches!(
            process.spawn(),
            Err(BackendError::InvalidState { .. })
        ));

        process.shutdown().await.unwrap();
        assert_eq!(process.state(), BackendState::Stopped);
    }
}
