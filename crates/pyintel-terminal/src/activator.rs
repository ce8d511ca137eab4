//! Per-terminal activation with dedup and handler fan-out

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use futures::future::{BoxFuture, FutureExt, Shared};
use parking_lot::Mutex;
use tracing::{debug, warn};

use pyintel_host::{Terminal, TerminalId};

use crate::error::{Result, TerminalError};
use crate::helper::TerminalHelper;
use crate::shell::ShellKind;

/// Settle delay between command sends
///
/// Sending the next command too early can clip text off in the host
/// terminal while the shell redraws its prompt.
pub const COMMAND_SETTLE_DELAY: Duration = Duration::from_millis(500);

/// The memoized outcome every caller racing on one terminal awaits
type SharedOutcome = Shared<BoxFuture<'static, Result<bool>>>;

/// Activates an environment in a terminal at most once
///
/// The ledger entry is inserted before the first await, so callers racing
/// on the same terminal within the synchronous window all pick up the same
/// shared outcome; that insert is the whole mutual-exclusion story. Entries
/// are never removed: one activation per terminal lifetime, even when a
/// later caller passes a different resource or focus flag.
pub struct TerminalEnvActivator {
    helper: Arc<dyn TerminalHelper>,
    ledger: Mutex<HashMap<TerminalId, SharedOutcome>>,
}

impl TerminalEnvActivator {
    pub fn new(helper: Arc<dyn TerminalHelper>) -> Self {
        Self {
            helper,
            ledger: Mutex::new(HashMap::new()),
        }
    }

    /// Activate the environment in `terminal`, or await the activation
    /// already running/finished there
    ///
    /// Resolves `true` when at least one command was sent. A command-send
    /// failure rejects the outcome for every waiter on this terminal.
    pub async fn activate_environment(
        &self,
        terminal: Arc<dyn Terminal>,
        resource: Option<PathBuf>,
        preserve_focus: bool,
    ) -> Result<bool> {
        let outcome = {
            let mut ledger = self.ledger.lock();
            if let Some(existing) = ledger.get(&terminal.id()) {
                debug!(terminal = %terminal.id(), "Reusing prior activation outcome");
                existing.clone()
            } else {
                let outcome = run_activation(
                    self.helper.clone(),
                    terminal.clone(),
                    resource,
                    preserve_focus,
                )
                .boxed()
                .shared();
                ledger.insert(terminal.id(), outcome.clone());
                outcome
            }
        };
        outcome.await
    }
}

async fn run_activation(
    helper: Arc<dyn TerminalHelper>,
    terminal: Arc<dyn Terminal>,
    resource: Option<PathBuf>,
    preserve_focus: bool,
) -> Result<bool> {
    let shell_path = helper.terminal_shell_path();
    let shell = if shell_path.is_empty() {
        ShellKind::Other
    } else {
        helper.identify_terminal_shell(&shell_path)
    };
    debug!(terminal = %terminal.id(), shell = %shell, "Resolving activation commands");

    let Some(commands) = helper.activation_commands(shell, resource.as_deref()).await? else {
        return Ok(false);
    };

    let mut activated = false;
    for command in &commands {
        terminal.show(preserve_focus);
        terminal
            .send_text(command)
            .map_err(|e| TerminalError::CommandSend {
                terminal: terminal.id(),
                message: e.to_string(),
            })?;
        wait_for_command_to_process(shell).await;
        activated = true;
    }
    Ok(activated)
}

/// Give the shell time to process a command before the next send
async fn wait_for_command_to_process(_shell: ShellKind) {
    tokio::time::sleep(COMMAND_SETTLE_DELAY).await;
}

/// Notified after an activation resolves; failures stay local
#[async_trait]
pub trait TerminalActivationHandler: Send + Sync {
    async fn handle_activation(
        &self,
        terminal: &dyn Terminal,
        resource: Option<&Path>,
        preserve_focus: bool,
        activated: bool,
    ) -> anyhow::Result<()>;
}

/// Dedup activator plus best-effort handler fan-out
///
/// Handlers run after the base activation resolves to an outcome. A handler
/// error is logged and dropped: it never changes the outcome and never
/// stops later handlers. When the base call itself fails, handlers are not
/// notified.
pub struct TerminalActivator {
    base: TerminalEnvActivator,
    handlers: Vec<Arc<dyn TerminalActivationHandler>>,
}

impl TerminalActivator {
    pub fn new(
        helper: Arc<dyn TerminalHelper>,
        handlers: Vec<Arc<dyn TerminalActivationHandler>>,
    ) -> Self {
        Self {
            base: TerminalEnvActivator::new(helper),
            handlers,
        }
    }

    pub async fn activate_environment(
        &self,
        terminal: Arc<dyn Terminal>,
        resource: Option<PathBuf>,
        preserve_focus: bool,
    ) -> Result<bool> {
        let activated = self
            .base
            .activate_environment(terminal.clone(), resource.clone(), preserve_focus)
            .await?;
        self.notify_handlers(&terminal, resource.as_deref(), preserve_focus, activated)
            .await;
        Ok(activated)
    }

    /// Best-effort notify: errors are logged and dropped
    async fn notify_handlers(
        &self,
        terminal: &Arc<dyn Terminal>,
        resource: Option<&Path>,
        preserve_focus: bool,
        activated: bool,
    ) {
        for handler in &self.handlers {
            if let Err(e) = handler
                .handle_activation(terminal.as_ref(), resource, preserve_focus, activated)
                .await
            {
                warn!(terminal = %terminal.id(), error = %e, "Activation handler failed");
            }
        }
    }
}
