//! The helper collaborator for terminal activation

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use crate::commands::ActivationCommandProvider;
use crate::error::Result;
use crate::shell::{detected_shell_path, ShellKind};

/// Everything the activator asks about shells and commands
///
/// Split from the activator so tests (and alternative hosts) can substitute
/// the shell path, the classifier, and the command source in one place.
#[async_trait]
pub trait TerminalHelper: Send + Sync {
    /// Shell path of the host's integrated terminal; may be empty when
    /// undetectable
    fn terminal_shell_path(&self) -> String;

    /// Classify a non-empty shell path
    fn identify_terminal_shell(&self, shell_path: &str) -> ShellKind {
        ShellKind::identify(shell_path)
    }

    /// Ordered commands that activate the environment, or `None` when there
    /// is nothing to activate
    async fn activation_commands(
        &self,
        shell: ShellKind,
        resource: Option<&Path>,
    ) -> Result<Option<Vec<String>>>;
}

/// Helper wired from the detected shell and a command provider
pub struct DefaultTerminalHelper {
    shell_path: String,
    provider: Arc<dyn ActivationCommandProvider>,
}

impl DefaultTerminalHelper {
    pub fn new(provider: Arc<dyn ActivationCommandProvider>) -> Self {
        Self {
            shell_path: detected_shell_path(),
            provider,
        }
    }

    /// Override the detected shell path (used by hosts that know better)
    pub fn with_shell_path(
        shell_path: impl Into<String>,
        provider: Arc<dyn ActivationCommandProvider>,
    ) -> Self {
        Self {
            shell_path: shell_path.into(),
            provider,
        }
    }
}

#[async_trait]
impl TerminalHelper for DefaultTerminalHelper {
    fn terminal_shell_path(&self) -> String {
        self.shell_path.clone()
    }

    async fn activation_commands(
        &self,
        shell: ShellKind,
        resource: Option<&Path>,
    ) -> Result<Option<Vec<String>>> {
        self.provider.activation_commands(shell, resource).await
    }
}
