//! Activation command synthesis

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use crate::error::Result;
use crate::shell::ShellKind;

/// Source of shell commands that put an environment into effect
///
/// `None` means no environment applies to the resource (or the shell is not
/// supported); the terminal is then left untouched.
#[async_trait]
pub trait ActivationCommandProvider: Send + Sync {
    async fn activation_commands(
        &self,
        shell: ShellKind,
        resource: Option<&Path>,
    ) -> Result<Option<Vec<String>>>;
}

/// Directory names searched for a virtual environment
const VENV_DIR_NAMES: &[&str] = &[".venv", "venv", "env"];

/// Synthesizes virtual-environment activation commands
///
/// Looks for a venv directory (marked by `pyvenv.cfg`) directly under the
/// resource and emits the per-shell activation command for it.
#[derive(Debug, Default)]
pub struct VenvActivationProvider;

impl VenvActivationProvider {
    pub fn new() -> Self {
        Self
    }

    fn find_venv(resource: &Path) -> Option<PathBuf> {
        VENV_DIR_NAMES
            .iter()
            .map(|name| resource.join(name))
            .find(|candidate| candidate.join("pyvenv.cfg").is_file())
    }

    /// The venv's script directory: `bin` on POSIX layouts, `Scripts` on
    /// Windows layouts. Decided by what exists on disk, not by target OS,
    /// so shared checkouts behave.
    fn script_dir(venv: &Path) -> PathBuf {
        let bin = venv.join("bin");
        if bin.is_dir() {
            bin
        } else {
            venv.join("Scripts")
        }
    }
}

#[async_trait]
impl ActivationCommandProvider for VenvActivationProvider {
    async fn activation_commands(
        &self,
        shell: ShellKind,
        resource: Option<&Path>,
    ) -> Result<Option<Vec<String>>> {
        let Some(resource) = resource else {
            return Ok(None);
        };
        let Some(venv) = Self::find_venv(resource) else {
            debug!(resource = %resource.display(), "No virtual environment found");
            return Ok(None);
        };
        let scripts = Self::script_dir(&venv);

        let command = match shell {
            ShellKind::Bash | ShellKind::Zsh | ShellKind::Ksh => {
                format!("source \"{}\"", scripts.join("activate").display())
            }
            ShellKind::CShell | ShellKind::TcShell => {
                format!("source \"{}\"", scripts.join("activate.csh").display())
            }
            ShellKind::Fish => {
                format!("source \"{}\"", scripts.join("activate.fish").display())
            }
            ShellKind::PowerShell => {
                format!("& \"{}\"", scripts.join("Activate.ps1").display())
            }
            ShellKind::CommandPrompt => {
                format!("\"{}\"", scripts.join("activate.bat").display())
            }
            ShellKind::Other => return Ok(None),
        };
        Ok(Some(vec![command]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    /// A resource directory with a `.venv` marked by pyvenv.cfg
    fn venv_fixture() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let venv = dir.path().join(".venv");
        fs::create_dir_all(venv.join("bin")).unwrap();
        fs::write(venv.join("pyvenv.cfg"), "home = /usr\n").unwrap();
        dir
    }

    #[tokio::test]
    async fn test_posix_shells_source_activate() {
        let dir = venv_fixture();
        let provider = VenvActivationProvider::new();
        for shell in [ShellKind::Bash, ShellKind::Zsh, ShellKind::Ksh] {
            let commands = provider
                .activation_commands(shell, Some(dir.path()))
                .await
                .unwrap()
                .unwrap();
            assert_eq!(commands.len(), 1);
            assert!(commands[0].starts_with("source \""));
            assert!(commands[0].contains("bin/activate\""));
        }
    }

    #[tokio::test]
    async fn test_shell_specific_scripts() {
        let dir = venv_fixture();
        let provider = VenvActivationProvider::new();

        let fish = provider
            .activation_commands(ShellKind::Fish, Some(dir.path()))
            .await
            .unwrap()
            .unwrap();
        assert!(fish[0].contains("activate.fish"));

        let csh = provider
            .activation_commands(ShellKind::TcShell, Some(dir.path()))
            .await
            .unwrap()
            .unwrap();
        assert!(csh[0].contains("activate.csh"));

        let pwsh = provider
            .activation_commands(ShellKind::PowerShell, Some(dir.path()))
            .await
            .unwrap()
            .unwrap();
        assert!(pwsh[0].starts_with("& \""));
        assert!(pwsh[0].contains("Activate.ps1"));
    }

    #[tokio::test]
    async fn test_no_resource_or_no_venv_yields_none() {
        let provider = VenvActivationProvider::new();
        assert_eq!(
            provider
                .activation_commands(ShellKind::Bash, None)
                .await
                .unwrap(),
            None
        );

        let empty = tempfile::tempdir().unwrap();
        assert_eq!(
            provider
                .activation_commands(ShellKind::Bash, Some(empty.path()))
                .await
                .unwrap(),
            None
        );
    }

    #[tokio::test]
    async fn test_other_shell_yields_none() {
        let dir = venv_fixture();
        let provider = VenvActivationProvider::new();
        assert_eq!(
            provider
                .activation_commands(ShellKind::Other, Some(dir.path()))
                .await
                .unwrap(),
            None
        );
    }

    #[tokio::test]
    async fn test_bare_venv_dir_without_marker_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("venv")).unwrap();
        let provider = VenvActivationProvider::new();
        assert_eq!(
            provider
                .activation_commands(ShellKind::Bash, Some(dir.path()))
                .await
                .unwrap(),
            None
        );
    }
}
