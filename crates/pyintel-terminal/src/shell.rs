//! Shell classification

use std::env;

/// Classification of the interactive shell running in a terminal
///
/// Picked from the shell path's executable basename; anything unrecognized
/// (including an empty path) is [`ShellKind::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShellKind {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    CommandPrompt,
    Ksh,
    CShell,
    TcShell,
    Other,
}

impl ShellKind {
    /// Classify a shell path by its executable basename
    ///
    /// Case-insensitive; a Windows `.exe` suffix is ignored. Splits on both
    /// separators so Windows paths classify on any platform.
    pub fn identify(shell_path: &str) -> Self {
        let name = shell_path.rsplit(['/', '\\']).next().unwrap_or_default();
        if name.is_empty() {
            return Self::Other;
        }
        let name = name.to_ascii_lowercase();
        let name = name.strip_suffix(".exe").unwrap_or(&name);
        match name {
            "bash" | "git-bash" => Self::Bash,
            "zsh" => Self::Zsh,
            "fish" => Self::Fish,
            "pwsh" | "powershell" => Self::PowerShell,
            "cmd" => Self::CommandPrompt,
            "ksh" => Self::Ksh,
            "csh" => Self::CShell,
            "tcsh" => Self::TcShell,
            _ => Self::Other,
        }
    }
}

impl std::fmt::Display for ShellKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Bash => "bash",
            Self::Zsh => "zsh",
            Self::Fish => "fish",
            Self::PowerShell => "powershell",
            Self::CommandPrompt => "cmd",
            Self::Ksh => "ksh",
            Self::CShell => "csh",
            Self::TcShell => "tcsh",
            Self::Other => "other",
        };
        f.write_str(name)
    }
}

/// Shell path of the host's integrated terminal
///
/// `$SHELL` on Unix, `%COMSPEC%` on Windows; empty when neither is set, in
/// which case the terminal classifies as [`ShellKind::Other`] downstream.
pub fn detected_shell_path() -> String {
    env::var("SHELL")
        .ok()
        .filter(|s| !s.is_empty())
        .or_else(|| env::var("COMSPEC").ok().filter(|s| !s.is_empty()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_identify_common_shells() {
        assert_eq!(ShellKind::identify("/bin/bash"), ShellKind::Bash);
        assert_eq!(ShellKind::identify("/usr/local/bin/zsh"), ShellKind::Zsh);
        assert_eq!(ShellKind::identify("/usr/bin/fish"), ShellKind::Fish);
        assert_eq!(ShellKind::identify("/usr/bin/tcsh"), ShellKind::TcShell);
        assert_eq!(ShellKind::identify("/bin/ksh"), ShellKind::Ksh);
    }

    #[test]
    fn test_identify_windows_shells() {
        assert_eq!(
            ShellKind::identify(r"C:\Windows\System32\cmd.exe"),
            ShellKind::CommandPrompt
        );
        assert_eq!(
            ShellKind::identify(r"C:\Program Files\PowerShell\7\pwsh.exe"),
            ShellKind::PowerShell
        );
        assert_eq!(ShellKind::identify("POWERSHELL.EXE"), ShellKind::PowerShell);
    }

    #[test]
    fn test_identify_empty_or_unknown_is_other() {
        assert_eq!(ShellKind::identify(""), ShellKind::Other);
        assert_eq!(ShellKind::identify("/usr/bin/nu"), ShellKind::Other);
        assert_eq!(ShellKind::identify("/"), ShellKind::Other);
    }

    proptest! {
        /// Basenames outside the known set always classify as Other
        #[test]
        fn prop_unknown_basenames_are_other(name in "[a-z0-9]{1,12}") {
            prop_assume!(!matches!(
                name.as_str(),
                "bash" | "git-bash" | "zsh" | "fish" | "pwsh" | "powershell"
                    | "cmd" | "ksh" | "csh" | "tcsh"
            ));
            let path = format!("/usr/bin/{name}");
            prop_assert_eq!(ShellKind::identify(&path), ShellKind::Other);
        }

        /// Classification only looks at the basename, never the directory
        #[test]
        fn prop_directory_is_irrelevant(dir in "[a-z]{1,8}") {
            let path = format!("/{dir}/bash");
            prop_assert_eq!(ShellKind::identify(&path), ShellKind::Bash);
        }
    }
}
