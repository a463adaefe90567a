// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Hook script templates.

/// Marker identifying hooks written by clint.
pub const HOOK_MARKER: &str = "clint Git Hook";

/// Git hooks clint can install.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookTemplate {
    /// Lints the message being committed.
    CommitMsg,
}

impl HookTemplate {
    /// Get all hook templates.
    pub fn all() -> &'static [HookTemplate] {
        &[HookTemplate::CommitMsg]
    }

    /// File name inside the hooks directory.
    pub fn filename(&self) -> &'static str {
        match self {
            HookTemplate::CommitMsg => "commit-msg",
        }
    }

    /// Generate the hook script.
    pub fn generate(&self) -> String {
        let command = match self {
            HookTemplate::CommitMsg => "exec clint check --edit \"$1\"",
        };

        format!(
            "#!/bin/sh\n# {}\n# Generated by clint v{}\n\n{}\n",
            HOOK_MARKER,
            crate::version::VERSION,
            command
        )
    }
}

impl std::str::FromStr for HookTemplate {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "commit-msg" | "commit_msg" => Ok(HookTemplate::CommitMsg),
            _ => Err(()),
        }
    }
}
