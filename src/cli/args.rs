// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// clint - Conventional commit message linter
///
/// Lints commit messages against a layered rule configuration.
#[derive(Parser, Debug)]
#[command(name = "clint")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Conventional commit message linter", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to run (defaults to check if not specified)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Output format for machine-readable output
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "CLINT_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Output format for CI and scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default)
    Text,
    /// JSON output for machine parsing
    Json,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Lint commit messages (default command)
    Check(CheckArgs),

    /// Print the effective rule set
    Rules,

    /// Manage git hooks
    Hooks(HooksArgs),

    /// Write the project configuration to clint.toml
    Init(InitArgs),

    /// Print version information
    Version,
}

/// Arguments for the check command.
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Commit or range to check
    #[arg(default_value = "HEAD")]
    pub target: String,

    /// Check all commits in a range
    #[arg(long)]
    pub range: bool,

    /// Strict mode: treat warnings as errors
    #[arg(long)]
    pub strict: bool,

    /// Lint the message in this file (as passed to the commit-msg hook)
    #[arg(short, long, value_name = "FILE", conflicts_with_all = ["stdin", "range"])]
    pub edit: Option<PathBuf>,

    /// Lint the message read from standard input
    #[arg(long, conflicts_with = "range")]
    pub stdin: bool,
}

/// Arguments for the hooks command.
#[derive(Parser, Debug, Clone)]
pub struct HooksArgs {
    /// Hook action to perform
    #[command(subcommand)]
    pub action: HooksAction,
}

/// Hook actions.
#[derive(Subcommand, Debug, Clone)]
pub enum HooksAction {
    /// Install git hooks
    Install {
        /// Specific hook to install
        #[arg(value_name = "HOOK")]
        hook: Option<String>,

        /// Replace existing hooks, keeping a backup
        #[arg(short, long)]
        force: bool,
    },

    /// Uninstall git hooks
    Uninstall {
        /// Specific hook to uninstall
        #[arg(value_name = "HOOK")]
        hook: Option<String>,
    },

    /// Show hook status
    Status,
}

/// Arguments for the init command.
#[derive(Parser, Debug, Clone)]
pub struct InitArgs {
    /// Overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,
}

impl Cli {
    /// Get the effective command, defaulting to Check if none specified.
    pub fn effective_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Check(CheckArgs::default()))
    }
}

impl Default for CheckArgs {
    fn default() -> Self {
        Self {
            target: "HEAD".to_string(),
            range: false,
            strict: false,
            edit: None,
            stdin: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_debug() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_check() {
        let args = Cli::parse_from(["clint", "check", "HEAD~5..HEAD", "--strict"]);
        if let Some(Commands::Check(check_args)) = args.command {
            assert_eq!(check_args.target, "HEAD~5..HEAD");
            assert!(check_args.strict);
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_parse_check_edit() {
        let args = Cli::parse_from(["clint", "check", "--edit", ".git/COMMIT_EDITMSG"]);
        if let Some(Commands::Check(check_args)) = args.command {
            assert_eq!(check_args.edit, Some(PathBuf::from(".git/COMMIT_EDITMSG")));
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_edit_conflicts_with_stdin() {
        let result = Cli::try_parse_from(["clint", "check", "--edit", "MSG", "--stdin"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_hooks() {
        let args = Cli::parse_from(["clint", "hooks", "install", "--force"]);
        assert!(matches!(args.command, Some(Commands::Hooks(_))));
    }

    #[test]
    fn test_global_flags() {
        let args = Cli::parse_from(["clint", "rules", "--format", "json", "--debug"]);
        assert!(args.debug);
        assert_eq!(args.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_default_command() {
        let args = Cli::parse_from(["clint"]);
        assert!(args.command.is_none());
        assert!(matches!(args.effective_command(), Commands::Check(_)));
    }
}
