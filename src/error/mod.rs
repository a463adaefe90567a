// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for the clint application.
//!
//! Rule violations are not errors: they are reported through
//! [`crate::rules::LintReport`]. The types here cover everything that stops
//! a lint from running at all.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for clint operations.
#[derive(Error, Debug)]
pub enum ClintError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Git errors
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    // Commit message errors
    #[error("Commit error: {0}")]
    Commit(#[from] CommitError),

    // Lint outcome errors
    #[error("Lint error: {0}")]
    Lint(#[from] LintError),

    // Hook errors
    #[error("Hook error: {0}")]
    Hook(#[from] HookError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Unknown rule: '{rule}'")]
    UnknownRule { rule: String },

    #[error("Invalid value for rule '{rule}': {message}")]
    InvalidRule { rule: String, message: String },

    #[error("Unknown preset: '{name}'")]
    UnknownPreset { name: String },

    #[error("Unknown rule function: '{name}'")]
    UnknownFunction { name: String },

    #[error("Invalid ignore pattern '{pattern}': {message}")]
    InvalidIgnore { pattern: String, message: String },

    #[error("Configuration file already exists: {path}")]
    AlreadyExists { path: PathBuf },
}

/// Git-related errors.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository")]
    NotARepository,

    #[error("Failed to open repository: {message}")]
    OpenFailed { message: String },

    #[error("Invalid commit reference: {reference}")]
    InvalidReference { reference: String },

    #[error("Git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },
}

/// Commit message errors.
#[derive(Error, Debug)]
pub enum CommitError {
    #[error("Empty commit message")]
    EmptyMessage,

    #[error("Failed to read commit message: {message}")]
    ReadFailed { message: String },
}

/// Lint outcome errors, raised once a report has been printed.
#[derive(Error, Debug)]
pub enum LintError {
    #[error("{errors} error(s), {warnings} warning(s) found")]
    Failed { errors: usize, warnings: usize },
}

/// Hook-related errors.
#[derive(Error, Debug)]
pub enum HookError {
    #[error("Failed to install hook '{hook}': {message}")]
    InstallFailed { hook: String, message: String },

    #[error("Hook already exists: {hook}")]
    AlreadyExists { hook: String },

    #[error("Hook not found: {hook}")]
    NotFound { hook: String },

    #[error("Failed to remove hook '{hook}': {message}")]
    RemoveFailed { hook: String, message: String },
}

/// Result type alias for clint operations.
pub type Result<T> = std::result::Result<T, ClintError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| ClintError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::NotFound {
            path: PathBuf::from("/path/to/config"),
        };
        assert!(err.to_string().contains("/path/to/config"));
    }

    #[test]
    fn test_invalid_rule_display() {
        let err = ConfigError::InvalidRule {
            rule: "type-enum".to_string(),
            message: "expected a list of strings".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("type-enum"));
        assert!(text.contains("list of strings"));
    }

    #[test]
    fn test_lint_error_counts() {
        let err = LintError::Failed {
            errors: 2,
            warnings: 1,
        };
        assert_eq!(err.to_string(), "2 error(s), 1 warning(s) found");
    }

    #[test]
    fn test_clint_error_from_config_error() {
        let config_err = ConfigError::UnknownPreset {
            name: "angular".to_string(),
        };
        let err: ClintError = config_err.into();
        assert!(err.to_string().contains("angular"));
    }

    #[test]
    fn test_result_ext_context() {
        let res: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::Other,
            "disk on fire",
        ));
        let err = res.context("reading message").unwrap_err();
        assert_eq!(err.to_string(), "reading message: disk on fire");
    }
}
