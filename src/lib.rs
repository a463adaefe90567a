// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! clint - Conventional commit message linter
//!
//! Lints commit messages against a rule set assembled from a shared preset
//! and project overrides.
//!
//! # Features
//!
//! - **Layered Rules**: Project rules override a conventional-commit preset
//! - **Function Rules**: Named predicates such as a scope-aware header limit
//! - **Ignore Patterns**: Merge, revert and fixup commits are skipped
//! - **Git Hooks**: Installs a `commit-msg` hook that runs the linter
//!
//! # Example
//!
//! ```no_run
//! use clint::config::project_config;
//! use clint::rules::RuleEngine;
//!
//! let engine = RuleEngine::new(&project_config()).unwrap();
//! let report = engine.lint_message("feat(sdk): add retry support").unwrap();
//!
//! for issue in &report.errors {
//!     println!("{}", issue.format());
//! }
//! ```

pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod hooks;
pub mod rules;

pub use commit::ParsedCommit;
pub use config::ClintConfig;
pub use error::{ClintError, Result};
pub use rules::RuleEngine;

/// Version information embedded at compile time.
pub mod version {
    /// The current version of clint.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        let short_sha = GIT_SHA.map(|sha| sha.get(..7).unwrap_or(sha));
        match (short_sha, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => format!("{} ({} {})", VERSION, sha, date),
            (Some(sha), None) => format!("{} ({})", VERSION, sha),
            _ => VERSION.to_string(),
        }
    }

}
