// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in project configuration.
//!
//! Used when no configuration file is found, and written out by `clint init`.

use super::schema::{ClintConfig, RuleEntry};
use crate::rules::{Applicability, Severity};

/// Maximum body line length.
pub const BODY_MAX_LINE_LENGTH: i64 = 72;

/// Maximum subject length.
pub const SUBJECT_MAX_LENGTH: i64 = 50;

/// Allowed commit types.
pub const TYPES: &[&str] = &[
    "build", "chore", "ci", "docs", "feat", "fix", "perf", "refactor", "revert", "style", "test",
];

/// Allowed scopes.
pub const SCOPES: &[&str] = &[
    "logging",
    "sdk",
    "docs",
    "dependencies",
    "deps",
    "build",
    "test",
    "ci",
];

/// The project configuration: the conventional preset with a tighter body
/// and subject, a fixed scope vocabulary, and the header length limit
/// delegated to a function rule that exempts dependency updates.
pub fn project_config() -> ClintConfig {
    use Applicability::{Always, Never};
    use Severity::{Disabled, Error, Warning};

    let list = |items: &[&str]| {
        toml::Value::Array(
            items
                .iter()
                .map(|s| toml::Value::String(s.to_string()))
                .collect(),
        )
    };
    let text = |s: &str| toml::Value::String(s.to_string());

    let rules = [
        (
            "body-max-line-length",
            RuleEntry::new(Error, Always, Some(toml::Value::Integer(BODY_MAX_LINE_LENGTH))),
        ),
        ("body-leading-blank", RuleEntry::new(Warning, Always, None)),
        ("header-max-length", RuleEntry::new(Disabled, Always, None)),
        (
            "function-rules/header-max-length",
            RuleEntry::new(Error, Always, Some(text("scoped-header-max-length"))),
        ),
        (
            "subject-max-length",
            RuleEntry::new(Error, Always, Some(toml::Value::Integer(SUBJECT_MAX_LENGTH))),
        ),
        ("subject-full-stop", RuleEntry::new(Error, Never, Some(text(".")))),
        (
            "subject-case",
            RuleEntry::new(Error, Always, Some(list(&["lower-case"]))),
        ),
        ("type-enum", RuleEntry::new(Error, Always, Some(list(TYPES)))),
        ("scope-enum", RuleEntry::new(Error, Always, Some(list(SCOPES)))),
    ];

    ClintConfig {
        rules: rules
            .into_iter()
            .map(|(name, entry)| (name.to_string(), entry))
            .collect(),
        ..ClintConfig::default()
    }
}

/// The project configuration as a `clint.toml` file.
pub fn example_config() -> &'static str {
    r#"# clint configuration
# Levels: 0 = disabled, 1 = warning, 2 = error

extends = ["conventional"]
default_ignores = true
ignores = []

[rules]
"body-max-line-length" = [2, "always", 72]
"body-leading-blank" = [1, "always"]
# Replaced by the function rule below.
"header-max-length" = [0]
"function-rules/header-max-length" = [2, "always", "scoped-header-max-length"]
"subject-max-length" = [2, "always", 50]
"subject-full-stop" = [2, "never", "."]
"subject-case" = [2, "always", ["lower-case"]]
"type-enum" = [2, "always", ["build", "chore", "ci", "docs", "feat", "fix", "perf", "refactor", "revert", "style", "test"]]
"scope-enum" = [2, "always", ["logging", "sdk", "docs", "dependencies", "deps", "build", "test", "ci"]]
"#
}
