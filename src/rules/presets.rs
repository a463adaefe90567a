// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Shareable rule presets that configurations can `extends`.

use std::collections::BTreeMap;

use super::case::TextCase;
use super::spec::{Applicability, RuleSpec, RuleValue, Severity};

/// The conventional commit types.
pub const CONVENTIONAL_TYPES: &[&str] = &[
    "build", "chore", "ci", "docs", "feat", "fix", "perf", "refactor", "revert", "style", "test",
];

/// Names accepted for the conventional preset.
const CONVENTIONAL_NAMES: &[&str] = &["conventional", "@commitlint/config-conventional"];

/// Resolve a preset by name.
pub fn lookup(name: &str) -> Option<BTreeMap<String, RuleSpec>> {
    if CONVENTIONAL_NAMES.contains(&name) {
        Some(conventional())
    } else {
        None
    }
}

/// The Conventional Commits rule set.
pub fn conventional() -> BTreeMap<String, RuleSpec> {
    use Applicability::{Always, Never};
    use Severity::{Error, Warning};

    let rules = [
        ("body-leading-blank", RuleSpec::new(Warning, Always, RuleValue::None)),
        ("body-max-line-length", RuleSpec::new(Error, Always, RuleValue::Length(100))),
        ("footer-leading-blank", RuleSpec::new(Warning, Always, RuleValue::None)),
        ("footer-max-line-length", RuleSpec::new(Error, Always, RuleValue::Length(100))),
        ("header-max-length", RuleSpec::new(Error, Always, RuleValue::Length(100))),
        ("header-trim", RuleSpec::new(Error, Always, RuleValue::None)),
        (
            "subject-case",
            RuleSpec::new(
                Error,
                Never,
                RuleValue::Cases(vec![
                    TextCase::SentenceCase,
                    TextCase::StartCase,
                    TextCase::PascalCase,
                    TextCase::UpperCase,
                ]),
            ),
        ),
        ("subject-empty", RuleSpec::new(Error, Never, RuleValue::None)),
        ("subject-full-stop", RuleSpec::new(Error, Never, RuleValue::Text(".".to_string()))),
        (
            "type-case",
            RuleSpec::new(Error, Always, RuleValue::Cases(vec![TextCase::LowerCase])),
        ),
        ("type-empty", RuleSpec::new(Error, Never, RuleValue::None)),
        (
            "type-enum",
            RuleSpec::new(
                Error,
                Always,
                RuleValue::Enum(CONVENTIONAL_TYPES.iter().map(|t| t.to_string()).collect()),
            ),
        ),
    ];

    rules
        .into_iter()
        .map(|(name, spec)| (name.to_string(), spec))
        .collect()
}
