// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine module for commit linting.
//!
//! Rules are looked up by name in a [`RuleSet`], which layers local
//! declarations over the presets a configuration extends.

mod builtin;
pub mod case;
mod engine;
pub mod functions;
pub mod presets;
mod report;
mod ruleset;
pub mod spec;

pub use builtin::{
    check_spec, evaluate, value_kind, ValueKind, BUILTIN_RULES, FUNCTION_RULE_PREFIX,
};
pub use case::TextCase;
pub use engine::RuleEngine;
pub use report::{LintIssue, LintReport};
pub use ruleset::RuleSet;
pub use spec::{Applicability, NamedFn, RuleFn, RuleOutcome, RuleSpec, RuleValue, Severity};
