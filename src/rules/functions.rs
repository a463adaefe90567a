// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Function rules.
//!
//! A function rule is a plain `fn(&ParsedCommit, Applicability) -> RuleOutcome`
//! registered under a name, so that configuration files can refer to it from
//! a `function-rules/<rule>` entry.

use crate::commit::ParsedCommit;

use super::spec::{Applicability, NamedFn, RuleOutcome};

/// Header length limit applied by [`scoped_header_max_length`].
pub const SCOPED_HEADER_MAX_LENGTH: usize = 72;

/// Scopes exempt from the header length limit.
pub const HEADER_LENGTH_EXEMPT_SCOPES: &[&str] = &["deps", "dependencies"];

/// Registered function rules.
const REGISTRY: &[NamedFn] = &[NamedFn {
    name: "scoped-header-max-length",
    func: scoped_header_max_length,
}];

/// Look up a function rule by name.
pub fn lookup(name: &str) -> Option<NamedFn> {
    REGISTRY.iter().find(|f| f.name == name).copied()
}

/// Names of all registered function rules.
pub fn names() -> impl Iterator<Item = &'static str> {
    REGISTRY.iter().map(|f| f.name)
}

/// Limit the header to 72 characters, except for dependency updates.
///
/// Commits scoped `deps` or `dependencies` (exact match) always pass, since
/// bump messages routinely carry long package names and versions.
pub fn scoped_header_max_length(commit: &ParsedCommit, _when: Applicability) -> RuleOutcome {
    if let Some(scope) = commit.scope.as_deref() {
        if HEADER_LENGTH_EXEMPT_SCOPES.contains(&scope) {
            return RuleOutcome::pass();
        }
    }

    if commit.header_len() <= SCOPED_HEADER_MAX_LENGTH {
        return RuleOutcome::pass();
    }

    RuleOutcome::fail(format!(
        "header must not be longer than {} characters",
        SCOPED_HEADER_MAX_LENGTH
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A commit with the given scope and a header of exactly `header_len`
    /// characters. The predicate only reads these two fields.
    fn commit_with(scope: Option<&str>, header_len: usize) -> ParsedCommit {
        let commit = ParsedCommit {
            raw: String::new(),
            header: "a".repeat(header_len),
            commit_type: Some("fix".to_string()),
            scope: scope.map(str::to_string),
            subject: String::new(),
            body: None,
            footer: None,
            is_breaking: false,
        };
        assert_eq!(commit.header_len(), header_len);
        commit
    }

    fn run(commit: &ParsedCommit) -> RuleOutcome {
        scoped_header_max_length(commit, Applicability::Always)
    }

    #[test]
    fn test_exempt_scopes_pass_any_length() {
        for scope in ["deps", "dependencies"] {
            for len in [1, 72, 73, 200] {
                let commit = commit_with(Some(scope), len);
                assert!(run(&commit).valid, "scope {} length {}", scope, len);
            }
        }
    }

    #[test]
    fn test_parsed_header_boundary() {
        let header = format!("fix(sdk): {}", "a".repeat(62));
        assert_eq!(header.chars().count(), 72);
        assert!(run(&ParsedCommit::parse(&header).unwrap()).valid);

        let header = format!("{}a", header);
        assert!(!run(&ParsedCommit::parse(&header).unwrap()).valid);
    }

    #[test]
    fn test_boundary_without_scope() {
        assert!(run(&commit_with(None, 72)).valid);
        assert!(!run(&commit_with(None, 73)).valid);
    }

    #[test]
    fn test_boundary_with_other_scope() {
        assert!(run(&commit_with(Some("sdk"), 72)).valid);
        assert!(!run(&commit_with(Some("sdk"), 73)).valid);
    }

    #[test]
    fn test_exempt_scope_is_case_sensitive() {
        let commit = commit_with(Some("Deps"), 100);
        assert!(!run(&commit).valid);
    }

    #[test]
    fn test_failure_message() {
        let outcome = run(&commit_with(None, 120));
        assert_eq!(
            outcome.message.as_deref(),
            Some("header must not be longer than 72 characters")
        );
    }

    #[test]
    fn test_lookup() {
        assert!(lookup("scoped-header-max-length").is_some());
        assert!(lookup("nope").is_none());
        assert!(names().any(|n| n == "scoped-header-max-length"));
    }
}
