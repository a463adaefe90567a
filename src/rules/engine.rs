// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine for commit message linting.

use crate::commit::{IgnoreMatcher, ParsedCommit};
use crate::config::ClintConfig;
use crate::error::Result;
use crate::git;

use super::builtin::{check_spec, evaluate, FUNCTION_RULE_PREFIX};
use super::report::{LintIssue, LintReport};
use super::ruleset::RuleSet;

/// Rule engine for linting commit messages.
///
/// Every rule is checked for a known name and a well-formed value when the
/// engine is built, so evaluation itself never fails.
#[derive(Debug, Clone)]
pub struct RuleEngine {
    rules: RuleSet,
    ignores: IgnoreMatcher,
    help_url: Option<String>,
}

impl RuleEngine {
    /// Create a rule engine from a loaded configuration.
    pub fn new(config: &ClintConfig) -> Result<Self> {
        let rules = config.rule_set()?;
        let ignores = IgnoreMatcher::new(config.default_ignores, &config.ignores)?;
        let mut engine = Self::with_rules(rules)?;
        engine.ignores = ignores;
        engine.help_url = config.help_url.clone();
        Ok(engine)
    }

    /// Create a rule engine from a rule set, with the default ignores.
    pub fn with_rules(rules: RuleSet) -> Result<Self> {
        for (name, spec) in rules.iter() {
            check_spec(name, spec)?;
        }
        warn_on_duplicate_header_rules(&rules);

        tracing::debug!("Rule engine ready with {} enabled rules", rules.enabled().count());

        Ok(Self {
            rules,
            ignores: IgnoreMatcher::new(true, &[])?,
            help_url: None,
        })
    }

    /// The resolved rule set.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Lint a parsed commit against every enabled rule.
    pub fn lint(&self, commit: &ParsedCommit) -> LintReport {
        let mut report = LintReport::new(commit.raw.clone());
        report.help_url = self.help_url.clone();

        for (name, spec) in self.rules.enabled() {
            let outcome = evaluate(name, spec, commit);
            tracing::debug!("Rule '{}' ({}): valid={}", name, spec.severity, outcome.valid);

            if !outcome.valid {
                report.push(LintIssue {
                    rule: name.to_string(),
                    message: outcome
                        .message
                        .unwrap_or_else(|| format!("{} failed", name)),
                    severity: spec.severity,
                });
            }
        }

        report
    }

    /// Lint a raw commit message.
    pub fn lint_message(&self, message: &str) -> Result<LintReport> {
        if self.ignores.is_ignored(message) {
            tracing::debug!("Message ignored: {:?}", message.lines().next());
            return Ok(LintReport::ignored(message.trim()));
        }

        let parsed = ParsedCommit::parse(message)?;
        Ok(self.lint(&parsed))
    }

    /// Lint a specific commit by reference.
    pub fn check_commit(&self, reference: &str) -> Result<LintReport> {
        let (sha, message) = git::get_commit(reference)?;
        let mut report = self.lint_message(&message)?;
        report.commit_sha = Some(sha);
        Ok(report)
    }

    /// Lint a range of commits.
    pub fn check_range(&self, range: &str) -> Result<Vec<LintReport>> {
        let commits = git::get_commit_range(range)?;
        let mut reports = Vec::new();

        for (oid, message) in commits {
            let mut report = self.lint_message(&message)?;
            report.commit_sha = Some(oid);
            reports.push(report);
        }

        Ok(reports)
    }
}

/// Both header length rules enabled at once is legal but rarely intended.
fn warn_on_duplicate_header_rules(rules: &RuleSet) {
    let standard = rules
        .get("header-max-length")
        .map(|s| s.is_enabled())
        .unwrap_or(false);
    let custom = rules
        .enabled()
        .any(|(name, _)| name == format!("{}header-max-length", FUNCTION_RULE_PREFIX));

    if standard && custom {
        tracing::warn!(
            "Both 'header-max-length' and '{}header-max-length' are enabled; \
             headers are checked twice",
            FUNCTION_RULE_PREFIX
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::project_config;
    use crate::rules::functions;
    use crate::rules::spec::{Applicability, RuleSpec, RuleValue, Severity};

    fn engine() -> RuleEngine {
        RuleEngine::new(&project_config()).unwrap()
    }

    #[test]
    fn test_valid_commit() {
        let report = engine().lint_message("feat(sdk): add token refresh").unwrap();
        assert!(report.is_valid(), "{:?}", report.errors);
        assert_eq!(report.issue_count(), 0);
    }

    #[test]
    fn test_long_deps_header_passes() {
        let header =
            "fix(deps): bump library to address a very long but allowed exception case here today";
        assert!(header.chars().count() > 72);
        let report = engine().lint_message(header).unwrap();
        assert!(
            !report.errors.iter().any(|e| e.rule.contains("header")),
            "{:?}",
            report.errors
        );
    }

    #[test]
    fn test_long_sdk_header_fails() {
        let header = format!(
            "feat(sdk): add a tremendously verbose description exceeding the limit{}",
            " by far"
        );
        assert!(header.chars().count() > 72);
        let report = engine().lint_message(&header).unwrap();
        assert!(!report.is_valid());
        assert!(report.errors.iter().any(|e| {
            e.rule == "function-rules/header-max-length"
                && e.message == "header must not be longer than 72 characters"
        }));
    }

    #[test]
    fn test_unknown_scope_fails() {
        let report = engine().lint_message("feat(api): add endpoint").unwrap();
        assert!(report.errors.iter().any(|e| e.rule == "scope-enum"));
    }

    #[test]
    fn test_missing_blank_line_is_warning() {
        let report = engine()
            .lint_message("fix(sdk): retry on timeout\nwithout blank line")
            .unwrap();
        assert!(report.is_valid());
        assert!(report.warnings.iter().any(|w| w.rule == "body-leading-blank"));
    }

    #[test]
    fn test_non_conventional_header() {
        let report = engine().lint_message("Update stuff").unwrap();
        let rules: Vec<&str> = report.errors.iter().map(|e| e.rule.as_str()).collect();
        assert!(rules.contains(&"type-empty"));
        assert!(rules.contains(&"subject-empty"));
    }

    #[test]
    fn test_upper_case_behind_leading_symbol_fails() {
        for message in [
            "feat(sdk): 2FA Support",
            "feat(sdk): \"Quoted\" Thing",
            "feat(sdk): `Api` Client",
        ] {
            let report = engine().lint_message(message).unwrap();
            assert!(!report.is_valid(), "{}", message);
            assert!(report.errors.iter().any(|e| e.rule == "subject-case"), "{}", message);
        }
    }

    #[test]
    fn test_pull_request_merge_ignored() {
        let report = engine()
            .lint_message("Merge pull request #12 from org/branch\n\nAdd Client")
            .unwrap();
        assert!(report.ignored);
        assert!(report.is_valid());
    }

    #[test]
    fn test_merge_commit_ignored() {
        let report = engine().lint_message("Merge branch 'main' into dev").unwrap();
        assert!(report.ignored);
        assert!(report.is_valid());
    }

    #[test]
    fn test_disabled_rule_not_evaluated() {
        let rules = RuleSet::new().with(
            "type-enum",
            RuleSpec::new(
                Severity::Disabled,
                Applicability::Always,
                RuleValue::Enum(vec!["feat".to_string()]),
            ),
        );
        let engine = RuleEngine::with_rules(rules).unwrap();
        assert!(engine.lint_message("chore: tidy").unwrap().is_valid());
    }

    #[test]
    fn test_malformed_rule_rejected_at_construction() {
        let rules = RuleSet::new().with(
            "subject-max-length",
            RuleSpec::new(Severity::Error, Applicability::Always, RuleValue::None),
        );
        assert!(RuleEngine::with_rules(rules).is_err());

        let rules = RuleSet::new().with(
            "subject-maximum",
            RuleSpec::new(Severity::Error, Applicability::Always, RuleValue::Length(3)),
        );
        assert!(RuleEngine::with_rules(rules).is_err());
    }

    #[test]
    fn test_function_rule_without_standard_rule() {
        let function = functions::lookup("scoped-header-max-length").unwrap();
        let rules = RuleSet::new().with(
            "function-rules/header-max-length",
            RuleSpec::new(
                Severity::Warning,
                Applicability::Always,
                RuleValue::Function(function),
            ),
        );
        let engine = RuleEngine::with_rules(rules).unwrap();
        let report = engine.lint_message(&format!("feat: {}", "x".repeat(80))).unwrap();
        assert!(report.is_valid());
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn test_engine_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RuleEngine>();
    }
}
