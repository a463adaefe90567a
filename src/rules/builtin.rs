// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in rule implementations.
//!
//! Each rule is identified by name, takes a [`RuleSpec`] and produces a
//! [`RuleOutcome`]. Rules on an absent field pass, except the `*-empty`
//! rules which exist to check presence.

use crate::commit::ParsedCommit;
use crate::error::ConfigError;

use super::case::TextCase;
use super::spec::{Applicability, RuleOutcome, RuleSpec, RuleValue};

/// Prefix of rules whose value is a function.
pub const FUNCTION_RULE_PREFIX: &str = "function-rules/";

/// Shape of the value a rule expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    None,
    Length,
    Enum,
    Cases,
    Text,
    Function,
}

/// Every built-in rule name and the value it expects.
pub const BUILTIN_RULES: &[(&str, ValueKind)] = &[
    ("body-empty", ValueKind::None),
    ("body-leading-blank", ValueKind::None),
    ("body-max-length", ValueKind::Length),
    ("body-max-line-length", ValueKind::Length),
    ("body-min-length", ValueKind::Length),
    ("footer-empty", ValueKind::None),
    ("footer-leading-blank", ValueKind::None),
    ("footer-max-line-length", ValueKind::Length),
    ("header-case", ValueKind::Cases),
    ("header-full-stop", ValueKind::Text),
    ("header-max-length", ValueKind::Length),
    ("header-min-length", ValueKind::Length),
    ("header-trim", ValueKind::None),
    ("scope-case", ValueKind::Cases),
    ("scope-empty", ValueKind::None),
    ("scope-enum", ValueKind::Enum),
    ("scope-max-length", ValueKind::Length),
    ("subject-case", ValueKind::Cases),
    ("subject-empty", ValueKind::None),
    ("subject-full-stop", ValueKind::Text),
    ("subject-max-length", ValueKind::Length),
    ("subject-min-length", ValueKind::Length),
    ("type-case", ValueKind::Cases),
    ("type-empty", ValueKind::None),
    ("type-enum", ValueKind::Enum),
    ("type-max-length", ValueKind::Length),
];

/// Get the value kind a rule name expects.
pub fn value_kind(name: &str) -> Option<ValueKind> {
    if name.starts_with(FUNCTION_RULE_PREFIX) && name.len() > FUNCTION_RULE_PREFIX.len() {
        return Some(ValueKind::Function);
    }
    BUILTIN_RULES
        .iter()
        .find(|(rule, _)| *rule == name)
        .map(|(_, kind)| *kind)
}

/// Check that a rule exists and that its value has the expected shape.
///
/// Disabled rules are only checked for a known name, so `[0]` is accepted
/// for any rule.
pub fn check_spec(name: &str, spec: &RuleSpec) -> Result<(), ConfigError> {
    let kind = value_kind(name).ok_or_else(|| ConfigError::UnknownRule {
        rule: name.to_string(),
    })?;

    if !spec.is_enabled() {
        return Ok(());
    }

    let matches = matches!(
        (kind, &spec.value),
        (ValueKind::None, RuleValue::None)
            | (ValueKind::Length, RuleValue::Length(_))
            | (ValueKind::Enum, RuleValue::Enum(_))
            | (ValueKind::Cases, RuleValue::Cases(_))
            | (ValueKind::Text, RuleValue::Text(_))
            | (ValueKind::Function, RuleValue::Function(_))
    );

    if matches {
        Ok(())
    } else {
        Err(ConfigError::InvalidRule {
            rule: name.to_string(),
            message: format!("expected {}, got {}", kind_label(kind), spec.value.kind()),
        })
    }
}

fn kind_label(kind: ValueKind) -> &'static str {
    match kind {
        ValueKind::None => "no value",
        ValueKind::Length => "a length",
        ValueKind::Enum => "a list of values",
        ValueKind::Cases => "a list of cases",
        ValueKind::Text => "a string",
        ValueKind::Function => "a function",
    }
}

/// Evaluate one rule against a commit.
///
/// The rule must have passed [`check_spec`]; a value of the wrong shape is
/// treated as a pass.
pub fn evaluate(name: &str, spec: &RuleSpec, commit: &ParsedCommit) -> RuleOutcome {
    let when = spec.applicability;

    match (name, &spec.value) {
        (_, RuleValue::Function(f)) => (f.func)(commit, when),

        ("body-empty", _) => check_empty("body", commit.body.as_deref(), when),
        ("footer-empty", _) => check_empty("footer", commit.footer.as_deref(), when),
        ("scope-empty", _) => check_empty("scope", commit.scope.as_deref(), when),
        ("type-empty", _) => check_empty("type", commit.commit_type.as_deref(), when),
        ("subject-empty", _) => check_empty("subject", subject(commit), when),

        ("body-leading-blank", _) => check_leading_blank(
            "body",
            commit.body.is_some(),
            commit.has_blank_after_header(),
            when,
        ),
        ("footer-leading-blank", _) => check_leading_blank(
            "footer",
            commit.footer.is_some(),
            commit.has_blank_before_footer(),
            when,
        ),

        ("header-trim", _) => check_trim(&commit.header),

        ("body-max-length", RuleValue::Length(max)) => {
            check_max_length("body", commit.body.as_deref(), *max)
        }
        ("header-max-length", RuleValue::Length(max)) => {
            check_max_length("header", Some(commit.header.as_str()), *max)
        }
        ("scope-max-length", RuleValue::Length(max)) => {
            check_max_length("scope", commit.scope.as_deref(), *max)
        }
        ("subject-max-length", RuleValue::Length(max)) => {
            check_max_length("subject", subject(commit), *max)
        }
        ("type-max-length", RuleValue::Length(max)) => {
            check_max_length("type", commit.commit_type.as_deref(), *max)
        }

        ("body-min-length", RuleValue::Length(min)) => {
            check_min_length("body", commit.body.as_deref(), *min)
        }
        ("header-min-length", RuleValue::Length(min)) => {
            check_min_length("header", Some(commit.header.as_str()), *min)
        }
        ("subject-min-length", RuleValue::Length(min)) => {
            check_min_length("subject", subject(commit), *min)
        }

        ("body-max-line-length", RuleValue::Length(max)) => {
            check_max_line_length("body", commit.body.as_deref(), *max)
        }
        ("footer-max-line-length", RuleValue::Length(max)) => {
            check_max_line_length("footer", commit.footer.as_deref(), *max)
        }

        ("header-case", RuleValue::Cases(cases)) => {
            check_case("header", Some(commit.header.as_str()), cases, when)
        }
        ("scope-case", RuleValue::Cases(cases)) => {
            check_case("scope", commit.scope.as_deref(), cases, when)
        }
        ("subject-case", RuleValue::Cases(cases)) => {
            let subject = subject(commit);
            let leading_letter = subject.is_some_and(|s| s.starts_with(char::is_alphabetic));
            // Initial-letter cases are skipped for subjects starting with a digit or symbol.
            let cases: Vec<TextCase> = cases
                .iter()
                .copied()
                .filter(|case| leading_letter || !case.depends_on_first_letter())
                .collect();
            if cases.is_empty() {
                RuleOutcome::pass()
            } else {
                check_case("subject", subject, &cases, when)
            }
        }
        ("type-case", RuleValue::Cases(cases)) => {
            check_case("type", commit.commit_type.as_deref(), cases, when)
        }

        ("scope-enum", RuleValue::Enum(values)) => {
            check_enum("scope", commit.scope.as_deref(), values, when)
        }
        ("type-enum", RuleValue::Enum(values)) => {
            check_enum("type", commit.commit_type.as_deref(), values, when)
        }

        ("header-full-stop", RuleValue::Text(stop)) => {
            check_full_stop("header", Some(commit.header.as_str()), stop, when)
        }
        ("subject-full-stop", RuleValue::Text(stop)) => {
            check_full_stop("subject", subject(commit), stop, when)
        }

        _ => {
            tracing::debug!("No evaluation for rule '{}' with {:?}", name, spec.value);
            RuleOutcome::pass()
        }
    }
}

fn subject(commit: &ParsedCommit) -> Option<&str> {
    Some(commit.subject.as_str()).filter(|s| !s.is_empty())
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

fn check_empty(field: &str, value: Option<&str>, when: Applicability) -> RuleOutcome {
    let not_empty = value.map(|v| !v.trim().is_empty()).unwrap_or(false);
    if when.is_never() {
        RuleOutcome::check(not_empty, format!("{} may not be empty", field))
    } else {
        RuleOutcome::check(!not_empty, format!("{} must be empty", field))
    }
}

fn check_leading_blank(
    field: &str,
    present: bool,
    blank: bool,
    when: Applicability,
) -> RuleOutcome {
    if !present {
        return RuleOutcome::pass();
    }
    if when.is_never() {
        RuleOutcome::check(!blank, format!("{} may not have leading blank line", field))
    } else {
        RuleOutcome::check(blank, format!("{} must have leading blank line", field))
    }
}

fn check_trim(header: &str) -> RuleOutcome {
    let starts = header.starts_with(char::is_whitespace);
    let ends = header.ends_with(char::is_whitespace);
    match (starts, ends) {
        (true, true) => RuleOutcome::fail("header must not be surrounded by whitespace"),
        (true, false) => RuleOutcome::fail("header must not start with whitespace"),
        (false, true) => RuleOutcome::fail("header must not end with whitespace"),
        (false, false) => RuleOutcome::pass(),
    }
}

fn check_max_length(field: &str, value: Option<&str>, max: usize) -> RuleOutcome {
    let Some(value) = value else {
        return RuleOutcome::pass();
    };
    let len = char_len(value);
    RuleOutcome::check(
        len <= max,
        format!(
            "{} must not be longer than {} characters, current length is {}",
            field, max, len
        ),
    )
}

fn check_min_length(field: &str, value: Option<&str>, min: usize) -> RuleOutcome {
    let Some(value) = value else {
        return RuleOutcome::pass();
    };
    let len = char_len(value);
    RuleOutcome::check(
        len >= min,
        format!(
            "{} must not be shorter than {} characters, current length is {}",
            field, min, len
        ),
    )
}

fn check_max_line_length(field: &str, value: Option<&str>, max: usize) -> RuleOutcome {
    let Some(value) = value else {
        return RuleOutcome::pass();
    };
    let valid = value.lines().all(|line| char_len(line) <= max);
    RuleOutcome::check(
        valid,
        format!("{}'s lines must not be longer than {} characters", field, max),
    )
}

fn check_case(
    field: &str,
    value: Option<&str>,
    cases: &[TextCase],
    when: Applicability,
) -> RuleOutcome {
    let Some(value) = value else {
        return RuleOutcome::pass();
    };
    let any = cases.iter().any(|case| case.matches(value));
    let list = cases
        .iter()
        .map(|c| c.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    if when.is_never() {
        RuleOutcome::check(!any, format!("{} must not be {}", field, list))
    } else {
        RuleOutcome::check(any, format!("{} must be {}", field, list))
    }
}

fn check_enum(
    field: &str,
    value: Option<&str>,
    allowed: &[String],
    when: Applicability,
) -> RuleOutcome {
    let Some(value) = value else {
        return RuleOutcome::pass();
    };
    let member = allowed.iter().any(|a| a == value);
    let list = allowed.join(", ");

    if when.is_never() {
        RuleOutcome::check(!member, format!("{} must not be one of [{}]", field, list))
    } else {
        RuleOutcome::check(member, format!("{} must be one of [{}]", field, list))
    }
}

fn check_full_stop(
    field: &str,
    value: Option<&str>,
    stop: &str,
    when: Applicability,
) -> RuleOutcome {
    let Some(value) = value else {
        return RuleOutcome::pass();
    };
    let has_stop = value.ends_with(stop);

    if when.is_never() {
        RuleOutcome::check(!has_stop, format!("{} may not end with full stop", field))
    } else {
        RuleOutcome::check(has_stop, format!("{} must end with full stop", field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::spec::Severity;

    fn spec(when: Applicability, value: RuleValue) -> RuleSpec {
        RuleSpec::new(Severity::Error, when, value)
    }

    fn always(value: RuleValue) -> RuleSpec {
        spec(Applicability::Always, value)
    }

    fn never(value: RuleValue) -> RuleSpec {
        spec(Applicability::Never, value)
    }

    fn parse(message: &str) -> ParsedCommit {
        ParsedCommit::parse(message).unwrap()
    }

    fn list(values: &[&str]) -> RuleValue {
        RuleValue::Enum(values.iter().map(|v| v.to_string()).collect())
    }

    #[test]
    fn test_type_enum() {
        let rule = always(list(&["feat", "fix"]));
        assert!(evaluate("type-enum", &rule, &parse("feat: x")).valid);
        assert!(!evaluate("type-enum", &rule, &parse("Feat: x")).valid);
        assert!(!evaluate("type-enum", &rule, &parse("wip: x")).valid);

        let outcome = evaluate("type-enum", &rule, &parse("wip: x"));
        assert_eq!(outcome.message.as_deref(), Some("type must be one of [feat, fix]"));
    }

    #[test]
    fn test_enum_never() {
        let rule = never(list(&["wip"]));
        assert!(!evaluate("type-enum", &rule, &parse("wip: x")).valid);
        assert!(evaluate("type-enum", &rule, &parse("feat: x")).valid);
    }

    #[test]
    fn test_scope_enum_absent_scope_passes() {
        let rule = always(list(&["sdk"]));
        assert!(evaluate("scope-enum", &rule, &parse("feat: x")).valid);
        assert!(!evaluate("scope-enum", &rule, &parse("feat(api): x")).valid);
    }

    #[test]
    fn test_empty_rules() {
        let rule = never(RuleValue::None);
        assert!(!evaluate("type-empty", &rule, &parse("just words")).valid);
        assert!(!evaluate("subject-empty", &rule, &parse("just words")).valid);
        assert!(evaluate("subject-empty", &rule, &parse("feat: x")).valid);

        let rule = always(RuleValue::None);
        assert!(evaluate("scope-empty", &rule, &parse("feat: x")).valid);
        assert!(!evaluate("scope-empty", &rule, &parse("feat(sdk): x")).valid);
    }

    #[test]
    fn test_subject_max_length() {
        let rule = always(RuleValue::Length(10));
        assert!(evaluate("subject-max-length", &rule, &parse("feat: 0123456789")).valid);
        let outcome = evaluate("subject-max-length", &rule, &parse("feat: 0123456789a"));
        assert!(!outcome.valid);
        assert_eq!(
            outcome.message.as_deref(),
            Some("subject must not be longer than 10 characters, current length is 11")
        );
    }

    #[test]
    fn test_min_length() {
        let rule = always(RuleValue::Length(5));
        assert!(!evaluate("subject-min-length", &rule, &parse("feat: abc")).valid);
        assert!(evaluate("subject-min-length", &rule, &parse("feat: abcde")).valid);
    }

    #[test]
    fn test_body_max_line_length() {
        let rule = always(RuleValue::Length(10));
        assert!(evaluate("body-max-line-length", &rule, &parse("fix: x\n\nshort\nlines")).valid);
        let long_line = parse("fix: x\n\nthis line is long");
        assert!(!evaluate("body-max-line-length", &rule, &long_line).valid);
        assert!(evaluate("body-max-line-length", &rule, &parse("fix: x")).valid);
    }

    #[test]
    fn test_leading_blank() {
        let rule = always(RuleValue::None);
        assert!(evaluate("body-leading-blank", &rule, &parse("fix: x\n\nbody")).valid);
        assert!(!evaluate("body-leading-blank", &rule, &parse("fix: x\nbody")).valid);
        assert!(evaluate("body-leading-blank", &rule, &parse("fix: x")).valid);
        assert!(!evaluate("footer-leading-blank", &rule, &parse("fix: x\n\nbody\nRefs: #1")).valid);
    }

    #[test]
    fn test_subject_case() {
        let rule = always(RuleValue::Cases(vec![TextCase::LowerCase]));
        assert!(evaluate("subject-case", &rule, &parse("feat: add client")).valid);
        assert!(!evaluate("subject-case", &rule, &parse("feat: Add client")).valid);
        assert!(!evaluate("subject-case", &rule, &parse("feat: add gRPC client")).valid);
        assert!(evaluate("subject-case", &rule, &parse("feat: 2 new clients")).valid);
    }

    #[test]
    fn test_subject_case_upper_case_after_leading_symbol() {
        let rule = always(RuleValue::Cases(vec![TextCase::LowerCase]));
        for message in [
            "feat(sdk): 2FA Support",
            "feat(sdk): \"Quoted\" Thing",
            "feat(sdk): `Api` Client",
        ] {
            assert!(!evaluate("subject-case", &rule, &parse(message)).valid, "{}", message);
        }
        assert!(evaluate("subject-case", &rule, &parse("feat(sdk): `api` client")).valid);
    }

    #[test]
    fn test_subject_case_never_skips_initial_letter_cases() {
        let rule = never(RuleValue::Cases(vec![
            TextCase::SentenceCase,
            TextCase::StartCase,
            TextCase::UpperCase,
        ]));
        assert!(evaluate("subject-case", &rule, &parse("feat: 2 new clients")).valid);
        assert!(evaluate("subject-case", &rule, &parse("feat: `Api` client")).valid);
        assert!(!evaluate("subject-case", &rule, &parse("feat: 2FA")).valid);
    }

    #[test]
    fn test_subject_case_never() {
        let rule = never(RuleValue::Cases(vec![
            TextCase::SentenceCase,
            TextCase::UpperCase,
        ]));
        assert!(evaluate("subject-case", &rule, &parse("feat: add client")).valid);
        let outcome = evaluate("subject-case", &rule, &parse("feat: Add client"));
        assert!(!outcome.valid);
        assert_eq!(
            outcome.message.as_deref(),
            Some("subject must not be sentence-case, upper-case")
        );
    }

    #[test]
    fn test_full_stop() {
        let rule = never(RuleValue::Text(".".to_string()));
        assert!(!evaluate("subject-full-stop", &rule, &parse("feat: add client.")).valid);
        assert!(evaluate("subject-full-stop", &rule, &parse("feat: add client")).valid);
    }

    #[test]
    fn test_header_trim() {
        let rule = always(RuleValue::None);
        assert!(evaluate("header-trim", &rule, &parse("feat: x")).valid);
        assert!(!evaluate("header-trim", &rule, &parse(" feat: x")).valid);
    }

    #[test]
    fn test_check_spec() {
        let ok = always(RuleValue::Length(72));
        assert!(check_spec("header-max-length", &ok).is_ok());

        let wrong = always(RuleValue::Text("x".to_string()));
        assert!(matches!(
            check_spec("header-max-length", &wrong),
            Err(ConfigError::InvalidRule { .. })
        ));

        assert!(matches!(
            check_spec("header-max-lenght", &ok),
            Err(ConfigError::UnknownRule { .. })
        ));

        assert!(check_spec("type-enum", &RuleSpec::disabled()).is_ok());
    }

    #[test]
    fn test_function_rule_names() {
        assert_eq!(
            value_kind("function-rules/header-max-length"),
            Some(ValueKind::Function)
        );
        assert_eq!(value_kind("function-rules/"), None);
    }
}
