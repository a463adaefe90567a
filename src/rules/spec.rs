// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule specification types.

use serde::{Serialize, Serializer};

use crate::commit::ParsedCommit;

use super::case::TextCase;

/// Level at which a rule violation is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The rule is not evaluated.
    Disabled,
    /// Violations are reported but do not fail the lint.
    Warning,
    /// Violations fail the lint.
    Error,
}

impl Severity {
    /// Numeric level as written in configuration files (0, 1, 2).
    pub fn level(&self) -> u8 {
        match self {
            Severity::Disabled => 0,
            Severity::Warning => 1,
            Severity::Error => 2,
        }
    }

    /// Parse a numeric level.
    pub fn from_level(level: i64) -> Option<Self> {
        match level {
            0 => Some(Severity::Disabled),
            1 => Some(Severity::Warning),
            2 => Some(Severity::Error),
            _ => None,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Severity::Disabled => "disabled",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        f.write_str(s)
    }
}

/// Whether a rule's condition must hold or must not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Applicability {
    #[default]
    Always,
    Never,
}

impl Applicability {
    /// Whether the condition is negated.
    pub fn is_never(&self) -> bool {
        matches!(self, Applicability::Never)
    }
}

impl std::str::FromStr for Applicability {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "always" => Ok(Applicability::Always),
            "never" => Ok(Applicability::Never),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for Applicability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Applicability::Always => f.write_str("always"),
            Applicability::Never => f.write_str("never"),
        }
    }
}

/// Result of evaluating one rule against one commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    /// Whether the rule passed.
    pub valid: bool,
    /// Human-readable explanation, used when the rule fails.
    pub message: Option<String>,
}

impl RuleOutcome {
    /// A passing outcome.
    pub fn pass() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    /// A failing outcome with a message.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
        }
    }

    /// An outcome that passes when `valid` holds, with a message kept for
    /// the failing case.
    pub fn check(valid: bool, message: impl Into<String>) -> Self {
        Self {
            valid,
            message: Some(message.into()),
        }
    }
}

/// Signature of a function rule.
pub type RuleFn = fn(&ParsedCommit, Applicability) -> RuleOutcome;

/// A function rule together with the name it is registered under.
#[derive(Debug, Clone, Copy)]
pub struct NamedFn {
    pub name: &'static str,
    pub func: RuleFn,
}

impl PartialEq for NamedFn {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for NamedFn {}

impl Serialize for NamedFn {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name)
    }
}

/// Rule-specific parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RuleValue {
    /// The rule takes no parameter.
    None,
    /// A length bound in characters.
    Length(usize),
    /// An ordered set of allowed values.
    Enum(Vec<String>),
    /// Accepted text cases.
    Cases(Vec<TextCase>),
    /// A literal, e.g. the full stop character.
    Text(String),
    /// A function rule.
    Function(NamedFn),
}

impl RuleValue {
    /// Short description of the value's shape, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            RuleValue::None => "nothing",
            RuleValue::Length(_) => "a length",
            RuleValue::Enum(_) => "a list of values",
            RuleValue::Cases(_) => "a list of cases",
            RuleValue::Text(_) => "a string",
            RuleValue::Function(_) => "a function",
        }
    }
}

impl std::fmt::Display for RuleValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleValue::None => Ok(()),
            RuleValue::Length(n) => write!(f, "{}", n),
            RuleValue::Enum(values) => write!(f, "[{}]", values.join(", ")),
            RuleValue::Cases(cases) => {
                let names: Vec<&str> = cases.iter().map(|c| c.as_str()).collect();
                write!(f, "[{}]", names.join(", "))
            }
            RuleValue::Text(text) => write!(f, "{:?}", text),
            RuleValue::Function(func) => write!(f, "fn {}", func.name),
        }
    }
}

/// Severity, applicability and parameter of one rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleSpec {
    pub severity: Severity,
    pub applicability: Applicability,
    pub value: RuleValue,
}

impl RuleSpec {
    /// Create a rule specification.
    pub fn new(severity: Severity, applicability: Applicability, value: RuleValue) -> Self {
        Self {
            severity,
            applicability,
            value,
        }
    }

    /// A rule that is switched off.
    pub fn disabled() -> Self {
        Self::new(Severity::Disabled, Applicability::Always, RuleValue::None)
    }

    /// Whether the rule takes part in linting.
    pub fn is_enabled(&self) -> bool {
        self.severity != Severity::Disabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_levels() {
        assert_eq!(Severity::from_level(0), Some(Severity::Disabled));
        assert_eq!(Severity::from_level(1), Some(Severity::Warning));
        assert_eq!(Severity::from_level(2), Some(Severity::Error));
        assert_eq!(Severity::from_level(3), None);
        assert_eq!(Severity::Error.level(), 2);
    }

    #[test]
    fn test_applicability_from_str() {
        assert_eq!("always".parse::<Applicability>(), Ok(Applicability::Always));
        assert_eq!("never".parse::<Applicability>(), Ok(Applicability::Never));
        assert!("sometimes".parse::<Applicability>().is_err());
    }

    #[test]
    fn test_disabled_spec() {
        assert!(!RuleSpec::disabled().is_enabled());
        let spec = RuleSpec::new(
            Severity::Warning,
            Applicability::Always,
            RuleValue::Length(72),
        );
        assert!(spec.is_enabled());
    }

    #[test]
    fn test_value_display() {
        assert_eq!(RuleValue::Length(72).to_string(), "72");
        assert_eq!(
            RuleValue::Enum(vec!["deps".to_string(), "sdk".to_string()]).to_string(),
            "[deps, sdk]"
        );
        assert_eq!(RuleValue::Text(".".to_string()).to_string(), "\".\"");
        assert_eq!(RuleValue::None.to_string(), "");
    }

    #[test]
    fn test_outcome_constructors() {
        assert!(RuleOutcome::pass().valid);
        let failed = RuleOutcome::fail("nope");
        assert!(!failed.valid);
        assert_eq!(failed.message.as_deref(), Some("nope"));
    }
}
