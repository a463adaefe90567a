// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines the structure of `clint.toml`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{ConfigError, Result};
use crate::rules::{
    functions, presets, value_kind, Applicability, RuleSet, RuleSpec, RuleValue, Severity,
    TextCase, ValueKind,
};

/// The main configuration structure for clint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClintConfig {
    /// Presets whose rules apply unless overridden, later ones winning.
    pub extends: Vec<String>,

    /// Whether merge, revert and autosquash messages are skipped.
    pub default_ignores: bool,

    /// Additional regexes for messages to skip.
    pub ignores: Vec<String>,

    /// Link printed along with failures.
    pub help_url: Option<String>,

    /// Local rule declarations, replacing preset entries of the same name.
    pub rules: BTreeMap<String, RuleEntry>,
}

impl Default for ClintConfig {
    fn default() -> Self {
        Self {
            extends: vec!["conventional".to_string()],
            default_ignores: true,
            ignores: Vec::new(),
            help_url: None,
            rules: BTreeMap::new(),
        }
    }
}

impl ClintConfig {
    /// Load configuration from the default locations.
    pub fn load() -> Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        super::loader::load_config_from(path)
    }

    /// Resolve presets and local rules into a rule set.
    pub fn rule_set(&self) -> Result<RuleSet> {
        let mut set = RuleSet::new();

        for name in &self.extends {
            let preset = presets::lookup(name).ok_or_else(|| ConfigError::UnknownPreset {
                name: name.clone(),
            })?;
            tracing::debug!("Extending preset '{}'", name);
            set.extend_base(preset);
        }

        for (name, entry) in &self.rules {
            set.set(name.clone(), entry.to_spec(name)?);
        }

        Ok(set)
    }
}

/// A rule as written in the configuration: `[level, when?, value?]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<toml::Value>", into = "Vec<toml::Value>")]
pub struct RuleEntry {
    /// 0 (disabled), 1 (warning) or 2 (error).
    pub level: Severity,
    /// `always` or `never`.
    pub when: Applicability,
    /// Rule-specific parameter.
    pub value: Option<toml::Value>,
}

impl RuleEntry {
    /// Create an entry.
    pub fn new(level: Severity, when: Applicability, value: Option<toml::Value>) -> Self {
        Self { level, when, value }
    }

    /// Convert into a rule specification, checking the value against what
    /// the rule expects.
    pub fn to_spec(&self, name: &str) -> std::result::Result<RuleSpec, ConfigError> {
        let kind = value_kind(name).ok_or_else(|| ConfigError::UnknownRule {
            rule: name.to_string(),
        })?;

        let invalid = |message: &str| ConfigError::InvalidRule {
            rule: name.to_string(),
            message: message.to_string(),
        };

        if self.level == Severity::Disabled && self.value.is_none() {
            return Ok(RuleSpec::new(self.level, self.when, RuleValue::None));
        }

        let value = match (kind, &self.value) {
            (ValueKind::None, _) => RuleValue::None,

            (ValueKind::Length, Some(toml::Value::Integer(n))) => {
                let n = usize::try_from(*n).map_err(|_| invalid("length must not be negative"))?;
                RuleValue::Length(n)
            }
            (ValueKind::Length, _) => return Err(invalid("expected a length")),

            (ValueKind::Enum, Some(toml::Value::Array(items))) => {
                let values =
                    strings(items).ok_or_else(|| invalid("expected a list of strings"))?;
                RuleValue::Enum(values)
            }
            (ValueKind::Enum, _) => return Err(invalid("expected a list of strings")),

            (ValueKind::Cases, Some(value)) => {
                let names = match value {
                    toml::Value::String(s) => Some(vec![s.clone()]),
                    toml::Value::Array(items) => strings(items),
                    _ => None,
                }
                .ok_or_else(|| invalid("expected a case or a list of cases"))?;

                let cases = names
                    .iter()
                    .map(|n| {
                        n.parse::<TextCase>()
                            .map_err(|_| invalid(&format!("unknown case '{}'", n)))
                    })
                    .collect::<std::result::Result<Vec<_>, _>>()?;
                RuleValue::Cases(cases)
            }
            (ValueKind::Cases, None) => return Err(invalid("expected a case or a list of cases")),

            (ValueKind::Text, Some(toml::Value::String(s))) => RuleValue::Text(s.clone()),
            (ValueKind::Text, None) => RuleValue::Text(".".to_string()),
            (ValueKind::Text, _) => return Err(invalid("expected a string")),

            (ValueKind::Function, Some(toml::Value::String(f))) => {
                let function = functions::lookup(f)
                    .ok_or_else(|| ConfigError::UnknownFunction { name: f.clone() })?;
                RuleValue::Function(function)
            }
            (ValueKind::Function, _) => {
                return Err(invalid("expected the name of a rule function"))
            }
        };

        Ok(RuleSpec::new(self.level, self.when, value))
    }
}

fn strings(items: &[toml::Value]) -> Option<Vec<String>> {
    items
        .iter()
        .map(|item| item.as_str().map(str::to_string))
        .collect()
}

impl TryFrom<Vec<toml::Value>> for RuleEntry {
    type Error = String;

    fn try_from(items: Vec<toml::Value>) -> std::result::Result<Self, Self::Error> {
        let mut items = items.into_iter();

        let level = match items.next() {
            Some(toml::Value::Integer(level)) => Severity::from_level(level)
                .ok_or_else(|| format!("level must be 0, 1 or 2, got {}", level))?,
            Some(other) => return Err(format!("level must be an integer, got {}", other)),
            None => return Err("rule entry must start with a level".to_string()),
        };

        let when = match items.next() {
            Some(toml::Value::String(when)) => when
                .parse::<Applicability>()
                .map_err(|_| format!("applicability must be 'always' or 'never', got '{}'", when))?,
            Some(other) => return Err(format!("applicability must be a string, got {}", other)),
            None => Applicability::Always,
        };

        let value = items.next();

        if items.next().is_some() {
            return Err("rule entry has more than three elements".to_string());
        }

        Ok(Self { level, when, value })
    }
}

impl From<RuleEntry> for Vec<toml::Value> {
    fn from(entry: RuleEntry) -> Self {
        let mut items = vec![
            toml::Value::Integer(i64::from(entry.level.level())),
            toml::Value::String(entry.when.to_string()),
        ];
        items.extend(entry.value);
        items
    }
}
