// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Layered rule sets.

use std::collections::BTreeMap;

use super::spec::RuleSpec;

/// Rules declared locally on top of the rules of the extended presets.
///
/// Lookup is two-level: a local entry replaces the base entry of the same
/// name entirely, otherwise the base entry applies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    base: BTreeMap<String, RuleSpec>,
    overrides: BTreeMap<String, RuleSpec>,
}

impl RuleSet {
    /// Create an empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a rule set on top of a base mapping.
    pub fn extending(base: BTreeMap<String, RuleSpec>) -> Self {
        Self {
            base,
            overrides: BTreeMap::new(),
        }
    }

    /// Layer another base mapping; its entries replace earlier base entries.
    pub fn extend_base(&mut self, base: BTreeMap<String, RuleSpec>) {
        self.base.extend(base);
    }

    /// Declare a local rule. A later declaration of the same name wins.
    pub fn set(&mut self, name: impl Into<String>, spec: RuleSpec) {
        self.overrides.insert(name.into(), spec);
    }

    /// Builder form of [`RuleSet::set`].
    pub fn with(mut self, name: impl Into<String>, spec: RuleSpec) -> Self {
        self.set(name, spec);
        self
    }

    /// Resolve a rule by name.
    pub fn get(&self, name: &str) -> Option<&RuleSpec> {
        self.overrides.get(name).or_else(|| self.base.get(name))
    }

    /// Whether the rule comes from the local declarations.
    pub fn is_overridden(&self, name: &str) -> bool {
        self.overrides.contains_key(name)
    }

    /// Every resolved rule, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RuleSpec)> {
        let mut names: Vec<&String> = self.base.keys().chain(self.overrides.keys()).collect();
        names.sort();
        names.dedup();
        names.into_iter().filter_map(move |name| {
            self.get(name).map(|spec| (name.as_str(), spec))
        })
    }

    /// Rules that take part in linting.
    pub fn enabled(&self) -> impl Iterator<Item = (&str, &RuleSpec)> {
        self.iter().filter(|(_, spec)| spec.is_enabled())
    }

    /// Number of resolved rules.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Whether no rule is declared at all.
    pub fn is_empty(&self) -> bool {
        self.base.is_empty() && self.overrides.is_empty()
    }
}
