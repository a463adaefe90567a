// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Messages that are never linted (merges, reverts, autosquash commits).

use crate::error::{ConfigError, Result};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Messages generated by git or hosting platforms.
    static ref DEFAULT_IGNORES: Vec<Regex> = [
        r"(?m)^((Merge pull request)|(Merge (.*?) into (.*?)|(Merge branch (.*?)))(?:\r?\n)*$)",
        r"(?m)^(Merge tag (.*?))(?:\r?\n)*$",
        r"^(R|r)evert (.*)",
        r"^(amend|fixup|squash)!",
        r"^(Merged (.*?)(in|into) (.*)|Merged PR (.*): (.*))",
        r"^Merge remote-tracking branch(\s*)(.*)",
        r"^Automatic merge(.*)",
        r"^Auto-merged (.*?) into (.*)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("default ignore pattern is valid"))
    .collect();
}

/// Decides whether a message is skipped entirely.
#[derive(Debug, Clone, Default)]
pub struct IgnoreMatcher {
    use_defaults: bool,
    custom: Vec<Regex>,
}

impl IgnoreMatcher {
    /// Build a matcher from the configured patterns.
    pub fn new(use_defaults: bool, patterns: &[String]) -> Result<Self> {
        let custom = patterns
            .iter()
            .map(|p| {
                Regex::new(p).map_err(|e| ConfigError::InvalidIgnore {
                    pattern: p.clone(),
                    message: e.to_string(),
                })
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self {
            use_defaults,
            custom,
        })
    }

    /// Check whether a raw message should be skipped.
    pub fn is_ignored(&self, message: &str) -> bool {
        let message = message.trim();
        let defaults = self.use_defaults && DEFAULT_IGNORES.iter().any(|r| r.is_match(message));
        defaults || self.custom.iter().any(|r| r.is_match(message))
    }
}
