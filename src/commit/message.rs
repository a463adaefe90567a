// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message structure and parsing.

use crate::error::{ClintError, CommitError, Result};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for the conventional header: `type(scope)!: subject`.
    static ref HEADER_REGEX: Regex =
        Regex::new(r"^(?P<type>\w*)(?:\((?P<scope>.*)\))?(?P<breaking>!)?: (?P<subject>.*)$")
            .expect("header regex is valid");

    /// Regex for a footer trailer line (`Token: value` or `Token #value`).
    static ref FOOTER_REGEX: Regex =
        Regex::new(r"^(?:BREAKING[ -]CHANGE|[\w-]+)(?:: | #)").expect("footer regex is valid");
}

/// Line git uses to mark the end of the editable message.
const SCISSORS: &str = "# ------------------------ >8 ------------------------";

/// A commit message split into its conventional parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommit {
    /// The cleaned message (comments removed) the other fields come from.
    pub raw: String,
    /// First line of the message, untrimmed.
    pub header: String,
    /// Commit type, if the header is in conventional form.
    pub commit_type: Option<String>,
    /// Optional scope.
    pub scope: Option<String>,
    /// Subject; empty when the header is not in conventional form.
    pub subject: String,
    /// Optional body.
    pub body: Option<String>,
    /// Optional footer (trailers, breaking change notes).
    pub footer: Option<String>,
    /// Whether this is a breaking change.
    pub is_breaking: bool,
}

impl ParsedCommit {
    /// Parse a raw commit message.
    ///
    /// Lines starting with `#` are dropped and everything below git's
    /// scissors line is ignored, the same cleanup `git commit` applies.
    pub fn parse(message: &str) -> Result<Self> {
        let raw = clean_message(message);

        if raw.trim().is_empty() {
            return Err(ClintError::Commit(CommitError::EmptyMessage));
        }

        let lines: Vec<&str> = raw.lines().collect();
        let header = lines.first().copied().unwrap_or_default().to_string();

        let (commit_type, scope, subject, bang) = match HEADER_REGEX.captures(&header) {
            Some(captures) => (
                captures
                    .name("type")
                    .map(|m| m.as_str().to_string())
                    .filter(|s| !s.is_empty()),
                captures
                    .name("scope")
                    .map(|m| m.as_str().to_string())
                    .filter(|s| !s.is_empty()),
                captures
                    .name("subject")
                    .map(|m| m.as_str().to_string())
                    .unwrap_or_default(),
                captures.name("breaking").is_some(),
            ),
            None => (None, None, String::new(), false),
        };

        let rest = lines.get(1..).unwrap_or_default();
        let footer_start = footer_start(rest);
        let (body_lines, footer_lines) = rest.split_at(footer_start.unwrap_or(rest.len()));

        let body = join_block(body_lines);
        let footer = join_block(footer_lines);

        let is_breaking = bang
            || footer
                .as_ref()
                .map(|f| f.contains("BREAKING CHANGE:") || f.contains("BREAKING-CHANGE:"))
                .unwrap_or(false);

        Ok(Self {
            raw,
            header,
            commit_type,
            scope,
            subject,
            body,
            footer,
            is_breaking,
        })
    }

    /// Header length in characters.
    pub fn header_len(&self) -> usize {
        self.header.chars().count()
    }

    /// Whether the line right after the header is blank.
    ///
    /// Only meaningful when a body or footer is present.
    pub fn has_blank_after_header(&self) -> bool {
        self.raw
            .lines()
            .nth(1)
            .map(|line| line.trim().is_empty())
            .unwrap_or(true)
    }

    /// Whether the line right before the footer is blank.
    ///
    /// Returns `true` when there is no footer.
    pub fn has_blank_before_footer(&self) -> bool {
        let lines: Vec<&str> = self.raw.lines().collect();
        let rest = lines.get(1..).unwrap_or_default();
        match footer_start(rest) {
            Some(0) => lines.get(1).map(|l| l.trim().is_empty()).unwrap_or(true),
            Some(index) => rest
                .get(index - 1)
                .map(|l| l.trim().is_empty())
                .unwrap_or(true),
            None => true,
        }
    }
}

impl std::str::FromStr for ParsedCommit {
    type Err = ClintError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Remove comment lines and the scissors section, and trim the ends.
fn clean_message(message: &str) -> String {
    let mut kept = Vec::new();
    for line in message.lines() {
        if line == SCISSORS {
            break;
        }
        if line.starts_with('#') {
            continue;
        }
        kept.push(line.trim_end_matches('\r'));
    }

    let start = kept
        .iter()
        .position(|l| !l.trim().is_empty())
        .unwrap_or(kept.len());
    let end = kept
        .iter()
        .rposition(|l| !l.trim().is_empty())
        .map(|i| i + 1)
        .unwrap_or(start);

    kept.get(start..end).unwrap_or_default().join("\n")
}

/// Index (into the lines after the header) where the footer begins.
fn footer_start(rest: &[&str]) -> Option<usize> {
    rest.iter().position(|line| FOOTER_REGEX.is_match(line))
}

/// Join a block of lines, dropping surrounding blank lines.
fn join_block(lines: &[&str]) -> Option<String> {
    let text = lines.join("\n");
    let text = text.trim_matches(|c| c == '\n' || c == '\r');
    if text.trim().is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
