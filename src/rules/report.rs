// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Lint reports.

use crate::cli::args::OutputFormat;
use console::{style, Style};
use serde::Serialize;

use super::spec::Severity;

/// A single failed rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LintIssue {
    /// Name of the rule that failed.
    pub rule: String,
    /// Human-readable message.
    pub message: String,
    /// Severity the rule was configured with.
    pub severity: Severity,
}

impl LintIssue {
    /// Whether this issue fails the lint.
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Format the issue for terminal output.
    pub fn format(&self) -> String {
        let (prefix, rule_style) = if self.is_error() {
            (style("✖").red().bold(), Style::new().red())
        } else {
            (style("⚠").yellow().bold(), Style::new().yellow())
        };

        format!(
            "{} {} {}",
            prefix,
            self.message,
            rule_style.apply_to(format!("[{}]", self.rule))
        )
    }
}

/// Result of linting one commit message.
#[derive(Debug, Clone, Serialize)]
pub struct LintReport {
    /// The message that was linted.
    pub input: String,
    /// Commit SHA when linting an existing commit.
    pub commit_sha: Option<String>,
    /// Whether the message matched an ignore pattern and was skipped.
    pub ignored: bool,
    /// Error-severity failures.
    pub errors: Vec<LintIssue>,
    /// Warning-severity failures.
    pub warnings: Vec<LintIssue>,
    /// Where to point users for the commit conventions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help_url: Option<String>,
}

impl LintReport {
    /// Create an empty report.
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            commit_sha: None,
            ignored: false,
            errors: Vec::new(),
            warnings: Vec::new(),
            help_url: None,
        }
    }

    /// Create a report for a skipped message.
    pub fn ignored(input: impl Into<String>) -> Self {
        Self {
            ignored: true,
            ..Self::new(input)
        }
    }

    /// Record a failed rule under its severity.
    pub fn push(&mut self, issue: LintIssue) {
        match issue.severity {
            Severity::Error => self.errors.push(issue),
            Severity::Warning => self.warnings.push(issue),
            Severity::Disabled => {}
        }
    }

    /// Check if the lint passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get the total number of issues.
    pub fn issue_count(&self) -> usize {
        self.errors.len() + self.warnings.len()
    }

    /// First line of the linted message.
    pub fn header(&self) -> &str {
        self.input.lines().next().unwrap_or("")
    }

    /// Print the report to stdout.
    pub fn print(&self, format: Option<OutputFormat>) {
        match format {
            Some(OutputFormat::Json) => self.print_json(),
            _ => self.print_text(),
        }
    }

    /// Print in text format.
    fn print_text(&self) {
        let status = if self.ignored {
            style("-").dim()
        } else if self.is_valid() {
            style("✔").green().bold()
        } else {
            style("✖").red().bold()
        };

        match self.commit_sha {
            Some(ref sha) => {
                let short_sha = sha.get(..7).unwrap_or(sha);
                println!("{} {} {}", status, style(short_sha).cyan(), self.header());
            }
            None => println!("{} {}", status, self.header()),
        }

        for error in &self.errors {
            println!("  {}", error.format());
        }
        for warning in &self.warnings {
            println!("  {}", warning.format());
        }

        if self.issue_count() > 0 {
            println!("  {}", style(self.summary()).dim());
            if let Some(ref url) = self.help_url {
                println!("  {} {}", style("ⓘ Get help:").dim(), url);
            }
        }
    }

    /// Print in JSON format.
    fn print_json(&self) {
        let json = serde_json::json!({
            "valid": self.is_valid(),
            "report": self,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&json).unwrap_or_default()
        );
    }

    /// Get a summary string.
    pub fn summary(&self) -> String {
        if self.ignored {
            "Ignored".to_string()
        } else if self.is_valid() {
            if self.warnings.is_empty() {
                "Valid".to_string()
            } else {
                format!("Valid ({} warnings)", self.warnings.len())
            }
        } else {
            format!(
                "Invalid ({} errors, {} warnings)",
                self.errors.len(),
                self.warnings.len()
            )
        }
    }
}
