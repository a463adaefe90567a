// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Text case checks used by the `*-case` rules.

use serde::Serialize;

/// A text case a field can be required to follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextCase {
    LowerCase,
    UpperCase,
    CamelCase,
    KebabCase,
    PascalCase,
    SentenceCase,
    SnakeCase,
    StartCase,
}

impl TextCase {
    /// Name as written in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            TextCase::LowerCase => "lower-case",
            TextCase::UpperCase => "upper-case",
            TextCase::CamelCase => "camel-case",
            TextCase::KebabCase => "kebab-case",
            TextCase::PascalCase => "pascal-case",
            TextCase::SentenceCase => "sentence-case",
            TextCase::SnakeCase => "snake-case",
            TextCase::StartCase => "start-case",
        }
    }

    /// Check whether `input` already is in this case.
    ///
    /// `lower-case` and `upper-case` look at every character. For the other
    /// cases, empty input and input starting with a digit always match.
    pub fn matches(&self, input: &str) -> bool {
        let input = input.trim();
        match self {
            TextCase::LowerCase => return !input.chars().any(char::is_uppercase),
            TextCase::UpperCase => return !input.chars().any(char::is_lowercase),
            _ => {}
        }

        let converted = self.convert(input);

        if converted.is_empty() || converted.starts_with(|c: char| c.is_ascii_digit()) {
            return true;
        }

        converted == input
    }

    /// Whether the case is decided by the first letter of the text.
    pub fn depends_on_first_letter(&self) -> bool {
        matches!(
            self,
            TextCase::SentenceCase
                | TextCase::StartCase
                | TextCase::PascalCase
                | TextCase::CamelCase
        )
    }

    /// Convert `input` into this case.
    fn convert(&self, input: &str) -> String {
        match self {
            TextCase::LowerCase => input.to_lowercase(),
            TextCase::UpperCase => input.to_uppercase(),
            TextCase::SentenceCase => upper_first(input),
            TextCase::CamelCase => camel_case(input),
            TextCase::PascalCase => upper_first(&camel_case(input)),
            TextCase::KebabCase => join_lower(input, "-"),
            TextCase::SnakeCase => join_lower(input, "_"),
            TextCase::StartCase => words(input)
                .iter()
                .map(|w| upper_first(w))
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

impl std::str::FromStr for TextCase {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lower-case" | "lowercase" => Ok(TextCase::LowerCase),
            "upper-case" | "uppercase" => Ok(TextCase::UpperCase),
            "camel-case" => Ok(TextCase::CamelCase),
            "kebab-case" => Ok(TextCase::KebabCase),
            "pascal-case" => Ok(TextCase::PascalCase),
            "sentence-case" | "sentencecase" => Ok(TextCase::SentenceCase),
            "snake-case" => Ok(TextCase::SnakeCase),
            "start-case" => Ok(TextCase::StartCase),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for TextCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn upper_first(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn camel_case(input: &str) -> String {
    words(input)
        .iter()
        .enumerate()
        .map(|(i, w)| {
            let lower = w.to_lowercase();
            if i == 0 {
                lower
            } else {
                upper_first(&lower)
            }
        })
        .collect()
}

fn join_lower(input: &str, separator: &str) -> String {
    words(input)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Split text into words on separators and case or digit boundaries.
///
/// `fooBar` gives `foo`, `Bar`; `HTTPServer` gives `HTTP`, `Server`.
fn words(input: &str) -> Vec<String> {
    let mut result = Vec::new();

    for chunk in input.split(|c: char| !c.is_alphanumeric()) {
        let chars: Vec<char> = chunk.chars().collect();
        let mut current = String::new();

        for (i, &c) in chars.iter().enumerate() {
            if let Some(&prev) = i.checked_sub(1).and_then(|p| chars.get(p)) {
                let next = chars.get(i + 1).copied();
                let boundary = (prev.is_lowercase() && c.is_uppercase())
                    || (prev.is_uppercase()
                        && c.is_uppercase()
                        && next.map(|n| n.is_lowercase()).unwrap_or(false))
                    || (prev.is_ascii_digit() != c.is_ascii_digit());
                if boundary && !current.is_empty() {
                    result.push(std::mem::take(&mut current));
                }
            }
            current.push(c);
        }

        if !current.is_empty() {
            result.push(current);
        }
    }

    result
}
