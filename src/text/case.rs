// SPDX-FileCopyrightText: 2025 Hong Minhee <https://hongminhee.org/>
// SPDX-License-Identifier: GPL-3.0-or-later
//! Capitalization styles.
//!
//! Word boundaries are whatever the `regex` crate treats as `\b` around runs
//! of `\w` characters; there is no language-specific segmentation.
//!
//! Case folds use simple, locale-invariant mappings: each character maps to
//! exactly one character. A character whose full mapping expands (`ß` to
//! `SS`, `İ` to `i̇`) is kept as it is, so no style changes the length of
//! its input in characters.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

/// First character of every word.
static WORD_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w").expect("word start pattern is valid"));

/// Function words and contraction suffixes that stay lowercase in
/// [`CapitalizationStyle::TitleCaseExceptConjunctions`].
static CONJUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\s(?:of|in|by|and)|'[st])\b").expect("conjunction pattern is valid")
});

/// First letter of the string and of every sentence after `.`, `;` or `:`.
static SENTENCE_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<lead>(?:^|[.;:])\s*)(?P<letter>\p{Ll})")
        .expect("sentence start pattern is valid")
});

/// Uppercase `c` if it has a one-character uppercase form.
fn upper_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Lowercase `c` if it has a one-character lowercase form.
fn lower_char(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

fn to_upper(value: &str) -> String {
    value.chars().map(upper_char).collect()
}

fn to_lower(value: &str) -> String {
    value.chars().map(lower_char).collect()
}

/// Capitalization style for [`to_case`].
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum CapitalizationStyle {
    /// All letters lowercase.
    Lowercase,
    /// All letters uppercase.
    Uppercase,
    /// The first letter of every word uppercase.
    #[default]
    TitleCase,
    /// Title case, except that `of`, `in`, `by`, `and` and the `'s`/`'t`
    /// suffixes stay lowercase.
    TitleCaseExceptConjunctions,
    /// The first letter of every sentence uppercase; everything else
    /// lowercase.
    SentenceCase,
}

impl CapitalizationStyle {
    /// All styles, in declaration order.
    pub const ALL: [CapitalizationStyle; 5] = [
        CapitalizationStyle::Lowercase,
        CapitalizationStyle::Uppercase,
        CapitalizationStyle::TitleCase,
        CapitalizationStyle::TitleCaseExceptConjunctions,
        CapitalizationStyle::SentenceCase,
    ];

    /// The kebab-case name used in configuration files and on the command
    /// line.
    pub fn as_str(self) -> &'static str {
        match self {
            CapitalizationStyle::Lowercase => "lowercase",
            CapitalizationStyle::Uppercase => "uppercase",
            CapitalizationStyle::TitleCase => "title-case",
            CapitalizationStyle::TitleCaseExceptConjunctions => "title-case-except-conjunctions",
            CapitalizationStyle::SentenceCase => "sentence-case",
        }
    }

    /// Apply this style to `value`.
    pub fn apply(self, value: &str) -> String {
        to_case(value, self)
    }
}

impl fmt::Display for CapitalizationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown style name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown capitalization style {0:?}")]
pub struct UnknownStyle(pub String);

impl FromStr for CapitalizationStyle {
    type Err = UnknownStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CapitalizationStyle::ALL
            .into_iter()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| UnknownStyle(s.to_string()))
    }
}

/// Convert `value` to the given capitalization style.
///
/// Empty input yields an empty string for every style.
pub fn to_case(value: &str, style: CapitalizationStyle) -> String {
    if value.is_empty() {
        return String::new();
    }

    match style {
        CapitalizationStyle::Lowercase => to_lower(value),
        CapitalizationStyle::Uppercase => to_upper(value),
        CapitalizationStyle::TitleCase => to_title_case(value, false),
        CapitalizationStyle::TitleCaseExceptConjunctions => to_title_case(value, true),
        CapitalizationStyle::SentenceCase => to_sentence_case(value),
    }
}

/// Convert `value` to title case.
///
/// Input that is entirely upper- or lowercase is folded to lowercase first;
/// mixed-case input keeps its existing capitals. The first character of
/// every word is then uppercased. With `lower_conjunctions`, the words `of`,
/// `in`, `by` and `and` (when preceded by whitespace) and the suffixes `'s`
/// and `'t` are lowercased again.
///
/// ```
/// use wordform::to_title_case;
///
/// assert_eq!(to_title_case("THE KING'S MEN", false), "The King'S Men");
/// assert_eq!(to_title_case("THE KING'S MEN", true), "The King's Men");
/// assert_eq!(to_title_case("iPhone sales", false), "IPhone Sales");
/// ```
pub fn to_title_case(value: &str, lower_conjunctions: bool) -> String {
    if value.is_empty() {
        return String::new();
    }

    let folded;
    let value = if is_all_same_case(value) {
        folded = to_lower(value);
        folded.as_str()
    } else {
        value
    };

    let titled = WORD_START.replace_all(value, |caps: &Captures| to_upper(&caps[0]));

    if !lower_conjunctions {
        return titled.into_owned();
    }

    CONJUNCTION
        .replace_all(&titled, |caps: &Captures| to_lower(&caps[0]))
        .into_owned()
}

/// Convert `value` to sentence case.
///
/// Everything is lowercased, then the first letter of the string and the
/// first letter after each `.`, `;` or `:` (skipping any whitespace) is
/// uppercased.
///
/// ```
/// use wordform::to_sentence_case;
///
/// assert_eq!(to_sentence_case("hello. world; there"), "Hello. World; There");
/// ```
pub fn to_sentence_case(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }

    let lowered = to_lower(value);
    SENTENCE_START
        .replace_all(&lowered, |caps: &Captures| {
            format!("{}{}", &caps["lead"], to_upper(&caps["letter"]))
        })
        .into_owned()
}

/// Whether `value` contains no mixed casing, i.e. it is unchanged by either
/// uppercasing or lowercasing it.
///
/// Strings without cased characters (digits, punctuation, the empty string)
/// count as same-case.
pub fn is_all_same_case(value: &str) -> bool {
    value == to_upper(value) || value == to_lower(value)
}
