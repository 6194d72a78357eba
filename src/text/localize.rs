// SPDX-FileCopyrightText: 2025 Hong Minhee <https://hongminhee.org/>
// SPDX-License-Identifier: GPL-3.0-or-later
//! Optional translation of display strings.
//!
//! Every function that produces display text can take an
//! `Option<&dyn Localizer>`. Without one, strings pass through unchanged.

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::{Captures, Regex};

/// Positional placeholder such as `{0}`.
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(\d+)\}").expect("placeholder pattern is valid"));

/// Looks up display strings for keys.
pub trait Localizer {
    /// Translate `key`. Unknown keys should come back unchanged.
    fn lookup(&self, key: &str) -> String;

    /// Translate `key` and substitute `args` into its `{0}`, `{1}`, ...
    /// placeholders.
    fn lookup_with_args(&self, key: &str, args: &[&str]) -> String {
        format_positional(&self.lookup(key), args)
    }
}

impl<F> Localizer for F
where
    F: Fn(&str) -> String,
{
    fn lookup(&self, key: &str) -> String {
        self(key)
    }
}

/// Translate `value`, or return it as-is when there is no localizer.
pub fn localize(value: &str, localizer: Option<&dyn Localizer>) -> String {
    match localizer {
        Some(localizer) => localizer.lookup(value),
        None => value.to_string(),
    }
}

/// Translate `value` with positional arguments.
///
/// Without a localizer, `args` are substituted directly into `value`.
///
/// ```
/// use wordform::localize_with_args;
///
/// assert_eq!(localize_with_args("{0} of {1}", None, &["3", "5"]), "3 of 5");
/// ```
pub fn localize_with_args(value: &str, localizer: Option<&dyn Localizer>, args: &[&str]) -> String {
    match localizer {
        Some(localizer) => localizer.lookup_with_args(value, args),
        None => format_positional(value, args),
    }
}

/// Replace `{n}` placeholders with `args[n]`. Placeholders without a
/// matching argument are left alone.
pub fn format_positional(template: &str, args: &[&str]) -> String {
    if args.is_empty() {
        return template.to_string();
    }

    PLACEHOLDER
        .replace_all(template, |caps: &Captures| {
            caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|index| args.get(index))
                .map_or_else(|| caps[0].to_string(), |arg| (*arg).to_string())
        })
        .into_owned()
}

/// A translation table. Keys without an entry translate to themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: IndexMap<String, String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a translation.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Catalog
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl Localizer for Catalog {
    fn lookup(&self, key: &str) -> String {
        self.get(key).unwrap_or(key).to_string()
    }
}
