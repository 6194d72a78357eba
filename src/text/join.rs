// SPDX-FileCopyrightText: 2025 Hong Minhee <https://hongminhee.org/>
// SPDX-License-Identifier: GPL-3.0-or-later
//! Separator-aware concatenation.

/// Append `appendation` to `value`, putting `separator` between them unless
/// one side already provides it.
///
/// When both sides provide the separator, the duplicate is dropped from
/// `appendation`. Nothing is inserted when `value` is empty, and an empty
/// `appendation` leaves `value` as it is.
///
/// ```
/// use wordform::append_with_separator;
///
/// assert_eq!(
///     append_with_separator(r"c:\", r"\users\administrator", r"\"),
///     r"c:\users\administrator"
/// );
/// assert_eq!(append_with_separator("a", "b", "/"), "a/b");
/// ```
pub fn append_with_separator(value: &str, appendation: &str, separator: &str) -> String {
    if appendation.is_empty() {
        return value.to_string();
    }

    let appendation = if value.ends_with(separator) {
        appendation.strip_prefix(separator).unwrap_or(appendation)
    } else {
        appendation
    };

    if value.is_empty() || value.ends_with(separator) || appendation.starts_with(separator) {
        format!("{value}{appendation}")
    } else {
        format!("{value}{separator}{appendation}")
    }
}
