// SPDX-FileCopyrightText: 2025 Hong Minhee <https://hongminhee.org/>
// SPDX-License-Identifier: GPL-3.0-or-later
//! Natural-language comma lists.

use std::borrow::Cow;

use super::localize::{Localizer, localize};

/// Something that may or may not hold text, such as `&str`, `String` or
/// `Option<String>`.
///
/// Absent values are treated like blank strings by [`where_not_blank`] and
/// [`to_comma_list`].
pub trait TextItem {
    /// The text, if any.
    fn as_text(&self) -> Option<&str>;
}

impl TextItem for str {
    fn as_text(&self) -> Option<&str> {
        Some(self)
    }
}

impl TextItem for String {
    fn as_text(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl TextItem for Cow<'_, str> {
    fn as_text(&self) -> Option<&str> {
        Some(self.as_ref())
    }
}

impl<T: TextItem> TextItem for Option<T> {
    fn as_text(&self) -> Option<&str> {
        self.as_ref().and_then(TextItem::as_text)
    }
}

impl<T: TextItem + ?Sized> TextItem for &T {
    fn as_text(&self) -> Option<&str> {
        (**self).as_text()
    }
}

/// Drop absent, empty and whitespace-only items, keeping the order of the
/// rest.
pub fn where_not_blank<I>(items: I) -> impl Iterator<Item = I::Item>
where
    I: IntoIterator,
    I::Item: TextItem,
{
    items
        .into_iter()
        .filter(|item| item.as_text().is_some_and(|text| !text.trim().is_empty()))
}

/// Join `items` into a comma-separated list.
///
/// Blank items are skipped. The final two items are joined with `" and "`
/// when `say_and_before_final` is set, and with `", "` otherwise, so the
/// default rendering of three items is `a, b, c`.
///
/// ```
/// use wordform::to_comma_list;
///
/// assert_eq!(to_comma_list(["a", "b", "c"], false), "a, b, c");
/// assert_eq!(to_comma_list(["a", "b", "c"], true), "a, b and c");
/// assert_eq!(to_comma_list([None, Some(" "), Some("x")], true), "x");
/// ```
pub fn to_comma_list<I>(items: I, say_and_before_final: bool) -> String
where
    I: IntoIterator,
    I::Item: TextItem,
{
    to_comma_list_localized(items, say_and_before_final, None)
}

/// Like [`to_comma_list`], passing the word `"and"` through `localizer`.
///
/// ```
/// use wordform::{Catalog, to_comma_list_localized};
///
/// let catalog: Catalog = [("and", "und")].into_iter().collect();
/// assert_eq!(
///     to_comma_list_localized(["a", "b", "c"], true, Some(&catalog)),
///     "a, b und c"
/// );
/// ```
pub fn to_comma_list_localized<I>(
    items: I,
    say_and_before_final: bool,
    localizer: Option<&dyn Localizer>,
) -> String
where
    I: IntoIterator,
    I::Item: TextItem,
{
    let items: Vec<I::Item> = where_not_blank(items).collect();
    let texts: Vec<&str> = items.iter().filter_map(|item| item.as_text()).collect();

    match texts.as_slice() {
        [] => String::new(),
        [only] => (*only).to_string(),
        [init @ .., penultimate, last] => {
            let mut output = String::new();
            for item in init {
                output.push_str(item);
                output.push_str(", ");
            }
            output.push_str(penultimate);
            if say_and_before_final {
                output.push(' ');
                output.push_str(&localize("and", localizer));
                output.push(' ');
            } else {
                output.push_str(", ");
            }
            output.push_str(last);
            output
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list() {
        assert_eq!(to_comma_list(Vec::<&str>::new(), false), "");
        assert_eq!(to_comma_list(Vec::<&str>::new(), true), "");
    }

    #[test]
    fn test_single_item_is_unmodified() {
        assert_eq!(to_comma_list(["a"], false), "a");
        assert_eq!(to_comma_list(["a"], true), "a");
        assert_eq!(to_comma_list([" padded "], true), " padded ");
    }

    #[test]
    fn test_two_items() {
        assert_eq!(to_comma_list(["a", "b"], false), "a, b");
        assert_eq!(to_comma_list(["a", "b"], true), "a and b");
    }

    #[test]
    fn test_three_items() {
        assert_eq!(to_comma_list(["a", "b", "c"], false), "a, b, c");
        assert_eq!(to_comma_list(["a", "b", "c"], true), "a, b and c");
    }

    #[test]
    fn test_many_items() {
        let items = ["red", "green", "blue", "yellow", "black"];
        assert_eq!(
            to_comma_list(items, true),
            "red, green, blue, yellow and black"
        );
    }

    #[test]
    fn test_blank_filtering() {
        assert_eq!(to_comma_list([None, Some(""), Some("  "), Some("x")], false), "x");
        assert_eq!(
            to_comma_list([Some("a"), None, Some("\t"), Some("b"), Some("c")], true),
            "a, b and c"
        );
    }

    #[test]
    fn test_only_blank_items() {
        assert_eq!(to_comma_list([None, Some(""), Some(" \n ")], true), "");
    }

    #[test]
    fn test_owned_strings() {
        let items = vec!["one".to_string(), String::new(), "two".to_string()];
        assert_eq!(to_comma_list(&items, true), "one and two");
        assert_eq!(to_comma_list(items, false), "one, two");
    }

    #[test]
    fn test_localized_conjunction() {
        let spanish = |key: &str| match key {
            "and" => "y".to_string(),
            other => other.to_string(),
        };
        assert_eq!(
            to_comma_list_localized(["a", "b", "c"], true, Some(&spanish)),
            "a, b y c"
        );
        assert_eq!(
            to_comma_list_localized(["a", "b", "c"], false, Some(&spanish)),
            "a, b, c"
        );
        assert_eq!(to_comma_list_localized(["a", "b"], true, None), "a and b");
    }

    #[test]
    fn test_where_not_blank_preserves_order() {
        let kept: Vec<_> = where_not_blank(["b", " ", "a", "", "c"]).collect();
        assert_eq!(kept, vec!["b", "a", "c"]);
    }
}
