// SPDX-FileCopyrightText: 2025 Hong Minhee <https://hongminhee.org/>
// SPDX-License-Identifier: GPL-3.0-or-later
//! Wordform converts strings between capitalization styles, joins lists of
//! strings into natural-language phrasing, and picks the singular, dual or
//! plural form of a term for a quantity.
//!
//! # Example
//!
//! ```
//! use wordform::{CapitalizationStyle, TermTriple, select_term, to_case, to_comma_list};
//!
//! assert_eq!(
//!     to_case("KING OF THE NORTH", CapitalizationStyle::TitleCaseExceptConjunctions),
//!     "King of The North"
//! );
//! assert_eq!(to_comma_list(["red", "green", "blue"], true), "red, green and blue");
//!
//! let boxes = TermTriple::new("box", "boxes", Some("pair of boxes")).unwrap();
//! assert_eq!(select_term(&boxes, 2), "pair of boxes");
//! ```

pub mod config;
pub mod text;

#[cfg(feature = "wasm")]
mod wasm;

pub use text::case::{
    CapitalizationStyle, UnknownStyle, is_all_same_case, to_case, to_sentence_case, to_title_case,
};
pub use text::join::append_with_separator;
pub use text::list::{TextItem, to_comma_list, to_comma_list_localized, where_not_blank};
pub use text::localize::{Catalog, Localizer, format_positional, localize, localize_with_args};
pub use text::numerals::{NumeralError, to_words};
pub use text::registry::{RegistryError, TermRegistry};
pub use text::term::{
    Concept, GrammaticalNumber, TermError, TermTriple, naive_pluralize, select_term,
    select_term_for, select_term_localized,
};

/// Default styles for callers that do not pick one per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Options {
    /// Capitalization style. Default: title case.
    pub style: CapitalizationStyle,
    /// Join the final two list items with "and". Default: false.
    pub say_and_before_final: bool,
}

impl Options {
    /// Apply the configured capitalization style to `value`.
    pub fn to_case(&self, value: &str) -> String {
        to_case(value, self.style)
    }

    /// Join `items` with the configured list style.
    pub fn to_comma_list<I>(&self, items: I) -> String
    where
        I: IntoIterator,
        I::Item: TextItem,
    {
        self.to_comma_list_localized(items, None)
    }

    /// Join `items` with the configured list style, translating `"and"`.
    pub fn to_comma_list_localized<I>(
        &self,
        items: I,
        localizer: Option<&dyn Localizer>,
    ) -> String
    where
        I: IntoIterator,
        I::Item: TextItem,
    {
        to_comma_list_localized(items, self.say_and_before_final, localizer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = Options::default();
        assert_eq!(options.style, CapitalizationStyle::TitleCase);
        assert!(!options.say_and_before_final);
    }

    #[test]
    fn test_options_apply_styles() {
        let options = Options {
            style: CapitalizationStyle::SentenceCase,
            say_and_before_final: true,
        };
        assert_eq!(options.to_case("HELLO. WORLD"), "Hello. World");
        assert_eq!(options.to_comma_list(["a", "b"]), "a and b");

        let catalog: Catalog = [("and", "et")].into_iter().collect();
        assert_eq!(
            options.to_comma_list_localized(["a", "b"], Some(&catalog)),
            "a et b"
        );
    }
}
