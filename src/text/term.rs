// SPDX-FileCopyrightText: 2025 Hong Minhee <https://hongminhee.org/>
// SPDX-License-Identifier: GPL-3.0-or-later
//! Quantity-driven selection of singular, dual and plural terms.
//!
//! A [`TermTriple`] holds the three written forms of a countable noun or
//! phrase. The form for a quantity is picked by [`GrammaticalNumber`]:
//! an absolute value of 1 is singular, 2 is dual and everything else,
//! including 0, is plural.
//!
//! Domain types declare their triple once by implementing [`Concept`]:
//!
//! ```
//! use std::borrow::Cow;
//! use wordform::{Concept, TermTriple, select_term_for};
//!
//! enum Shape {
//!     Box,
//! }
//!
//! static BOX: TermTriple = TermTriple::declare("box", "boxes", Some("pair of boxes"));
//!
//! impl Concept for Shape {
//!     fn concept_name(&self) -> Cow<'_, str> {
//!         Cow::Borrowed("Box")
//!     }
//!
//!     fn declared_terms(&self) -> Option<&TermTriple> {
//!         match self {
//!             Shape::Box => Some(&BOX),
//!         }
//!     }
//! }
//!
//! assert_eq!(select_term_for(&Shape::Box, 2).unwrap(), "pair of boxes");
//! ```

use std::borrow::Cow;

use super::localize::{Localizer, localize};

/// Errors raised while declaring or resolving terms.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TermError {
    /// A required term was empty or only white space.
    #[error("{param} term cannot be empty or just white space")]
    InvalidArgument {
        /// Which term was blank: `"singular"` or `"plural"`.
        param: &'static str,
    },

    /// The concept has no declared terms.
    #[error("no terms are declared for {concept:?}")]
    MissingMetadata {
        /// Name of the concept that was looked up.
        concept: String,
    },
}

/// Which written form a quantity calls for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrammaticalNumber {
    /// Exactly one (or minus one).
    Singular,
    /// Exactly two (or minus two).
    Dual,
    /// Anything else, zero included.
    Plural,
}

impl GrammaticalNumber {
    /// Pick the form for `quantity`. The sign is ignored.
    pub fn for_quantity(quantity: i64) -> Self {
        match quantity.unsigned_abs() {
            1 => GrammaticalNumber::Singular,
            2 => GrammaticalNumber::Dual,
            _ => GrammaticalNumber::Plural,
        }
    }
}

/// The singular, plural and dual forms of a term.
///
/// The singular and plural forms are never blank. A blank or missing dual
/// form falls back to the plural one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TermTriple {
    singular: Cow<'static, str>,
    plural: Cow<'static, str>,
    dual: Cow<'static, str>,
}

impl TermTriple {
    /// Build a triple from runtime strings.
    ///
    /// # Errors
    ///
    /// Returns [`TermError::InvalidArgument`] if `singular` or `plural` is
    /// empty or only white space.
    pub fn new(singular: &str, plural: &str, dual: Option<&str>) -> Result<Self, TermError> {
        if singular.trim().is_empty() {
            return Err(TermError::InvalidArgument { param: "singular" });
        }
        if plural.trim().is_empty() {
            return Err(TermError::InvalidArgument { param: "plural" });
        }
        let dual = match dual {
            Some(dual) if !dual.trim().is_empty() => dual,
            _ => plural,
        };
        Ok(Self {
            singular: Cow::Owned(singular.to_string()),
            plural: Cow::Owned(plural.to_string()),
            dual: Cow::Owned(dual.to_string()),
        })
    }

    /// Declare a triple from string literals, usable in `static` items.
    ///
    /// Only ASCII white space counts as blank here.
    ///
    /// # Panics
    ///
    /// Panics (at compile time, in a `static` initializer) if `singular` or
    /// `plural` is blank.
    pub const fn declare(
        singular: &'static str,
        plural: &'static str,
        dual: Option<&'static str>,
    ) -> Self {
        if singular.trim_ascii().is_empty() {
            panic!("singular term cannot be empty or just white space");
        }
        if plural.trim_ascii().is_empty() {
            panic!("plural term cannot be empty or just white space");
        }
        let dual = match dual {
            Some(dual) if !dual.trim_ascii().is_empty() => dual,
            _ => plural,
        };
        Self {
            singular: Cow::Borrowed(singular),
            plural: Cow::Borrowed(plural),
            dual: Cow::Borrowed(dual),
        }
    }

    pub fn singular(&self) -> &str {
        &self.singular
    }

    pub fn plural(&self) -> &str {
        &self.plural
    }

    pub fn dual(&self) -> &str {
        &self.dual
    }

    /// The form for a grammatical number.
    pub fn form(&self, number: GrammaticalNumber) -> &str {
        match number {
            GrammaticalNumber::Singular => self.singular(),
            GrammaticalNumber::Dual => self.dual(),
            GrammaticalNumber::Plural => self.plural(),
        }
    }

    /// The form for `quantity`; see [`select_term`].
    pub fn select(&self, quantity: i64) -> &str {
        self.form(GrammaticalNumber::for_quantity(quantity))
    }
}

/// Select the term matching `quantity`: singular for ±1, dual for ±2 and
/// plural for everything else, including 0.
///
/// ```
/// use wordform::{TermTriple, select_term};
///
/// let boxes = TermTriple::new("box", "boxes", Some("pair of boxes")).unwrap();
/// assert_eq!(select_term(&boxes, -1), "box");
/// assert_eq!(select_term(&boxes, 0), "boxes");
/// ```
pub fn select_term(triple: &TermTriple, quantity: i64) -> &str {
    triple.select(quantity)
}

/// Like [`select_term`], passing the result through `localizer`.
pub fn select_term_localized(
    triple: &TermTriple,
    quantity: i64,
    localizer: Option<&dyn Localizer>,
) -> String {
    localize(triple.select(quantity), localizer)
}

/// Select the declared term of `concept` for `quantity`.
///
/// # Errors
///
/// Returns [`TermError::MissingMetadata`] if `concept` declares no terms.
pub fn select_term_for<C>(concept: &C, quantity: i64) -> Result<&str, TermError>
where
    C: Concept + ?Sized,
{
    concept
        .declared_terms()
        .map(|terms| terms.select(quantity))
        .ok_or_else(|| TermError::MissingMetadata {
            concept: concept.concept_name().into_owned(),
        })
}

/// Naively pluralize an English regular noun: `es` is appended to words
/// ending in `s`, `s` to everything else.
///
/// This is the fallback for concepts without declared terms. Irregular nouns
/// and other languages need a [`TermTriple`].
pub fn naive_pluralize(word: &str) -> String {
    if word.to_lowercase().ends_with('s') {
        format!("{word}es")
    } else {
        format!("{word}s")
    }
}

/// A domain type that has countable terms.
///
/// Implementors provide a name and optionally a declared [`TermTriple`].
/// Without a declaration, the name is the singular form and its
/// [`naive_pluralize`]d form is both the plural and dual forms.
pub trait Concept {
    /// Name of the concept, used for error messages and undeclared terms.
    fn concept_name(&self) -> Cow<'_, str>;

    /// The declared triple, if there is one.
    fn declared_terms(&self) -> Option<&TermTriple> {
        None
    }

    fn singular_term(&self) -> Cow<'_, str> {
        match self.declared_terms() {
            Some(terms) => Cow::Borrowed(terms.singular()),
            None => self.concept_name(),
        }
    }

    fn plural_term(&self) -> Cow<'_, str> {
        match self.declared_terms() {
            Some(terms) => Cow::Borrowed(terms.plural()),
            None => Cow::Owned(naive_pluralize(&self.concept_name())),
        }
    }

    fn dual_term(&self) -> Cow<'_, str> {
        match self.declared_terms() {
            Some(terms) => Cow::Borrowed(terms.dual()),
            None => Cow::Owned(naive_pluralize(&self.concept_name())),
        }
    }

    /// The term for `quantity`, falling back to derived terms when nothing is
    /// declared. Use [`select_term_for`] to require a declaration.
    fn term_for(&self, quantity: i64) -> Cow<'_, str> {
        match GrammaticalNumber::for_quantity(quantity) {
            GrammaticalNumber::Singular => self.singular_term(),
            GrammaticalNumber::Dual => self.dual_term(),
            GrammaticalNumber::Plural => self.plural_term(),
        }
    }

    /// Like [`Concept::term_for`], passing the result through `localizer`.
    fn term_for_localized(&self, quantity: i64, localizer: Option<&dyn Localizer>) -> String {
        localize(&self.term_for(quantity), localizer)
    }
}
