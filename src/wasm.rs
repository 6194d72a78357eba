// SPDX-FileCopyrightText: 2025 Hong Minhee <https://hongminhee.org/>
// SPDX-License-Identifier: GPL-3.0-or-later
//! WebAssembly bindings for Wordform.
//!
//! This module provides JavaScript-friendly bindings for the case, list and
//! term functions.

use serde::Deserialize;
use wasm_bindgen::prelude::*;

use crate::{CapitalizationStyle, TermTriple};

/// JavaScript-friendly term triple.
///
/// Uses camelCase naming for JavaScript conventions; `dual` is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JsTerms {
    /// Singular form.
    pub singular: String,

    /// Plural form.
    pub plural: String,

    /// Dual form (default: the plural form).
    pub dual: Option<String>,
}

impl JsTerms {
    /// Convert JavaScript terms to a validated triple.
    fn to_triple(&self) -> Result<TermTriple, crate::TermError> {
        TermTriple::new(&self.singular, &self.plural, self.dual.as_deref())
    }
}

/// Adapter turning an optional JavaScript `(key: string) => string` callback
/// into a localizer. Returning anything but a string keeps the key.
struct JsLocalizer(js_sys::Function);

impl crate::Localizer for JsLocalizer {
    fn lookup(&self, key: &str) -> String {
        let this = JsValue::null();
        match self.0.call1(&this, &JsValue::from_str(key)) {
            Ok(result) => result.as_string().unwrap_or_else(|| key.to_string()),
            Err(_) => key.to_string(),
        }
    }
}

fn parse_style(style: &str) -> Result<CapitalizationStyle, JsError> {
    style
        .parse::<CapitalizationStyle>()
        .map_err(|e| JsError::new(&e.to_string()))
}

/// Convert text to a capitalization style.
///
/// # Arguments
///
/// * `value` - Text to convert
/// * `style` - One of `"lowercase"`, `"uppercase"`, `"title-case"`,
///   `"title-case-except-conjunctions"` or `"sentence-case"`
#[wasm_bindgen(js_name = toCase)]
pub fn to_case(value: &str, style: &str) -> Result<String, JsError> {
    Ok(crate::to_case(value, parse_style(style)?))
}

/// Join an array of strings into a comma-separated list.
///
/// `null`, `undefined` and blank entries are skipped. The optional
/// `localizer` callback translates the word `"and"`.
#[wasm_bindgen(js_name = toCommaList)]
pub fn to_comma_list(
    items: JsValue,
    say_and_before_final: bool,
    localizer: Option<js_sys::Function>,
) -> Result<String, JsError> {
    let items: Vec<Option<String>> = if items.is_undefined() || items.is_null() {
        Vec::new()
    } else {
        serde_wasm_bindgen::from_value(items).map_err(|e| JsError::new(&e.to_string()))?
    };
    let localizer = localizer.map(JsLocalizer);
    Ok(crate::to_comma_list_localized(
        items,
        say_and_before_final,
        localizer.as_ref().map(|l| l as &dyn crate::Localizer),
    ))
}

/// Select the term for a quantity.
///
/// # Arguments
///
/// * `terms` - An object with `singular`, `plural` and optional `dual`
/// * `quantity` - The quantity; its sign is ignored
/// * `localizer` - Optional JavaScript callback `(key: string) => string`
///   applied to the selected term
#[wasm_bindgen(js_name = selectTerm)]
pub fn select_term(
    terms: JsValue,
    quantity: i64,
    localizer: Option<js_sys::Function>,
) -> Result<String, JsError> {
    let js_terms: JsTerms =
        serde_wasm_bindgen::from_value(terms).map_err(|e| JsError::new(&e.to_string()))?;
    let triple = js_terms
        .to_triple()
        .map_err(|e| JsError::new(&e.to_string()))?;
    let localizer = localizer.map(JsLocalizer);
    Ok(crate::select_term_localized(
        &triple,
        quantity,
        localizer.as_ref().map(|l| l as &dyn crate::Localizer),
    ))
}

/// Naively pluralize an English regular noun.
#[wasm_bindgen(js_name = naivePluralize)]
pub fn naive_pluralize(word: &str) -> String {
    crate::naive_pluralize(word)
}

/// Spell out a number from zero to ten; other numbers keep their digits.
#[wasm_bindgen(js_name = toWords)]
pub fn to_words(number: i64) -> Result<String, JsError> {
    crate::to_words(number, false)
        .map(|words| words.into_owned())
        .map_err(|e| JsError::new(&e.to_string()))
}
