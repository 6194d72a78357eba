//! Integration tests for Wordform.

use std::borrow::Cow;

use wordform::config::Config;
use wordform::{
    CapitalizationStyle, Concept, TermError, TermRegistry, TermTriple, append_with_separator,
    localize_with_args, naive_pluralize, select_term, select_term_for, to_case, to_comma_list,
    to_sentence_case, to_title_case, to_words,
};

/// Test that every style is idempotent.
#[test]
fn test_idempotent_case_conversion() {
    let samples = [
        "",
        "The Quick brown FOX",
        "ALL CAPS HEADLINE",
        "all lowercase words",
        "the king's speech. part of it; by and by",
        "ßig deal",
        "İstanbul",
        "ÉCOLE",
    ];

    for style in CapitalizationStyle::ALL {
        for sample in samples {
            let first_pass = to_case(sample, style);
            let second_pass = to_case(&first_pass, style);
            assert_eq!(first_pass, second_pass, "{style} should be idempotent");
        }
    }
}

/// Test that case folds map each character to exactly one character.
#[test]
fn test_simple_case_mapping() {
    assert_eq!(to_case("straße", CapitalizationStyle::Uppercase), "STRAßE");
    assert_eq!(to_case("ßig deal", CapitalizationStyle::SentenceCase), "ßig deal");
    assert_eq!(to_case("ÉCOLE", CapitalizationStyle::TitleCase), "École");
}

/// Test the documented title and sentence case examples.
#[test]
fn test_case_examples() {
    assert_eq!(to_title_case("king of the north", true), "King of The North");
    assert_eq!(to_sentence_case("hello. world; there"), "Hello. World; There");
    assert_eq!(
        to_case("KING OF THE NORTH", CapitalizationStyle::TitleCase),
        "King Of The North"
    );
}

/// Test the documented comma list examples.
#[test]
fn test_comma_list_examples() {
    assert_eq!(to_comma_list(Vec::<String>::new(), false), "");
    assert_eq!(to_comma_list(["a"], false), "a");
    assert_eq!(to_comma_list(["a", "b"], false), "a, b");
    assert_eq!(to_comma_list(["a", "b", "c"], false), "a, b, c");
    assert_eq!(to_comma_list(["a", "b", "c"], true), "a, b and c");
    assert_eq!(to_comma_list([None, Some(""), Some("  "), Some("x")], false), "x");
}

/// Test the documented term selection examples.
#[test]
fn test_term_selection_examples() {
    let triple = TermTriple::new("box", "boxes", Some("pair of boxes")).unwrap();
    assert_eq!(select_term(&triple, 1), "box");
    assert_eq!(select_term(&triple, -1), "box");
    assert_eq!(select_term(&triple, 2), "pair of boxes");
    assert_eq!(select_term(&triple, 0), "boxes");
    assert_eq!(select_term(&triple, 5), "boxes");

    assert!(matches!(
        TermTriple::new(" ", "boxes", None),
        Err(TermError::InvalidArgument { .. })
    ));
    let no_dual = TermTriple::new("box", "boxes", Some("")).unwrap();
    assert_eq!(no_dual.dual(), no_dual.plural());

    assert_eq!(naive_pluralize("bus"), "buses");
    assert_eq!(naive_pluralize("cat"), "cats");
}

#[derive(Debug, Clone, Copy)]
enum Item {
    Mouse,
    Keyboard,
}

static MOUSE: TermTriple = TermTriple::declare("mouse", "mice", Some("pair of mice"));

impl Concept for Item {
    fn concept_name(&self) -> Cow<'_, str> {
        Cow::Owned(format!("{self:?}"))
    }

    fn declared_terms(&self) -> Option<&TermTriple> {
        match self {
            Item::Mouse => Some(&MOUSE),
            Item::Keyboard => None,
        }
    }
}

/// Test the declared and derived paths for concepts.
#[test]
fn test_concept_terms() {
    assert_eq!(select_term_for(&Item::Mouse, 2), Ok("pair of mice"));
    assert_eq!(
        select_term_for(&Item::Keyboard, 2),
        Err(TermError::MissingMetadata {
            concept: "Keyboard".to_string()
        })
    );
    assert_eq!(Item::Keyboard.term_for(2), "Keyboards");
    assert_eq!(Item::Keyboard.term_for(1), "Keyboard");

    let described = format!(
        "{} {}",
        to_words(3, false).unwrap(),
        Item::Mouse.term_for(3)
    );
    assert_eq!(described, "three mice");
}

/// Test a registry loaded from configuration and installed process-wide.
#[test]
fn test_configured_registry_installed_globally() {
    let config = Config::from_toml(
        r#"
[terms.child]
singular = "child"
plural = "children"

[terms.die]
singular = "die"
plural = "dice"
dual = "pair of dice"

[translations]
"{0} of {1}" = "{0} de {1}"
"#,
    )
    .unwrap();

    let registry = config.registry().unwrap().install().unwrap();
    assert_eq!(registry.select("die", 2), Ok("pair of dice"));

    let global = TermRegistry::global().unwrap();
    assert_eq!(global.select("child", -4), Ok("children"));
    assert!(TermRegistry::new().install().is_err());

    let catalog = config.catalog();
    assert_eq!(
        localize_with_args("{0} of {1}", Some(&catalog), &["1", "2"]),
        "1 de 2"
    );
}

/// Test separator-aware concatenation.
#[test]
fn test_append_with_separator() {
    assert_eq!(
        append_with_separator(r"c:\", r"\users\administrator", r"\"),
        r"c:\users\administrator"
    );
    assert_eq!(append_with_separator("docs", "guide.md", "/"), "docs/guide.md");
}
