// SPDX-FileCopyrightText: 2025 Hong Minhee <https://hongminhee.org/>
// SPDX-License-Identifier: GPL-3.0-or-later
//! Process-wide declarations of term triples keyed by concept identifier.
//!
//! A [`TermRegistry`] is built once, from code or from the `[terms]` table of
//! a configuration file, and is read-only afterwards. It can be installed as
//! the process-wide registry with [`TermRegistry::install`]; later reads
//! through [`TermRegistry::global`] need no locking.

use std::sync::OnceLock;

use indexmap::IndexMap;

use super::term::{TermError, TermTriple};

static GLOBAL: OnceLock<TermRegistry> = OnceLock::new();

/// Errors raised while building or installing a registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// The same identifier was declared twice.
    #[error("terms for {0:?} are already declared")]
    Duplicate(String),

    /// A process-wide registry has already been installed.
    #[error("a global term registry is already installed")]
    AlreadyInstalled,
}

/// Term triples keyed by concept identifier, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermRegistry {
    terms: IndexMap<String, TermTriple>,
}

impl TermRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare the terms for `id`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Duplicate`] if `id` is already declared.
    pub fn declare(
        mut self,
        id: impl Into<String>,
        terms: TermTriple,
    ) -> Result<Self, RegistryError> {
        let id = id.into();
        if self.terms.contains_key(&id) {
            return Err(RegistryError::Duplicate(id));
        }
        log::trace!("declaring terms for {id:?}: {terms:?}");
        self.terms.insert(id, terms);
        Ok(self)
    }

    /// The declared terms for `id`.
    ///
    /// # Errors
    ///
    /// Returns [`TermError::MissingMetadata`] if nothing is declared for
    /// `id`.
    pub fn resolve(&self, id: &str) -> Result<&TermTriple, TermError> {
        self.terms.get(id).ok_or_else(|| TermError::MissingMetadata {
            concept: id.to_string(),
        })
    }

    /// Select the term declared for `id` matching `quantity`.
    ///
    /// # Errors
    ///
    /// Returns [`TermError::MissingMetadata`] if nothing is declared for
    /// `id`.
    pub fn select(&self, id: &str, quantity: i64) -> Result<&str, TermError> {
        Ok(self.resolve(id)?.select(quantity))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.terms.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Identifiers and their terms, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TermTriple)> {
        self.terms.iter().map(|(id, terms)| (id.as_str(), terms))
    }

    /// Install this registry as the process-wide one.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::AlreadyInstalled`] if a registry was
    /// installed before; the earlier one stays in place.
    pub fn install(self) -> Result<&'static TermRegistry, RegistryError> {
        let count = self.len();
        GLOBAL
            .set(self)
            .map_err(|_| RegistryError::AlreadyInstalled)?;
        log::debug!("installed global term registry with {count} concept(s)");
        GLOBAL.get().ok_or(RegistryError::AlreadyInstalled)
    }

    /// The process-wide registry, if one has been installed.
    pub fn global() -> Option<&'static TermRegistry> {
        GLOBAL.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> TermRegistry {
        TermRegistry::new()
            .declare(
                "box",
                TermTriple::new("box", "boxes", Some("pair of boxes")).unwrap(),
            )
            .unwrap()
            .declare("goose", TermTriple::new("goose", "geese", None).unwrap())
            .unwrap()
    }

    #[test]
    fn test_resolve_declared() {
        let registry = registry();
        assert_eq!(registry.resolve("goose").unwrap().plural(), "geese");
        assert_eq!(registry.select("box", 2), Ok("pair of boxes"));
        assert_eq!(registry.select("box", -1), Ok("box"));
        assert_eq!(registry.select("box", 0), Ok("boxes"));
    }

    #[test]
    fn test_resolve_missing() {
        let registry = registry();
        assert_eq!(
            registry.select("cat", 1),
            Err(TermError::MissingMetadata {
                concept: "cat".to_string()
            })
        );
    }

    #[test]
    fn test_duplicate_declaration() {
        let result = registry().declare("box", TermTriple::new("crate", "crates", None).unwrap());
        assert_eq!(result, Err(RegistryError::Duplicate("box".to_string())));
    }

    #[test]
    fn test_iteration_order() {
        let registry = registry();
        let ids: Vec<&str> = registry.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["box", "goose"]);
        assert_eq!(registry.len(), 2);
        assert!(registry.contains("goose"));
        assert!(!TermRegistry::new().contains("goose"));
        assert!(TermRegistry::new().is_empty());
    }

    #[test]
    fn test_concurrent_reads() {
        let registry = registry();
        std::thread::scope(|scope| {
            for quantity in 0..8 {
                let registry = &registry;
                scope.spawn(move || {
                    let expected = match quantity {
                        1 => "box",
                        2 => "pair of boxes",
                        _ => "boxes",
                    };
                    assert_eq!(registry.select("box", quantity), Ok(expected));
                });
            }
        });
    }
}
