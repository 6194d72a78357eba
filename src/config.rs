// SPDX-FileCopyrightText: 2025 Hong Minhee <https://hongminhee.org/>
// SPDX-License-Identifier: GPL-3.0-or-later
//! Configuration file support for Wordform.
//!
//! This module provides functionality for loading and parsing configuration
//! files (`.wordform.toml`) that set the default capitalization style, the
//! list style, declared terms and translations.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::Options;
use crate::text::case::CapitalizationStyle;
use crate::text::localize::Catalog;
use crate::text::registry::{RegistryError, TermRegistry};
use crate::text::term::{TermError, TermTriple};

/// The default configuration file name.
pub const CONFIG_FILE_NAME: &str = ".wordform.toml";

/// Configuration for Wordform.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    /// Capitalization options.
    pub case: CaseConfig,

    /// List formatting options.
    pub list: ListConfig,

    /// Declared terms, keyed by concept identifier.
    pub terms: IndexMap<String, TermDeclaration>,

    /// Display strings, keyed by the literal they replace.
    pub translations: IndexMap<String, String>,
}

/// Capitalization options.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct CaseConfig {
    /// Style used when none is given on the command line (default:
    /// `title-case`).
    pub style: CapitalizationStyle,
}

/// List formatting options.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct ListConfig {
    /// Join the final two items with "and" instead of a comma (default:
    /// false).
    pub say_and_before_final: bool,
}

/// A term triple as written in the configuration file.
///
/// Validation happens in [`Config::registry`], so a blank term is reported
/// with the identifier it belongs to.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TermDeclaration {
    pub singular: String,
    pub plural: String,
    #[serde(default)]
    pub dual: Option<String>,
}

impl TermDeclaration {
    /// Validate this declaration into a [`TermTriple`].
    pub fn to_triple(&self) -> Result<TermTriple, TermError> {
        TermTriple::new(&self.singular, &self.plural, self.dual.as_deref())
    }
}

impl Config {
    /// Parse a configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Load configuration from a file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Self::from_toml(&content).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))
    }

    /// Discover and load configuration by searching up the directory tree.
    ///
    /// Starting from `start_dir`, searches for `.wordform.toml` in each parent
    /// directory until the filesystem root is reached. Returns `None` if no
    /// configuration file is found.
    pub fn discover(start_dir: &Path) -> Result<Option<(PathBuf, Self)>, ConfigError> {
        let mut current = start_dir.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                log::debug!("using configuration {}", config_path.display());
                let config = Self::from_file(&config_path)?;
                return Ok(Some((config_path, config)));
            }
            if !current.pop() {
                break;
            }
        }
        log::debug!(
            "no {} found above {}",
            CONFIG_FILE_NAME,
            start_dir.display()
        );
        Ok(None)
    }

    /// Library options derived from this configuration.
    pub fn options(&self) -> Options {
        Options {
            style: self.case.style,
            say_and_before_final: self.list.say_and_before_final,
        }
    }

    /// Build a term registry from the `[terms]` table, in file order.
    pub fn registry(&self) -> Result<TermRegistry, ConfigError> {
        let mut registry = TermRegistry::new();
        for (id, declaration) in &self.terms {
            let triple = declaration
                .to_triple()
                .map_err(|e| ConfigError::InvalidTerm(id.clone(), e))?;
            registry = registry.declare(id.clone(), triple)?;
        }
        log::debug!("loaded {} declared term(s)", registry.len());
        Ok(registry)
    }

    /// Build a translation catalog from the `[translations]` table.
    pub fn catalog(&self) -> Catalog {
        self.translations
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
            .collect()
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error reading the configuration file.
    #[error("failed to read {}: {}", .0.display(), .1)]
    Io(PathBuf, #[source] std::io::Error),
    /// Error parsing the TOML configuration.
    #[error("failed to parse {}: {}", .0.display(), .1)]
    Parse(PathBuf, #[source] toml::de::Error),
    /// A term declaration is invalid.
    #[error("invalid terms for {0:?}: {1}")]
    InvalidTerm(String, #[source] TermError),
    /// The declarations could not be registered.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}
