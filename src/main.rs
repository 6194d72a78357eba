// SPDX-FileCopyrightText: 2025 Hong Minhee <https://hongminhee.org/>
// SPDX-License-Identifier: GPL-3.0-or-later
//! Wordform CLI - capitalization, comma lists and term selection.

use std::error::Error;
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;
use wordform::config::Config;
use wordform::{
    CapitalizationStyle, Catalog, Options, TermTriple, select_term_localized, to_words,
};

/// Capitalization styles, natural-language lists and singular/dual/plural
/// term selection.
#[derive(Parser, Debug)]
#[command(name = "wordform")]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file. Defaults to the nearest .wordform.toml.
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log more; repeat for more detail.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert text to a capitalization style. Reads lines from stdin when no
    /// text is given.
    Case {
        /// Style to apply. Defaults to the configured style.
        #[arg(short, long, value_enum)]
        style: Option<CapitalizationStyle>,

        /// Text to convert.
        #[arg(value_name = "TEXT")]
        text: Vec<String>,
    },

    /// Join items into a comma-separated list. Reads items from stdin lines
    /// when none are given.
    List {
        /// Say "and" before the final item.
        #[arg(long, conflicts_with = "no_and")]
        and: bool,

        /// Use a comma before the final item.
        #[arg(long)]
        no_and: bool,

        /// Items to join.
        #[arg(value_name = "ITEM")]
        items: Vec<String>,
    },

    /// Select the singular, dual or plural term for a quantity.
    Term {
        /// The quantity.
        #[arg(allow_negative_numbers = true)]
        quantity: i64,

        /// Identifier of a concept declared in the configuration file.
        #[arg(value_name = "CONCEPT", required_unless_present = "singular")]
        concept: Option<String>,

        /// Singular term, for an undeclared concept.
        #[arg(long, requires = "plural", conflicts_with = "concept")]
        singular: Option<String>,

        /// Plural term, for an undeclared concept.
        #[arg(long, requires = "singular")]
        plural: Option<String>,

        /// Dual term, for an undeclared concept. Defaults to the plural term.
        #[arg(long, requires = "singular")]
        dual: Option<String>,
    },

    /// Spell out a number.
    Words {
        #[arg(allow_negative_numbers = true)]
        number: i64,

        /// Spell out numbers above ten (not supported).
        #[arg(long)]
        beyond_ten: bool,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let config = load_config(args.config.as_deref())?;
    let options = config.options();

    match args.command {
        Command::Case { style, text } => {
            let options = Options {
                style: style.unwrap_or(options.style),
                ..options
            };
            log::info!("converting to {}", options.style);
            for line in input_lines(text)? {
                println!("{}", options.to_case(&line));
            }
        }
        Command::List { and, no_and, items } => {
            let options = Options {
                say_and_before_final: and
                    .then_some(true)
                    .or(no_and.then_some(false))
                    .unwrap_or(options.say_and_before_final),
                ..options
            };
            let catalog = config.catalog();
            let items = input_lines(items)?;
            println!("{}", options.to_comma_list_localized(&items, Some(&catalog)));
        }
        Command::Term {
            quantity,
            concept,
            singular,
            plural,
            dual,
        } => {
            let catalog = config.catalog();
            let term = match (concept, singular, plural) {
                (_, Some(singular), Some(plural)) => {
                    let triple = TermTriple::new(&singular, &plural, dual.as_deref())?;
                    select_term_localized(&triple, quantity, Some(&catalog))
                }
                (Some(concept), _, _) => select_declared(&config, &catalog, &concept, quantity)?,
                _ => return Err("give a concept or both --singular and --plural".into()),
            };
            println!("{}", term);
        }
        Command::Words { number, beyond_ten } => {
            println!("{}", to_words(number, beyond_ten)?);
        }
    }

    Ok(())
}

/// Load the configuration named on the command line, or the nearest one
/// above the working directory.
fn load_config(path: Option<&std::path::Path>) -> Result<Config, Box<dyn Error>> {
    if let Some(path) = path {
        return Ok(Config::from_file(path)?);
    }
    let cwd = std::env::current_dir()?;
    Ok(Config::discover(&cwd)?
        .map(|(_, config)| config)
        .unwrap_or_default())
}

fn select_declared(
    config: &Config,
    catalog: &Catalog,
    concept: &str,
    quantity: i64,
) -> Result<String, Box<dyn Error>> {
    let registry = config.registry()?;
    let triple = registry.resolve(concept)?;
    Ok(select_term_localized(triple, quantity, Some(catalog)))
}

/// The given values, or stdin lines when there are none.
fn input_lines(values: Vec<String>) -> io::Result<Vec<String>> {
    if !values.is_empty() {
        return Ok(values);
    }
    io::stdin().lock().lines().collect()
}
