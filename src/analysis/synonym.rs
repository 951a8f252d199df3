//! Solr synonym files and the term graph they describe.
//!
//! A synonym file is line oriented. Each line is either an equivalence group,
//! whose terms all stand for each other, or an explicit mapping, whose left
//! side is replaced by its right side:
//!
//! ```text
//! # equivalence group
//! azure, blue, cerulean
//!
//! # explicit mapping
//! sapphire, prussian blue => azure, blue
//! ```
//!
//! # Components
//!
//! - [`rule`] - Line tokenizer and per-line edge construction
//! - [`parser`] - Document parsing and duplicate detection
//! - [`term_graph`] - The term graph and its `equivalents` / `replacements` queries
//! - [`shared`] - Atomically swappable graph snapshots
//! - [`config`] - Parser options
//!
//! # Examples
//!
//! ```
//! use synonym_graph::analysis::synonym::parse;
//!
//! let graph = parse("azure, blue, cerulean, cyan\ncrimson => red, scarlet").unwrap();
//!
//! assert_eq!(graph.equivalents("azure"), vec!["blue", "cerulean", "cyan"]);
//! assert_eq!(graph.replacements("crimson"), vec!["scarlet", "red"]);
//! assert!(graph.replacements("azure").is_empty());
//! ```

pub mod config;
pub mod parser;
pub mod rule;
pub mod shared;
pub mod term_graph;

pub use config::ParserConfig;
pub use parser::{ParseWarning, ParsedSynonyms, SynonymParser};
pub use rule::{RuleState, SynonymRule, parse_line, parse_line_with};
pub use shared::SharedTermGraph;
pub use term_graph::{Edge, Equivalents, TermGraph, TermNode};

use crate::error::Result;

/// Parse a synonym document with the default configuration.
pub fn parse(document: &str) -> Result<TermGraph> {
    SynonymParser::default().parse(document)
}
