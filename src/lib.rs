//! # Synonym Graph
//!
//! A parser for Solr/Lucene synonym files that builds an in-memory term graph.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Solr synonym syntax: equivalence groups and `=>` mappings
//! - Equivalence and replacement queries over the parsed graph
//! - Duplicate definitions reported as warnings
//! - Immutable, shareable graph snapshots
//!
//! ## Example
//!
//! ```
//! use synonym_graph::prelude::*;
//!
//! let graph = parse("sapphire, prussian blue => azure, blue, cyan").unwrap();
//! assert_eq!(graph.replacements("sapphire"), vec!["blue", "cyan", "azure"]);
//! ```

pub mod analysis;
pub mod error;

pub mod prelude {
    pub use crate::analysis::synonym::{
        Edge, ParserConfig, SharedTermGraph, SynonymParser, TermGraph, parse,
    };
    pub use crate::error::{Result, SynonymError};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
