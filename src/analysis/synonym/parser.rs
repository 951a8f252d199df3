//! Synonym document parser.
//!
//! Splits a document into lines, parses each line with
//! [`parse_line_with`](super::rule::parse_line_with), and merges the per-line
//! graphs in document order. The first malformed line aborts the parse.
//!
//! A term defined by more than one line keeps the definition of the last one.
//! Each redefinition is logged and, unless disabled in [`ParserConfig`],
//! reported as a [`ParseWarning`].

use ahash::AHashMap;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SynonymError};

use super::config::ParserConfig;
use super::rule::parse_line_with;
use super::term_graph::TermGraph;

/// A non-fatal problem found while parsing a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParseWarning {
    /// A term already defined by an earlier line was redefined.
    DuplicateTerm {
        term: String,
        /// 0-based line holding the definition that won.
        line_number: usize,
        /// 0-based line holding the definition that was overwritten.
        previous_line_number: usize,
    },
}

impl std::fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseWarning::DuplicateTerm {
                term,
                line_number,
                previous_line_number,
            } => write!(
                f,
                "'{term}' at line {line_number} overrides its definition at line {previous_line_number}"
            ),
        }
    }
}

/// A parsed document together with the warnings raised while parsing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSynonyms {
    pub graph: TermGraph,
    pub warnings: Vec<ParseWarning>,
}

/// Parser for Solr-format synonym documents.
///
/// # Example
///
/// ```
/// use synonym_graph::analysis::synonym::{ParserConfig, SynonymParser};
///
/// let parser = SynonymParser::new(ParserConfig::default());
/// let parsed = parser
///     .parse_with_warnings("azure, blue\nsapphire => azure\nblue => navy")
///     .unwrap();
///
/// // "blue" stops the walk: line 2 replaced its equivalence edge.
/// assert_eq!(parsed.graph.replacements("sapphire"), vec!["blue", "azure"]);
/// assert_eq!(parsed.warnings.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SynonymParser {
    config: ParserConfig,
}

impl SynonymParser {
    /// Create a new parser with the given configuration.
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Get the parser configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse a document into a term graph.
    pub fn parse(&self, document: &str) -> Result<TermGraph> {
        Ok(self.parse_with_warnings(document)?.graph)
    }

    /// Parse a document into a term graph, collecting duplicate-term warnings.
    pub fn parse_with_warnings(&self, document: &str) -> Result<ParsedSynonyms> {
        let mut graph = TermGraph::with_ignore_case(self.config.ignore_case);
        let mut defined_at: AHashMap<String, usize> = AHashMap::new();
        let mut warnings = Vec::new();
        let mut line_count = 0;

        for (line_number, line) in document.split('\n').enumerate() {
            line_count += 1;
            let entries = parse_line_with(line, &self.config)
                .map_err(|source| SynonymError::invalid_syntax(line, line_number, source))?;

            for (term, edge) in entries.into_entries() {
                if let Some(previous_line_number) = defined_at.insert(term.clone(), line_number) {
                    // TODO: resolve references to terms defined on earlier lines
                    warn!(
                        "Synonym term '{term}' at line {line_number} overrides line {previous_line_number}"
                    );
                    if self.config.report_duplicates {
                        warnings.push(ParseWarning::DuplicateTerm {
                            term: term.clone(),
                            line_number,
                            previous_line_number,
                        });
                    }
                }
                graph.insert(term, edge);
            }
        }

        debug!(
            "Parsed synonym document: {} lines, {} terms, {} warnings",
            line_count,
            graph.len(),
            warnings.len()
        );

        Ok(ParsedSynonyms { graph, warnings })
    }
}
