//! Shareable, swappable term graph snapshots.
//!
//! A [`TermGraph`] is never modified once built. Services that reload their
//! synonym file hold a [`SharedTermGraph`]: readers take an `Arc` snapshot and
//! keep querying it while a reload parses a fresh graph and swaps it in.

use std::sync::Arc;

use log::{debug, warn};
use parking_lot::RwLock;

use crate::error::Result;

use super::parser::{ParseWarning, SynonymParser};
use super::term_graph::TermGraph;

/// A term graph that can be replaced atomically while readers use it.
///
/// # Example
///
/// ```
/// use synonym_graph::analysis::synonym::{SharedTermGraph, SynonymParser};
///
/// let parser = SynonymParser::default();
/// let shared = SharedTermGraph::from_document("azure, blue", &parser).unwrap();
///
/// let before = shared.snapshot();
/// shared.reload("sapphire => blue", &parser).unwrap();
///
/// assert_eq!(before.equivalents("azure"), vec!["blue"]);
/// assert!(shared.snapshot().equivalents("azure").is_empty());
/// ```
#[derive(Debug, Default)]
pub struct SharedTermGraph {
    current: RwLock<Arc<TermGraph>>,
}

impl SharedTermGraph {
    pub fn new(graph: TermGraph) -> Self {
        Self {
            current: RwLock::new(Arc::new(graph)),
        }
    }

    /// Parse a document into a new shared graph.
    pub fn from_document(document: &str, parser: &SynonymParser) -> Result<Self> {
        Ok(Self::new(parser.parse(document)?))
    }

    /// The current snapshot. It stays valid after later reloads.
    pub fn snapshot(&self) -> Arc<TermGraph> {
        self.current.read().clone()
    }

    /// Swap in an already built graph, returning the previous snapshot.
    pub fn replace(&self, graph: TermGraph) -> Arc<TermGraph> {
        let mut guard = self.current.write();
        let previous = std::mem::replace(&mut *guard, Arc::new(graph));
        debug!(
            "Replaced synonym graph: {} terms -> {} terms",
            previous.len(),
            guard.len()
        );
        previous
    }

    /// Parse `document` and swap it in.
    ///
    /// The current snapshot is only replaced when parsing succeeds; on error
    /// readers keep the previous graph.
    pub fn reload(&self, document: &str, parser: &SynonymParser) -> Result<Vec<ParseWarning>> {
        let parsed = match parser.parse_with_warnings(document) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!("Synonym reload rejected, keeping previous graph: {e}");
                return Err(e);
            }
        };
        self.replace(parsed.graph);
        Ok(parsed.warnings)
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    #[test]
    fn test_reload_swaps_snapshot() {
        let parser = SynonymParser::default();
        let shared = SharedTermGraph::from_document("sapphire => blue", &parser).unwrap();
        let before = shared.snapshot();

        let warnings = shared
            .reload("sapphire => navy\nsapphire => cyan", &parser)
            .unwrap();
        assert_eq!(warnings.len(), 1);

        assert_eq!(before.replacements("sapphire"), vec!["blue"]);
        assert_eq!(shared.snapshot().replacements("sapphire"), vec!["cyan"]);
    }

    #[test]
    fn test_failed_reload_keeps_previous_graph() {
        let parser = SynonymParser::default();
        let shared = SharedTermGraph::from_document("azure, blue", &parser).unwrap();

        let error = shared.reload("azure, blue\nazure", &parser).unwrap_err();
        assert_eq!(error.line_number(), Some(1));
        assert_eq!(shared.snapshot().equivalents("azure"), vec!["blue"]);
    }

    #[test]
    fn test_replace_returns_previous() {
        let shared = SharedTermGraph::default();
        assert!(shared.snapshot().is_empty());

        let parser = SynonymParser::default();
        let previous = shared.replace(parser.parse("azure, blue").unwrap());
        assert!(previous.is_empty());
        assert_eq!(shared.snapshot().len(), 2);
    }

    #[test]
    fn test_concurrent_readers() {
        let parser = SynonymParser::default();
        let shared = Arc::new(
            SharedTermGraph::from_document("azure, blue, cyan", &parser).unwrap(),
        );

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let shared = Arc::clone(&shared);
                thread::spawn(move || {
                    for _ in 0..100 {
                        let snapshot = shared.snapshot();
                        let equivalents = snapshot.equivalents("azure");
                        assert!(
                            equivalents == vec!["blue", "cyan"] || equivalents.is_empty(),
                            "torn snapshot: {equivalents:?}"
                        );
                    }
                })
            })
            .collect();

        shared.reload("sapphire => azure", &parser).unwrap();

        for handle in handles {
            handle.join().unwrap();
        }
    }
}
