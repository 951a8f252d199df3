//! Term graph built from a synonym document.
//!
//! Every term known to the graph owns exactly one outgoing [`Edge`]. A term
//! either points at the term it is replaced by, points at the next member of
//! its equivalence group, or is a dead end.
//!
//! ```text
//! "sapphire, prussian blue => azure, blue, cyan"
//!
//!   sapphire ──────┐
//!                  ├─replace─> azure ─equiv─> blue ─equiv─> cyan
//!   prussian blue ─┘
//! ```
//!
//! Queries follow these edges:
//!
//! - [`TermGraph::equivalents`] walks equivalence edges until the walk closes
//!   back on the starting term or reaches a term without one.
//! - [`TermGraph::replacements`] follows one replacement edge and returns the
//!   replacement's equivalents followed by the replacement itself.

use std::borrow::Cow;
use std::fmt;
use std::iter::FusedIterator;

use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};

/// The single outgoing edge of a term.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Edge {
    /// The term is known but leads nowhere.
    #[default]
    Terminal,
    /// The term is replaced by the target.
    Replacement(String),
    /// The target is the next member of the term's equivalence group.
    Equivalence(String),
}

impl Edge {
    /// Target of a replacement edge.
    pub fn replacement(&self) -> Option<&str> {
        match self {
            Edge::Replacement(target) => Some(target),
            _ => None,
        }
    }

    /// Target of an equivalence edge.
    pub fn equivalence(&self) -> Option<&str> {
        match self {
            Edge::Equivalence(target) => Some(target),
            _ => None,
        }
    }

    /// Whether the edge leads nowhere.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Edge::Terminal)
    }

    fn map_target(self, f: impl FnOnce(String) -> String) -> Self {
        match self {
            Edge::Terminal => Edge::Terminal,
            Edge::Replacement(target) => Edge::Replacement(f(target)),
            Edge::Equivalence(target) => Edge::Equivalence(f(target)),
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edge::Terminal => write!(f, "terminal"),
            Edge::Replacement(target) => write!(f, "replacement({target})"),
            Edge::Equivalence(target) => write!(f, "equivalence({target})"),
        }
    }
}

/// A term and its outgoing edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermNode {
    term: String,
    edge: Edge,
}

impl TermNode {
    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn edge(&self) -> &Edge {
        &self.edge
    }
}

/// Directed graph mapping each term to its single outgoing edge.
///
/// Nodes live in an arena in first-insertion order; a hash index maps terms to
/// arena slots. Inserting an existing term replaces its edge in place and hands
/// back the previous one, so callers decide what a redefinition means.
///
/// Terms are matched exactly (case and internal spacing included) unless the
/// graph was created with [`TermGraph::with_ignore_case`].
///
/// # Example
///
/// ```
/// use synonym_graph::analysis::synonym::{Edge, TermGraph};
///
/// let mut graph = TermGraph::new();
/// graph.insert("azure", Edge::Equivalence("blue".to_string()));
/// graph.insert("blue", Edge::Equivalence("azure".to_string()));
///
/// assert_eq!(graph.equivalents("azure"), vec!["blue"]);
/// assert!(graph.replacements("azure").is_empty());
/// ```
#[derive(Clone, Default)]
pub struct TermGraph {
    nodes: Vec<TermNode>,
    index: AHashMap<String, usize>,
    ignore_case: bool,
}

impl TermGraph {
    /// Create an empty, case-sensitive graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph that optionally lowercases terms on insert and lookup.
    pub fn with_ignore_case(ignore_case: bool) -> Self {
        Self {
            ignore_case,
            ..Self::default()
        }
    }

    /// Whether terms are matched case-insensitively.
    pub fn ignore_case(&self) -> bool {
        self.ignore_case
    }

    /// Number of terms in the graph.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Set the outgoing edge of `term`, returning the edge it replaced.
    pub fn insert<S: Into<String>>(&mut self, term: S, edge: Edge) -> Option<Edge> {
        let mut term = term.into();
        let mut edge = edge;
        if self.ignore_case {
            term = term.to_lowercase();
            edge = edge.map_target(|target| target.to_lowercase());
        }

        match self.index.get(&term) {
            Some(&slot) => Some(std::mem::replace(&mut self.nodes[slot].edge, edge)),
            None => {
                self.index.insert(term.clone(), self.nodes.len());
                self.nodes.push(TermNode { term, edge });
                None
            }
        }
    }

    /// Whether `term` has a node in the graph.
    pub fn contains(&self, term: &str) -> bool {
        self.slot(term).is_some()
    }

    /// The outgoing edge of `term`.
    pub fn edge(&self, term: &str) -> Option<&Edge> {
        self.slot(term).map(|slot| &self.nodes[slot].edge)
    }

    /// Iterate over terms and edges in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Edge)> {
        self.nodes.iter().map(|node| (node.term.as_str(), &node.edge))
    }

    /// Iterate over the nodes in first-insertion order.
    pub fn nodes(&self) -> &[TermNode] {
        &self.nodes
    }

    /// Consume the graph, yielding owned terms and edges in first-insertion order.
    pub fn into_entries(self) -> impl Iterator<Item = (String, Edge)> {
        self.nodes.into_iter().map(|node| (node.term, node.edge))
    }

    /// Lazily walk the equivalence chain starting at `term`.
    ///
    /// Only equivalence edges are followed. The walk ends at a term that is
    /// absent or has no equivalence edge, or when the next target is a term
    /// already visited (the starting term included), which is never yielded
    /// twice.
    pub fn iter_equivalents(&self, term: &str) -> Equivalents<'_> {
        let mut visited = AHashSet::new();
        let current = self.slot(term);
        if let Some(slot) = current {
            visited.insert(slot);
        }

        Equivalents {
            graph: self,
            current,
            visited,
        }
    }

    /// Terms equivalent to `term`, in chain order. Empty if there are none.
    pub fn equivalents(&self, term: &str) -> Vec<String> {
        self.iter_equivalents(term).map(str::to_string).collect()
    }

    /// The term `term` is directly replaced by.
    pub fn replacement(&self, term: &str) -> Option<&str> {
        self.edge(term).and_then(Edge::replacement)
    }

    /// What `term` is replaced by: the equivalents of its replacement target,
    /// followed by the target itself.
    ///
    /// Returns an empty vector when `term` is absent or not replaced.
    pub fn replacements(&self, term: &str) -> Vec<String> {
        match self.replacement(term) {
            Some(target) if !target.is_empty() => {
                let mut replacements = self.equivalents(target);
                replacements.push(target.to_string());
                replacements
            }
            _ => Vec::new(),
        }
    }

    /// Expand `term` the way a synonym filter rewrites a token stream.
    ///
    /// A replaced term yields its [`replacements`](Self::replacements);
    /// any other term yields itself followed by its equivalents.
    pub fn expand(&self, term: &str) -> Vec<String> {
        let replacements = self.replacements(term);
        if !replacements.is_empty() {
            return replacements;
        }

        let mut expanded = vec![self.normalize(term).into_owned()];
        expanded.extend(self.iter_equivalents(term).map(str::to_string));
        expanded
    }

    fn slot(&self, term: &str) -> Option<usize> {
        self.index.get(&*self.normalize(term)).copied()
    }

    fn normalize<'a>(&self, term: &'a str) -> Cow<'a, str> {
        if self.ignore_case {
            Cow::Owned(term.to_lowercase())
        } else {
            Cow::Borrowed(term)
        }
    }
}

impl<S: Into<String>> FromIterator<(S, Edge)> for TermGraph {
    fn from_iter<I: IntoIterator<Item = (S, Edge)>>(iter: I) -> Self {
        let mut graph = TermGraph::new();
        for (term, edge) in iter {
            graph.insert(term, edge);
        }
        graph
    }
}

/// Two graphs are equal when they map the same terms to the same edges,
/// regardless of insertion order.
impl PartialEq for TermGraph {
    fn eq(&self, other: &Self) -> bool {
        self.ignore_case == other.ignore_case
            && self.len() == other.len()
            && self.nodes.iter().all(|node| {
                other
                    .index
                    .get(&node.term)
                    .is_some_and(|&slot| other.nodes[slot].edge == node.edge)
            })
    }
}

impl Eq for TermGraph {}

impl fmt::Debug for TermGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Lazy walk along equivalence edges, created by [`TermGraph::iter_equivalents`].
#[derive(Debug, Clone)]
pub struct Equivalents<'a> {
    graph: &'a TermGraph,
    current: Option<usize>,
    visited: AHashSet<usize>,
}

impl<'a> Iterator for Equivalents<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let slot = self.current.take()?;
        let graph = self.graph;
        let target = graph.nodes[slot].edge.equivalence()?;
        if target.is_empty() {
            return None;
        }

        // A target without a node is still yielded; the walk ends after it.
        if let Some(&next) = graph.index.get(target) {
            if !self.visited.insert(next) {
                return None;
            }
            self.current = Some(next);
        }

        Some(target)
    }
}

impl FusedIterator for Equivalents<'_> {}
