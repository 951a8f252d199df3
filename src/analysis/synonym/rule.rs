//! Line tokenizer and rule builder for Solr synonym lines.
//!
//! A line holds either an equivalence group or an explicit mapping:
//!
//! ```text
//! azure, blue, cyan                      # equivalence group
//! sapphire, prussian blue => azure, blue # explicit mapping
//! ```
//!
//! [`SynonymRule::parse`] splits a line into its two term lists, and
//! [`SynonymRule::build_graph`] turns them into the edges that line defines.

use std::borrow::Cow;

use log::trace;

use crate::error::SyntaxError;

use super::config::ParserConfig;
use super::term_graph::{Edge, TermGraph};

/// Which term list the tokenizer is filling.
///
/// The only transition is `CollectingEquivalents -> CollectingReplacements`,
/// taken when the `=>` arrow is completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleState {
    CollectingEquivalents,
    CollectingReplacements,
}

/// The terms of a single synonym line, before any edges are built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynonymRule {
    /// Terms left of the arrow, or the whole group when there is no arrow.
    pub equivalents: Vec<String>,
    /// Terms right of the arrow.
    pub replacements: Vec<String>,
}

impl SynonymRule {
    /// Tokenize one line.
    ///
    /// The line is trimmed, then scanned character by character:
    ///
    /// - `#` ends the line; the rest is a comment.
    /// - `,` and `=` complete the current term. Both fail on an empty term or
    ///   when they are the last character of the line.
    /// - `>` completes the arrow. It must follow `=` and may only appear once.
    /// - Spaces before a term are dropped, spaces after it are trimmed.
    ///
    /// The `=` of an arrow completes a term like any separator, so the last
    /// term before `=>` lands in the equivalents list before the state switches.
    ///
    /// # Example
    ///
    /// ```
    /// use synonym_graph::analysis::synonym::SynonymRule;
    ///
    /// let rule = SynonymRule::parse("sapphire, prussian blue => azure # blues").unwrap();
    /// assert_eq!(rule.equivalents, vec!["sapphire", "prussian blue"]);
    /// assert_eq!(rule.replacements, vec!["azure"]);
    /// ```
    pub fn parse(line: &str) -> std::result::Result<Self, SyntaxError> {
        let line = line.trim();
        let mut rule = SynonymRule::default();
        let mut state = RuleState::CollectingEquivalents;
        let mut term = String::new();
        let mut previous = None;

        for (position, character) in line.char_indices() {
            match character {
                '#' | '\n' => break,
                ',' | '=' => {
                    let is_last = position + character.len_utf8() == line.len();
                    if is_last || term.is_empty() {
                        return Err(SyntaxError::InvalidCharacter {
                            character,
                            position,
                        });
                    }
                    rule.push(state, term.trim_end_matches(' '));
                    term.clear();
                }
                '>' => {
                    if previous != Some('=') || state == RuleState::CollectingReplacements {
                        return Err(SyntaxError::InvalidCharacter {
                            character,
                            position,
                        });
                    }
                    state = RuleState::CollectingReplacements;
                }
                ' ' if term.is_empty() => {}
                _ => term.push(character),
            }
            previous = Some(character);
        }

        let term = term.trim_end_matches(' ');
        if !term.is_empty() {
            rule.push(state, term);
        }

        Ok(rule)
    }

    /// Whether the line held no terms (blank or comment only).
    pub fn is_empty(&self) -> bool {
        self.equivalents.is_empty() && self.replacements.is_empty()
    }

    /// Whether the line used the `=>` arrow.
    pub fn is_explicit(&self) -> bool {
        !self.replacements.is_empty()
    }

    /// Build the edges defined by this rule.
    ///
    /// - An explicit mapping points every equivalent at the first replacement
    ///   and chains the replacements together; the last one gets no edge.
    /// - An equivalence group becomes a cycle, unless `expand` is off, in which
    ///   case every term is replaced by the first one.
    /// - A lone term is rejected. An empty rule yields an empty graph.
    pub fn build_graph(
        &self,
        config: &ParserConfig,
    ) -> std::result::Result<TermGraph, SyntaxError> {
        let mut graph = TermGraph::with_ignore_case(config.ignore_case);
        let Some((first, _)) = self.equivalents.split_first() else {
            return Ok(graph);
        };

        let replacements: Cow<'_, [String]> =
            if self.replacements.is_empty() && !config.expand && self.equivalents.len() > 1 {
                Cow::Owned(vec![first.clone()])
            } else {
                Cow::Borrowed(&self.replacements)
            };

        if let Some(target) = replacements.first() {
            for term in &self.equivalents {
                graph.insert(term.as_str(), Edge::Replacement(target.clone()));
            }
            for pair in replacements.windows(2) {
                graph.insert(pair[0].as_str(), Edge::Equivalence(pair[1].clone()));
            }
        } else if self.equivalents.len() > 1 {
            for pair in self.equivalents.windows(2) {
                graph.insert(pair[0].as_str(), Edge::Equivalence(pair[1].clone()));
            }
            if let Some(last) = self.equivalents.last() {
                graph.insert(last.as_str(), Edge::Equivalence(first.clone()));
            }
        } else {
            return Err(SyntaxError::MissingMapping {
                term: first.clone(),
            });
        }

        Ok(graph)
    }

    fn push(&mut self, state: RuleState, term: &str) {
        let terms = match state {
            RuleState::CollectingEquivalents => &mut self.equivalents,
            RuleState::CollectingReplacements => &mut self.replacements,
        };
        terms.push(term.to_string());
    }
}

/// Parse one line into the partial graph it defines, with default options.
pub fn parse_line(line: &str) -> std::result::Result<TermGraph, SyntaxError> {
    parse_line_with(line, &ParserConfig::default())
}

/// Parse one line into the partial graph it defines.
pub fn parse_line_with(
    line: &str,
    config: &ParserConfig,
) -> std::result::Result<TermGraph, SyntaxError> {
    let rule = SynonymRule::parse(line)?;
    let graph = rule.build_graph(config)?;
    if !rule.is_empty() {
        trace!(
            "Parsed rule {:?} => {:?} into {} edges",
            rule.equivalents,
            rule.replacements,
            graph.len()
        );
    }
    Ok(graph)
}
