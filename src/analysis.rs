//! Text analysis module.
//!
//! Holds the synonym file parser and the term graph it produces.

pub mod synonym;
