//! Error types for the synonym graph library.
//!
//! Parsing a synonym document fails with [`SynonymError::InvalidSyntax`], which
//! carries the raw text and the 0-based number of the offending line together
//! with the line-level [`SyntaxError`] that rejected it.
//!
//! # Examples
//!
//! ```
//! use synonym_graph::analysis::synonym::parse;
//! use synonym_graph::error::SynonymError;
//!
//! match parse("sapphire, azure => blue\nazure >") {
//!     Err(SynonymError::InvalidSyntax { line_number, .. }) => assert_eq!(line_number, 1),
//!     other => panic!("unexpected result: {other:?}"),
//! }
//! ```

use thiserror::Error;

/// The main error type for synonym graph operations.
#[derive(Error, Debug)]
pub enum SynonymError {
    /// A line of the synonym document could not be parsed.
    #[error("Invalid syntax at line {line_number}: '{line}': {source}")]
    InvalidSyntax {
        /// Raw text of the rejected line.
        line: String,
        /// 0-based line number.
        line_number: usize,
        /// What the line tokenizer rejected.
        #[source]
        source: SyntaxError,
    },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with SynonymError.
pub type Result<T> = std::result::Result<T, SynonymError>;

impl SynonymError {
    /// Create a new invalid syntax error for a line of a document.
    pub fn invalid_syntax<S: Into<String>>(
        line: S,
        line_number: usize,
        source: SyntaxError,
    ) -> Self {
        SynonymError::InvalidSyntax {
            line: line.into(),
            line_number,
            source,
        }
    }

    /// Whether this error was raised by malformed synonym syntax.
    pub fn is_invalid_syntax(&self) -> bool {
        matches!(self, SynonymError::InvalidSyntax { .. })
    }

    /// The 0-based line number of a syntax error.
    pub fn line_number(&self) -> Option<usize> {
        match self {
            SynonymError::InvalidSyntax { line_number, .. } => Some(*line_number),
            _ => None,
        }
    }
}

/// Why a single line was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    /// A delimiter appeared where it cannot: an empty term, a trailing
    /// separator, a `>` not preceded by `=`, or a second arrow.
    #[error("invalid character '{character}' at byte {position}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Byte offset in the trimmed line.
        position: usize,
    },

    /// A single term without any mapping.
    #[error("term '{term}' has no synonyms or replacements")]
    MissingMapping {
        /// The lone term.
        term: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = SynonymError::invalid_syntax(
            "azure > blue",
            3,
            SyntaxError::InvalidCharacter {
                character: '>',
                position: 6,
            },
        );
        assert!(error.is_invalid_syntax());
        assert_eq!(error.line_number(), Some(3));
        assert_eq!(
            error.to_string(),
            "Invalid syntax at line 3: 'azure > blue': invalid character '>' at byte 6"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<bool>("nope").unwrap_err();
        let error = SynonymError::from(json_error);

        assert!(!error.is_invalid_syntax());
        assert_eq!(error.line_number(), None);
        match error {
            SynonymError::Json(_) => {} // Expected
            _ => panic!("Expected JSON error variant"),
        }
    }

    #[test]
    fn test_syntax_error_display() {
        let error = SyntaxError::MissingMapping {
            term: "azure".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "term 'azure' has no synonyms or replacements"
        );
    }
}
