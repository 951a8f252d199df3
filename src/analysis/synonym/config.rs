//! Parser configuration for synonym documents.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Options controlling how a synonym document is turned into a term graph.
///
/// The defaults reproduce plain Solr synonym semantics: equivalence groups are
/// expanded into cycles, terms are case-sensitive, and duplicate definitions
/// across lines are reported as warnings.
///
/// # Example
///
/// ```
/// use synonym_graph::analysis::synonym::ParserConfig;
///
/// let config = ParserConfig::from_json(r#"{"expand": false}"#).unwrap();
/// assert!(!config.expand);
/// assert!(!config.ignore_case);
/// assert!(config.report_duplicates);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParserConfig {
    /// Expand equivalence groups into cycles.
    ///
    /// When false, `a, b, c` is read as `a, b, c => a`.
    pub expand: bool,

    /// Lowercase terms while parsing and while querying.
    pub ignore_case: bool,

    /// Collect a warning for every term redefined by a later line.
    pub report_duplicates: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            expand: true,
            ignore_case: false,
            report_duplicates: true,
        }
    }
}

impl ParserConfig {
    /// Load a configuration from a JSON object.
    ///
    /// Missing fields take their default value; unknown fields are rejected.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set whether equivalence groups are expanded.
    pub fn with_expand(mut self, expand: bool) -> Self {
        self.expand = expand;
        self
    }

    /// Set whether terms are matched case-insensitively.
    pub fn with_ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    /// Set whether duplicate definitions produce warnings.
    pub fn with_report_duplicates(mut self, report_duplicates: bool) -> Self {
        self.report_duplicates = report_duplicates;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SynonymError;

    #[test]
    fn test_default_config() {
        let config = ParserConfig::default();
        assert!(config.expand);
        assert!(!config.ignore_case);
        assert!(config.report_duplicates);
    }

    #[test]
    fn test_from_json_partial() {
        let config = ParserConfig::from_json(r#"{"ignore_case": true}"#).unwrap();
        assert_eq!(config, ParserConfig::default().with_ignore_case(true));

        let config = ParserConfig::from_json("{}").unwrap();
        assert_eq!(config, ParserConfig::default());
    }

    #[test]
    fn test_from_json_rejects_unknown_fields() {
        let result = ParserConfig::from_json(r#"{"format": "wordnet"}"#);
        assert!(matches!(result, Err(SynonymError::Json(_))));
    }

    #[test]
    fn test_builder_methods() {
        let config = ParserConfig::default()
            .with_expand(false)
            .with_ignore_case(true)
            .with_report_duplicates(false);
        assert!(!config.expand);
        assert!(config.ignore_case);
        assert!(!config.report_duplicates);
    }
}
