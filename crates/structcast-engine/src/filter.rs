use crate::error::{Error, Result};
use regex::Regex;

/// Compiled field-name exclusion filter. Patterns are unanchored regular
/// expressions; a field is skipped when any pattern matches its name.
/// Immutable after construction and shareable across traversals.
#[derive(Debug, Clone)]
pub struct FieldFilter {
    patterns: Vec<Regex>,
}

impl FieldFilter {
    pub fn compile(patterns: &[String]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|p| {
                Regex::new(p).map_err(|source| Error::Pattern {
                    pattern: p.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(FieldFilter { patterns })
    }

    pub fn matches(&self, field_name: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(field_name))
    }
}
