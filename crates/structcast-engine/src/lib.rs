// Engine module - depth-bounded record traversal and report rendering
// This layer sits between the declarative value model (types) and the CLI

pub mod error;
pub mod filter;
pub mod msg;
mod traverse;

pub use error::{Error, Result};
pub use filter::FieldFilter;
pub use msg::Msg;

use structcast_types::Value;

/// Depth applied when the caller passes a value below the minimum of 1.
pub const DEFAULT_MAX_DEPTH: usize = 3;

// Facade API - stable public interface for the CLI layer

/// Traverse `root` into an ordered entry sequence and wrap it in a [`Msg`].
///
/// `root` must be a record after stripping at most one optional level;
/// anything else is [`Error::InvalidRootKind`]. `max_depth` below 1 is
/// normalized to [`DEFAULT_MAX_DEPTH`]. Exclusion patterns that fail to
/// compile are fatal. Node-level faults inside the traversal never surface
/// here: the returned entry sequence is simply (possibly) truncated.
pub fn parse_into_model(
    root: &Value,
    indent_unit: &str,
    max_depth: usize,
    exclude_patterns: &[String],
) -> Result<Msg> {
    let filter = FieldFilter::compile(exclude_patterns)?;
    let max_depth = if max_depth == 0 {
        DEFAULT_MAX_DEPTH
    } else {
        max_depth
    };
    let record = root.as_record().ok_or(Error::InvalidRootKind {
        found: root.deref_once().map_or("absent optional", Value::kind),
    })?;

    let entries = traverse::collect(record, max_depth, &filter);
    Ok(Msg {
        title: record.simple_name().to_string(),
        entries,
        indent_unit: indent_unit.to_string(),
        max_depth,
        exclude_patterns: exclude_patterns.to_vec(),
    })
}
