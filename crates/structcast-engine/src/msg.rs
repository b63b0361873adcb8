use serde::Serialize;
use structcast_types::Entry;

/// Title template: the "info" color wrapper understood by chat-style
/// markdown viewers.
const INFO_TEMPLATE: (&str, &str) = ("<font color=\"info\">", "</font>");

/// Value template: the "comment" color wrapper. Keys render bold. Strings are
/// inserted verbatim with no escaping; downstream viewers must tolerate
/// special characters.
const COMMENT_TEMPLATE: (&str, &str) = (" <font color=\"comment\">", "</font>");

/// The report produced by one traversal: title plus ordered entries, with the
/// rendering options that built it. Immutable after construction.
#[derive(Debug, Clone, Serialize)]
pub struct Msg {
    pub title: String,
    pub entries: Vec<Entry>,
    pub indent_unit: String,
    pub max_depth: usize,
    pub exclude_patterns: Vec<String>,
}

impl Msg {
    /// Render the report as indented chat-markdown. One line per entry, lines
    /// joined with a single newline, no trailing newline.
    pub fn render(&self) -> String {
        let mut lines = Vec::with_capacity(self.entries.len() + 1);
        lines.push(format!(
            "{}{}{}",
            INFO_TEMPLATE.0, self.title, INFO_TEMPLATE.1
        ));
        for entry in &self.entries {
            let mut line = self.indent_unit.repeat(entry.depth);
            line.push_str("**");
            line.push_str(&entry.key);
            line.push_str("**:");
            if !entry.value.is_empty() {
                line.push_str(COMMENT_TEMPLATE.0);
                line.push_str(&entry.value);
                line.push_str(COMMENT_TEMPLATE.1);
            }
            lines.push(line);
        }
        lines.join("\n")
    }
}
