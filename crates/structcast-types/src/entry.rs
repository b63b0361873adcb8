use serde::Serialize;

/// Marker value of a group header announcing an expanded list field.
pub const GROUP_MARKER: &str = "[...]";

/// One key/value/depth triple produced by traversal. Header entries carry an
/// empty value; group headers carry [`GROUP_MARKER`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub key: String,
    pub value: String,
    pub depth: usize,
}

impl Entry {
    pub fn leaf(key: impl Into<String>, value: impl Into<String>, depth: usize) -> Self {
        Entry {
            key: key.into(),
            value: value.into(),
            depth,
        }
    }

    pub fn header(key: impl Into<String>, depth: usize) -> Self {
        Entry::leaf(key, "", depth)
    }

    pub fn group(key: impl Into<String>, depth: usize) -> Self {
        Entry::leaf(key, GROUP_MARKER, depth)
    }

    pub fn is_header(&self) -> bool {
        self.value.is_empty()
    }
}
