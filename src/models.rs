use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Marker the user types in place of a real line break.
pub const LINE_BREAK_MARKER: &str = "\\n";

/// SnippetBody
/// The value stored under a snippet's name. Field order is the order editors show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetBody {
    pub prefix: String,
    pub body: Vec<String>,
    pub description: String,
}

impl SnippetBody {
    pub fn new(prefix: String, code: &str, description: String) -> SnippetBody {
        SnippetBody {
            prefix,
            body: split_code_body(code),
            description,
        }
    }
}

/// SnippetRecord
/// A single snippet keyed by its name, serialized as `{ "<name>": { ... } }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetRecord {
    pub name: String,
    pub snippet: SnippetBody,
}

impl SnippetRecord {
    pub fn new(name: String, snippet: SnippetBody) -> SnippetRecord {
        SnippetRecord { name, snippet }
    }

    /// Pretty JSON with 2-space indentation, no trailing newline.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Serialize for SnippetRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.name, &self.snippet)?;
        map.end()
    }
}

/// Splits on the literal backslash-n marker. Segments are kept untrimmed and
/// an empty input still yields one empty line.
pub fn split_code_body(code: &str) -> Vec<String> {
    code.split(LINE_BREAK_MARKER).map(String::from).collect()
}
