//! JSON interchange form of a navigation index.
//!
//! ```json
//! { "var": "i2c_8h",
//!   "entries": [
//!     { "name": "I2C_Init", "anchor": "i2c_8h.html#a686a..." },
//!     { "name": "I2C_Mode_t", "anchor": "i2c_8h.html#ae456...",
//!       "children": [ { "name": "I2C_FAST_MODE", "anchor": "..." } ] },
//!     { "name": "Files", "anchor": "files.html", "script": "files_dup" } ] }
//! ```
//!
//! A bare array of entries is accepted as well and is what gets written when
//! the index has no variable name. Unknown keys are rejected.
use crate::convert;
use crate::error::{Defect, IndexError};
use crate::index::NavIndex;
use navindex_parser::{RawChildren, RawEntry};
use navindex_types::IndexEntry;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum JsonDocument {
    Table(JsonTable),
    Entries(Vec<JsonEntry>),
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct JsonTable {
    #[serde(rename = "var", default, skip_serializing_if = "Option::is_none")]
    var_name: Option<String>,
    entries: Vec<JsonEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct JsonEntry {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    anchor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    children: Option<Vec<JsonEntry>>,
    /// Name of the script holding this entry's children.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    script: Option<String>,
}

pub(crate) fn from_json(source: &str) -> Result<NavIndex, IndexError> {
    let (var_name, entries) = match serde_json::from_str(source)? {
        JsonDocument::Table(table) => (table.var_name, table.entries),
        JsonDocument::Entries(entries) => (None, entries),
    };
    let mut path = Vec::new();
    let raw = JsonEntry::into_raw_list(entries, &mut path)?;
    Ok(NavIndex::new(var_name, convert::from_raw(raw)?))
}

pub(crate) fn to_json(index: &NavIndex, var_name: Option<String>, pretty: bool) -> Result<String, IndexError> {
    let entries: Vec<JsonEntry> = index.entries().iter().map(JsonEntry::from_entry).collect();
    let document = match var_name {
        Some(var_name) => JsonDocument::Table(JsonTable {
            var_name: Some(var_name),
            entries,
        }),
        None => JsonDocument::Entries(entries),
    };
    let text = if pretty {
        serde_json::to_string_pretty(&document)?
    } else {
        serde_json::to_string(&document)?
    };
    Ok(text)
}

impl JsonEntry {
    fn into_raw_list(entries: Vec<JsonEntry>, path: &mut Vec<usize>) -> Result<Vec<RawEntry>, IndexError> {
        let mut raw = Vec::with_capacity(entries.len());
        for (i, entry) in entries.into_iter().enumerate() {
            path.push(i);
            raw.push(entry.into_raw(path)?);
            path.pop();
        }
        Ok(raw)
    }

    fn into_raw(self, path: &mut Vec<usize>) -> Result<RawEntry, IndexError> {
        let children = match (self.children, self.script) {
            (Some(_), Some(_)) => {
                return Err(IndexError::malformed(path, &self.name, Defect::ConflictingChildren));
            }
            (Some(children), None) => RawChildren::List(JsonEntry::into_raw_list(children, path)?),
            (None, Some(script)) => RawChildren::Script(script),
            (None, None) => RawChildren::None,
        };
        Ok(RawEntry::new(self.name, self.anchor, children))
    }

    fn from_entry(entry: &IndexEntry) -> Self {
        let (children, script) = match entry {
            IndexEntry::Leaf { .. } => (None, None),
            IndexEntry::Group { children, .. } => {
                (Some(children.iter().map(JsonEntry::from_entry).collect()), None)
            }
            IndexEntry::Deferred { script, .. } => (None, Some(script.clone())),
        };
        Self {
            name: entry.name().to_string(),
            anchor: entry.anchor().map(|a| a.as_str().to_string()),
            children,
            script,
        }
    }
}
