//! Reverse index from anchor paths to entry positions.
//!
//! The documentation generator ships a companion `NAVTREEINDEX` script so the
//! browser can find which tree node to highlight for the page being shown.
//! [`AnchorIndex`] builds the same mapping for a loaded index.
use crate::error::IndexError;
use crate::index::NavIndex;
use log::{debug, warn};
use navindex_types::{Anchor, EntryPath};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnchorIndex {
    targets: BTreeMap<Anchor, EntryPath>,
}

impl AnchorIndex {
    /// Maps every anchor in `index` to the path of the first entry linking to it.
    pub fn build(index: &NavIndex) -> Self {
        let mut targets: BTreeMap<Anchor, EntryPath> = BTreeMap::new();
        for (path, entry) in index.iter() {
            let Some(anchor) = entry.anchor() else {
                continue;
            };
            if let Some(existing) = targets.get(anchor) {
                warn!(
                    "Anchor '{}' of '{}' at {} already indexed at {}; keeping the first",
                    anchor,
                    entry.name(),
                    path,
                    existing
                );
                continue;
            }
            targets.insert(anchor.clone(), path);
        }
        debug!("Built anchor index with {} targets", targets.len());
        Self { targets }
    }

    pub fn get(&self, anchor: &str) -> Option<&EntryPath> {
        self.targets.get(anchor)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Anchors in sorted order with their entry paths.
    pub fn iter(&self) -> impl Iterator<Item = (&Anchor, &EntryPath)> {
        self.targets.iter()
    }

    /// Writes the mapping as a navigation-index script:
    ///
    /// ```text
    /// var NAVTREEINDEX0 =
    /// {
    /// "i2c_8h.html#a686a...":[11],
    /// "i2c_8h.html#ae456...a0ad...":[10,1]
    /// };
    /// ```
    ///
    /// Keys are written as JSON strings, so the object body is valid JSON.
    pub fn to_script(&self, var_name: &str) -> Result<String, IndexError> {
        let mut out = format!("var {} =\n{{\n", var_name);
        let last = self.targets.len().saturating_sub(1);
        for (i, (anchor, path)) in self.targets.iter().enumerate() {
            let indices: Vec<String> = path.indices().iter().map(usize::to_string).collect();
            out.push_str(&serde_json::to_string(anchor.as_str())?);
            out.push_str(&format!(":[{}]", indices.join(",")));
            if i < last {
                out.push(',');
            }
            out.push('\n');
        }
        out.push_str("};");
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use navindex_types::IndexEntry;

    #[test]
    fn test_first_occurrence_wins() {
        let _ = env_logger::builder().is_test(true).try_init();
        let index = NavIndex::new(
            None,
            vec![
                IndexEntry::leaf("A", "shared.html#x"),
                IndexEntry::group("G", None, vec![IndexEntry::leaf("B", "shared.html#x")]),
                IndexEntry::leaf("C", "c.html"),
            ],
        );
        let anchors = AnchorIndex::build(&index);
        assert_eq!(anchors.len(), 2);
        assert_eq!(anchors.get("shared.html#x").map(|p| p.to_string()), Some("0".to_string()));
        assert_eq!(anchors.get("c.html").map(|p| p.to_string()), Some("2".to_string()));
    }

    #[test]
    fn test_script_output() {
        let index = NavIndex::new(
            None,
            vec![
                IndexEntry::leaf("B", "b.html"),
                IndexEntry::group("G", None, vec![IndexEntry::leaf("A", "a.html#1")]),
            ],
        );
        let script = AnchorIndex::build(&index).to_script("NAVTREEINDEX0").unwrap();
        assert_eq!(script, "var NAVTREEINDEX0 =\n{\n\"a.html#1\":[1,0],\n\"b.html\":[0]\n};");
    }

    #[test]
    fn test_script_keys_are_escaped() {
        let index = NavIndex::parse(r#"[ [ "A", "dir\\page.html#x", null ], [ "B", "say \"hi\".html\t", null ] ]"#).unwrap();
        let script = AnchorIndex::build(&index).to_script("NAVTREEINDEX0").unwrap();
        let body = script
            .strip_prefix("var NAVTREEINDEX0 =\n")
            .and_then(|s| s.strip_suffix(';'))
            .unwrap();
        let object: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(object["dir\\page.html#x"], serde_json::json!([0]));
        assert_eq!(object["say \"hi\".html\t"], serde_json::json!([1]));
    }
}
