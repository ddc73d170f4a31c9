use crate::anchor::Anchor;

/// One symbol in a navigation index.
///
/// Each variant carries the symbol name. A leaf always links somewhere. A
/// loaded group always has members: loading rejects an entry with neither a
/// link nor members. The constructors do not check this, so a hand-built
/// `Group` with no children and no anchor serializes to text that loading
/// rejects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexEntry {
    /// A symbol with a direct documentation link and no members.
    Leaf { name: String, anchor: Anchor },
    /// A collection (usually an enumeration) whose members are indexed in
    /// declaration order. The collection may have a page of its own.
    Group {
        name: String,
        anchor: Option<Anchor>,
        children: Vec<IndexEntry>,
    },
    /// A collection whose members live in another navigation script,
    /// named by `script` (e.g. `files_dup`).
    Deferred {
        name: String,
        anchor: Option<Anchor>,
        script: String,
    },
}

impl IndexEntry {
    pub fn leaf(name: impl Into<String>, anchor: impl Into<Anchor>) -> Self {
        IndexEntry::Leaf {
            name: name.into(),
            anchor: anchor.into(),
        }
    }

    pub fn group(name: impl Into<String>, anchor: Option<Anchor>, children: Vec<IndexEntry>) -> Self {
        IndexEntry::Group {
            name: name.into(),
            anchor,
            children,
        }
    }

    pub fn deferred(name: impl Into<String>, anchor: Option<Anchor>, script: impl Into<String>) -> Self {
        IndexEntry::Deferred {
            name: name.into(),
            anchor,
            script: script.into(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            IndexEntry::Leaf { name, .. }
            | IndexEntry::Group { name, .. }
            | IndexEntry::Deferred { name, .. } => name,
        }
    }

    pub fn anchor(&self) -> Option<&Anchor> {
        match self {
            IndexEntry::Leaf { anchor, .. } => Some(anchor),
            IndexEntry::Group { anchor, .. } | IndexEntry::Deferred { anchor, .. } => anchor.as_ref(),
        }
    }

    /// Nested members; empty for leaves and deferred groups.
    pub fn children(&self) -> &[IndexEntry] {
        match self {
            IndexEntry::Group { children, .. } => children.as_slice(),
            _ => &[],
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, IndexEntry::Leaf { .. })
    }

    pub fn is_group(&self) -> bool {
        matches!(self, IndexEntry::Group { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let entry = IndexEntry::group(
            "I2C_Mode_t",
            Some(Anchor::from("i2c_8h.html#ae4566330c54fb5c0b7195f57823a38f9")),
            vec![IndexEntry::leaf("I2C_FAST_MODE", "i2c_8h.html#x")],
        );
        assert_eq!(entry.name(), "I2C_Mode_t");
        assert!(entry.is_group());
        assert_eq!(entry.children().len(), 1);
        assert_eq!(entry.children()[0].anchor().map(Anchor::as_str), Some("i2c_8h.html#x"));
    }

    #[test]
    fn test_deferred_has_no_inline_children() {
        let entry = IndexEntry::deferred("Files", Some(Anchor::from("files.html")), "files_dup");
        assert!(entry.children().is_empty());
        assert!(!entry.is_leaf());
    }
}
