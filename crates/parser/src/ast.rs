//! Defines the raw syntax tree of a navigation-tree script.
//!
//! Nothing here is validated: names may be empty and entries may lack both a
//! link and children. Validation happens when the tree is turned into index
//! entries.

/// A parsed script: `var <var_name> = [ ... ];`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawScript {
    /// The declared variable, if the script had a `var` declaration.
    pub var_name: Option<String>,
    pub entries: Vec<RawEntry>,
}

/// One `[ name, anchor, children ]` tuple.
#[derive(Debug, Clone, PartialEq)]
pub struct RawEntry {
    pub name: String,
    pub anchor: Option<String>,
    pub children: RawChildren,
}

/// The third slot of an entry tuple.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RawChildren {
    /// `null`, or the slot was omitted.
    #[default]
    None,
    /// An inline list of nested entries.
    List(Vec<RawEntry>),
    /// The name of another script holding the children.
    Script(String),
}

impl RawEntry {
    pub fn new(name: impl Into<String>, anchor: Option<String>, children: RawChildren) -> Self {
        Self {
            name: name.into(),
            anchor,
            children,
        }
    }
}
