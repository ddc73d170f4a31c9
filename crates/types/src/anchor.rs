//! Newtype wrapper for documentation anchor paths.
//!
//! An anchor path names a page produced by the documentation generator and,
//! optionally, a location inside it: `i2c_8h.html#a686a0e3d2995005784771e68358e4185`.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// A link target inside the generated documentation.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Anchor(Arc<str>);

impl Anchor {
    /// Creates a new Anchor from a string
    pub fn new(path: impl Into<Arc<str>>) -> Self {
        Self(path.into())
    }

    /// Returns the full anchor path as written by the generator
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The page part of the anchor (everything before `#`).
    pub fn page(&self) -> &str {
        match self.0.split_once('#') {
            Some((page, _)) => page,
            None => &self.0,
        }
    }

    /// The in-page fragment (everything after `#`), if there is one.
    pub fn fragment(&self) -> Option<&str> {
        self.0.split_once('#').map(|(_, fragment)| fragment)
    }
}

impl From<String> for Anchor {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<&str> for Anchor {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl AsRef<str> for Anchor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Anchor {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
