//! Symbol index tables for generated documentation.
//!
//! A documentation generator describes the symbols of each documented header
//! as a small navigation script:
//!
//! ```text
//! var i2c_8h =
//! [
//!     [ "I2C_Mode_t", "i2c_8h.html#ae4566330c54fb5c0b7195f57823a38f9", [
//!       [ "I2C_STANDARD_MODE", "i2c_8h.html#ae45...a6d5...", null ],
//!       [ "I2C_FAST_MODE", "i2c_8h.html#ae45...a0ad...", null ]
//!     ] ],
//!     [ "I2C_Init", "i2c_8h.html#a686a0e3d2995005784771e68358e4185", null ]
//! ];
//! ```
//!
//! This crate loads such tables into an immutable [`NavIndex`], validates every
//! entry, looks symbols up by name or anchor, and writes the table back out
//! either in the same layout or as JSON.
//!
//! ## Example
//!
//! ```ignore
//! use navindex::{load, lookup};
//!
//! let entries = load(r#"[["I2C_Init", "i2c_8h.html#a686a", null]]"#)?;
//! let init = lookup(&entries, "I2C_Init").expect("indexed");
//! assert_eq!(init.anchor().unwrap().page(), "i2c_8h.html");
//! ```

pub mod anchors;
mod convert;
pub mod error;
pub mod index;
mod json;
pub mod loader;

pub use anchors::AnchorIndex;
pub use error::{Defect, IndexError};
pub use index::{NavIndex, Walk, load, lookup, serialize, walk};
pub use loader::{Format, IndexLoader, SerializeOptions};

// Re-export the entry model and the raw parser for consumers.
pub use navindex_parser as parser;
pub use navindex_types::{Anchor, EntryPath, IndexEntry};
