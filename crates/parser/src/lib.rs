//! Reader and writer for documentation navigation-tree scripts.
//!
//! The documentation generator describes each page's symbol tree as a small
//! script, `var i2c_8h = [ [ "I2C_Init", "i2c_8h.html#a686a...", null ], ... ];`.
//! This crate turns such a script into an unvalidated syntax tree and writes
//! one back out in the same layout.

pub mod ast;
pub mod error;
mod parser;
pub mod writer;

// --- Public API ---
pub use ast::{RawChildren, RawEntry, RawScript};
pub use error::{ParseError, Position};
pub use parser::{DEFAULT_MAX_DEPTH, MAX_DEPTH_LIMIT, parse_script, parse_script_with_depth};
pub use writer::{WriteOptions, write_script};
