pub mod anchor;
pub mod entry;
pub mod path;

pub use anchor::Anchor;
pub use entry::IndexEntry;
pub use path::EntryPath;
