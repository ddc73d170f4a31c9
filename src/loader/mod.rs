//! Configuration for reading and writing indexes.
mod builder;
mod config;

pub use builder::IndexLoader;
pub use config::{Format, SerializeOptions};
