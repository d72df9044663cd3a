//! Host-facing I/O helpers.
//!
//! The core never touches files; these readers and writers exist for hosts
//! that exchange adjacency and results as JSON.

pub mod json;

pub use json::{read_adjacency, read_options, write_table};
