//! Structural diff of JSON documents, used to compare rendered payloads with
//! expected fixtures.

pub mod engine;
pub mod format;
pub mod result;

pub use engine::{diff, diff_with_options, DiffOptions};
pub use format::{format_entry, DiffTally};
pub use result::DiffEntry;
