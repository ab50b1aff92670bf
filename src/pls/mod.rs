//! PLS playlist output
//!
//! Serializes entries into the PLS text format and produces the
//! listing summaries shown by the CLI.

pub mod listing;
pub mod writer;

pub use listing::{format_entry_listing, format_tag_listing};
pub use writer::{format_entry, format_playlist, PLS_VERSION};
