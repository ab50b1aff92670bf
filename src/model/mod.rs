//! Playlist data model
//!
//! Entries, the ordered collection they are selected from, and the
//! named catalog used for grouped station tables.

mod catalog;
mod collection;
mod entry;

pub use catalog::Catalog;
pub use collection::{select_by_tags, Collection, Selection};
pub use entry::{Entry, UNKNOWN_LENGTH};
