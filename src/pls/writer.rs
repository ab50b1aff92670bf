//! PLS playlist writer
//!
//! Output layout:
//! ```text
//! [playlist]
//!
//! Title1=<title>
//! File1=<location>
//! Length1=<length>
//!
//! NumberOfEntries=<N>
//! Version=2
//! ```

use crate::model::Entry;

/// PLS format version written in the footer
pub const PLS_VERSION: u32 = 2;

/// Format a single PLS stanza at a 1-based position
pub fn format_entry(title: &str, location: &str, length: i64, position: usize) -> String {
    format!(
        "Title{n}={title}\nFile{n}={location}\nLength{n}={length}",
        n = position
    )
}

/// Format a complete playlist from entries in traversal order
///
/// Positions are assigned here, starting at 1.
pub fn format_playlist<'a, I>(entries: I) -> String
where
    I: IntoIterator<Item = &'a Entry>,
{
    let stanzas: Vec<String> = entries
        .into_iter()
        .enumerate()
        .map(|(idx, entry)| entry.render(idx + 1))
        .collect();

    format!(
        "[playlist]\n\n{content}\n\nNumberOfEntries={count}\nVersion={version}",
        content = stanzas.join("\n\n"),
        count = stanzas.len(),
        version = PLS_VERSION,
    )
}
