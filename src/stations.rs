//! Built-in BBC stations
//!
//! The BBC stream endpoints want a fresh timestamp in the query string,
//! so URLs are built when the catalog is created rather than stored.

use crate::model::{Catalog, Entry};
use chrono::{DateTime, Utc};

/// Group symbol and tag for the built-in stations
pub const BBC_SYMBOL: &str = "bbc";

/// (machine name, title, stream id)
const BBC_STATIONS: &[(&str, &str, &str)] = &[
    ("radio1", "BBC Radio 1", "radio1"),
    ("radio2", "BBC Radio 2", "radio2"),
    ("radio3", "BBC Radio 3 Classical", "radio3"),
    ("radio4", "BBC Radio 4", "radio4fm"),
    ("radio5", "BBC Radio 5 Live", "radio5live"),
    ("6music", "BBC Radio 6 Music", "6music"),
];

fn bbc_url(stream_id: &str, now: DateTime<Utc>) -> String {
    format!(
        "http://bbcmedia.ic.llnwd.net/stream/bbcmedia_{}_mf_p?s={}",
        stream_id,
        now.timestamp()
    )
}

/// Build the BBC station catalog, stamping URLs with `now`
pub fn bbc_catalog(now: DateTime<Utc>) -> Catalog {
    Catalog::from_pairs(
        Some(BBC_SYMBOL),
        BBC_STATIONS.iter().map(|&(name, title, stream_id)| {
            let entry = Entry::new(title, bbc_url(stream_id, now)).with_tags([BBC_SYMBOL]);
            (name, entry)
        }),
    )
}
