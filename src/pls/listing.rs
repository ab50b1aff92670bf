//! Plain-text summaries of a selection

use crate::model::Entry;
use std::collections::BTreeMap;

/// One line per entry: `<title> (<tag>,<tag>)`
pub fn format_entry_listing<'a, I>(entries: I) -> String
where
    I: IntoIterator<Item = &'a Entry>,
{
    entries
        .into_iter()
        .map(|entry| format!("{} ({})", entry, entry.tags().collect::<Vec<_>>().join(",")))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Group entries by tag, one block per tag sorted by tag name
///
/// ```text
/// news:
///   BBC Radio 4
///   BBC Radio 5 Live
/// ```
pub fn format_tag_listing<'a, I>(entries: I) -> String
where
    I: IntoIterator<Item = &'a Entry>,
{
    let mut by_tag: BTreeMap<&str, Vec<&Entry>> = BTreeMap::new();
    for entry in entries {
        for tag in entry.tags() {
            by_tag.entry(tag).or_default().push(entry);
        }
    }

    by_tag
        .iter()
        .map(|(tag, entries)| {
            let titles: Vec<&str> = entries.iter().map(|e| e.title()).collect();
            format!("{}:\n  {}", tag, titles.join("\n  "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Entry> {
        vec![
            Entry::new("Radio 4", "u4").with_tags(["talk", "bbc"]),
            Entry::new("Jazz", "uj").with_tags(["music"]),
            Entry::new("Radio 3", "u3").with_tags(["music", "bbc"]),
            Entry::new("Untagged", "ux"),
        ]
    }

    #[test]
    fn test_entry_listing() {
        let text = format_entry_listing(&sample());
        assert_eq!(
            text,
            "Radio 4 (bbc,talk)\nJazz (music)\nRadio 3 (bbc,music)\nUntagged ()"
        );
    }

    #[test]
    fn test_tag_listing_sorted_by_tag() {
        let text = format_tag_listing(&sample());
        assert_eq!(
            text,
            "bbc:\n  Radio 4\n  Radio 3\nmusic:\n  Jazz\n  Radio 3\ntalk:\n  Radio 4"
        );
    }

    #[test]
    fn test_empty_listings() {
        let entries: Vec<Entry> = Vec::new();
        assert_eq!(format_entry_listing(&entries), "");
        assert_eq!(format_tag_listing(&entries), "");
    }
}
