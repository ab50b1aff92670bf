use crate::config::StreamRecord;
use crate::error::{PlaylistError, Result};
use crate::pls::writer::format_entry;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Length sentinel for streams with no known play time
pub const UNKNOWN_LENGTH: i64 = -1;

/// A single playlist item
///
/// Entries carry no position of their own; the writer numbers them
/// from traversal order when a playlist is rendered.
#[derive(Debug, Clone)]
pub struct Entry {
    /// Display title
    title: String,

    /// Stream URL or file path
    location: String,

    /// Play length, `-1` when unknown or infinite
    length: i64,

    /// Labels used for selection and grouping
    tags: BTreeSet<String>,
}

impl Entry {
    /// Create an entry with unknown length and no tags
    pub fn new(title: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            location: location.into(),
            length: UNKNOWN_LENGTH,
            tags: BTreeSet::new(),
        }
    }

    /// Set the play length
    pub fn with_length(mut self, length: i64) -> Self {
        self.length = length;
        self
    }

    /// Add tags to this entry
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Build an entry from a stream record
    ///
    /// `name` and `url` are required; a blank value counts as missing.
    pub fn from_record(record: &StreamRecord) -> Result<Self> {
        let title = required(record.name.as_deref(), "name")?;
        let location = required(record.url.as_deref(), "url")?;

        Ok(Self::new(title, location)
            .with_length(record.length.unwrap_or(UNKNOWN_LENGTH))
            .with_tags(record.tags.iter().flatten().cloned()))
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn length(&self) -> i64 {
        self.length
    }

    /// Tags in sorted order
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Render the three-line PLS stanza for this entry at a 1-based position
    pub fn render(&self, position: usize) -> String {
        format_entry(&self.title, &self.location, self.length, position)
    }
}

fn required<'a>(value: Option<&'a str>, field: &'static str) -> Result<&'a str> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(PlaylistError::MissingField { field }),
    }
}

// Identity is the title alone.
impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
    }
}

impl Eq for Entry {}

impl Hash for Entry {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.title.hash(state);
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.title.cmp(&other.title)
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: Option<&str>, url: Option<&str>) -> StreamRecord {
        StreamRecord {
            name: name.map(String::from),
            url: url.map(String::from),
            tags: None,
            length: None,
        }
    }

    #[test]
    fn test_new_defaults() {
        let entry = Entry::new("Radio", "http://example.com/radio");
        assert_eq!(entry.title(), "Radio");
        assert_eq!(entry.location(), "http://example.com/radio");
        assert_eq!(entry.length(), UNKNOWN_LENGTH);
        assert_eq!(entry.tags().count(), 0);
    }

    #[test]
    fn test_has_tag() {
        let entry = Entry::new("Radio", "url").with_tags(["news", "talk", "news"]);
        assert!(entry.has_tag("news"));
        assert!(entry.has_tag("talk"));
        assert!(!entry.has_tag("music"));
        assert_eq!(entry.tags().collect::<Vec<_>>(), vec!["news", "talk"]);
    }

    #[test]
    fn test_render_stanza() {
        let entry = Entry::new("Jazz FM", "http://jazz.example/stream").with_length(300);
        assert_eq!(
            entry.render(3),
            "Title3=Jazz FM\nFile3=http://jazz.example/stream\nLength3=300"
        );
    }

    #[test]
    fn test_equality_and_order_by_title() {
        let a = Entry::new("A", "url1").with_tags(["x"]);
        let a2 = Entry::new("A", "url2");
        let b = Entry::new("B", "url1");
        let lower = Entry::new("a", "url1");

        assert_eq!(a, a2);
        assert_ne!(a, b);
        assert!(a < b);
        // Byte order: uppercase sorts before lowercase
        assert!(b < lower);
    }

    #[test]
    fn test_display_is_title() {
        let entry = Entry::new("BBC Radio 4", "url");
        assert_eq!(entry.to_string(), "BBC Radio 4");
    }

    #[test]
    fn test_from_record() {
        let rec = StreamRecord {
            name: Some("Soma".to_string()),
            url: Some("http://soma.example".to_string()),
            tags: Some(vec!["ambient".to_string()]),
            length: None,
        };
        let entry = Entry::from_record(&rec).unwrap();
        assert_eq!(entry.title(), "Soma");
        assert_eq!(entry.length(), UNKNOWN_LENGTH);
        assert!(entry.has_tag("ambient"));
    }

    #[test]
    fn test_from_record_without_tags() {
        let entry = Entry::from_record(&record(Some("A"), Some("u"))).unwrap();
        assert_eq!(entry.tags().count(), 0);
    }

    #[test]
    fn test_from_record_missing_name() {
        let err = Entry::from_record(&record(None, Some("u"))).unwrap_err();
        assert!(matches!(err, PlaylistError::MissingField { field: "name" }));
    }

    #[test]
    fn test_from_record_missing_url() {
        let err = Entry::from_record(&record(Some("A"), None)).unwrap_err();
        assert!(matches!(err, PlaylistError::MissingField { field: "url" }));
    }

    #[test]
    fn test_from_record_blank_name() {
        let err = Entry::from_record(&record(Some("  "), Some("u"))).unwrap_err();
        assert!(matches!(err, PlaylistError::MissingField { field: "name" }));
    }
}
