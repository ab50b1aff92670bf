use super::Entry;
use crate::config::StreamRecord;
use crate::error::Result;
use crate::pls::format_playlist;

/// Ordered collection of unique entries
///
/// Insertion order is kept; an entry whose title is already present is
/// ignored on insert.
#[derive(Debug, Clone, Default)]
pub struct Collection {
    entries: Vec<Entry>,
}

impl Collection {
    /// Create a new empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a collection seeded with entries, dropping duplicates
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = Entry>,
    {
        let mut collection = Self::new();
        collection.extend(entries);
        collection
    }

    /// Build a collection from stream records, failing on the first bad record
    pub fn from_records(records: &[StreamRecord]) -> Result<Self> {
        let entries = records
            .iter()
            .map(Entry::from_record)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_entries(entries))
    }

    /// Append an entry unless one with the same title is present
    ///
    /// Returns true when the entry was added.
    pub fn add(&mut self, entry: Entry) -> bool {
        if self.contains(&entry) {
            log::debug!("Skipping duplicate entry: {}", entry);
            return false;
        }
        self.entries.push(entry);
        true
    }

    /// Add every entry of another collection, in its order
    pub fn merge(&mut self, other: &Collection) {
        self.extend(other.entries.iter().cloned());
    }

    /// All entries in insertion order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn contains(&self, entry: &Entry) -> bool {
        self.entries.contains(entry)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Select entries carrying any of `tags`; no tags selects everything
    pub fn get<I, S>(&self, tags: I) -> Selection<'_>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Selection {
            entries: &self.entries,
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// Render every entry as a PLS playlist
    pub fn render(&self) -> String {
        format_playlist(&self.entries)
    }
}

impl Extend<Entry> for Collection {
    fn extend<I: IntoIterator<Item = Entry>>(&mut self, iter: I) {
        for entry in iter {
            self.add(entry);
        }
    }
}

impl FromIterator<Entry> for Collection {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        Self::from_entries(iter)
    }
}

/// Tag-filtered view over a collection
///
/// The view borrows the collection and can be traversed any number of
/// times; each call to [`Selection::iter`] starts from the first entry.
#[derive(Debug, Clone)]
pub struct Selection<'a> {
    entries: &'a [Entry],
    tags: Vec<String>,
}

impl<'a> Selection<'a> {
    /// Tags this selection filters on
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Iterate the selected entries in collection order
    pub fn iter(&self) -> impl Iterator<Item = &'a Entry> + '_ {
        let entries: &'a [Entry] = self.entries;
        entries.iter().filter(move |entry| self.matches(entry))
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Collect the selected entries
    pub fn to_vec(&self) -> Vec<&'a Entry> {
        self.iter().collect()
    }

    /// Render the selected entries as a PLS playlist
    pub fn render(&self) -> String {
        format_playlist(self.iter())
    }

    fn matches(&self, entry: &Entry) -> bool {
        self.tags.is_empty() || self.tags.iter().any(|tag| entry.has_tag(tag))
    }
}

impl<'a, 'b> IntoIterator for &'b Selection<'a> {
    type Item = &'a Entry;
    type IntoIter = std::vec::IntoIter<&'a Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.to_vec().into_iter()
    }
}

/// Select entries of `collection` carrying any of `tags`
///
/// An empty tag list selects every entry.
pub fn select_by_tags<'a>(collection: &'a Collection, tags: &[String]) -> Selection<'a> {
    collection.get(tags.iter().cloned())
}
