use super::{Collection, Entry};
use crate::error::{PlaylistError, Result};
use crate::pls::format_playlist;
use std::collections::HashMap;

/// Entries bound under names, optionally namespaced by a group symbol
///
/// Each entry (by title) holds at most one live name at a time: binding an
/// entry under a new name drops its previous binding. Names keep the order
/// in which they were first bound.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Group prefix joined to names with `_`
    symbol: Option<String>,

    /// Bound names in binding order
    names: Vec<String>,

    /// Name -> entry
    by_name: HashMap<String, Entry>,

    /// Entry title -> name
    by_title: HashMap<String, String>,
}

impl Catalog {
    /// Create an empty catalog without a group symbol
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty catalog whose names are prefixed with `symbol`
    pub fn with_symbol(symbol: impl Into<String>) -> Self {
        Self {
            symbol: Some(symbol.into()),
            ..Self::default()
        }
    }

    /// Create a catalog from `(name, entry)` pairs, binding them in order
    pub fn from_pairs<I, S>(symbol: Option<&str>, pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, Entry)>,
        S: Into<String>,
    {
        let mut catalog = match symbol {
            Some(symbol) => Self::with_symbol(symbol),
            None => Self::new(),
        };
        for (name, entry) in pairs {
            catalog.add(name, entry);
        }
        catalog
    }

    /// Bind `entry` under `name`
    ///
    /// An existing binding for the name is replaced in place. If the entry
    /// is already bound under another name, that binding is removed first.
    /// Returns the key the entry was bound under.
    pub fn add(&mut self, name: impl Into<String>, entry: Entry) -> String {
        let key = self.key_for(name.into());

        if let Some(previous) = self.by_title.get(entry.title()).cloned() {
            if previous != key {
                log::debug!("Rebinding '{}' from '{}' to '{}'", entry, previous, key);
                self.unbind(&previous);
            }
        }

        match self.by_name.insert(key.clone(), entry.clone()) {
            Some(replaced) => {
                if replaced.title() != entry.title() {
                    self.by_title.remove(replaced.title());
                }
            }
            None => self.names.push(key.clone()),
        }
        self.by_title.insert(entry.title().to_string(), key.clone());

        key
    }

    /// Look up an entry by name, retrying with the group prefix
    pub fn get(&self, name: &str) -> Result<&Entry> {
        if let Some(entry) = self.by_name.get(name) {
            return Ok(entry);
        }
        if let Some(symbol) = &self.symbol {
            if let Some(entry) = self.by_name.get(&format!("{}_{}", symbol, name)) {
                return Ok(entry);
            }
        }
        Err(PlaylistError::NotFound(name.to_string()))
    }

    /// Name an entry is currently bound under
    pub fn name_of(&self, entry: &Entry) -> Option<&str> {
        self.by_title.get(entry.title()).map(String::as_str)
    }

    /// Bound names in binding order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Bound entries in binding order
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.names.iter().filter_map(|name| self.by_name.get(name))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Render bound entries as a PLS playlist
    pub fn render(&self) -> String {
        format_playlist(self.entries())
    }

    /// Bound entries as a plain collection, in binding order
    pub fn to_collection(&self) -> Collection {
        self.entries().cloned().collect()
    }

    fn key_for(&self, name: String) -> String {
        match &self.symbol {
            Some(symbol) if !name.starts_with(&format!("{}_", symbol)) => {
                format!("{}_{}", symbol, name)
            }
            _ => name,
        }
    }

    fn unbind(&mut self, key: &str) {
        if let Some(entry) = self.by_name.remove(key) {
            self.by_title.remove(entry.title());
        }
        self.names.retain(|name| name != key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(catalog: &Catalog) -> Vec<&str> {
        catalog.names().collect()
    }

    #[test]
    fn test_add_and_get() {
        let mut catalog = Catalog::new();
        catalog.add("a", Entry::new("A", "urlA"));
        catalog.add("b", Entry::new("B", "urlB"));

        assert_eq!(catalog.get("a").unwrap().title(), "A");
        assert_eq!(names(&catalog), vec!["a", "b"]);
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_rebinding_drops_old_name() {
        let mut catalog = Catalog::new();
        let item = Entry::new("A", "urlA");
        catalog.add("x", item.clone());
        catalog.add("y", item);

        assert_eq!(names(&catalog), vec!["y"]);
        assert!(matches!(catalog.get("x"), Err(PlaylistError::NotFound(_))));
        assert_eq!(catalog.get("y").unwrap().title(), "A");
    }

    #[test]
    fn test_rebinding_same_name_is_noop() {
        let mut catalog = Catalog::new();
        catalog.add("x", Entry::new("A", "urlA"));
        catalog.add("x", Entry::new("A", "urlA"));
        assert_eq!(names(&catalog), vec!["x"]);
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_replacing_name_keeps_position() {
        let mut catalog = Catalog::new();
        catalog.add("x", Entry::new("A", "urlA"));
        catalog.add("y", Entry::new("B", "urlB"));
        catalog.add("x", Entry::new("C", "urlC"));

        assert_eq!(names(&catalog), vec!["x", "y"]);
        assert_eq!(catalog.get("x").unwrap().title(), "C");
        assert!(catalog.name_of(&Entry::new("A", "")).is_none());
        assert_eq!(catalog.name_of(&Entry::new("C", "")), Some("x"));
    }

    #[test]
    fn test_symbol_prefix() {
        let mut catalog = Catalog::with_symbol("bbc");
        let key = catalog.add("radio1", Entry::new("BBC Radio 1", "url1"));
        catalog.add("bbc_radio2", Entry::new("BBC Radio 2", "url2"));

        assert_eq!(key, "bbc_radio1");
        assert_eq!(names(&catalog), vec!["bbc_radio1", "bbc_radio2"]);
        assert_eq!(catalog.get("radio1").unwrap().title(), "BBC Radio 1");
        assert_eq!(catalog.get("bbc_radio2").unwrap().title(), "BBC Radio 2");
    }

    #[test]
    fn test_get_missing() {
        let catalog = Catalog::with_symbol("bbc");
        let err = catalog.get("radio9").unwrap_err();
        assert!(matches!(err, PlaylistError::NotFound(ref name) if name == "radio9"));
    }

    #[test]
    fn test_render_in_binding_order() {
        let catalog = Catalog::from_pairs(
            None,
            vec![("b", Entry::new("B", "urlB")), ("a", Entry::new("A", "urlA"))],
        );
        let text = catalog.render();
        assert!(text.starts_with("[playlist]\n\nTitle1=B\nFile1=urlB\n"));
        assert!(text.ends_with("NumberOfEntries=2\nVersion=2"));
    }

    #[test]
    fn test_to_collection() {
        let catalog = Catalog::from_pairs(
            Some("g"),
            vec![("one", Entry::new("One", "u1")), ("two", Entry::new("Two", "u2"))],
        );
        let collection = catalog.to_collection();
        let titles: Vec<&str> = collection.entries().iter().map(|e| e.title()).collect();
        assert_eq!(titles, vec!["One", "Two"]);
    }
}
