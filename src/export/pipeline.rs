//! Load, select and render pipeline

use super::config::{OutputMode, SelectionConfig};
use crate::config::load_records;
use crate::error::Result;
use crate::model::{select_by_tags, Collection};
use crate::pls::{format_entry_listing, format_tag_listing};
use crate::stations::bbc_catalog;
use chrono::{DateTime, Utc};

/// Playlist pipeline: config -> collection -> selection -> text
pub struct PlaylistPipeline {
    config: SelectionConfig,
}

impl PlaylistPipeline {
    /// Create a new pipeline
    pub fn new(config: SelectionConfig) -> Self {
        Self { config }
    }

    /// Run the complete pipeline and return the output text
    pub fn run(&self) -> Result<String> {
        let collection = self.load(Utc::now())?;
        Ok(self.render(&collection))
    }

    /// Build the collection: config streams first, then built-in stations
    pub fn load(&self, now: DateTime<Utc>) -> Result<Collection> {
        let mut collection = match &self.config.config_path {
            Some(path) if path.exists() || self.config.require_config => {
                log::info!("Loading streams from {:?}", path);
                let records = load_records(path, self.config.recursive)?;
                Collection::from_records(&records)?
            }
            Some(path) => {
                log::debug!("No config at {:?}, starting empty", path);
                Collection::new()
            }
            None => Collection::new(),
        };

        if self.config.include_builtin {
            let builtin = bbc_catalog(now).to_collection();
            log::debug!("Adding {} built-in station(s)", builtin.len());
            collection.merge(&builtin);
        }

        log::info!("Collection holds {} stream(s)", collection.len());
        Ok(collection)
    }

    /// Select from `collection` and produce the configured output
    pub fn render(&self, collection: &Collection) -> String {
        let selection = select_by_tags(collection, &self.config.tags);

        if !self.config.tags.is_empty() {
            log::info!(
                "Selected {} stream(s) matching {:?}",
                selection.len(),
                self.config.tags
            );
        }

        match self.config.mode {
            OutputMode::Playlist => selection.render(),
            OutputMode::List => format_entry_listing(&selection),
            OutputMode::ListTags => format_tag_listing(&selection),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Entry;
    use chrono::TimeZone;
    use std::path::PathBuf;

    fn sample() -> Collection {
        Collection::from_entries(vec![
            Entry::new("Jazz", "uj").with_tags(["music"]),
            Entry::new("News", "un").with_tags(["talk"]),
        ])
    }

    #[test]
    fn test_render_modes() {
        let collection = sample();

        let playlist = PlaylistPipeline::new(SelectionConfig::default().with_tags(vec!["talk".into()]));
        assert!(playlist.render(&collection).contains("Title1=News\n"));

        let list = PlaylistPipeline::new(SelectionConfig::default().with_mode(OutputMode::List));
        assert_eq!(list.render(&collection), "Jazz (music)\nNews (talk)");

        let tags = PlaylistPipeline::new(SelectionConfig::default().with_mode(OutputMode::ListTags));
        assert_eq!(tags.render(&collection), "music:\n  Jazz\ntalk:\n  News");
    }

    #[test]
    fn test_load_builtin_only() {
        let pipeline = PlaylistPipeline::new(SelectionConfig::default());
        let now = Utc.timestamp_opt(0, 0).unwrap();
        let collection = pipeline.load(now).unwrap();
        assert_eq!(collection.len(), 6);
        assert_eq!(collection.entries()[0].title(), "BBC Radio 1");
    }

    #[test]
    fn test_load_without_builtin() {
        let pipeline = PlaylistPipeline::new(SelectionConfig::default().with_builtin(false));
        let collection = pipeline.load(Utc::now()).unwrap();
        assert!(collection.is_empty());
    }

    #[test]
    fn test_missing_optional_config() {
        let config = SelectionConfig::new(Some(PathBuf::from("/nonexistent/radio-pls/streams.yml")))
            .optional_config()
            .with_builtin(false);
        let collection = PlaylistPipeline::new(config).load(Utc::now()).unwrap();
        assert!(collection.is_empty());
    }

    #[test]
    fn test_missing_required_config() {
        let config = SelectionConfig::new(Some(PathBuf::from("/nonexistent/radio-pls/streams.yml")));
        assert!(PlaylistPipeline::new(config).load(Utc::now()).is_err());
    }
}
