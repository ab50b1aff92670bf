//! Selection configuration

use std::path::PathBuf;

/// What the pipeline produces from the selected entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// PLS playlist text
    #[default]
    Playlist,

    /// One line per entry with its tags
    List,

    /// Entries grouped by tag
    ListTags,
}

/// Configuration for a playlist run
#[derive(Debug, Clone)]
pub struct SelectionConfig {
    /// Stream definitions file or directory (None = no config)
    pub config_path: Option<PathBuf>,

    /// Fail when `config_path` does not exist
    pub require_config: bool,

    /// Descend into subdirectories when `config_path` is a directory
    pub recursive: bool,

    /// Only select entries with one of these tags (empty = all)
    pub tags: Vec<String>,

    /// Output produced for the selection
    pub mode: OutputMode,

    /// Whether the built-in BBC stations are added
    pub include_builtin: bool,
}

impl SelectionConfig {
    /// Create a configuration reading streams from `config_path`
    pub fn new(config_path: Option<PathBuf>) -> Self {
        Self {
            config_path,
            require_config: true,
            recursive: false,
            tags: Vec::new(),
            mode: OutputMode::Playlist,
            include_builtin: true,
        }
    }

    /// Set tags to select on
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Set the output mode
    pub fn with_mode(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }

    /// Treat a missing config path as an empty config
    pub fn optional_config(mut self) -> Self {
        self.require_config = false;
        self
    }

    /// Read config directories recursively
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Include or skip the built-in stations
    pub fn with_builtin(mut self, include: bool) -> Self {
        self.include_builtin = include;
        self
    }
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self::new(None)
    }
}
