//! Error types for playlist building

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `PlaylistError`
pub type Result<T> = std::result::Result<T, PlaylistError>;

/// Errors raised while loading, assembling or looking up playlist entries
#[derive(Error, Debug)]
pub enum PlaylistError {
    /// A config item that is not a stream mapping
    #[error("Invalid item {0}")]
    InvalidItem(String),

    /// A stream record without one of its required fields
    #[error("Missing field '{field}' in stream record")]
    MissingField { field: &'static str },

    /// Named lookup miss in a catalog
    #[error("No entry bound to '{0}'")]
    NotFound(String),

    /// Config file with an extension we cannot parse
    #[error("Unknown file type '{extension}' ({path:?})")]
    UnsupportedFormat { extension: String, path: PathBuf },

    /// Failed to read a config file or directory
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file that does not parse as YAML/JSON
    #[error("Failed to parse {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
}
