//! Stream definition loading
//!
//! Config files hold a list of stream mappings in YAML or JSON. The format
//! is picked from the file extension. A directory is read file by file in
//! path order.

use super::schema::StreamRecord;
use crate::error::{PlaylistError, Result};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Default location of the stream definitions
pub const DEFAULT_CONFIG: &str = "~/.config/radio-pls/streams.yml";

/// Supported config syntaxes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
}

impl ConfigFormat {
    /// Pick a format from a file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();

        match extension {
            "yml" | "yaml" => Ok(ConfigFormat::Yaml),
            "json" | "js" => Ok(ConfigFormat::Json),
            _ => Err(PlaylistError::UnsupportedFormat {
                extension: extension.to_string(),
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Expand `~` in a user-supplied config path
pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}

/// Load stream records from a config file or a directory of config files
pub fn load_records(path: &Path, recursive: bool) -> Result<Vec<StreamRecord>> {
    if path.is_dir() {
        load_dir(path, recursive)
    } else {
        load_file(path)
    }
}

/// Load stream records from a single YAML or JSON file
pub fn load_file(path: &Path) -> Result<Vec<StreamRecord>> {
    let format = ConfigFormat::from_path(path)?;

    let text = fs::read_to_string(path).map_err(|source| PlaylistError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let value = parse_text(&text, format).map_err(|message| PlaylistError::Parse {
        path: path.to_path_buf(),
        message,
    })?;

    let records = records_from_value(value).map_err(|e| match e {
        PlaylistError::Parse { message, .. } => PlaylistError::Parse {
            path: path.to_path_buf(),
            message,
        },
        PlaylistError::InvalidItem(item) => {
            PlaylistError::InvalidItem(format!("{} in {:?}", item, path))
        }
        other => other,
    })?;

    log::debug!("Loaded {} stream(s) from {:?}", records.len(), path);
    Ok(records)
}

/// Load every supported config file under `dir`, in path order
///
/// Files with other extensions are skipped.
pub fn load_dir(dir: &Path, recursive: bool) -> Result<Vec<StreamRecord>> {
    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut records = Vec::new();

    for item in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(max_depth)
        .sort_by_file_name()
    {
        let item = item.map_err(|e| PlaylistError::Io {
            path: e.path().map(Path::to_path_buf).unwrap_or_else(|| dir.to_path_buf()),
            source: e.into(),
        })?;

        let path = item.path();
        if !item.file_type().is_file() {
            continue;
        }
        if ConfigFormat::from_path(path).is_err() {
            log::debug!("Skipping non-config file: {:?}", path);
            continue;
        }

        records.extend(load_file(path)?);
    }

    log::info!("Loaded {} stream(s) from {:?}", records.len(), dir);
    Ok(records)
}

fn parse_text(text: &str, format: ConfigFormat) -> std::result::Result<Value, String> {
    match format {
        ConfigFormat::Yaml => serde_yaml::from_str(text).map_err(|e| e.to_string()),
        ConfigFormat::Json => serde_json::from_str(text).map_err(|e| e.to_string()),
    }
}

/// Turn a parsed config document into stream records
///
/// The document must be a list (an empty document counts as an empty
/// list). Items that are not mappings are rejected.
pub fn records_from_value(value: Value) -> Result<Vec<StreamRecord>> {
    let items = match value {
        Value::Null => return Ok(Vec::new()),
        Value::Array(items) => items,
        other => {
            return Err(PlaylistError::Parse {
                path: PathBuf::new(),
                message: format!("expected a list of streams, found {}", other),
            })
        }
    };

    items
        .into_iter()
        .map(|item| {
            if !item.is_object() {
                return Err(PlaylistError::InvalidItem(item.to_string()));
            }
            let shown = item.to_string();
            serde_json::from_value(item)
                .map_err(|e| PlaylistError::InvalidItem(format!("{} ({})", shown, e)))
        })
        .collect()
}
