//! radio-pls - PLS playlists from stream definitions
//!
//! This library reads named stream definitions, selects them by tag and
//! renders the selection as a PLS playlist.

pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod pls;
pub mod stations;

pub use error::{PlaylistError, Result};
pub use export::{OutputMode, PlaylistPipeline, SelectionConfig};
pub use model::{Catalog, Collection, Entry};
