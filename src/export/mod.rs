//! Playlist run orchestration

pub mod config;
pub mod pipeline;

pub use config::{OutputMode, SelectionConfig};
pub use pipeline::PlaylistPipeline;
