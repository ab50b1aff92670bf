//! Stream configuration
//!
//! Record schema for stream definitions and helpers to load them from
//! YAML or JSON files.

mod load;
mod schema;

pub use load::{
    expand_path, load_dir, load_file, load_records, records_from_value, ConfigFormat,
    DEFAULT_CONFIG,
};
pub use schema::StreamRecord;
