//! On-disk campus data: file layout, configuration and fail-soft loading.

pub mod config;
mod reader;
mod source;

pub use config::{Config, DataConfig, DataPaths, ServerConfig};
pub use reader::{read_json, ReadError};
pub use source::CampusData;
