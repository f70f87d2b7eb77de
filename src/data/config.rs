use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const BOUNDARY_FILE: &str = "campus_boundary.geojson";
pub const BUILDINGS_FILE: &str = "buildings.geojson";
pub const NAVIGATION_CONFIG_FILE: &str = "navigation_config.json";
pub const ROADS_FILE: &str = "roads.geojson";

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub data: DataConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub listen: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: "0.0.0.0:5000".to_string(),
        }
    }
}

impl ServerConfig {
    /// Keep the configured host but listen on `port`
    pub fn set_port(&mut self, port: u16) {
        let host = self
            .listen
            .rsplit_once(':')
            .map(|(host, _)| host)
            .unwrap_or("0.0.0.0");
        self.listen = format!("{}:{}", host, port);
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DataConfig {
    /// Directory holding the data files
    pub dir: PathBuf,
    /// Serve demo locations when no buildings file is available
    pub demo_fallback: bool,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("data"),
            demo_fallback: true,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read config file")?;
        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }
}

/// Fixed file names resolved against a data directory
#[derive(Debug, Clone, PartialEq)]
pub struct DataPaths {
    pub boundary: PathBuf,
    pub buildings: PathBuf,
    pub navigation_config: PathBuf,
    pub roads: PathBuf,
}

impl DataPaths {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            boundary: dir.join(BOUNDARY_FILE),
            buildings: dir.join(BUILDINGS_FILE),
            navigation_config: dir.join(NAVIGATION_CONFIG_FILE),
            roads: dir.join(ROADS_FILE),
        }
    }

    pub fn all(&self) -> [&Path; 4] {
        [
            self.boundary.as_path(),
            self.buildings.as_path(),
            self.navigation_config.as_path(),
            self.roads.as_path(),
        ]
    }
}
