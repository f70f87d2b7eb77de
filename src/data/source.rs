//! Campus data loaded fresh from the data directory on every call.

use std::path::{Path, PathBuf};
use tracing::debug;

use super::config::{DataConfig, DataPaths};
use super::reader::read_json;
use crate::models::{BoundaryRecord, LocationRecord, NavigationConfig, Ring, RoadRecord};
use crate::normalize::{is_truthy, resolve_boundary, resolve_locations, resolve_roads};

/// Read-only view over the campus data files.
///
/// Nothing is cached: files may be edited while the server runs.
#[derive(Debug, Clone)]
pub struct CampusData {
    dir: PathBuf,
    paths: DataPaths,
    demo_fallback: bool,
}

impl CampusData {
    pub fn new(config: &DataConfig) -> Self {
        Self {
            dir: config.dir.clone(),
            paths: DataPaths::in_dir(&config.dir),
            demo_fallback: config.demo_fallback,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn paths(&self) -> &DataPaths {
        &self.paths
    }

    pub fn boundary(&self) -> Option<BoundaryRecord> {
        resolve_boundary(read_json(&self.paths.boundary).as_ref())
    }

    pub fn boundary_or_placeholder(&self) -> BoundaryRecord {
        self.boundary().unwrap_or_else(BoundaryRecord::placeholder)
    }

    /// Locations from the buildings file, or the demo set when it is
    /// missing or empty and the fallback is enabled
    pub fn locations(&self) -> Vec<LocationRecord> {
        match read_json(&self.paths.buildings).filter(is_truthy) {
            Some(raw) => {
                let locations = resolve_locations(&raw);
                debug!(
                    "Loaded {} locations from {}",
                    locations.len(),
                    self.paths.buildings.display()
                );
                locations
            }
            None if self.demo_fallback => demo_locations(),
            None => Vec::new(),
        }
    }

    pub fn location(&self, id: &str) -> Option<LocationRecord> {
        self.locations().into_iter().find(|location| location.id == id)
    }

    pub fn roads(&self) -> Vec<RoadRecord> {
        read_json(&self.paths.roads)
            .filter(is_truthy)
            .map(|raw| resolve_roads(&raw))
            .unwrap_or_default()
    }

    pub fn navigation_config(&self) -> NavigationConfig {
        NavigationConfig::from_raw(read_json(&self.paths.navigation_config).as_ref())
    }
}

fn demo_locations() -> Vec<LocationRecord> {
    vec![
        LocationRecord {
            id: "b1".to_string(),
            name: "Main Block".to_string(),
            category: "Academic".to_string(),
            coordinates: Ring::closed(vec![
                [16.4945, 80.5123],
                [16.4946, 80.5129],
                [16.4941, 80.5130],
                [16.4940, 80.5124],
            ]),
            description: "Central academic building.".to_string(),
            image_url: "https://example.com/main-block.jpg".to_string(),
        },
        LocationRecord {
            id: "b2".to_string(),
            name: "Auditorium".to_string(),
            category: "Facility".to_string(),
            coordinates: Ring::closed(vec![
                [16.4930, 80.5110],
                [16.4934, 80.5115],
                [16.4929, 80.5118],
                [16.4926, 80.5112],
            ]),
            description: "Events and cultural programs.".to_string(),
            image_url: "https://example.com/auditorium.jpg".to_string(),
        },
    ]
}
