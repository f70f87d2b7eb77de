//! Per-feature normalization for buildings and roads.

use serde_json::{Map, Value};
use tracing::debug;

use super::props::{first_set, properties};
use super::ring::to_lat_lng_ring;
use crate::models::{LocationRecord, Ring, RoadRecord};

const ID_KEYS: &[&str] = &["id", "code", "name"];

/// A feature whose geometry produced a usable ring
struct KeptFeature<'a> {
    props: Option<&'a Map<String, Value>>,
    geometry_type: Option<&'a str>,
    ring: Ring,
    /// 1-based position among kept features
    position: usize,
}

impl KeptFeature<'_> {
    fn text(&self, key: &str) -> Option<String> {
        first_set(self.props, &[key])
    }

    /// `id`, then `code`, then `name`, then the position
    fn id(&self) -> String {
        first_set(self.props, ID_KEYS).unwrap_or_else(|| self.position.to_string())
    }
}

/// Walk a `FeatureCollection` (or a single `Feature`) in order, dropping
/// features whose geometry yields no ring.
fn kept_features<'a, T>(raw: &'a Value, mut build: impl FnMut(KeptFeature<'a>) -> T) -> Vec<T> {
    let features: &[Value] = match raw.get("type").and_then(Value::as_str) {
        Some("FeatureCollection") => raw
            .get("features")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default(),
        Some("Feature") => std::slice::from_ref(raw),
        _ => &[],
    };

    let mut kept = Vec::new();
    for (index, feature) in features.iter().enumerate() {
        let geometry = feature.get("geometry");
        let ring = geometry.map(to_lat_lng_ring).unwrap_or_else(Ring::empty);

        if ring.is_empty() {
            debug!("Skipping feature {} without a usable outer ring", index);
            continue;
        }

        kept.push(build(KeptFeature {
            props: properties(feature),
            geometry_type: geometry.and_then(|g| g.get("type")).and_then(Value::as_str),
            ring,
            position: kept.len() + 1,
        }));
    }

    kept
}

/// Normalize building features into location records
pub fn resolve_locations(raw: &Value) -> Vec<LocationRecord> {
    kept_features(raw, |feature| LocationRecord {
        id: feature.id(),
        name: feature.text("name").unwrap_or_else(|| "Building".to_string()),
        category: feature
            .text("category")
            .unwrap_or_else(|| "General".to_string()),
        description: feature.text("description").unwrap_or_default(),
        image_url: feature.text("imageUrl").unwrap_or_default(),
        coordinates: feature.ring,
    })
}

/// Normalize road features.
///
/// Roads go through the same polygon-only ring extraction as buildings, so
/// `LineString` roads produce no records.
pub fn resolve_roads(raw: &Value) -> Vec<RoadRecord> {
    kept_features(raw, |feature| RoadRecord {
        id: feature.id(),
        name: feature.text("name").unwrap_or_else(|| "Road".to_string()),
        geometry_type: feature.geometry_type.unwrap_or_default().to_string(),
        coordinates: feature.ring,
    })
}
