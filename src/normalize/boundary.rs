//! Campus boundary resolution.

use serde_json::Value;

use super::props::{first_set, is_truthy, properties};
use super::ring::to_lat_lng_ring;
use crate::models::{BoundaryRecord, Ring};

/// Resolve the campus boundary from raw GeoJSON.
///
/// Accepts a `Feature`, a bare `Polygon`/`MultiPolygon`, or a
/// `FeatureCollection` (only its first feature is used). Returns `None` for
/// absent, empty or unrecognized input; the caller decides on a placeholder.
pub fn resolve_boundary(raw: Option<&Value>) -> Option<BoundaryRecord> {
    let raw = raw.filter(|value| is_truthy(value))?;

    let (geometry, name) = match raw.get("type").and_then(Value::as_str) {
        Some("Feature") => feature_parts(raw),
        Some("Polygon") | Some("MultiPolygon") => (Some(raw), None),
        Some("FeatureCollection") => {
            let first = raw
                .get("features")
                .and_then(Value::as_array)
                .and_then(|features| features.first())?;
            feature_parts(first)
        }
        _ => return None,
    };

    let coordinates = geometry.map(to_lat_lng_ring).unwrap_or_else(Ring::empty);
    let name = name.unwrap_or_else(|| BoundaryRecord::DEFAULT_NAME.to_string());

    Some(BoundaryRecord::new(name, coordinates))
}

fn feature_parts(feature: &Value) -> (Option<&Value>, Option<String>) {
    (
        feature.get("geometry"),
        first_set(properties(feature), &["name"]),
    )
}
