//! Outer ring extraction for Polygon and MultiPolygon geometries.

use serde_json::Value;

use crate::models::{LatLng, Ring};

/// Extract the outer ring of a geometry as closed `[lat, lng]` points.
///
/// - `Polygon`: the first ring; holes are ignored.
/// - `MultiPolygon`: the outer ring of the component with the most outer-ring
///   points, first one winning ties.
/// - anything else (including `LineString`): empty.
///
/// Points that are not arrays starting with two numbers are dropped.
pub fn to_lat_lng_ring(geometry: &Value) -> Ring {
    let (Some(geometry_type), Some(coordinates)) =
        (geometry.get("type"), geometry.get("coordinates"))
    else {
        return Ring::empty();
    };

    let outer = match geometry_type.as_str() {
        Some("Polygon") => polygon_outer(coordinates),
        Some("MultiPolygon") => largest_outer(coordinates),
        _ => None,
    };

    match outer {
        Some(points) => Ring::closed(points.iter().filter_map(swap_axes).collect()),
        None => Ring::empty(),
    }
}

/// First ring of a polygon's coordinates, if present and non-empty
fn polygon_outer(coordinates: &Value) -> Option<&Vec<Value>> {
    coordinates
        .as_array()?
        .first()?
        .as_array()
        .filter(|ring| !ring.is_empty())
}

fn largest_outer(coordinates: &Value) -> Option<&Vec<Value>> {
    let mut best: Option<(&Value, usize)> = None;

    for polygon in coordinates.as_array()? {
        let size = outer_len(polygon);
        match best {
            Some((_, best_size)) if size <= best_size => {}
            _ => best = Some((polygon, size)),
        }
    }

    let (polygon, _) = best?;
    polygon_outer(polygon)
}

/// Raw element count of a polygon's outer ring, 0 when missing
fn outer_len(polygon: &Value) -> usize {
    polygon
        .as_array()
        .and_then(|rings| rings.first())
        .and_then(Value::as_array)
        .map(Vec::len)
        .unwrap_or(0)
}

/// `[lng, lat, ..]` -> `[lat, lng]`
fn swap_axes(point: &Value) -> Option<LatLng> {
    match point.as_array()?.as_slice() {
        [lng, lat, ..] => Some([lat.as_f64()?, lng.as_f64()?]),
        _ => None,
    }
}
