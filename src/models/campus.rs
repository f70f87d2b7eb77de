//! Normalized campus geometry records.

use serde::Serialize;

/// A `[latitude, longitude]` pair (note: GeoJSON input is longitude first)
pub type LatLng = [f64; 2];

/// Ordered outer boundary of a shape in `[lat, lng]` order.
///
/// A non-empty ring is always closed: its first and last points are equal.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Ring(Vec<LatLng>);

impl Ring {
    /// Build a ring from points, appending the first point if needed to close it
    pub fn closed(mut points: Vec<LatLng>) -> Self {
        if let (Some(first), Some(last)) = (points.first().copied(), points.last()) {
            if first != *last {
                points.push(first);
            }
        }
        Self(points)
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn points(&self) -> &[LatLng] {
        &self.0
    }

    /// True for empty rings and rings whose endpoints coincide
    pub fn is_closed(&self) -> bool {
        self.0.first() == self.0.last()
    }
}

/// Campus outline
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoundaryRecord {
    pub id: String,
    pub name: String,
    pub coordinates: Ring,
}

impl BoundaryRecord {
    pub const ID: &'static str = "campus";
    pub const DEFAULT_NAME: &'static str = "Campus";
    pub const PLACEHOLDER_NAME: &'static str = "Campus (placeholder)";

    pub fn new(name: String, coordinates: Ring) -> Self {
        Self {
            id: Self::ID.to_string(),
            name,
            coordinates,
        }
    }

    /// Served in place of a boundary when no usable boundary file exists
    pub fn placeholder() -> Self {
        Self::new(Self::PLACEHOLDER_NAME.to_string(), Ring::empty())
    }
}

/// A building or other point of interest on campus
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationRecord {
    pub id: String,
    pub name: String,
    pub category: String,
    pub coordinates: Ring,
    pub description: String,
    pub image_url: String,
}

/// A road feature
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoadRecord {
    pub id: String,
    pub name: String,
    pub coordinates: Ring,
    /// Geometry type of the source feature (e.g. "Polygon")
    #[serde(rename = "type")]
    pub geometry_type: String,
}
