//! Campus Connect - campus navigation data served over HTTP
//!
//! This library holds the data loading and GeoJSON normalization used by the
//! server binary.

pub mod data;
pub mod models;
pub mod normalize;

pub use data::CampusData;
pub use models::{BoundaryRecord, LocationRecord, NavigationConfig, Ring, RoadRecord};
