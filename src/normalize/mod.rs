//! GeoJSON normalization.
//!
//! Turns loosely shaped GeoJSON (Feature, bare geometry or FeatureCollection)
//! into the fixed records served by the API. Nothing in here fails: malformed
//! input degrades to empty rings, skipped features or `None`.

mod boundary;
mod features;
mod props;
mod ring;

pub use boundary::resolve_boundary;
pub use features::{resolve_locations, resolve_roads};
pub use ring::to_lat_lng_ring;

pub(crate) use props::is_truthy;
