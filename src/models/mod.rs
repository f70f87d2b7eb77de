//! Output records served by the HTTP API.

pub mod campus;
pub mod event;
pub mod navigation;

pub use campus::{BoundaryRecord, LatLng, LocationRecord, Ring, RoadRecord};
pub use event::{Event, NewEvent};
pub use navigation::NavigationConfig;
