pub mod error;
pub mod geo;
pub mod types;

pub use error::RedsimError;
pub use geo::{BoundingBox, GeoCoordinate, COLOMBIA_BOUNDS};
pub use types::*;
