//! Conversion between GeoJSON documents and owned geometries.
//!
//! Position length decides the flavor: two values are XY, three are XYZ and four are XYZM.
//! GeoJSON has no M-only position, so XYM geometries are written as `[x, y, m]` and read
//! back as XYZ.

mod document;
mod reader;
mod writer;

pub use document::{Feature, FeatureCollection, GeoJsonDocument};
pub use reader::{from_geojson, parse_geojson, read_geojson};
pub use writer::{to_geojson, write_geojson};
