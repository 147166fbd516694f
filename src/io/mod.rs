//! Readers and writers for WKB and GeoJSON, plus interoperability with the `geo` crate.

#[cfg(feature = "geo")]
pub mod geo;
#[cfg(feature = "geojson")]
pub mod geojson;
pub mod wkb;
