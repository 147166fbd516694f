//! Multi-dimensional vector geometries (XY, Z, M and ZM), their envelopes, and codecs for
//! Well-Known Binary and GeoJSON.
//!
//! Every shape carries a [Dimension] tag and stores uniform [Coord] tuples; the
//! [GeometryTrait] exposes envelopes per flavor and in-place editing of X/Y values.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub use coord::Coord;
pub use datatypes::{Dimension, GeometryTag, GeometryType};
pub use envelope::{Envelope, EnvelopeM, EnvelopeZ, EnvelopeZM};
pub use error::{GeomError, Result};
pub use scalar::{
    Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point,
    Polygon,
};
pub use trait_::{Bounds, GeometryTrait};

pub mod coord;
pub mod datatypes;
pub mod envelope;
pub mod error;
pub mod io;
pub mod scalar;
#[cfg(test)]
pub(crate) mod test;
pub mod trait_;
