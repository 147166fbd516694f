//! Conversion to and from [`geo`] types, so geo's algorithms can run on these geometries.
//!
//! geo is two-dimensional: Z and M are dropped on the way out, and everything coming in
//! is XY.

mod scalar;

pub use scalar::{geometry_from_geo, geometry_to_geo};
