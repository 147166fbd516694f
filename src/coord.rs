//! Coordinate types.
//!
//! [Coord] is the uniform tuple every geometry stores; which of its axes are meaningful is
//! decided by the owning geometry's [Dimension]. [Xy], [Xyz], [Xym] and [Xyzm] are the
//! fixed-flavor tuples used for envelope corners and for the scratch buffers handed out by
//! [iterate][crate::GeometryTrait::iterate].

use crate::datatypes::Dimension;

/// A vertex, carrying all four axes.
///
/// Axes not carried by a geometry's [Dimension] are stored as `0.0`.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Coord {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub m: f64,
}

impl Coord {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            z: 0.0,
            m: 0.0,
        }
    }

    pub fn xyz(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z, m: 0.0 }
    }

    pub fn xym(x: f64, y: f64, m: f64) -> Self {
        Self { x, y, z: 0.0, m }
    }

    pub fn xyzm(x: f64, y: f64, z: f64, m: f64) -> Self {
        Self { x, y, z, m }
    }

    /// Build a coordinate from its ordinates laid out as X, Y, then Z and/or M as `dim`
    /// requires. This is the layout used by both WKB and GeoJSON.
    ///
    /// # Panics
    ///
    /// Panics if `values` holds fewer than `dim.size()` values.
    pub fn from_slice(values: &[f64], dim: Dimension) -> Self {
        match dim {
            Dimension::XY => Self::new(values[0], values[1]),
            Dimension::XYZ => Self::xyz(values[0], values[1], values[2]),
            Dimension::XYM => Self::xym(values[0], values[1], values[2]),
            Dimension::XYZM => Self::xyzm(values[0], values[1], values[2], values[3]),
        }
    }

    /// The ordinates of this coordinate in X, Y, Z, M order, keeping only the axes `dim`
    /// carries.
    pub fn to_vec(&self, dim: Dimension) -> Vec<f64> {
        match dim {
            Dimension::XY => vec![self.x, self.y],
            Dimension::XYZ => vec![self.x, self.y, self.z],
            Dimension::XYM => vec![self.x, self.y, self.m],
            Dimension::XYZM => vec![self.x, self.y, self.z, self.m],
        }
    }

    /// Zero out the axes `dim` does not carry.
    pub(crate) fn normalized(self, dim: Dimension) -> Self {
        Self {
            x: self.x,
            y: self.y,
            z: if dim.has_z() { self.z } else { 0.0 },
            m: if dim.has_m() { self.m } else { 0.0 },
        }
    }

    pub fn xy(&self) -> Xy {
        Xy::from(self)
    }
}

/// A two-dimensional point.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Xy {
    pub x: f64,
    pub y: f64,
}

/// A three-dimensional point.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// A two-dimensional point with a measure.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Xym {
    pub x: f64,
    pub y: f64,
    pub m: f64,
}

/// A three-dimensional point with a measure.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Xyzm {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub m: f64,
}

impl Xy {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<&Coord> for Xy {
    fn from(value: &Coord) -> Self {
        Self {
            x: value.x,
            y: value.y,
        }
    }
}

impl From<&Coord> for Xyz {
    fn from(value: &Coord) -> Self {
        Self {
            x: value.x,
            y: value.y,
            z: value.z,
        }
    }
}

impl From<&Coord> for Xym {
    fn from(value: &Coord) -> Self {
        Self {
            x: value.x,
            y: value.y,
            m: value.m,
        }
    }
}

impl From<&Coord> for Xyzm {
    fn from(value: &Coord) -> Self {
        Self {
            x: value.x,
            y: value.y,
            z: value.z,
            m: value.m,
        }
    }
}

impl From<(f64, f64)> for Coord {
    fn from(value: (f64, f64)) -> Self {
        Self::new(value.0, value.1)
    }
}

impl From<(f64, f64, f64)> for Coord {
    fn from(value: (f64, f64, f64)) -> Self {
        Self::xyz(value.0, value.1, value.2)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn slice_layout_follows_dimension() {
        let values = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(
            Coord::from_slice(&values, Dimension::XY),
            Coord::new(1.0, 2.0)
        );
        assert_eq!(
            Coord::from_slice(&values, Dimension::XYZ),
            Coord::xyz(1.0, 2.0, 3.0)
        );
        assert_eq!(
            Coord::from_slice(&values, Dimension::XYM),
            Coord::xym(1.0, 2.0, 3.0)
        );
        assert_eq!(
            Coord::from_slice(&values, Dimension::XYZM),
            Coord::xyzm(1.0, 2.0, 3.0, 4.0)
        );

        let coord = Coord::xyzm(1.0, 2.0, 3.0, 4.0);
        assert_eq!(coord.to_vec(Dimension::XYM), vec![1.0, 2.0, 4.0]);
        assert_eq!(coord.to_vec(Dimension::XYZ), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn normalized_drops_unused_axes() {
        let coord = Coord::xyzm(1.0, 2.0, 3.0, 4.0);
        assert_eq!(coord.normalized(Dimension::XY), Coord::new(1.0, 2.0));
        assert_eq!(coord.normalized(Dimension::XYM), Coord::xym(1.0, 2.0, 4.0));
        assert_eq!(coord.normalized(Dimension::XYZM), coord);
    }
}
