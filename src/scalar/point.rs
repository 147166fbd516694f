use crate::coord::{Coord, Xy};
use crate::datatypes::{Dimension, GeometryType};
use crate::envelope::{BoundingBox, Corner};
use crate::trait_::GeometryTrait;

/// A single vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    coord: Coord,
    dim: Dimension,
}

impl Point {
    /// Create a point of flavor `dim`. Axes `dim` does not carry are dropped.
    pub fn new(coord: Coord, dim: Dimension) -> Self {
        Self {
            coord: coord.normalized(dim),
            dim,
        }
    }

    pub fn xy(x: f64, y: f64) -> Self {
        Self::new(Coord::new(x, y), Dimension::XY)
    }

    pub fn xyz(x: f64, y: f64, z: f64) -> Self {
        Self::new(Coord::xyz(x, y, z), Dimension::XYZ)
    }

    pub fn xym(x: f64, y: f64, m: f64) -> Self {
        Self::new(Coord::xym(x, y, m), Dimension::XYM)
    }

    pub fn xyzm(x: f64, y: f64, z: f64, m: f64) -> Self {
        Self::new(Coord::xyzm(x, y, z, m), Dimension::XYZM)
    }

    pub fn coord(&self) -> &Coord {
        &self.coord
    }

    pub fn x(&self) -> f64 {
        self.coord.x
    }

    pub fn y(&self) -> f64 {
        self.coord.y
    }

    pub fn z(&self) -> Option<f64> {
        self.dim.has_z().then_some(self.coord.z)
    }

    pub fn m(&self) -> Option<f64> {
        self.dim.has_m().then_some(self.coord.m)
    }
}

impl GeometryTrait for Point {
    fn dimension(&self) -> Dimension {
        self.dim
    }

    fn geometry_type(&self) -> GeometryType {
        GeometryType::Point
    }

    fn bounding_box<C: Corner>(&self) -> BoundingBox<C> {
        BoundingBox::from_coord(&self.coord)
    }

    fn iterate<E, F>(&mut self, f: &mut F) -> Result<(), E>
    where
        F: FnMut(&mut [Xy]) -> Result<(), E>,
    {
        let mut scratch = [self.coord.xy()];
        f(&mut scratch)?;
        self.coord.x = scratch[0].x;
        self.coord.y = scratch[0].y;
        Ok(())
    }
}
