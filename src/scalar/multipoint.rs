use crate::coord::Xy;
use crate::datatypes::{Dimension, GeometryType};
use crate::envelope::{BoundingBox, Corner};
use crate::error::Result;
use crate::scalar::{bounding_box_of, check_children, Point};
use crate::trait_::GeometryTrait;

/// A collection of points sharing one flavor.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiPoint {
    points: Vec<Point>,
    dim: Dimension,
}

impl MultiPoint {
    /// Create a multi point of flavor `dim`, failing if any point has another flavor.
    pub fn try_new(points: Vec<Point>, dim: Dimension) -> Result<Self> {
        check_children(&points, GeometryType::Point, dim)?;
        Ok(Self { points, dim })
    }

    pub fn empty(dim: Dimension) -> Self {
        Self {
            points: vec![],
            dim,
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn into_inner(self) -> Vec<Point> {
        self.points
    }
}

impl GeometryTrait for MultiPoint {
    fn dimension(&self) -> Dimension {
        self.dim
    }

    fn geometry_type(&self) -> GeometryType {
        GeometryType::MultiPoint
    }

    fn bounding_box<C: Corner>(&self) -> BoundingBox<C> {
        bounding_box_of(&self.points)
    }

    fn iterate<E, F>(&mut self, f: &mut F) -> std::result::Result<(), E>
    where
        F: FnMut(&mut [Xy]) -> std::result::Result<(), E>,
    {
        for point in self.points.iter_mut() {
            point.iterate(f)?;
        }
        Ok(())
    }
}
