use crate::coord::{Coord, Xy};
use crate::datatypes::{Dimension, GeometryType};
use crate::envelope::{BoundingBox, Corner};
use crate::scalar::iterate_coords;
use crate::trait_::GeometryTrait;

/// An ordered chain of vertices. It may be empty.
#[derive(Debug, Clone, PartialEq)]
pub struct LineString {
    coords: Vec<Coord>,
    dim: Dimension,
}

impl LineString {
    /// Create a line string of flavor `dim`. Axes `dim` does not carry are dropped.
    pub fn new(coords: Vec<Coord>, dim: Dimension) -> Self {
        let coords = coords
            .into_iter()
            .map(|coord| coord.normalized(dim))
            .collect();
        Self { coords, dim }
    }

    pub fn empty(dim: Dimension) -> Self {
        Self {
            coords: vec![],
            dim,
        }
    }

    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    pub fn coord(&self, i: usize) -> Option<&Coord> {
        self.coords.get(i)
    }

    pub fn num_coords(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Whether the first and last vertex coincide in X and Y.
    pub fn is_closed(&self) -> bool {
        match (self.coords.first(), self.coords.last()) {
            (Some(first), Some(last)) => first.xy() == last.xy(),
            _ => false,
        }
    }

    pub fn into_inner(self) -> Vec<Coord> {
        self.coords
    }
}

impl GeometryTrait for LineString {
    fn dimension(&self) -> Dimension {
        self.dim
    }

    fn geometry_type(&self) -> GeometryType {
        GeometryType::LineString
    }

    fn bounding_box<C: Corner>(&self) -> BoundingBox<C> {
        self.coords.iter().map(C::from_coord).collect()
    }

    fn iterate<E, F>(&mut self, f: &mut F) -> Result<(), E>
    where
        F: FnMut(&mut [Xy]) -> Result<(), E>,
    {
        iterate_coords(&mut self.coords, f)
    }
}
