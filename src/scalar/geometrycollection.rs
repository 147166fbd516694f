use crate::coord::Xy;
use crate::datatypes::{Dimension, GeometryTag, GeometryType};
use crate::envelope::{BoundingBox, Corner};
use crate::error::{GeomError, Result};
use crate::scalar::{bounding_box_of, Geometry};
use crate::trait_::GeometryTrait;

/// A heterogeneous collection: children may be of any shape, but all share the
/// collection's flavor.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryCollection {
    geometries: Vec<Geometry>,
    dim: Dimension,
}

impl GeometryCollection {
    /// Create a collection of flavor `dim`, failing if any child has another flavor.
    pub fn try_new(geometries: Vec<Geometry>, dim: Dimension) -> Result<Self> {
        if let Some(child) = geometries.iter().find(|g| g.dimension() != dim) {
            return Err(GeomError::ShapeMismatch {
                expected: GeometryTag::new(child.geometry_type(), dim),
                actual: child.tag(),
            });
        }
        Ok(Self { geometries, dim })
    }

    pub fn empty(dim: Dimension) -> Self {
        Self {
            geometries: vec![],
            dim,
        }
    }

    pub fn geometries(&self) -> &[Geometry] {
        &self.geometries
    }

    pub fn num_geometries(&self) -> usize {
        self.geometries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.geometries.is_empty()
    }

    pub fn into_inner(self) -> Vec<Geometry> {
        self.geometries
    }
}

impl GeometryTrait for GeometryCollection {
    fn dimension(&self) -> Dimension {
        self.dim
    }

    fn geometry_type(&self) -> GeometryType {
        GeometryType::GeometryCollection
    }

    fn bounding_box<C: Corner>(&self) -> BoundingBox<C> {
        bounding_box_of(&self.geometries)
    }

    fn iterate<E, F>(&mut self, f: &mut F) -> std::result::Result<(), E>
    where
        F: FnMut(&mut [Xy]) -> std::result::Result<(), E>,
    {
        for geometry in self.geometries.iter_mut() {
            geometry.iterate(f)?;
        }
        Ok(())
    }
}
