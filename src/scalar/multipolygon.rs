use crate::coord::Xy;
use crate::datatypes::{Dimension, GeometryType};
use crate::envelope::{BoundingBox, Corner};
use crate::error::Result;
use crate::scalar::{bounding_box_of, check_children, Polygon};
use crate::trait_::GeometryTrait;

/// A collection of polygons sharing one flavor.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiPolygon {
    polygons: Vec<Polygon>,
    dim: Dimension,
}

impl MultiPolygon {
    /// Create a multi polygon of flavor `dim`, failing if any polygon has another flavor.
    pub fn try_new(polygons: Vec<Polygon>, dim: Dimension) -> Result<Self> {
        check_children(&polygons, GeometryType::Polygon, dim)?;
        Ok(Self { polygons, dim })
    }

    pub fn empty(dim: Dimension) -> Self {
        Self {
            polygons: vec![],
            dim,
        }
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    pub fn num_polygons(&self) -> usize {
        self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    pub fn into_inner(self) -> Vec<Polygon> {
        self.polygons
    }
}

impl GeometryTrait for MultiPolygon {
    fn dimension(&self) -> Dimension {
        self.dim
    }

    fn geometry_type(&self) -> GeometryType {
        GeometryType::MultiPolygon
    }

    fn bounding_box<C: Corner>(&self) -> BoundingBox<C> {
        bounding_box_of(&self.polygons)
    }

    fn iterate<E, F>(&mut self, f: &mut F) -> std::result::Result<(), E>
    where
        F: FnMut(&mut [Xy]) -> std::result::Result<(), E>,
    {
        for polygon in self.polygons.iter_mut() {
            polygon.iterate(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::multipolygon::mp0;
    use crate::test::polygon::{p0, p1};

    #[test]
    fn envelope_is_union_of_polygons() {
        let multi_polygon = mp0();
        let mut expected = p0().envelope();
        expected.extend(&p1().envelope());
        assert_eq!(multi_polygon.envelope(), expected);
    }

    #[test]
    fn polygons_must_share_flavor() {
        let polygons = vec![p0(), Polygon::empty(Dimension::XYZ)];
        assert!(MultiPolygon::try_new(polygons, Dimension::XY).is_err());
    }

    #[test]
    fn iterate_scales_all_rings() {
        let mut multi_polygon = mp0();
        multi_polygon
            .iterate(&mut |coords: &mut [Xy]| -> std::result::Result<(), ()> {
                for xy in coords.iter_mut() {
                    xy.x *= 2.0;
                    xy.y *= 2.0;
                }
                Ok(())
            })
            .unwrap();
        let original = mp0().envelope();
        let scaled = multi_polygon.envelope();
        assert_eq!(scaled.max.x, original.max.x * 2.0);
        assert_eq!(scaled.min.y, original.min.y * 2.0);
    }
}
