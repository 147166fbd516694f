use crate::coord::Xy;
use crate::datatypes::{Dimension, GeometryType};
use crate::envelope::{BoundingBox, Corner};
use crate::error::Result;
use crate::scalar::{bounding_box_of, check_children, LineString};
use crate::trait_::GeometryTrait;

/// An ordered set of rings. By convention ring 0 is the exterior; this is not enforced.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    rings: Vec<LineString>,
    dim: Dimension,
}

impl Polygon {
    /// Create a polygon of flavor `dim`, failing if any ring has another flavor.
    pub fn try_new(rings: Vec<LineString>, dim: Dimension) -> Result<Self> {
        check_children(&rings, GeometryType::LineString, dim)?;
        Ok(Self { rings, dim })
    }

    pub fn empty(dim: Dimension) -> Self {
        Self { rings: vec![], dim }
    }

    pub fn rings(&self) -> &[LineString] {
        &self.rings
    }

    pub fn num_rings(&self) -> usize {
        self.rings.len()
    }

    pub fn exterior(&self) -> Option<&LineString> {
        self.rings.first()
    }

    pub fn interiors(&self) -> &[LineString] {
        self.rings.get(1..).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    pub fn into_inner(self) -> Vec<LineString> {
        self.rings
    }
}

impl GeometryTrait for Polygon {
    fn dimension(&self) -> Dimension {
        self.dim
    }

    fn geometry_type(&self) -> GeometryType {
        GeometryType::Polygon
    }

    fn bounding_box<C: Corner>(&self) -> BoundingBox<C> {
        bounding_box_of(&self.rings)
    }

    fn iterate<E, F>(&mut self, f: &mut F) -> std::result::Result<(), E>
    where
        F: FnMut(&mut [Xy]) -> std::result::Result<(), E>,
    {
        for ring in self.rings.iter_mut() {
            ring.iterate(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::coord::Coord;
    use crate::error::GeomError;
    use crate::test::polygon::{p0, p_z};

    #[test]
    fn rings_must_share_flavor() {
        let exterior = LineString::new(vec![Coord::new(0.0, 0.0)], Dimension::XY);
        let hole = LineString::new(vec![Coord::xyz(0.0, 0.0, 1.0)], Dimension::XYZ);
        let err = Polygon::try_new(vec![exterior, hole], Dimension::XY).unwrap_err();
        assert!(matches!(err, GeomError::ShapeMismatch { .. }));
        assert_eq!(
            err.to_string(),
            "Unexpected child geometry: expected LineString, got LineString Z"
        );
    }

    #[test]
    fn exterior_and_interiors() {
        let polygon = p0();
        assert_eq!(polygon.num_rings(), 2);
        assert!(polygon.exterior().unwrap().is_closed());
        assert_eq!(polygon.interiors().len(), 1);

        let empty = Polygon::empty(Dimension::XY);
        assert!(empty.exterior().is_none());
        assert!(empty.interiors().is_empty());
    }

    #[test]
    fn envelope_is_union_of_rings() {
        let polygon = p_z();
        let mut expected = BoundingBox::new_empty();
        for ring in polygon.rings() {
            expected.extend(&ring.envelope_z().unwrap());
        }
        assert_eq!(polygon.envelope_z().unwrap(), expected);
    }

    #[test]
    fn iterate_visits_each_ring_in_order() {
        let mut polygon = p0();
        let mut lengths = vec![];
        polygon
            .iterate(&mut |coords: &mut [Xy]| -> std::result::Result<(), ()> {
                lengths.push(coords.len());
                Ok(())
            })
            .unwrap();
        assert_eq!(lengths, vec![5, 4]);
    }

    #[test]
    fn iterate_stops_at_first_failure() {
        let mut polygon = p0();
        let mut calls = 0;
        let result = polygon.iterate(&mut |coords: &mut [Xy]| {
            calls += 1;
            for xy in coords.iter_mut() {
                xy.x = 0.0;
            }
            if calls == 2 {
                Err("second ring")
            } else {
                Ok(())
            }
        });
        assert_eq!(result, Err("second ring"));
        assert_eq!(calls, 2);
        // The exterior was committed, the hole was not.
        assert!(polygon.rings()[0].coords().iter().all(|c| c.x == 0.0));
        assert_eq!(polygon.rings()[1], p0().rings()[1]);
    }
}
