//! Owned geometry values: one struct per shape, each tagged with its [Dimension], and the
//! [Geometry] enum over all of them.

pub use geometry::Geometry;
pub use geometrycollection::GeometryCollection;
pub use linestring::LineString;
pub use multilinestring::MultiLineString;
pub use multipoint::MultiPoint;
pub use multipolygon::MultiPolygon;
pub use point::Point;
pub use polygon::Polygon;

pub mod geometry;
pub mod geometrycollection;
pub mod linestring;
pub mod multilinestring;
pub mod multipoint;
pub mod multipolygon;
pub mod point;
pub mod polygon;

use crate::coord::{Coord, Xy};
use crate::datatypes::{Dimension, GeometryTag, GeometryType};
use crate::envelope::{BoundingBox, Corner};
use crate::error::{GeomError, Result};
use crate::trait_::GeometryTrait;

/// Hand the X/Y values of `coords` to `f` through a scratch buffer, writing them back only
/// if `f` succeeds.
pub(crate) fn iterate_coords<E, F>(coords: &mut [Coord], f: &mut F) -> std::result::Result<(), E>
where
    F: FnMut(&mut [Xy]) -> std::result::Result<(), E>,
{
    let mut scratch: Vec<Xy> = coords.iter().map(Xy::from).collect();
    f(&mut scratch)?;
    for (coord, xy) in coords.iter_mut().zip(scratch) {
        coord.x = xy.x;
        coord.y = xy.y;
    }
    Ok(())
}

/// Fold the envelopes of `children` into one.
pub(crate) fn bounding_box_of<'a, C, G>(children: impl IntoIterator<Item = &'a G>) -> BoundingBox<C>
where
    C: Corner,
    G: GeometryTrait + 'a,
{
    let mut bbox = BoundingBox::new_empty();
    for child in children {
        bbox.extend(&child.bounding_box());
    }
    bbox
}

/// Check that every child has the given shape and the container's flavor.
pub(crate) fn check_children<G: GeometryTrait>(
    children: &[G],
    geometry_type: GeometryType,
    dim: Dimension,
) -> Result<()> {
    let expected = GeometryTag::new(geometry_type, dim);
    match children.iter().map(GeometryTrait::tag).find(|tag| *tag != expected) {
        Some(actual) => Err(GeomError::ShapeMismatch { expected, actual }),
        None => Ok(()),
    }
}
