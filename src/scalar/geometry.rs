use enum_as_inner::EnumAsInner;

use crate::coord::Xy;
use crate::datatypes::{Dimension, GeometryType};
use crate::envelope::{BoundingBox, Corner};
use crate::scalar::*;
use crate::trait_::GeometryTrait;

/// Any geometry: one variant per shape, each carrying its own [Dimension].
#[derive(Debug, Clone, PartialEq, EnumAsInner)]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    Polygon(Polygon),
    MultiPoint(MultiPoint),
    MultiLineString(MultiLineString),
    MultiPolygon(MultiPolygon),
    GeometryCollection(GeometryCollection),
}

impl GeometryTrait for Geometry {
    fn dimension(&self) -> Dimension {
        use Geometry::*;
        match self {
            Point(g) => g.dimension(),
            LineString(g) => g.dimension(),
            Polygon(g) => g.dimension(),
            MultiPoint(g) => g.dimension(),
            MultiLineString(g) => g.dimension(),
            MultiPolygon(g) => g.dimension(),
            GeometryCollection(g) => g.dimension(),
        }
    }

    fn geometry_type(&self) -> GeometryType {
        match self {
            Geometry::Point(_) => GeometryType::Point,
            Geometry::LineString(_) => GeometryType::LineString,
            Geometry::Polygon(_) => GeometryType::Polygon,
            Geometry::MultiPoint(_) => GeometryType::MultiPoint,
            Geometry::MultiLineString(_) => GeometryType::MultiLineString,
            Geometry::MultiPolygon(_) => GeometryType::MultiPolygon,
            Geometry::GeometryCollection(_) => GeometryType::GeometryCollection,
        }
    }

    fn bounding_box<C: Corner>(&self) -> BoundingBox<C> {
        use Geometry::*;
        match self {
            Point(g) => g.bounding_box(),
            LineString(g) => g.bounding_box(),
            Polygon(g) => g.bounding_box(),
            MultiPoint(g) => g.bounding_box(),
            MultiLineString(g) => g.bounding_box(),
            MultiPolygon(g) => g.bounding_box(),
            GeometryCollection(g) => g.bounding_box(),
        }
    }

    fn iterate<E, F>(&mut self, f: &mut F) -> std::result::Result<(), E>
    where
        F: FnMut(&mut [Xy]) -> std::result::Result<(), E>,
    {
        use Geometry::*;
        match self {
            Point(g) => g.iterate(f),
            LineString(g) => g.iterate(f),
            Polygon(g) => g.iterate(f),
            MultiPoint(g) => g.iterate(f),
            MultiLineString(g) => g.iterate(f),
            MultiPolygon(g) => g.iterate(f),
            GeometryCollection(g) => g.iterate(f),
        }
    }
}

impl From<Point> for Geometry {
    fn from(value: Point) -> Self {
        Self::Point(value)
    }
}

impl From<LineString> for Geometry {
    fn from(value: LineString) -> Self {
        Self::LineString(value)
    }
}

impl From<Polygon> for Geometry {
    fn from(value: Polygon) -> Self {
        Self::Polygon(value)
    }
}

impl From<MultiPoint> for Geometry {
    fn from(value: MultiPoint) -> Self {
        Self::MultiPoint(value)
    }
}

impl From<MultiLineString> for Geometry {
    fn from(value: MultiLineString) -> Self {
        Self::MultiLineString(value)
    }
}

impl From<MultiPolygon> for Geometry {
    fn from(value: MultiPolygon) -> Self {
        Self::MultiPolygon(value)
    }
}

impl From<GeometryCollection> for Geometry {
    fn from(value: GeometryCollection) -> Self {
        Self::GeometryCollection(value)
    }
}
