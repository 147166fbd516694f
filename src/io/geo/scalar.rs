use crate::coord::Coord;
use crate::datatypes::Dimension;
use crate::error::{GeomError, Result};
use crate::scalar::*;

fn coord_to_geo(coord: &Coord) -> geo::Coord {
    geo::Coord {
        x: coord.x,
        y: coord.y,
    }
}

fn coord_from_geo(coord: &geo::Coord) -> Coord {
    Coord::new(coord.x, coord.y)
}

impl From<&Point> for geo::Point {
    fn from(value: &Point) -> Self {
        geo::Point(coord_to_geo(value.coord()))
    }
}

impl From<&LineString> for geo::LineString {
    fn from(value: &LineString) -> Self {
        geo::LineString::new(value.coords().iter().map(coord_to_geo).collect())
    }
}

/// An empty polygon becomes a geo polygon with an empty exterior.
impl From<&Polygon> for geo::Polygon {
    fn from(value: &Polygon) -> Self {
        let exterior = value
            .exterior()
            .map(Into::into)
            .unwrap_or_else(|| geo::LineString::new(vec![]));
        let interiors = value.interiors().iter().map(Into::into).collect();
        geo::Polygon::new(exterior, interiors)
    }
}

impl From<&MultiPoint> for geo::MultiPoint {
    fn from(value: &MultiPoint) -> Self {
        geo::MultiPoint::new(value.points().iter().map(Into::into).collect())
    }
}

impl From<&MultiLineString> for geo::MultiLineString {
    fn from(value: &MultiLineString) -> Self {
        geo::MultiLineString::new(value.lines().iter().map(Into::into).collect())
    }
}

impl From<&MultiPolygon> for geo::MultiPolygon {
    fn from(value: &MultiPolygon) -> Self {
        geo::MultiPolygon::new(value.polygons().iter().map(Into::into).collect())
    }
}

impl From<&GeometryCollection> for geo::GeometryCollection {
    fn from(value: &GeometryCollection) -> Self {
        let geometries = value.geometries().iter().map(geometry_to_geo).collect();
        geo::GeometryCollection::new_from(geometries)
    }
}

/// Convert a [Geometry] to a [`geo::Geometry`].
///
/// Only the first two dimensions will be kept.
pub fn geometry_to_geo(geometry: &Geometry) -> geo::Geometry {
    match geometry {
        Geometry::Point(g) => geo::Geometry::Point(g.into()),
        Geometry::LineString(g) => geo::Geometry::LineString(g.into()),
        Geometry::Polygon(g) => geo::Geometry::Polygon(g.into()),
        Geometry::MultiPoint(g) => geo::Geometry::MultiPoint(g.into()),
        Geometry::MultiLineString(g) => geo::Geometry::MultiLineString(g.into()),
        Geometry::MultiPolygon(g) => geo::Geometry::MultiPolygon(g.into()),
        Geometry::GeometryCollection(g) => geo::Geometry::GeometryCollection(g.into()),
    }
}

impl From<&geo::Point> for Point {
    fn from(value: &geo::Point) -> Self {
        Point::xy(value.x(), value.y())
    }
}

impl From<&geo::LineString> for LineString {
    fn from(value: &geo::LineString) -> Self {
        LineString::new(value.coords().map(coord_from_geo).collect(), Dimension::XY)
    }
}

impl TryFrom<&geo::Polygon> for Polygon {
    type Error = GeomError;

    fn try_from(value: &geo::Polygon) -> Result<Self> {
        if value.exterior().0.is_empty() && value.interiors().is_empty() {
            return Ok(Polygon::empty(Dimension::XY));
        }
        let rings = std::iter::once(value.exterior())
            .chain(value.interiors())
            .map(LineString::from)
            .collect();
        Polygon::try_new(rings, Dimension::XY)
    }
}

/// Convert a [`geo::Geometry`] into an XY [Geometry].
///
/// geo's `Line`, `Rect` and `Triangle` become a line string or a polygon.
pub fn geometry_from_geo(geometry: &geo::Geometry) -> Result<Geometry> {
    let geometry: Geometry = match geometry {
        geo::Geometry::Point(g) => Point::from(g).into(),
        geo::Geometry::Line(g) => {
            let coords = vec![coord_from_geo(&g.start), coord_from_geo(&g.end)];
            LineString::new(coords, Dimension::XY).into()
        }
        geo::Geometry::LineString(g) => LineString::from(g).into(),
        geo::Geometry::Polygon(g) => Polygon::try_from(g)?.into(),
        geo::Geometry::MultiPoint(g) => {
            MultiPoint::try_new(g.iter().map(Point::from).collect(), Dimension::XY)?.into()
        }
        geo::Geometry::MultiLineString(g) => {
            let lines = g.iter().map(LineString::from).collect();
            MultiLineString::try_new(lines, Dimension::XY)?.into()
        }
        geo::Geometry::MultiPolygon(g) => {
            let polygons = g.iter().map(Polygon::try_from).collect::<Result<Vec<_>>>()?;
            MultiPolygon::try_new(polygons, Dimension::XY)?.into()
        }
        geo::Geometry::GeometryCollection(g) => {
            let geometries = g.iter().map(geometry_from_geo).collect::<Result<Vec<_>>>()?;
            GeometryCollection::try_new(geometries, Dimension::XY)?.into()
        }
        geo::Geometry::Rect(g) => Polygon::try_from(&g.to_polygon())?.into(),
        geo::Geometry::Triangle(g) => Polygon::try_from(&g.to_polygon())?.into(),
    };
    Ok(geometry)
}
