use std::io::Read;

use geojson::{GeoJson, PointType, PolygonType, Position, Value};
use log::debug;

use crate::coord::Coord;
use crate::datatypes::{Dimension, GeometryTag, GeometryType};
use crate::error::{GeomError, Result};
use crate::io::geojson::document::GeoJsonDocument;
use crate::scalar::*;
use crate::trait_::GeometryTrait;

fn dimension_of(position: &[f64]) -> Result<Dimension> {
    match position.len() {
        2 => Ok(Dimension::XY),
        3 => Ok(Dimension::XYZ),
        4 => Ok(Dimension::XYZM),
        n => Err(GeomError::UnsupportedDimension(n)),
    }
}

/// Converts positions of one shape, all of which must share the flavor of the first.
struct PositionReader {
    geometry_type: GeometryType,
    dim: Dimension,
}

impl PositionReader {
    /// Take the flavor from `first`, or XY when the shape has no positions at all.
    fn new(geometry_type: GeometryType, first: Option<&Position>) -> Result<Self> {
        let dim = match first {
            Some(position) => dimension_of(position)?,
            None => Dimension::XY,
        };
        Ok(Self { geometry_type, dim })
    }

    fn coord(&self, position: &[f64]) -> Result<Coord> {
        let dim = dimension_of(position)?;
        if dim != self.dim {
            return Err(GeomError::ShapeMismatch {
                expected: GeometryTag::new(self.geometry_type, self.dim),
                actual: GeometryTag::new(self.geometry_type, dim),
            });
        }
        Ok(Coord::from_slice(position, dim))
    }

    fn point(&self, position: &PointType) -> Result<Point> {
        Ok(Point::new(self.coord(position)?, self.dim))
    }

    fn line_string(&self, positions: &[Position]) -> Result<LineString> {
        let coords = positions
            .iter()
            .map(|position| self.coord(position))
            .collect::<Result<Vec<_>>>()?;
        Ok(LineString::new(coords, self.dim))
    }

    fn polygon(&self, rings: &PolygonType) -> Result<Polygon> {
        let rings = rings
            .iter()
            .map(|ring| self.line_string(ring))
            .collect::<Result<Vec<_>>>()?;
        Polygon::try_new(rings, self.dim)
    }
}

/// Convert a [geojson::Geometry] into a [Geometry].
///
/// The flavor of each shape comes from its first position; empty shapes are XY and a
/// collection takes the flavor of its first child.
///
/// ```
/// use geom::io::geojson::from_geojson;
/// use geom::{Dimension, GeometryTrait};
///
/// let geojson = geojson::Geometry::new(geojson::Value::Point(vec![1.0, 2.0, 3.0]));
/// let point = from_geojson(&geojson).unwrap().into_point().unwrap();
/// assert_eq!(point.dimension(), Dimension::XYZ);
/// assert_eq!(point.z(), Some(3.0));
/// ```
pub fn from_geojson(geometry: &geojson::Geometry) -> Result<Geometry> {
    let decoded: Geometry = match &geometry.value {
        Value::Point(position) => {
            PositionReader::new(GeometryType::Point, Some(position))?
                .point(position)?
                .into()
        }
        Value::LineString(positions) => {
            PositionReader::new(GeometryType::LineString, positions.first())?
                .line_string(positions)?
                .into()
        }
        Value::Polygon(rings) => {
            let first = rings.iter().flatten().next();
            PositionReader::new(GeometryType::Polygon, first)?
                .polygon(rings)?
                .into()
        }
        Value::MultiPoint(positions) => {
            let reader = PositionReader::new(GeometryType::MultiPoint, positions.first())?;
            let points = positions
                .iter()
                .map(|position| reader.point(position))
                .collect::<Result<Vec<_>>>()?;
            MultiPoint::try_new(points, reader.dim)?.into()
        }
        Value::MultiLineString(lines) => {
            let first = lines.iter().flatten().next();
            let reader = PositionReader::new(GeometryType::MultiLineString, first)?;
            let lines = lines
                .iter()
                .map(|line| reader.line_string(line))
                .collect::<Result<Vec<_>>>()?;
            MultiLineString::try_new(lines, reader.dim)?.into()
        }
        Value::MultiPolygon(polygons) => {
            let first = polygons.iter().flatten().flatten().next();
            let reader = PositionReader::new(GeometryType::MultiPolygon, first)?;
            let polygons = polygons
                .iter()
                .map(|polygon| reader.polygon(polygon))
                .collect::<Result<Vec<_>>>()?;
            MultiPolygon::try_new(polygons, reader.dim)?.into()
        }
        Value::GeometryCollection(children) => {
            let children = children
                .iter()
                .map(from_geojson)
                .collect::<Result<Vec<_>>>()?;
            let dim = children
                .first()
                .map(GeometryTrait::dimension)
                .unwrap_or_default();
            GeometryCollection::try_new(children, dim)?.into()
        }
    };
    Ok(decoded)
}

const DOCUMENT_TYPES: [&str; 2] = ["Feature", "FeatureCollection"];

/// Reject documents whose top-level `type` is not a GeoJSON type before handing them to the
/// structural parser.
fn check_type(value: &serde_json::Value) -> Result<()> {
    let Some(name) = value.get("type").and_then(serde_json::Value::as_str) else {
        return Ok(());
    };
    if GeometryType::from_name(name).is_some() || DOCUMENT_TYPES.contains(&name) {
        Ok(())
    } else {
        debug!("Rejected GeoJSON document of type {name:?}");
        Err(GeomError::UnsupportedType(name.to_string()))
    }
}

/// Lift the structural parser's errors for unknown type names and short positions into
/// their own error classes, wherever they occur in the document.
fn classify(err: geojson::Error) -> GeomError {
    match err {
        geojson::Error::GeometryUnknownType(name) => GeomError::UnsupportedType(name),
        geojson::Error::PositionTooShort(n) => GeomError::UnsupportedDimension(n),
        other => other.into(),
    }
}

fn document_from_value(value: serde_json::Value) -> Result<GeoJsonDocument> {
    check_type(&value)?;
    let geojson = GeoJson::from_json_value(value).map_err(|err| {
        debug!("Rejected GeoJSON document: {err}");
        classify(err)
    })?;
    GeoJsonDocument::try_from(&geojson)
}

/// Read a GeoJSON geometry, feature or feature collection from a byte stream.
pub fn read_geojson<R: Read>(reader: R) -> Result<GeoJsonDocument> {
    let value: serde_json::Value = serde_json::from_reader(reader)?;
    document_from_value(value)
}

/// Parse a GeoJSON geometry, feature or feature collection from a string.
pub fn parse_geojson(s: &str) -> Result<GeoJsonDocument> {
    let value: serde_json::Value = serde_json::from_str(s)?;
    document_from_value(value)
}
