use std::io::Write;

use geojson::{GeoJson, PolygonType, Position, Value};

use crate::coord::Coord;
use crate::datatypes::Dimension;
use crate::error::Result;
use crate::io::geojson::document::GeoJsonDocument;
use crate::scalar::*;
use crate::trait_::GeometryTrait;

fn position(coord: &Coord, dim: Dimension) -> Position {
    coord.to_vec(dim)
}

fn positions(line: &LineString) -> Vec<Position> {
    line.coords()
        .iter()
        .map(|coord| position(coord, line.dimension()))
        .collect()
}

fn rings(polygon: &Polygon) -> PolygonType {
    polygon.rings().iter().map(positions).collect()
}

fn geometry_value(geometry: &Geometry) -> Value {
    match geometry {
        Geometry::Point(point) => Value::Point(position(point.coord(), point.dimension())),
        Geometry::LineString(line) => Value::LineString(positions(line)),
        Geometry::Polygon(polygon) => Value::Polygon(rings(polygon)),
        Geometry::MultiPoint(multi_point) => Value::MultiPoint(
            multi_point
                .points()
                .iter()
                .map(|point| position(point.coord(), point.dimension()))
                .collect(),
        ),
        Geometry::MultiLineString(multi_line) => {
            Value::MultiLineString(multi_line.lines().iter().map(positions).collect())
        }
        Geometry::MultiPolygon(multi_polygon) => {
            Value::MultiPolygon(multi_polygon.polygons().iter().map(rings).collect())
        }
        Geometry::GeometryCollection(collection) => Value::GeometryCollection(
            collection.geometries().iter().map(to_geojson).collect(),
        ),
    }
}

/// Convert a [Geometry] into a [geojson::Geometry].
///
/// XYM positions are written as `[x, y, m]`.
pub fn to_geojson(geometry: &Geometry) -> geojson::Geometry {
    geojson::Geometry::new(geometry_value(geometry))
}

/// Write a GeoJSON document as compact JSON.
pub fn write_geojson<W: Write>(writer: W, document: &GeoJsonDocument) -> Result<()> {
    serde_json::to_writer(writer, &GeoJson::from(document))?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::io::geojson::{from_geojson, read_geojson, Feature};
    use crate::test::geometry::all_geometries;
    use serde_json::json;

    #[test]
    fn point_positions_by_flavor() {
        let cases = [
            (Point::xy(1.0, 2.0), vec![1.0, 2.0]),
            (Point::xyz(1.0, 2.0, 3.0), vec![1.0, 2.0, 3.0]),
            (Point::xym(1.0, 2.0, 4.0), vec![1.0, 2.0, 4.0]),
            (Point::xyzm(1.0, 2.0, 3.0, 4.0), vec![1.0, 2.0, 3.0, 4.0]),
        ];
        for (point, expected) in cases {
            assert_eq!(to_geojson(&point.into()).value, Value::Point(expected));
        }
    }

    #[test]
    fn round_trip_without_m() {
        for geometry in all_geometries() {
            let dim = geometry.dimension();
            // Empty shapes read back as XY
            let has_empty_part = geometry.is_geometry_collection()
                || matches!(&geometry, Geometry::LineString(line) if line.is_empty());
            if dim == Dimension::XYM || (dim != Dimension::XY && has_empty_part) {
                continue;
            }
            assert_eq!(from_geojson(&to_geojson(&geometry)).unwrap(), geometry);
        }
    }

    #[test]
    fn m_reads_back_as_z() {
        let decoded = from_geojson(&to_geojson(&Point::xym(1.0, 2.0, 4.0).into())).unwrap();
        assert_eq!(decoded, Geometry::Point(Point::xyz(1.0, 2.0, 4.0)));
    }

    #[test]
    fn write_feature() {
        let mut properties = serde_json::Map::new();
        properties.insert("name".to_string(), json!("a"));
        let document = GeoJsonDocument::Feature(Feature {
            id: Some("f1".to_string()),
            geometry: Some(Point::xy(1.0, 2.0).into()),
            properties,
        });

        let mut buf = vec![];
        write_geojson(&mut buf, &document).unwrap();
        let written: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(written["type"], json!("Feature"));
        assert_eq!(written["id"], json!("f1"));
        assert_eq!(written["geometry"]["coordinates"], json!([1.0, 2.0]));
        assert_eq!(written["properties"]["name"], json!("a"));

        assert_eq!(read_geojson(buf.as_slice()).unwrap(), document);
    }
}
