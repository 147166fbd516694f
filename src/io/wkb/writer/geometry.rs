use std::io::Write;

use crate::error::Result;
use crate::io::wkb::common::WKBByteOrder;
use crate::io::wkb::writer::linestring::{line_string_wkb_size, write_line_string_as_wkb};
use crate::io::wkb::writer::multi::*;
use crate::io::wkb::writer::point::{point_wkb_size, write_point_as_wkb};
use crate::io::wkb::writer::polygon::{polygon_wkb_size, write_polygon_as_wkb};
use crate::scalar::Geometry;

/// The byte length of a Geometry
pub(crate) fn geometry_wkb_size(geom: &Geometry) -> usize {
    use Geometry::*;
    match geom {
        Point(p) => point_wkb_size(p),
        LineString(ls) => line_string_wkb_size(ls),
        Polygon(p) => polygon_wkb_size(p),
        MultiPoint(mp) => multi_point_wkb_size(mp),
        MultiLineString(ml) => multi_line_string_wkb_size(ml),
        MultiPolygon(mp) => multi_polygon_wkb_size(mp),
        GeometryCollection(gc) => geometry_collection_wkb_size(gc),
    }
}

/// Write a Geometry to a Writer encoded as WKB
pub(crate) fn write_geometry_as_wkb<W: Write, B: WKBByteOrder>(
    writer: &mut W,
    geom: &Geometry,
) -> Result<()> {
    use Geometry::*;
    match geom {
        Point(p) => write_point_as_wkb::<W, B>(writer, p),
        LineString(ls) => write_line_string_as_wkb::<W, B>(writer, ls),
        Polygon(p) => write_polygon_as_wkb::<W, B>(writer, p),
        MultiPoint(mp) => write_multi_point_as_wkb::<W, B>(writer, mp),
        MultiLineString(ml) => write_multi_line_string_as_wkb::<W, B>(writer, ml),
        MultiPolygon(mp) => write_multi_polygon_as_wkb::<W, B>(writer, mp),
        GeometryCollection(gc) => write_geometry_collection_as_wkb::<W, B>(writer, gc),
    }
}
