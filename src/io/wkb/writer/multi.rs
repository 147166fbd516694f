use std::io::Write;

use crate::error::Result;
use crate::io::wkb::common::WKBByteOrder;
use crate::io::wkb::writer::linestring::{line_string_wkb_size, write_line_string_as_wkb};
use crate::io::wkb::writer::point::{point_wkb_size, write_point_as_wkb};
use crate::io::wkb::writer::polygon::{polygon_wkb_size, write_polygon_as_wkb};
use crate::io::wkb::writer::{
    geometry_wkb_size, write_count, write_geometry_as_wkb, write_header, HEADER_WKB_SIZE,
};
use crate::scalar::*;
use crate::trait_::GeometryTrait;

pub(super) fn multi_point_wkb_size(geom: &MultiPoint) -> usize {
    HEADER_WKB_SIZE + 4 + geom.points().iter().map(point_wkb_size).sum::<usize>()
}

pub(super) fn multi_line_string_wkb_size(geom: &MultiLineString) -> usize {
    HEADER_WKB_SIZE + 4 + geom.lines().iter().map(line_string_wkb_size).sum::<usize>()
}

pub(super) fn multi_polygon_wkb_size(geom: &MultiPolygon) -> usize {
    HEADER_WKB_SIZE + 4 + geom.polygons().iter().map(polygon_wkb_size).sum::<usize>()
}

pub(super) fn geometry_collection_wkb_size(geom: &GeometryCollection) -> usize {
    HEADER_WKB_SIZE + 4 + geom.geometries().iter().map(geometry_wkb_size).sum::<usize>()
}

/// Write a MultiPoint geometry to a Writer encoded as WKB
pub(super) fn write_multi_point_as_wkb<W: Write, B: WKBByteOrder>(
    writer: &mut W,
    geom: &MultiPoint,
) -> Result<()> {
    write_header::<W, B>(writer, geom.tag())?;
    write_count::<W, B>(writer, geom.num_points())?;
    for point in geom.points() {
        write_point_as_wkb::<W, B>(writer, point)?;
    }
    Ok(())
}

/// Write a MultiLineString geometry to a Writer encoded as WKB
pub(super) fn write_multi_line_string_as_wkb<W: Write, B: WKBByteOrder>(
    writer: &mut W,
    geom: &MultiLineString,
) -> Result<()> {
    write_header::<W, B>(writer, geom.tag())?;
    write_count::<W, B>(writer, geom.num_lines())?;
    for line in geom.lines() {
        write_line_string_as_wkb::<W, B>(writer, line)?;
    }
    Ok(())
}

/// Write a MultiPolygon geometry to a Writer encoded as WKB
pub(super) fn write_multi_polygon_as_wkb<W: Write, B: WKBByteOrder>(
    writer: &mut W,
    geom: &MultiPolygon,
) -> Result<()> {
    write_header::<W, B>(writer, geom.tag())?;
    write_count::<W, B>(writer, geom.num_polygons())?;
    for polygon in geom.polygons() {
        write_polygon_as_wkb::<W, B>(writer, polygon)?;
    }
    Ok(())
}

/// Write a GeometryCollection to a Writer encoded as WKB
pub(super) fn write_geometry_collection_as_wkb<W: Write, B: WKBByteOrder>(
    writer: &mut W,
    geom: &GeometryCollection,
) -> Result<()> {
    write_header::<W, B>(writer, geom.tag())?;
    write_count::<W, B>(writer, geom.num_geometries())?;
    for child in geom.geometries() {
        write_geometry_as_wkb::<W, B>(writer, child)?;
    }
    Ok(())
}
