use std::io::Read;

use byteorder::{ByteOrder, ReadBytesExt};

use crate::datatypes::{Dimension, GeometryTag, GeometryType};
use crate::error::{GeomError, Result};
use crate::io::wkb::reader::{capacity_hint, read_geometry, WKBReaderOptions};
use crate::scalar::*;
use crate::trait_::GeometryTrait;

fn mismatch(geometry_type: GeometryType, dim: Dimension, child: &Geometry) -> GeomError {
    GeomError::ShapeMismatch {
        expected: GeometryTag::new(geometry_type, dim),
        actual: child.tag(),
    }
}

/// Read a child count followed by that many full records, each checked by `accept`.
fn read_children<R, B, T, F>(
    reader: &mut R,
    options: &WKBReaderOptions,
    depth: usize,
    mut accept: F,
) -> Result<Vec<T>>
where
    R: Read,
    B: ByteOrder,
    F: FnMut(Geometry) -> Result<T>,
{
    let num_children = reader.read_u32::<B>()?;
    let mut children = Vec::with_capacity(capacity_hint(num_children));
    for _ in 0..num_children {
        children.push(accept(read_geometry(reader, options, depth + 1)?)?);
    }
    Ok(children)
}

pub(super) fn read_multi_point<R: Read, B: ByteOrder>(
    reader: &mut R,
    dim: Dimension,
    options: &WKBReaderOptions,
    depth: usize,
) -> Result<MultiPoint> {
    let points = read_children::<R, B, _, _>(reader, options, depth, |child| match child {
        Geometry::Point(point) if point.dimension() == dim => Ok(point),
        other => Err(mismatch(GeometryType::Point, dim, &other)),
    })?;
    MultiPoint::try_new(points, dim)
}

pub(super) fn read_multi_line_string<R: Read, B: ByteOrder>(
    reader: &mut R,
    dim: Dimension,
    options: &WKBReaderOptions,
    depth: usize,
) -> Result<MultiLineString> {
    let lines = read_children::<R, B, _, _>(reader, options, depth, |child| match child {
        Geometry::LineString(line) if line.dimension() == dim => Ok(line),
        other => Err(mismatch(GeometryType::LineString, dim, &other)),
    })?;
    MultiLineString::try_new(lines, dim)
}

pub(super) fn read_multi_polygon<R: Read, B: ByteOrder>(
    reader: &mut R,
    dim: Dimension,
    options: &WKBReaderOptions,
    depth: usize,
) -> Result<MultiPolygon> {
    let polygons = read_children::<R, B, _, _>(reader, options, depth, |child| match child {
        Geometry::Polygon(polygon) if polygon.dimension() == dim => Ok(polygon),
        other => Err(mismatch(GeometryType::Polygon, dim, &other)),
    })?;
    MultiPolygon::try_new(polygons, dim)
}

/// Children may be of any shape but must share the collection's flavor.
pub(super) fn read_geometry_collection<R: Read, B: ByteOrder>(
    reader: &mut R,
    dim: Dimension,
    options: &WKBReaderOptions,
    depth: usize,
) -> Result<GeometryCollection> {
    let geometries = read_children::<R, B, _, _>(reader, options, depth, |child| {
        if child.dimension() == dim {
            Ok(child)
        } else {
            Err(mismatch(child.geometry_type(), dim, &child))
        }
    })?;
    GeometryCollection::try_new(geometries, dim)
}
