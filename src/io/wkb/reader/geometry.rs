use std::io::Read;

use byteorder::{BigEndian, ByteOrder, LittleEndian, ReadBytesExt};
use log::trace;

use crate::datatypes::GeometryType;
use crate::error::{GeomError, Result};
use crate::io::wkb::common::{Endianness, WKBType};
use crate::io::wkb::reader::linestring::read_line_string;
use crate::io::wkb::reader::multi::*;
use crate::io::wkb::reader::point::read_point;
use crate::io::wkb::reader::polygon::read_polygon;
use crate::io::wkb::reader::WKBReaderOptions;
use crate::scalar::Geometry;

/// Read one full record: byte order, type code, then the payload in that byte order.
///
/// `depth` is zero for the top-level record and grows by one per enclosing collection.
pub(crate) fn read_geometry<R: Read>(
    reader: &mut R,
    options: &WKBReaderOptions,
    depth: usize,
) -> Result<Geometry> {
    if depth > options.max_depth {
        return Err(GeomError::NestingTooDeep(options.max_depth));
    }
    match Endianness::try_from(reader.read_u8()?)? {
        Endianness::BigEndian => read_record::<R, BigEndian>(reader, options, depth),
        Endianness::LittleEndian => read_record::<R, LittleEndian>(reader, options, depth),
    }
}

fn read_record<R: Read, B: ByteOrder>(
    reader: &mut R,
    options: &WKBReaderOptions,
    depth: usize,
) -> Result<Geometry> {
    let code = reader.read_u32::<B>()?;
    let wkb_type = WKBType::try_from_code(code)?;
    trace!("WKB record {} (code {code}) at depth {depth}", wkb_type.tag());

    let dim = wkb_type.dimension;
    let geometry: Geometry = match wkb_type.geometry_type {
        GeometryType::Point => read_point::<R, B>(reader, dim)?.into(),
        GeometryType::LineString => read_line_string::<R, B>(reader, dim)?.into(),
        GeometryType::Polygon => read_polygon::<R, B>(reader, dim)?.into(),
        GeometryType::MultiPoint => read_multi_point::<R, B>(reader, dim, options, depth)?.into(),
        GeometryType::MultiLineString => {
            read_multi_line_string::<R, B>(reader, dim, options, depth)?.into()
        }
        GeometryType::MultiPolygon => {
            read_multi_polygon::<R, B>(reader, dim, options, depth)?.into()
        }
        GeometryType::GeometryCollection => {
            read_geometry_collection::<R, B>(reader, dim, options, depth)?.into()
        }
    };
    Ok(geometry)
}
