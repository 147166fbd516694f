use std::io::Write;

use crate::coord::Coord;
use crate::datatypes::Dimension;
use crate::error::Result;
use crate::io::wkb::common::WKBByteOrder;
use crate::io::wkb::writer::point::{coord_wkb_size, write_coord};
use crate::io::wkb::writer::{write_count, write_header, HEADER_WKB_SIZE};
use crate::scalar::LineString;
use crate::trait_::GeometryTrait;

/// The byte length of a coordinate count plus its coordinates, without any header.
pub(super) fn coords_wkb_size(coords: &[Coord], dim: Dimension) -> usize {
    4 + coords.len() * coord_wkb_size(dim)
}

/// The byte length of a WKBLineString
pub(super) fn line_string_wkb_size(geom: &LineString) -> usize {
    HEADER_WKB_SIZE + coords_wkb_size(geom.coords(), geom.dimension())
}

pub(super) fn write_coords<W: Write, B: WKBByteOrder>(
    writer: &mut W,
    coords: &[Coord],
    dim: Dimension,
) -> Result<()> {
    write_count::<W, B>(writer, coords.len())?;
    for coord in coords {
        write_coord::<W, B>(writer, coord, dim)?;
    }
    Ok(())
}

/// Write a LineString geometry to a Writer encoded as WKB
pub(super) fn write_line_string_as_wkb<W: Write, B: WKBByteOrder>(
    writer: &mut W,
    geom: &LineString,
) -> Result<()> {
    write_header::<W, B>(writer, geom.tag())?;
    write_coords::<W, B>(writer, geom.coords(), geom.dimension())
}
