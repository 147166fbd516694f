use std::io::Write;

use crate::error::Result;
use crate::io::wkb::common::WKBByteOrder;
use crate::io::wkb::writer::linestring::{coords_wkb_size, write_coords};
use crate::io::wkb::writer::{write_count, write_header, HEADER_WKB_SIZE};
use crate::scalar::Polygon;
use crate::trait_::GeometryTrait;

/// The byte length of a WKBPolygon
pub(super) fn polygon_wkb_size(geom: &Polygon) -> usize {
    let dim = geom.dimension();
    let rings: usize = geom
        .rings()
        .iter()
        .map(|ring| coords_wkb_size(ring.coords(), dim))
        .sum();
    HEADER_WKB_SIZE + 4 + rings
}

/// Write a Polygon geometry to a Writer encoded as WKB
///
/// Rings are written as bare coordinate sequences, without their own headers.
pub(super) fn write_polygon_as_wkb<W: Write, B: WKBByteOrder>(
    writer: &mut W,
    geom: &Polygon,
) -> Result<()> {
    write_header::<W, B>(writer, geom.tag())?;
    write_count::<W, B>(writer, geom.num_rings())?;
    for ring in geom.rings() {
        write_coords::<W, B>(writer, ring.coords(), geom.dimension())?;
    }
    Ok(())
}
