use std::io::Read;

use byteorder::{ByteOrder, ReadBytesExt};

use crate::datatypes::Dimension;
use crate::error::Result;
use crate::io::wkb::reader::capacity_hint;
use crate::io::wkb::reader::linestring::read_line_string;
use crate::scalar::Polygon;

/// Read a ring count followed by that many headerless line string payloads.
pub(super) fn read_polygon<R: Read, B: ByteOrder>(reader: &mut R, dim: Dimension) -> Result<Polygon> {
    let num_rings = reader.read_u32::<B>()?;
    let mut rings = Vec::with_capacity(capacity_hint(num_rings));
    for _ in 0..num_rings {
        rings.push(read_line_string::<R, B>(reader, dim)?);
    }
    Polygon::try_new(rings, dim)
}
