//! Encoding owned geometries as ISO WKB.

mod geometry;
mod linestring;
mod multi;
mod point;
mod polygon;

pub(crate) use geometry::{geometry_wkb_size, write_geometry_as_wkb};

use std::io::Write;

use byteorder::WriteBytesExt;

use crate::datatypes::GeometryTag;
use crate::error::{GeomError, Result};
use crate::io::wkb::common::{Endianness, WKBByteOrder, WKBType};

/// Options for encoding WKB.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WKBWriterOptions {
    /// The byte order used for every record, including nested ones.
    pub endianness: Endianness,
}

/// The byte order flag and type code.
pub(super) const HEADER_WKB_SIZE: usize = 1 + 4;

fn write_header<W: Write, B: WKBByteOrder>(writer: &mut W, tag: GeometryTag) -> Result<()> {
    writer.write_u8(B::ENDIANNESS.into())?;
    writer.write_u32::<B>(WKBType::from(tag).code())?;
    Ok(())
}

fn write_count<W: Write, B: WKBByteOrder>(writer: &mut W, count: usize) -> Result<()> {
    let count = u32::try_from(count).map_err(|_| GeomError::Overflow)?;
    writer.write_u32::<B>(count)?;
    Ok(())
}
