use std::io::{Read, Write};

use byteorder::{BigEndian, LittleEndian};
use log::debug;

use crate::error::Result;
use crate::io::wkb::common::Endianness;
use crate::io::wkb::reader::{read_geometry, WKBReaderOptions};
use crate::io::wkb::writer::{geometry_wkb_size, write_geometry_as_wkb, WKBWriterOptions};
use crate::scalar::Geometry;

/// Decode one WKB geometry from a byte stream.
///
/// Each nested record may declare its own byte order. Any failure aborts the whole
/// decode; no partially-built geometry is returned. Bytes after the record are left
/// unread.
pub fn read_wkb<R: Read>(mut reader: R, options: &WKBReaderOptions) -> Result<Geometry> {
    read_geometry(&mut reader, options, 0).map_err(|err| {
        debug!("Rejected WKB input: {err}");
        err
    })
}

/// Decode one WKB geometry from a buffer with default options, ignoring trailing bytes.
///
/// ```
/// use geom::io::wkb::from_wkb;
/// use geom::GeometryTrait;
///
/// let buf = [
///     0x01, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xf0, 0x3f, 0x00,
///     0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x40,
/// ];
/// let geometry = from_wkb(&buf).unwrap();
/// assert_eq!(geometry.envelope().min.x, 1.0);
/// ```
pub fn from_wkb(buf: &[u8]) -> Result<Geometry> {
    read_wkb(buf, &WKBReaderOptions::default())
}

/// Encode a geometry as ISO WKB, using the configured byte order for every record.
pub fn write_wkb<W: Write>(
    mut writer: W,
    geometry: &Geometry,
    options: &WKBWriterOptions,
) -> Result<()> {
    match options.endianness {
        Endianness::BigEndian => write_geometry_as_wkb::<W, BigEndian>(&mut writer, geometry),
        Endianness::LittleEndian => {
            write_geometry_as_wkb::<W, LittleEndian>(&mut writer, geometry)
        }
    }
}

/// Encode a geometry as little-endian ISO WKB.
pub fn to_wkb(geometry: &Geometry) -> Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(wkb_size(geometry));
    write_wkb(&mut buf, geometry, &WKBWriterOptions::default())?;
    Ok(buf)
}

/// The number of bytes [write_wkb] produces for `geometry`.
pub fn wkb_size(geometry: &Geometry) -> usize {
    geometry_wkb_size(geometry)
}
