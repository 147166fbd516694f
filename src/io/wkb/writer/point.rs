use std::io::Write;

use byteorder::WriteBytesExt;

use crate::coord::Coord;
use crate::datatypes::Dimension;
use crate::error::Result;
use crate::io::wkb::common::WKBByteOrder;
use crate::io::wkb::writer::{write_header, HEADER_WKB_SIZE};
use crate::scalar::Point;
use crate::trait_::GeometryTrait;

pub(super) fn coord_wkb_size(dim: Dimension) -> usize {
    8 * dim.size()
}

/// The byte length of a WKBPoint
pub(super) fn point_wkb_size(geom: &Point) -> usize {
    HEADER_WKB_SIZE + coord_wkb_size(geom.dimension())
}

pub(super) fn write_coord<W: Write, B: WKBByteOrder>(
    writer: &mut W,
    coord: &Coord,
    dim: Dimension,
) -> Result<()> {
    writer.write_f64::<B>(coord.x)?;
    writer.write_f64::<B>(coord.y)?;
    if dim.has_z() {
        writer.write_f64::<B>(coord.z)?;
    }
    if dim.has_m() {
        writer.write_f64::<B>(coord.m)?;
    }
    Ok(())
}

/// Write a Point geometry to a Writer encoded as WKB
pub(super) fn write_point_as_wkb<W: Write, B: WKBByteOrder>(
    writer: &mut W,
    geom: &Point,
) -> Result<()> {
    write_header::<W, B>(writer, geom.tag())?;
    write_coord::<W, B>(writer, geom.coord(), geom.dimension())
}

#[cfg(test)]
mod test {
    use super::*;
    use byteorder::{BigEndian, LittleEndian};

    #[test]
    fn point_bytes() {
        let mut buf = vec![];
        write_point_as_wkb::<_, LittleEndian>(&mut buf, &Point::xy(1.0, 2.0)).unwrap();
        let expected: Vec<u8> = [
            &[0x01, 0x01, 0x00, 0x00, 0x00][..],
            &1.0f64.to_le_bytes()[..],
            &2.0f64.to_le_bytes()[..],
        ]
        .concat();
        assert_eq!(buf, expected);
    }

    #[test]
    fn point_zm_size() {
        let point = Point::xyzm(1.0, 2.0, 3.0, 4.0);
        let mut buf = vec![];
        write_point_as_wkb::<_, BigEndian>(&mut buf, &point).unwrap();
        assert_eq!(buf.len(), point_wkb_size(&point));
        assert_eq!(&buf[..5], &[0x00, 0x00, 0x00, 0x0b, 0xb9]);
    }
}
