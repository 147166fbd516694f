use std::io::Read;

use byteorder::{ByteOrder, ReadBytesExt};

use crate::coord::Coord;
use crate::datatypes::Dimension;
use crate::error::Result;
use crate::scalar::Point;

/// Read a single coordinate: X, Y, then Z and/or M as `dim` requires.
pub(super) fn read_coord<R: Read, B: ByteOrder>(reader: &mut R, dim: Dimension) -> Result<Coord> {
    let mut values = [0.0; 4];
    let values = &mut values[..dim.size()];
    reader.read_f64_into::<B>(values)?;
    Ok(Coord::from_slice(values, dim))
}

pub(super) fn read_point<R: Read, B: ByteOrder>(reader: &mut R, dim: Dimension) -> Result<Point> {
    Ok(Point::new(read_coord::<R, B>(reader, dim)?, dim))
}
