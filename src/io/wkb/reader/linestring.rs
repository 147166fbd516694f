use std::io::Read;

use byteorder::{ByteOrder, ReadBytesExt};

use crate::coord::Coord;
use crate::datatypes::Dimension;
use crate::error::Result;
use crate::io::wkb::reader::{capacity_hint, COORD_CHUNK};
use crate::scalar::LineString;

/// Read a coordinate count followed by that many contiguous coordinates.
///
/// Values are decoded in chunks of [COORD_CHUNK] coordinates, so a corrupt count fails with
/// a truncated read rather than a huge allocation.
pub(super) fn read_coords<R: Read, B: ByteOrder>(
    reader: &mut R,
    dim: Dimension,
) -> Result<Vec<Coord>> {
    let num_coords = reader.read_u32::<B>()?;
    let size = dim.size();
    let mut coords = Vec::with_capacity(capacity_hint(num_coords));
    let mut values = vec![0.0; capacity_hint(num_coords) * size];

    let mut remaining = num_coords as usize;
    while remaining > 0 {
        let n = remaining.min(COORD_CHUNK);
        let chunk = &mut values[..n * size];
        reader.read_f64_into::<B>(chunk)?;
        coords.extend(chunk.chunks_exact(size).map(|c| Coord::from_slice(c, dim)));
        remaining -= n;
    }
    Ok(coords)
}

pub(super) fn read_line_string<R: Read, B: ByteOrder>(
    reader: &mut R,
    dim: Dimension,
) -> Result<LineString> {
    Ok(LineString::new(read_coords::<R, B>(reader, dim)?, dim))
}

#[cfg(test)]
mod test {
    use super::*;
    use byteorder::{LittleEndian, WriteBytesExt};
    use std::io::Cursor;

    fn payload(num_coords: u32, values: &[f64]) -> Vec<u8> {
        let mut buf = vec![];
        buf.write_u32::<LittleEndian>(num_coords).unwrap();
        for value in values {
            buf.write_f64::<LittleEndian>(*value).unwrap();
        }
        buf
    }

    #[test]
    fn reads_contiguous_coords() {
        let buf = payload(2, &[0.0, 1.0, 5.0, 1.0, 2.0, 6.0]);
        let line =
            read_line_string::<_, LittleEndian>(&mut Cursor::new(buf), Dimension::XYZ).unwrap();
        assert_eq!(line.coords(), &[Coord::xyz(0.0, 1.0, 5.0), Coord::xyz(1.0, 2.0, 6.0)]);
    }

    #[test]
    fn spans_several_chunks() {
        let n = COORD_CHUNK * 2 + 3;
        let values: Vec<f64> = (0..n * 2).map(|i| i as f64).collect();
        let buf = payload(n as u32, &values);
        let coords = read_coords::<_, LittleEndian>(&mut Cursor::new(buf), Dimension::XY).unwrap();
        assert_eq!(coords.len(), n);
        assert_eq!(coords[n - 1], Coord::new((2 * n - 2) as f64, (2 * n - 1) as f64));
    }

    #[test]
    fn corrupt_count_is_truncation() {
        let buf = payload(u32::MAX, &[0.0, 1.0]);
        let err =
            read_coords::<_, LittleEndian>(&mut Cursor::new(buf), Dimension::XY).unwrap_err();
        assert!(err.is_truncated());
    }
}
