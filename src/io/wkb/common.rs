use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::datatypes::{Dimension, GeometryTag, GeometryType};
use crate::error::{GeomError, Result};

/// The shape and flavor encoded in a WKB type code.
///
/// ISO codes add 1000 for Z, 2000 for M and 3000 for ZM to the base shape code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WKBType {
    pub geometry_type: GeometryType,
    pub dimension: Dimension,
}

impl WKBType {
    pub fn new(geometry_type: GeometryType, dimension: Dimension) -> Self {
        Self {
            geometry_type,
            dimension,
        }
    }

    /// Decompose a type code.
    ///
    /// Codes of 4000 and above whose remainder is a known shape decode as plain XY.
    pub fn try_from_code(code: u32) -> Result<Self> {
        let geometry_type = GeometryType::try_from(code % 1000)
            .map_err(|_| GeomError::UnknownGeometryType(code))?;
        let has_z = (1000..2000).contains(&code) || (3000..4000).contains(&code);
        let has_m = (2000..4000).contains(&code);
        Ok(Self::new(geometry_type, Dimension::from_flags(has_z, has_m)))
    }

    pub fn code(&self) -> u32 {
        let offset = match self.dimension {
            Dimension::XY => 0,
            Dimension::XYZ => 1000,
            Dimension::XYM => 2000,
            Dimension::XYZM => 3000,
        };
        u32::from(self.geometry_type) + offset
    }

    pub fn tag(&self) -> GeometryTag {
        GeometryTag::new(self.geometry_type, self.dimension)
    }
}

impl From<GeometryTag> for WKBType {
    fn from(value: GeometryTag) -> Self {
        Self::new(value.geometry_type, value.dimension)
    }
}

/// Endianness
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Endianness {
    BigEndian,
    #[default]
    LittleEndian,
}

impl TryFrom<u8> for Endianness {
    type Error = GeomError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Endianness::BigEndian),
            1 => Ok(Endianness::LittleEndian),
            other => Err(GeomError::InvalidByteOrder(other)),
        }
    }
}

impl From<Endianness> for u8 {
    fn from(value: Endianness) -> Self {
        use Endianness::*;
        match value {
            BigEndian => 0,
            LittleEndian => 1,
        }
    }
}

/// A [ByteOrder] that knows its own WKB flag.
pub(crate) trait WKBByteOrder: ByteOrder {
    const ENDIANNESS: Endianness;
}

impl WKBByteOrder for BigEndian {
    const ENDIANNESS: Endianness = Endianness::BigEndian;
}

impl WKBByteOrder for LittleEndian {
    const ENDIANNESS: Endianness = Endianness::LittleEndian;
}

#[cfg(test)]
mod test {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, GeometryType::Point, Dimension::XY)]
    #[case(1001, GeometryType::Point, Dimension::XYZ)]
    #[case(1003, GeometryType::Polygon, Dimension::XYZ)]
    #[case(2002, GeometryType::LineString, Dimension::XYM)]
    #[case(3006, GeometryType::MultiPolygon, Dimension::XYZM)]
    #[case(3007, GeometryType::GeometryCollection, Dimension::XYZM)]
    #[case(4001, GeometryType::Point, Dimension::XY)]
    fn decompose(#[case] code: u32, #[case] geometry_type: GeometryType, #[case] dim: Dimension) {
        let wkb_type = WKBType::try_from_code(code).unwrap();
        assert_eq!(wkb_type, WKBType::new(geometry_type, dim));
    }

    #[rstest]
    #[case(0)]
    #[case(8)]
    #[case(1000)]
    #[case(2017)]
    fn unknown_codes(#[case] code: u32) {
        let err = WKBType::try_from_code(code).unwrap_err();
        assert!(matches!(err, GeomError::UnknownGeometryType(c) if c == code));
    }

    #[test]
    fn code_round_trip() {
        for code in (1..=7).flat_map(|base| [base, base + 1000, base + 2000, base + 3000]) {
            assert_eq!(WKBType::try_from_code(code).unwrap().code(), code);
        }
    }

    #[test]
    fn byte_order_flag() {
        assert_eq!(Endianness::try_from(0).unwrap(), Endianness::BigEndian);
        assert_eq!(u8::from(Endianness::LittleEndian), 1);
        assert!(matches!(
            Endianness::try_from(2),
            Err(GeomError::InvalidByteOrder(2))
        ));
    }
}
