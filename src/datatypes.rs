//! Flavor and shape tags shared by the geometry model and the codecs.

use std::fmt::Display;

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// The coordinate flavor of a geometry: which extra axes, on top of X and Y, each vertex
/// carries.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// Two-dimensional.
    #[default]
    XY,

    /// Three-dimensional.
    XYZ,

    /// XYM (2D with measure).
    XYM,

    /// XYZM (3D with measure).
    XYZM,
}

impl Dimension {
    /// Build a dimension from the presence of the Z and M axes.
    pub fn from_flags(has_z: bool, has_m: bool) -> Self {
        match (has_z, has_m) {
            (false, false) => Dimension::XY,
            (true, false) => Dimension::XYZ,
            (false, true) => Dimension::XYM,
            (true, true) => Dimension::XYZM,
        }
    }

    /// Returns the number of dimensions.
    pub fn size(&self) -> usize {
        match self {
            Dimension::XY => 2,
            Dimension::XYZ => 3,
            Dimension::XYM => 3,
            Dimension::XYZM => 4,
        }
    }

    pub fn has_z(&self) -> bool {
        matches!(self, Dimension::XYZ | Dimension::XYZM)
    }

    pub fn has_m(&self) -> bool {
        matches!(self, Dimension::XYM | Dimension::XYZM)
    }

    /// The suffix used in ISO WKT/WKB type names, e.g. `" ZM"`.
    pub(crate) fn suffix(&self) -> &'static str {
        match self {
            Dimension::XY => "",
            Dimension::XYZ => " Z",
            Dimension::XYM => " M",
            Dimension::XYZM => " ZM",
        }
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dimension::XY => write!(f, "XY"),
            Dimension::XYZ => write!(f, "XYZ"),
            Dimension::XYM => write!(f, "XYM"),
            Dimension::XYZM => write!(f, "XYZM"),
        }
    }
}

/// The structural kind of a geometry, independent of its [Dimension].
///
/// The discriminants are the flattened ISO WKB type codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u32)]
pub enum GeometryType {
    Point = 1,
    LineString = 2,
    Polygon = 3,
    MultiPoint = 4,
    MultiLineString = 5,
    MultiPolygon = 6,
    GeometryCollection = 7,
}

impl GeometryType {
    /// The name used by GeoJSON (and WKT) for this shape.
    pub fn name(&self) -> &'static str {
        match self {
            GeometryType::Point => "Point",
            GeometryType::LineString => "LineString",
            GeometryType::Polygon => "Polygon",
            GeometryType::MultiPoint => "MultiPoint",
            GeometryType::MultiLineString => "MultiLineString",
            GeometryType::MultiPolygon => "MultiPolygon",
            GeometryType::GeometryCollection => "GeometryCollection",
        }
    }

    /// Parse a GeoJSON type name. Matching is case sensitive, as in GeoJSON.
    pub fn from_name(name: &str) -> Option<Self> {
        let geometry_type = match name {
            "Point" => GeometryType::Point,
            "LineString" => GeometryType::LineString,
            "Polygon" => GeometryType::Polygon,
            "MultiPoint" => GeometryType::MultiPoint,
            "MultiLineString" => GeometryType::MultiLineString,
            "MultiPolygon" => GeometryType::MultiPolygon,
            "GeometryCollection" => GeometryType::GeometryCollection,
            _ => return None,
        };
        Some(geometry_type)
    }
}

impl Display for GeometryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A shape combined with a flavor, e.g. "Polygon Z".
///
/// This is what the WKB decoder compares when checking that the children of a multi
/// geometry or collection match what their parent declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GeometryTag {
    pub geometry_type: GeometryType,
    pub dimension: Dimension,
}

impl GeometryTag {
    pub fn new(geometry_type: GeometryType, dimension: Dimension) -> Self {
        Self {
            geometry_type,
            dimension,
        }
    }
}

impl Display for GeometryTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.geometry_type, self.dimension.suffix())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case(false, false, Dimension::XY, 2)]
    #[case(true, false, Dimension::XYZ, 3)]
    #[case(false, true, Dimension::XYM, 3)]
    #[case(true, true, Dimension::XYZM, 4)]
    fn dimension_from_flags(
        #[case] has_z: bool,
        #[case] has_m: bool,
        #[case] expected: Dimension,
        #[case] size: usize,
    ) {
        let dim = Dimension::from_flags(has_z, has_m);
        assert_eq!(dim, expected);
        assert_eq!(dim.has_z(), has_z);
        assert_eq!(dim.has_m(), has_m);
        assert_eq!(dim.size(), size);
    }

    #[test]
    fn geometry_type_names() {
        for code in 1..=7u32 {
            let geometry_type = GeometryType::try_from(code).unwrap();
            assert_eq!(
                GeometryType::from_name(geometry_type.name()),
                Some(geometry_type)
            );
            assert_eq!(u32::from(geometry_type), code);
        }
        assert!(GeometryType::try_from(8).is_err());
        assert_eq!(GeometryType::from_name("Circle"), None);
        assert_eq!(GeometryType::from_name("point"), None);
    }

    #[test]
    fn tag_display() {
        let tag = GeometryTag::new(GeometryType::Polygon, Dimension::XYZM);
        assert_eq!(tag.to_string(), "Polygon ZM");
        let tag = GeometryTag::new(GeometryType::MultiPoint, Dimension::XY);
        assert_eq!(tag.to_string(), "MultiPoint");
    }
}
