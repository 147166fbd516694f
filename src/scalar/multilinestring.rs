use crate::coord::Xy;
use crate::datatypes::{Dimension, GeometryType};
use crate::envelope::{BoundingBox, Corner};
use crate::error::Result;
use crate::scalar::{bounding_box_of, check_children, LineString};
use crate::trait_::GeometryTrait;

/// A collection of line strings sharing one flavor.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiLineString {
    lines: Vec<LineString>,
    dim: Dimension,
}

impl MultiLineString {
    /// Create a multi line string of flavor `dim`, failing if any line has another flavor.
    pub fn try_new(lines: Vec<LineString>, dim: Dimension) -> Result<Self> {
        check_children(&lines, GeometryType::LineString, dim)?;
        Ok(Self { lines, dim })
    }

    pub fn empty(dim: Dimension) -> Self {
        Self { lines: vec![], dim }
    }

    pub fn lines(&self) -> &[LineString] {
        &self.lines
    }

    pub fn num_lines(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn into_inner(self) -> Vec<LineString> {
        self.lines
    }
}

impl GeometryTrait for MultiLineString {
    fn dimension(&self) -> Dimension {
        self.dim
    }

    fn geometry_type(&self) -> GeometryType {
        GeometryType::MultiLineString
    }

    fn bounding_box<C: Corner>(&self) -> BoundingBox<C> {
        bounding_box_of(&self.lines)
    }

    fn iterate<E, F>(&mut self, f: &mut F) -> std::result::Result<(), E>
    where
        F: FnMut(&mut [Xy]) -> std::result::Result<(), E>,
    {
        for line in self.lines.iter_mut() {
            line.iterate(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::coord::Xym;
    use crate::test::multilinestring::{ml0, ml_m};

    #[test]
    fn envelope_m() {
        let multi_line = ml_m();
        let env = multi_line.envelope_m().unwrap();
        assert_eq!(env.min, Xym { x: 0.0, y: 0.0, m: 1.0 });
        assert_eq!(env.max, Xym { x: 5.0, y: 4.0, m: 9.0 });
        assert!(multi_line.envelope_z().is_none());
        assert_eq!(multi_line.bounds().dimension(), Dimension::XYM);
    }

    #[test]
    fn iterate_counts_preserved() {
        let mut multi_line = ml0();
        multi_line
            .iterate(&mut |coords: &mut [Xy]| -> std::result::Result<(), ()> {
                coords.reverse();
                Ok(())
            })
            .unwrap();
        assert_eq!(multi_line.num_lines(), ml0().num_lines());
        for (edited, original) in multi_line.lines().iter().zip(ml0().lines()) {
            assert_eq!(edited.num_coords(), original.num_coords());
            assert_eq!(edited.coords().first(), original.coords().last());
        }
    }
}
