use crate::coord::Coord;
use crate::datatypes::Dimension;
use crate::scalar::LineString;

pub(crate) fn ls0() -> LineString {
    LineString::new(
        vec![Coord::new(0., 1.), Coord::new(1., 2.)],
        Dimension::XY,
    )
}

pub(crate) fn ls1() -> LineString {
    LineString::new(
        vec![Coord::new(3., 4.), Coord::new(5., 6.), Coord::new(-1., 0.5)],
        Dimension::XY,
    )
}

pub(crate) fn ls_zm() -> LineString {
    LineString::new(
        vec![
            Coord::xyzm(0., 1., 2., 10.),
            Coord::xyzm(4., -1., -1.5, 30.),
            Coord::xyzm(2., 3., 0., 20.),
        ],
        Dimension::XYZM,
    )
}
