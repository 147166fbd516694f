use crate::datatypes::Dimension;
use crate::scalar::MultiPoint;
use crate::test::point::{p0, p1, p2};

pub(crate) fn mp0() -> MultiPoint {
    MultiPoint::try_new(vec![p0(), p1(), p2()], Dimension::XY).unwrap()
}
