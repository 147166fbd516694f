//! Axis-aligned bounding boxes.

use std::fmt::Debug;

use crate::coord::{Coord, Xy, Xym, Xyz, Xyzm};

/// A fixed-flavor point that can serve as the corner of a [BoundingBox].
pub trait Corner: Debug + Clone + Copy + PartialEq {
    /// Every axis at `+∞`; the minimum corner of an empty box.
    const INFINITY: Self;

    /// Every axis at `-∞`; the maximum corner of an empty box.
    const NEG_INFINITY: Self;

    /// Project a stored coordinate onto this corner's axes.
    fn from_coord(coord: &Coord) -> Self;

    fn component_min(self, other: Self) -> Self;

    fn component_max(self, other: Self) -> Self;

    /// Whether every axis of `self` is `<=` the same axis of `other`.
    fn le(&self, other: &Self) -> bool;
}

macro_rules! impl_corner {
    ($corner:ident, $($axis:ident),+) => {
        impl Corner for $corner {
            const INFINITY: Self = Self { $($axis: f64::INFINITY),+ };
            const NEG_INFINITY: Self = Self { $($axis: f64::NEG_INFINITY),+ };

            fn from_coord(coord: &Coord) -> Self {
                coord.into()
            }

            fn component_min(self, other: Self) -> Self {
                Self { $($axis: self.$axis.min(other.$axis)),+ }
            }

            fn component_max(self, other: Self) -> Self {
                Self { $($axis: self.$axis.max(other.$axis)),+ }
            }

            fn le(&self, other: &Self) -> bool {
                $(self.$axis <= other.$axis)&&+
            }
        }
    };
}

impl_corner!(Xy, x, y);
impl_corner!(Xyz, x, y, z);
impl_corner!(Xym, x, y, m);
impl_corner!(Xyzm, x, y, z, m);

/// A bounding box over the axes of the corner type `C`.
///
/// An empty box has `min = +∞` and `max = -∞` on every axis, which makes it the identity
/// element of [extend][BoundingBox::extend].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox<C: Corner> {
    pub min: C,
    pub max: C,
}

/// A two-dimensional envelope; Z and M are ignored.
pub type Envelope = BoundingBox<Xy>;

/// A three-dimensional envelope.
pub type EnvelopeZ = BoundingBox<Xyz>;

/// A two-dimensional envelope with a measure range.
pub type EnvelopeM = BoundingBox<Xym>;

/// A three-dimensional envelope with a measure range.
pub type EnvelopeZM = BoundingBox<Xyzm>;

impl<C: Corner> BoundingBox<C> {
    /// A new empty envelope.
    pub fn new_empty() -> Self {
        Self {
            min: C::INFINITY,
            max: C::NEG_INFINITY,
        }
    }

    /// An envelope containing a single point.
    pub fn from_point(point: C) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    pub fn from_coord(coord: &Coord) -> Self {
        Self::from_point(C::from_coord(coord))
    }

    /// Extend the envelope with the given point and return the modified envelope.
    pub fn extend_point(&mut self, point: C) -> &mut Self {
        self.min = self.min.component_min(point);
        self.max = self.max.component_max(point);
        self
    }

    pub fn extend_coord(&mut self, coord: &Coord) -> &mut Self {
        self.extend_point(C::from_coord(coord))
    }

    /// Extend the envelope with the given envelope and return the modified envelope.
    pub fn extend(&mut self, other: &Self) -> &mut Self {
        self.extend_point(other.min).extend_point(other.max)
    }

    /// Whether no point has been added yet.
    pub fn is_empty(&self) -> bool {
        !self.min.le(&self.max)
    }

    /// Whether `point` lies inside the envelope, boundary included.
    pub fn contains_point(&self, point: &C) -> bool {
        self.min.le(point) && point.le(&self.max)
    }
}

impl<C: Corner> Default for BoundingBox<C> {
    fn default() -> Self {
        Self::new_empty()
    }
}

impl EnvelopeZM {
    /// Combine a Z envelope and an M envelope computed over the same vertices.
    ///
    /// Each axis is bounded independently, so the pair carries exactly the information of
    /// an XYZM envelope.
    pub fn from_parts(z: &EnvelopeZ, m: &EnvelopeM) -> Self {
        Self {
            min: Xyzm {
                x: z.min.x,
                y: z.min.y,
                z: z.min.z,
                m: m.min.m,
            },
            max: Xyzm {
                x: z.max.x,
                y: z.max.y,
                z: z.max.z,
                m: m.max.m,
            },
        }
    }
}

impl<C: Corner> FromIterator<C> for BoundingBox<C> {
    fn from_iter<T: IntoIterator<Item = C>>(iter: T) -> Self {
        let mut bbox = Self::new_empty();
        for point in iter {
            bbox.extend_point(point);
        }
        bbox
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn env(min: (f64, f64), max: (f64, f64)) -> Envelope {
        Envelope {
            min: Xy::new(min.0, min.1),
            max: Xy::new(max.0, max.1),
        }
    }

    #[test]
    fn empty_is_identity() {
        let e = env((-1.0, 2.0), (3.0, 5.0));
        let mut empty = Envelope::new_empty();
        assert!(empty.is_empty());
        empty.extend(&e);
        assert_eq!(empty, e);

        let mut e2 = e;
        e2.extend(&Envelope::new_empty());
        assert_eq!(e2, e);
    }

    #[test]
    fn extend_is_idempotent() {
        let e = env((0.0, 0.0), (1.0, 1.0));
        let mut e2 = e;
        e2.extend(&e);
        assert_eq!(e2, e);
    }

    #[test]
    fn extend_is_associative() {
        let a = env((0.0, 4.0), (1.0, 6.0));
        let b = env((-3.0, 5.0), (0.5, 9.0));
        let c = env((2.0, -1.0), (2.5, 0.0));
        let empty = Envelope::new_empty();

        for (a, b, c) in [(a, b, c), (a, empty, c), (empty, b, c), (a, b, empty)] {
            let mut left = a;
            left.extend(&b).extend(&c);

            let mut bc = b;
            bc.extend(&c);
            let mut right = a;
            right.extend(&bc);

            assert_eq!(left, right);
        }
    }

    #[test]
    fn extend_is_commutative() {
        let a = env((0.0, 4.0), (1.0, 6.0));
        let b = env((-3.0, 5.0), (0.5, 9.0));

        let mut ab = a;
        ab.extend(&b);
        let mut ba = b;
        ba.extend(&a);
        assert_eq!(ab, ba);
        assert_eq!(ab, env((-3.0, 4.0), (1.0, 9.0)));
    }

    #[test]
    fn extend_point_is_chainable() {
        let mut e = Envelope::from_point(Xy::new(1.0, 1.0));
        assert_eq!(e.min, e.max);
        assert!(!e.is_empty());

        e.extend_point(Xy::new(-1.0, 3.0))
            .extend_point(Xy::new(2.0, 0.0));
        assert_eq!(e, env((-1.0, 0.0), (2.0, 3.0)));
        assert!(e.contains_point(&Xy::new(0.0, 1.5)));
        assert!(!e.contains_point(&Xy::new(0.0, 3.5)));
    }

    #[test]
    fn zm_from_parts() {
        let coords = [
            Coord::xyzm(0.0, 1.0, 2.0, 3.0),
            Coord::xyzm(-1.0, 5.0, -2.0, 10.0),
        ];
        let z: EnvelopeZ = coords.iter().map(Xyz::from).collect();
        let m: EnvelopeM = coords.iter().map(Xym::from).collect();
        let zm: EnvelopeZM = coords.iter().map(Xyzm::from).collect();
        assert_eq!(EnvelopeZM::from_parts(&z, &m), zm);
        assert_eq!(zm.min, Xyzm { x: -1.0, y: 1.0, z: -2.0, m: 3.0 });
        assert_eq!(zm.max, Xyzm { x: 0.0, y: 5.0, z: 2.0, m: 10.0 });
    }
}
