//! The capabilities shared by every geometry.

use crate::coord::Xy;
use crate::datatypes::{Dimension, GeometryTag, GeometryType};
use crate::envelope::{BoundingBox, Corner, Envelope, EnvelopeM, EnvelopeZ, EnvelopeZM};

/// Uniform operations implemented by every shape, in every flavor.
pub trait GeometryTrait: Clone {
    /// The flavor of this geometry.
    fn dimension(&self) -> Dimension;

    /// The shape of this geometry.
    fn geometry_type(&self) -> GeometryType;

    /// Shape and flavor together.
    fn tag(&self) -> GeometryTag {
        GeometryTag::new(self.geometry_type(), self.dimension())
    }

    /// The bounding box of this geometry over the axes of `C`.
    ///
    /// This does not check that the geometry actually carries those axes; use the
    /// `envelope_*` methods for that.
    fn bounding_box<C: Corner>(&self) -> BoundingBox<C>;

    /// Walk over the vertex chains of this geometry, exposing their X/Y values for in-place
    /// edits.
    ///
    /// `f` is called once per chain: once for a point, once for a line string, once per
    /// ring of a polygon, recursing into children in order. Values written to the slice
    /// are committed only when `f` returns `Ok`. The first error stops the walk and is
    /// returned; chains handled before it keep their edits.
    fn iterate<E, F>(&mut self, f: &mut F) -> Result<(), E>
    where
        F: FnMut(&mut [Xy]) -> Result<(), E>;

    /// The 2D envelope, ignoring Z and M.
    fn envelope(&self) -> Envelope {
        self.bounding_box()
    }

    /// The XYZ envelope, when this geometry carries Z.
    fn envelope_z(&self) -> Option<EnvelopeZ> {
        self.dimension().has_z().then(|| self.bounding_box())
    }

    /// The XYM envelope, when this geometry carries M.
    fn envelope_m(&self) -> Option<EnvelopeM> {
        self.dimension().has_m().then(|| self.bounding_box())
    }

    /// The XYZM envelope, when this geometry carries both Z and M.
    fn envelope_zm(&self) -> Option<EnvelopeZM> {
        (self.dimension() == Dimension::XYZM).then(|| self.bounding_box())
    }

    /// Every envelope this geometry supports, in one record.
    fn bounds(&self) -> Bounds {
        Bounds {
            xy: self.envelope(),
            z: self.envelope_z(),
            m: self.envelope_m(),
        }
    }
}

/// The envelopes of a geometry: always the 2D one, plus Z and M envelopes for flavors
/// carrying those axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub xy: Envelope,
    pub z: Option<EnvelopeZ>,
    pub m: Option<EnvelopeM>,
}

impl Bounds {
    pub fn dimension(&self) -> Dimension {
        Dimension::from_flags(self.z.is_some(), self.m.is_some())
    }

    /// The XYZM envelope, available when both Z and M are.
    pub fn zm(&self) -> Option<EnvelopeZM> {
        match (&self.z, &self.m) {
            (Some(z), Some(m)) => Some(EnvelopeZM::from_parts(z, m)),
            _ => None,
        }
    }
}
