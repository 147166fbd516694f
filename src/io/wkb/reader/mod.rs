//! Decoding WKB records into owned [Geometry][crate::scalar::Geometry] values.

mod geometry;
mod linestring;
mod multi;
mod point;
mod polygon;

pub(crate) use geometry::read_geometry;

/// The number of coordinates decoded per bulk read, which also caps how much is
/// allocated up front for a declared count.
pub(crate) const COORD_CHUNK: usize = 4096;

/// Options for decoding WKB.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WKBReaderOptions {
    /// How many levels of Multi* or GeometryCollection records may be nested below the
    /// top-level record.
    pub max_depth: usize,
}

impl Default for WKBReaderOptions {
    fn default() -> Self {
        Self { max_depth: 64 }
    }
}

/// A capacity hint for a declared element count that never trusts more than one chunk.
pub(crate) fn capacity_hint(count: u32) -> usize {
    (count as usize).min(COORD_CHUNK)
}
