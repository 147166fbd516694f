//! Defines [`GeomError`], representing all errors returned by this crate.

use std::fmt::Debug;

use thiserror::Error;

use crate::datatypes::GeometryTag;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GeomError {
    /// The WKB byte-order flag was neither `0x00` nor `0x01`.
    #[error("Invalid WKB byte order. Expecting 0 or 1, got {0}")]
    InvalidByteOrder(u8),

    /// The WKB type code does not flatten to a known shape.
    #[error("Unsupported WKB geometry type: {0}")]
    UnknownGeometryType(u32),

    /// Collections nested deeper than the reader allows.
    #[error("WKB nesting exceeds the maximum depth of {0}")]
    NestingTooDeep(usize),

    /// A child geometry's shape or flavor differs from what its parent declared.
    #[error("Unexpected child geometry: expected {expected}, got {actual}")]
    ShapeMismatch {
        expected: GeometryTag,
        actual: GeometryTag,
    },

    /// A GeoJSON position with a number of values other than 2, 3 or 4.
    #[error("Unsupported coordinate dimension: {0}")]
    UnsupportedDimension(usize),

    /// A geometry type name that is not one of the seven known shapes.
    #[error("Unsupported geometry type: {0}")]
    UnsupportedType(String),

    /// Whenever a count does not fit in the 32 bits WKB reserves for it.
    #[error("Overflow")]
    Overflow,

    /// [std::io::Error]; a truncated stream surfaces as [std::io::ErrorKind::UnexpectedEof].
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    /// [serde_json::Error]
    #[cfg(feature = "geojson")]
    #[error(transparent)]
    SerdeJsonError(#[from] serde_json::Error),

    /// [geojson::Error]
    #[cfg(feature = "geojson")]
    #[error(transparent)]
    GeoJsonError(#[from] geojson::Error),
}

/// The broad category of a [GeomError].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed input: bad byte order, unknown type code, truncated stream, invalid
    /// document.
    Structural,
    /// A decoded child does not match its parent's declared shape or flavor.
    ShapeMismatch,
    /// A textual coordinate array has an unsupported length.
    UnsupportedDimension,
    /// An unrecognized shape type name.
    UnsupportedType,
}

impl GeomError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GeomError::ShapeMismatch { .. } => ErrorKind::ShapeMismatch,
            GeomError::UnsupportedDimension(_) => ErrorKind::UnsupportedDimension,
            GeomError::UnsupportedType(_) => ErrorKind::UnsupportedType,
            _ => ErrorKind::Structural,
        }
    }

    /// Whether this error was caused by the input ending early.
    pub fn is_truncated(&self) -> bool {
        matches!(self, GeomError::IOError(err) if err.kind() == std::io::ErrorKind::UnexpectedEof)
    }
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, GeomError>;
