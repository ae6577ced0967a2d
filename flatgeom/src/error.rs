//! Error type used by the crate.

use thiserror::Error;

use crate::layout::GeometryLayout;

/// Error enum.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FlatGeomError {
    /// Vertex layout cannot be determined from the number of coordinate components, or a vertex has fewer
    /// components than the layout requires.
    #[error("cannot build a vertex layout from {components} coordinate components")]
    InvalidLayout {
        /// Number of components the vertex actually has.
        components: usize,
    },
    /// Layout tag is not one of `XY`, `XYZ`, `XYM`, `XYZM`.
    #[error("unknown geometry layout: {0}")]
    UnknownLayout(String),
    /// Length of a flat buffer is not a multiple of the stride.
    #[error("flat buffer of length {len} cannot be split into vertices of stride {stride}")]
    MalformedBuffer {
        /// Length of the buffer (or the part of it being processed).
        len: usize,
        /// Stride the buffer was processed with.
        stride: usize,
    },
    /// Offset or end position lies outside of the flat buffer.
    #[error("offset {offset} is out of bounds of flat buffer of length {len}")]
    OffsetOutOfBounds {
        /// Requested offset.
        offset: usize,
        /// Length of the buffer.
        len: usize,
    },
    /// Two geometries with different layouts cannot share one flat buffer.
    #[error("expected geometry with layout {expected}, got {actual}")]
    LayoutMismatch {
        /// Layout of the receiving geometry.
        expected: GeometryLayout,
        /// Layout of the geometry being added.
        actual: GeometryLayout,
    },
    /// Geometry conversion error.
    #[error("invalid input geometry: {0}")]
    Conversion(String),
}
