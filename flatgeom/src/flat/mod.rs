//! Algorithms over flat coordinate buffers.
//!
//! A flat buffer stores the vertices of a geometry one after another in a single `[f64]` slice. Every vertex takes
//! exactly `stride` values (see [`GeometryLayout::stride`](crate::GeometryLayout::stride)), so the functions in this
//! module walk the buffer with a fixed step instead of descending into nested coordinate arrays.
//!
//! All public functions validate that the processed part of the buffer can be split into whole vertices and return
//! [`FlatGeomError::MalformedBuffer`] otherwise.

use std::slice::ChunksExact;

use crate::error::FlatGeomError;

pub mod closest;
pub mod deflate;
pub mod inflate;
pub mod transform;

pub use closest::{assign_closest_vertex, squared_distance, ClosestPoint};
pub use deflate::{deflate_coordinate, deflate_coordinates, deflate_coordinates_array};
pub use inflate::{inflate_coordinates, inflate_coordinates_array};

/// Minimal number of components of a vertex: `X` and `Y`.
pub const MIN_STRIDE: usize = 2;

/// Checks that a buffer part of length `len` consists of whole vertices of the given `stride`.
///
/// Strides below [`MIN_STRIDE`] are rejected, since every vertex starts with `X` and `Y`.
pub fn check_stride(len: usize, stride: usize) -> Result<(), FlatGeomError> {
    if stride < MIN_STRIDE || len % stride != 0 {
        Err(FlatGeomError::MalformedBuffer { len, stride })
    } else {
        Ok(())
    }
}

/// Number of vertices in the flat buffer.
pub fn vertex_count(flat_coordinates: &[f64], stride: usize) -> Result<usize, FlatGeomError> {
    check_stride(flat_coordinates.len(), stride)?;
    Ok(flat_coordinates.len() / stride)
}

/// Iterates over the vertices of the flat buffer. Each item is a `stride`-long slice.
pub fn vertices(
    flat_coordinates: &[f64],
    stride: usize,
) -> Result<ChunksExact<'_, f64>, FlatGeomError> {
    check_stride(flat_coordinates.len(), stride)?;
    Ok(flat_coordinates.chunks_exact(stride))
}

pub(crate) fn check_range(
    flat_coordinates: &[f64],
    offset: usize,
    end: usize,
) -> Result<(), FlatGeomError> {
    let len = flat_coordinates.len();
    if end > len {
        return Err(FlatGeomError::OffsetOutOfBounds { offset: end, len });
    }
    if offset > end {
        return Err(FlatGeomError::OffsetOutOfBounds {
            offset,
            len: end,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn vertex_count_checks_stride() {
        let flat = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        assert_eq!(vertex_count(&flat, 2), Ok(3));
        assert_eq!(vertex_count(&flat, 3), Ok(2));
        assert_matches!(
            vertex_count(&flat, 4),
            Err(FlatGeomError::MalformedBuffer { len: 6, stride: 4 })
        );
        assert_matches!(
            vertex_count(&flat, 0),
            Err(FlatGeomError::MalformedBuffer { stride: 0, .. })
        );
        assert_eq!(vertex_count(&[], 3), Ok(0));
    }

    #[test]
    fn stride_must_hold_x_and_y() {
        assert_matches!(
            check_stride(2, 1),
            Err(FlatGeomError::MalformedBuffer { len: 2, stride: 1 })
        );
        assert_matches!(
            vertices(&[1.0, 2.0], 1),
            Err(FlatGeomError::MalformedBuffer { stride: 1, .. })
        );
        assert_eq!(check_stride(4, MIN_STRIDE), Ok(()));
    }

    #[test]
    fn vertices_are_stride_windows() {
        let flat = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let windows: Vec<&[f64]> = vertices(&flat, 3).expect("valid buffer").collect();
        assert_eq!(windows, vec![&[1.0, 2.0, 3.0][..], &[4.0, 5.0, 6.0][..]]);
    }
}
