//! Conversion of flat buffers back into structured coordinates.

use crate::error::FlatGeomError;

use super::{check_range, check_stride};

/// Splits `flat_coordinates[offset..end]` into `stride`-long coordinate tuples.
///
/// Fails with [`FlatGeomError::MalformedBuffer`] if the range cannot be split into whole vertices. The stride alone
/// determines the grouping, so the same buffer can be read with different strides.
///
/// ```
/// use flatgeom::flat::inflate_coordinates;
///
/// let flat = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
/// assert_eq!(
///     inflate_coordinates(&flat, 0, flat.len(), 3).unwrap(),
///     vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]
/// );
/// ```
pub fn inflate_coordinates(
    flat_coordinates: &[f64],
    offset: usize,
    end: usize,
    stride: usize,
) -> Result<Vec<Vec<f64>>, FlatGeomError> {
    check_range(flat_coordinates, offset, end)?;
    check_stride(end - offset, stride)?;

    Ok(flat_coordinates[offset..end]
        .chunks_exact(stride)
        .map(<[f64]>::to_vec)
        .collect())
}

/// Splits a flat buffer holding several coordinate sequences back into the sequences.
///
/// `ends` are the end offsets of the sequences as returned by
/// [`deflate_coordinates_array`](super::deflate_coordinates_array). The first sequence starts at `offset`.
pub fn inflate_coordinates_array(
    flat_coordinates: &[f64],
    offset: usize,
    ends: &[usize],
    stride: usize,
) -> Result<Vec<Vec<Vec<f64>>>, FlatGeomError> {
    let mut start = offset;
    ends.iter()
        .map(|&end| {
            let sequence = inflate_coordinates(flat_coordinates, start, end, stride)?;
            start = end;
            Ok(sequence)
        })
        .collect()
}
