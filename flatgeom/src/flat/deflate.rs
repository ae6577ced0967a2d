//! Conversion of structured coordinates into flat buffers.

use crate::error::FlatGeomError;

use super::check_stride;

/// Writes one vertex into `flat_coordinates` at `offset` and returns the offset after the written vertex.
///
/// The buffer is truncated at `offset` before writing, so any data after it is discarded.
pub fn deflate_coordinate(
    flat_coordinates: &mut Vec<f64>,
    offset: usize,
    coordinate: &[f64],
    stride: usize,
) -> Result<usize, FlatGeomError> {
    deflate_coordinates(flat_coordinates, offset, &[coordinate], stride)
}

/// Writes the `coordinates` into `flat_coordinates` starting at `offset`.
///
/// Exactly `stride` components of every coordinate are copied, in order. Extra components of a coordinate are
/// ignored, and a coordinate with fewer than `stride` components fails with [`FlatGeomError::InvalidLayout`]. The
/// buffer is resized to end right after the last written component. Nothing is written when an error is returned.
///
/// Returns the end offset, `offset + coordinates.len() * stride`, so that several geometries can be written into one
/// shared buffer one after another.
///
/// ```
/// use flatgeom::flat::deflate_coordinates;
///
/// let mut flat = vec![];
/// let end = deflate_coordinates(&mut flat, 0, &[[0.0, 0.0], [3.0, 4.0]], 2).unwrap();
/// assert_eq!(end, 4);
/// assert_eq!(flat, vec![0.0, 0.0, 3.0, 4.0]);
/// ```
pub fn deflate_coordinates<C: AsRef<[f64]>>(
    flat_coordinates: &mut Vec<f64>,
    offset: usize,
    coordinates: &[C],
    stride: usize,
) -> Result<usize, FlatGeomError> {
    check_stride(0, stride)?;
    if offset > flat_coordinates.len() {
        return Err(FlatGeomError::OffsetOutOfBounds {
            offset,
            len: flat_coordinates.len(),
        });
    }

    if let Some(short) = coordinates
        .iter()
        .map(AsRef::as_ref)
        .find(|coordinate| coordinate.len() < stride)
    {
        return Err(FlatGeomError::InvalidLayout {
            components: short.len(),
        });
    }

    flat_coordinates.truncate(offset);
    flat_coordinates.reserve(coordinates.len() * stride);
    for coordinate in coordinates {
        flat_coordinates.extend_from_slice(&coordinate.as_ref()[..stride]);
    }

    Ok(flat_coordinates.len())
}

/// Writes an array of coordinate sequences (e.g. rings of a polygon) into `flat_coordinates` starting at `offset`.
///
/// Returns the end offset of every sequence. A sequence ends where the next one starts, so the last element of the
/// result is the end of the written data. Empty sequences produce repeated end offsets.
pub fn deflate_coordinates_array<S, C>(
    flat_coordinates: &mut Vec<f64>,
    offset: usize,
    sequences: &[S],
    stride: usize,
) -> Result<Vec<usize>, FlatGeomError>
where
    S: AsRef<[C]>,
    C: AsRef<[f64]>,
{
    let original_len = flat_coordinates.len();
    let mut ends = Vec::with_capacity(sequences.len());
    let mut end = offset;
    for sequence in sequences {
        match deflate_coordinates(flat_coordinates, end, sequence.as_ref(), stride) {
            Ok(sequence_end) => {
                end = sequence_end;
                ends.push(end);
            }
            Err(err) => {
                // Sequences written before the failure are dropped, the caller's data before `offset` is kept.
                flat_coordinates.truncate(offset.min(original_len));
                return Err(err);
            }
        }
    }

    if sequences.is_empty() {
        check_stride(0, stride)?;
        if offset > flat_coordinates.len() {
            return Err(FlatGeomError::OffsetOutOfBounds {
                offset,
                len: flat_coordinates.len(),
            });
        }
        flat_coordinates.truncate(offset);
    }

    Ok(ends)
}
