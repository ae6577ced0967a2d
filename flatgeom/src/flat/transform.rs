//! In-place transformations of flat buffers.
//!
//! Only `X` and `Y` components are changed. `Z` and `M` values are kept as they are.

use nalgebra::{Point2, Rotation2, Vector2};

use crate::error::FlatGeomError;

use super::check_stride;

/// Moves every vertex by `(dx, dy)`.
pub fn translate(
    flat_coordinates: &mut [f64],
    stride: usize,
    dx: f64,
    dy: f64,
) -> Result<(), FlatGeomError> {
    check_stride(flat_coordinates.len(), stride)?;
    translate_vertices(flat_coordinates.chunks_exact_mut(stride), dx, dy);
    Ok(())
}

/// Scales every vertex by `sx` along `X` and `sy` along `Y` relative to `anchor`.
pub fn scale(
    flat_coordinates: &mut [f64],
    stride: usize,
    sx: f64,
    sy: f64,
    anchor: Point2<f64>,
) -> Result<(), FlatGeomError> {
    check_stride(flat_coordinates.len(), stride)?;
    scale_vertices(flat_coordinates.chunks_exact_mut(stride), sx, sy, anchor);
    Ok(())
}

/// Rotates every vertex by `angle` radians counter-clockwise around `anchor`.
pub fn rotate(
    flat_coordinates: &mut [f64],
    stride: usize,
    angle: f64,
    anchor: Point2<f64>,
) -> Result<(), FlatGeomError> {
    check_stride(flat_coordinates.len(), stride)?;
    rotate_vertices(flat_coordinates.chunks_exact_mut(stride), angle, anchor);
    Ok(())
}

pub(crate) fn translate_vertices<'a>(
    vertices: impl Iterator<Item = &'a mut [f64]>,
    dx: f64,
    dy: f64,
) {
    for vertex in vertices {
        vertex[0] += dx;
        vertex[1] += dy;
    }
}

pub(crate) fn scale_vertices<'a>(
    vertices: impl Iterator<Item = &'a mut [f64]>,
    sx: f64,
    sy: f64,
    anchor: Point2<f64>,
) {
    for vertex in vertices {
        vertex[0] = anchor.x + sx * (vertex[0] - anchor.x);
        vertex[1] = anchor.y + sy * (vertex[1] - anchor.y);
    }
}

pub(crate) fn rotate_vertices<'a>(
    vertices: impl Iterator<Item = &'a mut [f64]>,
    angle: f64,
    anchor: Point2<f64>,
) {
    let rotation = Rotation2::new(angle);
    for vertex in vertices {
        let rotated = anchor + rotation * Vector2::new(vertex[0] - anchor.x, vertex[1] - anchor.y);
        vertex[0] = rotated.x;
        vertex[1] = rotated.y;
    }
}
