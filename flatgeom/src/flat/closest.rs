//! Nearest vertex search over flat buffers.

use serde::{Deserialize, Serialize};

use crate::error::FlatGeomError;

use super::vertices;

/// Running best result of a nearest vertex search.
///
/// A search over many geometries is a fold: start with [`ClosestPoint::new`] and pass the accumulator through
/// [`SimpleGeometry::closest_point_xy`](crate::SimpleGeometry::closest_point_xy) of every geometry. The point buffer
/// is reused between steps, so the fold does not allocate per geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClosestPoint {
    /// All components of the closest vertex found so far. Empty until a vertex is found.
    pub point: Vec<f64>,
    /// Squared planar distance from the query point to [`ClosestPoint::point`].
    pub squared_distance: f64,
}

impl ClosestPoint {
    /// Empty accumulator: no point, infinite distance.
    pub fn new() -> Self {
        Self {
            point: Vec::new(),
            squared_distance: f64::INFINITY,
        }
    }

    /// Accumulator with a known upper bound on the distance. Only vertices closer than `sqrt(squared_distance)`
    /// will be accepted.
    pub fn within(squared_distance: f64) -> Self {
        Self {
            point: Vec::new(),
            squared_distance,
        }
    }

    /// Whether any vertex has been accepted.
    pub fn is_found(&self) -> bool {
        !self.point.is_empty()
    }

    /// Planar distance to the closest point.
    pub fn distance(&self) -> f64 {
        self.squared_distance.sqrt()
    }

    /// Accepts `vertex` if it is strictly closer than the current best.
    pub(crate) fn offer(&mut self, vertex: &[f64], squared_distance: f64) {
        if squared_distance < self.squared_distance {
            self.squared_distance = squared_distance;
            self.point.clear();
            self.point.extend_from_slice(vertex);
        }
    }
}

impl Default for ClosestPoint {
    fn default() -> Self {
        Self::new()
    }
}

/// Squared planar distance between `(x1, y1)` and `(x2, y2)`.
pub fn squared_distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let dx = x2 - x1;
    let dy = y2 - y1;
    dx * dx + dy * dy
}

/// Scans every vertex of the flat buffer and returns the accumulator updated with the vertex closest to `(x, y)`.
///
/// Only the first two components of a vertex are used for the distance, but the whole vertex is stored in the
/// result. No pruning by extent is done here.
pub fn assign_closest_vertex(
    flat_coordinates: &[f64],
    stride: usize,
    x: f64,
    y: f64,
    closest: ClosestPoint,
) -> Result<ClosestPoint, FlatGeomError> {
    Ok(closest_vertex_of(vertices(flat_coordinates, stride)?, x, y, closest))
}

pub(crate) fn closest_vertex_of<'a>(
    vertices: impl Iterator<Item = &'a [f64]>,
    x: f64,
    y: f64,
    mut closest: ClosestPoint,
) -> ClosestPoint {
    for vertex in vertices {
        closest.offer(vertex, squared_distance(x, y, vertex[0], vertex[1]));
    }

    closest
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn finds_nearest_vertex() {
        let flat = [0.0, 0.0, 3.0, 4.0];
        let closest = assign_closest_vertex(&flat, 2, 1.0, 1.0, ClosestPoint::new()).expect("scan");
        assert_eq!(closest.squared_distance, 2.0);
        assert_eq!(closest.point, vec![0.0, 0.0]);
        assert!(closest.is_found());
    }

    #[test]
    fn keeps_all_vertex_components() {
        let flat = [0.0, 0.0, 10.0, 100.0, 5.0, 5.0, 20.0, 200.0];
        let closest = assign_closest_vertex(&flat, 4, 4.0, 4.0, ClosestPoint::new()).expect("scan");
        assert_eq!(closest.point, vec![5.0, 5.0, 20.0, 200.0]);
    }

    #[test]
    fn resizes_previous_best_to_stride() {
        let previous = ClosestPoint {
            point: vec![9.0, 9.0, 9.0, 9.0],
            squared_distance: 100.0,
        };
        let closest = assign_closest_vertex(&[1.0, 1.0], 2, 0.0, 0.0, previous).expect("scan");
        assert_eq!(closest.point, vec![1.0, 1.0]);
    }

    #[test]
    fn does_not_replace_better_result() {
        let previous = ClosestPoint {
            point: vec![0.5, 0.5],
            squared_distance: 0.5,
        };
        let closest =
            assign_closest_vertex(&[3.0, 4.0], 2, 0.0, 0.0, previous.clone()).expect("scan");
        assert_eq!(closest, previous);
    }

    #[test]
    fn bounded_search_accepts_only_closer_points() {
        let closest = assign_closest_vertex(&[3.0, 4.0], 2, 0.0, 0.0, ClosestPoint::within(25.0))
            .expect("scan");
        assert!(!closest.is_found());

        let closest = assign_closest_vertex(&[3.0, 4.0], 2, 0.0, 0.0, ClosestPoint::within(26.0))
            .expect("scan");
        assert_eq!(closest.distance(), 5.0);
    }

    #[test]
    fn malformed_buffer_is_rejected() {
        assert_matches!(
            assign_closest_vertex(&[1.0, 2.0, 3.0], 2, 0.0, 0.0, ClosestPoint::new()),
            Err(FlatGeomError::MalformedBuffer { len: 3, stride: 2 })
        );
    }

    #[test]
    fn single_component_stride_is_rejected() {
        assert_matches!(
            assign_closest_vertex(&[1.0, 2.0], 1, 0.0, 0.0, ClosestPoint::new()),
            Err(FlatGeomError::MalformedBuffer { len: 2, stride: 1 })
        );
    }
}
