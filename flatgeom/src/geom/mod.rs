//! Geometries backed by flat coordinate buffers.
//!
//! Every geometry owns exactly one flat buffer (see [`flat`](crate::flat)) and the [`GeometryLayout`] describing it.
//! Spatial queries read the buffer directly with a fixed stride. Structured coordinates are only produced on request
//! and are always owned copies of the buffer data.

use std::fmt::{Display, Formatter};
use std::slice::ChunksExact;

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use crate::cartesian_point::CartesianPoint2d;
use crate::extent::Extent;
use crate::flat::closest::{closest_vertex_of, ClosestPoint};
use crate::layout::GeometryLayout;

mod multi_point;
mod point;
pub(crate) mod store;

pub use multi_point::MultiPoint;
pub use point::Point;

/// Kind of a geometry.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeometryType {
    /// A single vertex.
    Point,
    /// Any number of unconnected vertices.
    MultiPoint,
}

impl Display for GeometryType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Point => f.write_str("Point"),
            Self::MultiPoint => f.write_str("MultiPoint"),
        }
    }
}

/// Common behaviour of the geometries stored in a single flat buffer.
///
/// Only the buffer accessors and mutations have to be implemented; the queries work for any geometry on top of them.
pub trait SimpleGeometry {
    /// Kind of the geometry.
    fn geometry_type(&self) -> GeometryType;

    /// Layout of the vertices.
    fn layout(&self) -> GeometryLayout;

    /// The flat buffer of the geometry.
    fn flat_coordinates(&self) -> &[f64];

    /// Bounding box of all vertices. Empty for a geometry without vertices.
    ///
    /// The value is cached and recalculated only after the geometry is changed.
    fn extent(&self) -> Extent;

    /// Counter incremented on every change of the geometry.
    fn revision(&self) -> u64;

    /// Moves the geometry by `(dx, dy)`.
    fn translate(&mut self, dx: f64, dy: f64);

    /// Scales the geometry relative to `anchor`, or to the center of its extent when no anchor is given.
    fn scale(&mut self, sx: f64, sy: f64, anchor: Option<Point2<f64>>);

    /// Rotates the geometry by `angle` radians counter-clockwise around `anchor`.
    fn rotate(&mut self, angle: f64, anchor: Point2<f64>);

    /// Number of components per vertex.
    fn stride(&self) -> usize {
        self.layout().stride()
    }

    /// Iterates over the vertices as `stride`-long slices of the buffer.
    fn vertices(&self) -> ChunksExact<'_, f64> {
        self.flat_coordinates().chunks_exact(self.stride())
    }

    /// Number of vertices.
    fn vertex_count(&self) -> usize {
        self.flat_coordinates().len() / self.stride()
    }

    /// Whether the geometry has no vertices.
    fn is_empty(&self) -> bool {
        self.flat_coordinates().is_empty()
    }

    /// Copy of the first vertex.
    fn first_coordinate(&self) -> Option<Vec<f64>> {
        self.vertices().next().map(<[f64]>::to_vec)
    }

    /// Copy of the last vertex.
    fn last_coordinate(&self) -> Option<Vec<f64>> {
        self.vertices().next_back().map(<[f64]>::to_vec)
    }

    /// Whether any vertex of the geometry lies inside `extent`.
    ///
    /// The extent of the geometry itself is not checked first; filter by extents beforehand if needed.
    fn intersects_extent(&self, extent: &Extent) -> bool {
        self.vertices()
            .any(|vertex| extent.contains_xy(vertex[0], vertex[1]))
    }

    /// Looks for a vertex closer to `(x, y)` than the one already in `closest`.
    ///
    /// If the extent of the geometry is not closer to the point than the current best, the vertices are not scanned
    /// at all and `closest` is returned as is. Otherwise the returned accumulator holds the closest of the previous
    /// best and all the vertices of this geometry.
    fn closest_point_xy(&self, x: f64, y: f64, closest: ClosestPoint) -> ClosestPoint {
        let bound = self.extent().closest_squared_distance_xy(x, y);
        if bound >= closest.squared_distance {
            log::trace!(
                "Skipping {} with distance bound {bound}, current best is {}",
                self.geometry_type(),
                closest.squared_distance
            );
            return closest;
        }

        closest_vertex_of(self.vertices(), x, y, closest)
    }

    /// Vertex of the geometry closest to the `point`.
    fn closest_point(&self, point: &impl CartesianPoint2d) -> ClosestPoint
    where
        Self: Sized,
    {
        self.closest_point_xy(point.x(), point.y(), ClosestPoint::new())
    }
}

/// Finds the vertex closest to `(x, y)` among all the `geometries`.
///
/// Geometries whose extent is farther than the best vertex found so far are skipped without scanning.
pub fn closest_in<'a, G>(geometries: impl IntoIterator<Item = &'a G>, x: f64, y: f64) -> ClosestPoint
where
    G: SimpleGeometry + ?Sized + 'a,
{
    geometries
        .into_iter()
        .fold(ClosestPoint::new(), |closest, geometry| {
            geometry.closest_point_xy(x, y, closest)
        })
}

/// Serialized form of a geometry: the layout and the flat buffer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryRecord {
    /// Vertex layout.
    pub layout: GeometryLayout,
    /// Flat buffer.
    pub flat_coordinates: Vec<f64>,
}
