//! Axis-aligned bounding regions.

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use crate::cartesian_point::CartesianPoint2d;
use crate::error::FlatGeomError;
use crate::flat;

/// Axis-aligned bounding box `[min_x, min_y, max_x, max_y]`.
///
/// An extent that covers nothing is represented by [`Extent::empty`]. It has infinite minimums and negative
/// infinite maximums, so extending it with any point gives the extent of that point, and it contains no point.
///
/// Serialized as `[min_x, min_y, max_x, max_y]`, or as `null` for an empty extent.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Option<[f64; 4]>", into = "Option<[f64; 4]>")]
pub struct Extent {
    /// Minimum x.
    pub min_x: f64,
    /// Minimum y.
    pub min_y: f64,
    /// Maximum x.
    pub max_x: f64,
    /// Maximum y.
    pub max_y: f64,
}

impl Extent {
    /// Creates a new extent from its bounds.
    pub const fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Extent that contains nothing.
    pub const fn empty() -> Self {
        Self::new(
            f64::INFINITY,
            f64::INFINITY,
            f64::NEG_INFINITY,
            f64::NEG_INFINITY,
        )
    }

    /// Extent of a single point.
    pub fn from_point(point: &impl CartesianPoint2d) -> Self {
        Self::new(point.x(), point.y(), point.x(), point.y())
    }

    /// Extent of the vertices stored in `flat_coordinates[offset..end]`.
    pub fn from_flat_coordinates(
        flat_coordinates: &[f64],
        offset: usize,
        end: usize,
        stride: usize,
    ) -> Result<Self, FlatGeomError> {
        flat::check_range(flat_coordinates, offset, end)?;
        let vertices = flat::vertices(&flat_coordinates[offset..end], stride)?;
        Ok(Self::from_vertices(vertices))
    }

    pub(crate) fn from_vertices<'a>(vertices: impl Iterator<Item = &'a [f64]>) -> Self {
        let mut extent = Self::empty();
        for vertex in vertices {
            extent.extend_xy(vertex[0], vertex[1]);
        }

        extent
    }

    /// Whether the extent covers nothing.
    pub fn is_empty(&self) -> bool {
        self.max_x < self.min_x || self.max_y < self.min_y
    }

    /// Grows the extent to include `(x, y)`.
    pub fn extend_xy(&mut self, x: f64, y: f64) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    /// Grows the extent to include the `other` extent.
    pub fn extend(&mut self, other: &Extent) {
        if other.is_empty() {
            return;
        }

        self.min_x = self.min_x.min(other.min_x);
        self.min_y = self.min_y.min(other.min_y);
        self.max_x = self.max_x.max(other.max_x);
        self.max_y = self.max_y.max(other.max_y);
    }

    /// Smallest extent containing both extents.
    pub fn merge(&self, other: &Extent) -> Self {
        let mut merged = *self;
        merged.extend(other);
        merged
    }

    /// Whether `(x, y)` is inside the extent or on its boundary.
    pub fn contains_xy(&self, x: f64, y: f64) -> bool {
        self.min_x <= x && x <= self.max_x && self.min_y <= y && y <= self.max_y
    }

    /// Same as [`Extent::contains_xy`] for any point type.
    pub fn contains_point(&self, point: &impl CartesianPoint2d) -> bool {
        self.contains_xy(point.x(), point.y())
    }

    /// Whether the `other` extent lies completely inside this one. An empty extent is contained in any non-empty
    /// extent.
    pub fn contains_extent(&self, other: &Extent) -> bool {
        if self.is_empty() {
            return false;
        }

        other.is_empty()
            || (self.min_x <= other.min_x
                && other.max_x <= self.max_x
                && self.min_y <= other.min_y
                && other.max_y <= self.max_y)
    }

    /// Whether the extents share at least one point. Touching edges count as an intersection.
    pub fn intersects(&self, other: &Extent) -> bool {
        self.min_x <= other.max_x
            && self.max_x >= other.min_x
            && self.min_y <= other.max_y
            && self.max_y >= other.min_y
    }

    /// Squared distance from `(x, y)` to the closest point of the extent.
    ///
    /// Returns `0` for points inside the extent or on its boundary and `+∞` for an empty extent. No vertex of a
    /// geometry can be closer to the point than this value, which makes it a cheap lower bound for nearest vertex
    /// searches.
    pub fn closest_squared_distance_xy(&self, x: f64, y: f64) -> f64 {
        let dx = if x < self.min_x {
            self.min_x - x
        } else if self.max_x < x {
            x - self.max_x
        } else {
            0.0
        };
        let dy = if y < self.min_y {
            self.min_y - y
        } else if self.max_y < y {
            y - self.max_y
        } else {
            0.0
        };

        dx * dx + dy * dy
    }

    /// Width of the extent.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Height of the extent.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Center point of the extent.
    pub fn center(&self) -> Point2<f64> {
        Point2::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }
}

impl Default for Extent {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<[f64; 4]> for Extent {
    fn from([min_x, min_y, max_x, max_y]: [f64; 4]) -> Self {
        Self::new(min_x, min_y, max_x, max_y)
    }
}

impl From<Extent> for [f64; 4] {
    fn from(extent: Extent) -> Self {
        [extent.min_x, extent.min_y, extent.max_x, extent.max_y]
    }
}

impl From<Option<[f64; 4]>> for Extent {
    fn from(bounds: Option<[f64; 4]>) -> Self {
        bounds.map_or_else(Self::empty, Self::from)
    }
}

impl From<Extent> for Option<[f64; 4]> {
    fn from(extent: Extent) -> Self {
        (!extent.is_empty()).then(|| <[f64; 4]>::from(extent))
    }
}

impl FromIterator<Extent> for Extent {
    fn from_iter<T: IntoIterator<Item = Extent>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Extent::empty(), |acc, extent| acc.merge(&extent))
    }
}
