//! Planar point abstraction used by the query API.

use nalgebra::{Point2, Vector2};

/// A point in 2d cartesian coordinates.
///
/// Queries like [`Extent::contains_point`](crate::Extent::contains_point) and
/// [`SimpleGeometry::closest_point`](crate::SimpleGeometry::closest_point) accept any type implementing this trait,
/// so callers don't have to build a geometry just to ask a question about a location.
pub trait CartesianPoint2d {
    /// X coordinate.
    fn x(&self) -> f64;
    /// Y coordinate.
    fn y(&self) -> f64;

    /// Vector from `other` to this point.
    fn sub(&self, other: &impl CartesianPoint2d) -> Vector2<f64>
    where
        Self: Sized,
    {
        Vector2::new(self.x() - other.x(), self.y() - other.y())
    }

    /// Squared distance between the points.
    fn distance_sq(&self, other: &impl CartesianPoint2d) -> f64
    where
        Self: Sized,
    {
        self.sub(other).norm_squared()
    }

    /// Distance between the points.
    fn distance(&self, other: &impl CartesianPoint2d) -> f64
    where
        Self: Sized,
    {
        self.distance_sq(other).sqrt()
    }
}

impl CartesianPoint2d for Point2<f64> {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

impl CartesianPoint2d for [f64; 2] {
    fn x(&self) -> f64 {
        self[0]
    }

    fn y(&self) -> f64 {
        self[1]
    }
}
