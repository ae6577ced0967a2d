//! Conversions between geometries and [`geo_types`] geometries.
//!
//! `geo_types` geometries are planar, so converting into them keeps only the `X` and `Y` components.

use geo_types::{Coord, MultiPoint as GeoMultiPoint, Point as GeoPoint};

use crate::cartesian_point::CartesianPoint2d;
use crate::geom::store::FlatStore;
use crate::geom::{MultiPoint, Point, SimpleGeometry};
use crate::layout::GeometryLayout;

impl CartesianPoint2d for Coord<f64> {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

impl CartesianPoint2d for GeoPoint<f64> {
    fn x(&self) -> f64 {
        self.0.x
    }

    fn y(&self) -> f64 {
        self.0.y
    }
}

impl From<GeoPoint<f64>> for Point {
    fn from(point: GeoPoint<f64>) -> Self {
        Point::xy(point.0.x, point.0.y)
    }
}

impl From<&GeoMultiPoint<f64>> for MultiPoint {
    fn from(multi_point: &GeoMultiPoint<f64>) -> Self {
        let flat_coordinates = multi_point
            .0
            .iter()
            .flat_map(|point| [point.0.x, point.0.y])
            .collect();
        MultiPoint::from_store(FlatStore::new_unchecked(
            GeometryLayout::XY,
            flat_coordinates,
        ))
    }
}

impl From<&Point> for GeoPoint<f64> {
    fn from(point: &Point) -> Self {
        GeoPoint::new(point.x(), point.y())
    }
}

impl From<&MultiPoint> for GeoMultiPoint<f64> {
    fn from(multi_point: &MultiPoint) -> Self {
        multi_point
            .vertices()
            .map(|vertex| GeoPoint::new(vertex[0], vertex[1]))
            .collect::<Vec<_>>()
            .into()
    }
}

#[cfg(test)]
mod tests {
    use geo_types::{coord, point};

    use super::*;
    use crate::Extent;

    #[test]
    fn from_geo_types() {
        let geo = GeoMultiPoint::new(vec![point!(x: 1.0, y: 2.0), point!(x: -3.0, y: 4.0)]);
        let multi_point = MultiPoint::from(&geo);
        assert_eq!(multi_point.layout(), GeometryLayout::XY);
        assert_eq!(multi_point.extent(), Extent::new(-3.0, 2.0, 1.0, 4.0));

        assert_eq!(GeoMultiPoint::from(&multi_point), geo);
    }

    #[test]
    fn into_geo_types_drops_z() {
        let point = Point::new(&[1.0, 2.0, 3.0], None).expect("point");
        assert_eq!(GeoPoint::from(&point), point!(x: 1.0, y: 2.0));
        assert_eq!(Point::from(point!(x: 1.0, y: 2.0)), Point::xy(1.0, 2.0));
    }

    #[test]
    fn query_with_geo_types_point() {
        let multi_point = MultiPoint::new(&[[0.0, 0.0], [3.0, 4.0]], None).expect("multipoint");
        let closest = multi_point.closest_point(&coord!(x: 3.0, y: 3.0));
        assert_eq!(closest.point, vec![3.0, 4.0]);
        assert!(multi_point
            .extent()
            .contains_point(&point!(x: 1.0, y: 1.0)));
    }
}
