use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use super::store::FlatStore;
use super::{GeometryRecord, GeometryType, SimpleGeometry};
use crate::cartesian_point::CartesianPoint2d;
use crate::error::FlatGeomError;
use crate::extent::Extent;
use crate::flat::transform::{rotate_vertices, scale_vertices, translate_vertices};
use crate::layout::GeometryLayout;

/// Geometry consisting of exactly one vertex.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GeometryRecord", into = "GeometryRecord")]
pub struct Point {
    store: FlatStore,
}

impl Point {
    /// Creates a point from its coordinate tuple.
    ///
    /// Without an explicit `layout` it is inferred from the tuple length (see [`GeometryLayout::infer`]).
    pub fn new(coordinate: &[f64], layout: Option<GeometryLayout>) -> Result<Self, FlatGeomError> {
        Ok(Self {
            store: Self::deflate(coordinate, layout)?,
        })
    }

    /// Creates a planar point.
    pub fn xy(x: f64, y: f64) -> Self {
        Self {
            store: FlatStore::new_unchecked(GeometryLayout::XY, vec![x, y]),
        }
    }

    /// Creates a point from a flat buffer holding exactly one vertex of the given layout.
    pub fn from_flat_coordinates(
        flat_coordinates: Vec<f64>,
        layout: GeometryLayout,
    ) -> Result<Self, FlatGeomError> {
        if flat_coordinates.len() != layout.stride() {
            return Err(FlatGeomError::MalformedBuffer {
                len: flat_coordinates.len(),
                stride: layout.stride(),
            });
        }

        Ok(Self {
            store: FlatStore::new_unchecked(layout, flat_coordinates),
        })
    }

    /// Copy of the vertex.
    pub fn coordinates(&self) -> Vec<f64> {
        self.store.flat_coordinates().to_vec()
    }

    /// Replaces the vertex of the point. On error the point is left unchanged.
    pub fn set_coordinates(
        &mut self,
        coordinate: &[f64],
        layout: Option<GeometryLayout>,
    ) -> Result<(), FlatGeomError> {
        let store = Self::deflate(coordinate, layout)?;
        self.store.replace(store);
        Ok(())
    }

    /// X coordinate.
    pub fn x(&self) -> f64 {
        self.store.flat_coordinates()[0]
    }

    /// Y coordinate.
    pub fn y(&self) -> f64 {
        self.store.flat_coordinates()[1]
    }

    /// Elevation, if the layout has one.
    pub fn z(&self) -> Option<f64> {
        self.layout()
            .z_index()
            .map(|index| self.store.flat_coordinates()[index])
    }

    /// Measure, if the layout has one.
    pub fn m(&self) -> Option<f64> {
        self.layout()
            .m_index()
            .map(|index| self.store.flat_coordinates()[index])
    }

    pub(super) fn from_store(store: FlatStore) -> Self {
        Self { store }
    }

    fn deflate(
        coordinate: &[f64],
        layout: Option<GeometryLayout>,
    ) -> Result<FlatStore, FlatGeomError> {
        FlatStore::from_coordinates(&[coordinate], layout)
    }
}

impl SimpleGeometry for Point {
    fn geometry_type(&self) -> GeometryType {
        GeometryType::Point
    }

    fn layout(&self) -> GeometryLayout {
        self.store.layout()
    }

    fn flat_coordinates(&self) -> &[f64] {
        self.store.flat_coordinates()
    }

    fn extent(&self) -> Extent {
        self.store.extent()
    }

    fn revision(&self) -> u64 {
        self.store.revision()
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.store
            .modify(|vertices| translate_vertices(vertices, dx, dy));
    }

    fn scale(&mut self, sx: f64, sy: f64, anchor: Option<Point2<f64>>) {
        let anchor = anchor.unwrap_or_else(|| Point2::new(self.x(), self.y()));
        self.store
            .modify(|vertices| scale_vertices(vertices, sx, sy, anchor));
    }

    fn rotate(&mut self, angle: f64, anchor: Point2<f64>) {
        self.store
            .modify(|vertices| rotate_vertices(vertices, angle, anchor));
    }
}

impl CartesianPoint2d for Point {
    fn x(&self) -> f64 {
        Point::x(self)
    }

    fn y(&self) -> f64 {
        Point::y(self)
    }
}

impl From<Point> for GeometryRecord {
    fn from(point: Point) -> Self {
        Self {
            layout: point.layout(),
            flat_coordinates: point.store.flat_coordinates().to_vec(),
        }
    }
}

impl TryFrom<GeometryRecord> for Point {
    type Error = FlatGeomError;

    fn try_from(record: GeometryRecord) -> Result<Self, Self::Error> {
        Self::from_flat_coordinates(record.flat_coordinates, record.layout)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn point_layouts() {
        let point = Point::new(&[1.0, 2.0, 3.0], Some(GeometryLayout::XYM)).expect("point");
        assert_eq!(point.layout(), GeometryLayout::XYM);
        assert_eq!(point.z(), None);
        assert_eq!(point.m(), Some(3.0));

        let point = Point::new(&[1.0, 2.0, 3.0, 4.0], None).expect("point");
        assert_eq!(point.z(), Some(3.0));
        assert_eq!(point.m(), Some(4.0));
        assert_eq!(point.vertex_count(), 1);
    }

    #[test]
    fn point_needs_a_vertex() {
        assert_matches!(
            Point::new(&[], None),
            Err(FlatGeomError::InvalidLayout { components: 0 })
        );
        assert_matches!(
            Point::new(&[1.0, 2.0], Some(GeometryLayout::XYZ)),
            Err(FlatGeomError::InvalidLayout { components: 2 })
        );
        assert_matches!(
            Point::from_flat_coordinates(vec![1.0, 2.0, 3.0, 4.0], GeometryLayout::XY),
            Err(FlatGeomError::MalformedBuffer { len: 4, stride: 2 })
        );
    }

    #[test]
    fn set_coordinates_changes_layout() {
        let mut point = Point::xy(1.0, 1.0);
        assert_eq!(point.extent(), Extent::new(1.0, 1.0, 1.0, 1.0));

        point
            .set_coordinates(&[5.0, 6.0, 7.0], None)
            .expect("set coordinates");
        assert_eq!(point.layout(), GeometryLayout::XYZ);
        assert_eq!(point.coordinates(), vec![5.0, 6.0, 7.0]);
        assert_eq!(point.extent(), Extent::new(5.0, 6.0, 5.0, 6.0));
        assert_eq!(point.revision(), 1);

        assert!(point.set_coordinates(&[1.0], None).is_err());
        assert_eq!(point.coordinates(), vec![5.0, 6.0, 7.0]);
    }

    #[test]
    fn point_intersects_extent() {
        let point = Point::xy(2.0, 3.0);
        assert!(point.intersects_extent(&Extent::new(0.0, 0.0, 2.0, 3.0)));
        assert!(!point.intersects_extent(&Extent::new(0.0, 0.0, 1.0, 1.0)));
    }

    #[test]
    fn transform_point() {
        let mut point = Point::new(&[1.0, 0.0, 9.0], None).expect("point");
        point.rotate(PI, Point2::new(0.0, 0.0));
        assert_abs_diff_eq!(point.x(), -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(point.y(), 0.0, epsilon = 1e-12);
        assert_eq!(point.z(), Some(9.0));

        point.translate(1.0, 2.0);
        assert_abs_diff_eq!(point.extent().center().y, 2.0, epsilon = 1e-12);

        point.scale(3.0, 3.0, None);
        assert_abs_diff_eq!(point.x(), 0.0, epsilon = 1e-12);
        assert_eq!(point.revision(), 3);
    }

    #[test]
    fn serde_round_trip() {
        let point = Point::new(&[1.5, -2.0, 3.0], Some(GeometryLayout::XYM)).expect("point");
        let json = serde_json::to_string(&point).expect("serialize");
        assert_eq!(json, r#"{"layout":"XYM","flat_coordinates":[1.5,-2.0,3.0]}"#);

        let restored: Point = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(restored, point);

        assert!(serde_json::from_str::<Point>(r#"{"layout":"XY","flat_coordinates":[1.0]}"#).is_err());
    }
}
