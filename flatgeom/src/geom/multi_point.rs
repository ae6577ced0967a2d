use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use super::store::FlatStore;
use super::{GeometryRecord, GeometryType, Point, SimpleGeometry};
use crate::error::FlatGeomError;
use crate::extent::Extent;
use crate::flat::transform::{rotate_vertices, scale_vertices, translate_vertices};
use crate::layout::GeometryLayout;

/// A set of points sharing one flat buffer.
///
/// ```
/// use flatgeom::{Extent, MultiPoint, SimpleGeometry};
///
/// let multi_point = MultiPoint::new(&[[0.0, 0.0], [3.0, 4.0]], None).unwrap();
/// assert_eq!(multi_point.extent(), Extent::new(0.0, 0.0, 3.0, 4.0));
/// assert!(multi_point.intersects_extent(&Extent::new(2.0, 2.0, 5.0, 5.0)));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GeometryRecord", into = "GeometryRecord")]
pub struct MultiPoint {
    store: FlatStore,
}

impl MultiPoint {
    /// Creates a multipoint from coordinate tuples.
    ///
    /// Without an explicit `layout` it is inferred from the length of the first tuple (see
    /// [`GeometryLayout::infer`]) and every other tuple must have the same length. With an explicit layout, extra
    /// components of a tuple are dropped. An empty multipoint without explicit layout is `XY`.
    pub fn new<C: AsRef<[f64]>>(
        coordinates: &[C],
        layout: Option<GeometryLayout>,
    ) -> Result<Self, FlatGeomError> {
        Ok(Self {
            store: FlatStore::from_coordinates(coordinates, layout)?,
        })
    }

    /// Creates a multipoint without points.
    pub fn empty(layout: GeometryLayout) -> Self {
        Self {
            store: FlatStore::new_unchecked(layout, vec![]),
        }
    }

    /// Creates a multipoint directly from a flat buffer, without copying it.
    pub fn from_flat_coordinates(
        flat_coordinates: Vec<f64>,
        layout: GeometryLayout,
    ) -> Result<Self, FlatGeomError> {
        Ok(Self {
            store: FlatStore::new(layout, flat_coordinates)?,
        })
    }

    /// Replaces all points. On error the multipoint is left unchanged.
    pub fn set_coordinates<C: AsRef<[f64]>>(
        &mut self,
        coordinates: &[C],
        layout: Option<GeometryLayout>,
    ) -> Result<(), FlatGeomError> {
        let store = FlatStore::from_coordinates(coordinates, layout)?;
        self.store.replace(store);
        Ok(())
    }

    /// Replaces the flat buffer and layout. On error the multipoint is left unchanged.
    pub fn set_flat_coordinates(
        &mut self,
        flat_coordinates: Vec<f64>,
        layout: GeometryLayout,
    ) -> Result<(), FlatGeomError> {
        let store = FlatStore::new(layout, flat_coordinates)?;
        self.store.replace(store);
        Ok(())
    }

    /// Adds the `point` at the end of the multipoint.
    ///
    /// An empty multipoint takes the layout of the point. Otherwise the layouts must match.
    pub fn append_point(&mut self, point: &Point) -> Result<(), FlatGeomError> {
        self.store
            .append(point.layout(), point.flat_coordinates())
    }

    /// The point at `index`, or `None` if the index is out of range.
    pub fn point(&self, index: usize) -> Option<Point> {
        let vertex = self.vertices().nth(index)?;
        Some(self.to_point(vertex))
    }

    /// Iterates over copies of all the points.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.vertices().map(move |vertex| self.to_point(vertex))
    }

    /// Copies of all vertices as coordinate tuples.
    pub fn coordinates(&self) -> Vec<Vec<f64>> {
        self.vertices().map(<[f64]>::to_vec).collect()
    }

    pub(crate) fn from_store(store: FlatStore) -> Self {
        Self { store }
    }

    fn to_point(&self, vertex: &[f64]) -> Point {
        Point::from_store(FlatStore::new_unchecked(self.layout(), vertex.to_vec()))
    }
}

impl SimpleGeometry for MultiPoint {
    fn geometry_type(&self) -> GeometryType {
        GeometryType::MultiPoint
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
        let anchor = anchor.unwrap_or_else(|| self.extent().center());
        self.store
            .modify(|vertices| scale_vertices(vertices, sx, sy, anchor));
    }

    fn rotate(&mut self, angle: f64, anchor: Point2<f64>) {
        self.store
            .modify(|vertices| rotate_vertices(vertices, angle, anchor));
    }
}

impl From<Point> for MultiPoint {
    fn from(point: Point) -> Self {
        Self {
            store: FlatStore::new_unchecked(point.layout(), point.coordinates()),
        }
    }
}

impl From<MultiPoint> for GeometryRecord {
    fn from(multi_point: MultiPoint) -> Self {
        Self {
            layout: multi_point.layout(),
            flat_coordinates: multi_point.store.flat_coordinates().to_vec(),
        }
    }
}

impl TryFrom<GeometryRecord> for MultiPoint {
    type Error = FlatGeomError;

    fn try_from(record: GeometryRecord) -> Result<Self, Self::Error> {
        Self::from_flat_coordinates(record.flat_coordinates, record.layout)
    }
}
