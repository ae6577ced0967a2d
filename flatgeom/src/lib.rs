//! Flat coordinate geometries for map rendering and querying.
//!
//! Geometries in this crate keep their vertices in a single flat `Vec<f64>`. A [`GeometryLayout`] tells how many
//! numbers form one vertex (the *stride*), so `[x0, y0, x1, y1, ...]` is a two-vertex `XY` buffer and
//! `[x0, y0, z0, x1, y1, z1]` a two-vertex `XYZ` one.
//!
//! * [`flat`] converts nested coordinates into flat buffers and back (*deflate* and *inflate*) and contains the
//!   algorithms working directly on the buffers.
//! * [`Extent`] is the bounding box type used for containment tests and for pruning nearest vertex searches.
//! * [`Point`] and [`MultiPoint`] own a flat buffer and implement [`SimpleGeometry`], which provides the queries.
//!
//! ```
//! use flatgeom::flat::ClosestPoint;
//! use flatgeom::{Extent, MultiPoint, SimpleGeometry};
//!
//! let multi_point = MultiPoint::new(&[[0.0, 0.0], [3.0, 4.0]], None).unwrap();
//! let closest = multi_point.closest_point_xy(1.0, 1.0, ClosestPoint::new());
//! assert_eq!(closest.point, vec![0.0, 0.0]);
//! assert_eq!(closest.squared_distance, 2.0);
//! assert!(!multi_point.intersects_extent(&Extent::new(10.0, 10.0, 20.0, 20.0)));
//! ```
//!
//! # Features
//!
//! * `geo-types` (default) - conversions from and into [`geo_types`](https://docs.rs/geo-types) geometries.
//! * `geojson` - conversions from and into [`geojson`](https://docs.rs/geojson) geometries.

pub mod cartesian_point;
pub mod error;
pub mod extent;
pub mod flat;
pub mod geom;
pub mod layout;

#[cfg(feature = "geo-types")]
mod geo_types;
#[cfg(feature = "geojson")]
mod geojson;

pub use cartesian_point::CartesianPoint2d;
pub use error::FlatGeomError;
pub use extent::Extent;
pub use geom::{closest_in, GeometryRecord, GeometryType, MultiPoint, Point, SimpleGeometry};
pub use layout::GeometryLayout;
