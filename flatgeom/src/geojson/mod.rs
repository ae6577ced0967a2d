//! Conversions between geometries and [`geojson`] geometries.
//!
//! GeoJSON positions keep all their components, so `Z` and `M` values survive the round trip. The layout of a
//! geometry read from GeoJSON is inferred from the first position.

use geojson::Value;

use crate::error::FlatGeomError;
use crate::geom::{MultiPoint, Point};

impl TryFrom<&geojson::Geometry> for Point {
    type Error = FlatGeomError;

    fn try_from(geometry: &geojson::Geometry) -> Result<Self, Self::Error> {
        match &geometry.value {
            Value::Point(position) => Point::new(position, None).map_err(|err| {
                log::debug!("Cannot convert GeoJSON point: {err}");
                FlatGeomError::Conversion(format!("invalid point position: {err}"))
            }),
            _ => Err(FlatGeomError::Conversion(
                "GeoJSON geometry is not a Point".to_string(),
            )),
        }
    }
}

impl TryFrom<&geojson::Geometry> for MultiPoint {
    type Error = FlatGeomError;

    fn try_from(geometry: &geojson::Geometry) -> Result<Self, Self::Error> {
        match &geometry.value {
            Value::MultiPoint(positions) => MultiPoint::new(positions, None).map_err(|err| {
                log::debug!("Cannot convert GeoJSON multipoint: {err}");
                FlatGeomError::Conversion(format!("invalid multipoint positions: {err}"))
            }),
            Value::Point(_) => Point::try_from(geometry).map(MultiPoint::from),
            _ => Err(FlatGeomError::Conversion(
                "GeoJSON geometry is not a MultiPoint".to_string(),
            )),
        }
    }
}

impl From<&Point> for geojson::Geometry {
    fn from(point: &Point) -> Self {
        geojson::Geometry::new(Value::Point(point.coordinates()))
    }
}

impl From<&MultiPoint> for geojson::Geometry {
    fn from(multi_point: &MultiPoint) -> Self {
        geojson::Geometry::new(Value::MultiPoint(multi_point.coordinates()))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::layout::GeometryLayout;
    use crate::SimpleGeometry;

    fn parse(json: &str) -> geojson::Geometry {
        json.parse::<geojson::GeoJson>()
            .ok()
            .and_then(|geojson| geojson::Geometry::try_from(geojson).ok())
            .expect("valid GeoJSON geometry")
    }

    #[test]
    fn multipoint_from_geojson() {
        let geometry = parse(r#"{"type":"MultiPoint","coordinates":[[0,0,1],[3,4,2]]}"#);
        let multi_point = MultiPoint::try_from(&geometry).expect("convert");
        assert_eq!(multi_point.layout(), GeometryLayout::XYZ);
        assert_eq!(
            multi_point.coordinates(),
            vec![vec![0.0, 0.0, 1.0], vec![3.0, 4.0, 2.0]]
        );
    }

    #[test]
    fn geojson_round_trip() {
        let multi_point =
            MultiPoint::new(&[[1.0, 2.0, 3.0, 4.0], [5.0, 6.0, 7.0, 8.0]], None).expect("multipoint");
        let geometry = geojson::Geometry::from(&multi_point);
        let restored = MultiPoint::try_from(&geometry).expect("convert");
        assert_eq!(restored, multi_point);

        let point = Point::xy(1.0, -1.0);
        let restored = Point::try_from(&geojson::Geometry::from(&point)).expect("convert");
        assert_eq!(restored, point);
    }

    #[test]
    fn point_as_multipoint() {
        let geometry = parse(r#"{"type":"Point","coordinates":[7,8]}"#);
        let multi_point = MultiPoint::try_from(&geometry).expect("convert");
        assert_eq!(multi_point.coordinates(), vec![vec![7.0, 8.0]]);
    }

    #[test]
    fn wrong_geometry_kind() {
        let geometry = parse(r#"{"type":"LineString","coordinates":[[0,0],[1,1]]}"#);
        assert_matches!(
            MultiPoint::try_from(&geometry),
            Err(FlatGeomError::Conversion(_))
        );
        assert_matches!(Point::try_from(&geometry), Err(FlatGeomError::Conversion(_)));
    }

    #[test]
    fn mixed_dimensions_are_rejected() {
        for json in [
            r#"{"type":"MultiPoint","coordinates":[[0,0,1],[3,4]]}"#,
            r#"{"type":"MultiPoint","coordinates":[[0,0],[3,4,5]]}"#,
        ] {
            assert_matches!(
                MultiPoint::try_from(&parse(json)),
                Err(FlatGeomError::Conversion(_))
            );
        }
    }
}
