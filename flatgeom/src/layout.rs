//! See documentation for [`GeometryLayout`].

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FlatGeomError;

/// Declares which components every vertex of a geometry carries.
///
/// The number of components is the *stride* of the flat coordinate buffer: vertex `i` of a geometry occupies
/// positions `[i * stride, (i + 1) * stride)` of the buffer. `X` and `Y` are always the first two components.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeometryLayout {
    /// Planar coordinates.
    #[default]
    XY,
    /// Planar coordinates with elevation.
    XYZ,
    /// Planar coordinates with a measure value.
    XYM,
    /// Planar coordinates with both elevation and measure.
    XYZM,
}

impl GeometryLayout {
    /// Number of numeric components per vertex.
    pub const fn stride(&self) -> usize {
        match self {
            Self::XY => 2,
            Self::XYZ | Self::XYM => 3,
            Self::XYZM => 4,
        }
    }

    /// Whether vertices carry an elevation component.
    pub const fn has_z(&self) -> bool {
        matches!(self, Self::XYZ | Self::XYZM)
    }

    /// Whether vertices carry a measure component.
    pub const fn has_m(&self) -> bool {
        matches!(self, Self::XYM | Self::XYZM)
    }

    /// Index of the `Z` component inside a vertex, if the layout has one.
    pub const fn z_index(&self) -> Option<usize> {
        if self.has_z() {
            Some(2)
        } else {
            None
        }
    }

    /// Index of the `M` component inside a vertex, if the layout has one.
    pub const fn m_index(&self) -> Option<usize> {
        match self {
            Self::XYM => Some(2),
            Self::XYZM => Some(3),
            _ => None,
        }
    }

    /// Layout for the given stride.
    ///
    /// A stride of 3 is ambiguous between [`GeometryLayout::XYZ`] and [`GeometryLayout::XYM`]. It is always
    /// treated as `XYZ`; pass the layout explicitly when the third component is a measure.
    pub fn from_stride(stride: usize) -> Result<Self, FlatGeomError> {
        match stride {
            2 => Ok(Self::XY),
            3 => {
                log::debug!("3-component vertices without explicit layout, assuming XYZ");
                Ok(Self::XYZ)
            }
            4 => Ok(Self::XYZM),
            components => Err(FlatGeomError::InvalidLayout { components }),
        }
    }

    /// Infers the layout from the number of components of a coordinate tuple.
    ///
    /// Same as [`GeometryLayout::from_stride`].
    pub fn infer(coordinate: &[f64]) -> Result<Self, FlatGeomError> {
        Self::from_stride(coordinate.len())
    }

    /// Picks the layout for a new geometry.
    ///
    /// The `explicit` layout wins when given. Otherwise the layout is inferred from the first vertex of the
    /// geometry. A geometry with no vertices and no explicit layout is `XY`.
    pub fn resolve(
        explicit: Option<Self>,
        first_vertex: Option<&[f64]>,
    ) -> Result<Self, FlatGeomError> {
        match (explicit, first_vertex) {
            (Some(layout), _) => Ok(layout),
            (None, Some(vertex)) => Self::infer(vertex),
            (None, None) => Ok(Self::XY),
        }
    }

    /// Tag text of the layout, e.g. `"XYZM"`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::XY => "XY",
            Self::XYZ => "XYZ",
            Self::XYM => "XYM",
            Self::XYZM => "XYZM",
        }
    }
}

impl Display for GeometryLayout {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GeometryLayout {
    type Err = FlatGeomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "XY" => Ok(Self::XY),
            "XYZ" => Ok(Self::XYZ),
            "XYM" => Ok(Self::XYM),
            "XYZM" => Ok(Self::XYZM),
            _ => Err(FlatGeomError::UnknownLayout(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn stride_matches_tag_length() {
        for layout in [
            GeometryLayout::XY,
            GeometryLayout::XYZ,
            GeometryLayout::XYM,
            GeometryLayout::XYZM,
        ] {
            assert_eq!(layout.stride(), layout.as_str().len());
        }
    }

    #[test]
    fn infer_from_tuple_length() {
        assert_eq!(GeometryLayout::infer(&[1.0, 2.0]), Ok(GeometryLayout::XY));
        assert_eq!(
            GeometryLayout::infer(&[1.0, 2.0, 3.0]),
            Ok(GeometryLayout::XYZ)
        );
        assert_eq!(
            GeometryLayout::infer(&[1.0, 2.0, 3.0, 4.0]),
            Ok(GeometryLayout::XYZM)
        );
    }

    #[test]
    fn infer_fails_for_unsupported_lengths() {
        assert_matches!(
            GeometryLayout::infer(&[]),
            Err(FlatGeomError::InvalidLayout { components: 0 })
        );
        assert_matches!(
            GeometryLayout::infer(&[1.0]),
            Err(FlatGeomError::InvalidLayout { components: 1 })
        );
        assert_matches!(
            GeometryLayout::infer(&[1.0; 5]),
            Err(FlatGeomError::InvalidLayout { components: 5 })
        );
    }

    #[test]
    fn explicit_layout_wins() {
        let vertex = [1.0, 2.0, 3.0];
        assert_eq!(
            GeometryLayout::resolve(Some(GeometryLayout::XYM), Some(&vertex[..])),
            Ok(GeometryLayout::XYM)
        );
        assert_eq!(
            GeometryLayout::resolve(None, Some(&vertex[..])),
            Ok(GeometryLayout::XYZ)
        );
        assert_eq!(GeometryLayout::resolve(None, None), Ok(GeometryLayout::XY));
    }

    #[test]
    fn z_and_m_positions() {
        assert_eq!(GeometryLayout::XY.z_index(), None);
        assert_eq!(GeometryLayout::XYM.z_index(), None);
        assert_eq!(GeometryLayout::XYM.m_index(), Some(2));
        assert_eq!(GeometryLayout::XYZM.z_index(), Some(2));
        assert_eq!(GeometryLayout::XYZM.m_index(), Some(3));
    }

    #[test]
    fn parse_tag() {
        assert_eq!("XYM".parse::<GeometryLayout>(), Ok(GeometryLayout::XYM));
        assert_eq!(GeometryLayout::XYZM.to_string(), "XYZM");
        assert_matches!(
            "XZ".parse::<GeometryLayout>(),
            Err(FlatGeomError::UnknownLayout(_))
        );
    }

    #[test]
    fn serializes_as_tag() {
        let json = serde_json::to_string(&GeometryLayout::XYZ).expect("serialize");
        assert_eq!(json, "\"XYZ\"");
        let layout: GeometryLayout = serde_json::from_str("\"XYM\"").expect("deserialize");
        assert_eq!(layout, GeometryLayout::XYM);
    }
}
