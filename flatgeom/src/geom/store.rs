use std::slice::{ChunksExact, ChunksExactMut};
use std::sync::OnceLock;

use crate::error::FlatGeomError;
use crate::extent::Extent;
use crate::flat::{self, deflate_coordinates};
use crate::layout::GeometryLayout;

/// Flat buffer owned by a single geometry together with the state derived from it.
///
/// The buffer length is always a multiple of the layout stride. The extent is computed on first request and dropped
/// on every mutation, and every mutation increments the revision.
#[derive(Debug, Default)]
pub(crate) struct FlatStore {
    layout: GeometryLayout,
    flat_coordinates: Vec<f64>,
    extent: OnceLock<Extent>,
    revision: u64,
}

impl FlatStore {
    pub(crate) fn new(
        layout: GeometryLayout,
        flat_coordinates: Vec<f64>,
    ) -> Result<Self, FlatGeomError> {
        flat::check_stride(flat_coordinates.len(), layout.stride())?;
        Ok(Self::new_unchecked(layout, flat_coordinates))
    }

    /// The caller guarantees that the buffer consists of whole vertices.
    pub(crate) fn new_unchecked(layout: GeometryLayout, flat_coordinates: Vec<f64>) -> Self {
        debug_assert_eq!(flat_coordinates.len() % layout.stride(), 0);
        Self {
            layout,
            flat_coordinates,
            extent: OnceLock::new(),
            revision: 0,
        }
    }

    pub(crate) fn from_coordinates<C: AsRef<[f64]>>(
        coordinates: &[C],
        layout: Option<GeometryLayout>,
    ) -> Result<Self, FlatGeomError> {
        let inferred = layout.is_none();
        let layout = GeometryLayout::resolve(layout, coordinates.first().map(AsRef::as_ref))?;
        if inferred {
            if let Some(coordinate) = coordinates
                .iter()
                .map(AsRef::as_ref)
                .find(|coordinate| coordinate.len() != layout.stride())
            {
                log::debug!(
                    "Coordinate with {} components in a {layout} geometry inferred from the first one",
                    coordinate.len()
                );
                return Err(FlatGeomError::InvalidLayout {
                    components: coordinate.len(),
                });
            }
        }

        let mut flat_coordinates = Vec::with_capacity(coordinates.len() * layout.stride());
        deflate_coordinates(&mut flat_coordinates, 0, coordinates, layout.stride())?;

        Ok(Self::new_unchecked(layout, flat_coordinates))
    }

    pub(crate) fn layout(&self) -> GeometryLayout {
        self.layout
    }

    pub(crate) fn stride(&self) -> usize {
        self.layout.stride()
    }

    pub(crate) fn flat_coordinates(&self) -> &[f64] {
        &self.flat_coordinates
    }

    pub(crate) fn vertices(&self) -> ChunksExact<'_, f64> {
        self.flat_coordinates.chunks_exact(self.stride())
    }

    pub(crate) fn revision(&self) -> u64 {
        self.revision
    }

    pub(crate) fn extent(&self) -> Extent {
        *self.extent.get_or_init(|| {
            log::trace!(
                "Computing extent of {} vertices",
                self.flat_coordinates.len() / self.stride()
            );
            Extent::from_vertices(self.vertices())
        })
    }

    /// Replaces the buffer and layout with the ones from `other`, keeping the revision history of `self`.
    pub(crate) fn replace(&mut self, other: FlatStore) {
        self.layout = other.layout;
        self.flat_coordinates = other.flat_coordinates;
        self.changed();
    }

    /// Adds one vertex to the end of the buffer. An empty store takes the layout of the vertex.
    pub(crate) fn append(
        &mut self,
        layout: GeometryLayout,
        vertex: &[f64],
    ) -> Result<(), FlatGeomError> {
        flat::check_stride(vertex.len(), layout.stride())?;
        if self.flat_coordinates.is_empty() {
            self.layout = layout;
        } else if self.layout != layout {
            return Err(FlatGeomError::LayoutMismatch {
                expected: self.layout,
                actual: layout,
            });
        }

        self.flat_coordinates.extend_from_slice(vertex);
        self.changed();

        Ok(())
    }

    pub(crate) fn modify(&mut self, f: impl FnOnce(ChunksExactMut<'_, f64>)) {
        let stride = self.stride();
        f(self.flat_coordinates.chunks_exact_mut(stride));
        self.changed();
    }

    fn changed(&mut self) {
        self.extent.take();
        self.revision += 1;
    }
}

impl Clone for FlatStore {
    fn clone(&self) -> Self {
        Self::new_unchecked(self.layout, self.flat_coordinates.clone())
    }
}

impl PartialEq for FlatStore {
    fn eq(&self, other: &Self) -> bool {
        self.layout == other.layout && self.flat_coordinates == other.flat_coordinates
    }
}
