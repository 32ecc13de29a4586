/// Pre-validated, borrowed view of a faceted shape model.
///
/// The mesh borrows the caller's normal and area buffers; nothing is
/// copied. Validation runs once in the constructor, so an inversion loop
/// that evaluates many epoch batches against the same mesh pays for it
/// only once.

use crate::engine::types::{vec3d_slice, Facet, Vec3D};
use crate::error::{Buffer, LightcurveError, Result};

#[derive(Clone, Copy, Debug)]
pub struct FacetMesh<'a> {
    normals: &'a [Vec3D],
    areas: &'a [f64],
}

impl<'a> FacetMesh<'a> {
    /// Build from per-facet normals and areas (same index space).
    ///
    /// Rejects mismatched lengths, negative or non-finite areas and
    /// non-finite normals. Normals are not checked for unit length.
    pub fn new(normals: &'a [Vec3D], areas: &'a [f64]) -> Result<Self> {
        if normals.len() != areas.len() {
            return Err(LightcurveError::LengthMismatch {
                left: Buffer::Normals,
                left_len: normals.len(),
                right: Buffer::Areas,
                right_len: areas.len(),
            });
        }

        if let Some(index) = normals.iter().position(|n| !n.is_finite()) {
            return Err(LightcurveError::NonFinite { buffer: Buffer::Normals, index });
        }

        for (index, &area) in areas.iter().enumerate() {
            if !area.is_finite() {
                return Err(LightcurveError::NonFinite { buffer: Buffer::Areas, index });
            }
            if area < 0.0 {
                return Err(LightcurveError::NegativeArea { index, area });
            }
        }

        Ok(Self { normals, areas })
    }

    /// Build from a flat row-major `[n_faces x 3]` normal buffer.
    pub fn from_flat(normals: &'a [f64], areas: &'a [f64]) -> Result<Self> {
        let rows = vec3d_slice(normals).ok_or(LightcurveError::RaggedBuffer {
            buffer: Buffer::Normals,
            len: normals.len(),
        })?;
        Self::new(rows, areas)
    }

    /// Number of facets.
    #[inline]
    pub fn len(&self) -> usize {
        self.areas.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    #[inline]
    pub fn normals(&self) -> &'a [Vec3D] {
        self.normals
    }

    #[inline]
    pub fn areas(&self) -> &'a [f64] {
        self.areas
    }

    /// Iterate facets in index order.
    pub fn facets(&self) -> impl Iterator<Item = Facet> + 'a {
        self.normals
            .iter()
            .zip(self.areas.iter())
            .map(|(&normal, &area)| Facet { normal, area })
    }
}
