/// Per-epoch sun/observer geometry, already rotated into the body frame.

use crate::engine::types::{vec3d_slice, EpochGeometry, Vec3D};
use crate::error::{Buffer, LightcurveError, Result};

/// Borrowed, validated sun/observer direction pairs.
///
/// Position i of any output computed from this set corresponds to
/// position i of the input direction buffers.
#[derive(Clone, Copy, Debug)]
pub struct EpochSet<'a> {
    sun: &'a [Vec3D],
    obs: &'a [Vec3D],
}

impl<'a> EpochSet<'a> {
    pub fn new(sun: &'a [Vec3D], obs: &'a [Vec3D]) -> Result<Self> {
        if sun.len() != obs.len() {
            return Err(LightcurveError::LengthMismatch {
                left: Buffer::SunDirs,
                left_len: sun.len(),
                right: Buffer::ObsDirs,
                right_len: obs.len(),
            });
        }
        if let Some(index) = sun.iter().position(|v| !v.is_finite()) {
            return Err(LightcurveError::NonFinite { buffer: Buffer::SunDirs, index });
        }
        if let Some(index) = obs.iter().position(|v| !v.is_finite()) {
            return Err(LightcurveError::NonFinite { buffer: Buffer::ObsDirs, index });
        }
        Ok(Self { sun, obs })
    }

    /// Build from flat row-major `[n_epochs x 3]` buffers.
    pub fn from_flat(sun_dirs: &'a [f64], obs_dirs: &'a [f64]) -> Result<Self> {
        let sun = vec3d_slice(sun_dirs).ok_or(LightcurveError::RaggedBuffer {
            buffer: Buffer::SunDirs,
            len: sun_dirs.len(),
        })?;
        let obs = vec3d_slice(obs_dirs).ok_or(LightcurveError::RaggedBuffer {
            buffer: Buffer::ObsDirs,
            len: obs_dirs.len(),
        })?;
        Self::new(sun, obs)
    }

    /// Number of epochs.
    #[inline]
    pub fn len(&self) -> usize {
        self.sun.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sun.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> EpochGeometry {
        EpochGeometry::new(self.sun[index], self.obs[index])
    }

    pub fn iter(&self) -> impl Iterator<Item = EpochGeometry> + 'a {
        self.sun
            .iter()
            .zip(self.obs.iter())
            .map(|(&sun, &obs)| EpochGeometry::new(sun, obs))
    }
}
