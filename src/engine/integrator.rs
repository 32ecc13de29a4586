/// Disk-integrated brightness of a faceted mesh over a batch of epochs.
///
/// For every epoch the integrator sums `area * S(mu0, mu)` over the facets
/// that are both illuminated and visible:
/// - `mu0 = normal · sun` (incidence cosine), `mu = normal · obs` (emission)
/// - facets with `mu0 <= 0` or `mu <= 0` are skipped entirely
/// - no occlusion between facets; each facet is tested on its own cosines
/// - plain ordered f64 summation in facet index order
///
/// Epochs are independent of each other. On native targets large batches
/// are split across the rayon pool, one output slot per epoch, which keeps
/// results bit-identical to the sequential loop.

use crate::config::IntegratorConfig;
use crate::engine::geometry::EpochSet;
use crate::engine::mesh::FacetMesh;
use crate::engine::types::EpochGeometry;
use crate::error::{Buffer, LightcurveError, Result};
use crate::math::math3d;
use crate::scattering::builtin::LambertLommel;
use crate::scattering::ScatteringLaw;

/// Brightness integrator for one scattering law.
pub struct BrightnessIntegrator<L> {
    law: L,
    parallel_min_epochs: usize,
}

impl<L: ScatteringLaw> BrightnessIntegrator<L> {
    pub fn new(law: L) -> Self {
        Self {
            law,
            parallel_min_epochs: crate::config::DEFAULT_PARALLEL_MIN_EPOCHS,
        }
    }

    /// Epoch count from which the parallel loop is used. `usize::MAX` disables it.
    pub fn with_parallel_min_epochs(mut self, n: usize) -> Self {
        self.parallel_min_epochs = n;
        self
    }

    pub fn law(&self) -> &L {
        &self.law
    }

    /// Brightness of the mesh for a single epoch.
    #[inline]
    pub fn integrate_epoch(&self, mesh: &FacetMesh, epoch: &EpochGeometry) -> f64 {
        let mut brightness = 0.0f64;

        for (normal, &area) in mesh.normals().iter().zip(mesh.areas()) {
            let (mu0, mu) = math3d::facet_cosines(normal, &epoch.sun, &epoch.obs);

            // Self-shadowed or facing away
            if mu0 <= 0.0 || mu <= 0.0 {
                continue;
            }

            brightness += area * self.law.reflectance(mu0, mu);
        }

        brightness
    }

    /// Brightness for every epoch, in epoch order.
    pub fn compute(&self, mesh: &FacetMesh, epochs: &EpochSet) -> Vec<f64> {
        let mut out = vec![0.0; epochs.len()];
        self.fill(mesh, epochs, &mut out);
        out
    }

    /// Write one brightness per epoch into a caller-owned buffer.
    ///
    /// `out` must hold exactly `epochs.len()` values; on error nothing is written.
    pub fn compute_into(&self, mesh: &FacetMesh, epochs: &EpochSet, out: &mut [f64]) -> Result<()> {
        if out.len() != epochs.len() {
            log::warn!("output buffer holds {} values for {} epochs", out.len(), epochs.len());
            return Err(LightcurveError::LengthMismatch {
                left: Buffer::Output,
                left_len: out.len(),
                right: Buffer::SunDirs,
                right_len: epochs.len(),
            });
        }
        self.fill(mesh, epochs, out);
        Ok(())
    }

    fn fill(&self, mesh: &FacetMesh, epochs: &EpochSet, out: &mut [f64]) {
        let parallel = self.use_parallel(epochs.len());
        log::debug!(
            "{}: {} facets x {} epochs ({})",
            self.law.name(),
            mesh.len(),
            epochs.len(),
            if parallel { "parallel" } else { "sequential" },
        );

        if parallel {
            self.fill_parallel(mesh, epochs, out);
        } else {
            for (slot, epoch) in out.iter_mut().zip(epochs.iter()) {
                *slot = self.integrate_epoch(mesh, &epoch);
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn use_parallel(&self, n_epochs: usize) -> bool {
        n_epochs >= self.parallel_min_epochs && n_epochs > 1
    }

    #[cfg(target_arch = "wasm32")]
    fn use_parallel(&self, _n_epochs: usize) -> bool {
        false
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn fill_parallel(&self, mesh: &FacetMesh, epochs: &EpochSet, out: &mut [f64]) {
        use rayon::prelude::*;

        out.par_iter_mut().enumerate().for_each(|(j, slot)| {
            *slot = self.integrate_epoch(mesh, &epochs.get(j));
        });
    }

    #[cfg(target_arch = "wasm32")]
    fn fill_parallel(&self, mesh: &FacetMesh, epochs: &EpochSet, out: &mut [f64]) {
        for (slot, epoch) in out.iter_mut().zip(epochs.iter()) {
            *slot = self.integrate_epoch(mesh, &epoch);
        }
    }
}

impl BrightnessIntegrator<Box<dyn ScatteringLaw>> {
    /// Integrator for the law and settings named by a config.
    pub fn from_config(config: &IntegratorConfig) -> Self {
        BrightnessIntegrator::new(config.law.create(config.c_lambert))
            .with_parallel_min_epochs(config.parallel_min_epochs)
    }
}

/// Lightcurve from flat row-major buffers with the two-term law.
///
/// `normals` is `[n_faces x 3]`, `areas` is `[n_faces]`, `sun_dirs` and
/// `obs_dirs` are `[n_epochs x 3]`. Returns `n_epochs` brightness values.
pub fn compute_lightcurve_flat(
    normals: &[f64],
    areas: &[f64],
    sun_dirs: &[f64],
    obs_dirs: &[f64],
    c_lambert: f64,
) -> Result<Vec<f64>> {
    let mesh = FacetMesh::from_flat(normals, areas).inspect_err(|e| log::warn!("{e}"))?;
    let epochs = EpochSet::from_flat(sun_dirs, obs_dirs).inspect_err(|e| log::warn!("{e}"))?;
    Ok(BrightnessIntegrator::new(LambertLommel::new(c_lambert)).compute(&mesh, &epochs))
}

/// Same as [`compute_lightcurve_flat`], writing into a caller-supplied buffer
/// of exactly `n_epochs` values.
pub fn compute_lightcurve_flat_into(
    normals: &[f64],
    areas: &[f64],
    sun_dirs: &[f64],
    obs_dirs: &[f64],
    c_lambert: f64,
    out: &mut [f64],
) -> Result<()> {
    let mesh = FacetMesh::from_flat(normals, areas).inspect_err(|e| log::warn!("{e}"))?;
    let epochs = EpochSet::from_flat(sun_dirs, obs_dirs).inspect_err(|e| log::warn!("{e}"))?;
    BrightnessIntegrator::new(LambertLommel::new(c_lambert)).compute_into(&mesh, &epochs, out)
}
