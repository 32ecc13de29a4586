use wasm_bindgen::prelude::*;

pub mod config;
pub mod engine;
pub mod error;
pub mod ffi;
pub mod math;
pub mod scattering;

pub use config::IntegratorConfig;
pub use engine::geometry::EpochSet;
pub use engine::integrator::{compute_lightcurve_flat, compute_lightcurve_flat_into, BrightnessIntegrator};
pub use engine::mesh::FacetMesh;
pub use engine::types::{EpochGeometry, Facet, Vec3D};
pub use error::LightcurveError;
pub use scattering::{ScatteringId, ScatteringLaw};

/// Initialize the WASM module (call once from JS).
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        // A second init() finds the logger already set; that is fine.
        let _ = console_log::init_with_level(log::Level::Info);
    }
}

/// Disk-integrated brightness at each epoch (Lambert + Lommel-Seeliger).
///
/// `normals` — Float64Array [n_faces * 3], row-major unit normals
/// `areas` — Float64Array [n_faces]
/// `sun_dirs` / `obs_dirs` — Float64Array [n_epochs * 3], body frame
/// `c_lambert` — Lambert weight, not range checked
///
/// Returns a new Float64Array of n_epochs values; throws on invalid input.
#[wasm_bindgen]
pub fn compute_lightcurve(
    normals: &[f64],
    areas: &[f64],
    sun_dirs: &[f64],
    obs_dirs: &[f64],
    c_lambert: f64,
) -> Result<Vec<f64>, JsError> {
    Ok(engine::integrator::compute_lightcurve_flat(normals, areas, sun_dirs, obs_dirs, c_lambert)?)
}

/// Same as `compute_lightcurve`, writing into a JS-owned Float64Array
/// (for example a view into a SharedArrayBuffer). `out.length` must equal
/// n_epochs; on error `out` is not modified.
#[wasm_bindgen]
pub fn compute_lightcurve_into(
    normals: &[f64],
    areas: &[f64],
    sun_dirs: &[f64],
    obs_dirs: &[f64],
    c_lambert: f64,
    out: &js_sys::Float64Array,
) -> Result<(), JsError> {
    let mut buf = vec![0.0; out.length() as usize];
    engine::integrator::compute_lightcurve_flat_into(normals, areas, sun_dirs, obs_dirs, c_lambert, &mut buf)?;
    out.copy_from(&buf);
    Ok(())
}

/// Lightcurve with a configurable scattering law.
///
/// `config` — Float64Array [c_lambert, law_id, parallel_min_epochs]
/// law_id: 0 = Lambert + Lommel-Seeliger, 1 = Lambert, 2 = Lommel-Seeliger
#[wasm_bindgen]
pub fn compute_lightcurve_with(
    normals: &[f64],
    areas: &[f64],
    sun_dirs: &[f64],
    obs_dirs: &[f64],
    config: &[f64],
) -> Result<Vec<f64>, JsError> {
    let config = IntegratorConfig::from_buffer(config)?;
    Ok(lightcurve_with_config(normals, areas, sun_dirs, obs_dirs, &config)?)
}

/// Validate the flat buffers and run the integrator selected by `config`.
pub fn lightcurve_with_config(
    normals: &[f64],
    areas: &[f64],
    sun_dirs: &[f64],
    obs_dirs: &[f64],
    config: &IntegratorConfig,
) -> error::Result<Vec<f64>> {
    let mesh = FacetMesh::from_flat(normals, areas)?;
    let epochs = EpochSet::from_flat(sun_dirs, obs_dirs)?;
    Ok(BrightnessIntegrator::from_config(config).compute(&mesh, &epochs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lightcurve_with_config_law_selection() {
        let normals = [0.0, 0.0, 1.0];
        let areas = [2.0];
        let dirs = [0.0, 0.0, 1.0];

        let mixed = lightcurve_with_config(&normals, &areas, &dirs, &dirs, &IntegratorConfig::from_buffer(&[0.5]).unwrap())
            .unwrap();
        assert_eq!(mixed, vec![1.5]);

        let lambert = lightcurve_with_config(&normals, &areas, &dirs, &dirs, &IntegratorConfig::from_buffer(&[0.5, 1.0]).unwrap())
            .unwrap();
        assert_eq!(lambert, vec![2.0]);

        let ls = lightcurve_with_config(&normals, &areas, &dirs, &dirs, &IntegratorConfig::from_buffer(&[0.5, 2.0]).unwrap())
            .unwrap();
        assert_eq!(ls, vec![1.0]);
    }

    #[test]
    fn test_lightcurve_with_config_rejects_mismatch() {
        let err = lightcurve_with_config(&[0.0, 0.0, 1.0], &[1.0], &[0.0, 0.0, 1.0], &[], &IntegratorConfig::default())
            .unwrap_err();
        assert!(err.is_invalid_input());
    }
}
