/// C ABI entry point for hosts that load the cdylib directly
/// (ctypes, cffi, dlopen).
///
/// All buffers are owned by the caller. Vector buffers are row-major
/// `[n x 3]` f64 arrays; `out` must have room for `n_epochs` values.

use crate::engine::integrator;

/// Brightness computed and written to `out`.
pub const STATUS_OK: i32 = 0;
/// Inputs failed validation; `out` is left untouched.
pub const STATUS_INVALID_INPUT: i32 = 1;
/// A required pointer was null or a count was negative.
pub const STATUS_BAD_ARGUMENT: i32 = 2;

/// View a caller buffer as a slice, allowing a null pointer for empty buffers.
unsafe fn host_slice<'a>(ptr: *const f64, len: usize) -> Option<&'a [f64]> {
    if len == 0 {
        return Some(&[]);
    }
    if ptr.is_null() {
        return None;
    }
    Some(std::slice::from_raw_parts(ptr, len))
}

/// Compute disk-integrated brightness at `n_epochs` epochs.
///
/// Returns one of the `STATUS_*` codes.
///
/// # Safety
///
/// Each non-null pointer must be valid for the length implied by
/// `n_faces` / `n_epochs` (`normals`, `sun_dirs`, `obs_dirs`: 3 values
/// per row; `areas`: `n_faces`; `out`: `n_epochs`), and `out` must not
/// alias any input buffer.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn generate_lightcurve_direct(
    normals: *const f64,
    areas: *const f64,
    n_faces: i64,
    sun_dirs: *const f64,
    obs_dirs: *const f64,
    n_epochs: i64,
    c_lambert: f64,
    out: *mut f64,
) -> i32 {
    let (Ok(n_faces), Ok(n_epochs)) = (usize::try_from(n_faces), usize::try_from(n_epochs)) else {
        return STATUS_BAD_ARGUMENT;
    };

    let (Some(face_values), Some(epoch_values)) = (n_faces.checked_mul(3), n_epochs.checked_mul(3)) else {
        return STATUS_INVALID_INPUT;
    };

    let inputs = (
        host_slice(normals, face_values),
        host_slice(areas, n_faces),
        host_slice(sun_dirs, epoch_values),
        host_slice(obs_dirs, epoch_values),
    );
    let (Some(normals), Some(areas), Some(sun_dirs), Some(obs_dirs)) = inputs else {
        return STATUS_BAD_ARGUMENT;
    };

    let out: &mut [f64] = if n_epochs == 0 {
        &mut []
    } else if out.is_null() {
        return STATUS_BAD_ARGUMENT;
    } else {
        std::slice::from_raw_parts_mut(out, n_epochs)
    };

    match integrator::compute_lightcurve_flat_into(normals, areas, sun_dirs, obs_dirs, c_lambert, out) {
        Ok(()) => STATUS_OK,
        Err(_) => STATUS_INVALID_INPUT,
    }
}
