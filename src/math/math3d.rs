/// Vector helpers used by the brightness integral, f64 throughout.

use crate::engine::types::Vec3D;

#[inline(always)]
pub fn vec3d_dot(a: &Vec3D, b: &Vec3D) -> f64 {
    a.x * b.x + a.y * b.y + a.z * b.z
}

/// Incidence and emission cosines of a facet normal for one epoch.
///
/// Returns `(mu0, mu)` = `(normal · sun, normal · obs)`.
#[inline(always)]
pub fn facet_cosines(normal: &Vec3D, sun: &Vec3D, obs: &Vec3D) -> (f64, f64) {
    (vec3d_dot(normal, sun), vec3d_dot(normal, obs))
}
