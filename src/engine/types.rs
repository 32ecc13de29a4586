/// Core geometry types shared by the mesh, epoch and integrator modules.
/// Vector types use #[repr(C)] so a `&[f64]` of row-major triples can be
/// viewed as `&[Vec3D]` across the WASM / C boundary.

/// 3D vector with f64 precision, laid out as three consecutive f64s.
#[repr(C)]
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct Vec3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3D {
    #[inline(always)]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vec3D { x, y, z }
    }

    #[inline(always)]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// One planar mesh element: unit outward normal plus area.
///
/// Normals are taken as given; nothing here renormalizes them.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct Facet {
    pub normal: Vec3D,
    pub area: f64,
}

/// Sun and observer directions for one epoch, in the body-fixed frame.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct EpochGeometry {
    /// Direction toward the light source
    pub sun: Vec3D,
    /// Direction toward the observer
    pub obs: Vec3D,
}

impl EpochGeometry {
    pub const fn new(sun: Vec3D, obs: Vec3D) -> Self {
        Self { sun, obs }
    }
}

/// Reinterpret a flat row-major buffer as a slice of `Vec3D`.
///
/// Returns `None` when the length is not a multiple of 3.
pub fn vec3d_slice(flat: &[f64]) -> Option<&[Vec3D]> {
    if flat.len() % 3 != 0 {
        return None;
    }
    // Vec3D is repr(C) with three f64 fields and no padding.
    let rows = unsafe { std::slice::from_raw_parts(flat.as_ptr() as *const Vec3D, flat.len() / 3) };
    Some(rows)
}
