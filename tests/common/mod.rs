#![allow(dead_code)]

use facet_lightcurve::Vec3D;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Flat row-major test mesh: normals [n x 3] and areas [n].
pub struct TestMesh {
    pub normals: Vec<f64>,
    pub areas: Vec<f64>,
}

impl TestMesh {
    pub fn len(&self) -> usize {
        self.areas.len()
    }
}

/// Octahedron subdivided `levels` times, vertices pushed onto the
/// ellipsoid with semi-axes (a, b, c). 8 * 4^levels facets.
pub fn ellipsoid(a: f64, b: f64, c: f64, levels: u32) -> TestMesh {
    let v = [
        Vec3D::new(1.0, 0.0, 0.0),
        Vec3D::new(-1.0, 0.0, 0.0),
        Vec3D::new(0.0, 1.0, 0.0),
        Vec3D::new(0.0, -1.0, 0.0),
        Vec3D::new(0.0, 0.0, 1.0),
        Vec3D::new(0.0, 0.0, -1.0),
    ];
    // Counter-clockwise seen from outside
    let mut tris: Vec<[Vec3D; 3]> = vec![
        [v[0], v[2], v[4]],
        [v[2], v[1], v[4]],
        [v[1], v[3], v[4]],
        [v[3], v[0], v[4]],
        [v[2], v[0], v[5]],
        [v[1], v[2], v[5]],
        [v[3], v[1], v[5]],
        [v[0], v[3], v[5]],
    ];

    for _ in 0..levels {
        let mut next = Vec::with_capacity(tris.len() * 4);
        for [p0, p1, p2] in tris {
            let m01 = vec3d_normalized(&mid(&p0, &p1));
            let m12 = vec3d_normalized(&mid(&p1, &p2));
            let m20 = vec3d_normalized(&mid(&p2, &p0));
            next.push([p0, m01, m20]);
            next.push([m01, p1, m12]);
            next.push([m20, m12, p2]);
            next.push([m01, m12, m20]);
        }
        tris = next;
    }

    let mut mesh = TestMesh { normals: Vec::new(), areas: Vec::new() };
    for tri in tris {
        let [p0, p1, p2] = tri.map(|p| Vec3D::new(p.x * a, p.y * b, p.z * c));
        let e1 = Vec3D::new(p1.x - p0.x, p1.y - p0.y, p1.z - p0.z);
        let e2 = Vec3D::new(p2.x - p0.x, p2.y - p0.y, p2.z - p0.z);
        let cross = vec3d_cross(&e1, &e2);
        let n = vec3d_normalized(&cross);
        mesh.normals.extend_from_slice(&[n.x, n.y, n.z]);
        mesh.areas.push(0.5 * vec3d_length(&cross));
    }
    mesh
}

pub fn sphere(levels: u32) -> TestMesh {
    ellipsoid(1.0, 1.0, 1.0, levels)
}

fn vec3d_cross(a: &Vec3D, b: &Vec3D) -> Vec3D {
    Vec3D::new(a.y * b.z - a.z * b.y, a.z * b.x - a.x * b.z, a.x * b.y - a.y * b.x)
}

fn vec3d_length(v: &Vec3D) -> f64 {
    (v.x * v.x + v.y * v.y + v.z * v.z).sqrt()
}

fn vec3d_normalized(v: &Vec3D) -> Vec3D {
    let len = vec3d_length(v);
    Vec3D::new(v.x / len, v.y / len, v.z / len)
}

fn mid(a: &Vec3D, b: &Vec3D) -> Vec3D {
    Vec3D::new(0.5 * (a.x + b.x), 0.5 * (a.y + b.y), 0.5 * (a.z + b.z))
}

/// Uniformly distributed unit vectors, flattened row-major.
pub fn random_dirs(rng: &mut StdRng, n: usize) -> Vec<f64> {
    let mut out = Vec::with_capacity(n * 3);
    for _ in 0..n {
        let z: f64 = rng.random_range(-1.0..1.0);
        let phi: f64 = rng.random_range(0.0..std::f64::consts::TAU);
        let s = (1.0 - z * z).sqrt();
        out.extend_from_slice(&[s * phi.cos(), s * phi.sin(), z]);
    }
    out
}

/// Observer directions a small random offset away from the sun directions.
pub fn nearby_dirs(rng: &mut StdRng, sun: &[f64], spread: f64) -> Vec<f64> {
    let mut out = Vec::with_capacity(sun.len());
    for row in sun.chunks_exact(3) {
        let jitter = Vec3D::new(
            rng.random_range(-spread..spread),
            rng.random_range(-spread..spread),
            rng.random_range(-spread..spread),
        );
        let v = vec3d_normalized(&Vec3D::new(row[0] + jitter.x, row[1] + jitter.y, row[2] + jitter.z));
        out.extend_from_slice(&[v.x, v.y, v.z]);
    }
    out
}

pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Straightforward per-facet evaluation of the two-term law.
pub fn reference_lightcurve(mesh: &TestMesh, sun: &[f64], obs: &[f64], c_lambert: f64) -> Vec<f64> {
    sun.chunks_exact(3)
        .zip(obs.chunks_exact(3))
        .map(|(s, o)| {
            let mut total = 0.0;
            for (n, &area) in mesh.normals.chunks_exact(3).zip(&mesh.areas) {
                let mu0 = n[0] * s[0] + n[1] * s[1] + n[2] * s[2];
                let mu = n[0] * o[0] + n[1] * o[1] + n[2] * o[2];
                if mu0 > 0.0 && mu > 0.0 {
                    total += area * ((1.0 - c_lambert) * mu0 / (mu0 + mu) + c_lambert * mu0);
                }
            }
            total
        })
        .collect()
}

pub fn assert_close(actual: &[f64], expected: &[f64], rtol: f64) {
    assert_eq!(actual.len(), expected.len());
    for (i, (&a, &e)) in actual.iter().zip(expected).enumerate() {
        let tol = rtol * e.abs().max(1e-20);
        assert!((a - e).abs() <= tol, "epoch {i}: {a} vs {e}");
    }
}
