pub mod geometry;
pub mod integrator;
pub mod mesh;
pub mod types;
