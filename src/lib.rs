// src/lib.rs
//! Universe
//!
//! A small 3D scene of procedurally swept meshes, rendered with wgpu and
//! winit. The interesting part lives in [`gfx::geometry`]: a generator that
//! sweeps polar cross-sections along Bézier curves into tube and strip
//! meshes with averaged normals and tessellated end caps.

pub mod app;
pub mod gfx;

// Re-export main types for convenience
pub use app::UniverseApp;
pub use gfx::geometry::{Curve, GeometryError, MeshData, MeshGenerator, Profile, Vertex3D};
pub use gfx::scene::{MeshRecipe, ProfileSpec, Scene};
