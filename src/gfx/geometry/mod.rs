//! # Procedural Swept Geometry
//!
//! This module is the algorithmic core of the engine: it builds tube and
//! strip meshes by sweeping a 2D [`Profile`] along a parametric [`Curve`].
//!
//! ## Components
//!
//! - **Curve** ([`curve`]) - generalized Bézier path through control points
//! - **Profile** ([`profile`]) - polar cross-section, closed ring or open fan
//! - **MeshGenerator** ([`generator`]) - sweep, stitch, normals, end caps
//! - **MeshData** ([`mesh_data`]) - the output container handed to the renderer
//!
//! ## Usage
//!
//! ```no_run
//! use universe::gfx::geometry::{Curve, MeshData, MeshGenerator, Profile};
//! use cgmath::Vector3;
//!
//! let curve = Curve::new(vec![
//!     Vector3::new(0.0, -2.0, 0.0),
//!     Vector3::new(0.0, 1.0, 0.0),
//! ]).unwrap();
//! let profile = Profile::square();
//!
//! let mut generator = MeshGenerator::new(curve, profile, Vector3::new(1.0, 0.0, 0.0));
//! let mut data = MeshData::new();
//! generator.make_mesh(&mut data).unwrap();
//! ```

pub mod curve;
pub mod generator;
pub mod mesh_data;
pub mod profile;

pub use curve::Curve;
pub use generator::MeshGenerator;
pub use mesh_data::{MeshData, Vertex3D};
pub use profile::Profile;

/// Invalid generator configuration, surfaced at construction/generation
/// time rather than deferred into per-vertex garbage output.
#[derive(Debug, thiserror::Error)]
pub enum GeometryError {
    #[error("curve needs at least 2 control points, got {0}")]
    TooFewControlPoints(usize),

    #[error("profile needs at least 2 points, got {0}")]
    TooFewProfilePoints(usize),

    #[error("slice step must lie in (0.0, 0.5], got {0}")]
    InvalidStep(f32),

    #[error("sweep base vector is parallel to the curve's initial tangent")]
    DegenerateBaseVector,
}
