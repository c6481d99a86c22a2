//! # Graphics Module
//!
//! Everything the scene needs to exist on screen:
//!
//! - **Geometry** ([`geometry`]) - the procedural swept-mesh core
//! - **Scene** ([`scene`]) - object container and mesh recipes
//! - **Camera** ([`camera`]) - orbit camera and input controller
//! - **Rendering** ([`rendering`]) - wgpu device, pipeline and draw pass
//!
//! The geometry module is self-contained and pure; scene and rendering are
//! the thin layers that own its output and put it on the GPU.

pub mod camera;
pub mod geometry;
pub mod rendering;
pub mod scene;

pub use camera::OrbitCamera;
pub use rendering::RenderEngine;
