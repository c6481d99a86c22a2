//! # Rendering
//!
//! wgpu plumbing around the generated meshes: device/surface bring-up, one
//! lit pipeline, per-object GPU buffers and the per-frame draw pass.

pub mod render_engine;
pub mod texture;

pub use render_engine::{ObjectGpuResources, RenderEngine};
