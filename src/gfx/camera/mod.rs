//! # Camera System
//!
//! Y-up orbit camera around a target point, with a controller translating
//! winit window events into orbit/zoom updates and a GPU-ready uniform.

pub mod camera_controller;
pub mod orbit_camera;

pub use camera_controller::CameraController;
pub use orbit_camera::OrbitCamera;

use cgmath::{Matrix4, SquareMatrix};
use winit::event::WindowEvent;

/// Bundles the camera with its input controller.
pub struct CameraManager {
    pub camera: OrbitCamera,
    pub controller: CameraController,
}

impl CameraManager {
    pub fn new(camera: OrbitCamera, controller: CameraController) -> Self {
        Self { camera, controller }
    }

    /// Route a window event to the controller; returns true when the camera
    /// moved and a redraw is warranted.
    pub fn process_window_event(&mut self, event: &WindowEvent) -> bool {
        self.controller.process_window_event(event, &mut self.camera)
    }
}

/// Camera data in the layout the shaders expect.
///
/// The eye position is homogeneous to satisfy the 16-byte uniform
/// alignment requirement.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_position: [f32; 4],
    pub view_proj: [[f32; 4]; 4],
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self {
            view_position: [0.0; 4],
            view_proj: convert_matrix4_to_array(Matrix4::identity()),
        }
    }
}

pub fn convert_matrix4_to_array(matrix: Matrix4<f32>) -> [[f32; 4]; 4] {
    let mut result = [[0.0; 4]; 4];
    for i in 0..4 {
        for j in 0..4 {
            result[i][j] = matrix[i][j];
        }
    }
    result
}
