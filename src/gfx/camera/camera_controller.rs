use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};

use super::orbit_camera::OrbitCamera;

/// Mouse-driven orbit/zoom control: drag with the left button to orbit,
/// scroll to zoom.
pub struct CameraController {
    rotate_speed: f32,
    zoom_speed: f32,
    dragging: bool,
    last_cursor: Option<(f64, f64)>,
}

impl CameraController {
    pub fn new(rotate_speed: f32, zoom_speed: f32) -> Self {
        Self {
            rotate_speed,
            zoom_speed,
            dragging: false,
            last_cursor: None,
        }
    }

    /// Returns true when the event changed the camera.
    pub fn process_window_event(&mut self, event: &WindowEvent, camera: &mut OrbitCamera) -> bool {
        match event {
            WindowEvent::MouseInput {
                button: MouseButton::Left,
                state,
                ..
            } => {
                self.dragging = *state == ElementState::Pressed;
                if !self.dragging {
                    self.last_cursor = None;
                }
                false
            }
            WindowEvent::CursorMoved { position, .. } => {
                let current = (position.x, position.y);
                let moved = if self.dragging {
                    if let Some((last_x, last_y)) = self.last_cursor {
                        let dx = (current.0 - last_x) as f32;
                        let dy = (current.1 - last_y) as f32;
                        camera.add_yaw(-dx * self.rotate_speed);
                        camera.add_pitch(dy * self.rotate_speed);
                        true
                    } else {
                        false
                    }
                } else {
                    false
                };
                self.last_cursor = Some(current);
                moved
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let scroll = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(position) => position.y as f32 / 20.0,
                };
                camera.add_distance(-scroll * self.zoom_speed);
                true
            }
            _ => false,
        }
    }
}
