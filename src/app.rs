// src/app.rs
//! Application shell: window, event loop and per-frame wiring.

use std::sync::Arc;

use cgmath::Vector3;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowAttributes},
};

use crate::gfx::{
    camera::{CameraController, CameraManager, OrbitCamera},
    geometry::GeometryError,
    rendering::RenderEngine,
    scene::{MeshRecipe, Scene},
};

/// Y shift applied to the scene per Arrow-Down press.
const MOVE_DOWN_STEP: f32 = -0.5;

pub struct UniverseApp {
    event_loop: Option<EventLoop<()>>,
    app_state: AppState,
}

struct AppState {
    window: Option<Arc<Window>>,
    render_engine: Option<RenderEngine>,
    scene: Scene,
}

impl UniverseApp {
    /// Create the application with an empty scene and default camera.
    pub fn new() -> anyhow::Result<Self> {
        let event_loop = EventLoop::new()?;

        let camera = OrbitCamera::new(24.0, 0.3, 0.5, Vector3::new(0.0, -2.0, 0.0), 1.5);
        let controller = CameraController::new(0.005, 0.5);
        let scene = Scene::new(CameraManager::new(camera, controller));

        Ok(Self {
            event_loop: Some(event_loop),
            app_state: AppState {
                window: None,
                render_engine: None,
                scene,
            },
        })
    }

    /// Build a recipe into the scene; the mesh is generated here, once.
    pub fn add_object(&mut self, name: &str, recipe: &MeshRecipe) -> Result<u32, GeometryError> {
        self.app_state.scene.add_object(name, recipe)
    }

    /// Run the event loop (consumes self).
    pub fn run(mut self) -> anyhow::Result<()> {
        let event_loop = self
            .event_loop
            .take()
            .expect("Event loop already consumed");
        event_loop.set_control_flow(ControlFlow::Poll);
        event_loop.run_app(&mut self.app_state)?;
        Ok(())
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Ok(window) = event_loop.create_window(
            WindowAttributes::default()
                .with_title("Universe")
                .with_inner_size(winit::dpi::LogicalSize::new(1200, 800)),
        ) {
            let window_handle = Arc::new(window);
            self.window = Some(window_handle.clone());

            let (width, height) = window_handle.inner_size().into();

            let window_clone = window_handle.clone();
            let renderer = pollster::block_on(async move {
                RenderEngine::new(window_clone, width, height).await
            });

            renderer.init_scene(&mut self.scene);
            self.scene
                .camera_manager
                .camera
                .resize_projection(width, height);

            self.render_engine = Some(renderer);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let Some(render_engine) = self.render_engine.as_mut() else {
            return;
        };
        let Some(window) = self.window.as_ref() else {
            return;
        };

        match event {
            WindowEvent::KeyboardInput {
                event:
                    winit::event::KeyEvent {
                        physical_key: winit::keyboard::PhysicalKey::Code(key_code),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => match key_code {
                winit::keyboard::KeyCode::Escape => event_loop.exit(),
                winit::keyboard::KeyCode::ArrowDown => {
                    self.scene.translate_y(MOVE_DOWN_STEP);
                    window.request_redraw();
                }
                _ => {}
            },
            WindowEvent::Resized(PhysicalSize { width, height }) => {
                self.scene
                    .camera_manager
                    .camera
                    .resize_projection(width, height);
                render_engine.resize(width, height);
            }
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => {
                self.scene.update();
                render_engine.update_camera(self.scene.camera_manager.camera.uniform);
                render_engine.sync_scene(&mut self.scene);
                render_engine.render_frame(&self.scene);
                window.request_redraw();
            }
            other => {
                if self.scene.camera_manager.process_window_event(&other) {
                    window.request_redraw();
                }
            }
        }
    }
}
