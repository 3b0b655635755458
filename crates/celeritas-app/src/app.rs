//! Application shell: drives the engine setup sequence and the redraw loop.
//!
//! The setup runs on `resumed` in a fixed order: window and GPU context,
//! scene manager, camera, viewport. Every step failure is fatal; there is
//! no partial recovery.

use celeritas_render::{EngineError, EngineRoot, SurfaceError};
use glam::Vec3;
use tracing::{debug, error, info, warn};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

use crate::frame_loop::FrameLoop;

/// Name of the primary scene manager.
pub const MAIN_SCENE: &str = "primary";
/// Implementation the primary scene manager is created from.
pub const MAIN_SCENE_KIND: &str = "octree";
/// Name of the main camera.
pub const MAIN_CAMERA: &str = "main_camera";
/// Fixed initial look-at target of the main camera.
pub const CAMERA_LOOK_AT: Vec3 = Vec3::new(0.0, 0.0, -300.0);
/// Fixed near clip distance of the main camera.
pub const CAMERA_NEAR_CLIP: f32 = 5.0;
/// Fixed viewport background color (mid grey).
pub const VIEWPORT_BACKGROUND: wgpu::Color = wgpu::Color {
    r: 0.5,
    g: 0.5,
    b: 0.5,
    a: 1.0,
};

/// Application state owning the engine root and the frame loop.
pub struct App {
    root: EngineRoot,
    frame_loop: FrameLoop,
}

impl App {
    /// Wrap an engine root whose configuration has already been restored.
    pub fn new(root: EngineRoot) -> Self {
        Self {
            root,
            frame_loop: FrameLoop::new(),
        }
    }

    /// Run the engine setup sequence: window, scene manager, camera,
    /// viewport.
    fn setup(&mut self, event_loop: &ActiveEventLoop) -> Result<(), EngineError> {
        self.root.initialise(event_loop)?;
        let (width, height) = self
            .root
            .window()
            .map(|w| w.inner_size())
            .unwrap_or((1, 1));

        let scene = self.root.create_scene_manager(MAIN_SCENE_KIND, MAIN_SCENE)?;
        let camera = scene.create_camera(MAIN_CAMERA)?;
        camera.position = Vec3::ZERO;
        camera.look_at(CAMERA_LOOK_AT);
        camera.set_near_clip(CAMERA_NEAR_CLIP);
        camera.set_aspect_ratio(width as f32, height as f32);

        if let Some(window) = self.root.window_mut() {
            let viewport = window.add_viewport(MAIN_CAMERA);
            viewport.set_background_colour(VIEWPORT_BACKGROUND);
        }

        info!(
            "Engine ready: scene `{MAIN_SCENE}`, camera `{MAIN_CAMERA}`, viewport attached"
        );
        Ok(())
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.root.is_initialised() {
            return;
        }
        if let Err(e) = self.setup(event_loop) {
            error!("Engine initialisation failed: {e}");
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                info!("Close requested, shutting down");
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                self.root.resize(new_size.width, new_size.height);
            }
            WindowEvent::RedrawRequested => {
                // There is no simulation to step; the loop paces redraw and
                // keeps the frame counters.
                self.frame_loop.tick(|_dt| {});
                if self.frame_loop.frame_count().is_multiple_of(600) {
                    debug!(
                        "Frame {} ({} fixed updates)",
                        self.frame_loop.frame_count(),
                        self.frame_loop.update_count()
                    );
                }

                match self.root.render_one_frame() {
                    Ok(()) => {}
                    Err(SurfaceError::Lost) => {
                        let size = self.root.window().map(|w| w.inner_size());
                        if let Some((width, height)) = size {
                            self.root.resize(width, height);
                        }
                    }
                    Err(SurfaceError::OutOfMemory) => {
                        error!("GPU out of memory");
                        event_loop.exit();
                    }
                    Err(SurfaceError::Timeout) => {
                        warn!("Surface timeout, skipping frame");
                    }
                }

                if let Some(window) = self.root.window() {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}
