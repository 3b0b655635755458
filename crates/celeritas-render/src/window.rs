//! Render window and viewports.

use std::sync::Arc;

use winit::window::Window;

/// A viewport binding a camera to a region of the render window.
///
/// Only full-window viewports exist here; a viewport carries the name of
/// the camera it renders from and the background color it clears to.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    camera_name: String,
    background: wgpu::Color,
}

impl Viewport {
    /// Create a viewport bound to the named camera, clearing to black.
    pub fn new(camera_name: &str) -> Self {
        Self {
            camera_name: camera_name.to_string(),
            background: wgpu::Color::BLACK,
        }
    }

    /// The name of the camera this viewport renders from.
    pub fn camera_name(&self) -> &str {
        &self.camera_name
    }

    /// Set the background color the viewport clears to.
    pub fn set_background_colour(&mut self, colour: wgpu::Color) {
        self.background = colour;
    }

    /// The background color the viewport clears to.
    pub fn background_colour(&self) -> wgpu::Color {
        self.background
    }
}

/// The render window: owns the OS window handle and the attached viewports.
pub struct RenderWindow {
    window: Arc<Window>,
    viewports: Vec<Viewport>,
}

impl RenderWindow {
    /// Wrap an OS window.
    pub fn new(window: Arc<Window>) -> Self {
        Self {
            window,
            viewports: Vec::new(),
        }
    }

    /// Attach a viewport bound to the named camera and return it for
    /// configuration.
    pub fn add_viewport(&mut self, camera_name: &str) -> &mut Viewport {
        self.viewports.push(Viewport::new(camera_name));
        self.viewports.last_mut().unwrap()
    }

    /// The attached viewports, in attachment order.
    pub fn viewports(&self) -> &[Viewport] {
        &self.viewports
    }

    /// The underlying OS window handle.
    pub fn handle(&self) -> Arc<Window> {
        Arc::clone(&self.window)
    }

    /// Current physical size of the window.
    pub fn inner_size(&self) -> (u32, u32) {
        let size = self.window.inner_size();
        (size.width, size.height)
    }

    /// Request a redraw from the windowing system.
    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}
