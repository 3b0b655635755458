//! The engine root object.
//!
//! [`EngineRoot`] is constructed from the three engine file paths and owns
//! every engine-side resource for the lifetime of the process: restored
//! configuration, loaded plugins, resource groups, the render window with
//! its GPU context, and the scene managers. Shutdown (configuration save)
//! runs on every exit path through `Drop`.

use std::path::PathBuf;
use std::sync::Arc;

use celeritas_config::{AppPaths, Config, ConfigError};
use winit::event_loop::ActiveEventLoop;
use winit::window::{Fullscreen, WindowAttributes};

use crate::gpu::{RenderContext, RenderContextError, SurfaceError, init_render_context_blocking};
use crate::plugin::{PluginError, PluginList};
use crate::resource::ResourceGroupManager;
use crate::scene::{SceneError, SceneManager};
use crate::window::RenderWindow;

/// The three file paths the engine root is constructed with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnginePaths {
    /// Plugin list file.
    pub plugins_file: PathBuf,
    /// Configuration file.
    pub config_file: PathBuf,
    /// Log file.
    pub log_file: PathBuf,
}

impl From<&AppPaths> for EnginePaths {
    fn from(paths: &AppPaths) -> Self {
        Self {
            plugins_file: paths.engine_plugins_file(),
            config_file: paths.engine_config_file(),
            log_file: paths.engine_log_file(),
        }
    }
}

/// Errors from the engine setup sequence. All of them are fatal to the
/// application; there is no recovery path.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration restore or save failed.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Plugin list loading failed.
    #[error("plugin error: {0}")]
    Plugin(#[from] PluginError),

    /// GPU context initialization failed.
    #[error("render system error: {0}")]
    Render(#[from] RenderContextError),

    /// OS window creation failed.
    #[error("window creation failed: {0}")]
    Window(#[from] winit::error::OsError),

    /// Scene manager or camera creation failed.
    #[error("scene error: {0}")]
    Scene(#[from] SceneError),
}

/// The engine's root/context object.
pub struct EngineRoot {
    paths: EnginePaths,
    config: Config,
    plugins: PluginList,
    resource_groups: ResourceGroupManager,
    scene_managers: Vec<SceneManager>,
    window: Option<RenderWindow>,
    gpu: Option<RenderContext>,
    config_restored: bool,
    shut_down: bool,
}

impl EngineRoot {
    /// Construct the engine root from its file paths. Nothing is read from
    /// disk until [`restore_config`](Self::restore_config).
    pub fn new(paths: EnginePaths) -> Self {
        log::info!("Engine root created (log file: `{}`)", paths.log_file.display());
        Self {
            paths,
            config: Config::default(),
            plugins: PluginList::all(),
            resource_groups: ResourceGroupManager::new(),
            scene_managers: Vec::new(),
            window: None,
            gpu: None,
            config_restored: false,
            shut_down: false,
        }
    }

    /// Restore the persisted configuration and load the plugin list.
    ///
    /// Missing files fall back to defaults; unreadable or unparseable files
    /// are errors.
    pub fn restore_config(&mut self) -> Result<(), EngineError> {
        self.config = Config::restore_or_default(&self.paths.config_file)?;
        self.plugins = PluginList::load(&self.paths.plugins_file)?;
        self.config_restored = true;
        Ok(())
    }

    /// Persist the current configuration to the engine config file.
    pub fn save_config(&self) -> Result<(), EngineError> {
        self.config.save(&self.paths.config_file)?;
        Ok(())
    }

    /// The current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The current configuration, for overrides and the dialog.
    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// The loaded plugin list.
    pub fn plugins(&self) -> &PluginList {
        &self.plugins
    }

    /// The engine file paths this root was constructed with.
    pub fn paths(&self) -> &EnginePaths {
        &self.paths
    }

    /// Initialise every declared resource group. Returns the number of
    /// usable locations.
    pub fn initialise_resource_groups(&mut self) -> usize {
        let indexed = self.resource_groups.initialise_all();
        log::info!("Resource groups initialised ({indexed} usable location(s))");
        indexed
    }

    /// Declare a resource location for asset loading.
    pub fn declare_resource_location(&mut self, group: &str, location: PathBuf) {
        self.resource_groups.declare_location(group, location);
    }

    /// Create the render window and GPU context from the current
    /// configuration.
    ///
    /// Must run on the event loop thread. Fails fatally on any windowing or
    /// GPU error.
    pub fn initialise(&mut self, event_loop: &ActiveEventLoop) -> Result<(), EngineError> {
        let video = &self.config.video;
        let mut attrs = WindowAttributes::default()
            .with_title(video.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                video.resolution_x as f64,
                video.resolution_y as f64,
            ));
        if video.full_screen {
            attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        let window = Arc::new(event_loop.create_window(attrs)?);
        log::info!(
            "Render window created: \"{}\" {}x{}",
            video.title,
            video.resolution_x,
            video.resolution_y
        );

        let backends = self.plugins.backends_for(&video.render_system);
        let gpu = init_render_context_blocking(Arc::clone(&window), backends, video.vsync)?;

        self.window = Some(RenderWindow::new(window));
        self.gpu = Some(gpu);
        Ok(())
    }

    /// Whether [`initialise`](Self::initialise) has completed.
    pub fn is_initialised(&self) -> bool {
        self.window.is_some() && self.gpu.is_some()
    }

    /// Create a scene manager of the named implementation and return a
    /// reference for configuration. The scene manager stays owned by the
    /// root.
    pub fn create_scene_manager(
        &mut self,
        kind: &str,
        name: &str,
    ) -> Result<&mut SceneManager, EngineError> {
        let scene = SceneManager::create(kind, name)?;
        log::info!("Scene manager `{name}` created ({kind})");
        self.scene_managers.push(scene);
        Ok(self.scene_managers.last_mut().unwrap())
    }

    /// Look up a scene manager by name.
    pub fn scene_manager_mut(&mut self, name: &str) -> Option<&mut SceneManager> {
        self.scene_managers.iter_mut().find(|s| s.name() == name)
    }

    /// The render window, once initialised.
    pub fn window(&self) -> Option<&RenderWindow> {
        self.window.as_ref()
    }

    /// The render window for viewport attachment, once initialised.
    pub fn window_mut(&mut self) -> Option<&mut RenderWindow> {
        self.window.as_mut()
    }

    /// Propagate a window resize to the surface and every camera.
    pub fn resize(&mut self, width: u32, height: u32) {
        if let Some(gpu) = &mut self.gpu {
            gpu.resize(width, height);
        }
        for scene in &mut self.scene_managers {
            for camera in scene.cameras_mut() {
                camera.set_aspect_ratio(width as f32, height as f32);
            }
        }
    }

    /// Render one frame: clear the window to the first viewport's
    /// background color and present.
    ///
    /// A no-op before initialisation.
    pub fn render_one_frame(&mut self) -> Result<(), SurfaceError> {
        let (Some(gpu), Some(window)) = (&self.gpu, &self.window) else {
            return Ok(());
        };
        let background = window
            .viewports()
            .first()
            .map(|v| v.background_colour())
            .unwrap_or(wgpu::Color::BLACK);

        let surface_texture = gpu.get_current_texture()?;
        let view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("viewport-clear"),
            });
        {
            let _pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("viewport-clear"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(background),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });
        }
        gpu.queue.submit(std::iter::once(encoder.finish()));
        surface_texture.present();
        Ok(())
    }

    /// Shut the engine down: persist the configuration (best effort) and
    /// release every held resource. Idempotent; also runs from `Drop`.
    pub fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }
        self.shut_down = true;

        if self.config_restored {
            if let Err(e) = self.save_config() {
                log::warn!("Configuration was not saved on shutdown: {e}");
            }
        }
        self.window = None;
        self.gpu = None;
        log::info!("Engine root shut down");
    }
}

impl Drop for EngineRoot {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn paths_in(dir: &Path) -> EnginePaths {
        EnginePaths::from(&AppPaths::with_home(dir))
    }

    #[test]
    fn test_engine_paths_from_app_paths() {
        let paths = paths_in(Path::new("/tmp/x"));
        assert_eq!(
            paths.config_file,
            PathBuf::from("/tmp/x/.celeritas/config/ogre.cfg")
        );
        assert_eq!(
            paths.plugins_file,
            PathBuf::from("/tmp/x/.celeritas/config/ogre_plugins.cfg")
        );
        assert_eq!(
            paths.log_file,
            PathBuf::from("/tmp/x/.celeritas/log/ogre.log")
        );
    }

    #[test]
    fn test_restore_with_no_files_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let mut root = EngineRoot::new(paths_in(dir.path()));
        root.restore_config().unwrap();

        assert_eq!(root.config(), &Config::default());
        assert_eq!(root.plugins(), &PluginList::all());
        assert!(!root.is_initialised());
    }

    #[test]
    fn test_restore_reads_saved_config() {
        let dir = tempfile::tempdir().unwrap();
        let paths = paths_in(dir.path());

        let mut saved = Config::default();
        saved.video.resolution_x = 800;
        saved.video.resolution_y = 600;
        saved.save(&paths.config_file).unwrap();

        let mut root = EngineRoot::new(paths);
        root.restore_config().unwrap();
        assert_eq!(root.config().video.resolution_x, 800);
        assert_eq!(root.config().video.resolution_y, 600);
    }

    #[test]
    fn test_scene_manager_lifecycle() {
        let dir = tempfile::tempdir().unwrap();
        let mut root = EngineRoot::new(paths_in(dir.path()));

        root.create_scene_manager("octree", "primary").unwrap();
        assert!(root.scene_manager_mut("primary").is_some());
        assert!(root.scene_manager_mut("secondary").is_none());

        let err = root.create_scene_manager("bsp", "other").unwrap_err();
        assert!(matches!(err, EngineError::Scene(_)));
    }

    #[test]
    fn test_resource_group_initialisation() {
        let dir = tempfile::tempdir().unwrap();
        let mut root = EngineRoot::new(paths_in(dir.path()));
        root.declare_resource_location("General", dir.path().to_path_buf());
        assert_eq!(root.initialise_resource_groups(), 1);
    }

    #[test]
    fn test_render_before_initialise_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let mut root = EngineRoot::new(paths_in(dir.path()));
        assert!(root.render_one_frame().is_ok());
    }

    #[test]
    fn test_shutdown_persists_config() {
        let dir = tempfile::tempdir().unwrap();
        let paths = paths_in(dir.path());
        {
            let mut root = EngineRoot::new(paths.clone());
            root.restore_config().unwrap();
            root.config_mut().video.render_system = "vulkan".to_string();
            // Dropping the root runs shutdown.
        }
        let restored = Config::restore_or_default(&paths.config_file).unwrap();
        assert_eq!(restored.video.render_system, "vulkan");
    }

    #[test]
    fn test_shutdown_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut root = EngineRoot::new(paths_in(dir.path()));
        root.restore_config().unwrap();
        root.shutdown();
        root.shutdown();
        assert!(!root.is_initialised());
    }

    #[test]
    fn test_unrestored_config_is_not_saved_on_shutdown() {
        let dir = tempfile::tempdir().unwrap();
        let paths = paths_in(dir.path());
        {
            let _root = EngineRoot::new(paths.clone());
            // restore_config never ran, so shutdown must not write defaults.
        }
        assert!(!paths.config_file.exists());
    }
}
