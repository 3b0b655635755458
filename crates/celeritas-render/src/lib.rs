//! The Celeritas rendering engine boundary: engine root, GPU context,
//! plugin list, resource groups, scene managers, cameras, and viewports.
//!
//! The application constructs an [`EngineRoot`] from the three engine file
//! paths and drives the setup sequence through it; every engine-side handle
//! (window, scene manager, camera, viewport) stays owned by the root.

pub mod camera;
pub mod gpu;
pub mod plugin;
pub mod resource;
pub mod root;
pub mod scene;
pub mod window;

pub use camera::Camera;
pub use gpu::{RenderContext, RenderContextError, SurfaceError, init_render_context_blocking};
pub use plugin::{PluginError, PluginList};
pub use resource::{DEFAULT_RESOURCE_GROUP, ResourceGroupManager};
pub use root::{EngineError, EnginePaths, EngineRoot};
pub use scene::{SceneError, SceneManager, SceneManagerKind};
pub use window::{RenderWindow, Viewport};
