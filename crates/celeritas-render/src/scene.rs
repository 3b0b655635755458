//! Scene managers and the cameras they own.
//!
//! A scene manager is created from a named implementation and owns its
//! cameras; callers only hold transient references for configuration.

use std::collections::HashMap;
use std::str::FromStr;

use crate::camera::Camera;

/// Errors from scene manager operations.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    /// The requested scene manager implementation is not registered.
    #[error("unknown scene manager implementation `{0}`")]
    UnknownKind(String),

    /// A camera with this name already exists in the scene manager.
    #[error("a camera named `{0}` already exists")]
    DuplicateCamera(String),
}

/// The registered scene manager implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneManagerKind {
    /// The default implementation with no spatial acceleration.
    Generic,
    /// Octree-partitioned implementation.
    Octree,
}

impl FromStr for SceneManagerKind {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "generic" => Ok(Self::Generic),
            "octree" => Ok(Self::Octree),
            _ => Err(SceneError::UnknownKind(s.to_string())),
        }
    }
}

/// A named scene manager owning its cameras.
#[derive(Debug)]
pub struct SceneManager {
    name: String,
    kind: SceneManagerKind,
    cameras: HashMap<String, Camera>,
}

impl SceneManager {
    /// Create a scene manager of the named implementation.
    pub fn create(kind: &str, name: &str) -> Result<Self, SceneError> {
        let kind = kind.parse()?;
        Ok(Self {
            name: name.to_string(),
            kind,
            cameras: HashMap::new(),
        })
    }

    /// The scene manager's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The implementation this scene manager was created from.
    pub fn kind(&self) -> SceneManagerKind {
        self.kind
    }

    /// Create a camera owned by this scene manager and return a reference
    /// for configuration.
    pub fn create_camera(&mut self, name: &str) -> Result<&mut Camera, SceneError> {
        if self.cameras.contains_key(name) {
            return Err(SceneError::DuplicateCamera(name.to_string()));
        }
        Ok(self
            .cameras
            .entry(name.to_string())
            .or_insert_with(Camera::default))
    }

    /// Look up a camera by name.
    pub fn camera(&self, name: &str) -> Option<&Camera> {
        self.cameras.get(name)
    }

    /// Look up a camera by name for mutation.
    pub fn camera_mut(&mut self, name: &str) -> Option<&mut Camera> {
        self.cameras.get_mut(name)
    }

    /// Iterate over all cameras for bulk updates (e.g. aspect ratio on
    /// window resize).
    pub fn cameras_mut(&mut self) -> impl Iterator<Item = &mut Camera> {
        self.cameras.values_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_known_kinds_parse() {
        assert_eq!(
            "generic".parse::<SceneManagerKind>().unwrap(),
            SceneManagerKind::Generic
        );
        assert_eq!(
            "Octree".parse::<SceneManagerKind>().unwrap(),
            SceneManagerKind::Octree
        );
    }

    #[test]
    fn test_unknown_kind_is_an_error() {
        let err = SceneManager::create("bsp", "primary").unwrap_err();
        assert!(matches!(err, SceneError::UnknownKind(kind) if kind == "bsp"));
    }

    #[test]
    fn test_create_camera_and_configure() {
        let mut scene = SceneManager::create("octree", "primary").unwrap();
        assert_eq!(scene.name(), "primary");
        assert_eq!(scene.kind(), SceneManagerKind::Octree);

        let camera = scene.create_camera("main_camera").unwrap();
        camera.position = Vec3::ZERO;
        camera.look_at(Vec3::new(0.0, 0.0, -300.0));
        camera.set_near_clip(5.0);

        let camera = scene.camera("main_camera").unwrap();
        assert_eq!(camera.position, Vec3::ZERO);
        assert_eq!(camera.near, 5.0);
        assert!((camera.forward() - Vec3::NEG_Z).length() < 1e-5);
    }

    #[test]
    fn test_duplicate_camera_name_is_an_error() {
        let mut scene = SceneManager::create("generic", "primary").unwrap();
        scene.create_camera("main_camera").unwrap();
        let err = scene.create_camera("main_camera").unwrap_err();
        assert!(matches!(err, SceneError::DuplicateCamera(name) if name == "main_camera"));
    }

    #[test]
    fn test_unknown_camera_lookup() {
        let scene = SceneManager::create("generic", "primary").unwrap();
        assert!(scene.camera("absent").is_none());
    }
}
