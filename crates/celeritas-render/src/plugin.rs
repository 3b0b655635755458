//! Engine plugin list.
//!
//! The plugin list file names the render system plugins to load, one per
//! line (`#` starts a comment). Each known plugin maps to a GPU backend;
//! unsupported names are warned about and skipped. A missing file loads
//! every built-in plugin.

use std::path::Path;

/// Error type for plugin list loading failures.
#[derive(Debug, thiserror::Error)]
pub enum PluginError {
    /// Failed to read the plugin list file from disk.
    #[error("failed to read plugin list: {0}")]
    ReadError(#[source] std::io::Error),
}

/// The render system plugins known to the engine and their backend mapping.
const BUILTIN_PLUGINS: &[(&str, wgpu::Backends)] = &[
    ("vulkan", wgpu::Backends::VULKAN),
    ("gl", wgpu::Backends::GL),
    ("dx12", wgpu::Backends::DX12),
    ("metal", wgpu::Backends::METAL),
];

/// The set of loaded render system plugins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginList {
    names: Vec<String>,
    backends: wgpu::Backends,
}

impl PluginList {
    /// Load the plugin list from the given file.
    ///
    /// A missing file is not an error: it loads every built-in plugin.
    pub fn load(path: &Path) -> Result<Self, PluginError> {
        if !path.exists() {
            log::info!(
                "Missing plugin list `{}`, loading all built-in render system plugins",
                path.display()
            );
            return Ok(Self::all());
        }
        let contents = std::fs::read_to_string(path).map_err(PluginError::ReadError)?;
        Ok(Self::parse(&contents))
    }

    /// Parse a plugin list from text. Unsupported names are warned and
    /// skipped; an empty result falls back to every built-in plugin.
    pub fn parse(contents: &str) -> Self {
        let mut names = Vec::new();
        let mut backends = wgpu::Backends::empty();

        for line in contents.lines() {
            let name = line.split('#').next().unwrap_or("").trim();
            if name.is_empty() {
                continue;
            }
            match BUILTIN_PLUGINS
                .iter()
                .find(|(known, _)| known.eq_ignore_ascii_case(name))
            {
                Some((known, backend)) => {
                    if !names.iter().any(|n| n == known) {
                        names.push((*known).to_string());
                        backends |= *backend;
                    }
                }
                None => {
                    log::warn!("Unsupported render system plugin `{name}`, skipping");
                }
            }
        }

        if names.is_empty() {
            log::warn!("Plugin list names no usable plugins, loading all built-ins");
            return Self::all();
        }
        Self { names, backends }
    }

    /// Every built-in render system plugin.
    pub fn all() -> Self {
        Self {
            names: BUILTIN_PLUGINS.iter().map(|(n, _)| (*n).to_string()).collect(),
            backends: BUILTIN_PLUGINS
                .iter()
                .fold(wgpu::Backends::empty(), |acc, (_, b)| acc | *b),
        }
    }

    /// The loaded plugin names, in file order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// The combined backend mask of all loaded plugins.
    pub fn backends(&self) -> wgpu::Backends {
        self.backends
    }

    /// The backend mask for a configured render system name.
    ///
    /// `auto` (or an unknown name, with a warning) selects every loaded
    /// plugin; a specific name selects that plugin's backend.
    pub fn backends_for(&self, render_system: &str) -> wgpu::Backends {
        if render_system.eq_ignore_ascii_case("auto") {
            return self.backends;
        }
        match self
            .names
            .iter()
            .position(|n| n.eq_ignore_ascii_case(render_system))
            .and_then(|_| {
                BUILTIN_PLUGINS
                    .iter()
                    .find(|(known, _)| known.eq_ignore_ascii_case(render_system))
            }) {
            Some((_, backend)) => *backend,
            None => {
                log::warn!(
                    "Render system `{render_system}` is not among the loaded plugins, \
                     selecting among all of them"
                );
                self.backends
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_plugins() {
        let plugins = PluginList::parse("vulkan\ngl\n");
        assert_eq!(plugins.names(), ["vulkan", "gl"]);
        assert_eq!(
            plugins.backends(),
            wgpu::Backends::VULKAN | wgpu::Backends::GL
        );
    }

    #[test]
    fn test_parse_skips_unknown_plugins() {
        let plugins = PluginList::parse("vulkan\nRenderSystem_Direct3D9\n");
        assert_eq!(plugins.names(), ["vulkan"]);
        assert_eq!(plugins.backends(), wgpu::Backends::VULKAN);
    }

    #[test]
    fn test_parse_comments_and_blank_lines() {
        let plugins = PluginList::parse("# render systems\n\nmetal # apple only\n");
        assert_eq!(plugins.names(), ["metal"]);
    }

    #[test]
    fn test_parse_deduplicates() {
        let plugins = PluginList::parse("gl\nGL\ngl\n");
        assert_eq!(plugins.names(), ["gl"]);
    }

    #[test]
    fn test_empty_list_falls_back_to_all() {
        let plugins = PluginList::parse("# nothing here\n");
        assert_eq!(plugins, PluginList::all());
        assert!(!plugins.backends().is_empty());
    }

    #[test]
    fn test_missing_file_loads_all() {
        let dir = tempfile::tempdir().unwrap();
        let plugins = PluginList::load(&dir.path().join("absent.cfg")).unwrap();
        assert_eq!(plugins, PluginList::all());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plugins.cfg");
        std::fs::write(&path, "dx12\nvulkan\n").unwrap();
        let plugins = PluginList::load(&path).unwrap();
        assert_eq!(plugins.names(), ["dx12", "vulkan"]);
    }

    #[test]
    fn test_backends_for_auto() {
        let plugins = PluginList::parse("vulkan\ngl\n");
        assert_eq!(plugins.backends_for("auto"), plugins.backends());
    }

    #[test]
    fn test_backends_for_specific_system() {
        let plugins = PluginList::parse("vulkan\ngl\n");
        assert_eq!(plugins.backends_for("gl"), wgpu::Backends::GL);
    }

    #[test]
    fn test_backends_for_unloaded_system_falls_back() {
        let plugins = PluginList::parse("vulkan\n");
        assert_eq!(plugins.backends_for("metal"), plugins.backends());
    }
}
