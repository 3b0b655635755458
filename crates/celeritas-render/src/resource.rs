//! Resource group declaration and initialisation.
//!
//! Resource groups collect the filesystem locations the engine may load
//! assets from. The bootstrap only declares locations and initialises the
//! groups; nothing here loads actual assets.

use std::collections::BTreeMap;
use std::path::PathBuf;

/// The group every resource location belongs to unless told otherwise.
pub const DEFAULT_RESOURCE_GROUP: &str = "General";

/// Named groups of declared resource locations.
#[derive(Debug)]
pub struct ResourceGroupManager {
    groups: BTreeMap<String, Vec<PathBuf>>,
    initialised: bool,
}

impl Default for ResourceGroupManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceGroupManager {
    /// Create a manager with an empty default group.
    pub fn new() -> Self {
        let mut groups = BTreeMap::new();
        groups.insert(DEFAULT_RESOURCE_GROUP.to_string(), Vec::new());
        Self {
            groups,
            initialised: false,
        }
    }

    /// Declare a resource location in the named group, creating the group
    /// on first use.
    pub fn declare_location(&mut self, group: &str, location: PathBuf) {
        self.groups.entry(group.to_string()).or_default().push(location);
    }

    /// Initialise every declared group.
    ///
    /// Locations that do not exist on disk are warned about and skipped.
    /// Returns the number of usable locations across all groups. Safe to
    /// call more than once.
    pub fn initialise_all(&mut self) -> usize {
        let mut usable = 0;
        for (group, locations) in &self.groups {
            for location in locations {
                if location.is_dir() {
                    usable += 1;
                } else {
                    log::warn!(
                        "Resource location `{}` in group `{group}` does not exist, skipping",
                        location.display()
                    );
                }
            }
            log::info!(
                "Initialised resource group `{group}` ({} location(s))",
                locations.len()
            );
        }
        self.initialised = true;
        usable
    }

    /// Whether [`initialise_all`](Self::initialise_all) has run.
    pub fn is_initialised(&self) -> bool {
        self.initialised
    }

    /// The declared group names.
    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }
}
