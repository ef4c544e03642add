//! Repository layout constants and run configuration.

use std::path::{Path, PathBuf};

/// Marketplace manifest, relative to the repository root.
pub const MARKETPLACE_MANIFEST: &str = ".claude-plugin/marketplace.json";

/// Plugin descriptor, relative to a protocol directory.
pub const PLUGIN_DESCRIPTOR: &str = ".claude-plugin/plugin.json";

/// Skills directory inside a protocol directory.
pub const SKILLS_DIR: &str = "skills";

/// Skill document inside a skill folder.
pub const SKILL_FILE: &str = "SKILL.md";

/// Directory names never treated as protocols: shared resources and the
/// dependency cache.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &["shared", "node_modules"];

/// Fields every descriptor must carry.
pub const REQUIRED_DESCRIPTOR_FIELDS: &[&str] = &["name", "description", "version"];

/// Keys every skill frontmatter must carry.
pub const REQUIRED_FRONTMATTER_KEYS: &[&str] =
    &["name", "description", "user-invocable", "allowed-tools"];

/// Second-level headings every skill document must contain.
pub const REQUIRED_SECTIONS: &[&str] = &["Definition", "Phase Transitions"];

/// Settings for one lint run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Repository root containing `.claude-plugin/marketplace.json`.
    pub root: PathBuf,
    /// Directory names skipped by protocol discovery.
    pub excluded_dirs: Vec<String>,
}

impl Config {
    /// Configuration for `root` with the default exclusions.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            excluded_dirs: DEFAULT_EXCLUDED_DIRS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Add extra directory names to skip during discovery.
    #[must_use]
    pub fn with_excluded<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            let name = name.into();
            if !self.excluded_dirs.contains(&name) {
                self.excluded_dirs.push(name);
            }
        }
        self
    }

    /// Path to the marketplace manifest.
    #[must_use]
    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(MARKETPLACE_MANIFEST)
    }

    /// Returns `true` if discovery should skip the directory named `name`.
    #[must_use]
    pub fn is_excluded(&self, name: &str) -> bool {
        name.starts_with('.') || self.excluded_dirs.iter().any(|e| e == name)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Path::new("."))
    }
}
