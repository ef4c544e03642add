//! Protocol directory discovery.
//!
//! A protocol is an immediate subdirectory of the repository root that holds
//! `.claude-plugin/plugin.json`. Directories named by a marketplace entry's
//! `source` are candidates too, so a registered plugin that lost its
//! descriptor is still validated and reported.

use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

use serde_json::Value;

use crate::config::{Config, PLUGIN_DESCRIPTOR};
use crate::errors::{LintError, Result};
use crate::fs_util::{base_name, list_subdirs};
use crate::json::load_json;

/// Find every protocol directory under `config.root`, sorted by name.
///
/// Fails only when the root itself cannot be listed.
pub fn discover_protocols(config: &Config) -> Result<Vec<PathBuf>> {
    if !config.root.is_dir() {
        return Err(LintError::NotADirectory {
            path: config.root.clone(),
        });
    }

    let mut candidates = Vec::new();
    for name in list_subdirs(&config.root)? {
        if config.is_excluded(&name) {
            tracing::trace!(%name, "excluded from discovery");
            continue;
        }
        let dir = config.root.join(&name);
        if dir.join(PLUGIN_DESCRIPTOR).exists() {
            candidates.push(dir);
        }
    }
    candidates.extend(listed_sources(config));

    let mut seen = HashSet::new();
    candidates.retain(|dir| seen.insert(dir.canonicalize().unwrap_or_else(|_| dir.clone())));
    candidates.sort_by_key(|dir| base_name(dir));

    tracing::debug!(count = candidates.len(), "discovered protocols");
    Ok(candidates)
}

/// Directories named by marketplace `plugins[].source` that are immediate,
/// non-excluded children of the root.
fn listed_sources(config: &Config) -> Vec<PathBuf> {
    let Some(manifest) = load_json(&config.manifest_path()) else {
        return Vec::new();
    };
    let Some(plugins) = manifest.get("plugins").and_then(Value::as_array) else {
        return Vec::new();
    };

    plugins
        .iter()
        .filter_map(|p| p.get("source").and_then(Value::as_str))
        .filter_map(single_component)
        .filter(|name| !config.is_excluded(name))
        .map(|name| config.root.join(name))
        .filter(|dir| dir.is_dir())
        .collect()
}

/// `"./proto1"`, `"/proto1"`, and `"proto1/"` become `"proto1"`; anything
/// reaching outside a single child of the root yields `None`.
fn single_component(source: &str) -> Option<&str> {
    let mut normal = None;
    for component in Path::new(source).components() {
        match component {
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
            Component::Normal(name) if normal.is_none() => normal = name.to_str(),
            _ => return None,
        }
    }
    normal
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn make_protocol(root: &Path, name: &str) {
        let dir = root.join(name).join(".claude-plugin");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("plugin.json"), "{}").unwrap();
    }

    fn names(dirs: &[PathBuf]) -> Vec<String> {
        dirs.iter().map(|d| base_name(d)).collect()
    }

    #[test]
    fn finds_directories_with_descriptor_sorted() {
        let root = tempdir().unwrap();
        make_protocol(root.path(), "zulu");
        make_protocol(root.path(), "alpha");
        fs::create_dir(root.path().join("docs")).unwrap();
        let found = discover_protocols(&Config::new(root.path())).unwrap();
        assert_eq!(names(&found), vec!["alpha", "zulu"]);
    }

    #[test]
    fn skips_hidden_and_excluded_directories() {
        let root = tempdir().unwrap();
        make_protocol(root.path(), ".hidden");
        make_protocol(root.path(), "shared");
        make_protocol(root.path(), "node_modules");
        make_protocol(root.path(), "drafts");
        make_protocol(root.path(), "real");
        let config = Config::new(root.path()).with_excluded(["drafts"]);
        let found = discover_protocols(&config).unwrap();
        assert_eq!(names(&found), vec!["real"]);
    }

    #[test]
    fn listed_source_without_descriptor_is_candidate() {
        let root = tempdir().unwrap();
        fs::create_dir_all(root.path().join(".claude-plugin")).unwrap();
        fs::write(
            root.path().join(".claude-plugin/marketplace.json"),
            r#"{ "plugins": [ { "name": "p", "source": "./proto1" }, { "source": "./" } ] }"#,
        )
        .unwrap();
        fs::create_dir(root.path().join("proto1")).unwrap();
        let found = discover_protocols(&Config::new(root.path())).unwrap();
        assert_eq!(names(&found), vec!["proto1"]);
    }

    #[test]
    fn listed_and_discovered_are_deduplicated() {
        let root = tempdir().unwrap();
        fs::create_dir_all(root.path().join(".claude-plugin")).unwrap();
        fs::write(
            root.path().join(".claude-plugin/marketplace.json"),
            r#"{ "plugins": [ { "source": "./proto1" }, { "source": "proto1/" } ] }"#,
        )
        .unwrap();
        make_protocol(root.path(), "proto1");
        let found = discover_protocols(&Config::new(root.path())).unwrap();
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn missing_root_errors() {
        let err = discover_protocols(&Config::new("/nonexistent/root")).unwrap_err();
        assert!(matches!(err, LintError::NotADirectory { .. }));
    }

    #[test]
    fn single_component_normalizes() {
        assert_eq!(single_component("./proto1"), Some("proto1"));
        assert_eq!(single_component("proto1/"), Some("proto1"));
        assert_eq!(single_component("./"), None);
        assert_eq!(single_component("../elsewhere"), None);
        assert_eq!(single_component("a/b"), None);
        assert_eq!(single_component("/abs"), Some("abs"));
        assert_eq!(single_component("/"), None);
    }
}
