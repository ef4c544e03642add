//! Marketplace manifest (`.claude-plugin/marketplace.json`) validation.

use std::path::Path;

use serde_json::Value;

use crate::config::MARKETPLACE_MANIFEST;
use crate::diagnostics::{M001, M002, M003, M004, M005, M006, M007};
use crate::fs_util::join_under;
use crate::json::{display_value, is_present, load_json};
use crate::reporter::Reporter;

/// Fields every plugin entry must carry.
const REQUIRED_ENTRY_FIELDS: &[&str] = &["name", "source", "description"];

/// Validate the marketplace manifest under `root`.
///
/// A missing or unparsable manifest fails immediately (M001/M002). Otherwise
/// every field check runs, and plugin `source` paths are resolved against
/// `root`.
pub fn validate_marketplace(root: &Path, reporter: &mut Reporter) -> bool {
    let path = root.join(MARKETPLACE_MANIFEST);
    if !path.exists() {
        return reporter.fail(M001, format!("missing {MARKETPLACE_MANIFEST}"));
    }
    let Some(data) = load_json(&path) else {
        return reporter.fail(M002, "marketplace.json is not valid JSON");
    };

    let mut valid = true;

    // M003: name
    valid &= match data.get("name").filter(|v| is_present(Some(*v))) {
        Some(name) => reporter.pass(M003, format!("name: {}", display_value(name))),
        None => reporter.fail(M003, "missing required field: name"),
    };

    // M004: owner.name
    let owner_name = data.get("owner").and_then(|o| o.get("name"));
    valid &= match owner_name.filter(|v| is_present(Some(*v))) {
        Some(owner) => reporter.pass(M004, format!("owner.name: {}", display_value(owner))),
        None => reporter.fail(M004, "missing required field: owner.name"),
    };

    // M005–M007: plugins
    match data.get("plugins").and_then(Value::as_array) {
        Some(plugins) => {
            valid &= reporter.pass(M005, format!("plugins: {} entries", plugins.len()));
            for entry in plugins {
                valid &= check_entry(root, entry, reporter);
            }
        }
        None => valid &= reporter.fail(M005, "plugins must be an array"),
    }

    valid
}

/// M006 + M007 for one `plugins[]` entry.
fn check_entry(root: &Path, entry: &Value, reporter: &mut Reporter) -> bool {
    let mut valid = true;

    let missing: Vec<&str> = REQUIRED_ENTRY_FIELDS
        .iter()
        .copied()
        .filter(|f| !is_present(entry.get(*f)))
        .collect();
    if !missing.is_empty() {
        valid &= reporter.fail(
            M006,
            format!("plugin entry missing {}: {entry}", missing.join(", ")),
        );
    }

    if let Some(source) = entry.get("source").filter(|v| is_present(Some(*v))) {
        let source = display_value(source);
        if !join_under(root, &source).exists() {
            let name = entry
                .get("name")
                .map(display_value)
                .unwrap_or_else(|| "<unnamed>".to_string());
            valid &= reporter.fail(M007, format!("plugin {name}: source not found: {source}"));
        }
    }

    valid
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    /// Write a marketplace.json under a fresh root and return the root.
    fn write_manifest(content: &str) -> tempfile::TempDir {
        let root = tempdir().unwrap();
        fs::create_dir(root.path().join(".claude-plugin")).unwrap();
        fs::write(root.path().join(MARKETPLACE_MANIFEST), content).unwrap();
        root
    }

    fn failures(r: &Reporter) -> Vec<&str> {
        r.checks()
            .iter()
            .filter(|c| c.is_fail())
            .map(|c| c.message.as_str())
            .collect()
    }

    #[test]
    fn valid_manifest_with_existing_sources() {
        let root = write_manifest(
            r#"{
                "name": "demo-market",
                "owner": { "name": "Demo" },
                "plugins": [
                    { "name": "proto1", "source": "./proto1", "description": "x" }
                ]
            }"#,
        );
        fs::create_dir(root.path().join("proto1")).unwrap();
        let mut r = Reporter::silent();
        assert!(validate_marketplace(root.path(), &mut r));
        assert!(failures(&r).is_empty());
        assert!(r.checks().iter().any(|c| c.message == "name: demo-market"));
        assert!(r.checks().iter().any(|c| c.message == "plugins: 1 entries"));
    }

    #[test]
    fn missing_manifest_short_circuits() {
        let root = tempdir().unwrap();
        let mut r = Reporter::silent();
        assert!(!validate_marketplace(root.path(), &mut r));
        assert_eq!(r.checks().len(), 1);
        assert_eq!(r.checks()[0].code, M001);
    }

    #[test]
    fn invalid_json_short_circuits() {
        let root = write_manifest("{ not json");
        let mut r = Reporter::silent();
        assert!(!validate_marketplace(root.path(), &mut r));
        assert_eq!(r.checks().len(), 1);
        assert_eq!(r.checks()[0].code, M002);
    }

    #[test]
    fn missing_owner_name_fails_without_short_circuit() {
        let root = write_manifest(r#"{ "name": "demo", "owner": {}, "plugins": [] }"#);
        let mut r = Reporter::silent();
        assert!(!validate_marketplace(root.path(), &mut r));
        assert_eq!(failures(&r), vec!["missing required field: owner.name"]);
        // name and plugins were still checked
        assert!(r.checks().iter().any(|c| c.code == M003 && c.is_pass()));
        assert!(r.checks().iter().any(|c| c.code == M005 && c.is_pass()));
    }

    #[test]
    fn every_failure_is_reported() {
        let root = write_manifest(r#"{ "plugins": "nope" }"#);
        let mut r = Reporter::silent();
        assert!(!validate_marketplace(root.path(), &mut r));
        let codes: Vec<_> = r.checks().iter().map(|c| c.code).collect();
        assert_eq!(codes, vec![M003, M004, M005]);
    }

    #[test]
    fn empty_name_is_missing() {
        let root = write_manifest(r#"{ "name": "", "owner": { "name": "x" }, "plugins": [] }"#);
        let mut r = Reporter::silent();
        assert!(!validate_marketplace(root.path(), &mut r));
        assert!(r.checks().iter().any(|c| c.code == M003 && c.is_fail()));
    }

    #[test]
    fn entry_missing_fields_includes_raw_entry() {
        let root = write_manifest(
            r#"{ "name": "demo", "owner": { "name": "x" }, "plugins": [ { "name": "lonely" } ] }"#,
        );
        let mut r = Reporter::silent();
        assert!(!validate_marketplace(root.path(), &mut r));
        let msg = failures(&r)[0];
        assert!(msg.contains("source, description"), "{msg}");
        assert!(msg.contains(r#"{"name":"lonely"}"#), "{msg}");
    }

    #[test]
    fn missing_source_path_names_plugin() {
        let root = write_manifest(
            r#"{ "name": "demo", "owner": { "name": "x" },
                 "plugins": [ { "name": "ghost", "source": "./ghost", "description": "x" } ] }"#,
        );
        let mut r = Reporter::silent();
        assert!(!validate_marketplace(root.path(), &mut r));
        assert_eq!(failures(&r), vec!["plugin ghost: source not found: ./ghost"]);
    }

    #[test]
    fn absolute_source_resolves_against_root() {
        let root = write_manifest(
            r#"{ "name": "demo", "owner": { "name": "x" },
                 "plugins": [ { "name": "proto1", "source": "/proto1", "description": "x" } ] }"#,
        );
        fs::create_dir(root.path().join("proto1")).unwrap();
        let mut r = Reporter::silent();
        assert!(validate_marketplace(root.path(), &mut r));
        assert!(failures(&r).is_empty());
    }

    #[test]
    fn source_checked_even_when_other_fields_missing() {
        let root = write_manifest(
            r#"{ "name": "demo", "owner": { "name": "x" }, "plugins": [ { "source": "./gone" } ] }"#,
        );
        let mut r = Reporter::silent();
        assert!(!validate_marketplace(root.path(), &mut r));
        let codes: Vec<_> = r
            .checks()
            .iter()
            .filter(|c| c.is_fail())
            .map(|c| c.code)
            .collect();
        assert_eq!(codes, vec![M006, M007]);
    }
}
