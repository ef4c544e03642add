//! Protocol directory validation: descriptor, `skills/` layout, and every
//! skill inside it.

use std::path::Path;

use crate::config::{PLUGIN_DESCRIPTOR, REQUIRED_DESCRIPTOR_FIELDS, SKILLS_DIR};
use crate::diagnostics::{P001, P002, P003, P004, P005, P006};
use crate::fs_util::{base_name, list_subdirs};
use crate::json::{display_value, is_present, load_json};
use crate::reporter::Reporter;
use crate::validators::skill::validate_skill;

/// Validate the protocol directory `dir`.
///
/// A missing or unparsable descriptor, a missing `skills/` directory, or an
/// empty one fails immediately. Descriptor field checks never stop each other.
/// The result is the AND of the field checks and every skill.
pub fn validate_protocol(dir: &Path, reporter: &mut Reporter) -> bool {
    let descriptor = dir.join(PLUGIN_DESCRIPTOR);
    if !descriptor.exists() {
        return reporter.fail(P001, format!("missing {PLUGIN_DESCRIPTOR}"));
    }
    let Some(data) = load_json(&descriptor) else {
        return reporter.fail(P002, "plugin.json is not valid JSON");
    };

    let mut valid = true;
    for field in REQUIRED_DESCRIPTOR_FIELDS {
        if !is_present(data.get(*field)) {
            valid &= reporter.fail(P003, format!("plugin.json missing required field: {field}"));
        }
    }

    let dir_name = base_name(dir);
    if let Some(name) = data.get("name").filter(|v| is_present(Some(*v))) {
        let name = display_value(name);
        if name != dir_name {
            reporter.warn(
                P004,
                format!("plugin.json name \"{name}\" does not match directory \"{dir_name}\""),
            );
        }
    }

    if valid {
        let version = data.get("version").map(display_value).unwrap_or_default();
        reporter.pass(P003, format!("plugin.json valid (v{version})"));
    }

    let skills_dir = dir.join(SKILLS_DIR);
    if !skills_dir.is_dir() {
        return reporter.fail(P005, format!("missing {SKILLS_DIR}/ directory"));
    }
    let skills = match list_subdirs(&skills_dir) {
        Ok(s) => s,
        Err(e) => return reporter.fail(P006, format!("cannot read {SKILLS_DIR}/: {e}")),
    };
    if skills.is_empty() {
        return reporter.fail(P006, format!("no skill folders found in {SKILLS_DIR}/"));
    }
    tracing::debug!(protocol = %dir_name, count = skills.len(), "validating skills");

    for skill in &skills {
        valid &= validate_skill(&skills_dir, skill, reporter);
    }
    valid
}
