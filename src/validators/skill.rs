//! Skill document (`skills/<skill>/SKILL.md`) validation.

use std::path::Path;

use crate::config::{REQUIRED_FRONTMATTER_KEYS, REQUIRED_SECTIONS, SKILL_FILE};
use crate::diagnostics::{K000, K001, K002, K003, K004, K005};
use crate::parser::{has_section, parse_frontmatter};
use crate::reporter::Reporter;

/// Validate the skill folder `name` inside `skills_dir`.
///
/// Only a missing `SKILL.md` stops early. Frontmatter and section checks all
/// run; a `name` that differs from the folder is a warning. One consolidated
/// pass (K000) is recorded when nothing failed.
pub fn validate_skill(skills_dir: &Path, name: &str, reporter: &mut Reporter) -> bool {
    let label = format!("skills/{name}");
    let path = skills_dir.join(name).join(SKILL_FILE);
    if !path.is_file() {
        return reporter.fail(K001, format!("{label}: missing {SKILL_FILE}"));
    }
    // Invalid UTF-8 is replaced, not rejected; only I/O errors fail here.
    let content = match std::fs::read(&path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) => return reporter.fail(K001, format!("{label}: cannot read {SKILL_FILE}: {e}")),
    };
    tracing::debug!(skill = name, "validating skill");

    let mut valid = true;

    match parse_frontmatter(&content) {
        None => valid &= reporter.fail(K002, format!("{label}: missing frontmatter")),
        Some(fm) => {
            for key in REQUIRED_FRONTMATTER_KEYS {
                if !fm.contains_key(*key) {
                    valid &= reporter.fail(
                        K003,
                        format!("{label}: frontmatter missing required key: {key}"),
                    );
                }
            }
            if let Some(fm_name) = fm.get("name") {
                if fm_name.as_text() != Some(name) {
                    reporter.warn(
                        K004,
                        format!("{label}: frontmatter name \"{fm_name}\" does not match folder"),
                    );
                }
            }
        }
    }

    for section in REQUIRED_SECTIONS {
        if !has_section(&content, section) {
            valid &= reporter.fail(K005, format!("{label}: missing section: ## {section}"));
        }
    }

    if valid {
        reporter.pass(K000, format!("{label}: valid"));
    }
    valid
}
