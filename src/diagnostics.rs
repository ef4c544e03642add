//! Structured check results with stable codes.
//!
//! Every pass, failure, or warning emitted by a validator is recorded as a
//! [`Check`] so the same run can be rendered as colored text or as JSON.

use std::fmt;

use serde::Serialize;

/// Outcome of a single rule check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// The rule holds.
    Pass,
    /// A rule violation that fails the enclosing validator.
    Fail,
    /// A potential issue that never affects the outcome.
    Warn,
}

/// A recorded rule check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Check {
    /// Outcome of the check.
    pub outcome: Outcome,
    /// Stable rule code (e.g., `"M003"`, `"P001"`, `"K005"`).
    pub code: &'static str,
    /// Human-readable message.
    pub message: String,
}

impl Check {
    /// Create a new check with the given outcome, code, and message.
    #[must_use]
    pub fn new(outcome: Outcome, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            outcome,
            code,
            message: message.into(),
        }
    }

    /// Returns `true` if this check passed.
    #[must_use]
    pub fn is_pass(&self) -> bool {
        self.outcome == Outcome::Pass
    }

    /// Returns `true` if this check failed.
    #[must_use]
    pub fn is_fail(&self) -> bool {
        self.outcome == Outcome::Fail
    }

    /// Returns `true` if this check is a warning.
    #[must_use]
    pub fn is_warn(&self) -> bool {
        self.outcome == Outcome::Warn
    }
}

/// Plain-text form, used in logs and tests:
/// - Pass: `"message"`
/// - Fail: `"error: message"`
/// - Warn: `"warning: message"`
impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            Outcome::Pass => write!(f, "{}", self.message),
            Outcome::Fail => write!(f, "error: {}", self.message),
            Outcome::Warn => write!(f, "warning: {}", self.message),
        }
    }
}

// ── Rule codes ──────────────────────────────────────────────────────────

// Marketplace manifest (M001–M007)

/// `.claude-plugin/marketplace.json` does not exist.
pub const M001: &str = "M001";
/// Manifest is not valid JSON.
pub const M002: &str = "M002";
/// Manifest `name` field.
pub const M003: &str = "M003";
/// Manifest `owner.name` field.
pub const M004: &str = "M004";
/// Manifest `plugins` must be an array.
pub const M005: &str = "M005";
/// Plugin entry is missing `name`, `source`, or `description`.
pub const M006: &str = "M006";
/// Plugin entry `source` path does not exist.
pub const M007: &str = "M007";

// Protocol descriptor and layout (P001–P006)

/// `.claude-plugin/plugin.json` does not exist.
pub const P001: &str = "P001";
/// Descriptor is not valid JSON.
pub const P002: &str = "P002";
/// Descriptor required fields (`name`, `description`, `version`).
pub const P003: &str = "P003";
/// Descriptor `name` does not match the directory name.
pub const P004: &str = "P004";
/// `skills/` directory does not exist.
pub const P005: &str = "P005";
/// `skills/` contains no skill folders.
pub const P006: &str = "P006";

// Skill documents (K000–K005)

/// Skill passed every check.
pub const K000: &str = "K000";
/// `SKILL.md` does not exist.
pub const K001: &str = "K001";
/// `SKILL.md` has no frontmatter block.
pub const K002: &str = "K002";
/// Frontmatter is missing a required key.
pub const K003: &str = "K003";
/// Frontmatter `name` does not match the folder name.
pub const K004: &str = "K004";
/// A required section heading is missing.
pub const K005: &str = "K005";

// Run-level notices (R001)

/// Discovery found no protocol directories.
pub const R001: &str = "R001";
