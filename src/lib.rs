pub mod config;
pub mod diagnostics;
pub mod discovery;
pub mod errors;
mod fs_util;
pub mod json;
pub mod parser;
pub mod reporter;
pub mod runner;
pub mod validators;

// Re-export key types at crate root for convenience.
pub use config::Config;
pub use diagnostics::{Check, Outcome};
pub use discovery::discover_protocols;
pub use errors::{LintError, Result};
pub use json::load_json;
pub use parser::{parse_frontmatter, Frontmatter, FrontmatterValue};
pub use reporter::{Reporter, RULE_WIDTH};
pub use runner::{run, Summary, TargetKind, TargetReport};
pub use validators::{validate_marketplace, validate_protocol, validate_skill};
