//! Run driver: validates the marketplace, then every discovered protocol,
//! and tallies one pass/fail per top-level target.

use std::path::Path;

use serde::Serialize;

use crate::config::{Config, MARKETPLACE_MANIFEST};
use crate::diagnostics::{Check, R001};
use crate::discovery::discover_protocols;
use crate::errors::Result;
use crate::fs_util::base_name;
use crate::reporter::Reporter;
use crate::validators::{validate_marketplace, validate_protocol};

/// Kind of top-level target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    Marketplace,
    Protocol,
}

/// Outcome of one top-level validator.
#[derive(Debug, Clone, Serialize)]
pub struct TargetReport {
    pub kind: TargetKind,
    pub name: String,
    pub ok: bool,
    pub checks: Vec<Check>,
}

/// Counters and per-target results for a whole run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Summary {
    pub passed: usize,
    pub failed: usize,
    pub targets: Vec<TargetReport>,
    /// Run-level warnings not tied to one target.
    pub notices: Vec<Check>,
}

impl Summary {
    /// Returns `true` if no top-level target failed.
    #[must_use]
    pub fn success(&self) -> bool {
        self.failed == 0
    }

    fn record(&mut self, report: TargetReport) {
        if report.ok {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
        self.targets.push(report);
    }
}

/// Validate everything under `config.root`.
///
/// Sub-skill failures do not count separately: the marketplace is one unit
/// and each protocol is one unit. Returns an error only when the root itself
/// cannot be listed.
pub fn run(config: &Config, reporter: &mut Reporter) -> Result<Summary> {
    let protocols = discover_protocols(config)?;
    let mut summary = Summary::default();

    reporter.banner("Marketplace Lint");
    reporter.heading(&format!("Marketplace ({MARKETPLACE_MANIFEST})"));
    let ok = validate_marketplace(&config.root, reporter);
    summary.record(TargetReport {
        kind: TargetKind::Marketplace,
        name: MARKETPLACE_MANIFEST.to_string(),
        ok,
        checks: reporter.take_checks(),
    });

    if protocols.is_empty() {
        reporter.heading("Protocols");
        reporter.warn(R001, "No protocols found");
        summary.notices = reporter.take_checks();
    }
    for dir in &protocols {
        summary.record(run_protocol(dir, reporter));
    }

    tracing::debug!(
        passed = summary.passed,
        failed = summary.failed,
        "run complete"
    );
    Ok(summary)
}

fn run_protocol(dir: &Path, reporter: &mut Reporter) -> TargetReport {
    let name = base_name(dir);
    reporter.heading(&format!("Protocol: {name}"));
    let ok = validate_protocol(dir, reporter);
    TargetReport {
        kind: TargetKind::Protocol,
        name,
        ok,
        checks: reporter.take_checks(),
    }
}
