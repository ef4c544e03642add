//! Pass/fail/warn primitives shared by every validator.
//!
//! A [`Reporter`] records each check and, when echoing, prints it as soon as
//! it is made. `pass` and `fail` return the check's boolean so validators can
//! accumulate with `valid &= reporter.fail(..)`: the call always runs before
//! the combine, so no message is skipped once `valid` is already false.

use console::{style, StyledObject};

use crate::diagnostics::{Check, Outcome};

/// Width of the `=` rules around the text report.
pub const RULE_WIDTH: usize = 50;

/// Records rule checks for one run and optionally echoes them to stdout.
#[derive(Debug, Default)]
pub struct Reporter {
    echo: bool,
    checks: Vec<Check>,
}

impl Reporter {
    /// A reporter that prints every check as it is recorded.
    #[must_use]
    pub fn echoing() -> Self {
        Self {
            echo: true,
            checks: Vec::new(),
        }
    }

    /// A reporter that only records.
    #[must_use]
    pub fn silent() -> Self {
        Self::default()
    }

    /// Print the report title between two `=` rules.
    pub fn banner(&self, title: &str) {
        if self.echo {
            let rule = "=".repeat(RULE_WIDTH);
            println!("{rule}\n{}\n{rule}", style(title).bold());
        }
    }

    /// Print a heading for the next validated target.
    pub fn heading(&self, title: &str) {
        if self.echo {
            println!("\n{}", style(title).bold());
        }
    }

    /// Record a passing check. Always returns `true`.
    pub fn pass(&mut self, code: &'static str, message: impl Into<String>) -> bool {
        self.record(Outcome::Pass, code, message.into());
        true
    }

    /// Record a failing check. Always returns `false`.
    pub fn fail(&mut self, code: &'static str, message: impl Into<String>) -> bool {
        self.record(Outcome::Fail, code, message.into());
        false
    }

    /// Record a warning. Warnings never affect the outcome.
    pub fn warn(&mut self, code: &'static str, message: impl Into<String>) {
        self.record(Outcome::Warn, code, message.into());
    }

    /// Checks recorded since the last [`take_checks`](Self::take_checks).
    #[must_use]
    pub fn checks(&self) -> &[Check] {
        &self.checks
    }

    /// Drain the recorded checks, e.g. at the end of one target.
    pub fn take_checks(&mut self) -> Vec<Check> {
        std::mem::take(&mut self.checks)
    }

    fn record(&mut self, outcome: Outcome, code: &'static str, message: String) {
        tracing::trace!(code, ?outcome, "{message}");
        if self.echo {
            println!("  {} {message}", marker(outcome));
        }
        self.checks.push(Check::new(outcome, code, message));
    }
}

fn marker(outcome: Outcome) -> StyledObject<&'static str> {
    match outcome {
        Outcome::Pass => style("✓").green(),
        Outcome::Fail => style("✗").red(),
        Outcome::Warn => style("⚠").yellow(),
    }
}
