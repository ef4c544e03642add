use console::style;

use marketplace_lint::{Summary, RULE_WIDTH};

pub(crate) fn print_text(summary: &Summary) {
    let passed = style(format!("{} passed", summary.passed)).green();
    let failed = if summary.failed > 0 {
        style(format!("{} failed", summary.failed)).red()
    } else {
        style(format!("{} failed", summary.failed)).dim()
    };
    let rule = "=".repeat(RULE_WIDTH);
    println!("\n{rule}\n{}: {passed}, {failed}\n{rule}", style("Summary").bold());
}

pub(crate) fn print_json(summary: &Summary) {
    match serde_json::to_string_pretty(summary) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("marketplace-lint: cannot serialize report: {e}");
            std::process::exit(1);
        }
    }
}
