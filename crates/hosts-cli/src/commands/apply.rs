//! Apply command implementation
//!
//! Rewrites the managed region of a hosts file and prints the diff.

use std::path::Path;

use colored::Colorize;
use hosts_ops::{ApplyReport, Differ, GroupStore, apply_groups};

use crate::error::Result;

/// Run the apply command
pub fn run_apply(
    store: &GroupStore,
    hostsfile: &Path,
    dry_run: bool,
    differ: &dyn Differ,
) -> Result<()> {
    let report = apply_groups(store, hostsfile, dry_run, differ)?;
    print_diff(&report.diff);
    print_summary(&report, dry_run);
    Ok(())
}

/// Print a unified diff with coloured lines
fn print_diff(diff: &str) {
    for line in diff.lines() {
        let colored_line = if line.starts_with("+++") || line.starts_with("---") {
            line.bold()
        } else if line.starts_with('+') {
            line.green()
        } else if line.starts_with('-') {
            line.red()
        } else if line.starts_with("@@") {
            line.cyan()
        } else {
            line.normal()
        };
        println!("{}", colored_line);
    }
}

fn print_summary(report: &ApplyReport, dry_run: bool) {
    let path = report.path.display().to_string();
    if !report.changed {
        println!(
            "{} {} is up to date ({} active group(s)).",
            "OK".green().bold(),
            path.yellow(),
            report.groups
        );
    } else if dry_run {
        println!(
            "{} {} not modified. Run without {} to apply.",
            "[dry-run]".yellow().bold(),
            path.yellow(),
            "--dry-run".cyan()
        );
    } else {
        println!(
            "{} Wrote {} active group(s) to {}.",
            "OK".green().bold(),
            report.groups,
            path.yellow()
        );
    }
}
