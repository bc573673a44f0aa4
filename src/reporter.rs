//! Report formatting and printing utilities.
//!
//! Kept separate from the session logic so xpot can be used as a library
//! without printing side effects.

use colored::Colorize;

use crate::issues::{SessionIssue, Severity};
use crate::session::LocaleOutcome;

/// Success mark for consistent output formatting
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓
/// Failure mark for consistent output formatting
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Everything worth telling the user about one extraction run.
pub struct RunReport {
    pub files_processed: usize,
    pub message_count: usize,
    pub reference_count: usize,
    pub outcomes: Vec<LocaleOutcome>,
    pub issues: Vec<SessionIssue>,
}

impl RunReport {
    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity() == Severity::Error)
            .count()
    }
}

/// Print a run report in a cargo-style format.
pub fn print_report(report: &RunReport) {
    for issue in &report.issues {
        let severity_str = match issue.severity() {
            Severity::Error => "error".bold().red(),
            Severity::Warning => "warning".bold().yellow(),
        };
        println!("{}: {}", severity_str, issue.message());
        println!("  {} {}", "-->".blue(), issue.file_path());
    }
    if !report.issues.is_empty() {
        println!();
    }

    for outcome in &report.outcomes {
        let status = if outcome.written {
            "written".green()
        } else {
            "unchanged".dimmed()
        };
        println!(
            "  {}: {} messages ({})",
            outcome.path.display(),
            outcome.messages,
            status
        );
    }

    let mark = if report.error_count() > 0 {
        FAILURE_MARK.red()
    } else {
        SUCCESS_MARK.green()
    };
    println!(
        "{} {} files scanned, {} messages, {} references",
        mark, report.files_processed, report.message_count, report.reference_count
    );

    let error_count = report.error_count();
    if error_count > 0 {
        println!(
            "{} {} file(s) skipped due to extraction errors",
            "warning:".bold().yellow(),
            error_count
        );
    }
}
