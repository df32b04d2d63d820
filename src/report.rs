//! Report Rendering
//!
//! Turns a `ValidationResult` into user-facing output. Checking computes,
//! reporting presents; the two never mix.

use std::path::Path;

use serde::Serialize;

use crate::config::ReportFormat;
use crate::validation::{ValidationResult, Violation};

/// Confirmation message for a clean file.
pub fn render_success(path: &Path) -> String {
    format!("File {} contains no syntax errors.", path.display())
}

/// Violation report: a header line followed by one `<path>:<line> <text>`
/// entry per violation, in line order.
pub fn render_violations(path: &Path, result: &ValidationResult) -> String {
    let mut out = String::from("The following syntax errors were detected in your config file:");
    for violation in &result.violations {
        out.push_str(&format!(
            "\n{}:{} {}",
            path.display(),
            violation.line,
            violation.text
        ));
    }
    out
}

/// Machine-readable report for editor integration
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    file: String,
    valid: bool,
    violations: &'a [Violation],
}

/// Render the result as a single JSON object.
pub fn render_json(path: &Path, result: &ValidationResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport {
        file: path.display().to_string(),
        valid: result.is_valid(),
        violations: &result.violations,
    })
}

/// Print the report for one check: confirmation and JSON go to stdout,
/// the violation listing goes to the diagnostic stream.
pub fn emit(path: &Path, format: ReportFormat, result: &ValidationResult) -> anyhow::Result<()> {
    match format {
        ReportFormat::Text => {
            if result.is_valid() {
                println!("{}", render_success(path));
            } else {
                eprintln!("{}", render_violations(path, result));
            }
        }
        ReportFormat::Json => {
            println!("{}", render_json(path, result)?);
        }
    }
    Ok(())
}
