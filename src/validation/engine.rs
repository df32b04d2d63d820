//! Validation Engine
//!
//! Whole-file checking built on the line classifier, separated from
//! parsing and presentation concerns.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use serde::Serialize;

use crate::parser::{classify_line, LineClass};

/// A single offending line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// 1-based physical line number
    pub line: usize,
    /// The offending line, trimmed of surrounding whitespace
    pub text: String,
}

/// Result of checking one file
///
/// Violations are strictly increasing in line number, in the order the
/// lines were read. A file is valid iff the list is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub violations: Vec<Violation>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            violations: Vec::new(),
        }
    }

    fn add_violation(&mut self, line: usize, text: &str) {
        self.violations.push(Violation {
            line,
            text: text.trim().to_string(),
        });
    }

    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Classify one line and record it if it fails the grammar.
fn validate_line(line_num: usize, line: &str, result: &mut ValidationResult) {
    match classify_line(line) {
        LineClass::Blank | LineClass::Comment | LineClass::Assignment => {}
        LineClass::Invalid => {
            log::debug!("line {line_num} failed the assignment grammar: {line:?}");
            result.add_violation(line_num, line);
        }
    }
}

/// Validate in-memory content, numbering lines from 1.
pub fn validate_text(content: &str) -> ValidationResult {
    let mut result = ValidationResult::new();

    for (idx, line) in content.lines().enumerate() {
        validate_line(idx + 1, line, &mut result);
    }

    result
}

/// Check a file on disk, streaming line by line.
///
/// The file handle is scoped to this call and released on every exit path.
/// An I/O failure aborts the check and is returned unchanged; a file full
/// of syntax errors is a successful check with `is_valid() == false`.
pub fn check_file<P: AsRef<Path>>(path: P) -> io::Result<ValidationResult> {
    let mut reader = BufReader::new(File::open(path)?);
    let mut result = ValidationResult::new();
    let mut buffer = String::new();
    let mut line_num = 0;

    loop {
        buffer.clear();
        if reader.read_line(&mut buffer)? == 0 {
            break;
        }
        line_num += 1;

        // Classification operates on content independent of the
        // line terminator, which the last line may lack.
        let line = buffer.trim_end_matches('\n').trim_end_matches('\r');
        validate_line(line_num, line, &mut result);
    }

    Ok(result)
}
