//! Line Classification
//!
//! The per-line decision procedure: skip blank and comment lines, test
//! everything else against the assignment grammar. Stateless across lines.

use super::grammar;

/// Classification of a single input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    /// An empty or whitespace-only line
    Blank,
    /// A pure comment line, optionally indented by spaces or tabs
    Comment,
    /// A line matching the assignment grammar
    Assignment,
    /// Anything else
    Invalid,
}

impl LineClass {
    /// Whether the line is acceptable (never reported as a violation).
    pub fn is_acceptable(self) -> bool {
        self != LineClass::Invalid
    }
}

/// Classify one line. `line` must not include its terminator.
pub fn classify_line(line: &str) -> LineClass {
    if line.chars().all(char::is_whitespace) {
        return LineClass::Blank;
    }

    if let Some(hash) = line.find('#') {
        // Only spaces and tabs may precede the `#` of a comment line.
        if line[..hash].chars().all(|c| c == ' ' || c == '\t') {
            return LineClass::Comment;
        }
        // Possibly an assignment with a trailing comment, possibly a stray
        // `#`: the whole raw line decides, since the grammar already admits
        // a trailing `#...`.
        return if grammar::is_assignment(line) {
            LineClass::Assignment
        } else {
            LineClass::Invalid
        };
    }

    if grammar::is_assignment(line) {
        LineClass::Assignment
    } else {
        LineClass::Invalid
    }
}
