//! rc.conf Line Parser
//!
//! Classification of single configuration lines against the assignment
//! grammar. No file I/O or reporting concerns here.

pub mod classify;
pub mod grammar;

pub use classify::{classify_line, LineClass};
pub use grammar::is_assignment;
