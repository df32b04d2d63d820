//! Validation
//!
//! Clean separation of whole-file checking from line classification and
//! report rendering.

pub mod engine;

pub use engine::{check_file, validate_text, Violation};

// Re-export common types
pub use engine::ValidationResult;
