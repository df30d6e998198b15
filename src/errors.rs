//! Error types for the graph edit distance engine.

mod assignment_error;
mod ged_error;

pub use assignment_error::AssignmentError;
pub use ged_error::GedError;
