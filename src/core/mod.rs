//! Core Data Model
//!
//! Line extraction and the report types shared by the engine and the HTTP
//! surface.

pub mod line;
pub mod report;

pub use line::{Line, split_fields, split_lines};
pub use report::{LineOutcome, ValidationReport};
