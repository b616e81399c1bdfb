//! Core annotation logic.
//!
//! This module contains:
//! - Rules: the fixed name-to-properties classification table
//! - Annotator: applies rules to records and collections
//! - Store: material file reading and rendering

pub mod annotator;
pub mod rules;
pub mod store;

// Re-export commonly used types
pub use annotator::{annotate_collection, annotate_record, AnnotationSummary};
pub use rules::{classify, Rule, RULES};
pub use store::{parse_collection, read_collection, render_collection, write_collection};
