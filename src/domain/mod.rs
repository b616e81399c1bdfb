//! Domain types for heatprops.
//!
//! - Material: material records, collections and heat properties

pub mod material;

// Re-export commonly used types
pub use material::{HeatProperties, MaterialCollection, MaterialRecord};
