//! heatprops - Material heat-property annotator
//!
//! Reads a JSON array of material records, assigns ignition temperature,
//! melting temperature, thermal conductivity and combustion type to each
//! one from a fixed name-keyword table, and writes the annotated array.
//!
//! # Architecture
//!
//! The run is a single synchronous pass:
//! - Records are read and validated (every record needs a string `name`)
//! - Each name is classified by the first rule whose keyword it contains
//! - The whole collection is rendered, then written in one go
//!
//! A name that matches no rule fails the entire run and nothing is written.
//!
//! # Modules
//!
//! - `core`: Rule table, annotator, material file I/O
//! - `domain`: Data structures (MaterialRecord, MaterialCollection, HeatProperties)
//! - `config`: Layered settings (env, config file, defaults)
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! heatprops materials.json materials_annotated.json
//!
//! # Check classification without writing
//! heatprops --dry-run materials.json /dev/null
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod error;

// Re-export main types at crate root for convenience
pub use crate::core::{annotate_collection, classify, AnnotationSummary, Rule, RULES};
pub use crate::domain::{HeatProperties, MaterialCollection, MaterialRecord};
pub use crate::error::{HeatPropsError, Result};
