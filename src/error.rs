//! Error types for heatprops.
//!
//! Every failure is fatal for a run. Each variant maps to a distinct
//! process exit code so scripts driving the annotator can tell them apart.

use std::path::PathBuf;

use thiserror::Error;

/// Exit status for a wrong argument count or unknown flag
pub const EXIT_USAGE: u8 = 1;
/// Exit status for unreadable input or unwritable output
pub const EXIT_IO: u8 = 2;
/// Exit status for malformed input documents
pub const EXIT_PARSE: u8 = 3;
/// Exit status for a material name that matches no rule
pub const EXIT_CLASSIFICATION: u8 = 4;
/// Exit status for an input file over the configured size limit
pub const EXIT_INPUT_TOO_LARGE: u8 = 5;
/// Exit status for an unreadable or invalid config file
pub const EXIT_CONFIG: u8 = 6;

/// Errors that can occur while annotating a material file
#[derive(Debug, Error)]
pub enum HeatPropsError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid material file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize materials: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("no rules for material '{name}' (record {index})")]
    Unclassified { index: usize, name: String },

    #[error("input {} is {actual} bytes, limit is {limit}", path.display())]
    InputTooLarge {
        path: PathBuf,
        actual: u64,
        limit: u64,
    },

    #[error("config error: {0:#}")]
    Config(#[from] anyhow::Error),
}

impl HeatPropsError {
    /// Process exit status for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Read { .. } | Self::Write { .. } => EXIT_IO,
            Self::Parse { .. } | Self::Serialize(_) => EXIT_PARSE,
            Self::Unclassified { .. } => EXIT_CLASSIFICATION,
            Self::InputTooLarge { .. } => EXIT_INPUT_TOO_LARGE,
            Self::Config(_) => EXIT_CONFIG,
        }
    }
}

pub type Result<T> = std::result::Result<T, HeatPropsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unclassified_message_names_material() {
        let err = HeatPropsError::Unclassified {
            index: 2,
            name: "Mystery Alloy".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "no rules for material 'Mystery Alloy' (record 2)"
        );
        assert_eq!(err.exit_code(), EXIT_CLASSIFICATION);
    }

    #[test]
    fn test_exit_codes_are_distinct() {
        let codes = [
            EXIT_USAGE,
            EXIT_IO,
            EXIT_PARSE,
            EXIT_CLASSIFICATION,
            EXIT_INPUT_TOO_LARGE,
            EXIT_CONFIG,
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
            assert_ne!(*a, 0);
        }
    }
}
