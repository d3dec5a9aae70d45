//! Failure taxonomy for the transform pipeline.
//!
//! Inner components never terminate the process; every failure travels
//! up as one of these variants and the binary edge maps it to exit
//! status 1. Diagnostics that span several lines (missing-input hints,
//! overwrite instructions) are assembled at that edge, not here.

use std::path::PathBuf;
use thiserror::Error;

/// Artifact kind referenced by an existence-guard failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    Directory,
    File,
}

impl TargetKind {
    pub fn label(self) -> &'static str {
        match self {
            TargetKind::Directory => "Directory",
            TargetKind::File => "File",
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    /// Requested input path does not exist.
    #[error("Input file '{requested}' does not exist.")]
    NotFound {
        /// Path exactly as the caller supplied it.
        requested: String,
        /// True when the requested path already was the type default.
        is_default: bool,
        /// Location of the type default, when it exists in the base dir.
        default_path: Option<PathBuf>,
        /// Base directory the lookup ran against.
        base: PathBuf,
    },

    /// Source text is not valid YAML. Carries the parser message verbatim.
    #[error("{message}")]
    Parse { message: String },

    /// Root shape missing or ambiguous, or an entry violates its schema.
    #[error("{message}")]
    Schema { message: String },

    /// Requested format name is not in the supported set.
    #[error("Format '{requested}' is not supported.")]
    UnsupportedFormat { requested: String },

    /// Output target already present and overwriting was not requested.
    #[error("{} '{path}' already exists.", .kind.label())]
    OutputExists { path: String, kind: TargetKind },

    /// File-system failure while reading or writing.
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}
