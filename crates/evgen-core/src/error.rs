//! Unified error types for evgen.

use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur while generating an event class.
#[derive(Error, Debug)]
pub enum EvgenError {
    // --- Input ---

    /// The class name is empty or contains characters that cannot appear in an identifier.
    #[error("invalid class name {name:?}: {reason}")]
    InvalidInput { name: String, reason: String },

    /// The class name does not start with one of the category letters `A`, `M` or `G`.
    #[error("Event name doesn't match A_ctor M_ap or G_ame naming convention! (got {0:?})")]
    UnsupportedCategory(String),

    // --- Templates ---

    /// A template file could not be read from the template directory.
    #[error("template not found at {path}")]
    TemplateNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // --- Configuration ---

    /// An explicitly requested configuration file was not found.
    #[error("config file not found at {path}")]
    ConfigNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file exists but contains invalid JSON.
    #[error("failed to parse config at {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // --- General ---

    /// A filesystem I/O error, typically while writing output files.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Alias for `Result<T, EvgenError>`.
pub type Result<T> = std::result::Result<T, EvgenError>;
