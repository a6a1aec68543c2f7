// src/error.rs

//! Error types surfaced by the library. The binary wraps these in `anyhow`.

use crate::state::StateCode;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal configuration errors that abort a render before the canvas is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("theme '{0}' is not registered")]
    UnknownTheme(String),

    #[error("theme '{theme}' defines no color for state {state}")]
    UndefinedColorForState { theme: String, state: StateCode },

    #[error("canvas dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

/// Failures while serializing or persisting a canvas.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("canvas has no palette entries to encode")]
    EmptyPalette,

    #[error("PNG encoding failed: {0}")]
    Png(#[from] png::EncodingError),

    #[error("failed to write image to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A token in a sample listing that is not an integer state code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid sample '{token}' at position {position}")]
pub struct SampleParseError {
    pub token: String,
    pub position: usize,
}

/// Failures while loading the JSON configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
