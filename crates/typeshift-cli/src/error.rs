//! CLI error types.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Errors surfaced by the typeshift CLI.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("configuration file {path} could not be read: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("configuration file {path} contains invalid JSON: {source}")]
    ConfigParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to launch the extractor (is dotnet installed?): {0}")]
    ExtractorLaunch(std::io::Error),

    #[error("the extractor exited with {status}: {stderr}")]
    ExtractorFailed { status: ExitStatus, stderr: String },

    #[error("the extractor output is not valid UTF-8: {0}")]
    ExtractorEncoding(#[from] std::string::FromUtf8Error),

    #[error("the extractor output contains invalid JSON: {0}")]
    ExtractorOutput(serde_json::Error),

    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
