//! Tool configuration.
//!
//! One JSON file drives the whole pipeline: the extractor reads its own
//! options (`include`, `exclude`, `propertyNameSource`) from it, and the
//! converter options are flattened into [`Config`] here. Keys either side
//! does not recognize are ignored.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use typeshift_codegen::Config;

use crate::error::ToolError;

/// The CLI's view of the shared configuration file.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ToolConfig {
    /// Source glob patterns, consumed by the extractor.
    pub include: Vec<String>,
    /// Exclusion glob patterns, consumed by the extractor.
    pub exclude: Vec<String>,
    /// Output path for the declaration file.
    pub output: Option<PathBuf>,
    /// Directory of the extractor's dotnet project.
    pub extractor: Option<PathBuf>,
    #[serde(flatten)]
    pub converter: Config,
}

impl ToolConfig {
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from("types.d.ts"))
    }

    pub fn extractor_project(&self) -> PathBuf {
        self.extractor
            .clone()
            .unwrap_or_else(|| PathBuf::from("lib/csharp-models-to-json"))
    }
}

/// Loads and parses the configuration file.
pub fn load(path: &Path) -> Result<ToolConfig, ToolError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ToolError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ToolError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}
