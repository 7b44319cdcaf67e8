//! Invocation of the external `csharp-models-to-json` extractor.
//!
//! The extractor is a dotnet project that walks C# syntax trees and prints
//! one JSON array of file records to stdout. It reads its own options from
//! the same configuration file the converter uses.

use std::path::Path;
use std::process::Command;
use std::time::Instant;

use crate::error::ToolError;

/// Runs the extractor and returns its stdout.
pub fn run(project: &Path, config_path: &Path) -> Result<String, ToolError> {
    tracing::debug!(project = %project.display(), "running extractor");
    let started = Instant::now();

    let output = Command::new("dotnet")
        .arg("run")
        .arg("--project")
        .arg(project)
        .arg(config_path)
        .output()
        .map_err(ToolError::ExtractorLaunch)?;

    tracing::debug!(
        elapsed_ms = started.elapsed().as_millis() as u64,
        status = %output.status,
        "extractor finished"
    );

    if !output.status.success() {
        return Err(ToolError::ExtractorFailed {
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    Ok(String::from_utf8(output.stdout)?)
}
