//! typeshift CLI.
//!
//! Reads the shared JSON configuration, runs the C# extractor, converts its
//! output to TypeScript declarations, and writes the declaration file.

mod config;
mod error;
mod extractor;

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use typeshift_ast::FileRecord;
use typeshift_codegen::Converter;

use crate::error::ToolError;

#[derive(Parser)]
#[command(name = "typeshift")]
#[command(version, about = "Convert C# model declarations to TypeScript type declarations")]
struct Cli {
    /// JSON configuration file, shared with the extractor
    #[arg(short, long)]
    config: PathBuf,

    /// Override the output path from the configuration
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the generated declarations to stdout instead of writing them
    #[arg(long)]
    dry_run: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), ToolError> {
    let started = Instant::now();

    let tool_config = config::load(&cli.config)?;

    let json = extractor::run(&tool_config.extractor_project(), &cli.config)?;
    let mut files: Vec<FileRecord> =
        serde_json::from_str(&json).map_err(ToolError::ExtractorOutput)?;

    for file in &mut files {
        file.file_name = relative_to_cwd(&file.file_name);
    }
    tracing::debug!(files = files.len(), "extractor records parsed");

    let declarations = Converter::new(&tool_config.converter).convert(&files);

    if cli.dry_run {
        print!("{}", declarations);
        return Ok(());
    }

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| tool_config.output_path());
    std::fs::write(&output, &declarations).map_err(|source| ToolError::Write {
        path: output.clone(),
        source,
    })?;

    println!("Done in {:.1} seconds.", started.elapsed().as_secs_f64());
    Ok(())
}

/// File-path comments are emitted relative to the working directory; the
/// extractor reports absolute paths.
fn relative_to_cwd(path: &str) -> String {
    let cwd = match std::env::current_dir() {
        Ok(cwd) => cwd,
        Err(_) => return path.to_string(),
    };

    Path::new(path)
        .strip_prefix(&cwd)
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| path.to_string())
}
