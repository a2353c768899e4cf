//! Utility functions for reading inputs and locating directories

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::RenderConfig;

#[cfg(test)]
mod tests;

/// Input name that stands for standard input
pub const STDIN_INPUT: &str = "-";

/// One configuration document read from an input
#[derive(Debug, Clone, PartialEq)]
pub struct InputDocument {
    /// Where the document came from, `file.yaml` or `file.yaml#2` for later documents
    pub origin: String,

    /// The configuration block
    pub config: Value,
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_directory(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    } else if !path.is_dir() {
        return Err(anyhow!("Path exists but is not a directory: {:?}", path));
    }
    Ok(())
}

/// Get the per-user config directory for tenant-manifest
pub fn get_config_dir() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| anyhow!("Could not determine config directory"))?
        .join("tenant-manifest");

    Ok(config_dir)
}

/// Find all files with an accepted extension in a directory recursively, sorted by path
pub fn find_input_files(dir: &Path, render: &RenderConfig) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| render.accepts_extension(ext))
        })
        .collect();

    files.sort();
    files
}

/// Expand command line inputs into the files (or stdin) to read
pub fn expand_inputs(inputs: &[String], render: &RenderConfig) -> Result<Vec<String>> {
    let mut expanded = Vec::new();
    let mut stdin_seen = false;

    for input in inputs {
        if input == STDIN_INPUT {
            if stdin_seen {
                return Err(anyhow!("Standard input ('{}') can only be given once", STDIN_INPUT));
            }
            stdin_seen = true;
            expanded.push(input.clone());
            continue;
        }

        let path = PathBuf::from(shellexpand::tilde(input).into_owned());
        if path.is_dir() {
            let files = find_input_files(&path, render);
            if files.is_empty() {
                tracing::warn!("No input files found in {:?}", path);
            }
            expanded.extend(files.into_iter().map(|f| f.to_string_lossy().into_owned()));
        } else if path.is_file() {
            expanded.push(path.to_string_lossy().into_owned());
        } else {
            return Err(anyhow!("Input not found: {}", input));
        }
    }

    Ok(expanded)
}

/// Read the raw text of an input
pub fn read_input(input: &str) -> Result<String> {
    if input == STDIN_INPUT {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read standard input")?;
        Ok(content)
    } else {
        fs::read_to_string(input).with_context(|| format!("Failed to read {}", input))
    }
}

/// Parse every YAML (or JSON) document of an input; empty documents are skipped
pub fn parse_documents(origin: &str, content: &str) -> Result<Vec<InputDocument>> {
    let mut documents = Vec::new();

    for (index, document) in serde_yaml::Deserializer::from_str(content).enumerate() {
        let config = Value::deserialize(document)
            .with_context(|| format!("Failed to parse document {} of {}", index + 1, origin))?;
        if config.is_null() {
            continue;
        }

        let origin = if index == 0 {
            origin.to_string()
        } else {
            format!("{}#{}", origin, index + 1)
        };
        documents.push(InputDocument { origin, config });
    }

    Ok(documents)
}
