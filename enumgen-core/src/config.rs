//! Configuration loading from enumgen.toml.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};

use crate::emit::EmitOptions;

/// Main configuration structure for enumgen.toml.
#[derive(Debug, Deserialize, Default)]
pub struct EnumgenConfig {
    /// Output template overrides.
    pub output: Option<OutputConfig>,
}

/// Output template configuration.
#[derive(Debug, Deserialize, Default)]
pub struct OutputConfig {
    /// Sentinel returned by the generated `to_string` default branch.
    pub placeholder: Option<String>,
    /// Extension of the reconstructed enum header include.
    pub include_extension: Option<String>,
}

impl EnumgenConfig {
    /// Resolves the effective emit options, falling back to defaults for
    /// anything the config leaves unset.
    pub fn emit_options(&self) -> EmitOptions {
        let mut options = EmitOptions::default();
        if let Some(output) = &self.output {
            if let Some(placeholder) = &output.placeholder {
                options.placeholder = placeholder.clone();
            }
            if let Some(extension) = &output.include_extension {
                options.include_extension = extension.clone();
            }
        }
        options
    }
}

/// Loads configuration from enumgen.toml in `dir` if it exists.
pub fn load_config(dir: &Path) -> Result<Option<EnumgenConfig>> {
    let path = dir.join("enumgen.toml");
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&path)?;
    let cfg = toml::from_str(&content).context("Invalid enumgen.toml")?;
    Ok(Some(cfg))
}
