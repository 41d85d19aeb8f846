//! Configuration file structure (seqdoc.toml).

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub tutorial: TutorialConfig,
    #[serde(default)]
    pub build: BuildSettings,
}

#[derive(Debug, Deserialize)]
pub struct TutorialConfig {
    #[serde(default = "default_dir")]
    pub dir: String,
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default = "default_title")]
    pub title: String,
    /// Only include files with this extension
    pub extension: Option<String>,
}

impl Default for TutorialConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            output: default_output(),
            title: default_title(),
            extension: None,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct BuildSettings {
    #[serde(default)]
    pub minify: bool,
}

fn default_dir() -> String {
    "tutorial".to_string()
}
fn default_output() -> String {
    "web/tutorial.html".to_string()
}
fn default_title() -> String {
    "Music Sequences".to_string()
}

/// Load configuration from `path` if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        tracing::debug!("No config at {}, using defaults", path.display());
        return Ok(ConfigFile::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    tracing::info!("Loaded config from {}", path.display());

    Ok(config)
}

pub const DEFAULT_CONFIG: &str = r#"# seqdoc Configuration

[tutorial]
# Directory holding one example program per file
dir = "tutorial"

# Generated page
output = "web/tutorial.html"

# Page title
title = "Music Sequences"

# Only include files with this extension
# extension = "oct"

[build]
# Minify the inline stylesheet
minify = false
"#;
