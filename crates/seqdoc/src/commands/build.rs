//! Tutorial page build command.

use std::path::{Path, PathBuf};

use anyhow::Result;
use seqdoc_page::{BuildConfig, PageBuilder};

use crate::config::{load_config, ConfigFile};

/// Command-line values that take precedence over the config file.
#[derive(Debug, Default)]
pub struct BuildOverrides {
    pub source: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub title: Option<String>,
    pub extension: Option<String>,
    pub minify: Option<bool>,
}

/// Merge the config file and overrides into a build config.
///
/// Paths from the config file are relative to the file's directory; paths
/// given on the command line are used as-is.
fn resolve(file: ConfigFile, base: &Path, overrides: BuildOverrides) -> BuildConfig {
    BuildConfig {
        source_dir: overrides
            .source
            .unwrap_or_else(|| base.join(&file.tutorial.dir)),
        output_path: overrides
            .output
            .unwrap_or_else(|| base.join(&file.tutorial.output)),
        title: overrides.title.unwrap_or(file.tutorial.title),
        extension: overrides.extension.or(file.tutorial.extension),
        minify: overrides.minify.unwrap_or(file.build.minify),
    }
}

/// Run the build command.
pub fn run(config_path: &Path, overrides: BuildOverrides) -> Result<()> {
    let file_config = load_config(config_path)?;
    let base = config_path.parent().unwrap_or(Path::new(""));
    let config = resolve(file_config, base, overrides);

    let result = PageBuilder::new(config)?.build()?;

    tracing::info!(
        "Rendered {} tutorial entries ({} bytes) in {}ms",
        result.entries,
        result.bytes,
        result.duration_ms
    );

    tracing::info!("Output: {}", result.output_path.display());

    Ok(())
}
