//! Tutorial page builder.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use tempfile::NamedTempFile;

use crate::assets::AssetPipeline;
use crate::entry::{load_entries, SourceEntry};
use crate::templates::{PageContext, TemplateEngine};

/// Configuration for building the tutorial page.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildConfig {
    /// Directory containing one tutorial example per file
    pub source_dir: PathBuf,

    /// HTML file to create or replace
    pub output_path: PathBuf,

    /// Page title
    pub title: String,

    /// Only include files with this extension (all files when unset)
    pub extension: Option<String>,

    /// Minify the inline stylesheet
    pub minify: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("tutorial"),
            output_path: PathBuf::from("web/tutorial.html"),
            title: "Music Sequences".to_string(),
            extension: None,
            minify: false,
        }
    }
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of entries rendered
    pub entries: usize,

    /// Size of the written page in bytes
    pub bytes: usize,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Written page
    pub output_path: PathBuf,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to read tutorial sources: {0}")]
    ReadError(String),

    #[error("Entry name is not valid UTF-8: {0}")]
    MalformedName(String),

    #[error("Failed to render template: {0}")]
    TemplateError(String),

    #[error("Failed to write output: {0}")]
    WriteError(String),
}

/// Builds the single tutorial page.
pub struct PageBuilder {
    config: BuildConfig,
    templates: TemplateEngine,
}

impl PageBuilder {
    /// Create a new page builder.
    pub fn new(config: BuildConfig) -> Result<Self, BuildError> {
        let templates =
            TemplateEngine::new().map_err(|e| BuildError::TemplateError(e.to_string()))?;

        Ok(Self { config, templates })
    }

    /// Build the page.
    ///
    /// Every entry is read and the page rendered before anything touches the
    /// output path. The page is then written to a temporary file beside the
    /// output and renamed over it, so a failed run never leaves a partial page.
    pub fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        tracing::info!(
            "Generating {} from {}",
            self.config.output_path.display(),
            self.config.source_dir.display()
        );

        let entries = load_entries(&self.config.source_dir, self.config.extension.as_deref())?;
        let html = self.render(&entries)?;
        self.write_output(&html)?;

        Ok(BuildResult {
            entries: entries.len(),
            bytes: html.len(),
            duration_ms: start.elapsed().as_millis() as u64,
            output_path: self.config.output_path.clone(),
        })
    }

    /// Render the page for the given entries.
    pub fn render(&self, entries: &[SourceEntry]) -> Result<String, BuildError> {
        let stylesheet = AssetPipeline::stylesheet(self.config.minify);

        let context = PageContext {
            title: &self.config.title,
            stylesheet: &stylesheet,
            entries,
        };

        self.templates
            .render_page(&context)
            .map_err(|e| BuildError::TemplateError(e.to_string()))
    }

    fn write_output(&self, html: &str) -> Result<(), BuildError> {
        let output = &self.config.output_path;
        let parent = match output.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };

        let write_err = |e: std::io::Error| {
            BuildError::WriteError(format!("{}: {}", output.display(), e))
        };

        let mut file = NamedTempFile::new_in(parent).map_err(write_err)?;
        file.write_all(html.as_bytes()).map_err(write_err)?;
        file.as_file().sync_all().map_err(write_err)?;

        // Temp files are created 0600; keep the replaced page's mode instead.
        if let Ok(existing) = fs::metadata(output) {
            file.as_file()
                .set_permissions(existing.permissions())
                .map_err(write_err)?;
        } else {
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                file.as_file()
                    .set_permissions(fs::Permissions::from_mode(0o644))
                    .map_err(write_err)?;
            }
        }

        file.persist(output).map_err(|e| write_err(e.error))?;

        tracing::debug!("Wrote {} bytes to {}", html.len(), output.display());

        Ok(())
    }
}

/// Build the tutorial page described by `config`.
pub fn generate(config: &BuildConfig) -> Result<BuildResult, BuildError> {
    PageBuilder::new(config.clone())?.build()
}
