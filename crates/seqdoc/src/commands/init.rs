//! Initialize a tutorial project.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::{load_config, DEFAULT_CONFIG};

/// Run the init command.
pub fn run(config_path: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing seqdoc...");

    if config_path.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
        return Ok(());
    }

    fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    tracing::info!("Created {}", config_path.display());

    // Create the directories the default config points at
    let config = load_config(config_path)?;
    let base = config_path.parent().unwrap_or(Path::new(""));

    let source_dir = base.join(&config.tutorial.dir);
    if !source_dir.exists() {
        fs::create_dir_all(&source_dir)
            .with_context(|| format!("Failed to create {}", source_dir.display()))?;
        tracing::info!("Created {}", source_dir.display());
    }

    if let Some(output_dir) = base.join(&config.tutorial.output).parent() {
        fs::create_dir_all(output_dir)
            .with_context(|| format!("Failed to create {}", output_dir.display()))?;
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Add example programs to {} and run 'seqdoc build'.", source_dir.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn creates_config_and_directories() {
        let temp = tempdir().unwrap();
        let config_path = temp.path().join("seqdoc.toml");

        run(&config_path, false).unwrap();

        assert_eq!(fs::read_to_string(&config_path).unwrap(), DEFAULT_CONFIG);
        assert!(temp.path().join("tutorial").is_dir());
        assert!(temp.path().join("web").is_dir());
    }

    #[test]
    fn keeps_existing_config_without_yes() {
        let temp = tempdir().unwrap();
        let config_path = temp.path().join("seqdoc.toml");
        fs::write(&config_path, "# mine\n").unwrap();

        run(&config_path, false).unwrap();

        assert_eq!(fs::read_to_string(&config_path).unwrap(), "# mine\n");
    }

    #[test]
    fn overwrites_existing_config_with_yes() {
        let temp = tempdir().unwrap();
        let config_path = temp.path().join("seqdoc.toml");
        fs::write(&config_path, "# mine\n").unwrap();

        run(&config_path, true).unwrap();

        assert_eq!(fs::read_to_string(&config_path).unwrap(), DEFAULT_CONFIG);
    }

    #[test]
    fn init_then_build_produces_empty_page() {
        let temp = tempdir().unwrap();
        let config_path = temp.path().join("seqdoc.toml");

        run(&config_path, false).unwrap();
        crate::commands::build::run(&config_path, Default::default()).unwrap();

        let html = fs::read_to_string(temp.path().join("web").join("tutorial.html")).unwrap();
        assert!(html.contains("<body>\n</body>"));
    }
}
