//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use storefront_catalog::prelude::Catalog;
use tracing::{debug, warn};

use crate::config::{StorefrontConfig, CONFIG_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: StorefrontConfig,
    /// Where the configuration came from, if a file was found.
    pub config_path: Option<PathBuf>,
    /// Catalog file given with `--catalog`.
    pub catalog_override: Option<String>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, catalog_override: Option<String>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            (StorefrontConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            // Try to find config in current directory or parent directories
            match find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (StorefrontConfig::default(), None),
            }
        };

        if let Some(path) = &config_path {
            debug!(path = %path.display(), "loaded config");
        }

        Ok(Self {
            config,
            config_path,
            catalog_override,
            output,
            cwd,
        })
    }

    /// Load the catalog: `--catalog`, then `[catalog].path`, then the seed.
    pub fn load_catalog(&self) -> Result<Catalog> {
        let path = match (&self.catalog_override, &self.config.catalog.path) {
            (Some(path), _) => self.resolve_path(path),
            (None, Some(path)) => self.resolve_config_relative(path),
            (None, None) => {
                self.output.debug("Using built-in seed catalog");
                return Catalog::seed().context("Failed to load built-in catalog");
            }
        };

        self.output.debug(&format!("Loading catalog from {}", path.display()));
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
        Catalog::from_json(&content)
            .with_context(|| format!("Invalid catalog file: {}", path.display()))
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if PathBuf::from(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }

    /// Resolve a path from the config file relative to that file.
    fn resolve_config_relative(&self, path: &str) -> PathBuf {
        match self.config_path.as_deref().and_then(Path::parent) {
            Some(dir) if !PathBuf::from(path).is_absolute() => {
                let dir = if dir.as_os_str().is_empty() { self.cwd.as_path() } else { dir };
                dir.join(path)
            }
            _ => self.resolve_path(path),
        }
    }
}

/// Find config file in directory tree.
pub fn find_config(start: &Path) -> Option<(StorefrontConfig, PathBuf)> {
    let mut current = start.to_path_buf();
    loop {
        for name in CONFIG_NAMES {
            let config_path = current.join(name);
            if config_path.exists() {
                match StorefrontConfig::load(config_path.to_str()?) {
                    Ok(config) => return Some((config, config_path)),
                    Err(e) => warn!(path = %config_path.display(), "ignoring config file: {:#}", e),
                }
            }
        }

        if !current.pop() {
            break;
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("storefront-cli-{}-{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_find_config_walks_up() {
        let root = scratch_dir("walk");
        let nested = root.join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(root.join("storefront.toml"), "[display]\nlimit = 3\n").unwrap();

        let (config, path) = find_config(&nested).unwrap();
        assert_eq!(config.display.limit, Some(3));
        assert_eq!(path, root.join("storefront.toml"));

        std::fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_find_config_skips_malformed_file() {
        let root = scratch_dir("malformed");
        let nested = root.join("shop");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(root.join("storefront.toml"), "[display]\nlimit = 5\n").unwrap();
        std::fs::write(nested.join("storefront.toml"), "[display\nlimit = ").unwrap();

        let (config, path) = find_config(&nested).unwrap();
        assert_eq!(config.display.limit, Some(5));
        assert_eq!(path, root.join("storefront.toml"));
        assert!(StorefrontConfig::load(nested.join("storefront.toml").to_str().unwrap()).is_err());

        std::fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_config_catalog_path_is_relative_to_config() {
        let root = scratch_dir("catalog");
        std::fs::write(
            root.join("catalog.json"),
            r#"{"products": [{"id": 1, "name": "Widget", "brand": "Acme", "category": "Electronics", "price": 10.0}]}"#,
        )
        .unwrap();
        std::fs::write(root.join("storefront.toml"), "[catalog]\npath = \"catalog.json\"\n").unwrap();

        let config_file = root.join("storefront.toml");
        let ctx = Context::load(config_file.to_str(), None, Output::new(false, true)).unwrap();
        let catalog = ctx.load_catalog().unwrap();
        assert_eq!(catalog.len(), 1);

        std::fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_missing_catalog_file_is_an_error() {
        let ctx = Context {
            config: StorefrontConfig::default(),
            config_path: None,
            catalog_override: Some("/nonexistent/catalog.json".to_string()),
            output: Output::new(false, true),
            cwd: PathBuf::from("/"),
        };
        let err = ctx.load_catalog().unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to read catalog file"));
    }
}
