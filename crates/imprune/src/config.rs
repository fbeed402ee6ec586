use std::env;
use std::path::Path;

use anyhow::{Context, Result};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Modules whose imports survive even with zero detected references.
const DEFAULT_ALWAYS_KEEP: &[&str] = &["react"];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Import source paths exempt from usage-based removal.
    ///
    /// The UI-library root import belongs here: JSX markup depends on it
    /// without producing an identifier reference the collector can see, so
    /// deleting it would break the file. Hosts can add further entries such
    /// as global side-effect polyfills.
    pub always_keep_modules: IndexSet<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            always_keep_modules: DEFAULT_ALWAYS_KEEP.iter().map(|&m| m.to_owned()).collect(),
        }
    }
}

/// Configuration overrides from environment variables with IMPRUNE_ prefix
#[derive(Debug, Clone, Default)]
pub struct EnvConfig {
    pub always_keep_modules: Option<IndexSet<String>>,
}

impl EnvConfig {
    /// Load overrides from the environment.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        // IMPRUNE_ALWAYS_KEEP_MODULES - comma-separated list of module paths
        if let Ok(modules_str) = env::var("IMPRUNE_ALWAYS_KEEP_MODULES") {
            let modules: IndexSet<String> = modules_str
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(ToOwned::to_owned)
                .collect();
            if !modules.is_empty() {
                config.always_keep_modules = Some(modules);
            }
        }

        config
    }

    /// Apply environment overrides to a base config.
    pub fn apply_to(self, mut config: Config) -> Config {
        if let Some(always_keep_modules) = self.always_keep_modules {
            config.always_keep_modules = always_keep_modules;
        }
        config
    }
}

impl Config {
    /// Load a single config file from a path.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Config> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration with hierarchical precedence:
    /// 1. Explicitly provided config path (highest precedence)
    /// 2. Environment variables (IMPRUNE_*)
    /// 3. Project config (imprune.toml in current directory)
    /// 4. Default values (lowest precedence)
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut config = Config::default();

        let project_config_path = Path::new("imprune.toml");
        if project_config_path.exists() {
            log::debug!("Loading project config from: {:?}", project_config_path);
            config = Config::load_from_file(project_config_path)?;
        }

        config = EnvConfig::from_env().apply_to(config);

        if let Some(path) = config_path {
            config = Config::load_from_file(path)
                .with_context(|| format!("Failed to load config from {:?}", path))?;
        }

        Ok(config)
    }
}
