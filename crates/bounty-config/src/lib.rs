//! # bounty-config
//!
//! Layered configuration loading for bounty-sync using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Command-line flags (applied by the binary after loading)
//! 2. Environment variables (`BOUNTY_SYNC_*` prefix, `__` as separator)
//! 3. Project-level `<root>/bounty-sync.toml`
//! 4. User-level `~/.config/bounty-sync/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! `BOUNTY_SYNC_PATHS__CSV` -> `paths.csv`,
//! `BOUNTY_SYNC_RECONCILE__DRY_RUN` -> `reconcile.dry_run`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use std::path::Path;
//!
//! use bounty_config::BountyConfig;
//!
//! let root = Path::new(".");
//! let config = BountyConfig::load_with_dotenv(root).expect("config");
//! println!("projects: {}", config.paths.projects_path(root).display());
//! ```

mod error;
mod paths;

pub use error::ConfigError;
pub use paths::{DEFAULT_CSV, DEFAULT_PROJECTS_DIR, PathsConfig};

use std::path::{Path, PathBuf};

use bounty_reconcile::ReconcileOptions;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// Environment variable prefix for configuration values.
pub const ENV_PREFIX: &str = "BOUNTY_SYNC_";

/// File name of the project-level config, looked up in the root.
pub const PROJECT_CONFIG_FILE: &str = "bounty-sync.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct BountyConfig {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub reconcile: ReconcileOptions,
}

impl BountyConfig {
    /// Load configuration for `root` from TOML files and environment variables.
    ///
    /// Does NOT read `.env`; use [`Self::load_with_dotenv`] for that.
    ///
    /// # Errors
    ///
    /// Fails when a source cannot be parsed into the config shape, or a
    /// path value is empty.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let config: Self = Self::figment(root).extract()?;
        config.paths.validate()?;
        Ok(config)
    }

    /// Load `<root>/.env` into the process environment, then [`Self::load`].
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv(root: &Path) -> Result<Self, ConfigError> {
        Self::load_dotenv(root);
        Self::load(root)
    }

    /// Build the figment provider chain for `root`.
    ///
    /// Public so tests can inspect the figment or add providers on top.
    #[must_use]
    pub fn figment(root: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            tracing::debug!(path = %global_path.display(), "merging user config");
            figment = figment.merge(Toml::file(global_path));
        }

        let project_path = root.join(PROJECT_CONFIG_FILE);
        if project_path.exists() {
            tracing::debug!(path = %project_path.display(), "merging project config");
            figment = figment.merge(Toml::file(project_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Path to the user-global config file.
    #[must_use]
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("bounty-sync").join("config.toml"))
    }

    /// Load `<root>/.env` if present. Existing variables are not overridden.
    fn load_dotenv(root: &Path) {
        let env_path = root.join(".env");
        if !env_path.exists() {
            return;
        }
        if let Err(error) = dotenvy::from_path(&env_path) {
            tracing::warn!(path = %env_path.display(), %error, "ignoring unreadable .env file");
        }
    }
}
