use std::path::PathBuf;

use anyhow::Context;
use bounty_config::BountyConfig;
use bounty_reconcile::ReconcileOptions;

use crate::cli::{Cli, OutputFormat};

/// Everything one run needs, after config layering and flag overrides.
#[derive(Debug, Clone)]
pub struct Settings {
    pub csv: PathBuf,
    pub projects_dir: PathBuf,
    pub options: ReconcileOptions,
    pub format: OutputFormat,
}

/// Load configuration for the selected root and apply command-line flags.
///
/// Path flags are taken as given; configured paths are resolved against the
/// root. Boolean flags can only switch an option on.
pub fn load_settings(cli: &Cli) -> anyhow::Result<Settings> {
    let root = match &cli.root {
        Some(root) => root.clone(),
        None => std::env::current_dir().context("failed to determine current directory")?,
    };

    let config = BountyConfig::load_with_dotenv(&root).with_context(|| {
        format!("failed to load configuration for {}", root.display())
    })?;

    Ok(apply_flags(cli, &config, &root))
}

fn apply_flags(cli: &Cli, config: &BountyConfig, root: &std::path::Path) -> Settings {
    let mut options = config.reconcile;
    options.dry_run |= cli.dry_run;
    options.sync_project_url |= cli.sync_project_url;
    options.strict_project_url_match |= cli.strict_project_url_match;
    options.name_fallback_on_repo_miss |= cli.name_fallback;

    Settings {
        csv: cli
            .csv
            .clone()
            .unwrap_or_else(|| config.paths.csv_path(root)),
        projects_dir: cli
            .projects_dir
            .clone()
            .unwrap_or_else(|| config.paths.projects_path(root)),
        options,
        format: cli.format,
    }
}
