use std::path::PathBuf;

use clap::Parser;

pub mod global;

pub use global::OutputFormat;

/// Top-level CLI parser for the `bounty-sync` binary.
#[derive(Debug, Parser)]
#[command(
    name = "bounty-sync",
    version,
    about = "Populate per-project `bounties:` front matter from a CSV export."
)]
pub struct Cli {
    /// Base directory for configuration and relative default paths
    /// (defaults to the current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Path to the CSV export
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Directory containing project markdown files
    #[arg(long)]
    pub projects_dir: Option<PathBuf>,

    /// Print what would change without writing files
    #[arg(long)]
    pub dry_run: bool,

    /// Rewrite a project's `project_url` when the CSV names a different repository.
    /// Also enables --name-fallback
    #[arg(long)]
    pub sync_project_url: bool,

    /// Exit non-zero when a CSV row disagrees with the markdown `project_url`
    #[arg(long)]
    pub strict_project_url_match: bool,

    /// Match rows by project name when their repository is not in the catalog
    #[arg(long)]
    pub name_fallback: bool,

    /// Report format: text, json
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Quiet mode (errors only in logs)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::{Cli, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_arguments_means_defaults() {
        let cli = Cli::try_parse_from(["bounty-sync"]).expect("cli should parse");

        assert_eq!(cli.root, None);
        assert_eq!(cli.csv, None);
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(!cli.dry_run);
        assert!(!cli.sync_project_url);
        assert!(!cli.strict_project_url_match);
        assert!(!cli.name_fallback);
    }

    #[test]
    fn all_flags_parse() {
        let cli = Cli::try_parse_from([
            "bounty-sync",
            "--root",
            "/srv/site",
            "--csv",
            "export.csv",
            "--projects-dir",
            "content",
            "--dry-run",
            "--sync-project-url",
            "--strict-project-url-match",
            "--name-fallback",
            "--format",
            "json",
            "--verbose",
        ])
        .expect("cli should parse");

        assert_eq!(cli.root, Some(PathBuf::from("/srv/site")));
        assert_eq!(cli.csv, Some(PathBuf::from("export.csv")));
        assert_eq!(cli.projects_dir, Some(PathBuf::from("content")));
        assert!(cli.dry_run);
        assert!(cli.sync_project_url);
        assert!(cli.strict_project_url_match);
        assert!(cli.name_fallback);
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.verbose);
    }

    #[test]
    fn sync_help_mentions_name_fallback() {
        let help = Cli::command().render_long_help().to_string();
        let help = help.split_whitespace().collect::<Vec<_>>().join(" ");
        assert!(help.contains("Also enables --name-fallback"));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["bounty-sync", "--format", "xml"]).is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        assert!(Cli::try_parse_from(["bounty-sync", "-q", "-v"]).is_err());
    }
}
