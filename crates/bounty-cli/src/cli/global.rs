use clap::ValueEnum;

/// How the run report is printed.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Line-oriented report: updated paths on stdout, issues on stderr.
    #[default]
    Text,
    /// The whole report as pretty JSON on stdout.
    Json,
}
