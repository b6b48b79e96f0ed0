use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "SPRITE copy assignment - selects, per structure, the copy of each ambiguous region that makes a cluster most compact.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads used to search structures in parallel.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score one cluster of ambiguous regions across a structure population.
    Assign(AssignArgs),
}

/// Arguments for the `assign` subcommand.
#[derive(Args, Debug)]
pub struct AssignArgs {
    /// Coordinates CSV with header `bead,structure,x,y,z`.
    #[arg(short = 'i', long = "coords", required = true, value_name = "PATH")]
    pub coords: PathBuf,

    /// Path for the per-structure results CSV.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Copy count of each region, consuming consecutive beads (e.g. 2,2,1).
    /// Overrides the region layout of the config file.
    #[arg(long, value_name = "N,N,...", value_delimiter = ',')]
    pub copies: Option<Vec<usize>>,

    /// Override the number of best structures to report.
    #[arg(short = 'k', long, value_name = "INT")]
    pub keep_best: Option<usize>,

    /// Skip the cluster when it has more copy combinations than this.
    #[arg(long, value_name = "INT")]
    pub max_combinations: Option<u64>,
}
