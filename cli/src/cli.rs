use std::path::PathBuf;

/// Nearest-point matching between two coordinate lists
#[derive(clap::Parser, Debug)]
#[command(name = "geomatch", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Enter both coordinate lists at the prompt, one latitude/longitude at a time
    Interactive,

    /// Match the points of one file against the points of another
    Match(MatchArgs),
}

#[derive(clap::Args, Debug)]
pub struct MatchArgs {
    /// Source points, one "lat,lon" per line (any notation per axis)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub sources: PathBuf,

    /// Target points, same format as the sources
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub targets: PathBuf,

    /// Print matches as a JSON array instead of text
    #[arg(long)]
    pub json: bool,

    /// Decimal places for distances in text output
    #[arg(short, long, default_value_t = 2)]
    pub precision: usize,
}
