use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use wordgrid_core::RescanScope;

#[derive(Debug, Parser)]
#[command(
    name = "wordgrid",
    version,
    about = "Generate letter grids where every row and column run is a dictionary word"
)]
pub struct Cli {
    /// Word list, one lowercase word per line
    #[arg(long, global = true)]
    pub words: Option<PathBuf>,

    /// Print diagnostics to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a single board
    Generate(BoardArgs),
    /// Generate boards until the time budget runs out and keep the densest
    Best(BestArgs),
    /// Check every run of a grid file against the word list
    Check {
        /// Grid rows, one per line, `.` for empty cells
        grid: PathBuf,
    },
}

#[derive(Debug, Args)]
pub struct BoardArgs {
    /// Board size (at least 4)
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Placement trials per board
    #[arg(short, long)]
    pub cycles: Option<usize>,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Lines rescanned for each candidate placement
    #[arg(long, value_enum, default_value_t = Rescan::Full)]
    pub rescan: Rescan,
}

#[derive(Debug, Args)]
pub struct BestArgs {
    #[command(flatten)]
    pub board: BoardArgs,

    /// Wall-clock budget in milliseconds; zero or less generates nothing
    #[arg(long, allow_negative_numbers = true)]
    pub budget_ms: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Rescan {
    Full,
    Touched,
}

impl From<Rescan> for RescanScope {
    fn from(rescan: Rescan) -> Self {
        match rescan {
            Rescan::Full => RescanScope::Full,
            Rescan::Touched => RescanScope::Touched,
        }
    }
}
