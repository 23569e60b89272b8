#[macro_use]
mod logging;
mod cli;
mod render;
mod settings;
mod theme;

use anyhow::{bail, Context, Result};
use clap::Parser;
use cli::{BestArgs, BoardArgs, Cli, Command};
use render::{summary, BoardReport, CheckReport, Printer, SearchReport};
use settings::Settings;
use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;
use theme::Theme;
use wordgrid_core::search::budget_from_millis;
use wordgrid_core::{BestOfSearch, Generator, Grid, Lexicon, SystemClock};

/// Exit status of `check` when the grid holds runs that are not words
const EXIT_INVALID_GRID: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    if cli.verbose {
        logging::enable_verbose_logging();
    }

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let settings = Settings::load()?;
    vlog!("settings: {:?}", settings);

    let lexicon = load_lexicon(&settings.word_list(cli.words.as_deref()))?;

    let stdout = io::stdout();
    let theme = if cli.json || cli.no_color || !stdout.is_terminal() {
        None
    } else {
        Some(Theme::default())
    };
    let mut printer = Printer::new(stdout.lock(), theme);

    match &cli.command {
        Command::Generate(args) => generate(cli, &settings, &lexicon, args, &mut printer),
        Command::Best(args) => best(cli, &settings, &lexicon, args, &mut printer),
        Command::Check { grid } => check(cli, &lexicon, grid, &mut printer),
    }
}

fn load_lexicon(path: &Path) -> Result<Lexicon> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading word list {}", path.display()))?;
    let lexicon =
        Lexicon::parse(&text).with_context(|| format!("parsing word list {}", path.display()))?;
    if lexicon.is_empty() {
        bail!("word list {} holds no words", path.display());
    }
    vlog!(
        "loaded {} distinct words ({} entries) from {}",
        lexicon.len(),
        lexicon.word_count(),
        path.display()
    );
    Ok(lexicon)
}

fn generate<W: Write>(
    cli: &Cli,
    settings: &Settings,
    lexicon: &Lexicon,
    args: &BoardArgs,
    printer: &mut Printer<W>,
) -> Result<ExitCode> {
    let config = settings.generator_config(args.size, args.cycles, args.rescan.into())?;
    vlog!("generator config: {:?}, seed {:?}", config, args.seed);

    let mut generator = match args.seed {
        Some(seed) => Generator::with_seed(config, seed),
        None => Generator::with_config(config),
    };
    let started = Instant::now();
    let board = generator.generate(lexicon)?;
    vlog!(
        "placed {} words in {:.2?}, density {:.3}",
        board.placement_count(),
        started.elapsed(),
        board.density()
    );

    if cli.json {
        printer.json(&BoardReport::new(&board))?;
    } else {
        printer.grid(board.grid())?;
        printer.info(&summary(&board))?;
    }
    Ok(ExitCode::SUCCESS)
}

fn best<W: Write>(
    cli: &Cli,
    settings: &Settings,
    lexicon: &Lexicon,
    args: &BestArgs,
    printer: &mut Printer<W>,
) -> Result<ExitCode> {
    let config = settings.generator_config(
        args.board.size,
        args.board.cycles,
        args.board.rescan.into(),
    )?;
    let budget_ms = settings.budget_ms(args.budget_ms);
    vlog!(
        "search config: {:?}, budget {}ms, seed {:?}",
        config,
        budget_ms,
        args.board.seed
    );

    let mut search = match args.board.seed {
        Some(seed) => BestOfSearch::with_seed(config, seed),
        None => BestOfSearch::new(config),
    };
    let outcome = search.run_observed(
        lexicon,
        budget_from_millis(budget_ms),
        &SystemClock::start(),
        |pass, board| vlog!("pass {}: density {:.3}", pass, board.density()),
    )?;

    if cli.json {
        printer.json(&SearchReport::new(&outcome))?;
        return Ok(ExitCode::SUCCESS);
    }

    match &outcome.best {
        Some(board) => {
            printer.grid(board.grid())?;
            printer.info(&summary(board))?;
            printer.info(&format!("Boards generated: {}", outcome.generated))?;
        }
        None => printer.info("No board finished within the time budget")?,
    }
    Ok(ExitCode::SUCCESS)
}

fn check<W: Write>(
    cli: &Cli,
    lexicon: &Lexicon,
    path: &Path,
    printer: &mut Printer<W>,
) -> Result<ExitCode> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading grid {}", path.display()))?;
    let rows: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let grid = Grid::from_rows(&rows).with_context(|| format!("parsing grid {}", path.display()))?;

    let invalid_runs = grid.invalid_runs(lexicon);
    let valid = invalid_runs.is_empty();

    if cli.json {
        printer.json(&CheckReport {
            valid,
            invalid_runs,
        })?;
    } else {
        printer.grid(&grid)?;
        if valid {
            printer.success(&format!("All {} runs are words", grid.runs().len()))?;
        } else {
            for run in &invalid_runs {
                printer.error(&format!(
                    "Not a word: {} ({} from {})",
                    run.text.to_ascii_uppercase(),
                    run.orientation,
                    run.start
                ))?;
            }
        }
    }

    Ok(if valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_INVALID_GRID)
    })
}
