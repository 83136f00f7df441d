//! Squared-square tiler
//!
//! Reads a board size N (2..=20), tiles the N x N board with integer squares
//! and prints every search step followed by the final square list.

use std::error::Error;
use std::io::{self, Write};
use std::time::Instant;

use clap::{ArgAction, Parser};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use squares::input::{parse_board_size, read_board_size, OUT_OF_RANGE_MESSAGE};
use squares::{seed, solver, Board, InputError, Placement};

/// Tiles an N x N board with as few integer squares as the search finds.
#[derive(Parser)]
#[command(name = "squares")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board size; read from standard input when omitted.
    #[arg(value_name = "N", allow_negative_numbers = true)]
    size: Option<String>,

    /// Only print the final tiling, not every search step.
    #[arg(short, long)]
    quiet: bool,

    /// Log to stderr; repeat for more detail.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let size = match board_size(&cli) {
        Ok(size) => size,
        Err(e) if e.is_out_of_range() => {
            println!("{OUT_OF_RANGE_MESSAGE}");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let start = Instant::now();
    let board = run_search(size, cli.quiet, &mut out)?;
    let elapsed = start.elapsed();

    board.verify()?;
    writeln!(out, "Time to complete: {:.6} seconds", elapsed.as_secs_f64())?;
    write_result(&board, &mut out)?;
    Ok(())
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

/// Takes the size from the command line, or prompts for it on stdin.
fn board_size(cli: &Cli) -> Result<usize, InputError> {
    match &cli.size {
        Some(text) => parse_board_size(text),
        None => {
            println!("Enter the size of the square:");
            read_board_size(io::stdin().lock())
        }
    }
}

/// Seeds and searches, streaming each step to `out` unless `quiet`.
fn run_search<W: Write>(size: usize, quiet: bool, out: &mut W) -> io::Result<Board> {
    let mut status = Ok(());
    let (board, _) = solver::search_with(seed::seed(size), |placement| {
        if !quiet && status.is_ok() {
            status = write_step(placement, &mut *out);
        }
    });
    status.map(|()| board)
}

fn write_step<W: Write>(placement: &Placement<'_>, out: &mut W) -> io::Result<()> {
    let square = placement.square;
    writeln!(
        out,
        "Step: {}. Added square at ({}, {}) with size {}",
        placement.step, square.x, square.y, square.size
    )?;
    write!(out, "{}", placement.board)?;
    writeln!(out)
}

/// Prints the square count, then one `x y size` line per square.
fn write_result<W: Write>(board: &Board, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", board.placed_count())?;
    for square in board.squares() {
        writeln!(out, "{square}")?;
    }
    Ok(())
}
