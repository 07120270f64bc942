//! # Word Search Solver
//!
//! A word search puzzle hides a list of words in a grid of letters, reading
//! in any of eight directions. This program finds each word and reports where
//! it lies.
//!
//! Via command line options, the user can specify the grid and word files,
//! or fall back on the bundled sample puzzle, and the dimensions that the grid
//! must have. The solution can be printed directly, either as text or as
//! JSON, or explored interactively via a text-based user interface (TUI) that
//! highlights the cells of each word.

mod app;
mod tui;

use std::{path::PathBuf, process::ExitCode, rc::Rc};

use clap::{Parser, Subcommand};
use log::{debug, error, trace};
use serde::Serialize;

use app::App;
use tui::tui;
use word_search_solver::{
	puzzle::{Puzzle, PuzzleError, DEFAULT_COLUMNS, DEFAULT_ROWS},
	solver::{Classification, Solver, WordMatch}
};

////////////////////////////////////////////////////////////////////////////////
//                           Command line options.                            //
////////////////////////////////////////////////////////////////////////////////

/// CLI for solving word search puzzles.
#[derive(Clone, Debug, Parser)]
#[command(version = "1.0", author = "Todd L Smith")]
struct Opts
{
	/// The path to the grid file: one row per line, cells separated by
	/// commas. Requires `--words`. If omitted, the bundled sample puzzle is
	/// used.
	#[arg(short = 'g', long, requires = "words")]
	grid: Option<PathBuf>,

	/// The path to the word file: words separated by whitespace. Requires
	/// `--grid`.
	#[arg(short = 'w', long, requires = "grid")]
	words: Option<PathBuf>,

	/// The number of rows that the grid must have.
	#[arg(short = 'r', long, default_value_t = DEFAULT_ROWS)]
	rows: usize,

	/// The number of columns that the grid must have.
	#[arg(short = 'c', long, default_value_t = DEFAULT_COLUMNS)]
	columns: usize,

	#[command(subcommand)]
	command: Command
}

/// The subcommands of the CLI.
#[derive(Copy, Clone, Debug, Subcommand)]
enum Command
{
	/// Solve the puzzle and write the solution to standard output.
	Solve {
		/// Emit the solution as JSON.
		#[arg(short = 'j', long)]
		json: bool
	},

	/// Open the text-based user interface (TUI) for watching the search and
	/// exploring the solution. The solution will be written to standard
	/// output.
	Browse {
		/// How long (in ms) to highlight each word as it is found.
		#[arg(short = 'd', long, default_value = "400")]
		highlight_duration: u64,

		/// Suppress emission of the solution to standard output.
		#[arg(short = 'q', long)]
		quiet: bool
	}
}

////////////////////////////////////////////////////////////////////////////////
//                               Main program.                                //
////////////////////////////////////////////////////////////////////////////////

/// Parse the command line options and execute the appropriate subcommand.
/// Any failure is reported on standard error, and results in a nonzero exit
/// code.
fn main() -> ExitCode
{
	env_logger::init();
	let opts = Opts::parse();
	debug!("Command line options: {:?}", opts);
	match run(opts)
	{
		Ok(()) => ExitCode::SUCCESS,
		Err(e) =>
		{
			error!("{}", e);
			eprintln!("Error: {}", e);
			ExitCode::FAILURE
		}
	}
}

/// Load the puzzle and execute the appropriate subcommand.
///
/// # Arguments
///
/// * `opts` - The command line options.
///
/// # Errors
///
/// * Any error that occurs while loading or validating the puzzle.
/// * Any error that occurs while driving the TUI.
fn run(opts: Opts) -> Result<(), Box<dyn std::error::Error>>
{
	let puzzle = load_puzzle(&opts)?;
	match opts.command
	{
		Command::Solve { json } =>
		{
			trace!("Solving directly");
			let solver = Solver::new(Rc::new(puzzle)).solve_fully();
			if json
			{
				print_json(solver.solution(), &solver.classification())?;
			}
			else
			{
				print_report(solver.solution(), &solver.classification());
			}
		},
		Command::Browse { highlight_duration, quiet } =>
		{
			trace!("Opening TUI");
			let app = App::new(highlight_duration, puzzle);
			let solution = tui(|terminal| app.run(terminal))?;
			if !quiet
			{
				print_solution(solution);
			}
		}
	}
	Ok(())
}

/// Load the puzzle named by the command line options, and ensure that it has
/// the required dimensions.
///
/// # Arguments
///
/// * `opts` - The command line options.
///
/// # Returns
///
/// The puzzle.
///
/// # Errors
///
/// Any error that occurs while reading, parsing, or validating the puzzle.
fn load_puzzle(opts: &Opts) -> Result<Puzzle, PuzzleError>
{
	let puzzle = match (&opts.grid, &opts.words)
	{
		(Some(grid), Some(words)) => Puzzle::read_from_files(grid, words)?,
		_ =>
		{
			debug!("Using the sample puzzle");
			Puzzle::sample()?
		}
	};
	puzzle.require_dimensions(opts.rows, opts.columns)
}

/// Print the solution as tab-separated text: one line per match, giving the
/// word, the direction, and the cells; then one line per unmatched word; then
/// the summary.
///
/// # Arguments
///
/// * `matches` - The matches found.
/// * `classification` - The classification of the words.
fn print_report(matches: &[WordMatch], classification: &Classification)
{
	for m in matches
	{
		println!("{}", m);
	}
	for word in classification.unmatched()
	{
		println!("not found:\t{}", word);
	}
	println!("{}", classification);
}

/// The JSON form of the solution.
#[derive(Serialize)]
struct Report<'a>
{
	/// The matches found.
	found: &'a [WordMatch],

	/// The words not found.
	not_found: &'a [String],

	/// The number of matches.
	found_count: usize,

	/// The number of words searched for.
	total_count: usize
}

/// Print the solution as a JSON object.
///
/// # Arguments
///
/// * `matches` - The matches found.
/// * `classification` - The classification of the words.
///
/// # Errors
///
/// Any error that occurs while serializing the solution.
fn print_json(
	matches: &[WordMatch],
	classification: &Classification
) -> Result<(), serde_json::Error>
{
	let report = Report {
		found: matches,
		not_found: classification.unmatched(),
		found_count: classification.found_count(),
		total_count: classification.total_count()
	};
	println!("{}", serde_json::to_string_pretty(&report)?);
	Ok(())
}

/// Print the solution to standard output.
///
/// # Arguments
///
/// * `solution` - The solution to print, as a list of lines.
fn print_solution(solution: Vec<String>)
{
	for line in solution
	{
		println!("{}", line);
	}
}
