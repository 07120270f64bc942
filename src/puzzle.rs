//! # Puzzle
//!
//! A word search puzzle is a [`Grid`] together with the words to find in it.
//! Both halves arrive as free-form text, either from files or from the
//! bundled [sample](Puzzle::sample).

use std::{
	error::Error,
	fmt::{self, Display, Formatter},
	fs,
	io,
	path::{Path, PathBuf}
};

use log::{debug, trace};

use crate::grid::{Grid, GridError};

/// The number of rows that a puzzle must have, unless configured otherwise.
pub const DEFAULT_ROWS: usize = 14;

/// The number of columns that a puzzle must have, unless configured
/// otherwise.
pub const DEFAULT_COLUMNS: usize = 14;

/// The grid text of the sample puzzle.
const SAMPLE_GRID: &str = include_str!("../puzzles/animales.grid");

/// The word text of the sample puzzle.
const SAMPLE_WORDS: &str = include_str!("../puzzles/animales.words");

////////////////////////////////////////////////////////////////////////////////
//                                  Puzzles.                                  //
////////////////////////////////////////////////////////////////////////////////

/// A word search puzzle: a grid of letters and the words hidden within it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct Puzzle
{
	/// The grid of letters.
	grid: Grid,

	/// The words to search for, upper-cased, in their original order.
	words: Vec<String>
}

impl Puzzle
{
	/// Construct a puzzle from an existing grid and word list. The words are
	/// upper-cased; empty words are discarded.
	///
	/// # Arguments
	///
	/// * `grid` - The grid of letters.
	/// * `words` - The words to search for.
	///
	/// # Returns
	///
	/// The puzzle.
	pub fn new<T: AsRef<str>>(grid: Grid, words: &[T]) -> Self
	{
		let words = words.iter()
			.map(|word| word.as_ref().trim().to_uppercase())
			.filter(|word| !word.is_empty())
			.collect();
		Self { grid, words }
	}

	/// Parse a puzzle from its grid text and word text. See [`Grid::parse`]
	/// and [`parse_words`] for the formats.
	///
	/// # Arguments
	///
	/// * `grid` - The grid text.
	/// * `words` - The word text.
	///
	/// # Returns
	///
	/// The parsed puzzle.
	///
	/// # Errors
	///
	/// [`PuzzleError::Grid`] if the grid text is malformed.
	pub fn parse(grid: &str, words: &str) -> Result<Self, PuzzleError>
	{
		let grid = Grid::parse(grid)?;
		let words = parse_words(words);
		debug!(
			"parsed puzzle: {}×{} grid, {} words",
			grid.rows(),
			grid.columns(),
			words.len()
		);
		Ok(Self { grid, words })
	}

	/// Read a puzzle from a grid file and a word file.
	///
	/// # Arguments
	///
	/// * `grid_path` - The path to the grid file.
	/// * `words_path` - The path to the word file.
	///
	/// # Returns
	///
	/// The parsed puzzle.
	///
	/// # Errors
	///
	/// * [`PuzzleError::Io`] if either file cannot be read.
	/// * [`PuzzleError::Grid`] if the grid text is malformed.
	pub fn read_from_files<G, W>(
		grid_path: G,
		words_path: W
	) -> Result<Self, PuzzleError>
		where G: AsRef<Path>, W: AsRef<Path>
	{
		let grid = read_to_string(grid_path.as_ref())?;
		let words = read_to_string(words_path.as_ref())?;
		Self::parse(&grid, &words)
	}

	/// Get the bundled sample puzzle: 17 Spanish animal names hidden in a
	/// 14×14 grid.
	///
	/// # Returns
	///
	/// The sample puzzle.
	///
	/// # Errors
	///
	/// [`PuzzleError::Grid`] if the bundled grid is malformed, which would be
	/// a packaging defect.
	pub fn sample() -> Result<Self, PuzzleError>
	{
		Self::parse(SAMPLE_GRID, SAMPLE_WORDS)
	}

	/// Ensure that the grid has exactly the given dimensions. This must be
	/// checked before searching whenever the application constrains the
	/// shape of the grid.
	///
	/// # Arguments
	///
	/// * `rows` - The required number of rows.
	/// * `columns` - The required number of columns.
	///
	/// # Returns
	///
	/// The puzzle, unchanged.
	///
	/// # Errors
	///
	/// [`PuzzleError::Dimensions`] if the grid has any other shape.
	pub fn require_dimensions(
		self,
		rows: usize,
		columns: usize
	) -> Result<Self, PuzzleError>
	{
		let actual = (self.grid.rows(), self.grid.columns());
		if actual == (rows, columns)
		{
			Ok(self)
		}
		else
		{
			Err(PuzzleError::Dimensions { expected: (rows, columns), actual })
		}
	}

	/// Get the grid.
	#[inline]
	pub fn grid(&self) -> &Grid { &self.grid }

	/// Get the words to search for, in their original order.
	#[inline]
	#[must_use]
	pub fn words(&self) -> &[String] { &self.words }
}

/// Split word text into search words. Words are separated by runs of
/// whitespace and upper-cased. Order and duplicates are preserved.
///
/// # Arguments
///
/// * `text` - The word text.
///
/// # Returns
///
/// The search words.
#[must_use]
pub fn parse_words(text: &str) -> Vec<String>
{
	text.split_whitespace().map(str::to_uppercase).collect()
}

/// Read an entire file, attaching the path to any failure.
fn read_to_string(path: &Path) -> Result<String, PuzzleError>
{
	let text = fs::read_to_string(path)
		.map_err(|error| PuzzleError::Io { path: path.to_path_buf(), error })?;
	trace!("read puzzle file: {}", path.display());
	Ok(text)
}

/// The complete enumeration of [`Puzzle`] errors.
#[derive(Debug)]
pub enum PuzzleError
{
	/// The grid text is malformed.
	Grid(GridError),

	/// The grid does not have the required shape.
	Dimensions
	{
		/// The required rows and columns, respectively.
		expected: (usize, usize),

		/// The actual rows and columns, respectively.
		actual: (usize, usize)
	},

	/// A puzzle file could not be read.
	Io
	{
		/// The path of the file.
		path: PathBuf,

		/// The underlying error.
		error: io::Error
	}
}

impl From<GridError> for PuzzleError
{
	fn from(e: GridError) -> Self { Self::Grid(e) }
}

impl Display for PuzzleError
{
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		match self
		{
			Self::Grid(e) => write!(f, "malformed grid: {}", e),
			Self::Dimensions { expected, actual } => write!(
				f,
				"grid must be {}×{}, but is {}×{}",
				expected.0,
				expected.1,
				actual.0,
				actual.1
			),
			Self::Io { path, error } =>
				write!(f, "failed to read {}: {}", path.display(), error)
		}
	}
}

impl Error for PuzzleError
{
	fn source(&self) -> Option<&(dyn Error + 'static)>
	{
		match self
		{
			Self::Grid(e) => Some(e),
			Self::Dimensions { .. } => None,
			Self::Io { error, .. } => Some(error)
		}
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////
