//! # Grid
//!
//! Herein is the letter grid of a word search puzzle, together with the
//! parser that builds it from comma-separated text. Every runtime operation
//! is performed against a [`Grid`], which is guaranteed to be rectangular and
//! non-empty, so rectangular indexing is always safe.

use std::{
	error::Error,
	fmt::{self, Display, Formatter}
};

use log::trace;
use serde::Serialize;

////////////////////////////////////////////////////////////////////////////////
//                                   Cells.                                   //
////////////////////////////////////////////////////////////////////////////////

/// The coordinates of a single cell of a [`Grid`]. Both components are
/// zero-based, and the origin is the top-left corner.
#[derive(
	Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize
)]
#[must_use]
pub struct Cell
{
	/// The row, counting downward from the top.
	pub row: usize,

	/// The column, counting rightward from the left.
	pub column: usize
}

impl Cell
{
	/// Construct a new cell coordinate.
	///
	/// # Arguments
	///
	/// * `row` - The row.
	/// * `column` - The column.
	///
	/// # Returns
	///
	/// The requested cell coordinate.
	#[inline]
	pub const fn new(row: usize, column: usize) -> Self
	{
		Self { row, column }
	}

	/// Offset the cell by the given signed deltas, scaled by `steps`.
	///
	/// # Arguments
	///
	/// * `delta` - The row and column deltas, respectively.
	/// * `steps` - How many times to apply the deltas.
	///
	/// # Returns
	///
	/// The offset cell, or `None` if either component would become negative.
	#[inline]
	#[must_use]
	pub fn offset(&self, delta: (isize, isize), steps: usize) -> Option<Self>
	{
		let steps = isize::try_from(steps).ok()?;
		let row = self.row.checked_add_signed(delta.0.checked_mul(steps)?)?;
		let column =
			self.column.checked_add_signed(delta.1.checked_mul(steps)?)?;
		Some(Self { row, column })
	}
}

/// Renders as `row-col`, which is the key used to look up highlighted cells.
impl Display for Cell
{
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		write!(f, "{}-{}", self.row, self.column)
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                   Grids.                                   //
////////////////////////////////////////////////////////////////////////////////

/// A rectangular grid of single uppercase characters. All rows have the same
/// length, and there is at least one row and one column.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct Grid
{
	/// The characters of the grid, linearized in row-major order.
	letters: Vec<char>,

	/// The number of rows.
	rows: usize,

	/// The number of columns.
	columns: usize
}

impl Grid
{
	/// Parse a grid from text. Each line is a row, and each row is a
	/// comma-separated list of cells. Surrounding whitespace is trimmed from
	/// the whole input and from each cell, and every cell is upper-cased.
	///
	/// # Arguments
	///
	/// * `text` - The text to parse.
	///
	/// # Returns
	///
	/// The parsed grid.
	///
	/// # Errors
	///
	/// * [`GridError::Empty`] if the text has no content.
	/// * [`GridError::InvalidCell`] if a cell is not exactly one character.
	/// * [`GridError::RaggedRow`] if the rows have different lengths.
	pub fn parse(text: &str) -> Result<Self, GridError>
	{
		let text = text.trim();
		if text.is_empty()
		{
			return Err(GridError::Empty)
		}
		let rows = text.lines()
			.enumerate()
			.map(|(row, line)| {
				line.split(',')
					.enumerate()
					.map(|(column, cell)| parse_cell(Cell::new(row, column), cell))
					.collect::<Result<Vec<_>, _>>()
			})
			.collect::<Result<Vec<_>, _>>()?;
		let grid = Self::from_rows(rows)?;
		trace!("parsed grid: {}×{}", grid.rows, grid.columns);
		Ok(grid)
	}

	/// Construct a grid from rows of characters. The characters are taken
	/// verbatim, so the caller is responsible for any case folding.
	///
	/// # Arguments
	///
	/// * `rows` - The rows of the grid, from top to bottom.
	///
	/// # Returns
	///
	/// The grid.
	///
	/// # Errors
	///
	/// * [`GridError::Empty`] if there are no rows, or the rows are empty.
	/// * [`GridError::RaggedRow`] if the rows have different lengths.
	pub fn from_rows<R: AsRef<[char]>>(rows: impl IntoIterator<Item = R>)
		-> Result<Self, GridError>
	{
		let mut letters = Vec::new();
		let mut columns = None;
		let mut count = 0;
		for (row, cells) in rows.into_iter().enumerate()
		{
			let cells = cells.as_ref();
			match columns
			{
				None => columns = Some(cells.len()),
				Some(expected) if expected != cells.len() =>
				{
					return Err(GridError::RaggedRow {
						row,
						expected,
						actual: cells.len()
					})
				},
				Some(_) => {}
			}
			letters.extend_from_slice(cells);
			count += 1;
		}
		match columns
		{
			Some(columns) if columns > 0 =>
				Ok(Self { letters, rows: count, columns }),
			_ => Err(GridError::Empty)
		}
	}

	/// Get the number of rows.
	#[inline]
	#[must_use]
	pub fn rows(&self) -> usize { self.rows }

	/// Get the number of columns.
	#[inline]
	#[must_use]
	pub fn columns(&self) -> usize { self.columns }

	/// Check whether the given cell lies within the grid.
	///
	/// # Arguments
	///
	/// * `cell` - The cell to check.
	///
	/// # Returns
	///
	/// `true` if the cell is in bounds, `false` otherwise.
	#[inline]
	#[must_use]
	pub fn contains(&self, cell: Cell) -> bool
	{
		cell.row < self.rows && cell.column < self.columns
	}

	/// Get the character at the given cell.
	///
	/// # Arguments
	///
	/// * `cell` - The target cell.
	///
	/// # Returns
	///
	/// The character at the cell, or `None` if the cell is out of bounds.
	#[inline]
	#[must_use]
	pub fn get(&self, cell: Cell) -> Option<char>
	{
		if self.contains(cell)
		{
			Some(self.letters[cell.row * self.columns + cell.column])
		}
		else
		{
			None
		}
	}

	/// Get the characters of the given row.
	///
	/// # Arguments
	///
	/// * `row` - The row index.
	///
	/// # Returns
	///
	/// The row, or `None` if the row is out of bounds.
	#[must_use]
	pub fn row(&self, row: usize) -> Option<&[char]>
	{
		if row < self.rows
		{
			let start = row * self.columns;
			Some(&self.letters[start .. start + self.columns])
		}
		else
		{
			None
		}
	}

	/// Get an iterator over every cell of the grid, in row-major order. This
	/// is the scan order of the search engine.
	///
	/// # Returns
	///
	/// An iterator over the cells.
	pub fn cells(&self) -> impl Iterator<Item = Cell> + '_
	{
		(0 .. self.rows).flat_map(move |row| {
			(0 .. self.columns).map(move |column| Cell::new(row, column))
		})
	}

	/// Read the characters at the given cells, in order.
	///
	/// # Arguments
	///
	/// * `cells` - The cells to read.
	///
	/// # Returns
	///
	/// The string spelled by the cells. Out-of-bounds cells are skipped.
	#[must_use]
	pub fn spell(&self, cells: &[Cell]) -> String
	{
		cells.iter().filter_map(|&cell| self.get(cell)).collect()
	}
}

/// Parse a single cell of grid text.
///
/// # Arguments
///
/// * `cell` - The coordinates of the cell, for error reporting.
/// * `content` - The raw text of the cell.
///
/// # Returns
///
/// The upper-cased character.
///
/// # Errors
///
/// [`GridError::InvalidCell`] if the cell is not exactly one character once
/// trimmed and upper-cased.
fn parse_cell(cell: Cell, content: &str) -> Result<char, GridError>
{
	let upper = content.trim().to_uppercase();
	let mut chars = upper.chars();
	match (chars.next(), chars.next())
	{
		(Some(c), None) => Ok(c),
		_ => Err(GridError::InvalidCell { cell, content: content.to_string() })
	}
}

/// The complete enumeration of [`Grid`] construction errors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError
{
	/// The grid has no rows or no columns.
	Empty,

	/// A cell does not hold exactly one character.
	InvalidCell
	{
		/// The offending cell.
		cell: Cell,

		/// The raw content of the cell.
		content: String
	},

	/// A row does not have the same number of cells as the first row.
	RaggedRow
	{
		/// The index of the offending row.
		row: usize,

		/// The number of cells in the first row.
		expected: usize,

		/// The number of cells in the offending row.
		actual: usize
	}
}

impl Display for GridError
{
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		match self
		{
			Self::Empty => write!(f, "grid is empty"),
			Self::InvalidCell { cell, content } => write!(
				f,
				"cell {} must hold exactly one character, not {:?}",
				cell,
				content
			),
			Self::RaggedRow { row, expected, actual } => write!(
				f,
				"row {} has {} cells, but the first row has {}",
				row,
				actual,
				expected
			)
		}
	}
}

impl Error for GridError {}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////
