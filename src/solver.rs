//! # Solver
//!
//! Herein is the word search engine. The engine itself comprises pure
//! functions over an immutable [`Grid`]: [`find_word_at`], [`find_word`], and
//! [`find_all_words`]. Results are deterministic: cells are scanned in
//! row-major order, and at each cell the eight [directions](Direction) are
//! tried in their fixed order, so the first placement found always wins, even
//! when a word occurs more than once.
//!
//! [`Solver`] wraps the engine in a continuation context, so that a caller
//! can search a few words at a time and report progress in between.
//! [`Classification`] and the highlight functions derive the views that a
//! user interface needs from a list of [`WordMatch`]es.

use std::{
	collections::HashSet,
	fmt::{self, Display, Formatter},
	rc::Rc,
	time::{Duration, Instant}
};

use log::{debug, trace};
use serde::{Serialize, Serializer};

use crate::{grid::{Cell, Grid}, puzzle::Puzzle};

////////////////////////////////////////////////////////////////////////////////
//                                Directions.                                 //
////////////////////////////////////////////////////////////////////////////////

/// A direction in which a word may be laid out in the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction
{
	/// Left to right.
	Right,

	/// Right to left.
	Left,

	/// Top to bottom.
	Down,

	/// Bottom to top.
	Up,

	/// Top left to bottom right.
	DownRight,

	/// Bottom right to top left.
	UpLeft,

	/// Top right to bottom left.
	DownLeft,

	/// Bottom left to top right.
	UpRight
}

impl Direction
{
	/// Every direction, in search order. Changing this order changes which
	/// placement is reported for words that occur more than once.
	pub const ALL: [Direction; 8] = [
		Self::Right,
		Self::Left,
		Self::Down,
		Self::Up,
		Self::DownRight,
		Self::UpLeft,
		Self::DownLeft,
		Self::UpRight
	];

	/// Get the row and column deltas of a single step in this direction.
	///
	/// # Returns
	///
	/// The row delta and the column delta, respectively.
	#[inline]
	#[must_use]
	pub const fn delta(self) -> (isize, isize)
	{
		match self
		{
			Self::Right => (0, 1),
			Self::Left => (0, -1),
			Self::Down => (1, 0),
			Self::Up => (-1, 0),
			Self::DownRight => (1, 1),
			Self::UpLeft => (-1, -1),
			Self::DownLeft => (1, -1),
			Self::UpRight => (-1, 1)
		}
	}

	/// Get the human-readable label of this direction.
	#[inline]
	#[must_use]
	pub const fn label(self) -> &'static str
	{
		match self
		{
			Self::Right => "Horizontal →",
			Self::Left => "Horizontal ←",
			Self::Down => "Vertical ↓",
			Self::Up => "Vertical ↑",
			Self::DownRight => "Diagonal ↘",
			Self::UpLeft => "Diagonal ↖",
			Self::DownLeft => "Diagonal ↙",
			Self::UpRight => "Diagonal ↗"
		}
	}
}

impl Display for Direction
{
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		f.write_str(self.label())
	}
}

/// Directions serialize as their labels.
impl Serialize for Direction
{
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error>
	{
		serializer.serialize_str(self.label())
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                  Engine.                                   //
////////////////////////////////////////////////////////////////////////////////

/// A word found in the grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[must_use]
pub struct WordMatch
{
	/// The word, upper-cased.
	pub word: String,

	/// The cells occupied by the word, one per character, starting with the
	/// cell of the first character.
	pub cells: Vec<Cell>,

	/// The direction in which the word reads.
	pub direction: Direction
}

/// Renders as tab-separated text: the word, the direction label, and the
/// space-separated keys of the cells.
impl Display for WordMatch
{
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		write!(f, "{}\t{}\t", self.word, self.direction)?;
		for (i, cell) in self.cells.iter().enumerate()
		{
			if i > 0
			{
				f.write_str(" ")?;
			}
			write!(f, "{}", cell)?;
		}
		Ok(())
	}
}

/// Attempt to read `word` from the grid, starting at `start` and stepping in
/// `direction`. The attempt stops at the first cell that is out of bounds or
/// holds the wrong character.
///
/// # Arguments
///
/// * `grid` - The grid to search.
/// * `word` - The word to find, which must already be upper-cased.
/// * `start` - The cell of the first character.
/// * `direction` - The direction to read in.
///
/// # Returns
///
/// The cells of the word, in reading order, or `None` if the word is not at
/// this position. The empty word is never found.
#[must_use]
pub fn find_word_at(
	grid: &Grid,
	word: &str,
	start: Cell,
	direction: Direction
) -> Option<Vec<Cell>>
{
	if word.is_empty()
	{
		return None
	}
	let delta = direction.delta();
	let mut cells = Vec::with_capacity(word.len());
	for (i, c) in word.chars().enumerate()
	{
		let cell = start.offset(delta, i)?;
		if grid.get(cell)? != c
		{
			return None
		}
		cells.push(cell);
	}
	Some(cells)
}

/// Find the first placement of `word` in the grid. Cells are scanned in
/// row-major order, and each cell tries every direction in the order of
/// [`Direction::ALL`].
///
/// # Arguments
///
/// * `grid` - The grid to search.
/// * `word` - The word to find, which must already be upper-cased.
///
/// # Returns
///
/// The first match, or `None` if the word does not occur.
#[must_use]
pub fn find_word(grid: &Grid, word: &str) -> Option<WordMatch>
{
	grid.cells()
		.flat_map(|cell| Direction::ALL.into_iter().map(move |d| (cell, d)))
		.find_map(|(cell, direction)| {
			find_word_at(grid, word, cell, direction).map(|cells| WordMatch {
				word: word.to_string(),
				cells,
				direction
			})
		})
}

/// Find every word of the list in the grid. Words that do not occur are
/// simply omitted; absence is not an error.
///
/// # Arguments
///
/// * `grid` - The grid to search.
/// * `words` - The words to find, which must already be upper-cased.
///
/// # Returns
///
/// One match per found word, in the order of `words`.
pub fn find_all_words<T: AsRef<str>>(grid: &Grid, words: &[T]) -> Vec<WordMatch>
{
	words.iter()
		.filter_map(|word| find_word(grid, word.as_ref()))
		.collect()
}

////////////////////////////////////////////////////////////////////////////////
//                                  Solver.                                   //
////////////////////////////////////////////////////////////////////////////////

/// The complete context of an incremental search. This permits the search to
/// be time-sliced, so that a user interface remains responsive and can show
/// each word as it is discovered. Running the solver to completion produces
/// exactly the result of [`find_all_words`].
#[derive(Clone, Debug)]
#[must_use]
pub struct Solver
{
	/// The puzzle to solve.
	puzzle: Rc<Puzzle>,

	/// The index of the next word to search for.
	next: usize,

	/// The words found so far.
	solution: Vec<WordMatch>
}

impl Solver
{
	/// Construct a new solver for the given puzzle.
	///
	/// # Arguments
	///
	/// * `puzzle` - The puzzle to solve.
	///
	/// # Returns
	///
	/// A new solver that has not yet searched for anything.
	pub fn new(puzzle: Rc<Puzzle>) -> Self
	{
		Self { puzzle, next: 0, solution: Vec::new() }
	}

	/// Get the puzzle being solved.
	#[inline]
	pub fn puzzle(&self) -> &Puzzle { &self.puzzle }

	/// Check if the solver is finished, i.e., every word has been searched
	/// for.
	///
	/// # Returns
	///
	/// `true` if the solver is finished, `false` otherwise.
	#[inline]
	#[must_use]
	pub fn is_finished(&self) -> bool
	{
		self.next >= self.puzzle.words().len()
	}

	/// Get the progress of the solver.
	///
	/// # Returns
	///
	/// The number of words searched for so far and the total number of words,
	/// respectively.
	#[inline]
	#[must_use]
	pub fn progress(&self) -> (usize, usize)
	{
		(self.next, self.puzzle.words().len())
	}

	/// Run the solver until a single word is found, the word list is
	/// exhausted, or the specified quantum elapses. Always search for at
	/// least one word, even if the quantum is zero, to ensure that the solver
	/// always makes progress.
	///
	/// # Arguments
	///
	/// * `duration` - The maximum amount of time to run the solver before
	///   answering a continuation context.
	///
	/// # Returns
	///
	/// A 2-tuple comprising the continuation context and any word found,
	/// respectively. The caller should call [`is_finished`](Self::is_finished)
	/// to determine if there is any additional work to perform.
	pub fn solve(mut self, duration: Duration) -> (Self, Option<WordMatch>)
	{
		if self.is_finished()
		{
			trace!("solver is already finished");
			return (self, None)
		}
		let start_time = Instant::now();
		while let Some(word) = self.puzzle.words().get(self.next)
		{
			trace!("searching for: {}", word);
			let found = find_word(self.puzzle.grid(), word);
			self.next += 1;
			match found
			{
				Some(found) =>
				{
					debug!(
						"found word: {} ({}) at {}",
						found.word,
						found.direction,
						found.cells[0]
					);
					self.solution.push(found.clone());
					return (self, Some(found))
				},
				None => debug!("word not found: {}", word)
			}
			let elapsed = Instant::now().duration_since(start_time);
			if elapsed >= duration
			{
				trace!("quantum elapsed: {:?}", elapsed);
				return (self, None)
			}
		}
		debug!("exhausted word list");
		(self, None)
	}

	/// Run the solver until the word list is exhausted.
	///
	/// # Returns
	///
	/// The final context.
	pub fn solve_fully(mut self) -> Self
	{
		while !self.is_finished()
		{
			self = self.solve(Duration::MAX).0;
		}
		self
	}

	/// Get the words found so far, in the order of the word list.
	#[inline]
	#[must_use]
	pub fn solution(&self) -> &[WordMatch]
	{
		&self.solution
	}

	/// Classify the words of the puzzle by whether they have been found so
	/// far.
	///
	/// # Returns
	///
	/// The classification.
	pub fn classification(&self) -> Classification
	{
		Classification::new(self.puzzle.words(), &self.solution)
	}
}

////////////////////////////////////////////////////////////////////////////////
//                              Classification.                               //
////////////////////////////////////////////////////////////////////////////////

/// The words of a puzzle, partitioned by whether they were found. Both lists
/// preserve the order of the word list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[must_use]
pub struct Classification
{
	/// The words that were found.
	matched: Vec<String>,

	/// The words that were not found.
	unmatched: Vec<String>,

	/// The number of matches.
	found_count: usize,

	/// The number of words searched for.
	total_count: usize
}

impl Classification
{
	/// Partition `words` according to `matches`. Comparison is exact, so
	/// both must already be upper-cased.
	///
	/// # Arguments
	///
	/// * `words` - The words searched for.
	/// * `matches` - The matches found.
	///
	/// # Returns
	///
	/// The classification.
	pub fn new<T: AsRef<str>>(words: &[T], matches: &[WordMatch]) -> Self
	{
		let found = matches.iter()
			.map(|m| m.word.as_str())
			.collect::<HashSet<_>>();
		let (matched, unmatched): (Vec<_>, Vec<_>) = words.iter()
			.map(|word| word.as_ref().to_string())
			.partition(|word| found.contains(word.as_str()));
		Self {
			matched,
			unmatched,
			found_count: matches.len(),
			total_count: words.len()
		}
	}

	/// Get the words that were found.
	#[inline]
	#[must_use]
	pub fn matched(&self) -> &[String] { &self.matched }

	/// Get the words that were not found.
	#[inline]
	#[must_use]
	pub fn unmatched(&self) -> &[String] { &self.unmatched }

	/// Get the number of matches.
	#[inline]
	#[must_use]
	pub fn found_count(&self) -> usize { self.found_count }

	/// Get the number of words searched for.
	#[inline]
	#[must_use]
	pub fn total_count(&self) -> usize { self.total_count }
}

impl Display for Classification
{
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		write!(f, "{} of {} words found", self.found_count, self.total_count)
	}
}

/// Get the cells to highlight for the given word.
///
/// # Arguments
///
/// * `matches` - The matches found.
/// * `word` - The selected word.
///
/// # Returns
///
/// The cells of the first match for `word`, or the empty set if the word was
/// not found.
#[must_use]
pub fn highlight_cells(matches: &[WordMatch], word: &str) -> HashSet<Cell>
{
	matches.iter()
		.find(|m| m.word == word)
		.map(|m| m.cells.iter().copied().collect())
		.unwrap_or_default()
}

/// Get the cells to highlight for the given word, keyed as `row-col`
/// strings.
///
/// # Arguments
///
/// * `matches` - The matches found.
/// * `word` - The selected word.
///
/// # Returns
///
/// The keys of the cells of the first match for `word`, or the empty set if
/// the word was not found.
#[must_use]
pub fn highlight_keys(matches: &[WordMatch], word: &str) -> HashSet<String>
{
	highlight_cells(matches, word).iter()
		.map(Cell::to_string)
		.collect()
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod test
{
	use std::{collections::HashSet, rc::Rc, time::Duration};

	use crate::{
		grid::{Cell, Grid},
		puzzle::{parse_words, Puzzle},
		solver::{
			find_all_words, find_word, find_word_at, highlight_cells,
			highlight_keys, Classification, Direction, Solver, WordMatch
		}
	};

	/// Build a list of cells from row-column pairs.
	fn cells(pairs: &[(usize, usize)]) -> Vec<Cell>
	{
		pairs.iter().map(|&(row, column)| Cell::new(row, column)).collect()
	}

	/// A grid holding CAT (across and diagonally) and DOG (downward).
	fn grid() -> Grid
	{
		Grid::parse(
			"C,A,T,X,Q\n\
			 O,A,X,Q,D\n\
			 W,Y,T,Z,O\n\
			 Q,Q,Q,Q,G"
		).unwrap()
	}

	/// Ensure that the directions have the right deltas, labels, and order.
	#[test]
	fn test_directions()
	{
		let deltas = Direction::ALL.iter()
			.map(|d| d.delta())
			.collect::<Vec<_>>();
		assert_eq!(
			deltas,
			vec![(0, 1), (0, -1), (1, 0), (-1, 0), (1, 1), (-1, -1), (1, -1), (-1, 1)]
		);
		let labels = Direction::ALL.iter()
			.map(|d| d.to_string())
			.collect::<Vec<_>>();
		assert_eq!(
			labels,
			vec![
				"Horizontal →",
				"Horizontal ←",
				"Vertical ↓",
				"Vertical ↑",
				"Diagonal ↘",
				"Diagonal ↖",
				"Diagonal ↙",
				"Diagonal ↗"
			]
		);
	}

	/// Ensure that a word is read from a fixed position, and that every
	/// failure is total rather than partial.
	#[test]
	fn test_find_word_at()
	{
		let grid = grid();
		assert_eq!(
			find_word_at(&grid, "CAT", Cell::new(0, 0), Direction::Right),
			Some(cells(&[(0, 0), (0, 1), (0, 2)]))
		);
		assert_eq!(
			find_word_at(&grid, "TAC", Cell::new(0, 2), Direction::Left),
			Some(cells(&[(0, 2), (0, 1), (0, 0)]))
		);
		assert_eq!(
			find_word_at(&grid, "CAT", Cell::new(0, 0), Direction::DownRight),
			Some(cells(&[(0, 0), (1, 1), (2, 2)]))
		);
		// Mismatch on the last character.
		assert_eq!(
			find_word_at(&grid, "CAX", Cell::new(0, 0), Direction::Right),
			None
		);
		// Running off every edge from the corners.
		assert_eq!(
			find_word_at(&grid, "CO", Cell::new(0, 0), Direction::Up),
			None
		);
		assert_eq!(
			find_word_at(&grid, "CX", Cell::new(0, 0), Direction::Left),
			None
		);
		assert_eq!(
			find_word_at(&grid, "CQ", Cell::new(0, 0), Direction::UpLeft),
			None
		);
		assert_eq!(
			find_word_at(&grid, "QX", Cell::new(0, 4), Direction::Right),
			None
		);
		assert_eq!(
			find_word_at(&grid, "QX", Cell::new(0, 4), Direction::UpRight),
			None
		);
		assert_eq!(
			find_word_at(&grid, "GQ", Cell::new(3, 4), Direction::Down),
			None
		);
		assert_eq!(
			find_word_at(&grid, "GQ", Cell::new(3, 4), Direction::DownRight),
			None
		);
		assert_eq!(
			find_word_at(&grid, "QQ", Cell::new(3, 0), Direction::DownLeft),
			None
		);
		// Starting outside the grid.
		assert_eq!(
			find_word_at(&grid, "Q", Cell::new(4, 0), Direction::Right),
			None
		);
		assert_eq!(find_word_at(&grid, "", Cell::new(0, 0), Direction::Right), None);
	}

	/// A word along the top row reads right from the origin.
	#[test]
	fn test_horizontal()
	{
		let grid = Grid::parse("C,A,T,X").unwrap();
		let found = find_word(&grid, "CAT").unwrap();
		assert_eq!(found.word, "CAT");
		assert_eq!(found.cells, cells(&[(0, 0), (0, 1), (0, 2)]));
		assert_eq!(found.direction, Direction::Right);
		assert_eq!(found.direction.label(), "Horizontal →");
	}

	/// A word down a column reads in increasing row order.
	#[test]
	fn test_vertical()
	{
		let grid = grid();
		let found = find_word(&grid, "DOG").unwrap();
		assert_eq!(found.direction, Direction::Down);
		assert_eq!(found.direction.label(), "Vertical ↓");
		assert_eq!(found.cells, cells(&[(1, 4), (2, 4), (3, 4)]));
		assert_eq!(grid.spell(&found.cells), "DOG");
	}

	/// A word along the main diagonal.
	#[test]
	fn test_diagonal()
	{
		let grid = Grid::parse("C,X,X\nX,A,X\nX,X,T").unwrap();
		let found = find_word(&grid, "CAT").unwrap();
		assert_eq!(found.direction, Direction::DownRight);
		assert_eq!(found.direction.label(), "Diagonal ↘");
		assert_eq!(found.cells, cells(&[(0, 0), (1, 1), (2, 2)]));
	}

	/// Words laid out backward and along the anti-diagonals.
	#[test]
	fn test_reverse_directions()
	{
		let grid = Grid::parse(
			"A,B,C,D\n\
			 E,F,G,H\n\
			 I,J,K,L\n\
			 M,N,O,P"
		).unwrap();
		let cases = [
			("DCBA", Direction::Left, (0, 3)),
			("MIEA", Direction::Up, (3, 0)),
			("PKFA", Direction::UpLeft, (3, 3)),
			("DGJM", Direction::DownLeft, (0, 3)),
			("MJGD", Direction::UpRight, (3, 0))
		];
		for (word, direction, start) in cases
		{
			let found = find_word(&grid, word).unwrap();
			assert_eq!(found.direction, direction, "{}", word);
			assert_eq!(found.cells[0], Cell::new(start.0, start.1), "{}", word);
			assert_eq!(grid.spell(&found.cells), word);
		}
	}

	/// Absent words are omitted, and reported as unmatched.
	#[test]
	fn test_absent()
	{
		let grid = grid();
		let words = parse_words("ZZZZ cat dog");
		let found = find_all_words(&grid, &words);
		assert_eq!(
			found.iter().map(|m| m.word.as_str()).collect::<Vec<_>>(),
			vec!["CAT", "DOG"]
		);
		let classification = Classification::new(&words, &found);
		assert_eq!(classification.matched(), &["CAT", "DOG"]);
		assert_eq!(classification.unmatched(), &["ZZZZ"]);
		assert_eq!(classification.found_count(), 2);
		assert_eq!(classification.total_count(), 3);
		assert_eq!(classification.to_string(), "2 of 3 words found");
	}

	/// When a word occurs twice, the placement in the earlier row wins, even
	/// though its direction comes later in the search order.
	#[test]
	fn test_first_placement_wins()
	{
		let grid = Grid::parse(
			"X,O,T,A,G\n\
			 X,X,X,X,X\n\
			 G,X,X,X,X\n\
			 A,X,X,X,X\n\
			 T,X,X,X,X\n\
			 O,X,X,X,X"
		).unwrap();
		let found = find_word(&grid, "GATO").unwrap();
		assert_eq!(found.direction, Direction::Left);
		assert_eq!(found.cells, cells(&[(0, 4), (0, 3), (0, 2), (0, 1)]));

		// Within a single start cell, the direction order breaks the tie.
		let grid = Grid::parse("A,B\nB,B").unwrap();
		let found = find_word(&grid, "AB").unwrap();
		assert_eq!(found.direction, Direction::Right);

		// Repeated invocation is deterministic.
		let words = ["GATO", "AB", "BB"];
		assert_eq!(
			find_all_words(&grid, &words),
			find_all_words(&grid, &words)
		);
	}

	/// Scenario: one horizontal placement at row 0, one vertical placement
	/// starting at row 2; the horizontal one is reported.
	#[test]
	fn test_horizontal_before_vertical()
	{
		let grid = Grid::parse(
			"G,A,T,O,X\n\
			 X,X,X,X,X\n\
			 X,X,X,X,G\n\
			 X,X,X,X,A\n\
			 X,X,X,X,T\n\
			 X,X,X,X,O"
		).unwrap();
		let found = find_word(&grid, "GATO").unwrap();
		assert_eq!(found.direction.label(), "Horizontal →");
		assert_eq!(found.cells[0], Cell::new(0, 0));
	}

	/// Mixed-case words match once they pass through the word parser.
	#[test]
	fn test_case_insensitive()
	{
		let grid = grid();
		let lower = find_all_words(&grid, &parse_words("cAt Dog"));
		let upper = find_all_words(&grid, &parse_words("CAT DOG"));
		assert_eq!(lower, upper);
		assert_eq!(lower.len(), 2);
	}

	/// Duplicate words are searched for (and reported) once per occurrence.
	#[test]
	fn test_duplicates()
	{
		let grid = grid();
		let found = find_all_words(&grid, &["CAT", "CAT"]);
		assert_eq!(found.len(), 2);
		assert_eq!(found[0], found[1]);
	}

	/// Every match of the sample puzzle spells its word, and the first
	/// placements are the expected ones.
	#[test]
	fn test_sample()
	{
		let puzzle = Puzzle::sample().unwrap();
		let found = find_all_words(puzzle.grid(), puzzle.words());
		assert_eq!(found.len(), 17);
		for m in found.iter()
		{
			assert_eq!(puzzle.grid().spell(&m.cells), m.word);
		}
		let expected = [
			("MANATI", Direction::Right, (12, 8)),
			("LEON", Direction::Down, (6, 1)),
			("PERRO", Direction::Right, (13, 9)),
			("LORO", Direction::UpLeft, (10, 12)),
			("GATO", Direction::Right, (5, 5)),
			("TORO", Direction::Up, (8, 13)),
			("CONEJO", Direction::Right, (8, 0)),
			("ORUGA", Direction::UpRight, (6, 9)),
			("TIBURON", Direction::Right, (7, 4)),
			("ELEFANTE", Direction::Right, (3, 2)),
			("ALCON", Direction::Right, (11, 8)),
			("SERPIENTE", Direction::Right, (10, 2)),
			("JAGUAR", Direction::Right, (2, 0)),
			("CANGURO", Direction::Right, (0, 5)),
			("LOBO", Direction::Right, (4, 0)),
			("MONO", Direction::Right, (12, 0)),
			("NUTRIA", Direction::Right, (4, 4))
		];
		for (m, (word, direction, start)) in found.iter().zip(expected)
		{
			assert_eq!(m.word, word);
			assert_eq!(m.direction, direction, "{}", word);
			assert_eq!(m.cells[0], Cell::new(start.0, start.1), "{}", word);
		}
	}

	/// Ensure that highlights are looked up by word, as cells or as keys.
	#[test]
	fn test_highlight()
	{
		let grid = grid();
		let found = find_all_words(&grid, &["CAT", "DOG"]);
		assert_eq!(
			highlight_cells(&found, "DOG"),
			HashSet::from([Cell::new(1, 4), Cell::new(2, 4), Cell::new(3, 4)])
		);
		assert_eq!(
			highlight_keys(&found, "CAT"),
			HashSet::from([
				"0-0".to_string(),
				"0-1".to_string(),
				"0-2".to_string()
			])
		);
		assert!(highlight_cells(&found, "ZZZZ").is_empty());
		assert!(highlight_keys(&found, "cat").is_empty());
	}

	/// Ensure that the incremental solver stops at each found word, and that
	/// its final solution agrees with the engine.
	#[test]
	fn test_solver()
	{
		let puzzle = Rc::new(Puzzle::parse(
			"C,A,T,X,Q\nO,A,X,Q,D\nW,Y,T,Z,O\nQ,Q,Q,Q,G",
			"zzzz cat yyyy dog"
		).unwrap());
		let solver = Solver::new(Rc::clone(&puzzle));
		assert!(!solver.is_finished());
		assert_eq!(solver.progress(), (0, 4));

		// ZZZZ is not found, and a zero quantum stops after one word.
		let (solver, found) = solver.solve(Duration::ZERO);
		assert_eq!(found, None);
		assert_eq!(solver.progress(), (1, 4));

		let (solver, found) = solver.solve(Duration::MAX);
		assert_eq!(found.map(|m| m.word), Some("CAT".to_string()));
		assert_eq!(solver.progress(), (2, 4));

		let (solver, found) = solver.solve(Duration::MAX);
		assert_eq!(found.map(|m| m.word), Some("DOG".to_string()));
		assert!(solver.is_finished());

		let (solver, found) = solver.solve(Duration::MAX);
		assert_eq!(found, None);
		assert!(solver.is_finished());

		let expected = find_all_words(puzzle.grid(), puzzle.words());
		assert_eq!(solver.solution(), expected.as_slice());
		let classification = solver.classification();
		assert_eq!(classification.matched(), &["CAT", "DOG"]);
		assert_eq!(classification.unmatched(), &["ZZZZ", "YYYY"]);
	}

	/// Ensure that solving the sample fully matches the engine, and that an
	/// empty word list finishes immediately.
	#[test]
	fn test_solve_fully()
	{
		let puzzle = Rc::new(Puzzle::sample().unwrap());
		let solver = Solver::new(Rc::clone(&puzzle)).solve_fully();
		assert!(solver.is_finished());
		let expected = find_all_words(puzzle.grid(), puzzle.words());
		assert_eq!(solver.solution(), expected.as_slice());
		assert_eq!(solver.classification().to_string(), "17 of 17 words found");

		let puzzle = Rc::new(Puzzle::parse("A", "").unwrap());
		let solver = Solver::new(puzzle);
		assert!(solver.is_finished());
		let solver = solver.solve_fully();
		assert!(solver.solution().is_empty());
		assert_eq!(solver.classification().to_string(), "0 of 0 words found");
	}

	/// Ensure that matches render and serialize with labelled directions.
	#[test]
	fn test_serialize()
	{
		let found = WordMatch {
			word: "CAT".to_string(),
			cells: cells(&[(0, 0), (0, 1)]),
			direction: Direction::Right
		};
		assert_eq!(found.to_string(), "CAT\tHorizontal →\t0-0 0-1");
		let json = serde_json::to_value(&found).unwrap();
		assert_eq!(json["word"], "CAT");
		assert_eq!(json["direction"], "Horizontal →");
		assert_eq!(json["cells"][1]["row"], 0);
		assert_eq!(json["cells"][1]["column"], 1);
	}
}
