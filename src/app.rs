//! # Application
//!
//! The application state and logic of the word search browser. The search
//! runs in short slices between frames, so each word can be shown as it is
//! found; afterward the user picks words from the list to highlight their
//! cells in the grid.

use std::{
	collections::HashSet,
	io,
	mem::swap,
	rc::Rc,
	time::{Duration, Instant}
};

use crossterm::event::{poll, read, Event, KeyCode, KeyEvent, KeyEventKind};
use log::trace;
use ratatui::{
	buffer::Buffer,
	layout::{Alignment, Constraint, Direction, Layout, Rect},
	style::{Color, Modifier, Style, Stylize},
	text::{Line, Span},
	widgets::{
		block::{Position, Title},
		Block, Borders, List, ListItem, ListState, Paragraph,
		StatefulWidget, Widget
	},
	Frame
};
use word_search_solver::{
	grid::Cell,
	puzzle::Puzzle,
	solver::{highlight_cells, Solver, WordMatch}
};

use crate::tui::Tui;

////////////////////////////////////////////////////////////////////////////////
//                                Application.                                //
////////////////////////////////////////////////////////////////////////////////

/// The application state.
#[must_use]
pub struct App
{
	/// Whether the application is running, and what it is doing.
	state: ExecutionState,

	/// How long (in ms) to highlight each word as it is found.
	highlight_duration_ms: u64
}

// Public interface.
impl App
{
	/// Create a new application state. The search starts immediately.
	///
	/// # Arguments
	///
	/// * `highlight_duration_ms` - How long (in ms) to highlight each word as
	///   it is found.
	/// * `puzzle` - The puzzle to solve.
	///
	/// # Returns
	///
	/// The new application state.
	#[inline]
	pub fn new(highlight_duration_ms: u64, puzzle: Puzzle) -> Self
	{
		Self {
			state: ExecutionState::Solving {
				solver: Solver::new(Rc::new(puzzle))
			},
			highlight_duration_ms
		}
	}

	/// Run the application. This amounts to:
	///
	/// * Running any background tasks, such as the solver or the highlighter.
	/// * Rendering the application frame.
	/// * Processing events.
	///
	/// # Arguments
	///
	/// * `tui` - The text-based user interface (TUI).
	///
	/// # Returns
	///
	/// The solution to the puzzle, one line per word found. Empty if the user
	/// exits before the search finishes.
	///
	/// # Errors
	///
	/// Any error that occurs while running the application.
	pub fn run(mut self, tui: &mut Tui) -> io::Result<Vec<String>>
	{
		while self.is_running()
		{
			self.process_systems();
			tui.draw(|frame| self.render_frame(frame))?;
			self.process_event()?;
		}
		match self.state
		{
			ExecutionState::Exiting { solution } => Ok(solution),
			_ => Ok(vec![])
		}
	}

	/// Check if the application is running.
	///
	/// # Returns
	///
	/// `true` if the application is running, `false` otherwise.
	#[inline]
	#[must_use]
	pub fn is_running(&self) -> bool
	{
		!matches!(self.state, ExecutionState::Exiting { .. })
	}
}

// Private implementation details.
impl App
{
	/// Get the words to list once the search has finished: the found words
	/// first, then the others.
	///
	/// # Arguments
	///
	/// * `solver` - The finished solver.
	///
	/// # Returns
	///
	/// The listed words, each paired with whether it was found.
	#[must_use]
	fn entries(solver: &Solver) -> Vec<(String, bool)>
	{
		let classification = solver.classification();
		let found = solver.solution().iter().map(|m| (m.word.clone(), true));
		let missing = classification.unmatched().iter()
			.map(|word| (word.clone(), false));
		found.chain(missing).collect()
	}

	/// Get the cells to highlight in the grid.
	///
	/// # Returns
	///
	/// The cells of the word being shown or selected, if any.
	#[must_use]
	fn highlighted(&self) -> HashSet<Cell>
	{
		match self.state
		{
			ExecutionState::Highlighting { ref found, .. } =>
				found.cells.iter().copied().collect(),
			ExecutionState::Finished { ref solver, selected: Some(index) } =>
				Self::entries(solver).get(index)
					.map(|(word, _)| highlight_cells(solver.solution(), word))
					.unwrap_or_default(),
			_ => HashSet::new()
		}
	}

	/// Move the selection through the word list. With no selection, the sign
	/// of the change picks the end to start from: positive for the first word
	/// and negative for the last. Moving past either end clears the
	/// selection.
	///
	/// # Arguments
	///
	/// * `di` - The change in the selected index.
	fn move_selection(&mut self, di: isize)
	{
		if let ExecutionState::Finished { ref solver, ref mut selected } =
			self.state
		{
			let count = Self::entries(solver).len();
			*selected = match *selected
			{
				Some(index) => index.checked_add_signed(di)
					.filter(|&next| next < count),
				None if di > 0 => di.unsigned_abs().checked_sub(1)
					.filter(|&next| next < count),
				None if di < 0 => count.checked_sub(di.unsigned_abs()),
				None => None
			};
		}
	}

	/// Clear the selection, and with it the highlight.
	fn clear_selection(&mut self)
	{
		if let ExecutionState::Finished { ref mut selected, .. } = self.state
		{
			*selected = None;
		}
	}

	/// Render the application frame.
	///
	/// # Arguments
	///
	/// * `frame` - The target frame.
	fn render_frame(&self, frame: &mut Frame)
	{
		frame.render_widget(self, frame.area());
	}

	/// Render the grid, highlighting the given cells.
	///
	/// # Arguments
	///
	/// * `area` - The target area.
	/// * `buf` - The target buffer.
	/// * `solver` - The solver.
	/// * `status` - The status line for the bottom border.
	fn render_grid(
		&self,
		area: Rect,
		buf: &mut Buffer,
		solver: &Solver,
		status: String
	) {
		let highlighted = self.highlighted();
		let grid = solver.puzzle().grid();
		let lines = (0 .. grid.rows())
			.map(|row| {
				let spans = (0 .. grid.columns())
					.filter_map(|column| {
						let cell = Cell::new(row, column);
						let letter = grid.get(cell)?;
						let style =
							if highlighted.contains(&cell)
							{
								Style::default()
									.fg(Color::Black)
									.bg(Color::Yellow)
									.add_modifier(Modifier::BOLD)
							}
							else
							{
								Style::default().fg(Color::White)
							};
						Some(Span::styled(format!(" {} ", letter), style))
					})
					.collect::<Vec<_>>();
				Line::from(spans)
			})
			.collect::<Vec<_>>();
		// Center the grid vertically; each row is a single line.
		let rows = u16::try_from(grid.rows()).unwrap_or(u16::MAX);
		let board = Layout::default()
			.direction(Direction::Vertical)
			.margin(1)
			.constraints([
				Constraint::Fill(1),
				Constraint::Length(rows),
				Constraint::Fill(1)
			])
			.split(area);
		Block::default()
			.borders(Borders::ALL)
			.border_style(Style::default().fg(Color::White))
			.title(
				Title::default()
					.content("Word Search")
					.position(Position::Top)
					.alignment(Alignment::Center)
			)
			.title(
				Title::default()
					.content("⎋ – exit".yellow().bold())
					.position(Position::Top)
					.alignment(Alignment::Left)
			)
			.title(
				Title::default()
					.content(Span::styled(status, Style::default().fg(Color::Cyan)))
					.position(Position::Bottom)
					.alignment(Alignment::Center)
			)
			.render(area, buf);
		Paragraph::new(lines)
			.alignment(Alignment::Center)
			.render(board[1], buf);
	}

	/// Render the word list.
	///
	/// # Arguments
	///
	/// * `area` - The target area.
	/// * `buf` - The target buffer.
	/// * `entries` - The listed words, each paired with whether it was found.
	/// * `selected` - The index of the word to highlight in the list, if any.
	/// * `hint` - The key hint for the bottom border, if any.
	fn render_words(
		&self,
		area: Rect,
		buf: &mut Buffer,
		entries: &[(String, bool)],
		selected: Option<usize>,
		hint: Option<&'static str>
	) {
		let items = entries.iter()
			.map(|(word, found)| {
				let color = if *found { Color::Green } else { Color::Red };
				ListItem::new(word.as_str()).style(Style::default().fg(color))
			})
			.collect::<Vec<_>>();
		let mut block = Block::default()
			.borders(Borders::ALL)
			.title(
				Title::default()
					.content("Words")
					.alignment(Alignment::Center)
			);
		if let Some(hint) = hint
		{
			block = block.title(
				Title::default()
					.content(hint.cyan())
					.position(Position::Bottom)
					.alignment(Alignment::Center)
			);
		}
		let list = List::new(items)
			.block(block)
			.highlight_style(
				Style::default()
					.fg(Color::Black)
					.bg(Color::Yellow)
			);
		let mut list_state = ListState::default();
		list_state.select(selected);
		StatefulWidget::render(&list, area, buf, &mut list_state);
	}

	/// Render the whole screen: the grid on the left, the word list on the
	/// right.
	///
	/// # Arguments
	///
	/// * `area` - The target area.
	/// * `buf` - The target buffer.
	/// * `solver` - The solver.
	/// * `entries` - The listed words, each paired with whether it was found.
	/// * `selected` - The index of the word to highlight in the list, if any.
	fn render_screen(
		&self,
		area: Rect,
		buf: &mut Buffer,
		solver: &Solver,
		entries: &[(String, bool)],
		selected: Option<usize>
	) {
		let outer = Layout::default()
			.direction(Direction::Horizontal)
			.margin(1)
			.constraints([
				Constraint::Percentage(100),
				Constraint::Min(24)
			])
			.split(area);
		let (status, hint) =
			if solver.is_finished()
			{
				(
					solver.classification().to_string(),
					Some("↑↓ – select ⌦ – clear")
				)
			}
			else
			{
				let (searched, total) = solver.progress();
				(format!("searching: {} of {} words", searched, total), None)
			};
		self.render_grid(outer[0], buf, solver, status);
		self.render_words(outer[1], buf, entries, selected, hint);
	}

	/// Run any background tasks, such as the solver or the highlighter.
	fn process_systems(&mut self)
	{
		match self.state
		{
			ExecutionState::Swapping => unreachable!(),
			ExecutionState::Solving { .. } => self.run_solver(),
			ExecutionState::Highlighting { .. } => self.run_highlighter(),
			ExecutionState::Finished { .. } => {}
			ExecutionState::Exiting { .. } => {}
		}
	}

	/// Run the solver for a short while.
	fn run_solver(&mut self)
	{
		// Evacuate the state, so that the solver can be moved through
		// `solve`.
		let mut state = ExecutionState::Swapping;
		swap(&mut self.state, &mut state);
		if let ExecutionState::Solving { solver } = state
		{
			// Keep each slice short, lest the application become
			// unresponsive.
			let (solver, found) = solver.solve(Duration::from_millis(5));
			self.state = match found
			{
				Some(found) =>
				{
					let until = Instant::now()
						+ Duration::from_millis(self.highlight_duration_ms);
					ExecutionState::Highlighting { solver, until, found }
				},
				None if solver.is_finished() =>
				{
					trace!("Search finished: {}", solver.classification());
					ExecutionState::Finished { solver, selected: None }
				},
				None => ExecutionState::Solving { solver }
			};
		}
		else
		{
			unreachable!()
		}
	}

	/// Maintain the highlight of the most recently found word until it
	/// expires, then resume solving.
	fn run_highlighter(&mut self)
	{
		let mut state = ExecutionState::Swapping;
		swap(&mut self.state, &mut state);
		if let ExecutionState::Highlighting { solver, until, found } = state
		{
			self.state =
				if Instant::now() >= until
				{
					ExecutionState::Solving { solver }
				}
				else
				{
					ExecutionState::Highlighting { solver, until, found }
				};
		}
		else
		{
			unreachable!()
		}
	}

	/// Process events. Block for only half a millisecond, so as not to stall
	/// the solver.
	///
	/// # Errors
	///
	/// Any error that occurs while processing events.
	fn process_event(&mut self) -> io::Result<()>
	{
		if poll(Duration::from_micros(500))?
		{
			match read()?
			{
				Event::Key(event) if event.kind == KeyEventKind::Press =>
					self.process_key_event(event),
				_ => {}
			}
		}
		Ok(())
	}

	/// Process a key event:
	///
	/// * Escape - Exit the application.
	/// * Up - Select the previous word (finished only).
	/// * Down - Select the next word (finished only).
	/// * Delete - Clear the selection (finished only).
	///
	/// # Arguments
	///
	/// * `event` - The key event to process.
	fn process_key_event(&mut self, event: KeyEvent)
	{
		match self.state
		{
			ExecutionState::Swapping => unreachable!(),
			ExecutionState::Finished { .. } => match event.code
			{
				KeyCode::Esc => self.exit(),
				KeyCode::Up => self.move_selection(-1),
				KeyCode::Down => self.move_selection(1),
				KeyCode::Delete | KeyCode::Backspace => self.clear_selection(),
				_ => {}
			},
			ExecutionState::Exiting { .. } => {}
			_ =>
			{
				if let KeyCode::Esc = event.code
				{
					self.exit()
				}
			}
		}
	}

	/// Mark the application for exit. The application will exit after the next
	/// iteration of the main loop. The solution is only kept if the search
	/// finished.
	fn exit(&mut self)
	{
		let solution: Vec<String> = match self.state
		{
			ExecutionState::Swapping => unreachable!(),
			ExecutionState::Finished { ref solver, .. } =>
				solver.solution().iter().map(WordMatch::to_string).collect(),
			ExecutionState::Exiting { ref solution } => solution.clone(),
			_ => vec![]
		};
		self.state = ExecutionState::Exiting { solution };
	}
}

impl Widget for &App
{
	fn render(self, area: Rect, buf: &mut Buffer)
	{
		match self.state
		{
			ExecutionState::Swapping => unreachable!(),
			ExecutionState::Solving { ref solver } =>
			{
				let entries = solver.solution().iter()
					.map(|m| (m.word.clone(), true))
					.collect::<Vec<_>>();
				self.render_screen(area, buf, solver, &entries, None);
			},
			ExecutionState::Highlighting { ref solver, .. } =>
			{
				// The most recently found word is the last one.
				let entries = solver.solution().iter()
					.map(|m| (m.word.clone(), true))
					.collect::<Vec<_>>();
				let last = entries.len().checked_sub(1);
				self.render_screen(area, buf, solver, &entries, last);
			},
			ExecutionState::Finished { ref solver, selected } =>
			{
				let entries = App::entries(solver);
				self.render_screen(area, buf, solver, &entries, selected);
			},
			ExecutionState::Exiting { .. } => {}
		}
	}
}

/// The execution state of the application.
#[derive(Clone, Debug)]
enum ExecutionState
{
	/// The application state is transitioning to the next state. This is a
	/// transient state that should not be rendered.
	Swapping,

	/// The solver is running, incrementally populating the solution.
	Solving {
		/// The solver for the puzzle.
		solver: Solver
	},

	/// The most recently found word is highlighted, and the application will
	/// momentarily return to the [Solving](ExecutionState::Solving) state.
	Highlighting {
		/// The solver for the puzzle.
		solver: Solver,

		/// When to transition back to the [Solving](ExecutionState::Solving)
		/// state.
		until: Instant,

		/// The word to highlight.
		found: WordMatch
	},

	/// The solver has finished, and the user is reviewing the solution.
	Finished {
		/// The solver for the puzzle.
		solver: Solver,

		/// The index of the selected word in the word list, if any.
		selected: Option<usize>
	},

	/// The application is exiting.
	Exiting {
		/// The solution to report, one line per word found.
		solution: Vec<String>
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////
