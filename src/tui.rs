//! # Text-based user interface (TUI)
//!
//! Terminal setup and teardown for the word search browser. The terminal
//! must be put back the way it was however the browser ends, including by
//! panic, or the user's shell is left in raw mode on the alternate screen.

use std::{io::{self, stdout, Stdout}, panic, sync::{Arc, Mutex}, thread};

use crossterm::{
	execute,
	terminal::{
		disable_raw_mode, enable_raw_mode,
		EnterAlternateScreen, LeaveAlternateScreen
	}
};
use log::{trace, warn};
use ratatui::{backend::{Backend, CrosstermBackend}, Terminal};

////////////////////////////////////////////////////////////////////////////////
//                         Text-based user interface.                         //
////////////////////////////////////////////////////////////////////////////////

/// The terminal that the browser draws on.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Run `f` against a freshly initialized terminal, then restore the terminal.
/// While `f` runs, a panic on the calling thread also restores the terminal
/// before the previous panic hook reports it.
///
/// # Arguments
///
/// * `f` - The function to apply to the terminal.
///
/// # Returns
///
/// The result of applying `f` to the terminal.
///
/// # Errors
///
/// Any error that occurs while initializing, driving, or restoring the
/// terminal. An error from `f` takes precedence over a restoration error.
pub fn tui<F, T>(f: F) -> io::Result<T>
	where F: FnOnce(&mut Tui) -> io::Result<T>
{
	// The panic hook is process-wide, so the previous hook is shared between
	// this frame and the replacement hook.
	let previous = Arc::new(Mutex::new(Some(panic::take_hook())));
	let shared = Arc::clone(&previous);
	let ui_thread = thread::current().id();
	panic::set_hook(Box::new(move |info| {
		if thread::current().id() == ui_thread
		{
			let _ = restore();
		}
		if let Ok(hook) = shared.lock()
		{
			if let Some(hook) = hook.as_ref()
			{
				hook(info);
			}
		}
	}));
	// Initialization may fail halfway, so restore regardless.
	let result = init().and_then(|mut terminal| f(&mut terminal));
	match previous.lock().map(|mut hook| hook.take())
	{
		Ok(Some(hook)) => panic::set_hook(hook),
		_ => warn!("Failed to reinstate the previous panic hook")
	}
	let restored = restore();
	let value = result?;
	restored?;
	trace!("Terminal restored");
	Ok(value)
}

/// Enter the alternate screen and raw mode.
///
/// # Returns
///
/// The terminal.
///
/// # Errors
///
/// Any error that occurs while initializing the terminal.
fn init() -> io::Result<Tui>
{
	let mut stdout = stdout();
	execute!(stdout, EnterAlternateScreen)?;
	enable_raw_mode()?;
	Terminal::new(CrosstermBackend::new(stdout))
}

/// Leave raw mode and the alternate screen, and show the cursor again.
///
/// # Errors
///
/// Any error that occurs while restoring the terminal.
fn restore() -> io::Result<()>
{
	let mut stdout = stdout();
	execute!(stdout, LeaveAlternateScreen)?;
	disable_raw_mode()?;
	CrosstermBackend::new(stdout).show_cursor()
}
