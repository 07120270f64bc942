//! # Word Search Solver
//!
//! Finds a list of words hidden in a rectangular grid of letters. Words may
//! run in any of eight directions: horizontally, vertically, or diagonally,
//! each forward or backward. For every word found, the solver reports the
//! direction and the ordered cells that it occupies, so that a user interface
//! can highlight them.

pub mod grid;
pub mod puzzle;
pub mod solver;
