//! Pipe maze loop tracing for two-dimensional tile sketches
//!
//! A sketch is loaded into a padded grid, the hidden shape of the start tile is
//! inferred from the neighbours that connect to it, and the single loop through
//! the start is walked tile by tile. The farthest loop tile from the start is
//! half the loop length away.

#![forbid(unsafe_code)]

/// Start resolution, loop walking and distance calculation
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Positions, tiles and the padded sketch grid
pub mod spatial;

pub use algorithm::executor::{LoopReport, LoopSolver, max_loop_distance};
pub use io::error::{PipeError, Result};
