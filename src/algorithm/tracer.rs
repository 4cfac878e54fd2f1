//! Loop walking as an explicit state machine
//!
//! The walk leaves the start through one of its two exits and at every pipe
//! takes the connection it did not arrive through. Each call to
//! [`LoopTracer::transition`] advances exactly one tile, and the walk is
//! bounded by the number of cells in the grid.

use log::{debug, trace};

use crate::algorithm::resolver::StartResolution;
use crate::algorithm::visited::VisitedSet;
use crate::io::error::{PipeError, Result};
use crate::spatial::grid::Grid;
use crate::spatial::position::{Position, connected_positions};

/// Which of the start's two exits the walk leaves through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    /// Leave through the first exit in neighbour scan order
    First,
    /// Leave through the second exit
    Second,
}

/// Cursor state of a walk around the loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceState {
    /// Standing on the start, nothing walked yet
    AtStart,
    /// On a loop tile, having arrived from `previous`
    Walking {
        /// Tile the walk is currently on
        current: Position,
        /// Tile the walk arrived from
        previous: Position,
    },
    /// Back on the start; terminal
    Closed,
}

/// Outcome of a completed walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoopTrace {
    /// Transitions taken from leaving the start to returning to it
    pub length: usize,
    /// Every tile on the loop, start included
    pub visited: VisitedSet,
}

/// Walks the loop through a grid from a resolved start
#[derive(Debug, Clone, Copy)]
pub struct LoopTracer<'a> {
    grid: &'a Grid,
    start: Position,
    first: Position,
}

impl<'a> LoopTracer<'a> {
    /// Prepare a walk leaving `resolution.start` in the given heading
    pub const fn new(grid: &'a Grid, resolution: &StartResolution, heading: Heading) -> Self {
        let [first_exit, second_exit] = resolution.exits;
        let first = match heading {
            Heading::First => first_exit,
            Heading::Second => second_exit,
        };
        Self {
            grid,
            start: resolution.start,
            first,
        }
    }

    /// Advance the walk by one tile
    ///
    /// `step` is the number of the transition being taken, reported in errors.
    ///
    /// # Errors
    ///
    /// Returns [`PipeError::BrokenLoop`] if the current tile has no
    /// connections, or if neither of its connections leads back to the tile
    /// the walk arrived from.
    pub fn transition(&self, state: TraceState, step: usize) -> Result<TraceState> {
        match state {
            TraceState::AtStart => Ok(TraceState::Walking {
                current: self.first,
                previous: self.start,
            }),
            TraceState::Walking { current, previous } => {
                let next = self.next_position(current, previous, step)?;
                trace!("Step {step}: {current} -> {next}");
                if next == self.start {
                    Ok(TraceState::Closed)
                } else {
                    Ok(TraceState::Walking {
                        current: next,
                        previous: current,
                    })
                }
            }
            TraceState::Closed => Ok(TraceState::Closed),
        }
    }

    fn next_position(&self, current: Position, previous: Position, step: usize) -> Result<Position> {
        let tile = self.grid.tile_at(current);
        let broken = |reason: String| PipeError::BrokenLoop {
            position: current,
            previous,
            step,
            reason,
        };

        let connected = connected_positions(current, tile).ok_or_else(|| {
            broken(format!("tile {:?} has no pipe connections", tile.symbol()))
        })?;

        match connected {
            [a, b] if a == previous => Ok(b),
            [a, b] if b == previous => Ok(a),
            _ => Err(broken(format!(
                "pipe {:?} does not connect back to {previous}",
                tile.symbol()
            ))),
        }
    }

    /// Walk until the start is reached again
    ///
    /// # Errors
    ///
    /// Returns [`PipeError::BrokenLoop`] if a transition fails, if a tile
    /// other than the start is reached twice, or if the walk takes more
    /// transitions than the grid has cells.
    pub fn trace(&self) -> Result<LoopTrace> {
        let bound = self.grid.cell_count();
        let mut visited = VisitedSet::for_grid(self.grid);
        visited.insert(self.start);

        let mut state = TraceState::AtStart;
        let mut last = (self.start, self.start);

        for step in 1..=bound {
            state = self.transition(state, step)?;
            match state {
                TraceState::Closed => {
                    debug!("Loop from {} closed after {step} steps", self.start);
                    return Ok(LoopTrace {
                        length: step,
                        visited,
                    });
                }
                TraceState::Walking { current, previous } => {
                    if !visited.insert(current) {
                        return Err(PipeError::BrokenLoop {
                            position: current,
                            previous,
                            step,
                            reason: "tile reached twice before the loop closed".to_string(),
                        });
                    }
                    last = (current, previous);
                }
                TraceState::AtStart => {}
            }
        }

        let (position, previous) = last;
        Err(PipeError::BrokenLoop {
            position,
            previous,
            step: bound,
            reason: format!("walk did not close within {bound} steps"),
        })
    }
}
