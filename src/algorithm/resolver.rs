//! Start tile inference from neighbouring pipe claims
//!
//! The start marker hides its pipe shape. A neighbour "claims" the start when
//! one of its openings points back at it; a well-formed sketch has exactly two
//! claimants and those two are the start pipe's real connections.

use log::debug;

use crate::io::error::{PipeError, Result};
use crate::spatial::grid::Grid;
use crate::spatial::position::{Position, connected_positions, neighbors8};
use crate::spatial::tiles::Pipe;

/// Start position together with its two inferred loop connections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartResolution {
    /// Position of the start marker
    pub start: Position,
    /// The two neighbours connected to the start, in neighbour scan order
    pub exits: [Position; 2],
}

impl StartResolution {
    /// Pipe shape the start tile must have to join its two exits
    pub fn shape(&self) -> Option<Pipe> {
        let [first, second] = self.exits;
        Pipe::from_openings(
            self.start.direction_to(first)?,
            self.start.direction_to(second)?,
        )
    }
}

/// Every neighbour of `start` whose pipe has an opening facing `start`
pub fn claimants(grid: &Grid, start: Position) -> Vec<Position> {
    neighbors8(start)
        .into_iter()
        .filter(|&neighbor| {
            connected_positions(neighbor, grid.tile_at(neighbor))
                .is_some_and(|connected| connected.contains(&start))
        })
        .collect()
}

/// Locate the start marker and validate exactly two neighbours connect to it
///
/// # Errors
///
/// Returns [`PipeError::AmbiguousStart`] if fewer or more than two
/// neighbours claim a connection to the start.
pub fn resolve_start(grid: &Grid) -> Result<StartResolution> {
    let start = grid.start();
    let found = claimants(grid, start);

    match found.as_slice() {
        &[first, second] => {
            let resolution = StartResolution {
                start,
                exits: [first, second],
            };
            debug!(
                "Start at {start} connects to {first} and {second} (shape {:?})",
                resolution.shape()
            );
            Ok(resolution)
        }
        _ => Err(PipeError::AmbiguousStart {
            start,
            claimants: found,
        }),
    }
}
