//! End-to-end pipeline from sketch text to the farthest loop distance

use std::fs;
use std::path::Path;

use log::info;

use crate::algorithm::distance::farthest_distance;
use crate::algorithm::resolver::{StartResolution, resolve_start};
use crate::algorithm::tracer::{Heading, LoopTrace, LoopTracer};
use crate::io::error::{PipeError, Result, WithContext};
use crate::spatial::grid::Grid;
use crate::spatial::position::Position;
use crate::spatial::tiles::Pipe;

/// Pipeline options
#[derive(Clone, Copy, Debug, Default)]
pub struct SolverConfig {
    /// Trace the loop in both headings and require equal lengths
    pub check_both_directions: bool,
}

/// Summary of a solved sketch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoopReport {
    /// Position of the start marker in padded grid coordinates
    pub start: Position,
    /// Inferred shape of the start pipe
    pub start_shape: Option<Pipe>,
    /// Number of tiles on the loop, start included
    pub loop_length: usize,
    /// Steps from the start to the farthest loop tile
    pub farthest_distance: usize,
    /// Distinct tiles touched by the walk
    pub visited: usize,
}

/// A loaded grid with its resolved start and traced loop
#[derive(Debug, Clone)]
pub struct SolvedLoop {
    /// The padded grid the loop was traced on
    pub grid: Grid,
    /// Start position and its two exits
    pub resolution: StartResolution,
    /// The completed walk
    pub trace: LoopTrace,
}

impl SolvedLoop {
    /// Summarise the solved loop
    pub fn report(&self) -> LoopReport {
        LoopReport {
            start: self.resolution.start,
            start_shape: self.resolution.shape(),
            loop_length: self.trace.length,
            farthest_distance: farthest_distance(self.trace.length),
            visited: self.trace.visited.count(),
        }
    }
}

/// Runs loader, start resolver, tracer and distance calculation in order
#[derive(Clone, Copy, Debug, Default)]
pub struct LoopSolver {
    config: SolverConfig,
}

impl LoopSolver {
    /// Create a solver with the given options
    pub const fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Load, resolve and trace a sketch
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The sketch is malformed
    /// - The start does not have exactly two connecting neighbours
    /// - The walk breaks before returning to the start
    /// - Direction checking is enabled and the two headings disagree
    pub fn solve_text(&self, text: &str) -> Result<SolvedLoop> {
        let grid = Grid::parse(text)?;
        let resolution = resolve_start(&grid)?;
        let trace = LoopTracer::new(&grid, &resolution, Heading::First).trace()?;

        if self.config.check_both_directions {
            let reverse = LoopTracer::new(&grid, &resolution, Heading::Second).trace()?;
            if reverse.length != trace.length {
                return Err(PipeError::BrokenLoop {
                    position: resolution.start,
                    previous: resolution.start,
                    step: reverse.length,
                    reason: format!(
                        "loop length {} one way but {} the other",
                        trace.length, reverse.length
                    ),
                });
            }
        }

        info!(
            "Loop of {} tiles from {}, farthest point {} steps away",
            trace.length,
            resolution.start,
            farthest_distance(trace.length)
        );

        Ok(SolvedLoop {
            grid,
            resolution,
            trace,
        })
    }

    /// Read and solve a sketch file
    ///
    /// # Errors
    ///
    /// Returns an error tagged with `path` if the file cannot be read or
    /// [`Self::solve_text`] fails.
    pub fn solve_file(&self, path: &Path) -> Result<SolvedLoop> {
        let text = fs::read_to_string(path).map_err(|e| PipeError::FileSystem {
            path: path.to_path_buf(),
            operation: "read",
            source: e,
        })?;
        self.solve_text(&text).with_file(path)
    }
}

/// Farthest loop distance for a sketch, with default options
///
/// # Errors
///
/// Propagates any failure from [`LoopSolver::solve_text`].
pub fn max_loop_distance(text: &str) -> Result<usize> {
    LoopSolver::default()
        .solve_text(text)
        .map(|solved| solved.report().farthest_distance)
}
