//! Command-line interface for solving one sketch or a directory of sketches

use crate::algorithm::executor::{LoopReport, LoopSolver, SolverConfig};
use crate::io::configuration::{INPUT_EXTENSION, RENDER_SUFFIX};
use crate::io::error::{PipeError, Result, WithContext};
use crate::io::image::export_loop_png;
use crate::io::progress::ProgressManager;
use clap::Parser;
use log::{LevelFilter, debug, info};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "pipeloop")]
#[command(
    author,
    version,
    about = "Find the farthest point along the pipe loop in a sketch"
)]
/// Command-line arguments for the loop solver
pub struct Cli {
    /// Sketch file, or directory of .txt sketches, to solve
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Write a PNG of each loop next to its sketch
    #[arg(short, long)]
    pub render: bool,

    /// Trace both ways round and fail if the lengths disagree
    #[arg(long)]
    pub both_directions: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Log level selected by the verbosity flag
    pub const fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// Solver options derived from the flags
    pub const fn solver_config(&self) -> SolverConfig {
        SolverConfig {
            check_both_directions: self.both_directions,
        }
    }
}

/// Result line for one processed sketch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    /// Sketch that was solved
    pub path: PathBuf,
    /// Summary of its loop
    pub report: LoopReport,
}

/// Orchestrates solving every sketch named by the CLI target
pub struct FileProcessor {
    cli: Cli,
    solver: LoopSolver,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        let solver = LoopSolver::new(cli.solver_config());
        Self { cli, solver }
    }

    /// Whether the target names a directory of sketches
    pub fn is_batch(&self) -> bool {
        self.cli.target.is_dir()
    }

    /// Solve every sketch, stopping at the first failure
    ///
    /// # Errors
    ///
    /// Returns an error if the target is missing, a directory cannot be read,
    /// or any sketch fails to solve or render.
    pub fn process(&self) -> Result<Vec<FileOutcome>> {
        let files = self.collect_files()?;
        info!("Solving {} sketch file(s)", files.len());

        let progress = self
            .cli
            .should_show_progress()
            .then(|| ProgressManager::new(files.len()));

        let mut outcomes = Vec::with_capacity(files.len());
        for file in &files {
            if let Some(ref pm) = progress {
                pm.start_file(file);
            }

            let outcome = match self.process_file(file) {
                Ok(outcome) => outcome,
                Err(error) => {
                    if let Some(ref pm) = progress {
                        pm.finish();
                    }
                    return Err(error);
                }
            };
            outcomes.push(outcome);

            if let Some(ref pm) = progress {
                pm.complete_file();
            }
        }

        if let Some(ref pm) = progress {
            pm.finish();
        }

        Ok(outcomes)
    }

    /// Format outcomes for stdout: the bare distance for a single file,
    /// `name: distance` lines for a directory
    pub fn format_outcomes(&self, outcomes: &[FileOutcome]) -> Vec<String> {
        if self.is_batch() {
            outcomes
                .iter()
                .map(|outcome| {
                    let name = outcome.path.file_name().unwrap_or_default();
                    format!(
                        "{}: {}",
                        name.to_string_lossy(),
                        outcome.report.farthest_distance
                    )
                })
                .collect()
        } else {
            outcomes
                .iter()
                .map(|outcome| outcome.report.farthest_distance.to_string())
                .collect()
        }
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;

        if target.is_file() {
            return Ok(vec![target.clone()]);
        }

        if !target.is_dir() {
            return Err(PipeError::FileSystem {
                path: target.clone(),
                operation: "locate target",
                source: std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "target must be a sketch file or directory",
                ),
            });
        }

        let read_error = |e: std::io::Error| PipeError::FileSystem {
            path: target.clone(),
            operation: "read directory",
            source: e,
        };

        let mut files = Vec::new();
        for entry in std::fs::read_dir(target).map_err(read_error)? {
            let path = entry.map_err(read_error)?.path();
            if path.is_file()
                && path.extension().and_then(|s| s.to_str()) == Some(INPUT_EXTENSION)
            {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    fn process_file(&self, input_path: &Path) -> Result<FileOutcome> {
        let solved = self.solver.solve_file(input_path)?;
        let report = solved.report();
        debug!(
            "{}: start shape {:?}, loop length {}",
            input_path.display(),
            report.start_shape,
            report.loop_length
        );

        if self.cli.render {
            let render_path = Self::get_render_path(input_path);
            export_loop_png(&solved, &render_path).with_file(input_path)?;
            info!("Rendered loop to {}", render_path.display());
        }

        Ok(FileOutcome {
            path: input_path.to_path_buf(),
            report,
        })
    }

    /// Path of the rendered PNG for `input_path`
    pub fn get_render_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let render_name = format!("{}{RENDER_SUFFIX}.png", stem.to_string_lossy());

        if let Some(parent) = input_path.parent() {
            parent.join(render_name)
        } else {
            PathBuf::from(render_name)
        }
    }
}
