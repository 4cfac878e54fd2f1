//! Spatial data structures for pipe sketches
//!
//! This module contains spatial-related functionality including:
//! - Positions, directions and neighbour enumeration
//! - Tile classification and pipe connectivity
//! - The padded grid loaded from sketch text

/// Padded grid of tiles loaded from sketch text
pub mod grid;
/// Coordinates, compass directions and neighbour lookups
pub mod position;
/// Pipe shapes and tile classification
pub mod tiles;

pub use grid::Grid;
pub use position::{Direction, Position};
pub use tiles::{Pipe, Tile};
