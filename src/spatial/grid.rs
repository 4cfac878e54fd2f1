//! Padded tile grid loaded from a pipe sketch
//!
//! The sketch is surrounded by a ring of ground so that every neighbour of an
//! interior tile is addressable. All positions handed out by the grid are in
//! padded coordinates; the first sketch character sits at `(1, 1)`.

use log::{debug, warn};
use ndarray::Array2;

use crate::io::configuration::{BORDER_WIDTH, MAX_GRID_CELLS, MAX_GRID_DIMENSION};
use crate::io::error::{Result, malformed, malformed_at};
use crate::spatial::position::Position;
use crate::spatial::tiles::Tile;

/// Immutable grid of tiles with a known start marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    tiles: Array2<Tile>,
    start: Position,
}

impl Grid {
    /// Parse sketch text into a padded grid
    ///
    /// Line terminators are stripped and trailing lines holding only
    /// whitespace ignored.
    /// Unrecognised symbols load as [`Tile::Unknown`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::PipeError::MalformedInput`] if:
    /// - Rows differ in length
    /// - The sketch is wider or taller than [`MAX_GRID_DIMENSION`]
    /// - The sketch holds more than [`MAX_GRID_CELLS`] tiles
    /// - There is no `S`, or more than one
    pub fn parse(text: &str) -> Result<Self> {
        let mut lines: Vec<&str> = text.lines().collect();
        while lines.last().is_some_and(|line| line.trim().is_empty()) {
            lines.pop();
        }

        let inner_rows = lines.len();
        let inner_cols = lines.first().map_or(0, |line| line.chars().count());

        if inner_rows > MAX_GRID_DIMENSION || inner_cols > MAX_GRID_DIMENSION {
            return Err(malformed(&format!(
                "sketch is {inner_rows}x{inner_cols}, limit is {MAX_GRID_DIMENSION} per side"
            )));
        }

        let inner_cells = inner_rows * inner_cols;
        if inner_cells > MAX_GRID_CELLS {
            return Err(malformed(&format!(
                "sketch has {inner_cells} tiles, limit is {MAX_GRID_CELLS}"
            )));
        }

        let rows = inner_rows + 2 * BORDER_WIDTH;
        let cols = inner_cols + 2 * BORDER_WIDTH;
        let mut tiles = Array2::from_elem((rows, cols), Tile::Ground);
        let mut start: Option<Position> = None;

        for (row_index, line) in lines.iter().enumerate() {
            let row = (row_index + BORDER_WIDTH) as i32;
            let width = line.chars().count();
            if width != inner_cols {
                return Err(malformed_at(
                    Position::new(row, BORDER_WIDTH as i32),
                    &format!("row has {width} tiles, expected {inner_cols}"),
                ));
            }

            for (col_index, symbol) in line.chars().enumerate() {
                let position = Position::new(row, (col_index + BORDER_WIDTH) as i32);
                let tile = Tile::from_symbol(symbol);

                match tile {
                    Tile::Start => {
                        if let Some(first) = start {
                            return Err(malformed_at(
                                position,
                                &format!("second start marker, first was at {first}"),
                            ));
                        }
                        start = Some(position);
                    }
                    Tile::Unknown(other) => {
                        warn!("Unrecognised symbol {other:?} at {position}, treating as unconnected");
                    }
                    Tile::Pipe(_) | Tile::Ground => {}
                }

                if let Some(cell) = tiles.get_mut([
                    row_index + BORDER_WIDTH,
                    col_index + BORDER_WIDTH,
                ]) {
                    *cell = tile;
                }
            }
        }

        let start = start.ok_or_else(|| malformed(&"no start marker 'S' found"))?;
        debug!("Loaded {inner_rows}x{inner_cols} sketch with start at {start}");

        Ok(Self { tiles, start })
    }

    /// Tile at `pos`, or `None` outside the padded grid
    pub fn get(&self, pos: Position) -> Option<Tile> {
        pos.as_index()
            .and_then(|index| self.tiles.get(index))
            .copied()
    }

    /// Tile at `pos`, reading anything outside the padded grid as ground
    pub fn tile_at(&self, pos: Position) -> Tile {
        self.get(pos).unwrap_or(Tile::Ground)
    }

    /// Position of the start marker
    pub const fn start(&self) -> Position {
        self.start
    }

    /// Number of rows including the padding ring
    pub fn rows(&self) -> usize {
        self.tiles.nrows()
    }

    /// Number of columns including the padding ring
    pub fn cols(&self) -> usize {
        self.tiles.ncols()
    }

    /// Total number of cells including the padding ring
    pub fn cell_count(&self) -> usize {
        self.tiles.len()
    }
}
