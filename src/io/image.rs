//! PNG rendering of a traced loop with transparent background

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::algorithm::executor::SolvedLoop;
use crate::io::configuration::{
    BORDER_WIDTH, LOOP_COLOR, PIXELS_PER_TILE, START_COLOR, STRAY_PIPE_COLOR,
};
use crate::io::error::{PipeError, Result};
use crate::spatial::position::{Direction, Position};
use crate::spatial::tiles::Tile;

// Paints the centre pixel plus an arm reaching the glyph edge for each opening
fn draw_glyph(img: &mut RgbaImage, origin: (u32, u32), openings: [Direction; 2], color: Rgba<u8>) {
    let center = PIXELS_PER_TILE / 2;
    let (x0, y0) = origin;
    img.put_pixel(x0 + center, y0 + center, color);

    for direction in openings {
        for reach in 1..=center {
            let (x, y) = match direction {
                Direction::North => (center, center - reach),
                Direction::South => (center, center + reach),
                Direction::East => (center + reach, center),
                Direction::West => (center - reach, center),
            };
            img.put_pixel(x0 + x, y0 + y, color);
        }
    }
}

/// Render the sketch with the loop highlighted, padding ring excluded
///
/// Each tile becomes a [`PIXELS_PER_TILE`] square glyph of its pipe shape.
/// Pipes off the loop are drawn first, then the loop tiles over them with the
/// start in its inferred shape.
pub fn render_loop(solved: &SolvedLoop) -> RgbaImage {
    let grid = &solved.grid;
    let inner_rows = grid.rows().saturating_sub(2 * BORDER_WIDTH);
    let inner_cols = grid.cols().saturating_sub(2 * BORDER_WIDTH);
    let start_shape = solved.resolution.shape();

    let mut img = ImageBuffer::from_pixel(
        inner_cols as u32 * PIXELS_PER_TILE,
        inner_rows as u32 * PIXELS_PER_TILE,
        Rgba([0, 0, 0, 0]),
    );

    for row in BORDER_WIDTH..BORDER_WIDTH + inner_rows {
        for col in BORDER_WIDTH..BORDER_WIDTH + inner_cols {
            let pos = Position::new(row as i32, col as i32);
            if let Tile::Pipe(pipe) = grid.tile_at(pos) {
                paint(&mut img, pos, pipe.openings(), STRAY_PIPE_COLOR);
            }
        }
    }

    for pos in solved.trace.visited.positions() {
        let glyph = match grid.tile_at(pos) {
            Tile::Start => start_shape.map(|pipe| (pipe.openings(), START_COLOR)),
            Tile::Pipe(pipe) => Some((pipe.openings(), LOOP_COLOR)),
            Tile::Ground | Tile::Unknown(_) => None,
        };
        if let Some((openings, color)) = glyph {
            paint(&mut img, pos, openings, color);
        }
    }

    img
}

// Draws the glyph for the padded-grid position `pos`
fn paint(img: &mut RgbaImage, pos: Position, openings: [Direction; 2], color: [u8; 4]) {
    let Some([row, col]) = pos.as_index() else {
        return;
    };
    let (Some(row), Some(col)) = (row.checked_sub(BORDER_WIDTH), col.checked_sub(BORDER_WIDTH))
    else {
        return;
    };
    let origin = (col as u32 * PIXELS_PER_TILE, row as u32 * PIXELS_PER_TILE);
    draw_glyph(img, origin, openings, Rgba(color));
}

/// Render the loop and save it as a PNG
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_loop_png(solved: &SolvedLoop, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| PipeError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    render_loop(solved)
        .save(output_path)
        .map_err(|e| PipeError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
