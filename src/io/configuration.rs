//! Loader limits, output naming and render settings

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension per side, before padding
pub const MAX_GRID_DIMENSION: usize = 10_000;

/// Largest accepted sketch area in tiles, padding excluded
pub const MAX_GRID_CELLS: usize = 4_000_000;

/// Width of the ground ring added around the sketch on every side
pub const BORDER_WIDTH: usize = 1;

// Input discovery
/// Extension of sketch files picked up from a target directory
pub const INPUT_EXTENSION: &str = "txt";

// Output settings
/// Suffix added to rendered loop filenames
pub const RENDER_SUFFIX: &str = "_loop";
/// Edge length of the square pixel glyph drawn per tile
pub const PIXELS_PER_TILE: u32 = 3;
/// Colour of tiles on the traced loop
pub const LOOP_COLOR: [u8; 4] = [255, 170, 0, 255];
/// Colour of the start tile
pub const START_COLOR: [u8; 4] = [220, 30, 30, 255];
/// Colour of pipes that are not part of the loop
pub const STRAY_PIPE_COLOR: [u8; 4] = [90, 90, 90, 255];

// Progress bar display settings
/// Minimum file count before a batch progress bar is shown
pub const MIN_FILES_FOR_PROGRESS: usize = 2;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
