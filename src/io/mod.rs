//! Input/output operations and error handling

/// Command-line parsing and batch file processing
pub mod cli;
/// Constants for loading, rendering and progress display
pub mod configuration;
/// Error types and context helpers
pub mod error;
/// PNG rendering of traced loops
pub mod image;
/// Progress display for batches of sketches
pub mod progress;
