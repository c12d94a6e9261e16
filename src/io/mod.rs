//! Input/output, configuration and error handling

/// Command-line interface and batch file processing
pub mod cli;
/// Tile geometry constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// PNG decoding and atlas export
pub mod image;
/// Terminal logger setup
pub mod logging;
/// Batch progress display
pub mod progress;
