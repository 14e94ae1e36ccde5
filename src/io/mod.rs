/// Command-line interface and batch processing
pub mod cli;
/// Generator constants and runtime configuration
pub mod configuration;
/// Error types
pub mod error;
/// PNG export
pub mod image;
/// Batch progress display
pub mod progress;
/// Glyph text export and parsing
pub mod text;
