//! rotate library
//!
//! Core functionality for the `rot` command-line cipher: the rotation
//! engine (ROT-N and ROT47) and the line pump that streams text through it.

pub mod cli;
pub mod engine;
pub mod error;
pub mod pump;

// Re-export main types for convenience
pub use cli::Cli;
pub use engine::{transform, Mode, Shift};
pub use error::{Result, RotateError};
pub use pump::{OpenMode, PumpConfig, DEFAULT_MAX_LINE};
