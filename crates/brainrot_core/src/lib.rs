//! Core domain library for brainrot (vocabulary, generation, config).

/// Configuration loading and defaults.
pub mod config;
/// Shared constants used across brainrot crates.
pub mod constants;
/// Sentence, paragraph, and text generation.
pub mod generator;
/// Wire types for the generation API.
pub mod models;
/// Fixed slang vocabulary and sentence terminators.
pub mod vocab;

pub use config::Config;
pub use constants::DEFAULT_PORT;
