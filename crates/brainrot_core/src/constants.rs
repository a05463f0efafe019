//! Shared constants used across brainrot crates.

/// Default API port for brainrot.
pub const DEFAULT_PORT: u16 = 38417;

/// Smallest accepted paragraph or sentence count.
pub const MIN_COUNT: u32 = 1;

/// Largest accepted paragraph or sentence count.
pub const MAX_COUNT: u32 = 10;

/// Paragraph count the frontend starts with.
pub const DEFAULT_PARAGRAPHS: u32 = 3;

/// Sentences-per-paragraph the frontend starts with.
pub const DEFAULT_SENTENCES: u32 = 4;

/// Minimum number of phrases in a sentence.
pub const MIN_SENTENCE_PHRASES: usize = 5;

/// Size of the uniform spread added on top of the minimum phrase count.
/// Sentence lengths land in [5, 14].
pub const SENTENCE_PHRASE_SPREAD: usize = 10;

/// A phrase gets a trailing comma when a uniform draw in [0, 1) exceeds
/// this threshold (a 0.3 chance).
pub const COMMA_THRESHOLD: f64 = 0.7;
