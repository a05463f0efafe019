//! Wire types for the generation API.

use serde::{Deserialize, Serialize};

use crate::generator::parse_count;

/// Raw query parameters for `GET /api/generate`.
///
/// Both fields are kept as strings so that missing, non-numeric, and
/// out-of-range values resolve to valid counts instead of a client error.
#[derive(Debug, Deserialize)]
pub struct GenerateParams {
    pub paragraphs: Option<String>,
    pub sentences: Option<String>,
}

impl GenerateParams {
    /// Resolve the raw parameters into clamped (paragraphs, sentences)
    /// counts.
    pub fn resolve(&self) -> (u32, u32) {
        (
            parse_count(self.paragraphs.as_deref()),
            parse_count(self.sentences.as_deref()),
        )
    }
}

/// Response body for `GET /api/generate`.
///
/// Echoes the counts that were actually used after clamping.
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub text: String,
    pub paragraphs: u32,
    pub sentences: u32,
}
