//! Text generation endpoint.

use axum::{extract::Query, Json};

use brainrot_core::generator;
use brainrot_core::models::{GenerateParams, GenerateResponse};

/// Generate placeholder text.
///
/// Counts are resolved leniently: missing or non-numeric values become 1,
/// numeric values are clamped to [1, 10]. Bad counts never produce a
/// client error.
///
/// # Returns
/// The generated text plus the counts that were actually used.
pub async fn generate(Query(params): Query<GenerateParams>) -> Json<GenerateResponse> {
    let (paragraphs, sentences) = params.resolve();
    tracing::debug!(paragraphs, sentences, "generating text");

    let text = generator::generate(paragraphs, sentences);
    Json(GenerateResponse {
        text,
        paragraphs,
        sentences,
    })
}
