//! Brain-rot text generation.
//!
//! Pure string assembly over the fixed vocabulary: a sentence is 5 to 14
//! sampled phrases with occasional trailing commas and one terminator, a
//! paragraph is a run of sentences joined by spaces, and the full text is
//! paragraphs joined by blank lines. All entry points take the random
//! source as an argument so tests can seed it; [`generate`] wraps the
//! thread-local RNG for callers that do not care.

use rand::Rng;

use crate::constants::{
    COMMA_THRESHOLD, MAX_COUNT, MIN_COUNT, MIN_SENTENCE_PHRASES, SENTENCE_PHRASE_SPREAD,
};
use crate::vocab::{sample_phrase, sample_terminator};

/// Clamp a raw count into the accepted [`MIN_COUNT`], [`MAX_COUNT`] range.
pub fn clamp_count(value: i64) -> u32 {
    value.clamp(MIN_COUNT as i64, MAX_COUNT as i64) as u32
}

/// Resolve a raw query-string count.
///
/// Missing or non-numeric values resolve to [`MIN_COUNT`]; numeric values
/// are clamped. Bad counts are never surfaced as errors.
pub fn parse_count(raw: Option<&str>) -> u32 {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .map(clamp_count)
        .unwrap_or(MIN_COUNT)
}

/// Uppercase the first character of a phrase, leaving the rest unchanged.
fn capitalize_first(phrase: &str) -> String {
    let mut chars = phrase.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Produce one sentence.
///
/// Length is uniform in [5, 14] phrases. The first phrase is capitalized,
/// non-final phrases gain a trailing comma with probability 0.3, and the
/// sentence ends with exactly one terminator.
pub fn generate_sentence<R: Rng>(rng: &mut R) -> String {
    let length = MIN_SENTENCE_PHRASES + rng.gen_range(0..SENTENCE_PHRASE_SPREAD);
    let mut words = Vec::with_capacity(length);

    for i in 0..length {
        let phrase = sample_phrase(rng);
        let mut word = if i == 0 {
            capitalize_first(phrase)
        } else {
            phrase.to_string()
        };
        if i < length - 1 && rng.gen::<f64>() > COMMA_THRESHOLD {
            word.push(',');
        }
        words.push(word);
    }

    let mut sentence = words.join(" ");
    sentence.push(sample_terminator(rng));
    sentence
}

/// Produce one paragraph of `sentences` independent sentences joined by
/// single spaces. Callers pass a count of at least 1.
pub fn generate_paragraph<R: Rng>(rng: &mut R, sentences: u32) -> String {
    (0..sentences)
        .map(|_| generate_sentence(rng))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Produce the full text: `paragraphs` paragraphs joined by blank lines.
///
/// Both counts are clamped to [1, 10], so the structural contract holds
/// for any input.
pub fn generate_text<R: Rng>(rng: &mut R, paragraphs: u32, sentences: u32) -> String {
    let paragraphs = paragraphs.clamp(MIN_COUNT, MAX_COUNT);
    let sentences = sentences.clamp(MIN_COUNT, MAX_COUNT);

    let text = (0..paragraphs)
        .map(|_| generate_paragraph(rng, sentences))
        .collect::<Vec<_>>()
        .join("\n\n");
    text.trim_end().to_string()
}

/// Generate text with the thread-local RNG.
pub fn generate(paragraphs: u32, sentences: u32) -> String {
    let mut rng = rand::thread_rng();
    generate_text(&mut rng, paragraphs, sentences)
}
