//! Fixed slang vocabulary and sentence terminators.

use rand::Rng;

/// Every phrase the generator can sample. Immutable for the process
/// lifetime; entries are distinct and may contain spaces.
pub const PHRASES: &[&str] = &[
    "skibidi",
    "rizz",
    "fr fr",
    "sigma",
    "no cap",
    "bussin",
    "sheesh",
    "based",
    "sus",
    "vibing",
    "caught in 4k",
    "ratio",
    "mid",
    "yeet",
    "slay",
    "bet",
    "finna",
    "on god",
    "deadass",
    "lowkey",
    "highkey",
    "cringe",
    "chad",
    "L",
    "W",
    "glizzy",
    "bruh moment",
    "simp",
    "main character energy",
    "rent free",
    "living my best life",
    "understood the assignment",
    "it's giving",
    "ate that",
    "slept on",
    "hits different",
    "down bad",
    "touch grass",
    "unhinged",
    "vibe check",
    "pressed",
    "boujee",
    "drip",
    "glow up",
    "sending me",
    "that's fire",
    "straight facts",
    "cap",
    "banger",
    "valid",
    "shook",
    "goated",
    "built different",
    "say less",
    "slaps",
    "stan",
    "tea",
    "woke",
    "clout",
    "fit",
    "flex",
    "iconic",
    "lit",
    "mood",
    "periodt",
    "snatched",
    "soft launch",
    "toxic",
];

/// Characters that may end a sentence.
pub const TERMINATORS: &[char] = &['.', '!', '?'];

/// Pick a uniformly random phrase from the vocabulary.
///
/// # Returns
/// A borrowed phrase; the vocabulary is never mutated.
pub fn sample_phrase<R: Rng>(rng: &mut R) -> &'static str {
    PHRASES[rng.gen_range(0..PHRASES.len())]
}

/// Pick a uniformly random sentence terminator.
pub fn sample_terminator<R: Rng>(rng: &mut R) -> char {
    TERMINATORS[rng.gen_range(0..TERMINATORS.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn vocabulary_is_non_empty_and_distinct() {
        assert!(!PHRASES.is_empty());
        let unique: HashSet<&str> = PHRASES.iter().copied().collect();
        assert_eq!(unique.len(), PHRASES.len());
    }

    #[test]
    fn vocabulary_has_no_terminator_or_separator_characters() {
        for phrase in PHRASES {
            assert!(!phrase.is_empty(), "phrase: {:?}", phrase);
            for terminator in TERMINATORS {
                assert!(!phrase.contains(*terminator), "phrase: {:?}", phrase);
            }
            assert!(!phrase.contains(','), "phrase: {:?}", phrase);
            assert_eq!(phrase.trim(), *phrase, "phrase: {:?}", phrase);
        }
    }

    #[test]
    fn sampled_phrases_come_from_the_vocabulary() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let phrase = sample_phrase(&mut rng);
            assert!(PHRASES.contains(&phrase));
        }
    }

    #[test]
    fn sampled_terminators_come_from_the_terminator_set() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let terminator = sample_terminator(&mut rng);
            assert!(TERMINATORS.contains(&terminator));
        }
    }
}
