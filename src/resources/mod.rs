//! Game resources: letter distribution and dictionary
//!
//! Both resources load from external files and degrade to built-in defaults
//! when the file is missing or unreadable, so the game always starts.

mod dictionary;
mod distribution;
mod embedded;

pub use dictionary::Dictionary;
pub use distribution::{Distribution, Piece};
pub use embedded::{FALLBACK_WORDS, FALLBACK_WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_count_matches_const() {
        assert_eq!(FALLBACK_WORDS.len(), FALLBACK_WORDS_COUNT);
    }

    #[test]
    fn fallback_words_are_uppercase_ascii() {
        for &word in FALLBACK_WORDS {
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' is not uppercase ASCII"
            );
            assert!(word.len() >= 2, "Word '{word}' is too short to play");
        }
    }

    #[test]
    fn fallback_covers_the_original_defaults() {
        // The hardcoded list the original game fell back to
        for word in ["CAT", "DOG", "HOUSE", "THE", "AND", "FOR", "DAY"] {
            assert!(
                FALLBACK_WORDS.contains(&word),
                "Missing default word {word}"
            );
        }
    }
}
