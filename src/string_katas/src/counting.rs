//! Character tallies.

const VOWELS: &str = "aeiou";
const CONSONANTS: &str = "bcdfghjklmnpqrstvwxyz";

/// Tally of ASCII letters split into vowels and consonants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LetterCounts {
    /// Occurrences of `a`, `e`, `i`, `o` and `u`.
    pub vowels: usize,
    /// Occurrences of the other 21 letters.
    pub consonants: usize,
}

/// How many times `c` appears in `s`. Case-sensitive.
#[must_use]
pub fn char_count(s: &str, c: char) -> usize {
    s.chars().filter(|&x| x == c).count()
}

/// Count ASCII vowels and consonants, ignoring case. Anything that isn't one of
/// the 26 letters is skipped.
#[must_use]
pub fn count_vowels_and_consonants(s: &str) -> LetterCounts {
    s.to_lowercase()
        .chars()
        .fold(LetterCounts::default(), |mut counts, c| {
            if VOWELS.contains(c) {
                counts.vowels += 1;
            } else if CONSONANTS.contains(c) {
                counts.consonants += 1;
            }
            counts
        })
}
