//! Yes/no questions about strings.

use std::collections::HashSet;

use itertools::Itertools;

/// Whether no character appears twice. Case-sensitive, so `"AaBb"` passes.
#[must_use]
pub fn has_unique_chars(s: &str) -> bool {
    let mut seen = HashSet::new();
    s.chars().all(|c| seen.insert(c))
}

/// Whether `s` reads the same backwards, ignoring case.
///
/// Only case is ignored: spaces and punctuation count, so `"Never odd or even"`
/// is not a palindrome.
///
/// Each character is lowercased on its own, so characters whose lowercase form
/// is several chars (`'İ'`) or depends on position (`'Σ'`) still compare as units.
#[must_use]
pub fn is_palindrome(s: &str) -> bool {
    s.chars()
        .flat_map(char::to_lowercase)
        .eq(s.chars().rev().flat_map(char::to_lowercase))
}

/// Case-insensitive substring search.
#[must_use]
pub fn fuzzy_contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Whether the two strings are anagrams of each other once spaces are removed.
#[must_use]
pub fn same_chars(a: &str, b: &str) -> bool {
    let sorted = |s: &str| s.chars().filter(|&c| c != ' ').sorted_unstable();
    sorted(a).eq(sorted(b))
}

/// Whether `rotated` is `s` with its characters cyclically shifted.
#[must_use]
pub fn is_rotation(s: &str, rotated: &str) -> bool {
    s.chars().count() == rotated.chars().count() && format!("{s}{s}").contains(rotated)
}

/// Whether every lowercase ASCII letter appears. Uppercase letters don't count
/// towards the total.
#[must_use]
pub fn is_pangram(s: &str) -> bool {
    s.chars()
        .filter(char::is_ascii_lowercase)
        .unique()
        .count()
        == 26
}

/// Whether two strings of the same length differ in at most `limit` positions.
/// Strings of different lengths never match.
#[must_use]
pub fn differs_by_at_most(a: &str, b: &str, limit: usize) -> bool {
    if a.chars().count() != b.chars().count() {
        return false;
    }

    let mut diffs = 0;
    for (x, y) in a.chars().zip(b.chars()) {
        if x != y {
            diffs += 1;
            if diffs > limit {
                return false;
            }
        }
    }

    true
}

/// [`differs_by_at_most`] with a limit of three.
#[must_use]
pub fn three_different_letters(a: &str, b: &str) -> bool {
    differs_by_at_most(a, b, 3)
}

#[cfg(test)]
mod tests {
    use super::{
        differs_by_at_most, fuzzy_contains, has_unique_chars, is_palindrome, is_pangram,
        is_rotation, same_chars, three_different_letters,
    };

    #[test]
    fn unique_chars() {
        assert!(has_unique_chars(""));
        assert!(has_unique_chars("AaBbCc"));
        assert!(!has_unique_chars("Hello, world"));
        assert!(!has_unique_chars("a a"));
    }

    #[test]
    fn palindromes() {
        assert!(is_palindrome(""));
        assert!(is_palindrome("rotator"));
        assert!(is_palindrome("Rats live on no evil star"));
        assert!(!is_palindrome("Never odd or even"));
        assert!(!is_palindrome("Hello, world"));
    }

    #[test]
    fn palindromes_with_multi_char_lowercase() {
        assert!(is_palindrome("İ"));
        assert!(is_palindrome("aİa"));
        assert!(is_palindrome("ΣaΣ"));
        assert!(is_palindrome("Σaσ"));
        assert!(!is_palindrome("İa"));
    }

    #[test]
    fn fuzzy() {
        assert!(fuzzy_contains("Hello, world", "WORLD"));
        assert!(fuzzy_contains("Hello, world", ""));
        assert!(!fuzzy_contains("Hello", "Hello, world"));
    }

    #[test]
    fn anagrams_ignore_spaces_only() {
        assert!(same_chars(" a1 b2 ", "b 1 a 2"));
        assert!(same_chars("", "   "));
        assert!(!same_chars("abc", "Abc"));
        assert!(!same_chars("abc", "abca"));
        assert!(!same_chars("a\tb", "ab"));
    }

    #[test]
    fn rotations() {
        assert!(is_rotation("abcde", "eabcd"));
        assert!(is_rotation("abcde", "abcde"));
        assert!(is_rotation("", ""));
        assert!(!is_rotation("abcde", "abced"));
        assert!(!is_rotation("abc", "a"));
        assert!(!is_rotation("abc", "abcabc"));
    }

    #[test]
    fn pangrams() {
        assert!(is_pangram("The quick brown fox jumps over the lazy dog"));
        assert!(!is_pangram("The quick brown fox jumped over the lazy dog"));
        // The only 't' is uppercase
        assert!(!is_pangram("The quick brown fox jumps over a lazy dog"));
        assert!(!is_pangram("ABCDEFGHIJKLMNOPQRSTUVWXYZ"));
    }

    #[test]
    fn positional_differences() {
        assert!(differs_by_at_most("", "", 0));
        assert!(differs_by_at_most("abc", "abd", 1));
        assert!(!differs_by_at_most("abc", "abd", 0));
        assert!(three_different_letters("Clamp", "Grams"));
        assert!(!three_different_letters("Clamp", "Grans"));
        assert!(!three_different_letters("Clamp", "Clam"));
    }
}
