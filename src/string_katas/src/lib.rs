//! String katas.
//!
//! Everything here works on `char`s, not bytes, and returns fresh values.
#![warn(clippy::pedantic)]

pub mod checks;
pub mod counting;
pub mod permutations;
pub mod transforms;

pub use checks::{
    differs_by_at_most, fuzzy_contains, has_unique_chars, is_palindrome, is_pangram, is_rotation,
    same_chars, three_different_letters,
};
pub use counting::{LetterCounts, char_count, count_vowels_and_consonants};
pub use permutations::{permutation_count, permutations, permutations_into};
pub use transforms::{
    condense_whitespace, longest_common_prefix, remove_duplicates, reverse_words,
    run_length_encode,
};
