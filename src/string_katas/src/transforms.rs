//! String to string rewrites.

use itertools::Itertools;

/// Keep only the first occurrence of each character, in the original order.
#[must_use]
pub fn remove_duplicates(s: &str) -> String {
    s.chars().unique().collect()
}

/// Collapse every run of spaces into one space, then every run of newlines
/// into one space.
///
/// The passes run in that order, so spaces on either side of a newline run
/// are not merged with it: `"a \n\n b"` becomes `"a   b"`.
#[must_use]
pub fn condense_whitespace(s: &str) -> String {
    let spaces = collapse_runs(s, ' ', ' ');
    collapse_runs(&spaces, '\n', ' ')
}

fn collapse_runs(s: &str, target: char, replacement: char) -> String {
    s.chars()
        .coalesce(|a, b| {
            if a == target && b == target {
                Ok(a)
            } else {
                Err((a, b))
            }
        })
        .map(|c| if c == target { replacement } else { c })
        .collect()
}

/// The longest prefix shared by every space separated word.
///
/// ```
/// use string_katas::longest_common_prefix;
///
/// assert_eq!(longest_common_prefix("flip flap flop"), "fl");
/// ```
#[must_use]
pub fn longest_common_prefix(s: &str) -> String {
    let words = s.split(' ').map(|w| w.chars().collect_vec()).collect_vec();
    let Some((first, rest)) = words.split_first() else {
        return String::new();
    };

    first
        .iter()
        .enumerate()
        .take_while(|&(i, c)| rest.iter().all(|word| word.get(i) == Some(c)))
        .map(|(_, c)| c)
        .collect()
}

/// Run-length encode, writing each character followed by how many times it
/// repeats. Case-sensitive: `"aaAAaa"` is `"a2A2a2"`.
#[must_use]
pub fn run_length_encode(s: &str) -> String {
    s.chars()
        .dedup_with_count()
        .map(|(count, c)| format!("{c}{count}"))
        .collect()
}

/// Reverse the characters of each space separated word, leaving the words
/// and the spaces between them where they are.
#[must_use]
pub fn reverse_words(s: &str) -> String {
    s.split(' ')
        .map(|word| word.chars().rev().collect::<String>())
        .join(" ")
}
