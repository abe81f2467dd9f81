use log::debug;

/// A precomputed factorial table where `FACTORIALS[i]` is `i!`. 20! is the
/// largest that fits in a u64.
const FACTORIALS: [u64; 21] = {
    let mut arr = [0; 21];
    arr[0] = 1;
    let mut i = 1;
    while i < arr.len() {
        arr[i] = arr[i - 1] * i as u64;
        i += 1;
    }
    arr
};

/// The number of arrangements of `n` distinct positions, `n!`, or `None` if it
/// doesn't fit in a u64.
#[must_use]
pub fn permutation_count(n: usize) -> Option<u64> {
    FACTORIALS.get(n).copied()
}

/// Every arrangement of the characters of `s`.
///
/// The order comes from the construction: each remaining character in turn is
/// fixed as the next one, then the rest are arranged recursively. Repeated
/// characters produce repeated strings.
///
/// ```
/// use string_katas::permutations;
///
/// assert_eq!(permutations("abc"), ["abc", "acb", "bac", "bca", "cab", "cba"]);
/// ```
#[must_use]
pub fn permutations(s: &str) -> Vec<String> {
    let mut result = Vec::new();
    permutations_into(s, &mut result);
    result
}

/// Append every arrangement of the characters of `s` to `out`, in the same
/// order as [`permutations`]. Whatever `out` already holds is left alone.
pub fn permutations_into(s: &str, out: &mut Vec<String>) {
    let mut remaining = s.chars().collect::<Vec<_>>();

    if let Some(count) = permutation_count(remaining.len()).and_then(|c| usize::try_from(c).ok()) {
        out.reserve(count);
    }

    let before = out.len();
    let mut prefix = String::with_capacity(s.len());
    permute(&mut remaining, &mut prefix, out);

    debug!("Generated {} permutations of {s:?}", out.len() - before);
}

fn permute(remaining: &mut Vec<char>, prefix: &mut String, out: &mut Vec<String>) {
    if remaining.is_empty() {
        out.push(prefix.clone());
        return;
    }

    for i in 0..remaining.len() {
        let c = remaining.remove(i);
        prefix.push(c);

        permute(remaining, prefix, out);

        prefix.pop();
        remaining.insert(i, c);
    }
}
