/// The term for a single number.
///
/// Multiples of 15 give `"Fizz Buzz"`, multiples of 3 give `"Fizz"`, multiples
/// of 5 give `"Buzz"` and everything else is written out in decimal.
#[must_use]
pub fn fizz_buzz_term(i: i64) -> String {
    match (i % 3 == 0, i % 5 == 0) {
        (true, true) => "Fizz Buzz".to_owned(),
        (true, false) => "Fizz".to_owned(),
        (false, true) => "Buzz".to_owned(),
        (false, false) => i.to_string(),
    }
}

/// The terms for `1..=upper`. Empty if `upper < 1`.
#[must_use]
pub fn fizz_buzz_up_to(upper: i64) -> Vec<String> {
    (1..=upper).map(fizz_buzz_term).collect()
}

/// The classic hundred terms, so `fizz_buzz()[14]` is the first `"Fizz Buzz"`.
#[must_use]
pub fn fizz_buzz() -> Vec<String> {
    fizz_buzz_up_to(100)
}
