//! Integer and string katas, re-exported from the member crates.
//!
//! ```
//! use katas::{numbers, strings};
//!
//! assert_eq!(numbers::fizz_buzz()[14], "Fizz Buzz");
//! assert_eq!(strings::permutations("ab"), ["ab", "ba"]);
//! ```
#![warn(clippy::pedantic)]

pub use number_katas as numbers;
pub use string_katas as strings;
