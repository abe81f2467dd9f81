//! Integer katas: FizzBuzz, random draws, arithmetic tricks and bit patterns.
//!
//! Every public function works on `i64`. The bit-pattern searches in [`bits`]
//! are generic over unsigned primitives underneath, and the `i64` entry points
//! convert at the boundary.
#![warn(clippy::pedantic)]

pub mod arithmetic;
pub mod bits;
mod error;
pub mod fizz_buzz;
pub mod random;

pub use arithmetic::{is_prime, power, swap_without_temp};
pub use bits::{PopcountNeighbors, binary_reverse, popcount_neighbors};
pub use error::NumberError;
pub use fizz_buzz::{fizz_buzz, fizz_buzz_term, fizz_buzz_up_to};
pub use random::{rand_in_range, rand_in_range_with};
