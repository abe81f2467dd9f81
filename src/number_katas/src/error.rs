use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberError {
    #[error("Invalid range, expected min <= max but got min {min} and max {max}")]
    InvalidRange { min: i64, max: i64 },
    #[error("Expected a non-negative integer but got {0}")]
    NegativeInput(i64),
    #[error("{base} raised to the power of {exponent} does not fit in an i64")]
    Overflow { base: i64, exponent: i64 },
}
