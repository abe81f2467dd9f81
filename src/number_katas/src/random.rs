use fastrand::Rng;
use log::{debug, trace};

use crate::NumberError;

/// Draw uniformly from `min..=max` using the thread-local generator.
///
/// # Errors
///
/// Returns [`NumberError::InvalidRange`] if `max < min`.
pub fn rand_in_range(min: i64, max: i64) -> Result<i64, NumberError> {
    check_range(min, max)?;
    let value = fastrand::i64(min..=max);
    trace!("Drew {value} from {min}..={max}");
    Ok(value)
}

/// Like [`rand_in_range`] but with a caller supplied generator, which makes
/// the draw reproducible from a seed.
///
/// # Errors
///
/// Returns [`NumberError::InvalidRange`] if `max < min`.
pub fn rand_in_range_with(rng: &mut Rng, min: i64, max: i64) -> Result<i64, NumberError> {
    check_range(min, max)?;
    Ok(rng.i64(min..=max))
}

fn check_range(min: i64, max: i64) -> Result<(), NumberError> {
    if max < min {
        debug!("Rejecting empty range {min}..={max}");
        return Err(NumberError::InvalidRange { min, max });
    }

    Ok(())
}
