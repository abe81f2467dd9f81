use log::debug;

use crate::NumberError;

/// Swap two integers using only addition and subtraction.
///
/// The arithmetic wraps, so the intermediate sum may overflow and the swap
/// still comes out right for every pair of `i64`.
pub fn swap_without_temp(a: &mut i64, b: &mut i64) {
    *a = a.wrapping_add(*b);
    *b = a.wrapping_sub(*b);
    *a = a.wrapping_sub(*b);
}

/// Raise `base` to `exponent`.
///
/// Outside the domain (`base <= 0` or `exponent < 0`) this returns `Ok(0)`
/// instead of failing.
///
/// # Errors
///
/// Returns [`NumberError::Overflow`] if the result does not fit in an `i64`.
pub fn power(base: i64, exponent: i64) -> Result<i64, NumberError> {
    if base <= 0 || exponent < 0 {
        return Ok(0);
    }

    if base == 1 {
        return Ok(1);
    }

    let overflow = NumberError::Overflow { base, exponent };

    // Any base of at least 2 overflows long before the exponent leaves u32
    let exp = u32::try_from(exponent).map_err(|_| overflow)?;

    base.checked_pow(exp).ok_or_else(|| {
        debug!("{base}^{exponent} overflows i64");
        overflow
    })
}

/// Trial division up to the square root.
#[must_use]
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }

    // `d <= n / d` rather than `d * d <= n` so the bound never overflows
    let mut d = 2;
    while d <= n / d {
        if n % d == 0 {
            return false;
        }
        d += 1;
    }

    true
}

#[cfg(test)]
mod tests {
    use crate::NumberError;

    use super::{is_prime, power, swap_without_temp};

    #[test]
    fn swap_small() {
        let mut a = 4;
        let mut b = 5;
        swap_without_temp(&mut a, &mut b);
        assert_eq!((a, b), (5, 4));
    }

    #[test]
    fn swap_extremes() {
        let mut a = i64::MAX;
        let mut b = i64::MAX - 1;
        swap_without_temp(&mut a, &mut b);
        assert_eq!((a, b), (i64::MAX - 1, i64::MAX));

        let mut a = i64::MIN;
        let mut b = i64::MAX;
        swap_without_temp(&mut a, &mut b);
        assert_eq!((a, b), (i64::MAX, i64::MIN));

        let mut a = -7;
        let mut b = -7;
        swap_without_temp(&mut a, &mut b);
        assert_eq!((a, b), (-7, -7));
    }

    #[test]
    fn power_in_domain() {
        assert_eq!(power(4, 3), Ok(64));
        assert_eq!(power(2, 8), Ok(256));
        assert_eq!(power(7, 0), Ok(1));
        assert_eq!(power(1, i64::MAX), Ok(1));
        assert_eq!(power(2, 62), Ok(1 << 62));
    }

    #[test]
    fn power_out_of_domain_is_zero() {
        assert_eq!(power(0, 3), Ok(0));
        assert_eq!(power(-2, 3), Ok(0));
        assert_eq!(power(3, -1), Ok(0));
    }

    #[test]
    fn power_overflow() {
        assert_eq!(
            power(2, 63),
            Err(NumberError::Overflow {
                base: 2,
                exponent: 63
            })
        );
        assert_eq!(
            power(3, i64::MAX),
            Err(NumberError::Overflow {
                base: 3,
                exponent: i64::MAX
            })
        );
    }

    #[test]
    fn small_primes() {
        let primes = (-10..50).filter(|&n| is_prime(n)).collect::<Vec<_>>();
        assert_eq!(
            primes,
            [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47]
        );
    }

    #[test]
    fn squares_are_composite() {
        for p in [2_i64, 3, 5, 7, 11, 101, 65_521] {
            assert!(!is_prime(p * p), "{p} squared");
        }
    }

    #[test]
    fn large_prime() {
        assert!(is_prime(16_777_259));
        assert!(is_prime(2_147_483_647));
        assert!(!is_prime(2_147_483_647 * 3));
    }
}
