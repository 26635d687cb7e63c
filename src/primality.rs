//! Primality testing.

/// Returns `true` when `value` is prime.
///
/// Values below 2 (zero and every negative number) are never prime. Larger
/// values are checked by trial division over `2..=floor(sqrt(value))`.
///
/// # Examples
///
/// ```rust
/// use magical_container::primality::is_prime;
///
/// assert!(is_prime(17));
/// assert!(!is_prime(25));
/// assert!(!is_prime(-3));
/// ```
#[must_use]
pub const fn is_prime(value: i32) -> bool {
    if value < 2 {
        return false;
    }
    if value < 4 {
        return true;
    }
    if value % 2 == 0 {
        return false;
    }
    // `divisor <= value / divisor` stays in range where `divisor * divisor` would overflow.
    let mut divisor = 3;
    while divisor <= value / divisor {
        if value % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}
