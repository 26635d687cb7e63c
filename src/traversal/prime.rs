//! Prime-only traversal.

use super::{Traversal, View};
use crate::primality::is_prime;

/// Emits the prime elements in non-decreasing order.
///
/// Positions are indices into the ascending sequence; non-prime entries are
/// skipped when the cursor starts or advances. Duplicate primes are emitted
/// once per occurrence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Prime;

/// Prime-only view over a container.
///
/// # Examples
///
/// ```rust
/// use magical_container::container::MagicalContainer;
/// use magical_container::traversal::PrimeIterator;
///
/// let container: MagicalContainer = [-1, -2, -3, 2, 3].into_iter().collect();
/// let values: Vec<i32> = PrimeIterator::new(&container).into_iter().collect();
/// assert_eq!(values, vec![2, 3]);
/// ```
pub type PrimeIterator<'a> = View<'a, Prime>;

/// Index of the first prime at or after `start`, or `sorted.len()`.
fn next_prime_from(sorted: &[i32], start: usize) -> usize {
    sorted
        .get(start..)
        .and_then(|tail| tail.iter().position(|&value| is_prime(value)))
        .map_or(sorted.len(), |offset| start + offset)
}

impl Traversal for Prime {
    const NAME: &'static str = "prime";

    fn first(sorted: &[i32]) -> usize {
        // Values below 2 are never prime.
        next_prime_from(sorted, sorted.partition_point(|&value| value < 2))
    }

    fn following(sorted: &[i32], position: usize) -> usize {
        next_prime_from(sorted, position + 1)
    }

    #[inline]
    fn locate(_sorted: &[i32], position: usize) -> usize {
        position
    }

    fn remaining(sorted: &[i32], position: usize) -> (usize, Option<usize>) {
        let upper = sorted.len().saturating_sub(position);
        (usize::from(upper > 0), Some(upper))
    }
}
