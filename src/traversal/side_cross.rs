//! Alternating low/high traversal.
//!
//! For an ascending sequence `s` of length `n`, position `k` emits
//! `s[k / 2]` when `k` is even and `s[n - 1 - k / 2]` when `k` is odd. The two
//! ends converge on the middle, and for odd `n` the middle element is emitted
//! exactly once as the last value.
//!
//! ```text
//!   s = [2, 3, 9, 17, 25]
//!        0  2  4   3   1     <- emission position
//! ```

use super::{Traversal, View};

/// Emits the smallest element, then the largest, then the second smallest,
/// and so on toward the middle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SideCross;

/// Side-cross view over a container.
///
/// # Examples
///
/// ```rust
/// use magical_container::container::MagicalContainer;
/// use magical_container::traversal::SideCrossIterator;
///
/// let container: MagicalContainer = [17, 2, 25, 9, 3].into_iter().collect();
/// let values: Vec<i32> = SideCrossIterator::new(&container).into_iter().collect();
/// assert_eq!(values, vec![2, 25, 3, 17, 9]);
/// ```
pub type SideCrossIterator<'a> = View<'a, SideCross>;

impl Traversal for SideCross {
    const NAME: &'static str = "side-cross";

    #[inline]
    fn first(_sorted: &[i32]) -> usize {
        0
    }

    #[inline]
    fn following(_sorted: &[i32], position: usize) -> usize {
        position + 1
    }

    #[inline]
    fn locate(sorted: &[i32], position: usize) -> usize {
        let step = position / 2;
        if position % 2 == 0 {
            step
        } else {
            sorted.len() - 1 - step
        }
    }
}

impl ExactSizeIterator for super::Cursor<'_, SideCross> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::MagicalContainer;
    use rstest::rstest;

    #[rstest]
    #[case(&[17, 2, 25, 9, 3], &[2, 25, 3, 17, 9])]
    #[case(&[4, 1, 3, 2], &[1, 4, 2, 3])]
    #[case(&[7, 1], &[1, 7])]
    #[case(&[42], &[42])]
    #[case(&[], &[])]
    #[case(&[-5, 0, 5], &[-5, 5, 0])]
    fn test_side_cross_order(#[case] input: &[i32], #[case] expected: &[i32]) {
        let container: MagicalContainer = input.iter().copied().collect();
        let emitted: Vec<i32> = container.side_cross().into_iter().collect();
        assert_eq!(emitted, expected);
    }

    #[rstest]
    fn test_equal_values_follow_sorted_positions() {
        let container: MagicalContainer = [3, 1, 3, 1].into_iter().collect();
        let emitted: Vec<i32> = container.side_cross().into_iter().collect();
        assert_eq!(emitted, vec![1, 3, 1, 3]);
    }

    #[rstest]
    fn test_locate_visits_every_index_once() {
        for length in 0..12 {
            let sorted: Vec<i32> = (0..length).collect();
            let mut indices: Vec<usize> = (0..sorted.len())
                .map(|position| SideCross::locate(&sorted, position))
                .collect();
            indices.sort_unstable();
            assert_eq!(indices, (0..sorted.len()).collect::<Vec<_>>());
        }
    }

    #[rstest]
    fn test_exact_size() {
        let container: MagicalContainer = [1, 2, 3, 4, 5].into_iter().collect();
        let mut cursor = container.side_cross().iter();
        assert_eq!(cursor.len(), 5);
        cursor.next();
        cursor.next();
        assert_eq!(cursor.len(), 3);
    }
}
