//! Non-decreasing traversal.

use super::{Traversal, View};

/// Emits every element in non-decreasing order.
///
/// Equal values are emitted in the order they were added.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Ascending;

/// Ascending view over a container.
///
/// # Examples
///
/// ```rust
/// use magical_container::container::MagicalContainer;
/// use magical_container::traversal::AscendingIterator;
///
/// let container: MagicalContainer = [1, 2, 1].into_iter().collect();
/// let values: Vec<i32> = AscendingIterator::new(&container).into_iter().collect();
/// assert_eq!(values, vec![1, 1, 2]);
/// ```
pub type AscendingIterator<'a> = View<'a, Ascending>;

impl Traversal for Ascending {
    const NAME: &'static str = "ascending";

    #[inline]
    fn first(_sorted: &[i32]) -> usize {
        0
    }

    #[inline]
    fn following(_sorted: &[i32], position: usize) -> usize {
        position + 1
    }

    #[inline]
    fn locate(_sorted: &[i32], position: usize) -> usize {
        position
    }
}

impl ExactSizeIterator for super::Cursor<'_, Ascending> {}
