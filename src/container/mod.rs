//! Integer multiset with a maintained ascending mirror.
//!
//! This module provides [`MagicalContainer`], an in-memory collection of `i32`
//! values that keeps two views of the same contents:
//!
//! - the insertion order, used by [`MagicalContainer::iter`], equality and
//!   serialization
//! - an ascending mirror, kept sorted on every mutation and shared by all
//!   traversal views in [`crate::traversal`]
//!
//! # Semantics
//!
//! - Every `i32` is accepted, including zero and negative values.
//! - Duplicates are stored: adding a value twice increases the size by two.
//! - Removing a value drops one occurrence; removing an absent value is a no-op.
//!
//! Both sequences use `SmallVec` so containers of up to 8 elements never touch
//! the heap.
//!
//! # Time Complexity
//!
//! | Operation         | Complexity |
//! |-------------------|------------|
//! | `add_element`     | O(n)       |
//! | `remove_element`  | O(n)       |
//! | `contains`        | O(log n)   |
//! | `count_of`        | O(log n)   |
//! | `size`            | O(1)       |
//! | `as_sorted_slice` | O(1)       |
//!
//! # Examples
//!
//! ```rust
//! use magical_container::container::MagicalContainer;
//!
//! let mut container = MagicalContainer::new();
//! container.add_element(17);
//! container.add_element(2);
//! container.add_element(2);
//! assert_eq!(container.size(), 3);
//!
//! assert!(container.remove_element(2));
//! assert!(!container.remove_element(99));
//! assert_eq!(container.as_sorted_slice(), &[2, 17]);
//! ```

use smallvec::SmallVec;
use std::fmt;

use crate::traversal::{AscendingIterator, PrimeIterator, SideCrossIterator};

/// Number of elements stored inline before spilling to the heap.
const INLINE_CAPACITY: usize = 8;

type Storage = SmallVec<[i32; INLINE_CAPACITY]>;

/// An in-memory multiset of integers.
///
/// The container owns its values. Traversal views borrow it, so it cannot be
/// mutated while any view or cursor over it is alive.
///
/// # Examples
///
/// ```rust
/// use magical_container::container::MagicalContainer;
///
/// let container: MagicalContainer = [17, 2, 25, 9, 3].into_iter().collect();
///
/// let ascending: Vec<i32> = container.ascending().into_iter().collect();
/// assert_eq!(ascending, vec![2, 3, 9, 17, 25]);
///
/// let side_cross: Vec<i32> = container.side_cross().into_iter().collect();
/// assert_eq!(side_cross, vec![2, 25, 3, 17, 9]);
///
/// let primes: Vec<i32> = container.primes().into_iter().collect();
/// assert_eq!(primes, vec![2, 3, 17]);
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct MagicalContainer {
    elements: Storage,
    sorted: Storage,
}

static_assertions::assert_impl_all!(MagicalContainer: Send, Sync, Clone, Default);

impl MagicalContainer {
    /// Creates an empty container.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty container with room for `capacity` elements.
    ///
    /// Capacities up to 8 are served by inline storage.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Storage::with_capacity(capacity),
            sorted: Storage::with_capacity(capacity),
        }
    }

    /// Adds `value` to the container.
    ///
    /// Every integer is accepted. Duplicates are kept, and the new occurrence
    /// is placed after existing equal values in the ascending mirror.
    pub fn add_element(&mut self, value: i32) {
        let position = self.sorted.partition_point(|&element| element <= value);
        self.sorted.insert(position, value);
        self.elements.push(value);
        tracing::trace!(value, size = self.size(), "element added");
    }

    /// Removes one occurrence of `value`.
    ///
    /// Returns `true` if an occurrence was removed. Removing a value that is
    /// not present leaves the container unchanged and returns `false`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use magical_container::container::MagicalContainer;
    ///
    /// let mut container: MagicalContainer = [1, 1].into_iter().collect();
    /// assert!(container.remove_element(1));
    /// assert_eq!(container.size(), 1);
    /// assert!(!container.remove_element(0));
    /// assert_eq!(container.size(), 1);
    /// ```
    pub fn remove_element(&mut self, value: i32) -> bool {
        let Some(position) = self.elements.iter().position(|&element| element == value) else {
            tracing::debug!(value, "ignoring removal of absent element");
            return false;
        };
        self.elements.remove(position);

        // Equal values are interchangeable, so dropping the first one keeps the mirror sorted.
        let sorted_position = self.sorted.partition_point(|&element| element < value);
        self.sorted.remove(sorted_position);

        tracing::trace!(value, size = self.size(), "element removed");
        true
    }

    /// Returns the number of stored elements, counting duplicates.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the container holds no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns `true` if at least one occurrence of `value` is stored.
    #[must_use]
    pub fn contains(&self, value: i32) -> bool {
        self.sorted.binary_search(&value).is_ok()
    }

    /// Returns how many occurrences of `value` are stored.
    #[must_use]
    pub fn count_of(&self, value: i32) -> usize {
        let lower = self.sorted.partition_point(|&element| element < value);
        let upper = self.sorted.partition_point(|&element| element <= value);
        upper - lower
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.elements.clear();
        self.sorted.clear();
        tracing::trace!("container cleared");
    }

    /// Returns an iterator over the elements in insertion order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, i32> {
        self.elements.iter()
    }

    /// Returns the elements in non-decreasing order.
    ///
    /// Equal values keep the order in which they were added.
    #[inline]
    #[must_use]
    pub fn as_sorted_slice(&self) -> &[i32] {
        &self.sorted
    }

    /// Returns the ascending view over this container.
    #[inline]
    #[must_use]
    pub const fn ascending(&self) -> AscendingIterator<'_> {
        AscendingIterator::new(self)
    }

    /// Returns the side-cross view over this container.
    #[inline]
    #[must_use]
    pub const fn side_cross(&self) -> SideCrossIterator<'_> {
        SideCrossIterator::new(self)
    }

    /// Returns the prime-only view over this container.
    #[inline]
    #[must_use]
    pub const fn primes(&self) -> PrimeIterator<'_> {
        PrimeIterator::new(self)
    }
}

impl fmt::Debug for MagicalContainer {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl fmt::Display for MagicalContainer {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("[")?;
        for (index, value) in self.iter().enumerate() {
            if index > 0 {
                formatter.write_str(", ")?;
            }
            write!(formatter, "{value}")?;
        }
        formatter.write_str("]")
    }
}

impl FromIterator<i32> for MagicalContainer {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut container = Self::new();
        container.extend(iter);
        container
    }
}

impl Extend<i32> for MagicalContainer {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for value in iter {
            self.add_element(value);
        }
    }
}

impl<'a> IntoIterator for &'a MagicalContainer {
    type Item = &'a i32;
    type IntoIter = std::slice::Iter<'a, i32>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for MagicalContainer {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.size()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct MagicalContainerVisitor;

#[cfg(feature = "serde")]
impl<'de> serde::de::Visitor<'de> for MagicalContainerVisitor {
    type Value = MagicalContainer;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of integers")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        // The length hint comes from the input, so it is not used to pre-allocate.
        let mut container = MagicalContainer::new();
        while let Some(element) = seq.next_element()? {
            container.add_element(element);
        }
        Ok(container)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for MagicalContainer {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(MagicalContainerVisitor)
    }
}

// =============================================================================
// Tests
// =============================================================================
