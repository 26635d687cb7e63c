//! Read-only traversal views over a [`MagicalContainer`].
//!
//! A traversal is split into three pieces:
//!
//! - [`Traversal`]: a strategy that decides which element of the container's
//!   ascending sequence is emitted at each position
//! - [`View`]: a borrowed handle on the container, exposing `begin()` and
//!   `end()` like a forward-iterable range
//! - [`Cursor`]: a position inside a view, supporting dereference
//!   ([`Cursor::get`]), pre-increment ([`Cursor::advance`]) and equality
//!
//! Three strategies are provided:
//!
//! | Strategy      | View alias            | Order                                 |
//! |---------------|-----------------------|---------------------------------------|
//! | [`Ascending`] | [`AscendingIterator`] | non-decreasing                        |
//! | [`SideCross`] | [`SideCrossIterator`] | smallest, largest, second smallest... |
//! | [`Prime`]     | [`PrimeIterator`]     | non-decreasing, primes only           |
//!
//! # State Machine
//!
//! ```text
//!                begin()                advance() at last position
//!   View ─────────────────► Active ──────────────────────────────► Exhausted
//!    │                      ▲    │                                     ▲
//!    │                      └────┘ advance()                           │
//!    └─────────────────────────────────────────────────────────────────┘
//!                        begin() on an empty traversal
//! ```
//!
//! A view is the not-started state. [`View::end`] returns the exhausted
//! sentinel, and dereferencing or advancing it fails with
//! [`ContainerError::InvalidState`].
//!
//! # Liveness
//!
//! Views read the container's maintained ascending sequence each time a cursor
//! is created. Because a view borrows the container, the container cannot be
//! mutated while the view or any of its cursors is alive.
//!
//! # Examples
//!
//! ```rust
//! use magical_container::container::MagicalContainer;
//! use magical_container::traversal::SideCrossIterator;
//!
//! let container: MagicalContainer = [17, 2, 25, 9, 3].into_iter().collect();
//! let view = SideCrossIterator::new(&container);
//!
//! let mut cursor = view.begin();
//! let mut emitted = Vec::new();
//! while cursor != view.end() {
//!     emitted.push(cursor.get().unwrap());
//!     cursor.advance().unwrap();
//! }
//! assert_eq!(emitted, vec![2, 25, 3, 17, 9]);
//! assert!(cursor.get().is_err());
//! ```

mod ascending;
mod prime;
mod side_cross;

pub use ascending::{Ascending, AscendingIterator};
pub use prime::{Prime, PrimeIterator};
pub use side_cross::{SideCross, SideCrossIterator};

use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;

use crate::container::MagicalContainer;
use crate::error::{ContainerError, CursorOperation};

/// A strategy that orders the container's ascending sequence.
///
/// Positions run from [`Traversal::first`] up to the end sentinel, which is
/// always `sorted.len()`. Every position below the sentinel is active and maps
/// to an index of `sorted` through [`Traversal::locate`].
pub trait Traversal {
    /// Name used in diagnostics and error messages.
    const NAME: &'static str;

    /// Returns the first active position, or `sorted.len()` if nothing is emitted.
    fn first(sorted: &[i32]) -> usize;

    /// Returns the position after the active `position`, or `sorted.len()` when exhausted.
    fn following(sorted: &[i32], position: usize) -> usize;

    /// Maps an active position to an index of `sorted`.
    fn locate(sorted: &[i32], position: usize) -> usize;

    /// Bounds on the number of elements still to be emitted from `position`.
    fn remaining(sorted: &[i32], position: usize) -> (usize, Option<usize>) {
        let left = sorted.len().saturating_sub(position);
        (left, Some(left))
    }
}

/// Where a cursor stands in its traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorState {
    /// The cursor points at an element.
    Active {
        /// Position within the traversal.
        position: usize,
    },
    /// The cursor is the end sentinel.
    Exhausted,
}

// =============================================================================
// View
// =============================================================================

/// A read-only traversal over a borrowed container.
///
/// Prefer the aliases [`AscendingIterator`], [`SideCrossIterator`] and
/// [`PrimeIterator`] over naming this type directly.
pub struct View<'a, S> {
    container: &'a MagicalContainer,
    strategy: PhantomData<S>,
}

impl<'a, S: Traversal> View<'a, S> {
    /// Creates a view over `container`.
    #[inline]
    #[must_use]
    pub const fn new(container: &'a MagicalContainer) -> Self {
        Self {
            container,
            strategy: PhantomData,
        }
    }

    /// Returns a cursor at the first emitted element.
    ///
    /// The cursor equals [`View::end`] when the traversal emits nothing.
    #[must_use]
    pub fn begin(&self) -> Cursor<'a, S> {
        let sorted = self.container.as_sorted_slice();
        let position = S::first(sorted);
        tracing::trace!(
            traversal = S::NAME,
            position,
            size = sorted.len(),
            "cursor started"
        );
        Cursor::at(self.container, position)
    }

    /// Returns the end sentinel.
    #[must_use]
    pub fn end(&self) -> Cursor<'a, S> {
        Cursor::at(self.container, self.container.size())
    }

    /// Returns a cursor at the first emitted element, for use as an [`Iterator`].
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Cursor<'a, S> {
        self.begin()
    }

    /// Returns the number of elements this traversal emits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns `true` if `begin() == end()`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.begin() == self.end()
    }

    /// Returns the container this view borrows.
    #[inline]
    #[must_use]
    pub const fn container(&self) -> &'a MagicalContainer {
        self.container
    }
}

impl<S> Clone for View<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for View<'_, S> {}

impl<S: Traversal> fmt::Debug for View<'_, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("View")
            .field("traversal", &S::NAME)
            .field("container", self.container)
            .finish()
    }
}

impl<'a, S: Traversal> IntoIterator for View<'a, S> {
    type Item = i32;
    type IntoIter = Cursor<'a, S>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.begin()
    }
}

impl<'a, S: Traversal> IntoIterator for &View<'a, S> {
    type Item = i32;
    type IntoIter = Cursor<'a, S>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.begin()
    }
}

// =============================================================================
// Cursor
// =============================================================================

/// A position inside a [`View`].
///
/// Two cursors are equal when they borrow the same container instance and
/// stand at the same position. Cursors over different containers never
/// compare equal, even if the containers hold the same values.
pub struct Cursor<'a, S> {
    container: &'a MagicalContainer,
    position: usize,
    strategy: PhantomData<S>,
}

impl<'a, S: Traversal> Cursor<'a, S> {
    const fn at(container: &'a MagicalContainer, position: usize) -> Self {
        Self {
            container,
            position,
            strategy: PhantomData,
        }
    }

    /// Returns the value under the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::InvalidState`] if the cursor is exhausted.
    pub fn get(&self) -> Result<i32, ContainerError> {
        let sorted = self.container.as_sorted_slice();
        if self.position >= sorted.len() {
            return Err(ContainerError::exhausted(
                S::NAME,
                CursorOperation::Dereference,
            ));
        }
        sorted
            .get(S::locate(sorted, self.position))
            .copied()
            .ok_or_else(|| ContainerError::exhausted(S::NAME, CursorOperation::Dereference))
    }

    /// Moves the cursor to the next emitted element, or onto the end sentinel.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::InvalidState`] if the cursor is already exhausted.
    pub fn advance(&mut self) -> Result<(), ContainerError> {
        let sorted = self.container.as_sorted_slice();
        if self.position >= sorted.len() {
            return Err(ContainerError::exhausted(S::NAME, CursorOperation::Advance));
        }
        self.position = S::following(sorted, self.position);
        Ok(())
    }

    /// Returns the raw position within the traversal.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Returns `true` if the cursor is the end sentinel.
    #[inline]
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.position >= self.container.size()
    }

    /// Returns the cursor's state.
    #[must_use]
    pub fn state(&self) -> CursorState {
        if self.is_exhausted() {
            CursorState::Exhausted
        } else {
            CursorState::Active {
                position: self.position,
            }
        }
    }
}

impl<S> Clone for Cursor<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for Cursor<'_, S> {}

impl<S> PartialEq for Cursor<'_, S> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.container, other.container) && self.position == other.position
    }
}

impl<S> Eq for Cursor<'_, S> {}

impl<S: Traversal> fmt::Debug for Cursor<'_, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Cursor")
            .field("traversal", &S::NAME)
            .field("state", &self.state())
            .finish()
    }
}

impl<S: Traversal> Iterator for Cursor<'_, S> {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.get().ok()?;
        self.position = S::following(self.container.as_sorted_slice(), self.position);
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        S::remaining(self.container.as_sorted_slice(), self.position)
    }
}

impl<S: Traversal> FusedIterator for Cursor<'_, S> {}

// =============================================================================
// Tests
// =============================================================================
