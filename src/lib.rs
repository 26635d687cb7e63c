//! # magical-container
//!
//! An in-memory integer multiset with three read-only traversal views.
//!
//! ## Overview
//!
//! - **Container**: [`container::MagicalContainer`] stores `i32` values,
//!   duplicates included, and keeps an ascending mirror of its contents.
//! - **Traversals**: [`traversal::AscendingIterator`],
//!   [`traversal::SideCrossIterator`] and [`traversal::PrimeIterator`] borrow a
//!   container and expose `begin()`/`end()` cursors that also work as
//!   standard [`Iterator`]s.
//! - **Primality**: [`primality::is_prime`], the predicate behind the prime view.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for `MagicalContainer`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use magical_container::prelude::*;
//!
//! let mut container = MagicalContainer::new();
//! for value in [17, 2, 25, 9, 3] {
//!     container.add_element(value);
//! }
//!
//! let ascending: Vec<i32> = AscendingIterator::new(&container).into_iter().collect();
//! let side_cross: Vec<i32> = SideCrossIterator::new(&container).into_iter().collect();
//! let primes: Vec<i32> = PrimeIterator::new(&container).into_iter().collect();
//!
//! assert_eq!(ascending, vec![2, 3, 9, 17, 25]);
//! assert_eq!(side_cross, vec![2, 25, 3, 17, 9]);
//! assert_eq!(primes, vec![2, 3, 17]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use magical_container::prelude::*;
/// ```
pub mod prelude {
    pub use crate::container::MagicalContainer;
    pub use crate::error::{ContainerError, CursorOperation};
    pub use crate::primality::is_prime;
    pub use crate::traversal::{
        Ascending, AscendingIterator, Cursor, CursorState, Prime, PrimeIterator, SideCross,
        SideCrossIterator, Traversal, View,
    };
}

pub mod container;
pub mod error;
pub mod primality;
pub mod traversal;
