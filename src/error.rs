//! Error types for container traversal.
//!
//! Mutating a [`MagicalContainer`](crate::container::MagicalContainer) never
//! fails: every `i32` is accepted and removing an absent value is a no-op.
//! The only failure left is using a cursor that has already reached the end
//! sentinel of its view.

use std::fmt;

/// The cursor operation that was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorOperation {
    /// Reading the value under the cursor.
    Dereference,
    /// Moving the cursor to the next position.
    Advance,
}

impl fmt::Display for CursorOperation {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dereference => formatter.write_str("dereference"),
            Self::Advance => formatter.write_str("advance"),
        }
    }
}

/// Represents errors raised by traversal cursors.
///
/// # Examples
///
/// ```rust
/// use magical_container::error::{ContainerError, CursorOperation};
///
/// let error = ContainerError::InvalidState {
///     traversal: "ascending",
///     operation: CursorOperation::Dereference,
/// };
/// assert_eq!(
///     error.to_string(),
///     "ascending cursor cannot dereference: the traversal is exhausted"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContainerError {
    /// The cursor sits on the end sentinel.
    #[error("{traversal} cursor cannot {operation}: the traversal is exhausted")]
    InvalidState {
        /// Name of the traversal strategy the cursor belongs to.
        traversal: &'static str,
        /// The operation that was attempted.
        operation: CursorOperation,
    },
}

impl ContainerError {
    pub(crate) const fn exhausted(traversal: &'static str, operation: CursorOperation) -> Self {
        Self::InvalidState {
            traversal,
            operation,
        }
    }
}
