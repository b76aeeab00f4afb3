
use core::fmt;

use super::NodeError;

/// Errors that may arise while operating on a stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StackError {
  /// The stack contains no elements.
  Empty,
  /// The stack cannot accept new elements.
  Full,
  /// The stack storage has been released or was never allocated.
  InvalidHandle,
  /// Allocator failure while creating storage for a new element.
  AllocError,
}

impl fmt::Display for StackError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | StackError::Empty => write!(f, "stack is empty"),
      | StackError::Full => write!(f, "stack is full"),
      | StackError::InvalidHandle => write!(f, "stack handle is invalid"),
      | StackError::AllocError => write!(f, "stack allocation failed"),
    }
  }
}

impl core::error::Error for StackError {}

impl From<NodeError> for StackError {
  fn from(err: NodeError) -> Self {
    match err {
      | NodeError::AllocError => StackError::AllocError,
    }
  }
}
