use super::{StackError, StackListing};
use crate::{Element, LinearContainer};

/// Backend abstraction implemented by every stack variant.
pub trait StackBackend: LinearContainer {
  /// Pushes an element onto the top of the stack.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::Full`] when no slot is left, [`StackError::AllocError`] when storage for
  /// the element cannot be allocated and [`StackError::InvalidHandle`] for released stacks.
  fn push(&mut self, element: Element) -> Result<(), StackError>;

  /// Removes and returns the top element.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::Empty`] when there is nothing to pop and
  /// [`StackError::InvalidHandle`] for released stacks.
  fn pop(&mut self) -> Result<Element, StackError>;

  /// Returns the top element without removing it.
  ///
  /// # Errors
  ///
  /// Same as [`StackBackend::pop`].
  fn peek(&self) -> Result<Element, StackError>;

  /// Removes every element.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::InvalidHandle`] for released stacks.
  fn clear(&mut self) -> Result<(), StackError>;

  /// Lists the current elements from top to bottom.
  fn listing(&self) -> StackListing<'_>;
}
