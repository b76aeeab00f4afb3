use super::{QueueError, SlotPolicy};
use crate::{Element, LinearContainer};

/// Backend abstraction implemented by every queue variant.
pub trait QueueBackend: LinearContainer {
  /// Appends an element at the back.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Full`] when no slot is available and [`QueueError::InvalidHandle`]
  /// for released queues.
  fn enqueue(&mut self, element: Element) -> Result<(), QueueError>;

  /// Removes and returns the front element.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Empty`] when there is nothing to dequeue and
  /// [`QueueError::InvalidHandle`] for released queues.
  fn dequeue(&mut self) -> Result<Element, QueueError>;

  /// Returns the front element without removing it.
  ///
  /// # Errors
  ///
  /// Same as [`QueueBackend::dequeue`].
  fn front(&self) -> Result<Element, QueueError>;

  /// Removes every element.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::InvalidHandle`] for released queues.
  fn clear(&mut self) -> Result<(), QueueError>;

  /// Slot policy the queue was built with.
  fn slot_policy(&self) -> SlotPolicy;
}
