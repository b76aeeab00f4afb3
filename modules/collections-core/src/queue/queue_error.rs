use core::fmt;

/// Errors that occur during queue operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueueError {
  /// The queue has no elements to consume.
  Empty,
  /// The queue has no free slot for another element.
  Full,
  /// The queue storage has been released or was never allocated.
  InvalidHandle,
}

impl fmt::Display for QueueError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | QueueError::Empty => write!(f, "queue is empty"),
      | QueueError::Full => write!(f, "queue is full"),
      | QueueError::InvalidHandle => write!(f, "queue handle is invalid"),
    }
  }
}

impl core::error::Error for QueueError {}
