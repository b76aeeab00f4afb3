
use super::{QueueBackend, QueueError, SlotPolicy, queue_indices::QueueIndices};
use crate::{Capacity, DEFAULT_CAPACITY, Element, Emptiness, LinearContainer};

/// Fixed-capacity FIFO stored inline in `[Element; N]`.
#[derive(Clone, Debug)]
pub struct BoundedArrayQueue<const N: usize = DEFAULT_CAPACITY> {
  slots:   [Element; N],
  indices: QueueIndices,
}

impl<const N: usize> BoundedArrayQueue<N> {
  /// Creates an empty queue that reuses freed slots.
  #[must_use]
  pub const fn new() -> Self {
    Self::with_slot_policy(SlotPolicy::Wrap)
  }

  /// Creates an empty queue with an explicit slot policy.
  #[must_use]
  pub const fn with_slot_policy(policy: SlotPolicy) -> Self {
    Self { slots: [0; N], indices: QueueIndices::new(N, policy) }
  }

  /// Appends an element at the back.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Full`] when no slot is available; the queue is left unchanged.
  pub fn enqueue(&mut self, element: Element) -> Result<(), QueueError> {
    let Some(slot) = self.indices.claim_back() else {
      tracing::debug!(capacity = N, size = self.indices.len(), "enqueue rejected: queue is full");
      return Err(QueueError::Full);
    };
    self.slots[slot] = element;
    Ok(())
  }

  /// Removes and returns the front element.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Empty`] when the queue holds no elements.
  pub fn dequeue(&mut self) -> Result<Element, QueueError> {
    let slot = self.indices.release_front().ok_or(QueueError::Empty)?;
    Ok(self.slots[slot])
  }

  /// Returns the front element without removing it.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Empty`] when the queue holds no elements.
  pub fn front(&self) -> Result<Element, QueueError> {
    self.indices.front().map(|slot| self.slots[slot]).ok_or(QueueError::Empty)
  }

  /// Reports whether the queue holds elements.
  #[must_use]
  pub const fn is_empty(&self) -> Emptiness {
    if self.indices.is_empty() { Emptiness::Empty } else { Emptiness::NotEmpty }
  }

  /// Number of stored elements.
  #[must_use]
  pub const fn size(&self) -> usize {
    self.indices.len()
  }

  /// Slot policy the queue was built with.
  #[must_use]
  pub const fn slot_policy(&self) -> SlotPolicy {
    self.indices.policy()
  }

  /// Resets both indices without touching the slots.
  pub const fn clear(&mut self) {
    self.indices.reset();
  }
}

impl<const N: usize> Default for BoundedArrayQueue<N> {
  fn default() -> Self {
    Self::new()
  }
}

impl<const N: usize> LinearContainer for BoundedArrayQueue<N> {
  fn is_empty(&self) -> Emptiness {
    Self::is_empty(self)
  }

  fn size(&self) -> usize {
    Self::size(self)
  }

  fn capacity(&self) -> Capacity {
    Capacity::limited(self.indices.capacity())
  }
}

impl<const N: usize> QueueBackend for BoundedArrayQueue<N> {
  fn enqueue(&mut self, element: Element) -> Result<(), QueueError> {
    Self::enqueue(self, element)
  }

  fn dequeue(&mut self) -> Result<Element, QueueError> {
    Self::dequeue(self)
  }

  fn front(&self) -> Result<Element, QueueError> {
    Self::front(self)
  }

  fn clear(&mut self) -> Result<(), QueueError> {
    Self::clear(self);
    Ok(())
  }

  fn slot_policy(&self) -> SlotPolicy {
    Self::slot_policy(self)
  }
}
