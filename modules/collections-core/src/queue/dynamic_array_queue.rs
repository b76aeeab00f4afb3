
use alloc::vec::Vec;

use super::{QueueBackend, QueueError, SlotPolicy, queue_indices::QueueIndices};
use crate::{Capacity, ContainerConfig, Element, Emptiness, LinearContainer};

/// FIFO over a heap buffer whose capacity is fixed at construction.
///
/// Slots are written lazily: the buffer length only grows as the tail first reaches a slot, so a
/// large reservation is never touched up front.
///
/// If the buffer cannot be allocated the queue starts out released: capacity zero, no elements,
/// and every operation answers [`QueueError::InvalidHandle`]. [`DynamicArrayQueue::destroy`] puts
/// a live queue into the same state.
#[derive(Debug)]
pub struct DynamicArrayQueue {
  slots:   Option<Vec<Element>>,
  indices: QueueIndices,
}

impl DynamicArrayQueue {
  /// Allocates a queue able to hold `capacity` elements, reusing freed slots.
  #[must_use]
  pub fn new(capacity: usize) -> Self {
    Self::from_config(&ContainerConfig::new(capacity))
  }

  /// Allocates a queue sized and configured by `config`.
  #[must_use]
  pub fn from_config(config: &ContainerConfig) -> Self {
    let capacity = config.capacity();
    let policy = config.slot_policy();
    let mut slots = Vec::new();
    if let Err(error) = slots.try_reserve_exact(capacity) {
      tracing::warn!(capacity, %error, "queue storage allocation failed");
      return Self { slots: None, indices: QueueIndices::new(0, policy) };
    }
    Self { slots: Some(slots), indices: QueueIndices::new(capacity, policy) }
  }

  /// Appends an element at the back.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Full`] when no slot is available and [`QueueError::InvalidHandle`]
  /// when the storage is not available.
  pub fn enqueue(&mut self, element: Element) -> Result<(), QueueError> {
    let slots = self.slots.as_mut().ok_or(QueueError::InvalidHandle)?;
    let Some(slot) = self.indices.claim_back() else {
      tracing::debug!(
        capacity = self.indices.capacity(),
        size = self.indices.len(),
        "enqueue rejected: queue is full"
      );
      return Err(QueueError::Full);
    };
    // claimed slots never skip past the written prefix
    match slots.get_mut(slot) {
      | Some(written) => *written = element,
      | None => slots.push(element),
    }
    Ok(())
  }

  /// Removes and returns the front element.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Empty`] when the queue holds no elements and
  /// [`QueueError::InvalidHandle`] when the storage is not available.
  pub fn dequeue(&mut self) -> Result<Element, QueueError> {
    let slots = self.slots.as_ref().ok_or(QueueError::InvalidHandle)?;
    let slot = self.indices.release_front().ok_or(QueueError::Empty)?;
    Ok(slots[slot])
  }

  /// Returns the front element without removing it.
  ///
  /// # Errors
  ///
  /// Same as [`DynamicArrayQueue::dequeue`].
  pub fn front(&self) -> Result<Element, QueueError> {
    let slots = self.slots.as_ref().ok_or(QueueError::InvalidHandle)?;
    self.indices.front().map(|slot| slots[slot]).ok_or(QueueError::Empty)
  }

  /// Reports whether the queue holds elements, or [`Emptiness::InvalidHandle`] without storage.
  #[must_use]
  pub const fn is_empty(&self) -> Emptiness {
    match (&self.slots, self.indices.is_empty()) {
      | (None, _) => Emptiness::InvalidHandle,
      | (Some(_), true) => Emptiness::Empty,
      | (Some(_), false) => Emptiness::NotEmpty,
    }
  }

  /// Number of stored elements.
  #[must_use]
  pub const fn size(&self) -> usize {
    self.indices.len()
  }

  /// Capacity recorded at construction; zero once released or if allocation failed.
  #[must_use]
  pub const fn capacity(&self) -> usize {
    self.indices.capacity()
  }

  /// Slot policy the queue was built with.
  #[must_use]
  pub const fn slot_policy(&self) -> SlotPolicy {
    self.indices.policy()
  }

  /// Returns `true` once the storage is gone.
  #[must_use]
  pub const fn is_released(&self) -> bool {
    self.slots.is_none()
  }

  /// Resets both indices without touching the slots.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::InvalidHandle`] when the storage is not available.
  pub const fn clear(&mut self) -> Result<(), QueueError> {
    if self.slots.is_none() {
      return Err(QueueError::InvalidHandle);
    }
    self.indices.reset();
    Ok(())
  }

  /// Releases the storage. Calling it again is a no-op.
  pub fn destroy(&mut self) {
    match self.slots.take() {
      | Some(_) => {
        tracing::trace!(capacity = self.indices.capacity(), size = self.indices.len(), "released queue storage");
        self.indices = QueueIndices::new(0, self.indices.policy());
      },
      | None => tracing::trace!("queue storage already released"),
    }
  }
}

impl LinearContainer for DynamicArrayQueue {
  fn is_empty(&self) -> Emptiness {
    Self::is_empty(self)
  }

  fn size(&self) -> usize {
    Self::size(self)
  }

  fn capacity(&self) -> Capacity {
    Capacity::limited(Self::capacity(self))
  }
}

impl QueueBackend for DynamicArrayQueue {
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
    Self::clear(self)
  }

  fn slot_policy(&self) -> SlotPolicy {
    Self::slot_policy(self)
  }
}
