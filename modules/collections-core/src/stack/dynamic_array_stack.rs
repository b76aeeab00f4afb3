
use alloc::vec::Vec;

use super::{StackBackend, StackError, StackListing};
use crate::{Capacity, ContainerConfig, Element, Emptiness, LinearContainer};

/// LIFO over a heap buffer whose capacity is fixed at construction.
///
/// The buffer is released when the stack is dropped or by an explicit [`DynamicArrayStack::destroy`].
/// A stack whose buffer could not be allocated, or has been released, answers every operation with
/// [`StackError::InvalidHandle`].
#[derive(Debug)]
pub struct DynamicArrayStack {
  slots: Option<Vec<Element>>,
  limit: usize,
}

impl DynamicArrayStack {
  /// Allocates a stack able to hold `capacity` elements.
  #[must_use]
  pub fn new(capacity: usize) -> Self {
    Self::from_config(&ContainerConfig::new(capacity))
  }

  /// Allocates a stack sized by `config`.
  #[must_use]
  pub fn from_config(config: &ContainerConfig) -> Self {
    let capacity = config.capacity();
    let mut slots = Vec::new();
    match slots.try_reserve_exact(capacity) {
      | Ok(()) => Self { slots: Some(slots), limit: capacity },
      | Err(error) => {
        tracing::warn!(capacity, %error, "stack storage allocation failed");
        Self { slots: None, limit: 0 }
      },
    }
  }

  /// Pushes an element onto the top of the stack.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::Full`] when the capacity is exhausted and
  /// [`StackError::InvalidHandle`] when the storage is not available.
  pub fn push(&mut self, element: Element) -> Result<(), StackError> {
    let limit = self.limit;
    let slots = self.slots.as_mut().ok_or(StackError::InvalidHandle)?;
    if Capacity::limited(limit).is_reached_by(slots.len()) {
      tracing::debug!(capacity = limit, size = slots.len(), "push rejected: stack is full");
      return Err(StackError::Full);
    }
    slots.push(element);
    Ok(())
  }

  /// Removes and returns the top element.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::Empty`] when the stack holds no elements and
  /// [`StackError::InvalidHandle`] when the storage is not available.
  pub fn pop(&mut self) -> Result<Element, StackError> {
    self.slots.as_mut().ok_or(StackError::InvalidHandle)?.pop().ok_or(StackError::Empty)
  }

  /// Returns the top element without removing it.
  ///
  /// # Errors
  ///
  /// Same as [`DynamicArrayStack::pop`].
  pub fn peek(&self) -> Result<Element, StackError> {
    self.slots.as_ref().ok_or(StackError::InvalidHandle)?.last().copied().ok_or(StackError::Empty)
  }

  /// Reports whether the stack holds elements, or [`Emptiness::InvalidHandle`] without storage.
  #[must_use]
  pub fn is_empty(&self) -> Emptiness {
    self.slots.as_ref().map_or(Emptiness::InvalidHandle, |slots| Emptiness::from_size(slots.len()))
  }

  /// Number of stored elements.
  #[must_use]
  pub fn size(&self) -> usize {
    self.slots.as_ref().map_or(0, Vec::len)
  }

  /// Capacity fixed at construction; zero once released.
  #[must_use]
  pub const fn capacity(&self) -> usize {
    self.limit
  }

  /// Returns `true` once the storage is gone.
  #[must_use]
  pub const fn is_released(&self) -> bool {
    self.slots.is_none()
  }

  /// Removes every element.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::InvalidHandle`] when the storage is not available.
  pub fn clear(&mut self) -> Result<(), StackError> {
    self.slots.as_mut().ok_or(StackError::InvalidHandle)?.clear();
    Ok(())
  }

  /// Releases the storage. Calling it again is a no-op.
  pub fn destroy(&mut self) {
    match self.slots.take() {
      | Some(slots) => {
        tracing::trace!(capacity = self.limit, size = slots.len(), "released stack storage");
        self.limit = 0;
      },
      | None => tracing::trace!("stack storage already released"),
    }
  }

  /// Lists the current elements from top to bottom.
  #[must_use]
  pub fn listing(&self) -> StackListing<'_> {
    self.slots.as_deref().map_or_else(StackListing::empty, StackListing::from_slots)
  }
}

impl LinearContainer for DynamicArrayStack {
  fn is_empty(&self) -> Emptiness {
    Self::is_empty(self)
  }

  fn size(&self) -> usize {
    Self::size(self)
  }

  fn capacity(&self) -> Capacity {
    Capacity::limited(self.limit)
  }
}

impl StackBackend for DynamicArrayStack {
  fn push(&mut self, element: Element) -> Result<(), StackError> {
    Self::push(self, element)
  }

  fn pop(&mut self) -> Result<Element, StackError> {
    Self::pop(self)
  }

  fn peek(&self) -> Result<Element, StackError> {
    Self::peek(self)
  }

  fn clear(&mut self) -> Result<(), StackError> {
    Self::clear(self)
  }

  fn listing(&self) -> StackListing<'_> {
    Self::listing(self)
  }
}
