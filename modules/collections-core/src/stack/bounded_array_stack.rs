
use super::{StackBackend, StackError, StackListing};
use crate::{Capacity, DEFAULT_CAPACITY, Element, Emptiness, LinearContainer};

/// Fixed-capacity LIFO stored inline in `[Element; N]`.
#[derive(Clone, Debug)]
pub struct BoundedArrayStack<const N: usize = DEFAULT_CAPACITY> {
  slots: [Element; N],
  top:   Option<usize>,
}

impl<const N: usize> BoundedArrayStack<N> {
  /// Creates an empty stack.
  #[must_use]
  pub const fn new() -> Self {
    Self { slots: [0; N], top: None }
  }

  /// Pushes an element onto the top of the stack.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::Full`] when all `N` slots are in use; the stack is left unchanged.
  pub fn push(&mut self, element: Element) -> Result<(), StackError> {
    let size = self.size();
    if Capacity::limited(N).is_reached_by(size) {
      tracing::debug!(capacity = N, size, "push rejected: stack is full");
      return Err(StackError::Full);
    }
    self.slots[size] = element;
    self.top = Some(size);
    Ok(())
  }

  /// Removes and returns the top element.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::Empty`] when the stack holds no elements.
  pub fn pop(&mut self) -> Result<Element, StackError> {
    let top = self.top.ok_or(StackError::Empty)?;
    let element = self.slots[top];
    self.top = top.checked_sub(1);
    Ok(element)
  }

  /// Returns the top element without removing it.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::Empty`] when the stack holds no elements.
  pub fn peek(&self) -> Result<Element, StackError> {
    self.top.map(|top| self.slots[top]).ok_or(StackError::Empty)
  }

  /// Reports whether the stack holds elements.
  #[must_use]
  pub const fn is_empty(&self) -> Emptiness {
    if self.top.is_none() { Emptiness::Empty } else { Emptiness::NotEmpty }
  }

  /// Number of stored elements.
  #[must_use]
  pub fn size(&self) -> usize {
    self.top.map_or(0, |top| top + 1)
  }

  /// Forgets every element without touching the slots.
  pub const fn clear(&mut self) {
    self.top = None;
  }

  /// Lists the current elements from top to bottom.
  #[must_use]
  pub fn listing(&self) -> StackListing<'_> {
    StackListing::from_slots(&self.slots[..self.size()])
  }
}

impl<const N: usize> Default for BoundedArrayStack<N> {
  fn default() -> Self {
    Self::new()
  }
}

impl<const N: usize> LinearContainer for BoundedArrayStack<N> {
  fn is_empty(&self) -> Emptiness {
    Self::is_empty(self)
  }

  fn size(&self) -> usize {
    Self::size(self)
  }

  fn capacity(&self) -> Capacity {
    Capacity::limited(N)
  }
}

impl<const N: usize> StackBackend for BoundedArrayStack<N> {
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
    Self::clear(self);
    Ok(())
  }

  fn listing(&self) -> StackListing<'_> {
    Self::listing(self)
  }
}
