use crate::{Capacity, Emptiness};

/// Inspection shared by every stack and queue variant.
pub trait LinearContainer {
  /// Reports whether the container holds elements, or that it cannot be inspected.
  fn is_empty(&self) -> Emptiness;

  /// Number of elements currently stored. Released handles report zero.
  fn size(&self) -> usize;

  /// Capacity limit of the container.
  fn capacity(&self) -> Capacity;
}
