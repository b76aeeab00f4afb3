#[cfg(test)]
mod tests;

use crate::LinearContainer;

/// Result of probing a container for elements.
///
/// `InvalidHandle` is distinct from both answers: it is reported for an absent container and for
/// containers whose storage has been released or could not be allocated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Emptiness {
  /// The container holds no elements.
  Empty,
  /// The container holds at least one element.
  NotEmpty,
  /// The container cannot be inspected.
  InvalidHandle,
}

impl Emptiness {
  /// Probes an optional container handle.
  #[must_use]
  pub fn probe<C>(container: Option<&C>) -> Self
  where
    C: LinearContainer + ?Sized, {
    match container {
      | Some(container) => container.is_empty(),
      | None => Self::InvalidHandle,
    }
  }

  /// Maps an element count onto the two valid states.
  #[must_use]
  pub const fn from_size(size: usize) -> Self {
    if size == 0 { Self::Empty } else { Self::NotEmpty }
  }
}
