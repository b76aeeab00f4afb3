#[cfg(test)]
mod tests;

/// Upper bound on the number of elements a container accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capacity {
  /// No bound other than available memory.
  Limitless,
  /// At most this many elements.
  Limited(usize),
}

impl Capacity {
  /// Capacity of a container that grows one allocation at a time.
  #[must_use]
  pub const fn limitless() -> Self {
    Self::Limitless
  }

  /// Capacity of a container that holds at most `bound` elements.
  #[must_use]
  pub const fn limited(bound: usize) -> Self {
    Self::Limited(bound)
  }

  /// Returns `true` when a container already holding `size` elements must refuse another one.
  #[must_use]
  pub const fn is_reached_by(self, size: usize) -> bool {
    match self {
      | Self::Limitless => false,
      | Self::Limited(bound) => size >= bound,
    }
  }
}
