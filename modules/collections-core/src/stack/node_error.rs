use core::fmt;

/// Errors produced while creating chain nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeError {
  /// The global allocator could not provide memory for the node.
  AllocError,
}

impl fmt::Display for NodeError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | NodeError::AllocError => write!(f, "node allocation failed"),
    }
  }
}

impl core::error::Error for NodeError {}
