#[cfg(test)]
mod tests;

use alloc::boxed::Box;
use core::{alloc::Layout, fmt};

use super::NodeError;
use crate::Element;

/// Heap-allocated link of a singly-linked chain.
///
/// A node owns its payload and, optionally, its successor. Chains are only ever unlinked from
/// the front: [`Node::delete`] refuses nodes that still own a successor.
#[derive(Debug)]
pub struct Node {
  data: Element,
  next: Option<Box<Node>>,
}

impl Node {
  /// Allocates a node holding `data` and no successor.
  ///
  /// # Errors
  ///
  /// Returns [`NodeError::AllocError`] when the global allocator cannot provide the memory.
  pub fn new(data: Element) -> Result<Box<Self>, NodeError> {
    let layout = Layout::new::<Self>();
    // SAFETY: `Node` is not zero-sized, so `layout` has a non-zero size.
    let raw = unsafe { alloc::alloc::alloc(layout) }.cast::<Self>();
    if raw.is_null() {
      tracing::warn!(bytes = layout.size(), "node allocation failed");
      return Err(NodeError::AllocError);
    }
    // SAFETY: `raw` is non-null and was allocated by the global allocator with the layout of
    // `Node`, which is exactly what `Box::from_raw` expects once the value is written.
    unsafe {
      raw.write(Self { data, next: None });
      Ok(Box::from_raw(raw))
    }
  }

  /// Releases a node that has no successor and returns its payload.
  ///
  /// # Errors
  ///
  /// A node that still links to a successor is handed back untouched.
  pub fn delete(node: Box<Self>) -> Result<Element, Box<Self>> {
    if node.has_next() {
      tracing::debug!(data = node.data, "refusing to delete a node that still has a successor");
      return Err(node);
    }
    Ok(node.data)
  }

  /// Returns the payload.
  #[must_use]
  pub const fn data(&self) -> Element {
    self.data
  }

  /// Returns the successor, if any.
  #[must_use]
  pub fn next(&self) -> Option<&Node> {
    self.next.as_deref()
  }

  /// Returns `true` when the node links to a successor.
  #[must_use]
  pub const fn has_next(&self) -> bool {
    self.next.is_some()
  }

  /// Replaces the successor and returns the previous one.
  #[must_use]
  pub fn set_next(&mut self, next: Option<Box<Node>>) -> Option<Box<Node>> {
    core::mem::replace(&mut self.next, next)
  }

  /// Detaches and returns the successor.
  pub fn take_next(&mut self) -> Option<Box<Node>> {
    self.next.take()
  }

  /// Frees the node and returns its payload together with the detached successor.
  #[must_use]
  pub fn unlink(mut node: Box<Self>) -> (Element, Option<Box<Node>>) {
    let next = node.next.take();
    (node.data, next)
  }
}

impl Drop for Node {
  fn drop(&mut self) {
    // unlink iteratively so long chains do not recurse
    let mut next = self.next.take();
    while let Some(mut node) = next {
      next = node.next.take();
    }
  }
}

impl fmt::Display for Node {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let next = if self.has_next() { "linked" } else { "none" };
    write!(f, "data: {}, next: {next}", self.data)
  }
}
