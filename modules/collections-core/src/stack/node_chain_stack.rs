
use alloc::boxed::Box;

use super::{Node, StackBackend, StackError, StackListing};
use crate::{Capacity, Element, Emptiness, LinearContainer};

/// LIFO built from individually allocated [`Node`]s.
///
/// Every push moves a freshly allocated node into the stack and every pop moves the payload out
/// and frees the node. [`NodeChainStack::destroy`] frees the whole chain and retires the handle;
/// afterwards every operation fails with [`StackError::InvalidHandle`].
#[derive(Debug, Default)]
pub struct NodeChainStack {
  top:      Option<Box<Node>>,
  size:     usize,
  released: bool,
}

impl NodeChainStack {
  /// Creates an empty stack.
  #[must_use]
  pub const fn new() -> Self {
    Self { top: None, size: 0, released: false }
  }

  /// Links a new node holding `element` in front of the current top.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::AllocError`] when the node cannot be allocated, leaving the stack
  /// untouched, and [`StackError::InvalidHandle`] after [`NodeChainStack::destroy`].
  pub fn push(&mut self, element: Element) -> Result<(), StackError> {
    self.ensure_live()?;
    let mut node = Node::new(element)?;
    let displaced = node.set_next(self.top.take());
    debug_assert!(displaced.is_none());
    self.top = Some(node);
    self.size += 1;
    Ok(())
  }

  /// Detaches the top node and returns its payload.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::Empty`] when the chain is empty and [`StackError::InvalidHandle`] after
  /// [`NodeChainStack::destroy`].
  pub fn pop(&mut self) -> Result<Element, StackError> {
    self.ensure_live()?;
    let node = self.top.take().ok_or(StackError::Empty)?;
    let (element, next) = Node::unlink(node);
    self.top = next;
    self.size -= 1;
    Ok(element)
  }

  /// Returns the top payload without detaching it.
  ///
  /// # Errors
  ///
  /// Same as [`NodeChainStack::pop`].
  pub fn peek(&self) -> Result<Element, StackError> {
    self.ensure_live()?;
    self.top.as_deref().map(Node::data).ok_or(StackError::Empty)
  }

  /// Reports whether the chain holds nodes, or [`Emptiness::InvalidHandle`] once destroyed.
  #[must_use]
  pub const fn is_empty(&self) -> Emptiness {
    if self.released { Emptiness::InvalidHandle } else { Emptiness::from_size(self.size) }
  }

  /// Number of linked nodes.
  #[must_use]
  pub const fn size(&self) -> usize {
    self.size
  }

  /// Returns `true` once [`NodeChainStack::destroy`] has run.
  #[must_use]
  pub const fn is_released(&self) -> bool {
    self.released
  }

  /// Pops and frees every node, front to back.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::InvalidHandle`] after [`NodeChainStack::destroy`].
  pub fn clear(&mut self) -> Result<(), StackError> {
    self.ensure_live()?;
    while self.pop().is_ok() {}
    Ok(())
  }

  /// Frees every node and retires the handle. Calling it again is a no-op.
  pub fn destroy(&mut self) {
    if self.released {
      tracing::trace!("node chain stack already released");
      return;
    }
    let freed = self.size;
    while self.pop().is_ok() {}
    self.released = true;
    tracing::trace!(freed, "released node chain stack");
  }

  /// Lists the current payloads from top to bottom.
  #[must_use]
  pub fn listing(&self) -> StackListing<'_> {
    StackListing::from_chain(self.top.as_deref())
  }

  const fn ensure_live(&self) -> Result<(), StackError> {
    if self.released { Err(StackError::InvalidHandle) } else { Ok(()) }
  }
}

impl LinearContainer for NodeChainStack {
  fn is_empty(&self) -> Emptiness {
    Self::is_empty(self)
  }

  fn size(&self) -> usize {
    Self::size(self)
  }

  fn capacity(&self) -> Capacity {
    Capacity::limitless()
  }
}

impl StackBackend for NodeChainStack {
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
