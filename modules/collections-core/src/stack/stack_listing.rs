
use core::{fmt, iter::Rev, slice::Iter};

use super::Node;
use crate::Element;

/// Lazy top-to-bottom walk over the elements of a stack.
///
/// Formatting a listing with `{}` renders the elements separated by single spaces.
#[derive(Clone, Debug)]
pub struct StackListing<'a> {
  cursor: ListingCursor<'a>,
}

#[derive(Clone, Debug)]
enum ListingCursor<'a> {
  Slots(Rev<Iter<'a, Element>>),
  Chain(Option<&'a Node>),
}

impl<'a> StackListing<'a> {
  /// Lists contiguous slots whose last entry is the top of the stack.
  #[must_use]
  pub fn from_slots(slots: &'a [Element]) -> Self {
    Self { cursor: ListingCursor::Slots(slots.iter().rev()) }
  }

  /// Lists a node chain starting at `top`.
  #[must_use]
  pub const fn from_chain(top: Option<&'a Node>) -> Self {
    Self { cursor: ListingCursor::Chain(top) }
  }

  /// Listing without elements.
  #[must_use]
  pub fn empty() -> Self {
    Self::from_slots(&[])
  }
}

impl Iterator for StackListing<'_> {
  type Item = Element;

  fn next(&mut self) -> Option<Self::Item> {
    match &mut self.cursor {
      | ListingCursor::Slots(slots) => slots.next().copied(),
      | ListingCursor::Chain(cursor) => {
        let current = (*cursor)?;
        *cursor = current.next();
        Some(current.data())
      },
    }
  }
}

impl fmt::Display for StackListing<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (index, element) in self.clone().enumerate() {
      if index > 0 {
        f.write_str(" ")?;
      }
      write!(f, "{element}")?;
    }
    Ok(())
  }
}
