
use std::io::{self, Stdout, Write};

use linea_collections_core_rs::{
  Emptiness,
  stack::{Node, StackBackend},
};

const EMPTY_OR_INVALID_STACK: &str = "stack is empty or invalid";
const INVALID_NODE: &str = "invalid node";

/// Writes human-readable listings of stacks and chain nodes to an output stream.
pub struct ListingPrinter<W> {
  writer: W,
}

impl ListingPrinter<Stdout> {
  /// Printer targeting standard output.
  #[must_use]
  pub fn stdout() -> Self {
    Self::new(io::stdout())
  }
}

impl<W: Write> ListingPrinter<W> {
  /// Wraps `writer`.
  #[must_use]
  pub const fn new(writer: W) -> Self {
    Self { writer }
  }

  /// Writes the stack elements from top to bottom on one line, or a placeholder line when the
  /// stack is absent, released or empty.
  ///
  /// # Errors
  ///
  /// Propagates failures of the underlying writer.
  pub fn print_stack<S>(&mut self, stack: Option<&S>) -> io::Result<()>
  where
    S: StackBackend + ?Sized, {
    let Some(stack) = stack.filter(|stack| stack.is_empty() == Emptiness::NotEmpty) else {
      tracing::trace!("printing placeholder for empty or invalid stack");
      return writeln!(self.writer, "{EMPTY_OR_INVALID_STACK}");
    };
    writeln!(self.writer, "{}", stack.listing())
  }

  /// Writes the payload and link state of a single node.
  ///
  /// # Errors
  ///
  /// Propagates failures of the underlying writer.
  pub fn print_node(&mut self, node: Option<&Node>) -> io::Result<()> {
    match node {
      | Some(node) => writeln!(self.writer, "{node}"),
      | None => writeln!(self.writer, "{INVALID_NODE}"),
    }
  }

  /// Flushes the underlying writer.
  ///
  /// # Errors
  ///
  /// Propagates failures of the underlying writer.
  pub fn flush(&mut self) -> io::Result<()> {
    self.writer.flush()
  }

  /// Returns the underlying writer.
  #[must_use]
  pub fn into_inner(self) -> W {
    self.writer
  }
}
