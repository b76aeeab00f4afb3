use super::{core::stack::NodeChainStack, crate_version, std::ListingPrinter};

#[test]
fn version_matches_package_metadata() {
  assert_eq!(crate_version(), env!("CARGO_PKG_VERSION"));
}

#[test]
fn facade_reexports_both_crates() {
  let mut stack = NodeChainStack::new();
  stack.push(1).unwrap();
  stack.push(2).unwrap();

  let mut printer = ListingPrinter::new(Vec::new());
  printer.print_stack(Some(&stack)).unwrap();
  assert_eq!(printer.into_inner(), b"2 1\n");
}
