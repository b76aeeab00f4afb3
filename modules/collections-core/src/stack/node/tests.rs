use alloc::{format, string::ToString};
use core::alloc::Layout;

use super::Node;
use crate::{
  stack::NodeError,
  test_support::{RecordingSubscriber, refuse_next_allocations},
};

#[test]
fn new_node_has_payload_and_no_successor() {
  let node = Node::new(42).unwrap();
  assert_eq!(node.data(), 42);
  assert!(!node.has_next());
  assert!(node.next().is_none());
}

#[test]
fn delete_returns_payload_of_unlinked_node() {
  let node = Node::new(7).unwrap();
  assert_eq!(Node::delete(node).unwrap(), 7);
}

#[test]
fn delete_rejects_node_with_successor() {
  let mut head = Node::new(1).unwrap();
  assert!(head.set_next(Some(Node::new(2).unwrap())).is_none());

  let mut rejected = Node::delete(head).unwrap_err();
  assert_eq!(rejected.data(), 1);
  assert_eq!(rejected.next().map(Node::data), Some(2));

  let successor = rejected.take_next().unwrap();
  assert_eq!(Node::delete(rejected).unwrap(), 1);
  assert_eq!(Node::delete(successor).unwrap(), 2);
}

#[test]
fn set_next_returns_displaced_successor() {
  let mut head = Node::new(1).unwrap();
  assert!(head.set_next(Some(Node::new(2).unwrap())).is_none());

  let displaced = head.set_next(Some(Node::new(3).unwrap())).unwrap();
  assert_eq!(displaced.data(), 2);
  assert_eq!(head.next().map(Node::data), Some(3));
}

#[test]
fn display_reports_payload_and_link_state() {
  let mut head = Node::new(5).unwrap();
  assert_eq!(head.to_string(), "data: 5, next: none");

  assert!(head.set_next(Some(Node::new(6).unwrap())).is_none());
  assert_eq!(format!("{head}"), "data: 5, next: linked");
}

#[test]
fn dropping_a_long_chain_does_not_overflow_the_stack() {
  let mut head = Node::new(0).unwrap();
  for value in 1..200_000 {
    let mut node = Node::new(value).unwrap();
    assert!(node.set_next(Some(head)).is_none());
    head = node;
  }
  drop(head);
}

#[test]
fn refused_allocation_reports_alloc_error() {
  let collector = RecordingSubscriber::default();
  let result = tracing::subscriber::with_default(collector.clone(), || {
    refuse_next_allocations(1);
    Node::new(3)
  });

  assert_eq!(result.unwrap_err(), NodeError::AllocError);
  let events = collector.events();
  assert_eq!(events.len(), 1);
  assert_eq!(events[0].level, tracing::Level::WARN);
  assert_eq!(events[0].message, "node allocation failed");
  let bytes = Layout::new::<Node>().size().to_string();
  assert_eq!(events[0].field("bytes"), Some(bytes.as_str()));

  assert_eq!(Node::new(4).unwrap().data(), 4);
}

#[test]
fn unlink_hands_back_payload_and_successor() {
  let mut head = Node::new(1).unwrap();
  assert!(head.set_next(Some(Node::new(2).unwrap())).is_none());

  let (data, next) = Node::unlink(head);
  assert_eq!(data, 1);
  let successor = next.unwrap();
  assert_eq!(successor.data(), 2);

  let (data, next) = Node::unlink(successor);
  assert_eq!(data, 2);
  assert!(next.is_none());
}
