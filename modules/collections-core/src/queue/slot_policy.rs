/// Policy describing whether a queue reuses the slots freed by dequeues.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SlotPolicy {
  /// Head and tail advance modulo the capacity, so freed slots are reused.
  #[default]
  Wrap,
  /// Head and tail only move forward. Once the tail reaches the last slot the queue reports
  /// full until it is drained or cleared, even if slots before the head are free.
  Linear,
}
