#[cfg(test)]
mod tests;

use crate::queue::SlotPolicy;

/// Capacity used when a configuration does not name one.
pub const DEFAULT_CAPACITY: usize = 100;

/// Construction parameters for the heap-backed containers.
///
/// Bounded variants take their capacity from a const generic instead; only the slot policy
/// applies to them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContainerConfig {
  capacity:    usize,
  slot_policy: SlotPolicy,
}

impl ContainerConfig {
  /// Creates a configuration with the given capacity and the default slot policy.
  #[must_use]
  pub const fn new(capacity: usize) -> Self {
    Self { capacity, slot_policy: SlotPolicy::Wrap }
  }

  /// Returns a copy with the queue slot policy replaced.
  #[must_use]
  pub const fn with_slot_policy(mut self, slot_policy: SlotPolicy) -> Self {
    self.slot_policy = slot_policy;
    self
  }

  /// Returns the configured capacity.
  #[must_use]
  pub const fn capacity(&self) -> usize {
    self.capacity
  }

  /// Returns the configured queue slot policy. Stacks ignore it.
  #[must_use]
  pub const fn slot_policy(&self) -> SlotPolicy {
    self.slot_policy
  }
}

impl Default for ContainerConfig {
  fn default() -> Self {
    Self::new(DEFAULT_CAPACITY)
  }
}
