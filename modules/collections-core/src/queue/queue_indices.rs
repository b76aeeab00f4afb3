
use super::SlotPolicy;

/// Head and tail bookkeeping shared by the array-backed queues.
///
/// `head` is `None` exactly when the queue is empty. Otherwise `head` is the slot of the front
/// element and `tail` the slot of the back element, both below `capacity`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QueueIndices {
  head:     Option<usize>,
  tail:     usize,
  capacity: usize,
  policy:   SlotPolicy,
}

impl QueueIndices {
  /// Creates empty indices over `capacity` slots.
  #[must_use]
  pub const fn new(capacity: usize, policy: SlotPolicy) -> Self {
    Self { head: None, tail: 0, capacity, policy }
  }

  /// Slot holding the front element.
  #[must_use]
  pub const fn front(&self) -> Option<usize> {
    self.head
  }

  /// Number of occupied slots.
  #[must_use]
  pub const fn len(&self) -> usize {
    match self.head {
      | None => 0,
      | Some(head) => match self.policy {
        | SlotPolicy::Linear => self.tail - head + 1,
        | SlotPolicy::Wrap => (self.tail + self.capacity - head) % self.capacity + 1,
      },
    }
  }

  /// Returns `true` when no element is stored.
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    self.head.is_none()
  }

  /// Number of slots managed.
  #[must_use]
  pub const fn capacity(&self) -> usize {
    self.capacity
  }

  /// Slot policy in effect.
  #[must_use]
  pub const fn policy(&self) -> SlotPolicy {
    self.policy
  }

  /// Claims the slot for a new back element, or `None` when no slot is available.
  pub const fn claim_back(&mut self) -> Option<usize> {
    let Some(head) = self.head else {
      if self.capacity == 0 {
        return None;
      }
      self.head = Some(0);
      self.tail = 0;
      return Some(0);
    };
    let next = match self.policy {
      | SlotPolicy::Linear => {
        if self.tail + 1 >= self.capacity {
          return None;
        }
        self.tail + 1
      },
      | SlotPolicy::Wrap => {
        let next = (self.tail + 1) % self.capacity;
        if next == head {
          return None;
        }
        next
      },
    };
    self.tail = next;
    Some(next)
  }

  /// Releases the front slot and returns it, or `None` when empty.
  pub const fn release_front(&mut self) -> Option<usize> {
    let Some(head) = self.head else {
      return None;
    };
    if head == self.tail {
      self.reset();
    } else {
      self.head = Some(match self.policy {
        | SlotPolicy::Linear => head + 1,
        | SlotPolicy::Wrap => (head + 1) % self.capacity,
      });
    }
    Some(head)
  }

  /// Marks every slot free without touching the stored values.
  pub const fn reset(&mut self) {
    self.head = None;
    self.tail = 0;
  }
}
