extern crate std;

use alloc::{format, string::String, vec::Vec};
use core::{
  alloc::{GlobalAlloc, Layout},
  cell::Cell,
  fmt, ptr,
};
use std::{
  alloc::System,
  sync::{Arc, Mutex},
};

use tracing::{
  Event, Level, Metadata, Subscriber,
  field::{Field, Visit},
  span::{Attributes, Id, Record},
};

/// Event captured by [`RecordingSubscriber`].
#[derive(Clone, Debug)]
pub(crate) struct RecordedEvent {
  pub(crate) level:   Level,
  pub(crate) message: String,
  pub(crate) fields:  Vec<(String, String)>,
}

impl RecordedEvent {
  pub(crate) fn field(&self, name: &str) -> Option<&str> {
    self.fields.iter().find(|(key, _)| key == name).map(|(_, value)| value.as_str())
  }
}

/// Subscriber that keeps every event it sees.
#[derive(Clone, Default)]
pub(crate) struct RecordingSubscriber {
  events: Arc<Mutex<Vec<RecordedEvent>>>,
}

impl RecordingSubscriber {
  pub(crate) fn events(&self) -> Vec<RecordedEvent> {
    self.events.lock().unwrap().clone()
  }
}

impl Subscriber for RecordingSubscriber {
  fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
    true
  }

  fn new_span(&self, _span: &Attributes<'_>) -> Id {
    Id::from_u64(1)
  }

  fn record(&self, _span: &Id, _values: &Record<'_>) {}

  fn record_follows_from(&self, _span: &Id, _follows: &Id) {}

  fn event(&self, event: &Event<'_>) {
    let mut visitor = FieldCollector::default();
    event.record(&mut visitor);
    self.events.lock().unwrap().push(RecordedEvent {
      level:   *event.metadata().level(),
      message: visitor.message,
      fields:  visitor.fields,
    });
  }

  fn enter(&self, _span: &Id) {}

  fn exit(&self, _span: &Id) {}
}

#[derive(Default)]
struct FieldCollector {
  message: String,
  fields:  Vec<(String, String)>,
}

impl Visit for FieldCollector {
  fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
    if field.name() == "message" {
      self.message = format!("{value:?}");
    } else {
      self.fields.push((String::from(field.name()), format!("{value:?}")));
    }
  }
}

std::thread_local! {
  static REFUSALS_LEFT: Cell<usize> = const { Cell::new(0) };
}

/// System allocator that can be told to refuse the next allocations of the current thread.
struct RefusingAllocator;

#[global_allocator]
static ALLOCATOR: RefusingAllocator = RefusingAllocator;

// SAFETY: every request is either refused with a null pointer or forwarded unchanged to `System`.
unsafe impl GlobalAlloc for RefusingAllocator {
  unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
    if take_refusal() {
      return ptr::null_mut();
    }
    // SAFETY: the caller upholds the `GlobalAlloc::alloc` contract.
    unsafe { System.alloc(layout) }
  }

  unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
    // SAFETY: `ptr` was handed out by `System` with this layout.
    unsafe { System.dealloc(ptr, layout) }
  }
}

fn take_refusal() -> bool {
  REFUSALS_LEFT
    .try_with(|left| match left.get() {
      | 0 => false,
      | count => {
        left.set(count - 1);
        true
      },
    })
    .unwrap_or(false)
}

/// Makes the next `count` allocations on this thread fail.
pub(crate) fn refuse_next_allocations(count: usize) {
  REFUSALS_LEFT.with(|left| left.set(count));
}
