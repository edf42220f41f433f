//! Door event queue.
//!
//! Events are produced by detector adapters (pin polling threads, test
//! scripts) through a [`Subscriber`] handle and consumed by the
//! controller's run loop, which processes them one at a time.
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ PinDetector  │────▶│              │     │              │
//! │ thread       │     │  EventQueue  │────▶│   run loop   │
//! │ Operator     │────▶│  (lock-free) │     │  (consumer)  │
//! └──────────────┘     └──────────────┘     └──────────────┘
//! ```

use std::sync::Arc;

use heapless::mpmc::Q32;
use log::warn;

use crate::app::ports::Channel;

/// Pending events beyond this are dropped.
pub const EVENT_QUEUE_CAP: usize = 32;

/// Something the run loop has to react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoorEvent {
    /// A doorbell or motion sensor fired on `Channel`.
    Sensor(Channel),
    /// Stop the run loop after the current event.
    Shutdown,
}

/// Bounded multi-producer queue shared between detectors and the run loop.
pub struct EventQueue {
    inner: Arc<Q32<DoorEvent>>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Q32::new()),
        }
    }

    /// A producer handle for a detector.
    pub fn subscriber(&self) -> Subscriber {
        Subscriber {
            inner: Arc::clone(&self.inner),
        }
    }

    /// Pop the next event, FIFO.  `None` when empty.
    pub fn pop(&self) -> Option<DoorEvent> {
        self.inner.dequeue()
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}

/// Producer side of the [`EventQueue`], handed to `Detector::subscribe`.
///
/// Cheap to clone and `Send`, so a detector may move it onto its own thread.
#[derive(Clone)]
pub struct Subscriber {
    inner: Arc<Q32<DoorEvent>>,
}

impl Subscriber {
    /// Report a sensor firing on `channel`.
    /// Returns `false` if the queue is full and the event was dropped.
    pub fn notify(&self, channel: Channel) -> bool {
        self.push(DoorEvent::Sensor(channel))
    }

    /// Ask the run loop to stop.
    pub fn shutdown(&self) -> bool {
        self.push(DoorEvent::Shutdown)
    }

    fn push(&self, event: DoorEvent) -> bool {
        match self.inner.enqueue(event) {
            Ok(()) => true,
            Err(dropped) => {
                warn!("event queue full, dropping {:?}", dropped);
                false
            }
        }
    }
}

impl core::fmt::Debug for Subscriber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Subscriber").finish_non_exhaustive()
    }
}
