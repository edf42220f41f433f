//! HomeGreeter doorbell controller library.
//!
//! On each doorbell/motion event the controller greets the caller, takes a
//! photo, decides whether it is a delivery, talks the caller through the
//! matching script and, if nobody comes to the door, posts the visitor's
//! message and photo for the occupier.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Adapters (outer ring)                    │
//! │  PinDetector  ConsoleGreeter  SnapshotCamera  FixedImager   │
//! │  ApiTweeter   FdAnswerSignal  JsonConfigFile                │
//! │  ─────────────── Port Trait Boundary ───────────────        │
//! │  ┌──────────────────────────────────────────────────────┐   │
//! │  │        DoorbellController (pure logic)               │   │
//! │  │  event queue · visit FSM · stats                     │   │
//! │  └──────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────┘
//! ```

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod fsm;
pub mod script;

pub use app::outcome::{VisitOutcome, VisitStats};
pub use app::service::{Collaborators, DoorbellController};
pub use config::SystemConfig;
pub use error::{Error, Result};
