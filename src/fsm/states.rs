//! Concrete trigger handlers and table builder.
//!
//! ```text
//!  START ──[welcomed]──▶ GREETED ──[photo]──▶ CLASSIFIED
//!                                               │
//!                          [delivery]  ◀────────┴────────▶  [visitor]
//!                               ▼                               ▼
//!                         DELIVERY_WAIT                 VISITOR_INTERVIEW
//!                               │                               │
//!               [poll ready] ───┼─── [poll not ready] ──────────┤
//!                    ▼                       ▼
//!                 ANSWERED               UNANSWERED
//!                    └──────[finished]───────┴──▶ END
//! ```

use super::{StateDescriptor, StateId, Trigger};

/// Build the static state table.  Called once per visit.
pub fn build_state_table() -> [StateDescriptor; StateId::COUNT] {
    [
        StateDescriptor {
            id: StateId::Start,
            name: "Start",
            on_trigger: start_trigger,
        },
        StateDescriptor {
            id: StateId::Greeted,
            name: "Greeted",
            on_trigger: greeted_trigger,
        },
        StateDescriptor {
            id: StateId::Classified,
            name: "Classified",
            on_trigger: classified_trigger,
        },
        StateDescriptor {
            id: StateId::DeliveryWait,
            name: "DeliveryWait",
            on_trigger: waiting_trigger,
        },
        StateDescriptor {
            id: StateId::VisitorInterview,
            name: "VisitorInterview",
            on_trigger: waiting_trigger,
        },
        StateDescriptor {
            id: StateId::Answered,
            name: "Answered",
            on_trigger: resolved_trigger,
        },
        StateDescriptor {
            id: StateId::Unanswered,
            name: "Unanswered",
            on_trigger: resolved_trigger,
        },
        StateDescriptor {
            id: StateId::End,
            name: "End",
            on_trigger: end_trigger,
        },
    ]
}

fn start_trigger(trigger: Trigger) -> Option<StateId> {
    matches!(trigger, Trigger::Welcomed).then_some(StateId::Greeted)
}

fn greeted_trigger(trigger: Trigger) -> Option<StateId> {
    matches!(trigger, Trigger::PhotoTaken).then_some(StateId::Classified)
}

fn classified_trigger(trigger: Trigger) -> Option<StateId> {
    match trigger {
        Trigger::Classified { .. } => Some(trigger.target()),
        _ => None,
    }
}

// DeliveryWait and VisitorInterview both resolve on the single manual-answer check.
fn waiting_trigger(trigger: Trigger) -> Option<StateId> {
    match trigger {
        Trigger::Polled { .. } => Some(trigger.target()),
        _ => None,
    }
}

fn resolved_trigger(trigger: Trigger) -> Option<StateId> {
    matches!(trigger, Trigger::Finished).then_some(StateId::End)
}

fn end_trigger(_trigger: Trigger) -> Option<StateId> {
    None
}
