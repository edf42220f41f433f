//! Function-pointer state machine for a single visit.
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │  StateTable                                   │
//! │  ┌──────────────────┬────────────────────────┐│
//! │  │ StateId          │ on_trigger             ││
//! │  ├──────────────────┼────────────────────────┤│
//! │  │ Start            │ fn(Trigger)->Option<>  ││
//! │  │ Greeted          │ fn(Trigger)->Option<>  ││
//! │  │ Classified       │ fn(Trigger)->Option<>  ││
//! │  │ DeliveryWait     │ fn(Trigger)->Option<>  ││
//! │  │ VisitorInterview │ fn(Trigger)->Option<>  ││
//! │  │ Answered         │ fn(Trigger)->Option<>  ││
//! │  │ Unanswered       │ fn(Trigger)->Option<>  ││
//! │  │ End              │ fn(Trigger)->Option<>  ││
//! │  └──────────────────┴────────────────────────┘│
//! └───────────────────────────────────────────────┘
//! ```
//!
//! The controller fires one [`Trigger`] per completed step.  The current
//! state's handler either accepts it and names the next state, or returns
//! `None`, which the engine reports as [`Error::InvalidTransition`].  A
//! fresh [`Fsm`] is built for every visit, so nothing leaks between events.

pub mod states;

use log::info;

use crate::error::{Error, Result};

/// Longest possible path: Start, Greeted, Classified, branch, answer, End.
pub const MAX_PATH: usize = 8;

// ---------------------------------------------------------------------------
// State identity
// ---------------------------------------------------------------------------

/// Every state a visit can be in.
/// Must stay in sync with the table built in [`states::build_state_table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum StateId {
    Start = 0,
    Greeted = 1,
    Classified = 2,
    DeliveryWait = 3,
    VisitorInterview = 4,
    Answered = 5,
    Unanswered = 6,
    End = 7,
}

impl StateId {
    /// Total number of states, used to size the table array.
    pub const COUNT: usize = 8;

    /// Convert a table index back to `StateId`.
    pub fn from_index(idx: usize) -> Self {
        match idx {
            0 => Self::Start,
            1 => Self::Greeted,
            2 => Self::Classified,
            3 => Self::DeliveryWait,
            4 => Self::VisitorInterview,
            5 => Self::Answered,
            6 => Self::Unanswered,
            7 => Self::End,
            _ => {
                debug_assert!(false, "invalid state index: {idx}");
                Self::End
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Triggers
// ---------------------------------------------------------------------------

/// A completed step of the visit script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// The greeter said its welcome.
    Welcomed,
    /// The initial photo was taken.
    PhotoTaken,
    /// The imager classified the initial photo.
    Classified { delivery: bool },
    /// The manual-answer signal was checked.
    Polled { answered: bool },
    /// The branch's remaining script ran to completion.
    Finished,
}

impl Trigger {
    /// The state this trigger leads to when accepted.
    pub fn target(self) -> StateId {
        match self {
            Self::Welcomed => StateId::Greeted,
            Self::PhotoTaken => StateId::Classified,
            Self::Classified { delivery: true } => StateId::DeliveryWait,
            Self::Classified { delivery: false } => StateId::VisitorInterview,
            Self::Polled { answered: true } => StateId::Answered,
            Self::Polled { answered: false } => StateId::Unanswered,
            Self::Finished => StateId::End,
        }
    }
}

// ---------------------------------------------------------------------------
// State descriptor (one row in the table)
// ---------------------------------------------------------------------------

/// Per-state trigger handler.  Returns `Some(next)` to accept.
pub type TriggerFn = fn(Trigger) -> Option<StateId>;

/// Static descriptor for a single visit state.
pub struct StateDescriptor {
    pub id: StateId,
    pub name: &'static str,
    pub on_trigger: TriggerFn,
}

// ---------------------------------------------------------------------------
// FSM engine
// ---------------------------------------------------------------------------

/// The visit state machine.
pub struct Fsm {
    table: [StateDescriptor; StateId::COUNT],
    current: usize,
    path: heapless::Vec<StateId, MAX_PATH>,
}

impl Fsm {
    /// A new machine in `Start`.
    pub fn new() -> Self {
        let mut path = heapless::Vec::new();
        // Capacity is MAX_PATH, the first push cannot fail.
        let _ = path.push(StateId::Start);
        Self {
            table: states::build_state_table(),
            current: StateId::Start as usize,
            path,
        }
    }

    /// Apply `trigger` to the current state.
    pub fn fire(&mut self, trigger: Trigger) -> Result<StateId> {
        let from = self.current_state();
        let Some(next) = (self.table[self.current].on_trigger)(trigger) else {
            return Err(Error::InvalidTransition {
                from,
                to: trigger.target(),
            });
        };

        if self.path.push(next).is_err() {
            return Err(Error::InvalidTransition { from, to: next });
        }
        info!(
            "visit: {} -> {}",
            self.table[self.current].name, self.table[next as usize].name
        );
        self.current = next as usize;
        Ok(next)
    }

    /// The current state's identity.
    pub fn current_state(&self) -> StateId {
        StateId::from_index(self.current)
    }

    /// Every state visited so far, starting with `Start`.
    pub fn path(&self) -> &[StateId] {
        &self.path
    }
}

impl Default for Fsm {
    fn default() -> Self {
        Self::new()
    }
}
