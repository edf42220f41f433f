//! Visit results reported by the controller.

use core::fmt;

/// How a single visit ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitOutcome {
    /// Delivery, and someone came to the door.
    DeliveryAnswered,
    /// Delivery, nobody came; the deliverer was asked to leave the parcel.
    ParcelLeft,
    /// Visitor, and the occupier came to the door.
    VisitorAnswered,
    /// Visitor, nobody came; their message and photo were posted.
    MessageTweeted,
}

impl VisitOutcome {
    pub fn is_delivery(self) -> bool {
        matches!(self, Self::DeliveryAnswered | Self::ParcelLeft)
    }

    /// Someone reached the door before the script finished.
    pub fn was_answered(self) -> bool {
        matches!(self, Self::DeliveryAnswered | Self::VisitorAnswered)
    }
}

impl fmt::Display for VisitOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DeliveryAnswered => write!(f, "delivery answered"),
            Self::ParcelLeft => write!(f, "parcel left"),
            Self::VisitorAnswered => write!(f, "visitor answered"),
            Self::MessageTweeted => write!(f, "message tweeted"),
        }
    }
}

/// Running counters kept by the run loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisitStats {
    /// Sensor events taken off the queue.
    pub events: u64,
    pub deliveries: u64,
    pub visitors: u64,
    /// Visits cut short because someone answered the door.
    pub answered: u64,
    pub tweets: u64,
    /// Visits aborted by a collaborator error.
    pub failures: u64,
}

impl VisitStats {
    pub fn record(&mut self, outcome: VisitOutcome) {
        if outcome.is_delivery() {
            self.deliveries += 1;
        } else {
            self.visitors += 1;
        }
        if outcome.was_answered() {
            self.answered += 1;
        }
        if outcome == VisitOutcome::MessageTweeted {
            self.tweets += 1;
        }
    }

    pub fn record_failure(&mut self) {
        self.failures += 1;
    }
}
