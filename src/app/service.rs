//! Application service: the hexagonal core.
//!
//! [`DoorbellController`] owns every collaborator and the event queue.  It
//! subscribes to the detector once, then runs each queued sensor event
//! through the visit script to completion before taking the next one.
//!
//! ```text
//!   Detector ──▶ ┌─────────────────────────┐ ──▶ Greeter
//!                │   DoorbellController     │ ──▶ Camera / Imager
//! AnswerSignal ─▶│  queue · visit FSM       │ ──▶ Tweeter
//!                └─────────────────────────┘
//! ```

use std::thread;
use std::time::Duration;

use log::{debug, info, warn};

use crate::config::SystemConfig;
use crate::error::Result;
use crate::events::{DoorEvent, EventQueue};
use crate::fsm::{Fsm, Trigger};

use super::outcome::{VisitOutcome, VisitStats};
use super::ports::{AnswerSignal, Camera, Channel, Detector, Greeter, Imager, PhotoTag, Tweeter};

// ───────────────────────────────────────────────────────────────
// Collaborators
// ───────────────────────────────────────────────────────────────

/// Everything the controller talks to, handed over at construction.
pub struct Collaborators<D, G, C, I, T, A> {
    pub detector: D,
    pub greeter: G,
    pub camera: C,
    pub imager: I,
    pub tweeter: T,
    pub answer: A,
}

// ───────────────────────────────────────────────────────────────
// DoorbellController
// ───────────────────────────────────────────────────────────────

pub struct DoorbellController<D, G, C, I, T, A> {
    detector: D,
    greeter: G,
    camera: C,
    imager: I,
    tweeter: T,
    answer: A,
    queue: EventQueue,
    /// Checked once per loop iteration; only [`should_run`](Self::should_run) writes it.
    running: bool,
    loop_interval: Duration,
    stats: VisitStats,
}

impl<D, G, C, I, T, A> DoorbellController<D, G, C, I, T, A>
where
    D: Detector,
    G: Greeter,
    C: Camera,
    I: Imager,
    T: Tweeter,
    A: AnswerSignal,
{
    pub fn new(parts: Collaborators<D, G, C, I, T, A>, config: &SystemConfig) -> Self {
        Self {
            detector: parts.detector,
            greeter: parts.greeter,
            camera: parts.camera,
            imager: parts.imager,
            tweeter: parts.tweeter,
            answer: parts.answer,
            queue: EventQueue::new(),
            running: true,
            loop_interval: Duration::from_millis(u64::from(config.loop_interval_ms)),
            stats: VisitStats::default(),
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Subscribe to the detector, then process events until stopped.
    ///
    /// The detector is subscribed exactly once per call, even when the
    /// run flag is already cleared.  Failed visits are logged and counted;
    /// only a subscribe failure ends the call with an error.
    pub fn run(&mut self) -> Result<()> {
        self.detector.subscribe(self.queue.subscriber())?;
        info!("Subscribed to detector, entering event loop");

        while self.running {
            match self.queue.pop() {
                Some(event) => self.dispatch(event),
                None => thread::sleep(self.loop_interval),
            }
        }

        info!(
            "Event loop stopped: {} events, {} failures",
            self.stats.events, self.stats.failures
        );
        Ok(())
    }

    /// Set the run flag.  Takes effect at the next loop check.
    pub fn should_run(&mut self, flag: bool) {
        self.running = flag;
    }

    // ── Visit script ──────────────────────────────────────────

    /// Run one visit for a sensor event on `channel`.
    ///
    /// Any collaborator error aborts the visit and is returned as-is.
    pub fn process(&mut self, channel: Channel) -> Result<VisitOutcome> {
        info!("Visit on {}: sensor fired", channel);
        let mut fsm = Fsm::new();

        self.greeter.welcome()?;
        fsm.fire(Trigger::Welcomed)?;

        let initial = self.camera.take_photo(PhotoTag::Initial)?;
        fsm.fire(Trigger::PhotoTaken)?;

        let delivery = self.imager.is_delivery(&initial)?;
        fsm.fire(Trigger::Classified { delivery })?;

        let outcome = if delivery {
            self.greet_deliverer(&mut fsm)?
        } else {
            self.greet_visitor(&mut fsm)?
        };
        fsm.fire(Trigger::Finished)?;

        debug!("Visit on {}: path {:?}", channel, fsm.path());
        info!("Visit on {}: {}", channel, outcome);
        Ok(outcome)
    }

    fn greet_deliverer(&mut self, fsm: &mut Fsm) -> Result<VisitOutcome> {
        self.greeter.ask_deliverer_to_wait()?;
        self.greeter.request_someone_come_to_the_door()?;

        let answered = self.answer.someone_answered()?;
        fsm.fire(Trigger::Polled { answered })?;
        if answered {
            return Ok(VisitOutcome::DeliveryAnswered);
        }

        self.greeter.ask_deliverer_to_leave_parcel()?;
        Ok(VisitOutcome::ParcelLeft)
    }

    fn greet_visitor(&mut self, fsm: &mut Fsm) -> Result<VisitOutcome> {
        let visitor_name = self.greeter.ask_for_visitor_name()?;
        let occupier_name = self.greeter.ask_for_occupier_name()?;
        self.greeter
            .update_visitor_about_asking_for_occupier(&visitor_name, &occupier_name)?;
        self.greeter.request_occupier_come_to_the_door()?;

        let answered = self.answer.someone_answered()?;
        fsm.fire(Trigger::Polled { answered })?;
        if answered {
            return Ok(VisitOutcome::VisitorAnswered);
        }

        let message = self.greeter.take_message_for_occupier()?;
        self.greeter.take_photo()?;
        let photo = self.camera.take_photo(PhotoTag::Visitor)?;
        self.tweeter.tweet_message_with_image(&message, &photo)?;
        self.greeter.thank_visitor()?;
        Ok(VisitOutcome::MessageTweeted)
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stats(&self) -> VisitStats {
        self.stats
    }

    // ── Internal ──────────────────────────────────────────────

    fn dispatch(&mut self, event: DoorEvent) {
        match event {
            DoorEvent::Sensor(channel) => {
                self.stats.events += 1;
                match self.process(channel) {
                    Ok(outcome) => self.stats.record(outcome),
                    Err(e) => {
                        warn!("Visit on {} failed: {}", channel, e);
                        self.stats.record_failure();
                    }
                }
            }
            DoorEvent::Shutdown => {
                info!("Shutdown requested");
                self.should_run(false);
            }
        }
    }
}
