//! Mock collaborators for integration tests.
//!
//! Every mock appends to one shared [`CallLog`], so tests can assert on
//! the exact order of calls across greeter, camera, imager, tweeter and
//! answer signal without touching real devices.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::rc::Rc;

use homegreeter::app::ports::{
    AnswerSignal, Camera, Detector, Greeter, Imager, Photo, PhotoTag, Tweeter,
};
use homegreeter::error::{CameraError, ImagerError, Result, TweetError, VoiceError};
use homegreeter::events::{DoorEvent, Subscriber};
use homegreeter::{Collaborators, DoorbellController, SystemConfig};

// ── Call record ───────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Subscribe,
    Welcome,
    AskVisitorName,
    AskOccupierName,
    UpdateVisitor { visitor: String, occupier: String },
    RequestOccupier,
    TakeMessage,
    GreeterTakePhoto,
    ThankVisitor,
    AskDelivererToWait,
    RequestSomeone,
    LeaveParcel,
    CameraTakePhoto(PhotoTag),
    IsDelivery(PhotoTag),
    TweetMessageWithImage { message: String, tag: PhotoTag },
    TweetImage(PhotoTag),
    PollAnswer,
}

/// Which collaborator call should fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailAt {
    Welcome,
    AskVisitorName,
    CameraInitial,
    CameraVisitor,
    Imager,
    Tweet,
}

#[derive(Clone, Default)]
pub struct CallLog(Rc<RefCell<Vec<Call>>>);

impl CallLog {
    pub fn push(&self, call: Call) {
        self.0.borrow_mut().push(call);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.0.borrow().clone()
    }

    pub fn count(&self, call: &Call) -> usize {
        self.0.borrow().iter().filter(|c| *c == call).count()
    }

    pub fn called(&self, call: &Call) -> bool {
        self.count(call) > 0
    }

    /// Calls made by the visit script, without detector subscription.
    pub fn visit_calls(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| *c != Call::Subscribe)
            .collect()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

// ── MockDetector ──────────────────────────────────────────────

/// Pushes its scripted events as soon as it is subscribed.
pub struct MockDetector {
    log: CallLog,
    script: Vec<DoorEvent>,
    pub subscriber: Rc<RefCell<Option<Subscriber>>>,
}

impl Detector for MockDetector {
    fn subscribe(&mut self, subscriber: Subscriber) -> Result<()> {
        self.log.push(Call::Subscribe);
        for event in &self.script {
            match event {
                DoorEvent::Sensor(channel) => subscriber.notify(*channel),
                DoorEvent::Shutdown => subscriber.shutdown(),
            };
        }
        *self.subscriber.borrow_mut() = Some(subscriber);
        Ok(())
    }
}

// ── MockGreeter ───────────────────────────────────────────────

pub struct MockGreeter {
    log: CallLog,
    visitor_name: String,
    occupier_name: String,
    message: String,
    fail: Option<FailAt>,
}

impl MockGreeter {
    fn fails(&self, at: FailAt) -> bool {
        self.fail == Some(at)
    }
}

impl Greeter for MockGreeter {
    fn welcome(&mut self) -> Result<()> {
        self.log.push(Call::Welcome);
        if self.fails(FailAt::Welcome) {
            return Err(VoiceError::EndOfInput.into());
        }
        Ok(())
    }

    fn ask_for_visitor_name(&mut self) -> Result<String> {
        self.log.push(Call::AskVisitorName);
        if self.fails(FailAt::AskVisitorName) {
            return Err(VoiceError::EndOfInput.into());
        }
        Ok(self.visitor_name.clone())
    }

    fn ask_for_occupier_name(&mut self) -> Result<String> {
        self.log.push(Call::AskOccupierName);
        Ok(self.occupier_name.clone())
    }

    fn update_visitor_about_asking_for_occupier(
        &mut self,
        visitor_name: &str,
        occupier_name: &str,
    ) -> Result<()> {
        self.log.push(Call::UpdateVisitor {
            visitor: visitor_name.to_owned(),
            occupier: occupier_name.to_owned(),
        });
        Ok(())
    }

    fn request_occupier_come_to_the_door(&mut self) -> Result<()> {
        self.log.push(Call::RequestOccupier);
        Ok(())
    }

    fn take_message_for_occupier(&mut self) -> Result<String> {
        self.log.push(Call::TakeMessage);
        Ok(self.message.clone())
    }

    fn take_photo(&mut self) -> Result<()> {
        self.log.push(Call::GreeterTakePhoto);
        Ok(())
    }

    fn thank_visitor(&mut self) -> Result<()> {
        self.log.push(Call::ThankVisitor);
        Ok(())
    }

    fn ask_deliverer_to_wait(&mut self) -> Result<()> {
        self.log.push(Call::AskDelivererToWait);
        Ok(())
    }

    fn request_someone_come_to_the_door(&mut self) -> Result<()> {
        self.log.push(Call::RequestSomeone);
        Ok(())
    }

    fn ask_deliverer_to_leave_parcel(&mut self) -> Result<()> {
        self.log.push(Call::LeaveParcel);
        Ok(())
    }
}

// ── MockCamera / MockImager / MockTweeter / MockAnswer ────────

pub struct MockCamera {
    log: CallLog,
    next_sequence: u32,
    fail: Option<FailAt>,
}

impl Camera for MockCamera {
    fn take_photo(&mut self, tag: PhotoTag) -> Result<Photo> {
        self.log.push(Call::CameraTakePhoto(tag));
        let failing = match tag {
            PhotoTag::Initial => self.fail == Some(FailAt::CameraInitial),
            PhotoTag::Visitor => self.fail == Some(FailAt::CameraVisitor),
        };
        if failing {
            return Err(CameraError::CaptureFailed.into());
        }
        self.next_sequence += 1;
        Ok(Photo {
            tag,
            sequence: self.next_sequence,
            location: PathBuf::from(format!("{}.jpg", tag.label())),
        })
    }
}

pub struct MockImager {
    log: CallLog,
    delivery: bool,
    fail: bool,
}

impl Imager for MockImager {
    fn is_delivery(&mut self, photo: &Photo) -> Result<bool> {
        self.log.push(Call::IsDelivery(photo.tag));
        if self.fail {
            return Err(ImagerError::Unavailable.into());
        }
        Ok(self.delivery)
    }
}

pub struct MockTweeter {
    log: CallLog,
    fail: bool,
}

impl Tweeter for MockTweeter {
    fn tweet_message_with_image(&mut self, message: &str, photo: &Photo) -> Result<()> {
        self.log.push(Call::TweetMessageWithImage {
            message: message.to_owned(),
            tag: photo.tag,
        });
        if self.fail {
            return Err(TweetError::Unreachable.into());
        }
        Ok(())
    }

    fn tweet_image(&mut self, photo: &Photo) -> Result<()> {
        self.log.push(Call::TweetImage(photo.tag));
        Ok(())
    }
}

/// Answers from a queue; `false` once it runs dry.
pub struct MockAnswer {
    log: CallLog,
    answers: VecDeque<bool>,
}

impl AnswerSignal for MockAnswer {
    fn someone_answered(&mut self) -> Result<bool> {
        self.log.push(Call::PollAnswer);
        Ok(self.answers.pop_front().unwrap_or(false))
    }
}

// ── Scenario builder ──────────────────────────────────────────

pub type MockController =
    DoorbellController<MockDetector, MockGreeter, MockCamera, MockImager, MockTweeter, MockAnswer>;

pub struct Scenario {
    pub delivery: bool,
    pub answers: Vec<bool>,
    pub visitor_name: String,
    pub occupier_name: String,
    pub message: String,
    pub script: Vec<DoorEvent>,
    pub fail: Option<FailAt>,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            delivery: false,
            answers: Vec::new(),
            visitor_name: "visitor".into(),
            occupier_name: "occupier".into(),
            message: "message".into(),
            script: Vec::new(),
            fail: None,
        }
    }
}

impl Scenario {
    pub fn visitor() -> Self {
        Self::default()
    }

    pub fn delivery() -> Self {
        Self {
            delivery: true,
            ..Self::default()
        }
    }

    /// Someone reaches the door at the first check.
    pub fn answered(mut self) -> Self {
        self.answers = vec![true];
        self
    }

    pub fn failing_at(mut self, at: FailAt) -> Self {
        self.fail = Some(at);
        self
    }

    pub fn with_script(mut self, script: Vec<DoorEvent>) -> Self {
        self.script = script;
        self
    }

    pub fn build(self) -> (MockController, CallLog) {
        let log = CallLog::default();
        let parts = Collaborators {
            detector: MockDetector {
                log: log.clone(),
                script: self.script,
                subscriber: Rc::new(RefCell::new(None)),
            },
            greeter: MockGreeter {
                log: log.clone(),
                visitor_name: self.visitor_name,
                occupier_name: self.occupier_name,
                message: self.message,
                fail: self.fail,
            },
            camera: MockCamera {
                log: log.clone(),
                next_sequence: 0,
                fail: self.fail,
            },
            imager: MockImager {
                log: log.clone(),
                delivery: self.delivery,
                fail: self.fail == Some(FailAt::Imager),
            },
            tweeter: MockTweeter {
                log: log.clone(),
                fail: self.fail == Some(FailAt::Tweet),
            },
            answer: MockAnswer {
                log: log.clone(),
                answers: self.answers.into(),
            },
        };
        let config = SystemConfig {
            loop_interval_ms: 1,
            ..SystemConfig::default()
        };
        (DoorbellController::new(parts, &config), log)
    }
}
