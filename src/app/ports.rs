//! Port traits: the hexagonal boundary between the visit logic and the
//! devices around the front door.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ DoorbellController (domain)
//! ```
//!
//! Driven adapters (speaker/microphone, camera, classifier, social
//! account, sensors) implement these traits.  The
//! [`DoorbellController`](super::service::DoorbellController) owns them
//! through generics, so the visit script never touches a device directly.
//!
//! All methods take `&mut self`: each adapter fronts a single physical
//! device with no reentrancy guarantee.

use core::fmt;
use std::path::PathBuf;

use crate::config::SystemConfig;
use crate::error::Result;
use crate::events::Subscriber;

// ───────────────────────────────────────────────────────────────
// Value types
// ───────────────────────────────────────────────────────────────

/// Opaque identifier of the sensor that fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Channel(pub u8);

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ch{}", self.0)
    }
}

/// Why a photo was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhotoTag {
    /// Taken immediately on detection, before classification.
    Initial,
    /// Taken after the visitor left a message.
    Visitor,
}

impl PhotoTag {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Initial => "initial",
            Self::Visitor => "visitor",
        }
    }
}

/// Handle to a captured photo.  The controller never looks inside.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    pub tag: PhotoTag,
    /// Capture counter assigned by the camera.
    pub sequence: u32,
    /// Where the camera stored the frame.
    pub location: PathBuf,
}

// ───────────────────────────────────────────────────────────────
// Detector port (event source)
// ───────────────────────────────────────────────────────────────

/// Source of door events.
pub trait Detector {
    /// Register the single subscriber.  Called once per run.
    fn subscribe(&mut self, subscriber: Subscriber) -> Result<()>;
}

// ───────────────────────────────────────────────────────────────
// Greeter port (voice I/O)
// ───────────────────────────────────────────────────────────────

/// Scripted voice interaction with whoever is at the door.
///
/// Every call blocks until its part of the conversation is over.
pub trait Greeter {
    fn welcome(&mut self) -> Result<()>;

    fn ask_for_visitor_name(&mut self) -> Result<String>;

    fn ask_for_occupier_name(&mut self) -> Result<String>;

    fn update_visitor_about_asking_for_occupier(
        &mut self,
        visitor_name: &str,
        occupier_name: &str,
    ) -> Result<()>;

    fn request_occupier_come_to_the_door(&mut self) -> Result<()>;

    fn take_message_for_occupier(&mut self) -> Result<String>;

    /// Tell the visitor a photo is being taken.  Distinct from
    /// [`Camera::take_photo`], which does the capture.
    fn take_photo(&mut self) -> Result<()>;

    fn thank_visitor(&mut self) -> Result<()>;

    fn ask_deliverer_to_wait(&mut self) -> Result<()>;

    fn request_someone_come_to_the_door(&mut self) -> Result<()>;

    fn ask_deliverer_to_leave_parcel(&mut self) -> Result<()>;
}

// ───────────────────────────────────────────────────────────────
// Camera / Imager ports
// ───────────────────────────────────────────────────────────────

pub trait Camera {
    fn take_photo(&mut self, tag: PhotoTag) -> Result<Photo>;
}

/// Decides whether the person in a photo is making a delivery.
pub trait Imager {
    fn is_delivery(&mut self, photo: &Photo) -> Result<bool>;
}

// ───────────────────────────────────────────────────────────────
// Tweeter port (occupier notification)
// ───────────────────────────────────────────────────────────────

pub trait Tweeter {
    /// Post `message` together with `photo`.
    fn tweet_message_with_image(&mut self, message: &str, photo: &Photo) -> Result<()>;

    /// Post `photo` with the fixed status text, then the status text alone.
    /// Not used by the visit script.
    fn tweet_image(&mut self, photo: &Photo) -> Result<()>;
}

// ───────────────────────────────────────────────────────────────
// Answer signal (manual intervention)
// ───────────────────────────────────────────────────────────────

/// Tells whether the occupier reached the door on their own.
///
/// Implementations must be bounded and non-blocking.
pub trait AnswerSignal {
    fn someone_answered(&mut self) -> Result<bool>;
}

// ───────────────────────────────────────────────────────────────
// Configuration port
// ───────────────────────────────────────────────────────────────

/// Loads and persists system configuration.
///
/// Implementations MUST validate values before persisting and reject
/// invalid ranges with [`ConfigError::ValidationFailed`].
pub trait ConfigPort {
    /// Returns [`SystemConfig::default()`] if no stored config exists.
    fn load(&self) -> core::result::Result<SystemConfig, ConfigError>;

    fn save(&self, config: &SystemConfig) -> core::result::Result<(), ConfigError>;
}

/// Errors from [`ConfigPort`] operations.
#[derive(Debug)]
pub enum ConfigError {
    /// Stored config could not be parsed.
    Corrupted,
    /// A field failed range validation.
    ValidationFailed(&'static str),
    /// The backing file could not be read or written.
    IoError(std::io::ErrorKind),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Corrupted => write!(f, "config corrupted"),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
            Self::IoError(kind) => write!(f, "I/O error ({})", kind),
        }
    }
}

impl std::error::Error for ConfigError {}
