//! Unified error types for the greeter controller.
//!
//! A single `Error` enum that every collaborator family converts into, so
//! the visit state machine can propagate any failure with `?` and the run
//! loop handles all of them in one place. Variants are `Copy`; I/O failures
//! keep only their [`std::io::ErrorKind`].

use core::fmt;
use std::io;

use crate::fsm::StateId;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

/// Every fallible operation in the controller funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Voice interaction with the visitor failed.
    Voice(VoiceError),
    /// Photo capture failed.
    Camera(CameraError),
    /// Delivery classification failed.
    Imager(ImagerError),
    /// Posting the notification failed.
    Tweet(TweetError),
    /// The event source could not be wired up.
    Detector(DetectorError),
    /// The manual-answer input could not be read.
    Input(InputError),
    /// A visit step was attempted out of order.
    InvalidTransition { from: StateId, to: StateId },
    /// Configuration is invalid.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Voice(e) => write!(f, "voice: {e}"),
            Self::Camera(e) => write!(f, "camera: {e}"),
            Self::Imager(e) => write!(f, "imager: {e}"),
            Self::Tweet(e) => write!(f, "tweet: {e}"),
            Self::Detector(e) => write!(f, "detector: {e}"),
            Self::Input(e) => write!(f, "input: {e}"),
            Self::InvalidTransition { from, to } => {
                write!(f, "invalid visit transition {from:?} -> {to:?}")
            }
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Voice errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceError {
    /// The speech channel closed before an answer was heard.
    EndOfInput,
    /// Speaker or microphone I/O failed.
    Io(io::ErrorKind),
}

impl fmt::Display for VoiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EndOfInput => write!(f, "input closed"),
            Self::Io(kind) => write!(f, "I/O error ({kind})"),
        }
    }
}

impl From<VoiceError> for Error {
    fn from(e: VoiceError) -> Self {
        Self::Voice(e)
    }
}

// ---------------------------------------------------------------------------
// Camera errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraError {
    /// The camera did not deliver a frame.
    CaptureFailed,
    /// Storing the frame failed.
    Io(io::ErrorKind),
}

impl fmt::Display for CameraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CaptureFailed => write!(f, "capture failed"),
            Self::Io(kind) => write!(f, "I/O error ({kind})"),
        }
    }
}

impl From<CameraError> for Error {
    fn from(e: CameraError) -> Self {
        Self::Camera(e)
    }
}

// ---------------------------------------------------------------------------
// Imager errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImagerError {
    /// The photo could not be read or decoded.
    UnreadablePhoto,
    /// The classifier backend is unavailable.
    Unavailable,
}

impl fmt::Display for ImagerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnreadablePhoto => write!(f, "photo unreadable"),
            Self::Unavailable => write!(f, "classifier unavailable"),
        }
    }
}

impl From<ImagerError> for Error {
    fn from(e: ImagerError) -> Self {
        Self::Imager(e)
    }
}

// ---------------------------------------------------------------------------
// Tweet errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TweetError {
    /// Status text is empty or over the length limit.
    InvalidStatus,
    /// The media upload was rejected.
    MediaRejected,
    /// The service could not be reached.
    Unreachable,
}

impl fmt::Display for TweetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidStatus => write!(f, "invalid status text"),
            Self::MediaRejected => write!(f, "media rejected"),
            Self::Unreachable => write!(f, "service unreachable"),
        }
    }
}

impl From<TweetError> for Error {
    fn from(e: TweetError) -> Self {
        Self::Tweet(e)
    }
}

// ---------------------------------------------------------------------------
// Detector errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectorError {
    /// `subscribe` was called on a detector that already has a subscriber.
    AlreadySubscribed,
    /// The sensor input could not be opened.
    PinUnavailable,
    /// The polling thread could not be started.
    SpawnFailed,
}

impl fmt::Display for DetectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadySubscribed => write!(f, "already subscribed"),
            Self::PinUnavailable => write!(f, "sensor pin unavailable"),
            Self::SpawnFailed => write!(f, "could not start polling thread"),
        }
    }
}

impl From<DetectorError> for Error {
    fn from(e: DetectorError) -> Self {
        Self::Detector(e)
    }
}

// ---------------------------------------------------------------------------
// Input errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// The readiness check itself failed.
    PollFailed,
    /// Reading the ready input failed.
    Io(io::ErrorKind),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PollFailed => write!(f, "poll failed"),
            Self::Io(kind) => write!(f, "I/O error ({kind})"),
        }
    }
}

impl From<InputError> for Error {
    fn from(e: InputError) -> Self {
        Self::Input(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
