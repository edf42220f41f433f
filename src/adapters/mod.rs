//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter          | Implements    | Connects to                    |
//! |------------------|---------------|--------------------------------|
//! | `answer`         | AnswerSignal  | poll(2) on the hall console    |
//! | `camera`         | Camera        | Photo directory                |
//! | `config_file`    | ConfigPort    | JSON file on disk              |
//! | `console_greeter`| Greeter       | Line reader / writer           |
//! | `detector`       | Detector      | embedded-hal input pin (sysfs) |
//! | `imager`         | Imager        | Fixed classification           |
//! | `tweeter`        | Tweeter       | Status API (log by default)    |

pub mod answer;
pub mod camera;
pub mod config_file;
pub mod console_greeter;
pub mod detector;
pub mod imager;
pub mod tweeter;

use log::warn;

use crate::app::ports::ConfigError;
use crate::app::service::{Collaborators, DoorbellController};
use crate::config::SystemConfig;
use crate::error::{Error, Result};

use answer::FdAnswerSignal;
use camera::SnapshotCamera;
use console_greeter::StdioGreeter;
use detector::{PinDetector, SysfsPin};
use imager::FixedImager;
use tweeter::{ApiTweeter, LogStatusApi};

/// The collaborator set used when nothing is injected.
pub type DefaultCollaborators = Collaborators<
    PinDetector<SysfsPin>,
    StdioGreeter,
    SnapshotCamera,
    FixedImager,
    ApiTweeter<LogStatusApi>,
    FdAnswerSignal,
>;

pub type DefaultController = DoorbellController<
    PinDetector<SysfsPin>,
    StdioGreeter,
    SnapshotCamera,
    FixedImager,
    ApiTweeter<LogStatusApi>,
    FdAnswerSignal,
>;

/// Build the default host adapters from `config`.
///
/// Fails if `config` is out of range or a device cannot be opened.
pub fn default_collaborators(config: &SystemConfig) -> Result<DefaultCollaborators> {
    config.validate().map_err(|e| match e {
        ConfigError::ValidationFailed(msg) => Error::Config(msg),
        _ => Error::Config("unreadable config"),
    })?;
    let pin = SysfsPin::open(config.sensor_gpio)?;
    if config.answer_device.is_none() {
        warn!("Answer signal shares stdin with the greeter; set answer_device to separate them");
    }
    Ok(Collaborators {
        detector: PinDetector::from_config(pin, config),
        greeter: StdioGreeter::stdio(),
        camera: SnapshotCamera::new(&config.photo_dir),
        imager: FixedImager::new(config.assume_delivery),
        tweeter: ApiTweeter::new(LogStatusApi::new(), config.tweet_status.clone()),
        answer: match &config.answer_device {
            Some(device) => FdAnswerSignal::open(device, config.answer_poll_timeout_ms)?,
            None => FdAnswerSignal::stdin(config.answer_poll_timeout_ms),
        },
    })
}

/// A controller wired to the default host adapters.
pub fn default_controller(config: &SystemConfig) -> Result<DefaultController> {
    Ok(DoorbellController::new(
        default_collaborators(config)?,
        config,
    ))
}
