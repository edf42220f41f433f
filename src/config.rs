//! System configuration parameters
//!
//! All tunable parameters for the greeter.  Values come from the JSON
//! config file (see [`JsonConfigFile`](crate::adapters::config_file::JsonConfigFile))
//! or fall back to the defaults below.

use serde::{Deserialize, Serialize};

use crate::app::ports::ConfigError;

/// Longest status text the notification service accepts.
pub const MAX_STATUS_CHARS: usize = 280;

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    // --- Run loop ---
    /// Idle wait per loop iteration (milliseconds)
    pub loop_interval_ms: u32,
    /// Upper bound on the manual-answer check (milliseconds, 0 = readiness only)
    pub answer_poll_timeout_ms: u32,
    /// Device or FIFO the occupier signals on, e.g. `/dev/tty2`.  Unset
    /// means stdin, which the console greeter also reads; answers typed
    /// there can then be taken for greeter replies and the other way round.
    pub answer_device: Option<String>,

    // --- Detector ---
    /// Channel reported when the doorbell/PIR pin fires
    pub detector_channel: u8,
    /// Pin sampling period (milliseconds)
    pub detector_poll_ms: u32,
    /// Level must be stable this long before an edge counts (milliseconds)
    pub debounce_ms: u32,
    /// sysfs GPIO number of the sensor input
    pub sensor_gpio: u16,

    // --- Camera / imager ---
    /// Directory photos are stored under
    pub photo_dir: String,
    /// Classification returned by the fixed imager
    pub assume_delivery: bool,

    // --- Notification ---
    /// Fixed status text posted by `tweet_image`
    pub tweet_status: String,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            // Run loop
            loop_interval_ms: 100,
            answer_poll_timeout_ms: 0,
            answer_device: None,

            // Detector
            detector_channel: 17,
            detector_poll_ms: 10, // 100 Hz
            debounce_ms: 50,
            sensor_gpio: 17,

            // Camera / imager
            photo_dir: "photos".into(),
            assume_delivery: false,

            // Notification
            tweet_status: "Someone is at the door".into(),
        }
    }
}

impl SystemConfig {
    /// Range-check every field.  Invalid values are rejected, not clamped.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=10_000).contains(&self.loop_interval_ms) {
            return Err(ConfigError::ValidationFailed(
                "loop_interval_ms must be 1–10000",
            ));
        }
        if self.answer_poll_timeout_ms > 5_000 {
            return Err(ConfigError::ValidationFailed(
                "answer_poll_timeout_ms must be 0–5000",
            ));
        }
        if !(1..=1_000).contains(&self.detector_poll_ms) {
            return Err(ConfigError::ValidationFailed(
                "detector_poll_ms must be 1–1000",
            ));
        }
        if self.answer_device.as_deref().is_some_and(|d| d.trim().is_empty()) {
            return Err(ConfigError::ValidationFailed(
                "answer_device must not be empty when set",
            ));
        }
        if self.debounce_ms > 1_000 {
            return Err(ConfigError::ValidationFailed("debounce_ms must be 0–1000"));
        }
        if self.photo_dir.trim().is_empty() {
            return Err(ConfigError::ValidationFailed("photo_dir must not be empty"));
        }
        if self.tweet_status.trim().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "tweet_status must not be empty",
            ));
        }
        if self.tweet_status.chars().count() > MAX_STATUS_CHARS {
            return Err(ConfigError::ValidationFailed(
                "tweet_status must be at most 280 characters",
            ));
        }
        Ok(())
    }
}
