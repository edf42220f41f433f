//! Pin detector adapter.
//!
//! Watches a doorbell button or PIR output through an `embedded-hal`
//! [`InputPin`] and reports each debounced rising edge to the subscriber.
//!
//! ## Hardware
//!
//! Active-high sensor output (PIR modules and the doorbell opto both drive
//! high while triggered).  On the host the pin is read through sysfs
//! ([`SysfsPin`]); a polling thread samples it every `detector_poll_ms`
//! and runs the debounce filter.
//!
//! ## Debounce
//!
//! A level change only counts once it has been stable for `debounce_ms`.
//! Only low → high edges are reported; the release is silent.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use embedded_hal::digital::{self, Error as _, ErrorKind, ErrorType, InputPin};
use log::{info, warn};

use crate::app::ports::{Channel, Detector};
use crate::config::SystemConfig;
use crate::error::{DetectorError, Result};
use crate::events::Subscriber;

// ── Debounce filter ───────────────────────────────────────────

/// Debounced edge detector over raw level samples.
#[derive(Debug, Clone, Copy)]
pub struct EdgeFilter {
    debounce_ms: u32,
    stable: bool,
    pending: Option<(bool, u32)>,
}

impl EdgeFilter {
    /// Starts with the line low.
    pub fn new(debounce_ms: u32) -> Self {
        Self {
            debounce_ms,
            stable: false,
            pending: None,
        }
    }

    /// Feed one sample taken at `now_ms`.  Returns `true` on a debounced
    /// rising edge.
    pub fn sample(&mut self, level: bool, now_ms: u32) -> bool {
        if level == self.stable {
            self.pending = None;
            return false;
        }

        let since = match self.pending {
            Some((pending, since)) if pending == level => since,
            _ => {
                self.pending = Some((level, now_ms));
                now_ms
            }
        };

        if now_ms.wrapping_sub(since) >= self.debounce_ms {
            self.stable = level;
            self.pending = None;
            return level;
        }
        false
    }
}

// ── PinDetector ───────────────────────────────────────────────

pub struct PinDetector<P> {
    pin: Option<P>,
    channel: Channel,
    poll: Duration,
    debounce_ms: u32,
    stop: Arc<AtomicBool>,
}

impl<P> PinDetector<P>
where
    P: InputPin + Send + 'static,
{
    pub fn new(pin: P, channel: Channel, poll: Duration, debounce_ms: u32) -> Self {
        Self {
            pin: Some(pin),
            channel,
            poll,
            debounce_ms,
            stop: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn from_config(pin: P, config: &SystemConfig) -> Self {
        Self::new(
            pin,
            Channel(config.detector_channel),
            Duration::from_millis(u64::from(config.detector_poll_ms)),
            config.debounce_ms,
        )
    }
}

impl<P> Detector for PinDetector<P>
where
    P: InputPin + Send + 'static,
{
    fn subscribe(&mut self, subscriber: Subscriber) -> Result<()> {
        let Some(mut pin) = self.pin.take() else {
            return Err(DetectorError::AlreadySubscribed.into());
        };

        let channel = self.channel;
        let poll = self.poll;
        let stop = Arc::clone(&self.stop);
        let mut filter = EdgeFilter::new(self.debounce_ms);

        thread::Builder::new()
            .name("pin-detector".into())
            .spawn(move || {
                let started = Instant::now();
                while !stop.load(Ordering::Relaxed) {
                    let now_ms = started.elapsed().as_millis() as u32;
                    match pin.is_high() {
                        Ok(level) => {
                            if filter.sample(level, now_ms) {
                                info!("DETECT | rising edge on {}", channel);
                                subscriber.notify(channel);
                            }
                        }
                        Err(e) => warn!("DETECT | pin read failed: {:?}", e.kind()),
                    }
                    thread::sleep(poll);
                }
            })
            .map_err(|_| DetectorError::SpawnFailed)?;

        info!("DETECT | watching {} every {:?}", channel, poll);
        Ok(())
    }
}

impl<P> Drop for PinDetector<P> {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}

// ── SysfsPin ──────────────────────────────────────────────────

/// GPIO input read through `/sys/class/gpio/gpioN/value`.
///
/// The pin must already be exported and configured as an input.
pub struct SysfsPin {
    value_path: PathBuf,
}

/// Read failure on a [`SysfsPin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SysfsPinError(pub io::ErrorKind);

impl digital::Error for SysfsPinError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

impl SysfsPin {
    pub fn open(gpio: u16) -> Result<Self> {
        Self::at(PathBuf::from(format!("/sys/class/gpio/gpio{gpio}/value")))
    }

    /// Use an arbitrary value file (test fixtures, other GPIO roots).
    pub fn at(value_path: PathBuf) -> Result<Self> {
        if !value_path.exists() {
            return Err(DetectorError::PinUnavailable.into());
        }
        Ok(Self { value_path })
    }
}

impl ErrorType for SysfsPin {
    type Error = SysfsPinError;
}

impl InputPin for SysfsPin {
    fn is_high(&mut self) -> core::result::Result<bool, Self::Error> {
        let raw = fs::read_to_string(&self.value_path).map_err(|e| SysfsPinError(e.kind()))?;
        Ok(raw.trim() == "1")
    }

    fn is_low(&mut self) -> core::result::Result<bool, Self::Error> {
        self.is_high().map(|high| !high)
    }
}
