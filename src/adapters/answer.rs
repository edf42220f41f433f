//! Manual-answer signal adapter.
//!
//! The occupier presses Enter on the hall console when they reach the door.
//! [`FdAnswerSignal`] checks whether such input is waiting with `poll(2)`
//! (bounded by `answer_poll_timeout_ms`, 0 = readiness only) and consumes
//! whatever is pending so it cannot count twice.
//!
//! Give it its own device with [`FdAnswerSignal::open`] when the console
//! greeter is reading stdin; [`FdAnswerSignal::stdin`] shares the stream.

use std::fs::{File, OpenOptions};
use std::io;
use std::os::fd::{AsRawFd, RawFd};
use std::os::unix::fs::OpenOptionsExt;
use std::path::Path;

use log::{debug, info};

use crate::app::ports::AnswerSignal;
use crate::error::{InputError, Result};

const DRAIN_BUF: usize = 256;

pub struct FdAnswerSignal {
    fd: RawFd,
    timeout_ms: i32,
    /// Keeps `fd` open when this signal opened it.
    device: Option<File>,
}

impl FdAnswerSignal {
    /// Watch a descriptor owned elsewhere.
    pub fn new(fd: RawFd, timeout_ms: u32) -> Self {
        Self {
            fd,
            timeout_ms: timeout_ms.min(i32::MAX as u32) as i32,
            device: None,
        }
    }

    pub fn stdin(timeout_ms: u32) -> Self {
        Self::new(libc::STDIN_FILENO, timeout_ms)
    }

    /// Open a dedicated answer device (TTY or FIFO).  Non-blocking, so a
    /// FIFO with no writer yet does not stall start-up.
    pub fn open(path: impl AsRef<Path>, timeout_ms: u32) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .read(true)
            .custom_flags(libc::O_NONBLOCK)
            .open(path)
            .map_err(|e| InputError::Io(e.kind()))?;
        info!("ANSWER | watching {}", path.display());
        let mut signal = Self::new(file.as_raw_fd(), timeout_ms);
        signal.device = Some(file);
        Ok(signal)
    }

    fn input_ready(&self) -> Result<bool> {
        let mut pfd = libc::pollfd {
            fd: self.fd,
            events: libc::POLLIN,
            revents: 0,
        };
        // SAFETY: `pfd` is a single valid pollfd that outlives the call.
        let rc = unsafe { libc::poll(&mut pfd, 1, self.timeout_ms) };
        if rc < 0 {
            let err = io::Error::last_os_error();
            if err.kind() == io::ErrorKind::Interrupted {
                return Ok(false);
            }
            return Err(InputError::PollFailed.into());
        }
        Ok(rc > 0 && pfd.revents & libc::POLLIN != 0)
    }

    /// Read what is pending.  Returns the byte count (0 on end of input).
    fn drain(&self) -> Result<usize> {
        let mut buf = [0u8; DRAIN_BUF];
        // SAFETY: `buf` is valid for DRAIN_BUF bytes for the whole call.
        let n = unsafe { libc::read(self.fd, buf.as_mut_ptr().cast(), DRAIN_BUF) };
        if n < 0 {
            return Err(InputError::Io(io::Error::last_os_error().kind()).into());
        }
        Ok(n as usize)
    }
}

impl AnswerSignal for FdAnswerSignal {
    fn someone_answered(&mut self) -> Result<bool> {
        if !self.input_ready()? {
            return Ok(false);
        }
        if self.drain()? == 0 {
            debug!("ANSWER | input closed, treating as no answer");
            return Ok(false);
        }
        info!("ANSWER | someone is at the door");
        Ok(true)
    }
}
