//! Status-API tweeter adapter.
//!
//! [`ApiTweeter`] implements [`Tweeter`] on top of a minimal
//! [`StatusApi`]: one call that posts media with a status, one that posts
//! a status alone.  A real social-network client implements `StatusApi`;
//! [`LogStatusApi`] writes posts to the log instead.

use log::{debug, info};

use crate::app::ports::{Photo, Tweeter};
use crate::config::MAX_STATUS_CHARS;
use crate::error::{Result, TweetError};

/// The two calls the tweeter needs from a social-network client.
pub trait StatusApi {
    fn update_with_media(&mut self, photo: &Photo, status: &str) -> Result<()>;

    fn update_status(&mut self, status: &str) -> Result<()>;
}

pub struct ApiTweeter<A> {
    api: A,
    /// Fixed text used by [`Tweeter::tweet_image`].
    status: String,
}

impl<A: StatusApi> ApiTweeter<A> {
    pub fn new(api: A, status: impl Into<String>) -> Self {
        Self {
            api,
            status: status.into(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }
}

/// Cut `message` to at most [`MAX_STATUS_CHARS`] characters.
fn clip_status(message: &str) -> &str {
    match message.char_indices().nth(MAX_STATUS_CHARS) {
        Some((end, _)) => &message[..end],
        None => message,
    }
}

fn check_status(status: &str) -> Result<()> {
    if status.trim().is_empty() || status.chars().count() > MAX_STATUS_CHARS {
        return Err(TweetError::InvalidStatus.into());
    }
    Ok(())
}

impl<A: StatusApi> Tweeter for ApiTweeter<A> {
    fn tweet_message_with_image(&mut self, message: &str, photo: &Photo) -> Result<()> {
        let status = clip_status(message);
        if status.len() < message.len() {
            debug!("TWEET | message clipped to {} chars", MAX_STATUS_CHARS);
        }
        self.api.update_with_media(photo, status)
    }

    fn tweet_image(&mut self, photo: &Photo) -> Result<()> {
        check_status(&self.status)?;
        self.api.update_with_media(photo, &self.status)?;
        self.api.update_status(&self.status)
    }
}

// ── LogStatusApi ──────────────────────────────────────────────

/// Status API that only logs what would be posted.
#[derive(Default)]
pub struct LogStatusApi {
    posts: u32,
}

impl LogStatusApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of posts made so far.
    pub fn posts(&self) -> u32 {
        self.posts
    }
}

impl StatusApi for LogStatusApi {
    fn update_with_media(&mut self, photo: &Photo, status: &str) -> Result<()> {
        self.posts += 1;
        info!(
            "TWEET | media={} | {:?}",
            photo.location.display(),
            status
        );
        Ok(())
    }

    fn update_status(&mut self, status: &str) -> Result<()> {
        self.posts += 1;
        info!("TWEET | {:?}", status);
        Ok(())
    }
}
