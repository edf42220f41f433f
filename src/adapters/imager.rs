//! Fixed-answer imager adapter.
//!
//! Stands in for the image classifier on hosts without one: every photo is
//! classified the way the config says.

use log::info;

use crate::app::ports::{Imager, Photo};
use crate::error::Result;

pub struct FixedImager {
    delivery: bool,
}

impl FixedImager {
    pub fn new(delivery: bool) -> Self {
        Self { delivery }
    }
}

impl Imager for FixedImager {
    fn is_delivery(&mut self, photo: &Photo) -> Result<bool> {
        info!(
            "IMAGER | photo #{} classified as {}",
            photo.sequence,
            if self.delivery { "delivery" } else { "visitor" }
        );
        Ok(self.delivery)
    }
}
