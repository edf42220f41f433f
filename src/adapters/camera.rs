//! Snapshot camera adapter.
//!
//! Hands out numbered photo handles under the configured photo directory.
//! Off-target there is no sensor to read, so the handle names the file a
//! capture would have written; the sequence keeps names unique per run.

use std::path::PathBuf;

use log::info;

use crate::app::ports::{Camera, Photo, PhotoTag};
use crate::error::Result;

pub struct SnapshotCamera {
    dir: PathBuf,
    next_sequence: u32,
}

impl SnapshotCamera {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            next_sequence: 1,
        }
    }
}

impl Camera for SnapshotCamera {
    fn take_photo(&mut self, tag: PhotoTag) -> Result<Photo> {
        let sequence = self.next_sequence;
        self.next_sequence = self.next_sequence.wrapping_add(1);

        let location = self
            .dir
            .join(format!("{}-{:04}.jpg", tag.label(), sequence));
        info!("CAMERA | {:?} photo #{} -> {}", tag, sequence, location.display());

        Ok(Photo {
            tag,
            sequence,
            location,
        })
    }
}
