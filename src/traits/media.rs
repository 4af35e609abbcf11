// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::capture::Frame;

/// Which camera to ask the host for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacingMode {
    /// Rear camera, the one pointed at documents and barcodes
    #[default]
    Environment,
    User,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VideoConstraints {
    pub facing_mode: FacingMode,
}

/// Why the host did not hand out a stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaAccessError {
    pub reason: String,
}

impl MediaAccessError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for MediaAccessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.reason)
    }
}

impl std::error::Error for MediaAccessError {}

/// Host media-capture API.
///
/// `get_user_media` may suspend for as long as the user takes to answer the
/// permission prompt; no timeout is applied on this side.
#[async_trait]
pub trait MediaDevices: Send + Sync {
    async fn get_user_media(
        &self,
        constraints: VideoConstraints,
    ) -> Result<Box<dyn MediaStream>, MediaAccessError>;
}

/// A live video stream owned by one scanner field.
pub trait MediaStream: Send {
    /// Current video frame as straight RGBA8.
    fn grab_frame(&mut self) -> anyhow::Result<Frame>;

    /// Stops every track. Must be safe to call more than once.
    fn stop(&mut self);
}
