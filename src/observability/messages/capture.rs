// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for the camera capture lifecycle.
//!
//! This module contains message types for logging events related to:
//! * Stream acquisition (granted or denied)
//! * Capture requests, frame capture and PNG encoding
//! * Stream release on every exit path

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// The host granted a video stream.
///
/// # Log Level
/// `info!` - Important operational event
pub struct CameraOpened<'a> {
    pub field_id: &'a str,
}

impl Display for CameraOpened<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Camera streaming for field '{}'", self.field_id)
    }
}

impl StructuredLog for CameraOpened<'_> {
    fn log(&self) {
        tracing::info!(field_id = self.field_id, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "camera_opened",
            span_name = name,
            field_id = self.field_id,
        )
    }
}

/// The host refused the stream.
///
/// # Log Level
/// `warn!` - Reported to the user, field stays idle
pub struct CameraAccessDenied<'a> {
    pub field_id: &'a str,
    pub reason: &'a str,
}

impl Display for CameraAccessDenied<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Camera access denied for field '{}': {}",
            self.field_id, self.reason
        )
    }
}

impl StructuredLog for CameraAccessDenied<'_> {
    fn log(&self) {
        tracing::warn!(field_id = self.field_id, reason = self.reason, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "camera_access_denied",
            span_name = name,
            field_id = self.field_id,
            reason = self.reason,
        )
    }
}

/// A still was requested for a field.
///
/// # Log Level
/// `debug!` - Detailed flow information
pub struct CaptureStarted<'a> {
    pub field_id: &'a str,
}

impl Display for CaptureStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Capturing still for field '{}'", self.field_id)
    }
}

impl StructuredLog for CaptureStarted<'_> {
    fn log(&self) {
        tracing::debug!(field_id = self.field_id, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "capture_started",
            span_name = name,
            field_id = self.field_id,
        )
    }
}

/// A frame was captured and encoded.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ImageCaptured<'a> {
    pub field_id: &'a str,
    pub width: u32,
    pub height: u32,
    pub encoded_bytes: usize,
}

impl Display for ImageCaptured<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Captured {}x{} image for field '{}' ({} PNG bytes)",
            self.width, self.height, self.field_id, self.encoded_bytes
        )
    }
}

impl StructuredLog for ImageCaptured<'_> {
    fn log(&self) {
        tracing::info!(
            field_id = self.field_id,
            width = self.width,
            height = self.height,
            encoded_bytes = self.encoded_bytes,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "image_captured",
            span_name = name,
            field_id = self.field_id,
            width = self.width,
            height = self.height,
        )
    }
}

/// A stream was stopped.
///
/// # Log Level
/// `debug!` - Resource bookkeeping
pub struct StreamReleased<'a> {
    pub field_id: &'a str,
    pub reason: &'a str,
}

impl Display for StreamReleased<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Camera stream for field '{}' released ({})",
            self.field_id, self.reason
        )
    }
}

impl StructuredLog for StreamReleased<'_> {
    fn log(&self) {
        tracing::debug!(field_id = self.field_id, reason = self.reason, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "stream_released",
            span_name = name,
            field_id = self.field_id,
            reason = self.reason,
        )
    }
}
