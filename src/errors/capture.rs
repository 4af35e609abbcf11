// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Error types for camera capture on scanner fields.

use thiserror::Error;

/// Errors from the Idle -> Streaming -> Captured flow.
#[derive(Error, Debug)]
pub enum CaptureError {
    /// The host refused (or failed) to hand out a video stream.
    #[error("Camera access denied for field '{field_id}': {reason}")]
    PermissionDenied { field_id: String, reason: String },

    /// `capture_image` was called while no stream was open for the field.
    #[error("Camera is not streaming for field '{0}'")]
    NotStreaming(String),

    /// No media device backend was attached to the renderer.
    #[error("No media devices available")]
    MediaUnavailable,

    /// The field id does not name a scanner field in the current form.
    #[error("Field '{0}' is not a scanner field")]
    UnknownField(String),

    /// The stream could not deliver a frame.
    #[error("Failed to grab frame: {0}")]
    FrameGrab(#[source] anyhow::Error),

    /// The frame buffer did not match its declared dimensions.
    #[error("Invalid frame: {width}x{height} needs {expected} bytes, got {actual}")]
    InvalidFrame {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// PNG encoding failed.
    #[error("Image encoding error: {0}")]
    Encode(#[from] image::ImageError),
}

pub type CaptureResult<T> = Result<T, CaptureError>;
