// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Camera capture for scanner fields.
//!
//! Each scanner field moves through `Idle -> Streaming -> Captured`. A stream
//! is held by an [`ActiveStream`] guard, so it is stopped on close, after a
//! capture, when the camera is reopened, and when the scanner is dropped.

mod frame;
mod stream;
pub mod stub;

pub use frame::{png_data_url, Frame};
pub use stream::ActiveStream;
pub use stub::{DenyingMediaDevices, StubMediaDevices};

use std::collections::HashMap;
use std::sync::Arc;

use crate::errors::{CaptureError, CaptureResult};
use crate::observability::messages::capture::{
    CameraAccessDenied, CameraOpened, CaptureStarted, ImageCaptured,
};
use crate::observability::messages::StructuredLog;
use crate::traits::{MediaDevices, VideoConstraints};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureState {
    Idle,
    Streaming,
    Captured,
}

/// A successfully captured still.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedImage {
    /// `data:image/png;base64,...`
    pub data_url: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Default)]
struct FieldCapture {
    stream: Option<ActiveStream>,
    captured: Option<CapturedImage>,
}

/// Per-field camera state for one rendered form.
pub struct CameraScanner {
    devices: Arc<dyn MediaDevices>,
    constraints: VideoConstraints,
    fields: HashMap<String, FieldCapture>,
}

impl CameraScanner {
    /// Uses the environment-facing camera.
    pub fn new(devices: Arc<dyn MediaDevices>) -> Self {
        Self::with_constraints(devices, VideoConstraints::default())
    }

    pub fn with_constraints(devices: Arc<dyn MediaDevices>, constraints: VideoConstraints) -> Self {
        Self {
            devices,
            constraints,
            fields: HashMap::new(),
        }
    }

    pub fn status(&self, field_id: &str) -> CaptureState {
        match self.fields.get(field_id) {
            Some(slot) if slot.stream.is_some() => CaptureState::Streaming,
            Some(slot) if slot.captured.is_some() => CaptureState::Captured,
            _ => CaptureState::Idle,
        }
    }

    pub fn captured(&self, field_id: &str) -> Option<&CapturedImage> {
        self.fields.get(field_id).and_then(|slot| slot.captured.as_ref())
    }

    /// Streams currently held, across all fields
    pub fn active_streams(&self) -> usize {
        self.fields.values().filter(|slot| slot.stream.is_some()).count()
    }

    /// Asks the host for a stream and starts streaming for `field_id`.
    ///
    /// A stream already open for the field is released first. On denial the
    /// field keeps its previous capture, if any, and the error is returned.
    pub async fn open_camera(&mut self, field_id: &str) -> CaptureResult<()> {
        if let Some(prior) = self.fields.get_mut(field_id).and_then(|slot| slot.stream.take()) {
            prior.release("reopened");
        }

        let granted = self.devices.get_user_media(self.constraints).await;
        match granted {
            Ok(stream) => {
                CameraOpened { field_id }.log();
                self.fields.entry(field_id.to_string()).or_default().stream =
                    Some(ActiveStream::new(field_id, stream));
                Ok(())
            }
            Err(e) => {
                CameraAccessDenied {
                    field_id,
                    reason: &e.reason,
                }
                .log();
                Err(CaptureError::PermissionDenied {
                    field_id: field_id.to_string(),
                    reason: e.reason,
                })
            }
        }
    }

    /// Grabs the current frame, stores it as a PNG data URL and releases the
    /// stream. When grabbing or encoding fails the field keeps streaming.
    pub fn capture_image(&mut self, field_id: &str) -> CaptureResult<&CapturedImage> {
        let start_msg = CaptureStarted { field_id };
        let span = start_msg.span("camera_capture");
        let _guard = span.enter();
        start_msg.log();

        let slot = self
            .fields
            .get_mut(field_id)
            .filter(|slot| slot.stream.is_some())
            .ok_or_else(|| CaptureError::NotStreaming(field_id.to_string()))?;

        let image = match slot.stream.as_mut() {
            Some(stream) => {
                let frame = stream.grab_frame()?;
                let png = frame.encode_png()?;
                ImageCaptured {
                    field_id,
                    width: frame.width,
                    height: frame.height,
                    encoded_bytes: png.len(),
                }
                .log();
                CapturedImage {
                    data_url: png_data_url(&png),
                    width: frame.width,
                    height: frame.height,
                }
            }
            None => return Err(CaptureError::NotStreaming(field_id.to_string())),
        };

        if let Some(stream) = slot.stream.take() {
            stream.release("captured");
        }
        Ok(&*slot.captured.insert(image))
    }

    /// Releases the field's stream. Returns whether one was open.
    pub fn close_camera(&mut self, field_id: &str) -> bool {
        match self.fields.get_mut(field_id).and_then(|slot| slot.stream.take()) {
            Some(stream) => {
                stream.release("closed");
                true
            }
            None => false,
        }
    }

    /// Releases every stream and forgets every capture.
    pub fn reset(&mut self) {
        for (_, slot) in self.fields.drain() {
            if let Some(stream) = slot.stream {
                stream.release("reset");
            }
        }
    }
}

impl std::fmt::Debug for CameraScanner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CameraScanner")
            .field("constraints", &self.constraints)
            .field("active_streams", &self.active_streams())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::FacingMode;

    fn stub_scanner() -> (CameraScanner, StubMediaDevices) {
        let devices = StubMediaDevices::new(8, 6, [200, 10, 10, 255]);
        (CameraScanner::new(Arc::new(devices.clone())), devices)
    }

    #[tokio::test]
    async fn test_open_then_close_releases_stream() {
        let (mut scanner, devices) = stub_scanner();

        scanner.open_camera("field-1").await.unwrap();
        assert_eq!(scanner.status("field-1"), CaptureState::Streaming);
        assert_eq!(devices.open_streams(), 1);
        assert_eq!(devices.requests()[0].facing_mode, FacingMode::Environment);

        assert!(scanner.close_camera("field-1"));
        assert_eq!(scanner.status("field-1"), CaptureState::Idle);
        assert_eq!(devices.open_streams(), 0);
        assert!(!scanner.close_camera("field-1"));
    }

    #[tokio::test]
    async fn test_open_then_capture_releases_stream_and_stores_png() {
        let (mut scanner, devices) = stub_scanner();

        scanner.open_camera("field-1").await.unwrap();
        let image = scanner.capture_image("field-1").unwrap().clone();

        assert!(image.data_url.starts_with("data:image/png;base64,"));
        assert!(image.data_url.len() > "data:image/png;base64,".len());
        assert_eq!((image.width, image.height), (8, 6));
        assert_eq!(scanner.status("field-1"), CaptureState::Captured);
        assert_eq!(scanner.active_streams(), 0);
        assert_eq!(devices.open_streams(), 0);
    }

    #[tokio::test]
    async fn test_reopen_releases_prior_stream() {
        let (mut scanner, devices) = stub_scanner();

        scanner.open_camera("field-1").await.unwrap();
        scanner.open_camera("field-1").await.unwrap();
        assert_eq!(devices.open_streams(), 1);
        assert_eq!(devices.requests().len(), 2);
    }

    #[tokio::test]
    async fn test_close_after_recapture_returns_to_previous_capture() {
        let (mut scanner, devices) = stub_scanner();

        scanner.open_camera("field-1").await.unwrap();
        scanner.capture_image("field-1").unwrap();
        scanner.open_camera("field-1").await.unwrap();
        assert_eq!(scanner.status("field-1"), CaptureState::Streaming);

        scanner.close_camera("field-1");
        assert_eq!(scanner.status("field-1"), CaptureState::Captured);
        assert!(scanner.captured("field-1").is_some());
        assert_eq!(devices.open_streams(), 0);
    }

    #[tokio::test]
    async fn test_capture_without_stream() {
        let (mut scanner, _devices) = stub_scanner();
        assert!(matches!(
            scanner.capture_image("field-1"),
            Err(CaptureError::NotStreaming(id)) if id == "field-1"
        ));
    }

    #[tokio::test]
    async fn test_denied_access_keeps_field_idle() {
        let mut scanner = CameraScanner::new(Arc::new(DenyingMediaDevices::default()));

        let err = scanner.open_camera("field-2").await.unwrap_err();
        assert!(matches!(err, CaptureError::PermissionDenied { .. }));
        assert_eq!(scanner.status("field-2"), CaptureState::Idle);
        assert_eq!(scanner.active_streams(), 0);
    }

    #[tokio::test]
    async fn test_drop_and_reset_release_everything() {
        let (mut scanner, devices) = stub_scanner();
        scanner.open_camera("field-1").await.unwrap();
        scanner.open_camera("field-2").await.unwrap();
        assert_eq!(devices.open_streams(), 2);

        scanner.reset();
        assert_eq!(devices.open_streams(), 0);

        scanner.open_camera("field-3").await.unwrap();
        drop(scanner);
        assert_eq!(devices.open_streams(), 0);
    }
}
