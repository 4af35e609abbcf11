//! In-process media backends for tests, demos and hosts without a camera.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::capture::Frame;
use crate::traits::{MediaAccessError, MediaDevices, MediaStream, VideoConstraints};

/// Grants every request with a stream of solid-colour frames and counts the
/// streams that are still open.
#[derive(Clone)]
pub struct StubMediaDevices {
    frame: Frame,
    open: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<VideoConstraints>>>,
}

impl StubMediaDevices {
    pub fn new(width: u32, height: u32, color: [u8; 4]) -> Self {
        Self {
            frame: Frame::solid(width, height, color),
            open: Arc::new(AtomicUsize::new(0)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Streams granted and not yet stopped
    pub fn open_streams(&self) -> usize {
        self.open.load(Ordering::SeqCst)
    }

    /// Constraints of every request so far, oldest first
    pub fn requests(&self) -> Vec<VideoConstraints> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

impl Default for StubMediaDevices {
    fn default() -> Self {
        Self::new(64, 48, [40, 120, 200, 255])
    }
}

#[async_trait]
impl MediaDevices for StubMediaDevices {
    async fn get_user_media(
        &self,
        constraints: VideoConstraints,
    ) -> Result<Box<dyn MediaStream>, MediaAccessError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(constraints);
        }
        self.open.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(StubStream {
            frame: self.frame.clone(),
            open: self.open.clone(),
            stopped: false,
        }))
    }
}

struct StubStream {
    frame: Frame,
    open: Arc<AtomicUsize>,
    stopped: bool,
}

impl MediaStream for StubStream {
    fn grab_frame(&mut self) -> anyhow::Result<Frame> {
        if self.stopped {
            anyhow::bail!("stream already stopped");
        }
        Ok(self.frame.clone())
    }

    fn stop(&mut self) {
        if !self.stopped {
            self.stopped = true;
            self.open.fetch_sub(1, Ordering::SeqCst);
        }
    }
}

/// Refuses every request, like a user dismissing the permission prompt.
#[derive(Debug, Clone)]
pub struct DenyingMediaDevices {
    reason: String,
}

impl DenyingMediaDevices {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl Default for DenyingMediaDevices {
    fn default() -> Self {
        Self::new("NotAllowedError: Permission denied")
    }
}

#[async_trait]
impl MediaDevices for DenyingMediaDevices {
    async fn get_user_media(
        &self,
        _constraints: VideoConstraints,
    ) -> Result<Box<dyn MediaStream>, MediaAccessError> {
        Err(MediaAccessError::new(self.reason.clone()))
    }
}
