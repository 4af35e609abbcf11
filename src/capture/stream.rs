// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::capture::Frame;
use crate::errors::{CaptureError, CaptureResult};
use crate::observability::messages::capture::StreamReleased;
use crate::observability::messages::StructuredLog;
use crate::traits::MediaStream;

/// Owns a host stream for one scanner field and stops its tracks when
/// released or dropped, whichever comes first.
pub struct ActiveStream {
    field_id: String,
    stream: Box<dyn MediaStream>,
    stopped: bool,
}

impl ActiveStream {
    pub fn new(field_id: impl Into<String>, stream: Box<dyn MediaStream>) -> Self {
        Self {
            field_id: field_id.into(),
            stream,
            stopped: false,
        }
    }

    pub fn field_id(&self) -> &str {
        &self.field_id
    }

    pub fn grab_frame(&mut self) -> CaptureResult<Frame> {
        if self.stopped {
            return Err(CaptureError::NotStreaming(self.field_id.clone()));
        }
        self.stream.grab_frame().map_err(CaptureError::FrameGrab)
    }

    /// Stops the stream now, recording why.
    pub fn release(mut self, reason: &str) {
        self.stop(reason);
    }

    fn stop(&mut self, reason: &str) {
        if self.stopped {
            return;
        }
        self.stream.stop();
        self.stopped = true;
        StreamReleased {
            field_id: &self.field_id,
            reason,
        }
        .log();
    }
}

impl Drop for ActiveStream {
    fn drop(&mut self) {
        self.stop("dropped");
    }
}

impl std::fmt::Debug for ActiveStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActiveStream")
            .field("field_id", &self.field_id)
            .field("stopped", &self.stopped)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct CountingStream {
        stops: Arc<AtomicUsize>,
    }

    impl MediaStream for CountingStream {
        fn grab_frame(&mut self) -> anyhow::Result<Frame> {
            Ok(Frame::solid(2, 2, [1, 2, 3, 255]))
        }

        fn stop(&mut self) {
            self.stops.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn counting() -> (ActiveStream, Arc<AtomicUsize>) {
        let stops = Arc::new(AtomicUsize::new(0));
        let stream = ActiveStream::new(
            "field-1",
            Box::new(CountingStream {
                stops: stops.clone(),
            }),
        );
        (stream, stops)
    }

    #[test]
    fn test_drop_stops_tracks() {
        let (stream, stops) = counting();
        drop(stream);
        assert_eq!(stops.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_release_stops_exactly_once() {
        let (mut stream, stops) = counting();
        assert_eq!(stream.grab_frame().unwrap().width, 2);
        stream.release("closed");
        assert_eq!(stops.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_stops_on_early_return() {
        let (stream, stops) = counting();
        let fails = move || -> CaptureResult<()> {
            let _guard = stream;
            Err(CaptureError::MediaUnavailable)
        };
        assert!(fails().is_err());
        assert_eq!(stops.load(Ordering::SeqCst), 1);
    }
}
