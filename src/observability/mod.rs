// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! This module provides centralized message types for all diagnostic and
//! operational logging in the form builder, renderer and capture utility.
//! Message types follow a struct-based pattern with `Display` so that log
//! text is not scattered across call sites as magic strings.
//!
//! # Usage
//!
//! ```rust
//! use dynamic_forms::observability::messages::capture::CameraAccessDenied;
//!
//! let msg = CameraAccessDenied {
//!     field_id: "field-3",
//!     reason: "NotAllowedError",
//! };
//!
//! tracing::warn!("{}", msg);
//! ```

pub mod messages;

/// Installs a `tracing-subscriber` fmt layer filtered by `RUST_LOG`.
///
/// Falls back to `info` when `RUST_LOG` is unset. Calling it twice is harmless;
/// the second call is ignored.
pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}
