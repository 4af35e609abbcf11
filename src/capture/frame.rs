// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{ImageFormat, RgbaImage};
use std::io::Cursor;

use crate::config::consts::PNG_DATA_URL_PREFIX;
use crate::errors::{CaptureError, CaptureResult};

/// One still video frame, straight RGBA8, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl Frame {
    pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> Self {
        Self {
            width,
            height,
            rgba,
        }
    }

    /// A frame filled with a single colour.
    pub fn solid(width: u32, height: u32, color: [u8; 4]) -> Self {
        let pixels = width as usize * height as usize;
        Self::new(width, height, color.repeat(pixels))
    }

    pub fn expected_len(&self) -> usize {
        self.width as usize * self.height as usize * 4
    }

    /// Encodes the frame as PNG at its native size.
    pub fn encode_png(&self) -> CaptureResult<Vec<u8>> {
        let invalid = || CaptureError::InvalidFrame {
            width: self.width,
            height: self.height,
            expected: self.expected_len(),
            actual: self.rgba.len(),
        };

        if self.width == 0 || self.height == 0 {
            return Err(invalid());
        }

        let img = RgbaImage::from_raw(self.width, self.height, self.rgba.clone()).ok_or_else(invalid)?;

        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }

    /// `data:image/png;base64,...` for the encoded frame.
    pub fn to_data_url(&self) -> CaptureResult<String> {
        Ok(png_data_url(&self.encode_png()?))
    }
}

pub fn png_data_url(png: &[u8]) -> String {
    format!("{}{}", PNG_DATA_URL_PREFIX, STANDARD.encode(png))
}
