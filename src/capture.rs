//! Frame capture and screenshot encoding
//!
//! The backend hands back raw pixels; this module turns them into PNG
//! files. Capture failures are boundary errors: the game loop logs them
//! and keeps running, they are never fatal.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use thiserror::Error;

use crate::backend::FrameCapture;

/// Errors from frame capture and screenshot encoding
#[derive(Debug, Error)]
pub enum CaptureError {
    /// The backend cannot produce pixel buffers.
    #[error("backend does not support frame capture")]
    Unsupported,
    /// The backend reported an implementation-specific failure.
    #[error("frame capture failed: {0}")]
    Backend(String),
    /// Pixel buffer length does not match the reported dimensions.
    #[error("capture buffer is {actual} bytes, expected {expected} for {width}x{height}")]
    BufferMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
    #[error("failed to encode screenshot")]
    Encode(#[from] image::ImageError),
    #[error("failed to write screenshot")]
    Io(#[from] std::io::Error),
}

/// Builds timestamped screenshot paths under a directory
#[derive(Debug, Clone)]
pub struct CapturePathBuilder {
    pub directory: PathBuf,
    pub prefix: String,
}

impl Default for CapturePathBuilder {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("screenshots"),
            prefix: String::new(),
        }
    }
}

impl CapturePathBuilder {
    /// Path for a capture labeled `label`: `<dir>/<prefix><millis>_<label>.png`
    /// with anything outside `[A-Za-z0-9_-]` in the label replaced by `_`.
    pub fn build(&self, label: &str) -> PathBuf {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        let safe: String = label
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.directory
            .join(format!("{}{stamp}_{safe}.png", self.prefix))
    }
}

/// Encode a captured frame as PNG at `path`, creating parent directories
pub fn save_capture(frame: &FrameCapture, path: &Path) -> Result<(), CaptureError> {
    let expected = frame.expected_len();
    if frame.pixels.len() != expected {
        return Err(CaptureError::BufferMismatch {
            width: frame.width,
            height: frame.height,
            expected,
            actual: frame.pixels.len(),
        });
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let img = image::RgbaImage::from_raw(frame.width, frame.height, frame.pixels.clone())
        .ok_or(CaptureError::BufferMismatch {
            width: frame.width,
            height: frame.height,
            expected,
            actual: frame.pixels.len(),
        })?;
    img.save_with_format(path, image::ImageFormat::Png)?;
    log::info!("saved screenshot {}", path.display());
    Ok(())
}
