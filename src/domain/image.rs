//! Opaque handle to a captured product photo.
//!
//! The capture collaborator (camera, file picker, test fixture) hands the
//! client a [`ImageHandle`]; the client never inspects the pixels, it only
//! forwards the bytes as a JPEG upload.

use crate::domain::error::{NutriError, Result};
use bytes::Bytes;
use std::path::Path;

/// MIME type attached to every uploaded capture.
pub const JPEG_MIME: &str = "image/jpeg";

/// Captured image bytes plus the file name and MIME type used for upload.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageHandle {
    bytes: Bytes,
    file_name: String,
}

impl ImageHandle {
    /// Wraps captured bytes, naming the upload `photo_<unix millis>.jpg`.
    ///
    /// # Errors
    ///
    /// Returns [`NutriError::EmptyImage`] if no bytes were captured.
    pub fn new(bytes: impl Into<Bytes>) -> Result<Self> {
        let file_name = format!("photo_{}.jpg", chrono::Utc::now().timestamp_millis());
        Self::with_file_name(bytes, file_name)
    }

    /// Wraps captured bytes under an explicit upload file name.
    ///
    /// # Errors
    ///
    /// Returns [`NutriError::EmptyImage`] if no bytes were captured.
    pub fn with_file_name(bytes: impl Into<Bytes>, file_name: impl Into<String>) -> Result<Self> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Err(NutriError::EmptyImage);
        }
        Ok(Self {
            bytes,
            file_name: file_name.into(),
        })
    }

    /// Reads a capture saved on disk.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, or
    /// [`NutriError::EmptyImage`] if it is empty.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        tracing::debug!(path = %path.display(), size = bytes.len(), "captured image loaded");
        Self::new(bytes)
    }

    #[must_use]
    pub const fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    #[must_use]
    pub const fn mime(&self) -> &'static str {
        JPEG_MIME
    }
}

impl std::fmt::Debug for ImageHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageHandle")
            .field("file_name", &self.file_name)
            .field("size", &self.bytes.len())
            .finish()
    }
}
