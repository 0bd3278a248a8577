//! Error types for the NutriSearch client.
//!
//! [`NutriError`] covers the failures that are allowed to surface as Rust errors.
//! Transport and server failures are deliberately absent: the transport layer
//! absorbs those into the response envelope's `error` status (see
//! [`crate::transport::failure`]), so they never cross into application code as
//! `Err` values.

use thiserror::Error;

/// The main error type for NutriSearch operations.
///
/// # Examples
///
/// ```
/// use nutrisearch::NutriError;
///
/// fn validate_url(url: &str) -> Result<(), NutriError> {
///     if url.is_empty() {
///         return Err(NutriError::Config("api_url must not be empty".to_string()));
///     }
///     Ok(())
/// }
/// assert!(validate_url("").is_err());
/// ```
#[derive(Debug, Error)]
pub enum NutriError {
    /// Configuration is invalid or missing.
    ///
    /// Raised for an unparsable base URL, or an unreadable/invalid TOML
    /// configuration file.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Typically reading a captured image or a configuration file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// The service answered with a success status but a body that does not
    /// match the expected envelope shape.
    #[error("Malformed response from {context}: {source}")]
    Decode {
        /// Transport operation that received the body.
        context: &'static str,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The image capture produced no bytes.
    #[error("Captured image is empty")]
    EmptyImage,
}

/// A specialized `Result` type for NutriSearch operations.
pub type Result<T> = std::result::Result<T, NutriError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_error_names_the_operation() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = NutriError::Decode { context: "searchFoodByName", source };
        assert!(err.to_string().starts_with("Malformed response from searchFoodByName:"));
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "photo.jpg");
        let err: NutriError = io.into();
        assert!(matches!(err, NutriError::Io(_)));
    }
}
