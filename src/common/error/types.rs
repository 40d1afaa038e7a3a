//! Unified error types for rtlscribe.
//!
//! Packaging and markup errors from the `ooxml` layer are folded into this type
//! so callers of the document builder only ever see one error enum.
use thiserror::Error;

/// Main error type for rtlscribe operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Raw input could not be interpreted as text
    #[error("Input encoding error: {0}")]
    InputEncoding(String),

    /// The document model could not be serialized to its container form
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// XML generation or inspection error
    #[error("XML error: {0}")]
    XmlError(String),

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    ZipError(String),

    /// Invalid formatting policy
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Inbound chat update could not be decoded
    #[error("Invalid update: {0}")]
    InvalidUpdate(String),

    /// Outbound delivery failed
    #[error("Delivery error: {0}")]
    Delivery(String),
}

/// Result type for rtlscribe operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Whether this error means no document could be produced.
    ///
    /// Update decoding happens before a build starts and delivery errors
    /// after a valid artifact already exists; every other variant aborts the build.
    pub fn is_build_failure(&self) -> bool {
        !matches!(self, Self::Delivery(_) | Self::InvalidUpdate(_))
    }
}
