//! # Error Types
//!
//! This module defines the error type shared by every stage of the encoder.
//! Errors fall into four categories that callers can branch on through
//! [`EncoderError::kind`].

use thiserror::Error;

/// Main error type for encoder operations
#[derive(Debug, Error)]
pub enum EncoderError {
    /// The engine could not be set up or an output could not be produced
    #[error("General error: {0}")]
    General(String),

    /// A setter value or the AI data is invalid
    #[error("{0}")]
    Parameter(String),

    /// A symbology-specific build step failed
    #[error("{0}")]
    Encode(String),

    /// Scan data input is malformed
    #[error("{0}")]
    ScanData(String),

    /// Image container encoding error
    #[error("Image error: {0}")]
    Image(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error category, as seen by callers that only care about the class of failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    General,
    Parameter,
    Encode,
    ScanData,
}

impl EncoderError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EncoderError::Parameter(_) => ErrorKind::Parameter,
            EncoderError::Encode(_) => ErrorKind::Encode,
            EncoderError::ScanData(_) => ErrorKind::ScanData,
            EncoderError::General(_) | EncoderError::Image(_) | EncoderError::Io(_) => {
                ErrorKind::General
            }
        }
    }

    pub(crate) fn param(msg: impl Into<String>) -> Self {
        EncoderError::Parameter(msg.into())
    }

    pub(crate) fn encode(msg: impl Into<String>) -> Self {
        EncoderError::Encode(msg.into())
    }

    pub(crate) fn scan(msg: impl Into<String>) -> Self {
        EncoderError::ScanData(msg.into())
    }
}

impl From<image::ImageError> for EncoderError {
    fn from(e: image::ImageError) -> Self {
        EncoderError::Image(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, EncoderError>;
