//! Error handling for the codec library
//!
//! Every fallible operation in the crate returns [`CodecError`]. The DSP
//! itself never fails (it saturates), so errors only come from configuration,
//! buffer contracts and build-time capabilities.

#![allow(missing_docs)]

use std::fmt;
use thiserror::Error;

/// Result type alias for codec operations
pub type Result<T> = std::result::Result<T, CodecError>;

/// Error type for codec operations
#[derive(Error, Debug)]
pub enum CodecError {
    /// Invalid codec configuration
    #[error("Invalid codec configuration: {details}")]
    InvalidConfig { details: String },

    /// Bitrate that does not map to a G.722 operating mode
    #[error("Invalid bitrate: {bitrate}bps (supported: {supported:?})")]
    InvalidBitrate { bitrate: i64, supported: Vec<u32> },

    /// Options bitmask containing unknown or unsupported flags
    #[error("Unsupported options: {options:#06x} ({reason})")]
    UnsupportedOptions { options: u32, reason: &'static str },

    /// Input length that violates the pairing contract
    #[error("Invalid input length: {actual} is not a multiple of {multiple}")]
    InvalidLength { multiple: usize, actual: usize },

    /// Caller supplied buffer is too small for the output
    #[error("Buffer too small: need {needed} elements, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    /// Feature not enabled
    #[error("Feature not enabled: {feature} (enable with --features {feature})")]
    FeatureNotEnabled { feature: String },

    /// I/O operation failed
    #[error("I/O operation failed: {reason}")]
    IoError { reason: String },
}

impl CodecError {
    /// Create a new invalid configuration error
    pub fn invalid_config(details: impl Into<String>) -> Self {
        Self::InvalidConfig {
            details: details.into(),
        }
    }

    /// Create a new feature not enabled error
    pub fn feature_not_enabled(feature: impl Into<String>) -> Self {
        Self::FeatureNotEnabled {
            feature: feature.into(),
        }
    }

    /// Check if this error is recoverable
    ///
    /// Configuration problems are permanent for the value that caused them;
    /// buffer and length problems go away with a corrected call.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::InvalidConfig { .. }
            | Self::InvalidBitrate { .. }
            | Self::UnsupportedOptions { .. }
            | Self::FeatureNotEnabled { .. } => false,

            Self::InvalidLength { .. }
            | Self::BufferTooSmall { .. }
            | Self::IoError { .. } => true,
        }
    }

    /// Get the error category
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidConfig { .. }
            | Self::InvalidBitrate { .. }
            | Self::UnsupportedOptions { .. }
            | Self::FeatureNotEnabled { .. } => ErrorCategory::Configuration,

            Self::InvalidLength { .. } => ErrorCategory::Processing,

            Self::BufferTooSmall { .. } => ErrorCategory::Memory,

            Self::IoError { .. } => ErrorCategory::Io,
        }
    }
}

/// Error category for grouping related errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Configuration and parameter errors
    Configuration,
    /// Audio processing errors
    Processing,
    /// Buffer sizing errors
    Memory,
    /// I/O related errors
    Io,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration => write!(f, "Configuration"),
            Self::Processing => write!(f, "Processing"),
            Self::Memory => write!(f, "Memory"),
            Self::Io => write!(f, "I/O"),
        }
    }
}

/// Convert from I/O errors
impl From<std::io::Error> for CodecError {
    fn from(error: std::io::Error) -> Self {
        Self::IoError {
            reason: error.to_string(),
        }
    }
}
