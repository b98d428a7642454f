//! # G722-Core: ITU-T G.722 Wideband Codec
//!
//! This library implements the G.722 sub-band ADPCM codec: 16 kHz, 16-bit
//! linear PCM is split by a QMF bank into two sub-bands, each coded by its
//! own adaptive differential coder, and both codewords are packed into one
//! byte per sample pair.
//!
//! ## Features
//!
//! - **Three operating modes**: 64, 56 and 48 kbit/s
//! - **Two byte layouts**: libg722 right-aligned and ITU-T octet order
//! - **Stateful contexts**: streams can be fed in any chunking of sample pairs
//! - **Binding surface**: sentinel-returning handle functions for FFI shims
//!
//! ## Usage
//!
//! ```rust
//! use g722_core::codecs::g722::{G722Config, G722Decoder, G722Encoder, G722Mode};
//!
//! let config = G722Config::default().with_mode(G722Mode::Mode1);
//! let mut encoder = G722Encoder::new(config);
//! let mut decoder = G722Decoder::new(config);
//!
//! let samples = vec![0i16; 320]; // 20ms at 16kHz
//! let encoded = encoder.encode(&samples);
//! assert_eq!(encoded.len(), 160);
//!
//! let decoded = decoder.decode(&encoded);
//! assert_eq!(decoded.len(), 320);
//! ```
//!
//! ## Feature Flags
//!
//! - `g722`: G.722 codec (enabled by default). Without it the crate only
//!   reports the codec as unavailable.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod codecs;
pub mod error;
pub mod types;

// Re-export commonly used types and traits
pub use codecs::{CodecFactory, G722_ENABLED, create_g722};
pub use error::{CodecError, ErrorCategory, Result};
pub use types::{AudioCodec, AudioCodecExt, CodecInfo};

/// Version information for the codec library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Supported codec types
pub const SUPPORTED_CODECS: &[&str] = &[
    #[cfg(feature = "g722")]
    "G722",
];

/// Initialize the codec library
///
/// Installs a `tracing` fmt subscriber if none is set yet and logs the
/// build capabilities. It's safe to call multiple times.
///
/// # Errors
///
/// Currently infallible; the `Result` is kept for API stability.
pub fn init() -> Result<()> {
    // Initialize logging if not already done
    let _ = tracing_subscriber::fmt::try_init();

    tracing::info!("G722-Core v{} initialized", VERSION);
    tracing::info!("Supported codecs: {:?}, g722 enabled: {}", SUPPORTED_CODECS, G722_ENABLED);

    Ok(())
}

/// Get library information
pub fn info() -> LibraryInfo {
    LibraryInfo {
        version: VERSION,
        supported_codecs: SUPPORTED_CODECS.to_vec(),
        g722_enabled: G722_ENABLED,
    }
}

/// Library information structure
#[derive(Debug, Clone)]
pub struct LibraryInfo {
    /// Library version
    pub version: &'static str,
    /// List of supported codec names
    pub supported_codecs: Vec<&'static str>,
    /// Whether the G.722 codec is compiled in
    pub g722_enabled: bool,
}
