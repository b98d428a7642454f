//! G.722 Wideband Audio Codec Implementation
//!
//! This module implements the ITU-T G.722 sub-band ADPCM codec: 16 kHz
//! linear PCM in, one byte per sample pair out, at 64, 56 or 48 kbit/s.
//!
//! # Architecture
//!
//! The implementation is split into several modules:
//! - `tables`: Filter coefficients, quantizer and adaptation tables
//! - `band`: Adaptive quantizer and predictor shared by both sub-bands
//! - `qmf`: QMF analysis and synthesis filter bank
//! - `packing`: Codeword placement inside the output byte
//! - `config`: Operating mode and packing option
//! - `encoder` / `decoder`: Per-stream contexts
//! - `codec`: [`AudioCodec`](crate::AudioCodec) implementation
//! - `handle`: Sentinel-returning surface for binding layers
//!
//! # Reference
//!
//! Arithmetic follows ITU-T G.722 (09/2012) and is bit-compatible with the
//! widely deployed spandsp / libg722 implementations.

pub mod band;
pub mod codec;
pub mod config;
pub mod decoder;
pub mod encoder;
pub mod handle;
pub mod packing;
pub mod qmf;
pub mod tables;

#[cfg(test)]
mod tests;

// Re-export the main codec types
pub use codec::G722Codec;
pub use config::{G722Config, G722Mode, PackingOption};
pub use decoder::{G722Decoder, decoded_len};
pub use encoder::{G722Encoder, encoded_len};

// Re-export key state types
pub use band::BandState;
pub use packing::BitLayout;
pub use qmf::FilterBank;
