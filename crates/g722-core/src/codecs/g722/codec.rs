//! G.722 codec object
//!
//! Bundles one encoder and one decoder built from the same configuration
//! behind the crate-wide [`AudioCodec`] trait.

use crate::codecs::g722::config::{G722Config, G722Mode};
use crate::codecs::g722::decoder::{G722Decoder, decoded_len};
use crate::codecs::g722::encoder::{G722Encoder, encoded_len};
use crate::error::{CodecError, Result};
use crate::types::{AudioCodec, AudioCodecExt, CodecInfo};
use tracing::{debug, trace};

/// G.722 sample rate in Hz
pub const G722_SAMPLE_RATE: u32 = 16000;

/// Nominal frame size in samples (20 ms at 16 kHz)
pub const G722_FRAME_SIZE: usize = 320;

/// RTP static payload type for G.722
pub const G722_PAYLOAD_TYPE: u8 = 9;

/// G.722 codec with a paired encoder and decoder
///
/// # Example
/// ```
/// use g722_core::codecs::g722::G722Codec;
/// use g722_core::AudioCodec;
///
/// let mut codec = G722Codec::new_with_bitrate(64000)?;
///
/// let samples = vec![0i16; 320];
/// let encoded = codec.encode(&samples)?;
/// assert_eq!(encoded.len(), 160);
///
/// let decoded = codec.decode(&encoded)?;
/// assert_eq!(decoded.len(), 320);
/// # Ok::<(), g722_core::CodecError>(())
/// ```
#[derive(Debug, Clone)]
pub struct G722Codec {
    config: G722Config,
    encoder: G722Encoder,
    decoder: G722Decoder,
}

impl G722Codec {
    /// Create a codec from a configuration
    pub fn new(config: G722Config) -> Self {
        debug!("Creating G.722 codec: {}, packing {:?}", config.mode, config.packing);
        Self {
            config,
            encoder: G722Encoder::new(config),
            decoder: G722Decoder::new(config),
        }
    }

    /// Create a codec for a bitrate with default packing
    pub fn new_with_bitrate(bitrate: i64) -> Result<Self> {
        Ok(Self::new(G722Config::default().with_mode(G722Mode::from_bitrate(bitrate)?)))
    }

    /// Create a codec from a raw bitrate and options bitmask
    pub fn from_raw(bitrate: i64, options: u32) -> Result<Self> {
        Ok(Self::new(G722Config::from_raw(bitrate, options)?))
    }

    /// Configuration shared by encoder and decoder
    pub fn config(&self) -> &G722Config {
        &self.config
    }

    /// Operating mode
    pub fn mode(&self) -> G722Mode {
        self.config.mode
    }

    /// Encoder half
    pub fn encoder(&self) -> &G722Encoder {
        &self.encoder
    }

    /// Decoder half
    pub fn decoder(&self) -> &G722Decoder {
        &self.decoder
    }

    /// Compressed size relative to 16-bit PCM
    pub fn compression_ratio(&self) -> f32 {
        f32::from(self.config.mode.bits_per_sample()) / 32.0
    }

    fn check_pairs(samples: &[i16]) -> Result<()> {
        if samples.len() % 2 != 0 {
            return Err(CodecError::InvalidLength {
                multiple: 2,
                actual: samples.len(),
            });
        }
        Ok(())
    }
}

impl Default for G722Codec {
    fn default() -> Self {
        Self::new(G722Config::default())
    }
}

impl AudioCodec for G722Codec {
    fn encode(&mut self, samples: &[i16]) -> Result<Vec<u8>> {
        Self::check_pairs(samples)?;

        let output = self.encoder.encode(samples);
        trace!("G.722 encoded {} samples to {} bytes", samples.len(), output.len());
        Ok(output)
    }

    fn decode(&mut self, data: &[u8]) -> Result<Vec<i16>> {
        let output = self.decoder.decode(data);
        trace!("G.722 decoded {} bytes to {} samples", data.len(), output.len());
        Ok(output)
    }

    fn info(&self) -> CodecInfo {
        CodecInfo {
            name: "G.722",
            sample_rate: G722_SAMPLE_RATE,
            channels: 1,
            bitrate: self.config.mode.bitrate(),
            frame_size: G722_FRAME_SIZE,
            payload_type: Some(G722_PAYLOAD_TYPE),
        }
    }

    fn reset(&mut self) -> Result<()> {
        self.encoder.reset();
        self.decoder.reset();
        debug!("G.722 codec reset");
        Ok(())
    }

    fn frame_size(&self) -> usize {
        G722_FRAME_SIZE
    }

    fn supports_variable_frame_size(&self) -> bool {
        true
    }
}

impl AudioCodecExt for G722Codec {
    fn encode_to_buffer(&mut self, samples: &[i16], output: &mut [u8]) -> Result<usize> {
        Self::check_pairs(samples)?;
        let written = self.encoder.encode_into(samples, output)?;
        trace!("G.722 encoded {} samples to {} bytes (zero-alloc)", samples.len(), written);
        Ok(written)
    }

    fn decode_to_buffer(&mut self, data: &[u8], output: &mut [i16]) -> Result<usize> {
        let written = self.decoder.decode_into(data, output)?;
        trace!("G.722 decoded {} bytes to {} samples (zero-alloc)", data.len(), written);
        Ok(written)
    }

    fn max_encoded_size(&self, input_samples: usize) -> usize {
        encoded_len(input_samples)
    }

    fn max_decoded_size(&self, input_bytes: usize) -> usize {
        decoded_len(input_bytes)
    }
}
