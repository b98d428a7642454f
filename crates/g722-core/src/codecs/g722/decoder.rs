//! G.722 decoder context
//!
//! Mirror of the encoder: unpacks each byte, runs both band decoders and
//! merges the reconstructed sub-bands in the receive QMF.

use crate::codecs::g722::band::{BandState, high_band_decode, low_band_decode};
use crate::codecs::g722::config::{G722Config, G722Mode};
use crate::codecs::g722::packing::BitLayout;
use crate::codecs::g722::qmf::FilterBank;
use crate::error::{CodecError, Result};
use tracing::debug;

/// Number of PCM samples produced by decoding `bytes` bytes.
pub const fn decoded_len(bytes: usize) -> usize {
    bytes * 2
}

/// Stateful G.722 decoder for one stream
#[derive(Debug, Clone)]
pub struct G722Decoder {
    config: G722Config,
    layout: BitLayout,
    qmf: FilterBank,
    low_band: BandState,
    high_band: BandState,
}

impl Default for G722Decoder {
    fn default() -> Self {
        Self::new(G722Config::default())
    }
}

impl G722Decoder {
    /// Create a decoder at the start of a stream
    pub fn new(config: G722Config) -> Self {
        debug!(
            "Creating G.722 decoder: {}, packing {:?}",
            config.mode, config.packing
        );

        Self {
            config,
            layout: BitLayout::for_config(&config),
            qmf: FilterBank::new(),
            low_band: BandState::new_low_band(),
            high_band: BandState::new_high_band(),
        }
    }

    /// Create a decoder from a raw bitrate and options bitmask
    pub fn from_raw(bitrate: i64, options: u32) -> Result<Self> {
        Ok(Self::new(G722Config::from_raw(bitrate, options)?))
    }

    /// Configuration this decoder was built with
    pub fn config(&self) -> &G722Config {
        &self.config
    }

    /// Operating mode
    pub fn mode(&self) -> G722Mode {
        self.config.mode
    }

    /// Decode one byte into a sample pair.
    pub fn decode_byte(&mut self, byte: u8) -> (i16, i16) {
        let (low, high) = self.layout.unpack(byte);
        let rl = low_band_decode(&mut self.low_band, low, self.config.mode);
        let rh = high_band_decode(&mut self.high_band, high);
        self.qmf.synthesize(rl, rh)
    }

    /// Decode into a caller-provided buffer and return the samples written.
    ///
    /// Nothing is mutated when `output` is too small.
    pub fn decode_into(&mut self, data: &[u8], output: &mut [i16]) -> Result<usize> {
        let needed = decoded_len(data.len());
        if output.len() < needed {
            return Err(CodecError::BufferTooSmall {
                needed,
                actual: output.len(),
            });
        }

        self.decode_bytes(data, output);
        Ok(needed)
    }

    /// Decode a buffer of bytes, returning `data.len() * 2` samples.
    pub fn decode(&mut self, data: &[u8]) -> Vec<i16> {
        let mut output = vec![0i16; decoded_len(data.len())];
        self.decode_bytes(data, &mut output);
        output
    }

    fn decode_bytes(&mut self, data: &[u8], output: &mut [i16]) {
        for (&byte, pair) in data.iter().zip(output.chunks_exact_mut(2)) {
            let (sample0, sample1) = self.decode_byte(byte);
            pair[0] = sample0;
            pair[1] = sample1;
        }
    }

    /// Return to the start-of-stream state, keeping the configuration.
    pub fn reset(&mut self) {
        self.qmf.reset();
        self.low_band.reset();
        self.high_band.reset();
        debug!("G.722 decoder reset");
    }

    /// Low-band decoder state
    pub fn low_band(&self) -> &BandState {
        &self.low_band
    }

    /// High-band decoder state
    pub fn high_band(&self) -> &BandState {
        &self.high_band
    }

    /// Receive filter state
    pub fn filter_bank(&self) -> &FilterBank {
        &self.qmf
    }
}
