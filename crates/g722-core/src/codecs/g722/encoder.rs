//! G.722 encoder context
//!
//! Owns the transmit QMF delay line and both band coders of one stream.
//! Every call continues the stream where the previous one stopped.

use crate::codecs::g722::band::{BandState, high_band_encode, low_band_encode};
use crate::codecs::g722::config::{G722Config, G722Mode};
use crate::codecs::g722::packing::BitLayout;
use crate::codecs::g722::qmf::FilterBank;
use crate::error::{CodecError, Result};
use tracing::{debug, trace};

/// Number of bytes produced by encoding `samples` PCM samples.
///
/// An odd trailing sample produces nothing.
pub const fn encoded_len(samples: usize) -> usize {
    samples / 2
}

/// Stateful G.722 encoder for one stream
#[derive(Debug, Clone)]
pub struct G722Encoder {
    config: G722Config,
    layout: BitLayout,
    qmf: FilterBank,
    low_band: BandState,
    high_band: BandState,
}

impl Default for G722Encoder {
    fn default() -> Self {
        Self::new(G722Config::default())
    }
}

impl G722Encoder {
    /// Create an encoder at the start of a stream
    pub fn new(config: G722Config) -> Self {
        debug!(
            "Creating G.722 encoder: {}, packing {:?}",
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

    /// Create an encoder from a raw bitrate and options bitmask
    pub fn from_raw(bitrate: i64, options: u32) -> Result<Self> {
        Ok(Self::new(G722Config::from_raw(bitrate, options)?))
    }

    /// Configuration this encoder was built with
    pub fn config(&self) -> &G722Config {
        &self.config
    }

    /// Operating mode
    pub fn mode(&self) -> G722Mode {
        self.config.mode
    }

    /// Encode one sample pair into one byte.
    pub fn encode_pair(&mut self, sample0: i16, sample1: i16) -> u8 {
        let (xl, xh) = self.qmf.analyze(sample0, sample1);
        let low = low_band_encode(&mut self.low_band, xl, self.config.mode);
        let high = high_band_encode(&mut self.high_band, xh);
        self.layout.pack(low, high)
    }

    /// Encode into a caller-provided buffer and return the bytes written.
    ///
    /// Sample pairs are consumed in order. An odd trailing sample is dropped
    /// and never reaches the filter bank, so the next call starts a fresh
    /// pair. Nothing is mutated when `output` is too small.
    pub fn encode_into(&mut self, samples: &[i16], output: &mut [u8]) -> Result<usize> {
        let needed = encoded_len(samples.len());
        if output.len() < needed {
            return Err(CodecError::BufferTooSmall {
                needed,
                actual: output.len(),
            });
        }

        self.encode_pairs(samples, output);
        Ok(needed)
    }

    /// Encode a buffer of samples, returning `samples.len() / 2` bytes.
    pub fn encode(&mut self, samples: &[i16]) -> Vec<u8> {
        let mut output = vec![0u8; encoded_len(samples.len())];
        self.encode_pairs(samples, &mut output);
        output
    }

    fn encode_pairs(&mut self, samples: &[i16], output: &mut [u8]) {
        let pairs = samples.chunks_exact(2);
        if !pairs.remainder().is_empty() {
            trace!("G.722 encoder dropping odd trailing sample ({} samples in)", samples.len());
        }
        for (pair, byte) in pairs.zip(output.iter_mut()) {
            *byte = self.encode_pair(pair[0], pair[1]);
        }
    }

    /// Return to the start-of-stream state, keeping the configuration.
    pub fn reset(&mut self) {
        self.qmf.reset();
        self.low_band.reset();
        self.high_band.reset();
        debug!("G.722 encoder reset");
    }

    /// Low-band coder state
    pub fn low_band(&self) -> &BandState {
        &self.low_band
    }

    /// High-band coder state
    pub fn high_band(&self) -> &BandState {
        &self.high_band
    }

    /// Transmit filter state
    pub fn filter_bank(&self) -> &FilterBank {
        &self.qmf
    }
}
