//! G.722 QMF (Quadrature Mirror Filter) bank
//!
//! The transmit filter splits 16 kHz PCM into a low and a high sub-band at
//! 8 kHz; the receive filter merges two reconstructed sub-band signals back.
//! Both use the same 24-tap symmetric impulse response, split into its even
//! and odd polyphase branches.

use crate::codecs::g722::band::{RECONSTRUCT_MAX, RECONSTRUCT_MIN, saturate};
use crate::codecs::g722::tables::{QMF_COEFFS, QMF_TAPS};

/// Delay line of one QMF filter
///
/// The newest sample pair sits at the end of the line. Each call shifts the
/// line by exactly one pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterBank {
    delay: [i32; QMF_TAPS],
}

impl Default for FilterBank {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterBank {
    /// Create a filter with a silent delay line
    pub fn new() -> Self {
        Self {
            delay: [0; QMF_TAPS],
        }
    }

    /// Clear the delay line
    pub fn reset(&mut self) {
        self.delay = [0; QMF_TAPS];
    }

    /// Current delay line contents, oldest first
    pub fn delay_line(&self) -> &[i32; QMF_TAPS] {
        &self.delay
    }

    fn push_pair(&mut self, first: i32, second: i32) {
        self.delay.copy_within(2.., 0);
        self.delay[QMF_TAPS - 2] = first;
        self.delay[QMF_TAPS - 1] = second;
    }

    /// Correlate the delay line with the even and odd filter branches.
    fn branches(&self) -> (i32, i32) {
        let mut even = 0;
        let mut odd = 0;
        for (pair, taps) in self.delay.chunks_exact(2).zip(QMF_COEFFS.chunks_exact(2)) {
            even += pair[0] * taps[0];
            odd += pair[1] * taps[1];
        }
        (even, odd)
    }

    /// Transmit QMF: consume two consecutive PCM samples, return `(low, high)`.
    pub fn analyze(&mut self, sample0: i16, sample1: i16) -> (i32, i32) {
        self.push_pair(i32::from(sample0), i32::from(sample1));
        let (even, odd) = self.branches();
        ((odd + even) >> 14, (odd - even) >> 14)
    }

    /// Receive QMF: consume one low-band and one high-band value, return two
    /// consecutive PCM samples.
    ///
    /// Both inputs are clamped to the reconstructed band range first.
    pub fn synthesize(&mut self, low: i32, high: i32) -> (i16, i16) {
        let low = low.clamp(RECONSTRUCT_MIN, RECONSTRUCT_MAX);
        let high = high.clamp(RECONSTRUCT_MIN, RECONSTRUCT_MAX);
        self.push_pair(low + high, low - high);
        let (even, odd) = self.branches();
        (to_pcm(odd >> 11), to_pcm(even >> 11))
    }
}

#[inline]
fn to_pcm(value: i32) -> i16 {
    // saturate() bounds the value to the i16 range
    saturate(value) as i16
}
