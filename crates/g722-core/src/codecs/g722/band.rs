//! G.722 band coder: adaptive quantizer plus pole/zero predictor
//!
//! One [`BandState`] exists per sub-band and per direction. The encoder and
//! the decoder run exactly the same adaptation on the same inputs, which is
//! what keeps a decoder in step with an encoder it never sees.
//!
//! The sub-band specific parts (quantizer, inverse quantizer, scale factor
//! increments) live in the `low_band_*` and `high_band_*` functions; the
//! shared part (scale factor and predictor update) lives on [`BandState`].

use crate::codecs::g722::config::G722Mode;
use crate::codecs::g722::tables::*;

/// Saturate to the 16-bit signed range.
#[inline]
pub fn saturate(value: i32) -> i32 {
    value.clamp(i32::from(i16::MIN), i32::from(i16::MAX))
}

/// Lower bound of a reconstructed band signal.
pub const RECONSTRUCT_MIN: i32 = -16384;
/// Upper bound of a reconstructed band signal.
pub const RECONSTRUCT_MAX: i32 = 16383;

/// Highest supported zero-section order.
pub const MAX_ZERO_ORDER: usize = 6;

/// Per-band constants of the band coder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandParams {
    /// Quantizer step size at stream start
    pub initial_step: i32,
    /// Upper bound of the logarithmic scale factor
    pub max_log_scale: i32,
    /// Exponent bias used when converting the log scale factor to a step
    pub scale_bias: i32,
    /// Number of zero-section taps (at most [`MAX_ZERO_ORDER`])
    pub zero_order: usize,
}

/// Low-band parameters: 2 poles, 6 zeros.
pub const LOW_BAND: BandParams = BandParams {
    initial_step: 32,
    max_log_scale: 18432,
    scale_bias: 8,
    zero_order: 6,
};

/// High-band parameters: 2 poles, 6 zeros (see DESIGN.md on the order).
pub const HIGH_BAND: BandParams = BandParams {
    initial_step: 8,
    max_log_scale: 22528,
    scale_bias: 10,
    zero_order: 6,
};

/// Adaptive state of one sub-band
///
/// Histories are indexed `[current, previous, ...]`; index 0 of the
/// coefficient arrays is unused so that `a[1]`, `b[1]` read like the
/// recommendation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BandState {
    params: BandParams,
    /// Signal estimate for the next sample (pole + zero output)
    estimate: i32,
    /// Zero-section output, kept for the partial reconstruction
    zero_output: i32,
    /// Reconstructed signal history
    reconstructed: [i32; 3],
    /// Partially reconstructed signal history (zero output + difference)
    partial: [i32; 3],
    /// Pole coefficients a1, a2
    poles: [i32; 3],
    /// Quantized difference history
    diffs: [i32; MAX_ZERO_ORDER + 1],
    /// Zero coefficients b1..b6
    zeros: [i32; MAX_ZERO_ORDER + 1],
    /// Logarithmic scale factor
    log_scale: i32,
    /// Linear quantizer step size derived from `log_scale`
    step: i32,
}

impl BandState {
    /// Create a band state with the given parameters
    pub fn new(params: BandParams) -> Self {
        debug_assert!(params.zero_order <= MAX_ZERO_ORDER);
        Self {
            params,
            estimate: 0,
            zero_output: 0,
            reconstructed: [0; 3],
            partial: [0; 3],
            poles: [0; 3],
            diffs: [0; MAX_ZERO_ORDER + 1],
            zeros: [0; MAX_ZERO_ORDER + 1],
            log_scale: 0,
            step: params.initial_step,
        }
    }

    /// Fresh low-band state
    pub fn new_low_band() -> Self {
        Self::new(LOW_BAND)
    }

    /// Fresh high-band state
    pub fn new_high_band() -> Self {
        Self::new(HIGH_BAND)
    }

    /// Return to the start-of-stream state
    pub fn reset(&mut self) {
        *self = Self::new(self.params);
    }

    /// Band parameters
    pub fn params(&self) -> &BandParams {
        &self.params
    }

    /// Current signal estimate
    pub fn estimate(&self) -> i32 {
        self.estimate
    }

    /// Current quantizer step size
    pub fn step(&self) -> i32 {
        self.step
    }

    /// Current logarithmic scale factor
    pub fn log_scale(&self) -> i32 {
        self.log_scale
    }

    /// Pole coefficients `[a1, a2]`
    pub fn poles(&self) -> [i32; 2] {
        [self.poles[1], self.poles[2]]
    }

    /// Active zero coefficients `b1..`
    pub fn zeros(&self) -> &[i32] {
        &self.zeros[1..=self.params.zero_order]
    }

    /// Post-sample update: scale factor first, then predictor.
    ///
    /// `difference` is the quantized difference from the feedback quantizer,
    /// computed with the step size in force before this call. `increment` is
    /// the log scale factor increment for the code's magnitude class.
    fn adapt(&mut self, difference: i32, increment: i32) {
        self.update_scale(increment);
        self.update_predictor(difference);
    }

    fn update_scale(&mut self, increment: i32) {
        let leaked = (self.log_scale * 127) >> 7;
        self.log_scale = (leaked + increment).clamp(0, self.params.max_log_scale);

        let mantissa = ILB[((self.log_scale >> 6) & 31) as usize];
        let shift = self.params.scale_bias - (self.log_scale >> 11);
        let step = if shift < 0 {
            mantissa << -shift
        } else {
            mantissa >> shift
        };
        self.step = step << 2;
    }

    fn update_predictor(&mut self, difference: i32) {
        let order = self.params.zero_order;

        self.diffs[0] = difference;
        self.reconstructed[0] = saturate(self.estimate + difference);
        self.partial[0] = saturate(self.zero_output + difference);

        // Second pole
        let sign0 = self.partial[0] >> 15;
        let sign1 = self.partial[1] >> 15;
        let sign2 = self.partial[2] >> 15;

        let a1_scaled = saturate(self.poles[1] << 2);
        let trend = (if sign0 == sign1 { -a1_scaled } else { a1_scaled }).min(32767);
        let mut a2 = (trend >> 7) + (if sign0 == sign2 { 128 } else { -128 });
        a2 += (self.poles[2] * 32512) >> 15;
        let a2 = a2.clamp(-12288, 12288);

        // First pole, bounded by the stability triangle
        let a1_step = if sign0 == sign1 { 192 } else { -192 };
        let a1 = saturate(a1_step + ((self.poles[1] * 32640) >> 15));
        let bound = saturate(15360 - a2);
        let a1 = a1.clamp(-bound, bound);

        // Zero section
        let gain = if difference == 0 { 0 } else { 128 };
        let sign = difference >> 15;
        for i in 1..=order {
            let nudge = if self.diffs[i] >> 15 == sign { gain } else { -gain };
            self.zeros[i] = saturate(nudge + ((self.zeros[i] * 32640) >> 15));
        }

        // Shift histories
        self.diffs.copy_within(0..order, 1);
        self.reconstructed.copy_within(0..2, 1);
        self.partial.copy_within(0..2, 1);
        self.poles[1] = a1;
        self.poles[2] = a2;

        // New estimate
        let pole_output = saturate(
            ((self.poles[1] * saturate(self.reconstructed[1] << 1)) >> 15)
                + ((self.poles[2] * saturate(self.reconstructed[2] << 1)) >> 15),
        );
        let zero_sum: i32 = (1..=order)
            .map(|i| (self.zeros[i] * saturate(self.diffs[i] << 1)) >> 15)
            .sum();
        self.zero_output = saturate(zero_sum);
        self.estimate = saturate(pole_output + self.zero_output);
    }
}

/// Magnitude used for quantizer decisions: `|d|` for positive `d`,
/// `-(d + 1)` for negative, so both signs have the same intervals.
#[inline]
fn decision_magnitude(difference: i32) -> i32 {
    if difference >= 0 {
        difference
    } else {
        -(difference + 1)
    }
}

/// Low-band adaptation from the 4-bit core of a code.
fn adapt_low_band(state: &mut BandState, core: usize) {
    let difference = (state.step * QM4[core]) >> 15;
    state.adapt(difference, WL[RL42[core]]);
}

/// Encode one low-band sample.
///
/// Any `i32` input is accepted; the prediction error saturates to 16 bits.
/// The difference is always quantized to 6 bits; the returned code keeps the
/// `mode.low_bits()` most significant of them.
pub fn low_band_encode(state: &mut BandState, xl: i32, mode: G722Mode) -> u8 {
    let difference = saturate(xl.saturating_sub(state.estimate));
    let magnitude = decision_magnitude(difference);

    let mut interval = 1;
    while interval < Q6_LEVELS && magnitude >= (Q6_DECISION[interval] * state.step) >> 12 {
        interval += 1;
    }
    let code = if difference < 0 {
        ILN[interval]
    } else {
        ILP[interval]
    };

    adapt_low_band(state, usize::from(code >> 2));
    code >> (6 - mode.low_bits())
}

/// Decode one low-band code of width `mode.low_bits()`.
///
/// Bits above the code width are ignored.
pub fn low_band_decode(state: &mut BandState, code: u8, mode: G722Mode) -> i32 {
    let bits = mode.low_bits();
    let code = code & ((1u8 << bits) - 1);

    let multiplier = low_band_inverse_table(bits)[usize::from(code)];
    let output = (state.estimate + ((state.step * multiplier) >> 15))
        .clamp(RECONSTRUCT_MIN, RECONSTRUCT_MAX);

    adapt_low_band(state, usize::from(code >> (bits - 4)));
    output
}

/// Encode one high-band sample into a 2-bit code.
///
/// Any `i32` input is accepted; the prediction error saturates to 16 bits.
pub fn high_band_encode(state: &mut BandState, xh: i32) -> u8 {
    let difference = saturate(xh.saturating_sub(state.estimate));
    let magnitude = decision_magnitude(difference);

    let interval = if magnitude >= (Q2_DECISION * state.step) >> 12 {
        2
    } else {
        1
    };
    let code = if difference < 0 {
        IHN[interval]
    } else {
        IHP[interval]
    };

    let quantized = (state.step * QM2[usize::from(code)]) >> 15;
    state.adapt(quantized, WH[RH2[usize::from(code)]]);
    code
}

/// Decode one 2-bit high-band code. Bits above bit 1 are ignored.
pub fn high_band_decode(state: &mut BandState, code: u8) -> i32 {
    let code = usize::from(code & 0x03);

    let quantized = (state.step * QM2[code]) >> 15;
    let output = (state.estimate + quantized).clamp(RECONSTRUCT_MIN, RECONSTRUCT_MAX);

    state.adapt(quantized, WH[RH2[code]]);
    output
}
