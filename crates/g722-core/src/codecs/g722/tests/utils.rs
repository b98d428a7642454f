//! G.722 Test Utilities
//!
//! Signal generators and quality measures shared by the codec test suites.

use crate::codecs::g722::{G722Config, G722Decoder, G722Encoder};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Largest codec delay searched when aligning decoded output with input.
pub const MAX_ALIGNMENT_LAG: usize = 64;

/// Samples skipped at the start of a stream while the quantizers adapt.
pub const SETTLE_SAMPLES: usize = 400;

/// Encode a whole buffer with a fresh encoder.
pub fn encode_all(config: G722Config, samples: &[i16]) -> Vec<u8> {
    G722Encoder::new(config).encode(samples)
}

/// Decode a whole buffer with a fresh decoder.
pub fn decode_all(config: G722Config, data: &[u8]) -> Vec<i16> {
    G722Decoder::new(config).decode(data)
}

/// Encode then decode with fresh contexts.
pub fn round_trip(config: G722Config, samples: &[i16]) -> Vec<i16> {
    decode_all(config, &encode_all(config, samples))
}

/// Signal-to-noise ratio in dB of `decoded` against `original` at a fixed
/// lag, ignoring the first [`SETTLE_SAMPLES`].
pub fn snr_at_lag(original: &[i16], decoded: &[i16], lag: usize) -> f64 {
    let end = original.len().min(decoded.len().saturating_sub(lag));
    let mut signal = 0.0f64;
    let mut noise = 0.0f64;
    for n in SETTLE_SAMPLES..end {
        let x = f64::from(original[n]);
        let e = x - f64::from(decoded[n + lag]);
        signal += x * x;
        noise += e * e;
    }
    if noise == 0.0 {
        return f64::INFINITY;
    }
    10.0 * (signal / noise).log10()
}

/// Best SNR over all lags up to [`MAX_ALIGNMENT_LAG`], with the lag found.
pub fn aligned_snr(original: &[i16], decoded: &[i16]) -> (f64, usize) {
    (0..MAX_ALIGNMENT_LAG)
        .map(|lag| (snr_at_lag(original, decoded, lag), lag))
        .fold((f64::NEG_INFINITY, 0), |best, cur| if cur.0 > best.0 { cur } else { best })
}

/// Generate test signal patterns for validation
pub mod test_signals {
    use super::*;

    /// Sample rate of every generated signal
    pub const SAMPLE_RATE: f64 = 16000.0;

    /// Generate a sine wave at specified frequency
    pub fn generate_sine_wave(
        frequency: f64,
        duration_samples: usize,
        amplitude: i16,
    ) -> Vec<i16> {
        (0..duration_samples)
            .map(|i| {
                let t = i as f64 / SAMPLE_RATE;
                let sample =
                    f64::from(amplitude) * (2.0 * std::f64::consts::PI * frequency * t).sin();
                sample.round() as i16
            })
            .collect()
    }

    /// Generate seeded uniform white noise in `[-amplitude, amplitude]`
    pub fn generate_white_noise(duration_samples: usize, amplitude: i16, seed: u64) -> Vec<i16> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..duration_samples)
            .map(|_| rng.gen_range(-amplitude..=amplitude))
            .collect()
    }

    /// Generate impulse signal
    pub fn generate_impulse(
        duration_samples: usize,
        impulse_position: usize,
        amplitude: i16,
    ) -> Vec<i16> {
        let mut signal = vec![0i16; duration_samples];
        if impulse_position < duration_samples {
            signal[impulse_position] = amplitude;
        }
        signal
    }

    /// Generate a rising tone from `start` to `end` Hz
    pub fn generate_sweep(
        start: f64,
        end: f64,
        duration_samples: usize,
        amplitude: i16,
    ) -> Vec<i16> {
        let duration = duration_samples as f64 / SAMPLE_RATE;
        (0..duration_samples)
            .map(|i| {
                let t = i as f64 / SAMPLE_RATE;
                let sweep = start * t + (end - start) * t * t / (2.0 * duration);
                let phase = 2.0 * std::f64::consts::PI * sweep;
                (f64::from(amplitude) * phase.sin()).round() as i16
            })
            .collect()
    }
}

#[test]
fn test_snr_identity() {
    let signal = test_signals::generate_sine_wave(440.0, 1000, 8000);
    assert_eq!(snr_at_lag(&signal, &signal, 0), f64::INFINITY);

    let mut delayed = vec![0i16; 5];
    delayed.extend_from_slice(&signal);
    let (snr, lag) = aligned_snr(&signal, &delayed);
    assert_eq!(lag, 5);
    assert!(snr.is_infinite());
}

#[test]
fn test_noise_is_seeded() {
    let a = test_signals::generate_white_noise(100, 1000, 7);
    let b = test_signals::generate_white_noise(100, 1000, 7);
    assert_eq!(a, b);
    assert!(a.iter().all(|&s| (-1000..=1000).contains(&s)));
}
