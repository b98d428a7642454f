//! G.722 Decoder Tests
//!
//! Decoder synchronisation with the encoder, rate masking, tolerance of
//! arbitrary input bytes and decoder state management.

use super::utils::test_signals::*;
use super::utils::*;
use crate::codecs::g722::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Test decoder creation and initialization
#[test]
fn test_decoder_creation() {
    for bitrate in [64000, 56000, 48000] {
        let decoder = G722Decoder::from_raw(bitrate, config::OPTION_ITU_ALIGNED).unwrap();
        assert_eq!(decoder.config().packing, PackingOption::ItuAligned);
        assert_eq!(decoder.low_band().step(), 32);
        assert_eq!(decoder.high_band().step(), 8);
    }
}

/// Decoder adaptation follows the encoder sample for sample
#[test]
fn test_decoder_stays_in_sync() {
    let signal = generate_sweep(50.0, 7900.0, 8000, 14000);
    for mode in [G722Mode::Mode1, G722Mode::Mode2, G722Mode::Mode3] {
        let config = G722Config::default().with_mode(mode);
        let mut encoder = G722Encoder::new(config);
        let mut decoder = G722Decoder::new(config);
        for chunk in signal.chunks(160) {
            decoder.decode(&encoder.encode(chunk));
            assert_eq!(encoder.low_band(), decoder.low_band(), "{}", mode);
            assert_eq!(encoder.high_band(), decoder.high_band(), "{}", mode);
        }
    }
}

/// Garbage in the unused bits never changes the decoded output
#[test]
fn test_rate_masking_ignores_unused_bits() {
    let signal = generate_white_noise(4000, 10000, 21);
    let mut rng = StdRng::seed_from_u64(99);

    for mode in [G722Mode::Mode2, G722Mode::Mode3] {
        for packing in [PackingOption::RightAligned, PackingOption::ItuAligned] {
            let config = G722Config::new(mode, packing);
            let unused = !BitLayout::for_config(&config).used_bits_mask();
            let clean = encode_all(config, &signal);
            let dirty: Vec<u8> =
                clean.iter().map(|&b| b | (rng.r#gen::<u8>() & unused)).collect();
            assert_eq!(
                decode_all(config, &clean),
                decode_all(config, &dirty),
                "{} {:?}",
                mode,
                packing
            );
        }
    }
}

/// A full-rate ITU stream can be decoded at a reduced rate
#[test]
fn test_full_rate_stream_decodes_at_reduced_rate() {
    let signal = generate_sine_wave(1000.0, 8000, 9000);
    let full = encode_all(G722Config::new(G722Mode::Mode1, PackingOption::ItuAligned), &signal);

    for mode in [G722Mode::Mode2, G722Mode::Mode3] {
        let config = G722Config::new(mode, PackingOption::ItuAligned);
        let truncated = decode_all(config, &full);
        let native = round_trip(config, &signal);
        assert_eq!(truncated, native, "{}", mode);

        let (snr, _) = aligned_snr(&signal, &truncated);
        assert!(snr > 12.0, "{}: SNR {:.1} dB", mode, snr);
    }
}

/// Any byte sequence decodes to in-range samples of the right length
#[test]
fn test_arbitrary_bytes() {
    let mut rng = StdRng::seed_from_u64(4);
    let data: Vec<u8> = (0..5000).map(|_| rng.r#gen()).collect();
    for mode in [G722Mode::Mode1, G722Mode::Mode2, G722Mode::Mode3] {
        let decoded = decode_all(G722Config::default().with_mode(mode), &data);
        assert_eq!(decoded.len(), data.len() * 2);
    }

    for byte in [0x00u8, 0x3F, 0x7F, 0xC0, 0xFF] {
        let decoded = decode_all(G722Config::default(), &[byte; 2000]);
        assert_eq!(decoded.len(), 4000);
    }
}

/// Chunked decoding matches decoding the whole stream
#[test]
fn test_chunked_decoding_matches_whole() {
    let encoded = encode_all(G722Config::default(), &generate_white_noise(3000, 8000, 8));
    let whole = decode_all(G722Config::default(), &encoded);

    for chunk in [1usize, 7, 80, 333] {
        let mut decoder = G722Decoder::default();
        let mut chunked = Vec::new();
        for part in encoded.chunks(chunk) {
            chunked.extend(decoder.decode(part));
        }
        assert_eq!(chunked, whole, "chunk size {}", chunk);
    }
}

/// Test decoder reset functionality
#[test]
fn test_decoder_reset() {
    let encoded = encode_all(G722Config::default(), &generate_sine_wave(600.0, 640, 8000));
    let mut decoder = G722Decoder::default();
    let first = decoder.decode(&encoded);
    decoder.reset();
    assert_eq!(decoder.low_band(), &BandState::new_low_band());
    assert_eq!(decoder.decode(&encoded), first);
}
