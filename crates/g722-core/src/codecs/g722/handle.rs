//! Handle-based entry points for binding layers
//!
//! Foreign-function and bytecode shims cannot carry a `Result`, so this
//! surface reports failure the way a C API does: construction yields no
//! handle, and encode/decode return [`FAILURE`]. An absent handle or buffer
//! is modelled as `None`. A rejected call never touches context state.

use crate::codecs::g722::decoder::G722Decoder;
use crate::codecs::g722::encoder::G722Encoder;
use tracing::warn;

/// Return value of a rejected encode or decode call.
pub const FAILURE: i32 = -1;

/// Owned encoder context handed out to a binding layer
pub type EncoderHandle = Box<G722Encoder>;

/// Owned decoder context handed out to a binding layer
pub type DecoderHandle = Box<G722Decoder>;

/// Create an encoder for a bitrate and options bitmask.
///
/// Returns `None` when either value is unsupported.
pub fn encoder_new(bitrate: i64, options: u32) -> Option<EncoderHandle> {
    match G722Encoder::from_raw(bitrate, options) {
        Ok(encoder) => Some(Box::new(encoder)),
        Err(e) => {
            warn!("G.722 encoder construction rejected: {}", e);
            None
        }
    }
}

/// Create a decoder for a bitrate and options bitmask.
///
/// Returns `None` when either value is unsupported.
pub fn decoder_new(bitrate: i64, options: u32) -> Option<DecoderHandle> {
    match G722Decoder::from_raw(bitrate, options) {
        Ok(decoder) => Some(Box::new(decoder)),
        Err(e) => {
            warn!("G.722 decoder construction rejected: {}", e);
            None
        }
    }
}

/// Release an encoder. `None` is a no-op.
pub fn encoder_destroy(handle: Option<EncoderHandle>) {
    drop(handle);
}

/// Release a decoder. `None` is a no-op.
pub fn decoder_destroy(handle: Option<DecoderHandle>) {
    drop(handle);
}

/// Encode the first `count` samples and return the bytes written
/// (`count / 2`), or [`FAILURE`].
///
/// `count == 0` returns 0 without looking at the buffers. An odd trailing
/// sample is dropped.
pub fn encode(
    handle: Option<&mut G722Encoder>,
    samples: Option<&[i16]>,
    count: usize,
    output: Option<&mut [u8]>,
) -> i32 {
    let Some(encoder) = handle else {
        warn!("G.722 encode called without an encoder");
        return FAILURE;
    };
    if count == 0 {
        return 0;
    }
    let (Some(samples), Some(output)) = (samples, output) else {
        warn!("G.722 encode called without a buffer ({} samples)", count);
        return FAILURE;
    };
    let Some(samples) = samples.get(..count) else {
        warn!("G.722 encode count {} exceeds input of {} samples", count, samples.len());
        return FAILURE;
    };
    let Ok(written) = i32::try_from(count / 2) else {
        warn!("G.722 encode count {} out of range", count);
        return FAILURE;
    };

    match encoder.encode_into(samples, output) {
        Ok(_) => written,
        Err(e) => {
            warn!("G.722 encode rejected: {}", e);
            FAILURE
        }
    }
}

/// Decode the first `count` bytes and return the samples written
/// (`count * 2`), or [`FAILURE`].
///
/// `count == 0` returns 0 without looking at the buffers.
pub fn decode(
    handle: Option<&mut G722Decoder>,
    data: Option<&[u8]>,
    count: usize,
    output: Option<&mut [i16]>,
) -> i32 {
    let Some(decoder) = handle else {
        warn!("G.722 decode called without a decoder");
        return FAILURE;
    };
    if count == 0 {
        return 0;
    }
    let (Some(data), Some(output)) = (data, output) else {
        warn!("G.722 decode called without a buffer ({} bytes)", count);
        return FAILURE;
    };
    let Some(data) = data.get(..count) else {
        warn!("G.722 decode count {} exceeds input of {} bytes", count, data.len());
        return FAILURE;
    };
    let Some(written) = count.checked_mul(2).and_then(|n| i32::try_from(n).ok()) else {
        warn!("G.722 decode count {} out of range", count);
        return FAILURE;
    };

    match decoder.decode_into(data, output) {
        Ok(_) => written,
        Err(e) => {
            warn!("G.722 decode rejected: {}", e);
            FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codecs::g722::band::BandState;
    use crate::codecs::g722::config::OPTION_ITU_ALIGNED;

    #[test]
    fn test_construction() {
        assert!(encoder_new(64000, 0).is_some());
        assert!(encoder_new(48000, OPTION_ITU_ALIGNED).is_some());
        assert!(encoder_new(32000, 0).is_none());
        assert!(encoder_new(64000, 0x0002).is_none());
        assert!(decoder_new(56000, 0).is_some());
        assert!(decoder_new(-64000, 0).is_none());
    }

    #[test]
    fn test_null_handles() {
        let samples = [0i16; 4];
        let mut bytes = [0u8; 2];
        assert_eq!(encode(None, Some(&samples[..]), 4, Some(&mut bytes[..])), FAILURE);
        assert_eq!(encode(None, None, 0, None), FAILURE);

        let mut pcm = [0i16; 4];
        assert_eq!(decode(None, Some(&bytes[..]), 2, Some(&mut pcm[..])), FAILURE);

        encoder_destroy(None);
        decoder_destroy(None);
    }

    #[test]
    fn test_null_buffers() {
        let mut encoder = encoder_new(64000, 0).unwrap();
        let mut bytes = [0u8; 4];
        assert_eq!(encode(Some(&mut *encoder), None, 8, Some(&mut bytes[..])), FAILURE);
        assert_eq!(encode(Some(&mut *encoder), Some(&[1i16; 8][..]), 8, None), FAILURE);
        assert_eq!(encoder.low_band(), &BandState::new_low_band());

        let mut decoder = decoder_new(64000, 0).unwrap();
        let mut pcm = [0i16; 8];
        assert_eq!(decode(Some(&mut *decoder), None, 4, Some(&mut pcm[..])), FAILURE);
        assert_eq!(decode(Some(&mut *decoder), Some(&[0x12u8; 4][..]), 4, None), FAILURE);
        assert_eq!(decoder.low_band(), &BandState::new_low_band());
    }

    #[test]
    fn test_zero_count() {
        let mut encoder = encoder_new(64000, 0).unwrap();
        let before = encoder.clone();
        assert_eq!(encode(Some(&mut *encoder), None, 0, None), 0);
        assert_eq!(encoder.filter_bank(), before.filter_bank());

        let mut decoder = decoder_new(64000, 0).unwrap();
        assert_eq!(decode(Some(&mut *decoder), Some(&[][..]), 0, Some(&mut [][..])), 0);
    }

    #[test]
    fn test_count_exceeds_buffers() {
        let mut encoder = encoder_new(64000, 0).unwrap();
        let samples = [100i16; 6];
        let mut bytes = [0u8; 2];
        for count in [8, 6] {
            let written =
                encode(Some(&mut *encoder), Some(&samples[..]), count, Some(&mut bytes[..]));
            assert_eq!(written, FAILURE);
        }
        assert_eq!(encoder.filter_bank(), encoder_new(64000, 0).unwrap().filter_bank());

        let mut decoder = decoder_new(64000, 0).unwrap();
        let mut pcm = [0i16; 3];
        let written = decode(Some(&mut *decoder), Some(&[1u8, 2][..]), 2, Some(&mut pcm[..]));
        assert_eq!(written, FAILURE);
    }

    #[test]
    fn test_length_contract() {
        let mut encoder = encoder_new(64000, 0).unwrap();
        let samples = [0i16, 1000, -1000, 500, 42];
        let mut bytes = [0u8; 2];
        assert_eq!(encode(Some(&mut *encoder), Some(&samples[..]), 5, Some(&mut bytes[..])), 2);

        let mut decoder = decoder_new(64000, 0).unwrap();
        let mut pcm = [0i16; 4];
        assert_eq!(decode(Some(&mut *decoder), Some(&bytes[..]), 2, Some(&mut pcm[..])), 4);

        encoder_destroy(Some(encoder));
        decoder_destroy(Some(decoder));
    }
}
