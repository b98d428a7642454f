//! G.722 configuration: operating mode and packing option.
//!
//! A [`G722Config`] is the only input a codec context needs. It can be built
//! from typed values or decoded from the raw `(bitrate, options)` pair that a
//! binding layer passes in.

use crate::error::{CodecError, Result};
use std::fmt;

/// Default options: right-aligned codewords, unused high-order bits zero.
pub const OPTION_DEFAULT: u32 = 0x0000;

/// libg722 flag for 8 kHz I/O. Recognised but unsupported (no resampling).
pub const OPTION_SAMPLE_RATE_8000: u32 = 0x0001;

/// libg722 flag for bit packing across byte boundaries. Recognised but
/// unsupported: it breaks the one-byte-per-sample-pair contract.
pub const OPTION_PACKED: u32 = 0x0002;

/// ITU-T octet layout: high-band code in bits 7-6, low-band code
/// left-justified in bits 5-0, unused low-order bits zero.
pub const OPTION_ITU_ALIGNED: u32 = 0x0004;

const KNOWN_OPTIONS: u32 = OPTION_SAMPLE_RATE_8000 | OPTION_PACKED | OPTION_ITU_ALIGNED;

/// Supported bitrates in bits per second, fastest first.
pub const SUPPORTED_BITRATES: [u32; 3] = [64000, 56000, 48000];

/// G.722 operating mode
///
/// The mode selects how many bits of the low-band code reach the channel.
/// The high band always carries 2 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum G722Mode {
    /// 64 kbit/s, 6-bit low band
    #[default]
    Mode1,
    /// 56 kbit/s, 5-bit low band
    Mode2,
    /// 48 kbit/s, 4-bit low band
    Mode3,
}

impl G722Mode {
    /// Resolve a bitrate hint to a mode.
    pub fn from_bitrate(bitrate: i64) -> Result<Self> {
        match bitrate {
            64000 => Ok(Self::Mode1),
            56000 => Ok(Self::Mode2),
            48000 => Ok(Self::Mode3),
            _ => Err(CodecError::InvalidBitrate {
                bitrate,
                supported: SUPPORTED_BITRATES.to_vec(),
            }),
        }
    }

    /// Resolve an ITU-T mode number (1, 2 or 3).
    pub fn from_number(mode: u8) -> Result<Self> {
        match mode {
            1 => Ok(Self::Mode1),
            2 => Ok(Self::Mode2),
            3 => Ok(Self::Mode3),
            _ => Err(CodecError::invalid_config(format!(
                "Invalid G.722 mode {mode}. Must be 1, 2, or 3."
            ))),
        }
    }

    /// ITU-T mode number
    pub fn number(self) -> u8 {
        match self {
            Self::Mode1 => 1,
            Self::Mode2 => 2,
            Self::Mode3 => 3,
        }
    }

    /// Bitrate in bits per second
    pub fn bitrate(self) -> u32 {
        u32::from(self.bits_per_sample()) * 8000
    }

    /// Bits of the low-band code carried per byte
    pub fn low_bits(self) -> u8 {
        match self {
            Self::Mode1 => 6,
            Self::Mode2 => 5,
            Self::Mode3 => 4,
        }
    }

    /// Total used bits per byte (low band plus the 2-bit high band)
    pub fn bits_per_sample(self) -> u8 {
        self.low_bits() + 2
    }
}

impl fmt::Display for G722Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mode {} ({} kbit/s)", self.number(), self.bitrate() / 1000)
    }
}

/// Bit ordering convention used to lay both codewords into a byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PackingOption {
    /// Codewords right-aligned: `high << low_bits | low`. Unused
    /// high-order bits are zero. This is the libg722 byte layout.
    #[default]
    RightAligned,
    /// ITU-T octet: `high << 6 | low << (6 - low_bits)`. The high-band
    /// code keeps a fixed position in every mode.
    ItuAligned,
}

impl PackingOption {
    /// Decode an options bitmask.
    pub fn from_options(options: u32) -> Result<Self> {
        if options & !KNOWN_OPTIONS != 0 {
            return Err(CodecError::UnsupportedOptions {
                options,
                reason: "unknown option bits",
            });
        }
        if options & OPTION_SAMPLE_RATE_8000 != 0 {
            return Err(CodecError::UnsupportedOptions {
                options,
                reason: "8 kHz sample rate operation is not supported",
            });
        }
        if options & OPTION_PACKED != 0 {
            return Err(CodecError::UnsupportedOptions {
                options,
                reason: "cross-byte bit packing is not supported",
            });
        }
        if options & OPTION_ITU_ALIGNED != 0 {
            Ok(Self::ItuAligned)
        } else {
            Ok(Self::RightAligned)
        }
    }

    /// Options bitmask selecting this packing
    pub fn options(self) -> u32 {
        match self {
            Self::RightAligned => OPTION_DEFAULT,
            Self::ItuAligned => OPTION_ITU_ALIGNED,
        }
    }
}

/// Complete configuration of one G.722 stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct G722Config {
    /// Operating mode
    pub mode: G722Mode,
    /// Byte layout
    pub packing: PackingOption,
}

impl G722Config {
    /// Create a configuration
    pub fn new(mode: G722Mode, packing: PackingOption) -> Self {
        Self { mode, packing }
    }

    /// Decode the raw `(bitrate, options)` pair of the boundary surface.
    pub fn from_raw(bitrate: i64, options: u32) -> Result<Self> {
        Ok(Self {
            mode: G722Mode::from_bitrate(bitrate)?,
            packing: PackingOption::from_options(options)?,
        })
    }

    /// Set the operating mode
    pub fn with_mode(mut self, mode: G722Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the packing option
    pub fn with_packing(mut self, packing: PackingOption) -> Self {
        self.packing = packing;
        self
    }

    /// Options bitmask equivalent of this configuration
    pub fn options(&self) -> u32 {
        self.packing.options()
    }
}
