//! Bit packing of the two sub-band codewords into one byte
//!
//! Every sample pair becomes exactly one byte. Where each codeword sits in
//! that byte is described by a [`BitLayout`] derived from the operating mode
//! and packing option, so the codec loops never hard-code bit widths.

use crate::codecs::g722::config::{G722Config, G722Mode, PackingOption};

/// Width of the high-band codeword in every mode.
pub const HIGH_BITS: u8 = 2;

const HIGH_MASK: u8 = (1 << HIGH_BITS) - 1;

/// Positions of both codewords inside a byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitLayout {
    /// Width of the low-band codeword
    pub low_bits: u8,
    /// Bit position of the low-band codeword's least significant bit
    pub low_shift: u8,
    /// Bit position of the high-band codeword's least significant bit
    pub high_shift: u8,
}

impl BitLayout {
    /// Layout for a mode and packing option
    pub const fn new(mode: G722Mode, packing: PackingOption) -> Self {
        let low_bits = match mode {
            G722Mode::Mode1 => 6,
            G722Mode::Mode2 => 5,
            G722Mode::Mode3 => 4,
        };
        match packing {
            PackingOption::RightAligned => Self {
                low_bits,
                low_shift: 0,
                high_shift: low_bits,
            },
            PackingOption::ItuAligned => Self {
                low_bits,
                low_shift: 6 - low_bits,
                high_shift: 6,
            },
        }
    }

    /// Layout for a configuration
    pub const fn for_config(config: &G722Config) -> Self {
        Self::new(config.mode, config.packing)
    }

    #[inline]
    fn low_mask(&self) -> u8 {
        (1 << self.low_bits) - 1
    }

    /// Combine two codewords into a byte. Unused bits are zero.
    #[inline]
    pub fn pack(&self, low: u8, high: u8) -> u8 {
        ((high & HIGH_MASK) << self.high_shift) | ((low & self.low_mask()) << self.low_shift)
    }

    /// Split a byte into `(low, high)` codewords, ignoring unused bits.
    #[inline]
    pub fn unpack(&self, byte: u8) -> (u8, u8) {
        (
            (byte >> self.low_shift) & self.low_mask(),
            (byte >> self.high_shift) & HIGH_MASK,
        )
    }

    /// Bits of a byte that carry codeword data
    pub fn used_bits_mask(&self) -> u8 {
        (HIGH_MASK << self.high_shift) | (self.low_mask() << self.low_shift)
    }
}

/// Pack one sample pair's codewords.
pub fn pack(low: u8, high: u8, mode: G722Mode, packing: PackingOption) -> u8 {
    BitLayout::new(mode, packing).pack(low, high)
}

/// Unpack one byte into `(low, high)` codewords.
pub fn unpack(byte: u8, mode: G722Mode, packing: PackingOption) -> (u8, u8) {
    BitLayout::new(mode, packing).unpack(byte)
}
