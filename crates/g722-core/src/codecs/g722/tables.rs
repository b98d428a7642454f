//! G.722 Tables and Constants
//!
//! Filter coefficients, quantizer decision levels, inverse quantizer
//! multipliers and scale factor adaptation tables from ITU-T G.722.
//! All values are Q-format integers; the band coder and filter bank
//! never use floating point.

/// Number of taps in the QMF analysis/synthesis filter.
pub const QMF_TAPS: usize = 24;

/// Symmetric 24-tap QMF impulse response shared by transmit and receive
/// filters. Even taps feed one polyphase branch, odd taps the other.
pub const QMF_COEFFS: [i32; QMF_TAPS] = [
    3, -11, -11, 53, 12, -156, 32, 362, -210, -805, 951, 3876,
    3876, 951, -805, -210, 362, 32, -156, 12, 53, -11, -11, 3,
];

/// Low-band quantizer decision levels, scaled by the step size >> 12.
pub const Q6_DECISION: [i32; 32] = [
    0, 35, 72, 110, 150, 190, 233, 276,
    323, 370, 422, 473, 530, 587, 650, 714,
    786, 858, 940, 1023, 1121, 1219, 1339, 1458,
    1612, 1765, 1980, 2195, 2557, 2919, 0, 0,
];

/// Number of usable low-band decision intervals.
pub const Q6_LEVELS: usize = 30;

/// Low-band 6-bit code for a negative difference, by decision interval.
pub const ILN: [u8; 32] = [
    0, 63, 62, 31, 30, 29, 28, 27,
    26, 25, 24, 23, 22, 21, 20, 19,
    18, 17, 16, 15, 14, 13, 12, 11,
    10, 9, 8, 7, 6, 5, 4, 0,
];

/// Low-band 6-bit code for a non-negative difference, by decision interval.
pub const ILP: [u8; 32] = [
    0, 61, 60, 59, 58, 57, 56, 55,
    54, 53, 52, 51, 50, 49, 48, 47,
    46, 45, 44, 43, 42, 41, 40, 39,
    38, 37, 36, 35, 34, 33, 32, 0,
];

/// Inverse quantizer multipliers for the 6-bit low-band code (64 kbit/s).
pub const QM6: [i32; 64] = [
    -136, -136, -136, -136, -24808, -21904, -19008, -16704,
    -14984, -13512, -12280, -11192, -10232, -9360, -8576, -7856,
    -7192, -6576, -6000, -5456, -4944, -4464, -4008, -3576,
    -3168, -2776, -2400, -2032, -1688, -1360, -1040, -728,
    24808, 21904, 19008, 16704, 14984, 13512, 12280, 11192,
    10232, 9360, 8576, 7856, 7192, 6576, 6000, 5456,
    4944, 4464, 4008, 3576, 3168, 2776, 2400, 2032,
    1688, 1360, 1040, 728, 432, 136, -432, -136,
];

/// Inverse quantizer multipliers for the 5-bit low-band code (56 kbit/s).
pub const QM5: [i32; 32] = [
    -280, -280, -23352, -17560, -14120, -11664, -9752, -8184,
    -6864, -5712, -4696, -3784, -2960, -2208, -1520, -880,
    23352, 17560, 14120, 11664, 9752, 8184, 6864, 5712,
    4696, 3784, 2960, 2208, 1520, 880, 280, -280,
];

/// Inverse quantizer multipliers for the 4-bit low-band code (48 kbit/s).
///
/// Also the feedback quantizer: predictor and scale adaptation always run
/// on the 4-bit core of the low-band code, whatever the operating mode.
pub const QM4: [i32; 16] = [
    0, -20456, -12896, -8968, -6288, -4240, -2584, -1200,
    20456, 12896, 8968, 6288, 4240, 2584, 1200, 0,
];

/// Maps the 4-bit low-band core to a magnitude class for [`WL`].
pub const RL42: [usize; 16] = [0, 7, 6, 5, 4, 3, 2, 1, 7, 6, 5, 4, 3, 2, 1, 0];

/// Low-band logarithmic scale factor increments, by magnitude class.
pub const WL: [i32; 8] = [-60, -30, 58, 172, 334, 538, 1198, 3042];

/// High-band decision level multiplier.
pub const Q2_DECISION: i32 = 564;

/// High-band 2-bit code for a negative difference (index 1 = small, 2 = large).
pub const IHN: [u8; 3] = [0, 1, 0];

/// High-band 2-bit code for a non-negative difference.
pub const IHP: [u8; 3] = [0, 3, 2];

/// Inverse quantizer multipliers for the 2-bit high-band code.
pub const QM2: [i32; 4] = [-7408, -1616, 7408, 1616];

/// Maps the high-band code to a magnitude class for [`WH`].
pub const RH2: [usize; 4] = [2, 1, 2, 1];

/// High-band logarithmic scale factor increments, by magnitude class.
pub const WH: [i32; 3] = [0, -214, 798];

/// Inverse logarithm mantissa table used to turn the log scale factor
/// back into a linear quantizer step.
pub const ILB: [i32; 32] = [
    2048, 2093, 2139, 2186, 2233, 2282, 2332, 2383,
    2435, 2489, 2543, 2599, 2656, 2714, 2774, 2834,
    2896, 2960, 3025, 3091, 3158, 3228, 3298, 3371,
    3444, 3520, 3597, 3676, 3756, 3838, 3922, 4008,
];

/// Inverse quantizer table for a low-band code of the given width.
pub fn low_band_inverse_table(bits: u8) -> &'static [i32] {
    match bits {
        6 => &QM6,
        5 => &QM5,
        _ => &QM4,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qmf_coefficients_symmetric() {
        for i in 0..QMF_TAPS / 2 {
            assert_eq!(QMF_COEFFS[i], QMF_COEFFS[QMF_TAPS - 1 - i]);
        }
    }

    #[test]
    fn test_qmf_branch_gain() {
        // Each polyphase branch sums to 4096, which makes the analysis
        // (>> 14) and synthesis (>> 11) pair unity gain at DC.
        let even: i32 = QMF_COEFFS.iter().step_by(2).sum();
        let odd: i32 = QMF_COEFFS.iter().skip(1).step_by(2).sum();
        assert_eq!(even, 4096);
        assert_eq!(odd, 4096);
    }

    #[test]
    fn test_inverse_tables_nest() {
        // Every 4-bit multiplier reappears in the wider tables at the
        // position of the code it is the core of.
        for core in 1..15usize {
            let five = QM5[core << 1];
            let six = QM6[core << 2];
            assert_eq!(QM4[core].signum(), five.signum());
            assert_eq!(QM4[core].signum(), six.signum());
        }
    }

    #[test]
    fn test_low_band_inverse_table_widths() {
        assert_eq!(low_band_inverse_table(6).len(), 64);
        assert_eq!(low_band_inverse_table(5).len(), 32);
        assert_eq!(low_band_inverse_table(4).len(), 16);
    }

    #[test]
    fn test_decision_levels_increase() {
        for i in 1..Q6_LEVELS {
            assert!(Q6_DECISION[i] > Q6_DECISION[i - 1]);
        }
    }
}
