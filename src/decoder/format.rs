use crate::decoder::bch;
use crate::decoder::error::DecodeError;
use crate::models::{BitMatrix, ECLevel, MaskPattern};

/// BCH(15,5) can correct at most 3 bit errors; beyond that a candidate isn't trustworthy.
const MAX_CORRECTABLE_DISTANCE: u32 = 3;

/// Format info: the error correction level and mask pattern used by this symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatInfo {
    pub ec_level: ECLevel,
    pub mask_pattern: MaskPattern,
}

impl FormatInfo {
    /// Recover format info from both 15-bit strips around the top-left
    /// finder pattern and the other two finder patterns, voting between
    /// whichever BCH-corrected candidates each strip produces.
    pub fn extract(matrix: &BitMatrix) -> Result<Self, DecodeError> {
        let side = matrix.width();
        if side < 21 {
            return Err(DecodeError::MatrixTooSmall { side });
        }

        let top_left = read_top_left_strip(matrix) ^ bch::FORMAT_MASK;
        let other = read_split_strip(matrix, side) ^ bch::FORMAT_MASK;

        let mut votes = [0u32; 32];
        let mut any_candidate = false;
        for strip in [top_left, other] {
            let (distance, candidates) = bch::closest_format_candidates(strip);
            if distance > MAX_CORRECTABLE_DISTANCE {
                continue;
            }
            any_candidate = true;
            for data in candidates {
                votes[data as usize] += 1;
            }
        }

        if !any_candidate {
            return Err(DecodeError::InvalidFormat);
        }

        let max_votes = *votes.iter().max().unwrap();
        let winners: Vec<u8> = votes
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count == max_votes)
            .map(|(data, _)| data as u8)
            .collect();

        if winners.len() > 1 {
            return Err(DecodeError::AmbiguousFormat);
        }
        let data = winners[0];

        let ec_bits = (data >> 3) & 0b11;
        let mask_bits = data & 0b111;
        let ec_level = ECLevel::from_bits(ec_bits).ok_or(DecodeError::InvalidFormat)?;
        let mask_pattern = MaskPattern::from_bits(mask_bits).ok_or(DecodeError::InvalidFormat)?;

        Ok(Self {
            ec_level,
            mask_pattern,
        })
    }
}

/// Read the 15-bit strip around the top-left finder pattern, MSB first.
fn read_top_left_strip(matrix: &BitMatrix) -> u16 {
    let mut bits: u16 = 0;
    for col in 0..6 {
        bits = (bits << 1) | matrix.get(col, 8) as u16;
    }
    bits = (bits << 1) | matrix.get(7, 8) as u16;
    bits = (bits << 1) | matrix.get(8, 8) as u16;
    bits = (bits << 1) | matrix.get(8, 7) as u16;
    for row in (0..6).rev() {
        bits = (bits << 1) | matrix.get(8, row) as u16;
    }
    bits
}

/// Read the 15-bit strip split across the top-right and bottom-left finder
/// patterns, MSB first.
fn read_split_strip(matrix: &BitMatrix, side: usize) -> u16 {
    let mut bits: u16 = 0;
    for row in (side - 7..side).rev() {
        bits = (bits << 1) | matrix.get(8, row) as u16;
    }
    for col in side - 8..side {
        bits = (bits << 1) | matrix.get(col, 8) as u16;
    }
    bits
}
