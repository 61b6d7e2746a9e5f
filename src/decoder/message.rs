use crate::decoder::error::DecodeError;
use crate::decoder::modes::{alphanumeric, byte, numeric};

const MODE_TERMINATOR: u8 = 0b0000;
const MODE_NUMERIC: u8 = 0b0001;
const MODE_ALPHANUMERIC: u8 = 0b0010;
const MODE_BYTE: u8 = 0b0100;
const MODE_KANJI: u8 = 0b1000;
const MODE_ECI: u8 = 0b0111;

/// Decode a corrected data-codeword bit stream into its message text.
///
/// Walks mode segments until a terminator or the stream runs out: each
/// segment is a 4-bit mode indicator, a version-dependent character count,
/// then the mode's own encoding. ECI segments are skipped (their single
/// designator byte is discarded and decoding resumes at the next mode
/// indicator); Kanji is recognized but not decoded.
pub fn decode_message(bits: &[bool], version: u32) -> Result<String, DecodeError> {
    let mut out = String::new();
    let mut idx = 0;

    loop {
        if idx + 4 > bits.len() {
            break;
        }
        let mode = read_bits(bits, idx, 4) as u8;
        idx += 4;

        match mode {
            MODE_TERMINATOR => break,
            MODE_ECI => {
                if idx + 8 > bits.len() {
                    return Err(DecodeError::TruncatedMessage);
                }
                idx += 8;
            }
            MODE_KANJI => return Err(DecodeError::UnsupportedMode { mode }),
            MODE_NUMERIC | MODE_ALPHANUMERIC | MODE_BYTE => {
                let width = char_count_bits(version, mode);
                if idx + width > bits.len() {
                    return Err(DecodeError::TruncatedMessage);
                }
                let count = read_bits(bits, idx, width) as usize;
                idx += width;

                let remaining = bits.len() - idx;
                let min_bits = min_bits_for(mode, count);
                if min_bits > remaining {
                    return Err(DecodeError::InvalidLength {
                        length: count,
                        capacity: remaining,
                    });
                }

                match mode {
                    MODE_NUMERIC => {
                        let (segment, used) = numeric::decode(&bits[idx..], count)?;
                        out.push_str(&segment);
                        idx += used;
                    }
                    MODE_ALPHANUMERIC => {
                        let (segment, used) = alphanumeric::decode(&bits[idx..], count)?;
                        out.push_str(&segment);
                        idx += used;
                    }
                    MODE_BYTE => {
                        let (segment, used) = byte::decode(&bits[idx..], count)?;
                        out.push_str(&String::from_utf8_lossy(&segment));
                        idx += used;
                    }
                    _ => unreachable!("matched above"),
                }
            }
            _ => return Err(DecodeError::InvalidMode { mode }),
        }
    }

    Ok(out)
}

fn read_bits(bits: &[bool], start: usize, count: usize) -> u32 {
    bits[start..start + count]
        .iter()
        .fold(0u32, |acc, &b| (acc << 1) | b as u32)
}

/// Width, in bits, of the character-count field for `mode` at `version`.
fn char_count_bits(version: u32, mode: u8) -> usize {
    match (mode, version) {
        (MODE_NUMERIC, 1..=9) => 10,
        (MODE_NUMERIC, 10..=26) => 12,
        (MODE_NUMERIC, _) => 14,
        (MODE_ALPHANUMERIC, 1..=9) => 9,
        (MODE_ALPHANUMERIC, 10..=26) => 11,
        (MODE_ALPHANUMERIC, _) => 13,
        (MODE_BYTE, 1..=9) => 8,
        (MODE_BYTE, _) => 16,
        _ => 8,
    }
}

/// Minimum bits a declared character count could possibly consume, used to
/// reject an implausible header before attempting to decode it.
fn min_bits_for(mode: u8, count: usize) -> usize {
    match mode {
        MODE_NUMERIC => {
            let full_groups = count / 3;
            let remainder_bits = match count % 3 {
                0 => 0,
                1 => 4,
                2 => 7,
                _ => unreachable!(),
            };
            full_groups * 10 + remainder_bits
        }
        MODE_ALPHANUMERIC => {
            let full_pairs = count / 2;
            let remainder_bits = if count % 2 == 1 { 6 } else { 0 };
            full_pairs * 11 + remainder_bits
        }
        MODE_BYTE => count * 8,
        _ => 0,
    }
}
