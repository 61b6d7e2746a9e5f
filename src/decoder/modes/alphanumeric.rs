use crate::decoder::error::DecodeError;

/// Alphanumeric character set: 0-9, A-Z, space, $%*+-./:
const ALPHANUMERIC_TABLE: [char; 45] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I',
    'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', ' ', '$',
    '%', '*', '+', '-', '.', '/', ':',
];

/// Decode alphanumeric mode data: pairs of characters encode as 11 bits
/// (`first * 45 + second`), a trailing odd character as 6 bits. Returns the
/// decoded string and the number of bits consumed.
pub fn decode(bits: &[bool], character_count: usize) -> Result<(String, usize), DecodeError> {
    let mut result = String::new();
    let mut bit_idx = 0;
    let mut chars_remaining = character_count;

    while chars_remaining > 0 {
        if chars_remaining >= 2 {
            if bit_idx + 11 > bits.len() {
                return Err(DecodeError::TruncatedMessage);
            }
            let value = read_bits(bits, bit_idx, 11);
            let first = (value / 45) as usize;
            let second = (value % 45) as usize;
            // A legally-encoded pair is always below 45*45 = 2025; values up
            // to 2047 fit in 11 bits but can't come from a valid encoder.
            if first < 45 && second < 45 {
                result.push(ALPHANUMERIC_TABLE[first]);
                result.push(ALPHANUMERIC_TABLE[second]);
            }
            bit_idx += 11;
            chars_remaining -= 2;
        } else {
            if bit_idx + 6 > bits.len() {
                return Err(DecodeError::TruncatedMessage);
            }
            let value = read_bits(bits, bit_idx, 6) as usize;
            if value < 45 {
                result.push(ALPHANUMERIC_TABLE[value]);
            }
            bit_idx += 6;
            chars_remaining -= 1;
        }
    }

    Ok((result, bit_idx))
}

fn read_bits(bits: &[bool], start: usize, count: usize) -> u16 {
    bits[start..start + count]
        .iter()
        .fold(0u16, |acc, &b| (acc << 1) | b as u16)
}
