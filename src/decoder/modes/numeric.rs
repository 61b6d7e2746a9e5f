use crate::decoder::error::DecodeError;

/// Decode numeric mode data: groups of 3 digits encode as 10 bits, a final
/// group of 2 as 7 bits, a final group of 1 as 4 bits. Returns the decoded
/// digit string and the number of bits consumed.
pub fn decode(bits: &[bool], character_count: usize) -> Result<(String, usize), DecodeError> {
    let mut result = String::new();
    let mut bit_idx = 0;
    let mut chars_remaining = character_count;

    while chars_remaining > 0 {
        let group_size = chars_remaining.min(3);
        let bits_needed = match group_size {
            3 => 10,
            2 => 7,
            1 => 4,
            _ => unreachable!("group_size is at most 3"),
        };

        if bit_idx + bits_needed > bits.len() {
            return Err(DecodeError::TruncatedMessage);
        }

        let mut value: u16 = 0;
        for &bit in &bits[bit_idx..bit_idx + bits_needed] {
            value = (value << 1) | bit as u16;
        }

        let limit = 10u16.pow(group_size as u32);
        if value >= limit {
            return Err(DecodeError::InvalidNumeric);
        }

        result.push_str(&format!("{:0width$}", value, width = group_size));
        bit_idx += bits_needed;
        chars_remaining -= group_size;
    }

    Ok((result, bit_idx))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_full_triplet() {
        // 0b0001111011 = 123
        let bits = vec![
            false, false, false, true, true, true, true, false, true, true,
        ];
        let (decoded, bits_used) = decode(&bits, 3).unwrap();
        assert_eq!(decoded, "123");
        assert_eq!(bits_used, 10);
    }

    #[test]
    fn test_decodes_trailing_pair_and_single() {
        // "1234567" = groups [123][456][7]
        let mut bits = Vec::new();
        for &(value, width) in &[(123u16, 10), (456, 10), (7, 4)] {
            for i in (0..width).rev() {
                bits.push((value >> i) & 1 == 1);
            }
        }
        let (decoded, _) = decode(&bits, 7).unwrap();
        assert_eq!(decoded, "1234567");
    }

    #[test]
    fn test_rejects_out_of_range_triplet() {
        // 10 bits can hold up to 1023, but only 000-999 is legal for 3 digits.
        let bits = vec![true, true, true, true, true, true, true, false, false, true];
        assert_eq!(decode(&bits, 3), Err(DecodeError::InvalidNumeric));
    }

    #[test]
    fn test_truncated_stream() {
        let bits = vec![true, false];
        assert_eq!(decode(&bits, 3), Err(DecodeError::TruncatedMessage));
    }

    fn bits_from_str(s: &str) -> Vec<bool> {
        s.chars().map(|c| c == '1').collect()
    }

    #[test]
    fn test_literal_bit_pattern_decodes_to_1234567() {
        let bits = bits_from_str("000111101101110010000111");
        let (decoded, _) = decode(&bits, 7).unwrap();
        assert_eq!(decoded, "1234567");
    }

    #[test]
    fn test_literal_bit_pattern_with_zeroed_tail_decodes_to_1234560() {
        let bits = bits_from_str("000111101101110010000000");
        let (decoded, _) = decode(&bits, 7).unwrap();
        assert_eq!(decoded, "1234560");
    }
}
