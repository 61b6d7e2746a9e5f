use crate::decoder::error::DecodeError;

/// Decode byte mode data: 8 bits per byte, passed through as-is. The bytes
/// are not assumed to be UTF-8 or any other particular encoding; that
/// interpretation is left to whatever consumes the decoded message.
pub fn decode(bits: &[bool], character_count: usize) -> Result<(Vec<u8>, usize), DecodeError> {
    let mut bytes = Vec::with_capacity(character_count);
    let mut bit_idx = 0;

    for _ in 0..character_count {
        if bit_idx + 8 > bits.len() {
            return Err(DecodeError::TruncatedMessage);
        }
        let byte = bits[bit_idx..bit_idx + 8]
            .iter()
            .fold(0u8, |acc, &b| (acc << 1) | b as u8);
        bytes.push(byte);
        bit_idx += 8;
    }

    Ok((bytes, bit_idx))
}
