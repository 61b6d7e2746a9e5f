//! QR code module-matrix decoding.
//!
//! Pipeline: recover the version from the timing pattern, recover the
//! format word (mask pattern + error correction level) from its two
//! redundant strips, read the data modules in the standard zig-zag order,
//! undo the mask, de-interleave and Reed-Solomon-correct the codewords,
//! then parse the corrected bit stream into a message.

pub mod bch;
pub mod bitstream;
pub mod ecc;
pub mod error;
pub mod format;
pub mod message;
pub mod modes;
pub mod reed_solomon;
pub mod reserved;
pub mod tables;
pub mod unmask;
pub mod version;

use crate::models::BitMatrix;
pub use error::DecodeError;
pub use format::FormatInfo;

/// Decode a binary module matrix into its encoded message.
///
/// `matrix` must already be a clean module-level grid: one bit per module,
/// oriented with the top-left finder pattern at `(0, 0)`. Detecting and
/// sampling that grid out of a camera frame is outside this crate's scope.
pub fn decode(matrix: &BitMatrix) -> Result<String, DecodeError> {
    let version = version::read_version(matrix)?;
    let format = FormatInfo::extract(matrix)?;

    let mut unmasked = matrix.clone();
    unmask::unmask(&mut unmasked, format.mask_pattern);

    let side = matrix.width();
    let bits = bitstream::extract(&unmasked, side);
    let codewords = ecc::bits_to_codewords(&bits);
    let data = ecc::deinterleave_and_correct(&codewords, version, format.ec_level)?;

    let data_bits: Vec<bool> = data
        .iter()
        .flat_map(|&byte| (0..8).rev().map(move |i| (byte >> i) & 1 == 1))
        .collect();

    let text = message::decode_message(&data_bits, version)?;
    if crate::debug::enabled() {
        eprintln!(
            "decode: version={version} ec_level={:?} mask={:?} data_codewords={} message_len={}",
            format.ec_level,
            format.mask_pattern,
            data.len(),
            text.len()
        );
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_rejects_undersized_matrix() {
        let matrix = BitMatrix::new(10, 10);
        assert_eq!(
            decode(&matrix),
            Err(DecodeError::MatrixTooSmall { side: 10 })
        );
    }

    #[test]
    fn test_decode_rejects_missing_dark_module() {
        let matrix = BitMatrix::new(21, 21);
        assert_eq!(decode(&matrix), Err(DecodeError::DarkModuleMissing));
    }
}
