use crate::decoder::error::DecodeError;
use crate::models::BitMatrix;

/// Recover the symbol version from the timing pattern.
///
/// A valid symbol has a dark module at `(4*version + 9, 8)` and a strictly
/// alternating black/white timing pattern running along row 6 and column 6
/// between the finder patterns. The pattern length fixes the version:
/// `side == 4*version + 17`. We read column 6 first and fall back to row 6,
/// since either axis alone is sufficient to recover the version.
pub fn read_version(matrix: &BitMatrix) -> Result<u32, DecodeError> {
    let side = matrix.width();
    if side < 21 || matrix.height() != side {
        return Err(DecodeError::MatrixTooSmall { side });
    }
    if !matrix.get(8, side - 8) {
        return Err(DecodeError::DarkModuleMissing);
    }

    let version = vertical_timing_version(matrix, side)
        .or_else(|| horizontal_timing_version(matrix, side))
        .ok_or(DecodeError::VersionNotFound)?;

    if !(1..=40).contains(&version) {
        return Err(DecodeError::InvalidVersion { version });
    }
    Ok(version as u32)
}

/// Scan column 6 from row 7 to `side - 8`, requiring strict alternation
/// starting with a dark module at row 7.
fn vertical_timing_version(matrix: &BitMatrix, side: usize) -> Option<i32> {
    let mut previous = true;
    for row in 7..=(side - 8) {
        let dot = matrix.get(6, row);
        if dot == previous {
            return None;
        }
        previous = dot;
    }
    version_from_pattern_length(side - 15)
}

/// Scan row 6 from column 7 to `side - 8`, the horizontal twin of
/// [`vertical_timing_version`].
fn horizontal_timing_version(matrix: &BitMatrix, side: usize) -> Option<i32> {
    let mut previous = true;
    for col in 7..=(side - 8) {
        let dot = matrix.get(col, 6);
        if dot == previous {
            return None;
        }
        previous = dot;
    }
    version_from_pattern_length(side - 15)
}

fn version_from_pattern_length(pattern_length: usize) -> Option<i32> {
    if pattern_length < 1 {
        return None;
    }
    Some(((pattern_length - 1) / 2) as i32)
}
