use crate::decoder::reserved::reserved;
use crate::models::{BitMatrix, MaskPattern};

/// Unmask a matrix in place by XORing every data module with the mask
/// predicate for `mask_pattern`. Reserved modules are untouched.
pub fn unmask(matrix: &mut BitMatrix, mask_pattern: MaskPattern) {
    let side = matrix.width();

    for y in 0..side {
        for x in 0..side {
            if !reserved(x, y, side) && mask_pattern.is_masked(y, x) {
                matrix.toggle(x, y);
            }
        }
    }
}
