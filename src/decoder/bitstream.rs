use crate::decoder::reserved::reserved;
use crate::models::BitMatrix;

/// Read the data modules of a symbol in the canonical zig-zag order: two
/// columns at a time, from the right edge, skipping the vertical timing
/// column, alternating bottom-to-top and top-to-bottom, reading the right
/// column of each pair before the left one.
pub fn extract(matrix: &BitMatrix, side: usize) -> Vec<bool> {
    let mut bits = Vec::new();
    let mut upward = true;
    let mut col = side as i32 - 1;

    while col > 0 {
        if col == 6 {
            col -= 1;
            continue;
        }

        let rows: Box<dyn Iterator<Item = usize>> = if upward {
            Box::new((0..side).rev())
        } else {
            Box::new(0..side)
        };

        for row in rows {
            for c in [col, col - 1] {
                if c >= 0 && !reserved(c as usize, row, side) {
                    bits.push(matrix.get(c as usize, row));
                }
            }
        }

        upward = !upward;
        col -= 2;
    }

    bits
}
