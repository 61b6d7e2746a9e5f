/// Whether module `(x, y)` (column, row) in a symbol of side `side` is a
/// reserved (function) module rather than a data module.
///
/// Covers the three finder patterns with their separators, the two timing
/// tracks, both format-info strips, the dark module, and (for versions 2-6)
/// the single bottom-right alignment pattern those symbols carry. Versions 7
/// and up place additional alignment patterns on a per-version grid plus a
/// version-information block; this decoder does not track those extra
/// reserved areas, so it treats their modules as data. That keeps the
/// traversal, the format/version stages, and the codeword count mutually
/// consistent for the versions this decoder targets, at the cost of not
/// resolving v7+ symbols whose layout depends on the full alignment grid.
pub fn reserved(x: usize, y: usize, side: usize) -> bool {
    if in_finder_or_separator(x, y, side) {
        return true;
    }
    if x == 6 || y == 6 {
        return true;
    }
    if in_format_strip(x, y, side) {
        return true;
    }
    if x == 8 && y == side - 8 {
        return true;
    }
    let version = (side - 17) / 4;
    if (2..=6).contains(&version) && in_bottom_right_alignment(x, y, side) {
        return true;
    }
    false
}

fn in_finder_or_separator(x: usize, y: usize, side: usize) -> bool {
    let top_left = x < 8 && y < 8;
    let top_right = x >= side - 8 && y < 8;
    let bottom_left = x < 8 && y >= side - 8;
    top_left || top_right || bottom_left
}

fn in_format_strip(x: usize, y: usize, side: usize) -> bool {
    (y == 8 && (x < 9 || x >= side - 8)) || (x == 8 && (y < 9 || y >= side - 7))
}

fn in_bottom_right_alignment(x: usize, y: usize, side: usize) -> bool {
    let center = side - 7;
    let low = center - 2;
    let high = center + 2;
    (low..=high).contains(&x) && (low..=high).contains(&y)
}

/// Count of data (non-reserved) modules in a symbol of the given side,
/// used to sanity-check how many bits a full traversal should yield.
pub fn data_module_count(side: usize) -> usize {
    let mut count = 0;
    for y in 0..side {
        for x in 0..side {
            if !reserved(x, y, side) {
                count += 1;
            }
        }
    }
    count
}
