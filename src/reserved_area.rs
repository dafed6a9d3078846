//! The reserved-area mirrored cell pairs: a fixed constant from the format, carrying the
//! reserved (tag-id/version) codeword outside the 21x21 grid.

/// The 38 mirrored `(primary, mirror)` cell coordinate pairs, in the order the format defines
/// them. Coordinates are on the 36-cell full-grid system. Only the first 24 pairs carry reserved
/// codeword bits (24 bits = 3 codeword bytes); the rest are part of the format's geometry but are
/// left at their default color.
///
/// This list must not be reordered within a pair, and must not be re-sorted: the decoder walks it
/// in this exact order to line bit index up with pair index.
pub const CELL_PAIRS: [((u32, u32), (u32, u32)); 38] = [
    ((15, 32), (21, 4)),
    ((16, 32), (20, 4)),
    ((17, 32), (19, 4)),
    ((18, 32), (18, 4)),
    ((19, 32), (17, 4)),
    ((20, 32), (16, 4)),
    ((21, 32), (15, 4)),
    ((14, 31), (22, 5)),
    ((15, 31), (21, 5)),
    ((16, 31), (20, 5)),
    ((17, 31), (19, 5)),
    ((18, 31), (18, 5)),
    ((19, 31), (17, 5)),
    ((20, 31), (16, 5)),
    ((21, 31), (15, 5)),
    ((22, 31), (14, 5)),
    ((17, 30), (19, 6)),
    ((18, 30), (18, 6)),
    ((19, 30), (17, 6)),
    ((4, 15), (32, 21)),
    ((4, 16), (32, 20)),
    ((4, 17), (32, 19)),
    ((4, 18), (32, 18)),
    ((4, 19), (32, 17)),
    ((4, 20), (32, 16)),
    ((4, 21), (32, 15)),
    ((5, 14), (31, 22)),
    ((5, 15), (31, 21)),
    ((5, 16), (31, 20)),
    ((5, 17), (31, 19)),
    ((5, 18), (31, 18)),
    ((5, 19), (31, 17)),
    ((5, 20), (31, 16)),
    ((5, 21), (31, 15)),
    ((5, 22), (31, 14)),
    ((6, 17), (30, 19)),
    ((6, 18), (30, 18)),
    ((6, 19), (30, 17)),
];

/// Number of leading pairs that actually carry reserved-codeword bits (24 bits = 3 bytes).
pub const CARRIED_PAIR_COUNT: usize = 24;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn list_has_exactly_thirty_eight_pairs() {
        assert_eq!(CELL_PAIRS.len(), 38);
    }

    #[test]
    fn carried_count_matches_reserved_codeword_bits() {
        assert_eq!(CARRIED_PAIR_COUNT, 24);
        assert!(CARRIED_PAIR_COUNT <= CELL_PAIRS.len());
    }

    #[test]
    fn no_cell_appears_twice_across_the_list() {
        let mut seen = HashSet::new();
        for &(p1, p2) in &CELL_PAIRS {
            assert!(seen.insert(p1), "cell {p1:?} appears more than once");
            assert!(seen.insert(p2), "cell {p2:?} appears more than once");
        }
        assert_eq!(seen.len(), CELL_PAIRS.len() * 2);
    }
}
