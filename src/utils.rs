//! Small bit-twiddling helpers shared across the move generator and attack tables.

/// Clears and returns the index of the least-significant set bit.
///
/// Panics in debug builds if `bb` is already zero; callers are expected to
/// check for an empty bitboard before popping from it.
#[inline(always)]
pub fn pop_lsb(bb: &mut u64) -> u8 {
    debug_assert!(*bb != 0, "pop_lsb called on an empty bitboard");
    let idx = bb.trailing_zeros() as u8;
    *bb &= *bb - 1;
    idx
}

/// Maps (rank, file), both 0..=7, to a 0..=63 square index with A1 = 0.
#[inline(always)]
pub const fn square_index(rank: usize, file: usize) -> usize {
    rank * 8 + file
}
