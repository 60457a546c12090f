//! Builds the rook/bishop magic tables used by [`super::structs::MagicTables`].
//!
//! The mask/shift/table triple for each square is derived from the
//! scan-based attack generators in [`super::attacks`], which stay around as
//! the ground truth these tables are checked against in tests.

use super::attacks::{bishop_attacks_per_square, rook_attacks_per_square};
use super::search::find_magic_number_for_square;
use super::structs::{BishopMagicTables, MagicEntry, MagicTables, RookMagicTables};
use rand::{RngCore, SeedableRng, rngs::StdRng};

/// Controls how the magic-number search is seeded.
pub enum MagicTableSeed {
    /// Deterministic seed, used by tests and the `deterministic_magic` feature
    /// so builds are reproducible.
    Fixed(u64),
    /// Seed from the OS RNG; used for one-off table generation.
    Random,
}

fn rng_for(seed: MagicTableSeed) -> StdRng {
    match seed {
        MagicTableSeed::Fixed(s) => StdRng::seed_from_u64(s),
        MagicTableSeed::Random => {
            let mut bytes = [0u8; 32];
            rand::rng().fill_bytes(&mut bytes);
            StdRng::from_seed(bytes)
        }
    }
}

const FILE_A: u64 = 0x0101_0101_0101_0101;
const FILE_H: u64 = 0x8080_8080_8080_8080;
const RANK_1: u64 = 0x0000_0000_0000_00FF;
const RANK_8: u64 = 0xFF00_0000_0000_0000;
const EDGES: u64 = FILE_A | FILE_H | RANK_1 | RANK_8;

fn rook_mask(square: usize) -> u64 {
    let full = rook_attacks_per_square(square, 0);
    let sq_rank = square / 8;
    let sq_file = square % 8;
    let file_edges = if sq_file == 0 { FILE_H } else if sq_file == 7 { FILE_A } else { FILE_A | FILE_H };
    let rank_edges = if sq_rank == 0 { RANK_8 } else if sq_rank == 7 { RANK_1 } else { RANK_1 | RANK_8 };
    full & !(file_edges | rank_edges) & !(1u64 << square)
}

fn bishop_mask(square: usize) -> u64 {
    bishop_attacks_per_square(square, 0) & !EDGES & !(1u64 << square)
}

/// Enumerates every blocker subset of `mask` via the standard
/// carry-rippler trick, pairing each with its scan-based attack set.
fn blocker_subsets(mask: u64, attacks_of: impl Fn(u64) -> u64) -> (Vec<u64>, Vec<u64>) {
    let mut blockers = Vec::new();
    let mut attacks = Vec::new();
    let mut subset: u64 = 0;
    loop {
        blockers.push(subset);
        attacks.push(attacks_of(subset));
        subset = subset.wrapping_sub(mask) & mask;
        if subset == 0 {
            break;
        }
    }
    (blockers, attacks)
}

fn build_entry(
    square: usize,
    mask: u64,
    attacks_of: impl Fn(u64) -> u64,
    rng: &mut StdRng,
) -> Result<MagicEntry, String> {
    let shift = 64 - mask.count_ones();
    let (blockers, attacks) = blocker_subsets(mask, &attacks_of);

    let magic = find_magic_number_for_square(&blockers, &attacks, shift, rng)
        .map_err(|e| format!("square {square}: {e}"))?;

    let mut table = vec![0u64; 1usize << mask.count_ones()];
    for (&blocker, &attack) in blockers.iter().zip(attacks.iter()) {
        let index = ((blocker.wrapping_mul(magic)) >> shift) as usize;
        table[index] = attack;
    }

    Ok(MagicEntry {
        magic,
        shift,
        mask,
        table: table.into_boxed_slice(),
    })
}

pub fn generate_magic_tables(seed: MagicTableSeed) -> Result<MagicTables, String> {
    let mut rng = rng_for(seed);

    let mut rook_entries = Vec::with_capacity(64);
    let mut bishop_entries = Vec::with_capacity(64);

    for square in 0..64 {
        let r_mask = rook_mask(square);
        rook_entries.push(build_entry(
            square,
            r_mask,
            |blockers| rook_attacks_per_square(square, blockers),
            &mut rng,
        )?);

        let b_mask = bishop_mask(square);
        bishop_entries.push(build_entry(
            square,
            b_mask,
            |blockers| bishop_attacks_per_square(square, blockers),
            &mut rng,
        )?);
    }

    Ok(MagicTables {
        rook: RookMagicTables {
            entries: rook_entries,
        },
        bishop: BishopMagicTables {
            entries: bishop_entries,
        },
    })
}
