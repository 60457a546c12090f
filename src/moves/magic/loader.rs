//! Produces the process-wide [`MagicTables`] used for sliding piece move
//! generation. Generation runs the magic-number search once per process and
//! caches the result, mirroring the lazy-global pattern `hash::zobrist` uses
//! for Zobrist keys.

use super::precompute::{MagicTableSeed, generate_magic_tables};
use super::structs::MagicTables;
use once_cell::sync::OnceCell;

#[cfg(feature = "load_magic")]
const MAGIC_SEED: u64 = 0x5A17_3C2E_9F01_B84D;

fn magic_seed() -> MagicTableSeed {
    #[cfg(feature = "load_magic")]
    {
        MagicTableSeed::Fixed(MAGIC_SEED)
    }
    #[cfg(all(not(feature = "load_magic"), feature = "deterministic_magic"))]
    {
        MagicTableSeed::Fixed(0x9E37_79B9_7F4A_7C15)
    }
    #[cfg(all(not(feature = "load_magic"), not(feature = "deterministic_magic")))]
    {
        MagicTableSeed::Random
    }
}

/// Returns the shared magic bitboard tables, generating them on first call.
pub fn load_magic_tables() -> MagicTables {
    static TABLES: OnceCell<MagicTables> = OnceCell::new();
    TABLES
        .get_or_init(|| generate_magic_tables(magic_seed()).expect("magic number search failed"))
        .clone()
}
