//! Flat cache of static evaluations keyed by Zobrist hash.
//!
//! Unlike [`super::tt::TranspositionTable`] this never stores a move, depth,
//! or bound: `static_eval` is a pure function of the position, so a cache hit
//! just needs the stored score to match the key.

#[derive(Clone, Copy, Debug)]
struct EvalEntry {
    key: u64,
    score: i32,
}

const EMPTY: EvalEntry = EvalEntry { key: 0, score: 0 };

pub struct EvalCache {
    entries: Vec<EvalEntry>,
}

impl EvalCache {
    pub fn new(size_mb: usize) -> Self {
        let entry_size = std::mem::size_of::<EvalEntry>();
        let num_entries = (size_mb * 1024 * 1024) / entry_size;

        let mut capacity = 1;
        while capacity * 2 <= num_entries {
            capacity *= 2;
        }

        Self {
            entries: vec![EMPTY; capacity.max(1)],
        }
    }

    pub fn clear(&mut self) {
        for entry in self.entries.iter_mut() {
            *entry = EMPTY;
        }
    }

    #[inline]
    fn index(&self, key: u64) -> usize {
        (key as usize) & (self.entries.len() - 1)
    }

    pub fn probe(&self, key: u64) -> Option<i32> {
        let entry = &self.entries[self.index(key)];
        if entry.key == key { Some(entry.score) } else { None }
    }

    pub fn store(&mut self, key: u64, score: i32) {
        let index = self.index(key);
        self.entries[index] = EvalEntry { key, score };
    }
}
