// A cardinality index answers rank queries over a presence bitmap: how
// many set bits precede a given bit. For a nullable column that is exactly
// the position of a present value in the dense array of non-null values.
//
// Small bitmaps (at most one block) are popcounted directly on every call.
// Larger bitmaps get a table of cumulative counts at every block boundary,
// built once here; a query then counts only the partial block before it.
//
// The bitmap is shared and never mutated, so the table is never
// invalidated and the index can be read from any number of threads.

use std::sync::Arc;
use tracing::trace;

use crate::Bitmap;

#[derive(Clone, PartialEq, Eq, Debug, Hash)]
enum Strategy {
    Scan,
    // blocks[k] is the number of set bits in [0, k * BLOCK_BITS).
    Blocks(Box<[usize]>),
}

#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct CardinalityIndex {
    bitmap: Arc<Bitmap>,
    strategy: Strategy,
}

impl CardinalityIndex {
    /// Width of one block, and the largest bitmap handled by direct scan.
    pub const BLOCK_BITS: usize = 32;

    pub fn of(bitmap: Arc<Bitmap>) -> Self {
        let len = bitmap.len();
        if len <= Self::BLOCK_BITS {
            return CardinalityIndex {
                bitmap,
                strategy: Strategy::Scan,
            };
        }
        let nblocks = len / Self::BLOCK_BITS;
        let mut blocks = Vec::with_capacity(nblocks + 1);
        let mut running = 0;
        for k in 0..=nblocks {
            blocks.push(running);
            let lo = k * Self::BLOCK_BITS;
            let hi = (lo + Self::BLOCK_BITS).min(len);
            running += bitmap.count_range(lo, hi);
        }
        trace!(target: "stratum", len, blocks = blocks.len(), "built cardinality block table");
        CardinalityIndex {
            bitmap,
            strategy: Strategy::Blocks(blocks.into_boxed_slice()),
        }
    }

    pub fn bitmap(&self) -> &Arc<Bitmap> {
        &self.bitmap
    }

    pub fn len(&self) -> usize {
        self.bitmap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bitmap.is_empty()
    }

    pub fn is_block_cached(&self) -> bool {
        matches!(self.strategy, Strategy::Blocks(_))
    }

    /// Number of set bits in `[0, i)`, for `i <= len`.
    ///
    /// # Panics
    ///
    /// If `i > len`.
    #[inline]
    pub fn non_null_index(&self, i: usize) -> usize {
        match &self.strategy {
            Strategy::Scan => self.bitmap.count_range(0, i),
            Strategy::Blocks(blocks) => {
                let k = i / Self::BLOCK_BITS;
                let lo = k * Self::BLOCK_BITS;
                blocks[k] + self.bitmap.count_range(lo, i)
            }
        }
    }

    /// Total number of set bits.
    pub fn non_null_count(&self) -> usize {
        self.non_null_index(self.len())
    }

    /// Inverse of `non_null_index`: the bit index of the `rank`-th set bit
    /// (counting from zero), or `None` if there are not that many.
    pub fn logical_index(&self, rank: usize) -> Option<usize> {
        let (start, mut seen) = match &self.strategy {
            Strategy::Scan => (0, 0),
            Strategy::Blocks(blocks) => {
                // Last boundary with fewer than rank+1 bits before it.
                let k = blocks.partition_point(|&c| c <= rank).saturating_sub(1);
                (k * Self::BLOCK_BITS, blocks[k])
            }
        };
        for i in start..self.len() {
            if self.bitmap.get(i) {
                if seen == rank {
                    return Some(i);
                }
                seen += 1;
            }
        }
        None
    }
}
