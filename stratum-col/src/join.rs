// Sorted intersection: the probe side of an equi-join between two columns
// that ascend by value. Every present left element is looked up by binary
// search in the right backing column, restricted to the backing positions
// the right window covers; a value that exists in the right storage but
// outside the right window is not a match. Nulls never match.
//
// Each present left element gets exactly one probe, and a probe that hits
// a run of equal right values reports the first of them in the window.
// Expanding duplicates into every pairing is left to the caller.

use stratum_base::Bitmap;
use tracing::debug;

use crate::{nullable::Nullable, value::Elem};

/// Output of a sorted intersection. `keep` has one bit per element of the
/// left window, set where that element matched; `right` holds, in left
/// order, the right-window-relative index each kept left element matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinResult {
    pub right: Vec<usize>,
    pub keep: Bitmap,
}

impl JoinResult {
    /// Number of matched pairs.
    pub fn len(&self) -> usize {
        self.right.len()
    }

    pub fn is_empty(&self) -> bool {
        self.right.is_empty()
    }

    /// Matched `(left, right)` pairs, both relative to their windows.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.keep.ones().zip(self.right.iter().copied())
    }
}

/// Both columns must ascend over their present values; the result is
/// unspecified otherwise.
pub fn intersect<T: Elem>(left: &Nullable<T>, right: &Nullable<T>) -> JoinResult {
    debug_assert!(left.is_sorted() && right.is_sorted());
    let mut keep = Bitmap::new(left.len());
    let mut right_rows = Vec::new();
    let window = right.backing_range();
    let mut phys = left.backing_range().start;
    for i in 0..left.len() {
        if !left.bitmap().get(left.offset() + i) {
            continue;
        }
        let val = left.backing().at(phys);
        phys += 1;
        let Ok(pos) = right.backing().search_in(window.clone(), val) else {
            continue;
        };
        if let Some(row) = right.presence().logical_index(pos) {
            right_rows.push(row - right.offset());
            keep.set(i, true);
        }
    }
    debug!(
        target: "stratum",
        left = left.len(),
        right = right.len(),
        matched = right_rows.len(),
        "sorted intersection"
    );
    JoinResult {
        right: right_rows,
        keep,
    }
}
