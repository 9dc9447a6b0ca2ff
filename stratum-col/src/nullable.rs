// A nullable column is a window [offset, offset+size) over a presence
// bitmap, plus a dense backing column holding only the present values in
// bitmap order. The value at logical index i (when present) lives at
// backing position rank(offset + i), which the cardinality index answers.
//
// Slicing narrows the window and shares everything else, so it never
// copies and never touches the bitmap or the backing values.

use std::sync::Arc;

use stratum_base::{Bitmap, CardinalityIndex, Result};
use tracing::debug;

use crate::{dense::Dense, error::ColError, iter::Iter, value::Elem};

#[derive(Debug, Clone)]
pub struct Nullable<T> {
    backing: Dense<T>,
    presence: Arc<CardinalityIndex>,
    offset: usize,
    size: usize,
}

impl<T: Elem> Nullable<T> {
    /// Wraps a finished backing column and its presence bitmap. The bitmap
    /// must have exactly one set bit per backing value.
    pub fn try_new(backing: Dense<T>, bitmap: Bitmap) -> Result<Self> {
        let present = bitmap.count();
        if present != backing.len() {
            return Err(ColError::BackingMismatch {
                expected: present,
                found: backing.len(),
            }
            .into());
        }
        let size = bitmap.len();
        let presence = Arc::new(CardinalityIndex::of(Arc::new(bitmap)));
        let kind = T::KIND;
        debug!(
            target: "stratum",
            %kind,
            size,
            nulls = size - present,
            "wrapped nullable column"
        );
        Ok(Nullable {
            backing,
            presence,
            offset: 0,
            size,
        })
    }

    /// A column with no nulls.
    pub fn from_values(vals: Vec<T>) -> Self {
        let size = vals.len();
        Nullable {
            backing: Dense::from(vals),
            presence: Arc::new(CardinalityIndex::of(Arc::new(Bitmap::all_set(size)))),
            offset: 0,
            size,
        }
    }

    pub fn from_options(vals: impl IntoIterator<Item = Option<T>>) -> Self {
        let mut bitmap = Bitmap::default();
        let mut present = Vec::new();
        for v in vals {
            bitmap.push(v.is_some());
            present.extend(v);
        }
        let size = bitmap.len();
        Nullable {
            backing: Dense::from(present),
            presence: Arc::new(CardinalityIndex::of(Arc::new(bitmap))),
            offset: 0,
            size,
        }
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Bitmap index of the first element of the window.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Bitmap index of the last element of the window, if there is one.
    pub fn last_index(&self) -> Option<usize> {
        if self.size == 0 {
            None
        } else {
            Some(self.offset + self.size - 1)
        }
    }

    pub fn backing(&self) -> &Dense<T> {
        &self.backing
    }

    pub fn bitmap(&self) -> &Bitmap {
        self.presence.bitmap()
    }

    pub fn presence(&self) -> &CardinalityIndex {
        &self.presence
    }

    /// Backing positions of the values present in the window.
    pub fn backing_range(&self) -> std::ops::Range<usize> {
        self.presence.non_null_index(self.offset)..self.presence.non_null_index(self.offset + self.size)
    }

    fn check_index(&self, i: usize) -> Result<()> {
        if i >= self.size {
            return Err(ColError::IndexOutOfRange {
                index: i,
                len: self.size,
            }
            .into());
        }
        Ok(())
    }

    pub fn try_is_null(&self, i: usize) -> Result<bool> {
        self.check_index(i)?;
        Ok(!self.bitmap().get(self.offset + i))
    }

    /// # Panics
    ///
    /// If `i >= len`.
    pub fn is_null(&self, i: usize) -> bool {
        assert!(i < self.size, "index {} out of range for column of length {}", i, self.size);
        !self.bitmap().get(self.offset + i)
    }

    pub fn null_count(&self) -> usize {
        self.size - self.backing_range().len()
    }

    pub fn try_get(&self, i: usize) -> Result<&T> {
        self.check_index(i)?;
        let bit = self.offset + i;
        if !self.bitmap().get(bit) {
            return Err(ColError::NullValue { index: i }.into());
        }
        Ok(self.backing.at(self.presence.non_null_index(bit)))
    }

    /// # Panics
    ///
    /// If `i >= len` or the element at `i` is null.
    pub fn get(&self, i: usize) -> &T {
        match self.try_get(i) {
            Ok(v) => v,
            Err(e) => panic!("{}", e),
        }
    }

    /// # Panics
    ///
    /// If `i >= len`.
    pub fn get_opt(&self, i: usize) -> Option<&T> {
        if self.is_null(i) {
            None
        } else {
            Some(self.backing.at(self.presence.non_null_index(self.offset + i)))
        }
    }

    /// A view of `[from, to)` of this window, sharing storage.
    pub fn try_slice(&self, from: usize, to: usize) -> Result<Self> {
        if from > to || to > self.size {
            return Err(ColError::SliceOutOfRange {
                from,
                to,
                len: self.size,
            }
            .into());
        }
        Ok(Nullable {
            backing: self.backing.clone(),
            presence: self.presence.clone(),
            offset: self.offset + from,
            size: to - from,
        })
    }

    /// # Panics
    ///
    /// If `[from, to)` is not inside `[0, len)`.
    pub fn slice(&self, from: usize, to: usize) -> Self {
        match self.try_slice(from, to) {
            Ok(s) => s,
            Err(e) => panic!("{}", e),
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// The present values of the window, in order.
    pub fn values(&self) -> &[T] {
        &self.backing.as_slice()[self.backing_range()]
    }

    pub fn to_options(&self) -> Vec<Option<T>> {
        self.iter().map(|v| v.cloned()).collect()
    }

    /// Whether the present values of the window ascend.
    pub fn is_sorted(&self) -> bool {
        self.values().windows(2).all(|w| w[0] <= w[1])
    }

    /// A new column of the elements at the given logical indices.
    pub fn take(&self, indices: &[usize]) -> Result<Self> {
        for &i in indices {
            self.check_index(i)?;
        }
        Ok(Self::from_options(indices.iter().map(|&i| self.get_opt(i).cloned())))
    }

    /// A new column of the elements whose bit in `keep` is set.
    pub fn filter(&self, keep: &Bitmap) -> Result<Self> {
        if keep.len() != self.size {
            return Err(ColError::MaskLength {
                expected: self.size,
                found: keep.len(),
            }
            .into());
        }
        Ok(Self::from_options(keep.ones().map(|i| self.get_opt(i).cloned())))
    }
}

impl<T: Elem> PartialEq for Nullable<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<T: Elem> Eq for Nullable<T> {}

impl<'a, T: Elem> IntoIterator for &'a Nullable<T> {
    type Item = Option<&'a T>;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
