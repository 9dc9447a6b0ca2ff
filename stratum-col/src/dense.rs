use std::{ops::Range, sync::Arc};

/// A dense, null-free, immutable run of values. Clones share the buffer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Dense<T> {
    vals: Arc<[T]>,
}

impl<T> Default for Dense<T> {
    fn default() -> Self {
        Dense {
            vals: Arc::from(Vec::new()),
        }
    }
}

impl<T> From<Vec<T>> for Dense<T> {
    fn from(vals: Vec<T>) -> Self {
        Dense {
            vals: Arc::from(vals),
        }
    }
}

impl<T> FromIterator<T> for Dense<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Dense {
            vals: iter.into_iter().collect(),
        }
    }
}

impl<T> Dense<T> {
    pub fn len(&self) -> usize {
        self.vals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vals.is_empty()
    }

    /// # Panics
    ///
    /// If `i >= len`.
    #[inline]
    pub fn at(&self, i: usize) -> &T {
        &self.vals[i]
    }

    pub fn get(&self, i: usize) -> Option<&T> {
        self.vals.get(i)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.vals
    }

    pub fn shares_buffer(&self, other: &Dense<T>) -> bool {
        Arc::ptr_eq(&self.vals, &other.vals)
    }
}

impl<T: Ord> Dense<T> {
    pub fn is_sorted(&self) -> bool {
        self.vals.windows(2).all(|w| w[0] <= w[1])
    }

    /// Binary search over an ascending column. Returns `Ok` with the first
    /// position holding `val`, or `Err` with the position it would be
    /// inserted at.
    pub fn search(&self, val: &T) -> Result<usize, usize> {
        self.search_in(0..self.len(), val)
    }

    /// As `search`, restricted to positions in `range`. Positions returned
    /// are positions in the whole column.
    ///
    /// # Panics
    ///
    /// If `range` is not inside `0..len`.
    pub fn search_in(&self, range: Range<usize>, val: &T) -> Result<usize, usize> {
        let lo = range.start;
        let sub = &self.vals[range];
        let pos = sub.partition_point(|x| x < val);
        match sub.get(pos) {
            Some(x) if x == val => Ok(lo + pos),
            _ => Err(lo + pos),
        }
    }
}
