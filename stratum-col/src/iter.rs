use std::iter::FusedIterator;

use crate::{nullable::Nullable, value::Elem};

/// Positional iterator over a nullable window, from either end. Yields
/// `None` for null elements. It borrows the column and has no way to
/// change it.
///
/// Each end carries its own backing position, so stepping costs one
/// bitmap probe rather than a rank query.
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    col: &'a Nullable<T>,
    front: usize,
    back: usize,
    front_phys: usize,
    back_phys: usize,
}

impl<'a, T: Elem> Iter<'a, T> {
    pub(crate) fn new(col: &'a Nullable<T>) -> Self {
        let phys = col.backing_range();
        Iter {
            col,
            front: 0,
            back: col.len(),
            front_phys: phys.start,
            back_phys: phys.end,
        }
    }
}

impl<'a, T: Elem> Iterator for Iter<'a, T> {
    type Item = Option<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let bit = self.col.offset() + self.front;
        self.front += 1;
        if self.col.bitmap().get(bit) {
            let v = self.col.backing().at(self.front_phys);
            self.front_phys += 1;
            Some(Some(v))
        } else {
            Some(None)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl<'a, T: Elem> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        let bit = self.col.offset() + self.back;
        if self.col.bitmap().get(bit) {
            self.back_phys -= 1;
            Some(Some(self.col.backing().at(self.back_phys)))
        } else {
            Some(None)
        }
    }
}

impl<'a, T: Elem> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: Elem> FusedIterator for Iter<'a, T> {}
