use std::fmt::Debug;

use ordered_float::OrderedFloat;
use stratum_base::Result;

use crate::{error::ColError, nullable::Nullable, value::{Decimal, Elem}};

/// Element kinds that have an arithmetic mean.
pub trait Numeric: Elem {
    fn to_f64(&self) -> f64;
}

macro_rules! impl_numeric_as {
    ($($ty:ty),*) => {
        $(
            impl Numeric for $ty {
                fn to_f64(&self) -> f64 {
                    *self as f64
                }
            }
        )*
    };
}

impl_numeric_as!(i8, i16, i32, i64);

impl Numeric for OrderedFloat<f32> {
    fn to_f64(&self) -> f64 {
        self.0 as f64
    }
}

impl Numeric for OrderedFloat<f64> {
    fn to_f64(&self) -> f64 {
        self.0
    }
}

impl Numeric for Decimal {
    fn to_f64(&self) -> f64 {
        Decimal::to_f64(*self)
    }
}

pub trait Mean {
    /// Arithmetic mean of the present values; NaN when there are none.
    fn mean(&self) -> f64;
}

impl<T: Numeric> Mean for Nullable<T> {
    fn mean(&self) -> f64 {
        let vals = self.values();
        if vals.is_empty() {
            return f64::NAN;
        }
        vals.iter().map(Numeric::to_f64).sum::<f64>() / vals.len() as f64
    }
}

/// Reduces the rows of one group to a single comparable value. The engine
/// calls `reduce` once per group and expects no side effects.
pub trait GroupByReduction<T: Elem> {
    type Output: Ord + Clone + Debug;
    fn reduce(&self, rows: GroupRows<'_, T>) -> Self::Output;
}

/// The elements of one group, in the order the group lists them.
#[derive(Debug, Clone)]
pub struct GroupRows<'a, T> {
    col: &'a Nullable<T>,
    rows: std::slice::Iter<'a, usize>,
}

impl<'a, T: Elem> Iterator for GroupRows<'a, T> {
    type Item = Option<&'a T>;
    fn next(&mut self) -> Option<Self::Item> {
        self.rows.next().map(|&i| self.col.get_opt(i))
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.rows.size_hint()
    }
}

impl<'a, T: Elem> ExactSizeIterator for GroupRows<'a, T> {}

/// Applies `reduction` once to each group of logical row indices.
pub fn reduce_groups<T: Elem, R: GroupByReduction<T>>(
    col: &Nullable<T>,
    groups: &[Vec<usize>],
    reduction: &R,
) -> Result<Vec<R::Output>> {
    for &i in groups.iter().flatten() {
        if i >= col.len() {
            return Err(ColError::IndexOutOfRange {
                index: i,
                len: col.len(),
            }
            .into());
        }
    }
    Ok(groups
        .iter()
        .map(|rows| {
            reduction.reduce(GroupRows {
                col,
                rows: rows.iter(),
            })
        })
        .collect())
}

/// Number of present values in the group.
#[derive(Debug, Clone, Copy, Default)]
pub struct Count;

impl<T: Elem> GroupByReduction<T> for Count {
    type Output = usize;
    fn reduce(&self, rows: GroupRows<'_, T>) -> usize {
        rows.flatten().count()
    }
}

/// Smallest present value, `None` if the group is all null.
#[derive(Debug, Clone, Copy, Default)]
pub struct Min;

impl<T: Elem> GroupByReduction<T> for Min {
    type Output = Option<T>;
    fn reduce(&self, rows: GroupRows<'_, T>) -> Option<T> {
        rows.flatten().min().cloned()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Max;

impl<T: Elem> GroupByReduction<T> for Max {
    type Output = Option<T>;
    fn reduce(&self, rows: GroupRows<'_, T>) -> Option<T> {
        rows.flatten().max().cloned()
    }
}

/// Mean of the present values, NaN for an all-null group. Wrapped so
/// group results stay totally ordered.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanOf;

impl<T: Numeric> GroupByReduction<T> for MeanOf {
    type Output = OrderedFloat<f64>;
    fn reduce(&self, rows: GroupRows<'_, T>) -> OrderedFloat<f64> {
        let (sum, n) = rows
            .flatten()
            .fold((0.0, 0_usize), |(sum, n), v| (sum + v.to_f64(), n + 1));
        if n == 0 {
            OrderedFloat(f64::NAN)
        } else {
            OrderedFloat(sum / n as f64)
        }
    }
}
