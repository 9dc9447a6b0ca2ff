// Columns are immutable, typed, and null-aware.
//
// - A _backing_ column (`Dense`) is a contiguous, null-free run of values
//   of one element type, shared by reference count.
//
// - A _nullable_ column (`Nullable`) pairs a backing column with a presence
//   bitmap and a window [offset, offset+size) over that bitmap. The
//   cardinality index maps a present logical index to its backing position.
//   Slices share the backing column, bitmap and index.
//
// - A `Column` is the sum over the eleven element kinds of the type
//   registry, each holding a `Nullable` of its element type.
//
// On top of these sit the sorted intersection used by equi-joins, and the
// mean / group reduction contracts used by aggregation.
//
// Nothing here is ever mutated after construction, so every read
// operation is safe to run from many threads at once.

mod agg;
mod column;
mod dense;
mod error;
mod iter;
mod join;
mod nullable;
mod types;
mod value;

#[cfg(test)]
mod test;

pub use agg::{reduce_groups, Count, GroupByReduction, GroupRows, Max, Mean, MeanOf, Min, Numeric};
pub use column::Column;
pub use dense::Dense;
pub use error::ColError;
pub use iter::Iter;
pub use join::{intersect, JoinResult};
pub use nullable::Nullable;
pub use types::{code_to_desc, desc_to_code, ElemKind, Order, TypeDesc, Width};
pub use value::{Date, DateTime, Decimal, Elem};
