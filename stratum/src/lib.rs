// The storage core of an immutable, columnar, null-aware dataframe engine.
//
// A frame layer (not here) owns named columns and turns the outputs of
// this core into tables: it joins by intersecting sorted key columns and
// then filtering the left side with the keep bitmap while gathering the
// right side by the matched indices, and it aggregates by handing each
// group's rows to a reduction.
//
// The core itself does no I/O. Decoders map persisted type codes through
// the registry (`ElemKind::from_code`) to pick the column kind to build.

pub use stratum_base::{err, Bitmap, CardinalityIndex, Error, Result};
pub use stratum_col::*;
