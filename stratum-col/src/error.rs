use crate::types::ElemKind;

/// Typed causes of column errors. These surface through
/// `stratum_base::Error` and can be recovered with `Error::downcast_ref`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColError {
    /// A persisted type code outside the closed set of element kinds.
    UnknownTypeCode(String),
    /// A logical index outside `[0, len)`.
    IndexOutOfRange { index: usize, len: usize },
    /// A slice range not contained in `[0, len)`.
    SliceOutOfRange { from: usize, to: usize, len: usize },
    /// Attempted to dereference a logically-null element.
    NullValue { index: usize },
    /// Operands or accessors of differing element kinds.
    KindMismatch { expected: ElemKind, found: ElemKind },
    /// Numeric operation requested of a non-numeric kind.
    NotNumeric(ElemKind),
    /// Presence bitmap and backing column disagree on the non-null count.
    BackingMismatch { expected: usize, found: usize },
    /// A bitmap of the wrong length for the column it filters.
    MaskLength { expected: usize, found: usize },
    /// Decimal scale beyond what fits exactly in the comparison width.
    DecimalScale(u8),
}

impl std::fmt::Display for ColError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColError::UnknownTypeCode(code) => write!(f, "unknown type code {:?}", code),
            ColError::IndexOutOfRange { index, len } => {
                write!(f, "index {} out of range for column of length {}", index, len)
            }
            ColError::SliceOutOfRange { from, to, len } => {
                write!(f, "slice {}..{} out of range for column of length {}", from, to, len)
            }
            ColError::NullValue { index } => write!(f, "null value at index {}", index),
            ColError::KindMismatch { expected, found } => {
                write!(f, "expected {} column, found {}", expected, found)
            }
            ColError::NotNumeric(kind) => write!(f, "{} column is not numeric", kind),
            ColError::BackingMismatch { expected, found } => write!(
                f,
                "presence bitmap has {} set bits but backing column has {} values",
                expected, found
            ),
            ColError::MaskLength { expected, found } => {
                write!(f, "mask of {} bits applied to column of length {}", found, expected)
            }
            ColError::DecimalScale(scale) => write!(f, "decimal scale {} too large", scale),
        }
    }
}

impl std::error::Error for ColError {}
