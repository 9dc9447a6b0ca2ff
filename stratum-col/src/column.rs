use ordered_float::OrderedFloat;
use stratum_base::Result;

use crate::{
    agg::Mean,
    error::ColError,
    join::{self, JoinResult},
    nullable::Nullable,
    types::{ElemKind, TypeDesc},
    value::{Date, DateTime, Decimal, Elem},
};

/// A nullable column of any element kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Column {
    Boolean(Nullable<bool>),
    Date(Nullable<Date>),
    DateTime(Nullable<DateTime>),
    Double(Nullable<OrderedFloat<f64>>),
    Float(Nullable<OrderedFloat<f32>>),
    Int(Nullable<i32>),
    Long(Nullable<i64>),
    Short(Nullable<i16>),
    Byte(Nullable<i8>),
    String(Nullable<String>),
    Decimal(Nullable<Decimal>),
}

// Runs `$body` with `$c` bound to the inner Nullable, whatever its kind.
macro_rules! with_col {
    ($col:expr, $c:ident => $body:expr) => {
        match $col {
            Column::Boolean($c) => $body,
            Column::Date($c) => $body,
            Column::DateTime($c) => $body,
            Column::Double($c) => $body,
            Column::Float($c) => $body,
            Column::Int($c) => $body,
            Column::Long($c) => $body,
            Column::Short($c) => $body,
            Column::Byte($c) => $body,
            Column::String($c) => $body,
            Column::Decimal($c) => $body,
        }
    };
}

// As with_col, for two columns that must be of the same kind.
macro_rules! with_pair {
    ($left:expr, $right:expr, $l:ident, $r:ident => $body:expr) => {
        match ($left, $right) {
            (Column::Boolean($l), Column::Boolean($r)) => Ok($body),
            (Column::Date($l), Column::Date($r)) => Ok($body),
            (Column::DateTime($l), Column::DateTime($r)) => Ok($body),
            (Column::Double($l), Column::Double($r)) => Ok($body),
            (Column::Float($l), Column::Float($r)) => Ok($body),
            (Column::Int($l), Column::Int($r)) => Ok($body),
            (Column::Long($l), Column::Long($r)) => Ok($body),
            (Column::Short($l), Column::Short($r)) => Ok($body),
            (Column::Byte($l), Column::Byte($r)) => Ok($body),
            (Column::String($l), Column::String($r)) => Ok($body),
            (Column::Decimal($l), Column::Decimal($r)) => Ok($body),
            (l, r) => Err(ColError::KindMismatch {
                expected: l.kind(),
                found: r.kind(),
            }
            .into()),
        }
    };
}

// Typed accessors returning the element by value (or borrowed, for strings).
macro_rules! typed_getters {
    ($($name:ident: $variant:ident -> $ret:ty = |$v:ident| $conv:expr;)*) => {
        $(
            pub fn $name(&self, i: usize) -> Result<$ret> {
                match self {
                    Column::$variant(c) => {
                        let $v = c.try_get(i)?;
                        Ok($conv)
                    }
                    other => Err(ColError::KindMismatch {
                        expected: ElemKind::$variant,
                        found: other.kind(),
                    }
                    .into()),
                }
            }
        )*
    };
}

impl Column {
    /// An empty column of `kind`; the starting point for building a result
    /// of the same kind as some input.
    pub fn empty(kind: ElemKind) -> Column {
        match kind {
            ElemKind::Boolean => Column::Boolean(Nullable::from_values(Vec::new())),
            ElemKind::Date => Column::Date(Nullable::from_values(Vec::new())),
            ElemKind::DateTime => Column::DateTime(Nullable::from_values(Vec::new())),
            ElemKind::Double => Column::Double(Nullable::from_values(Vec::new())),
            ElemKind::Float => Column::Float(Nullable::from_values(Vec::new())),
            ElemKind::Int => Column::Int(Nullable::from_values(Vec::new())),
            ElemKind::Long => Column::Long(Nullable::from_values(Vec::new())),
            ElemKind::Short => Column::Short(Nullable::from_values(Vec::new())),
            ElemKind::Byte => Column::Byte(Nullable::from_values(Vec::new())),
            ElemKind::String => Column::String(Nullable::from_values(Vec::new())),
            ElemKind::Decimal => Column::Decimal(Nullable::from_values(Vec::new())),
        }
    }

    pub fn kind(&self) -> ElemKind {
        with_col!(self, c => kind_of(c))
    }

    pub fn desc(&self) -> &'static TypeDesc {
        self.kind().desc()
    }

    /// The inner column, if it holds elements of type `T`.
    pub fn downcast<T: Elem>(&self) -> Option<&Nullable<T>> {
        T::from_column(self)
    }

    pub fn len(&self) -> usize {
        with_col!(self, c => c.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn try_is_null(&self, i: usize) -> Result<bool> {
        with_col!(self, c => c.try_is_null(i))
    }

    pub fn null_count(&self) -> usize {
        with_col!(self, c => c.null_count())
    }

    pub fn try_slice(&self, from: usize, to: usize) -> Result<Column> {
        with_col!(self, c => Ok(Column::from(c.try_slice(from, to)?)))
    }

    pub fn take(&self, indices: &[usize]) -> Result<Column> {
        with_col!(self, c => Ok(Column::from(c.take(indices)?)))
    }

    pub fn filter(&self, keep: &stratum_base::Bitmap) -> Result<Column> {
        with_col!(self, c => Ok(Column::from(c.filter(keep)?)))
    }

    /// Sorted intersection with `right`; both must be of the same kind.
    pub fn intersect(&self, right: &Column) -> Result<JoinResult> {
        with_pair!(self, right, l, r => join::intersect(l, r))
    }

    pub fn try_mean(&self) -> Result<f64> {
        match self {
            Column::Double(c) => Ok(c.mean()),
            Column::Float(c) => Ok(c.mean()),
            Column::Int(c) => Ok(c.mean()),
            Column::Long(c) => Ok(c.mean()),
            Column::Short(c) => Ok(c.mean()),
            Column::Byte(c) => Ok(c.mean()),
            Column::Decimal(c) => Ok(c.mean()),
            other => Err(ColError::NotNumeric(other.kind()).into()),
        }
    }

    typed_getters! {
        try_get_boolean: Boolean -> bool = |v| *v;
        try_get_date: Date -> Date = |v| *v;
        try_get_date_time: DateTime -> DateTime = |v| *v;
        try_get_double: Double -> f64 = |v| v.0;
        try_get_float: Float -> f32 = |v| v.0;
        try_get_int: Int -> i32 = |v| *v;
        try_get_long: Long -> i64 = |v| *v;
        try_get_short: Short -> i16 = |v| *v;
        try_get_byte: Byte -> i8 = |v| *v;
        try_get_string: String -> &str = |v| v.as_str();
        try_get_decimal: Decimal -> Decimal = |v| *v;
    }
}

fn kind_of<T: Elem>(_: &Nullable<T>) -> ElemKind {
    T::KIND
}

impl<T: Elem> From<Nullable<T>> for Column {
    fn from(col: Nullable<T>) -> Self {
        T::into_column(col)
    }
}
