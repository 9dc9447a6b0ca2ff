use std::{
    cmp::Ordering,
    fmt::Debug,
    hash::{Hash, Hasher},
};

use ordered_float::OrderedFloat;
use stratum_base::Result;

use crate::{column::Column, error::ColError, nullable::Nullable, types::ElemKind};

/// An element type that can live in a column. Every element is totally
/// ordered so that sorted columns can be binary searched; floats get there
/// through `OrderedFloat`.
pub trait Elem: Clone + Ord + Debug + Send + Sync + 'static {
    const KIND: ElemKind;
    fn into_column(col: Nullable<Self>) -> Column;
    fn from_column(col: &Column) -> Option<&Nullable<Self>>;
}

/// Days since 1970-01-01.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Date(pub i32);

/// Microseconds since 1970-01-01T00:00:00Z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct DateTime(pub i64);

impl Date {
    pub fn days(self) -> i32 {
        self.0
    }
}

impl DateTime {
    pub const MICROS_PER_DAY: i64 = 86_400_000_000;

    pub fn micros(self) -> i64 {
        self.0
    }

    pub fn date(self) -> Date {
        Date(self.0.div_euclid(Self::MICROS_PER_DAY) as i32)
    }
}

/// A fixed-point decimal: `units * 10^-scale`. Values with different
/// scales compare and hash by numeric value, so `1.50 == 1.5`.
#[derive(Debug, Clone, Copy)]
pub struct Decimal {
    units: i64,
    scale: u8,
}

impl Decimal {
    /// `i64::MAX * 10^18` still fits in an `i128`, so any two decimals
    /// can be brought to a common scale exactly.
    pub const MAX_SCALE: u8 = 18;

    pub fn new(units: i64, scale: u8) -> Result<Self> {
        if scale > Self::MAX_SCALE {
            return Err(ColError::DecimalScale(scale).into());
        }
        Ok(Decimal { units, scale })
    }

    pub fn units(self) -> i64 {
        self.units
    }

    pub fn scale(self) -> u8 {
        self.scale
    }

    pub fn to_f64(self) -> f64 {
        self.units as f64 / 10_f64.powi(self.scale as i32)
    }

    fn widened(self, scale: u8) -> i128 {
        self.units as i128 * 10_i128.pow((scale - self.scale) as u32)
    }

    // Smallest scale representing the same value.
    fn normalized(self) -> (i64, u8) {
        let (mut units, mut scale) = (self.units, self.scale);
        while scale > 0 && units % 10 == 0 {
            units /= 10;
            scale -= 1;
        }
        (units, scale)
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        let scale = self.scale.max(other.scale);
        self.widened(scale).cmp(&other.widened(scale))
    }
}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Decimal {}

impl Hash for Decimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized().hash(state)
    }
}

impl std::fmt::Display for Decimal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.scale == 0 {
            return write!(f, "{}", self.units);
        }
        let pow = 10_u64.pow(self.scale as u32);
        let sign = if self.units < 0 { "-" } else { "" };
        let mag = self.units.unsigned_abs();
        write!(
            f,
            "{}{}.{:0width$}",
            sign,
            mag / pow,
            mag % pow,
            width = self.scale as usize
        )
    }
}

macro_rules! impl_elem {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl Elem for $ty {
                const KIND: ElemKind = ElemKind::$variant;
                fn into_column(col: Nullable<Self>) -> Column {
                    Column::$variant(col)
                }
                fn from_column(col: &Column) -> Option<&Nullable<Self>> {
                    match col {
                        Column::$variant(c) => Some(c),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_elem! {
    bool => Boolean,
    Date => Date,
    DateTime => DateTime,
    OrderedFloat<f64> => Double,
    OrderedFloat<f32> => Float,
    i32 => Int,
    i64 => Long,
    i16 => Short,
    i8 => Byte,
    String => String,
    Decimal => Decimal,
}
