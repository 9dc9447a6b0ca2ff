// The type registry: a closed set of element kinds, each with a short
// code that is what gets persisted, and a static descriptor. Adding a kind
// means adding a variant here, a row to DESCS, and a Column variant.

use serde::{Deserialize, Serialize};
use stratum_base::Result;

use crate::error::ColError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
#[repr(u8)]
pub enum ElemKind {
    Boolean = 0,
    Date = 1,
    DateTime = 2,
    Double = 3,
    Float = 4,
    Int = 5,
    Long = 6,
    Short = 7,
    Byte = 8,
    String = 9,
    Decimal = 10,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Width {
    Fixed(usize),
    Variable,
}

/// How values of a kind compare. Every kind is totally ordered; this
/// records what that order means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    /// false < true
    Boolean,
    Numeric,
    Chronological,
    /// Bytewise on UTF-8.
    Lexicographic,
}

#[derive(Debug, PartialEq, Eq, Hash)]
pub struct TypeDesc {
    pub kind: ElemKind,
    pub code: &'static str,
    pub name: &'static str,
    pub width: Width,
    pub order: Order,
}

impl TypeDesc {
    pub fn is_numeric(&self) -> bool {
        self.order == Order::Numeric
    }
}

// Indexed by `ElemKind as usize`.
static DESCS: [TypeDesc; 11] = [
    TypeDesc { kind: ElemKind::Boolean, code: "bool", name: "boolean", width: Width::Fixed(1), order: Order::Boolean },
    TypeDesc { kind: ElemKind::Date, code: "date", name: "date", width: Width::Fixed(4), order: Order::Chronological },
    TypeDesc { kind: ElemKind::DateTime, code: "dtim", name: "datetime", width: Width::Fixed(8), order: Order::Chronological },
    TypeDesc { kind: ElemKind::Double, code: "f64", name: "double", width: Width::Fixed(8), order: Order::Numeric },
    TypeDesc { kind: ElemKind::Float, code: "f32", name: "float", width: Width::Fixed(4), order: Order::Numeric },
    TypeDesc { kind: ElemKind::Int, code: "i32", name: "int", width: Width::Fixed(4), order: Order::Numeric },
    TypeDesc { kind: ElemKind::Long, code: "i64", name: "long", width: Width::Fixed(8), order: Order::Numeric },
    TypeDesc { kind: ElemKind::Short, code: "i16", name: "short", width: Width::Fixed(2), order: Order::Numeric },
    TypeDesc { kind: ElemKind::Byte, code: "i8", name: "byte", width: Width::Fixed(1), order: Order::Numeric },
    TypeDesc { kind: ElemKind::String, code: "str", name: "string", width: Width::Variable, order: Order::Lexicographic },
    TypeDesc { kind: ElemKind::Decimal, code: "dec", name: "decimal", width: Width::Fixed(9), order: Order::Numeric },
];

impl ElemKind {
    pub const ALL: [ElemKind; 11] = [
        ElemKind::Boolean,
        ElemKind::Date,
        ElemKind::DateTime,
        ElemKind::Double,
        ElemKind::Float,
        ElemKind::Int,
        ElemKind::Long,
        ElemKind::Short,
        ElemKind::Byte,
        ElemKind::String,
        ElemKind::Decimal,
    ];

    pub fn desc(self) -> &'static TypeDesc {
        &DESCS[self as usize]
    }

    pub fn code(self) -> &'static str {
        self.desc().code
    }

    pub fn from_code(code: &str) -> Result<Self> {
        Ok(Self::parse_code(code)?)
    }

    fn parse_code(code: &str) -> std::result::Result<Self, ColError> {
        DESCS
            .iter()
            .find(|d| d.code == code)
            .map(|d| d.kind)
            .ok_or_else(|| ColError::UnknownTypeCode(code.to_string()))
    }
}

/// Looks up the descriptor persisted under `code`.
pub fn code_to_desc(code: &str) -> Result<&'static TypeDesc> {
    Ok(ElemKind::from_code(code)?.desc())
}

pub fn desc_to_code(desc: &TypeDesc) -> &'static str {
    desc.kind.code()
}

impl std::fmt::Display for ElemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.desc().name)
    }
}

impl From<ElemKind> for &'static str {
    fn from(kind: ElemKind) -> Self {
        kind.code()
    }
}

impl TryFrom<String> for ElemKind {
    type Error = ColError;
    fn try_from(code: String) -> std::result::Result<Self, ColError> {
        ElemKind::parse_code(&code)
    }
}
