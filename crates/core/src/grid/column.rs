use serde::{Deserialize, Serialize};

use super::CellValue;

/// Column metadata as reported by `PRAGMA table_info`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    /// Declared type, verbatim (may be empty).
    pub decl_type: String,
    pub not_null: bool,
    /// 0 when the column is not part of the primary key, otherwise its
    /// 1-based position in the key.
    pub primary_key: u32,
}

impl Column {
    pub fn new(name: impl Into<String>, decl_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            decl_type: decl_type.into(),
            not_null: false,
            primary_key: 0,
        }
    }

    pub fn with_primary_key(mut self, position: u32) -> Self {
        self.primary_key = position;
        self
    }

    pub fn with_not_null(mut self) -> Self {
        self.not_null = true;
        self
    }

    pub fn affinity(&self) -> Affinity {
        Affinity::from_decl_type(&self.decl_type)
    }

    pub fn is_primary_key(&self) -> bool {
        self.primary_key > 0
    }
}

/// SQLite type affinity of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Affinity {
    Integer,
    Text,
    Blob,
    Real,
    Numeric,
}

impl Affinity {
    /// Applies SQLite's affinity rules, in order, to a declared type.
    pub fn from_decl_type(decl_type: &str) -> Self {
        let upper = decl_type.to_ascii_uppercase();
        if upper.contains("INT") {
            Affinity::Integer
        } else if ["CHAR", "CLOB", "TEXT"].iter().any(|t| upper.contains(t)) {
            Affinity::Text
        } else if upper.contains("BLOB") || upper.trim().is_empty() {
            Affinity::Blob
        } else if ["REAL", "FLOA", "DOUB"].iter().any(|t| upper.contains(t)) {
            Affinity::Real
        } else {
            Affinity::Numeric
        }
    }
}

/// Converts a submitted cell into the value stored for a column.
///
/// Grid clients send edited cells back as text, so text is parsed according
/// to the column affinity. Blank text becomes `Null`. Typed values are
/// adjusted the way SQLite would store them.
pub fn coerce_cell(value: CellValue, affinity: Affinity) -> CellValue {
    match value {
        CellValue::Null => CellValue::Null,
        CellValue::Text(text) => coerce_text(text, affinity),
        CellValue::Integer(i) => match affinity {
            Affinity::Real => CellValue::Real(i as f64),
            Affinity::Text => CellValue::Text(i.to_string()),
            _ => CellValue::Integer(i),
        },
        CellValue::Real(r) => match affinity {
            Affinity::Integer | Affinity::Numeric => real_or_integer(r),
            Affinity::Text => CellValue::Text(r.to_string()),
            _ => CellValue::Real(r),
        },
    }
}

fn coerce_text(text: String, affinity: Affinity) -> CellValue {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return CellValue::Null;
    }

    match affinity {
        Affinity::Integer | Affinity::Numeric => {
            if let Ok(i) = trimmed.parse::<i64>() {
                CellValue::Integer(i)
            } else if let Some(r) = parse_finite(trimmed) {
                real_or_integer(r)
            } else {
                CellValue::Text(text)
            }
        }
        Affinity::Real => match parse_finite(trimmed) {
            Some(r) => CellValue::Real(r),
            None => CellValue::Text(text),
        },
        Affinity::Text | Affinity::Blob => CellValue::Text(text),
    }
}

/// SQLite has no literal for NaN or infinity, so "NaN" and "inf" stay text.
fn parse_finite(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|r| r.is_finite())
}

/// Reals without a fractional part that fit in an i64 are stored as integers.
fn real_or_integer(r: f64) -> CellValue {
    if r.is_finite() && r.fract() == 0.0 && r.abs() < i64::MAX as f64 {
        CellValue::Integer(r as i64)
    } else {
        CellValue::Real(r)
    }
}
