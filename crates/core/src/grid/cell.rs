use std::fmt;

use serde::{Deserialize, Serialize};

/// A single grid cell.
///
/// Serialized untagged so JSON clients see plain `null`, numbers and strings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    #[default]
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
}

impl CellValue {
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Blobs have no grid representation; they are shown as lowercase hex.
    pub fn from_blob(bytes: &[u8]) -> Self {
        CellValue::Text(bytes.iter().map(|b| format!("{b:02x}")).collect())
    }

    /// A hashable token that identifies the value, used when comparing rows.
    ///
    /// Reals are compared by bit pattern.
    pub fn identity_token(&self) -> String {
        match self {
            CellValue::Null => "n".to_string(),
            CellValue::Integer(i) => format!("i:{i}"),
            CellValue::Real(r) => format!("r:{:x}", r.to_bits()),
            CellValue::Text(s) => format!("t:{s}"),
        }
    }
}

/// Renders the value the way the grid shows it; `Null` is an empty cell.
impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => Ok(()),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Real(r) => write!(f, "{r}"),
            CellValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Integer(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Real(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shape_is_untagged() {
        let cells = vec![
            CellValue::Null,
            CellValue::Integer(7),
            CellValue::Real(1.5),
            CellValue::from("Finance"),
        ];
        let json = serde_json::to_string(&cells).unwrap();
        assert_eq!(json, r#"[null,7,1.5,"Finance"]"#);

        let parsed: Vec<CellValue> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, cells);
    }

    #[test]
    fn test_display_leaves_null_empty() {
        assert_eq!(CellValue::Null.to_string(), "");
        assert_eq!(CellValue::Integer(-3).to_string(), "-3");
        assert_eq!(CellValue::Real(2.25).to_string(), "2.25");
        assert_eq!(CellValue::from("HR").to_string(), "HR");
    }

    #[test]
    fn test_blob_renders_as_hex() {
        assert_eq!(CellValue::from_blob(&[0x00, 0xab, 0x10]), CellValue::from("00ab10"));
    }

    #[test]
    fn test_identity_token_distinguishes_types() {
        assert_ne!(
            CellValue::Integer(1).identity_token(),
            CellValue::from("1").identity_token()
        );
        assert_eq!(
            CellValue::Real(0.5).identity_token(),
            CellValue::Real(0.5).identity_token()
        );
    }
}
