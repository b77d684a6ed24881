use thiserror::Error;

/// Errors raised when resolving names against the table catalog.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Unknown table: {0}")]
    UnknownTable(String),
    #[error("Unknown action: {0}")]
    UnknownAction(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error_display() {
        assert_eq!(
            CatalogError::UnknownTable("PAYROLL".to_string()).to_string(),
            "Unknown table: PAYROLL"
        );
        assert_eq!(
            CatalogError::UnknownAction("truncate".to_string()).to_string(),
            "Unknown action: truncate"
        );
    }
}
