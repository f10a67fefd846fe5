use thiserror::Error;

/// Errors that can occur while loading and analyzing the county dataset.
#[derive(Error, Debug)]
pub enum EconError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Load error: {0}")]
    Load(String),

    #[error("Schema error: expected {expected} columns, found {found}")]
    Schema { expected: usize, found: usize },

    #[error("Field not found: {0}")]
    FieldNotFound(String),

    #[error("Chart error: {0}")]
    Chart(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = EconError::from(io_err);
        let msg = err.to_string();
        assert!(msg.contains("IO error"));
        assert!(msg.contains("file not found"));
    }

    #[test]
    fn test_load_error_display() {
        let err = EconError::Load("only 3 rows, need at least 7".to_string());
        assert_eq!(err.to_string(), "Load error: only 3 rows, need at least 7");
    }

    #[test]
    fn test_schema_error_display() {
        let err = EconError::Schema {
            expected: 15,
            found: 12,
        };
        assert_eq!(
            err.to_string(),
            "Schema error: expected 15 columns, found 12"
        );
    }

    #[test]
    fn test_field_not_found_display() {
        let err = EconError::FieldNotFound("MedianAge".to_string());
        assert_eq!(err.to_string(), "Field not found: MedianAge");
    }

    #[test]
    fn test_chart_error_display() {
        let err = EconError::Chart("bitmap backend failed".to_string());
        assert_eq!(err.to_string(), "Chart error: bitmap backend failed");
    }

    #[test]
    fn test_io_error_from_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let econ_err: EconError = io_err.into();
        assert!(matches!(econ_err, EconError::Io(_)));
    }

    #[test]
    fn test_error_is_debug() {
        let err = EconError::FieldNotFound("test".to_string());
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("FieldNotFound"));
    }
}
