use crate::error::AppError;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// Utility for converting database errors to structured AppError variants.
pub struct DatabaseErrorConverter;

impl DatabaseErrorConverter {
    /// Converts a Diesel error to an appropriate AppError variant.
    ///
    /// # Arguments
    /// * `error` - The Diesel error to convert
    /// * `entity` - Entity name used when the row is missing
    /// * `operation` - Description of the database operation that failed
    pub fn convert_diesel_error(error: DieselError, entity: &str, operation: &str) -> AppError {
        match error {
            DieselError::DatabaseError(kind, info) => {
                Self::convert_database_error(kind, info, operation)
            }
            DieselError::NotFound => AppError::NotFound {
                entity: entity.to_string(),
                field: "id".to_string(),
                value: "unknown".to_string(),
            },
            other => AppError::Database {
                operation: operation.to_string(),
                source: anyhow::Error::from(other),
            },
        }
    }

    fn convert_database_error(
        kind: DatabaseErrorKind,
        info: Box<dyn diesel::result::DatabaseErrorInformation + Send + Sync>,
        operation: &str,
    ) -> AppError {
        let message = info.message();

        match kind {
            DatabaseErrorKind::NotNullViolation => match info.column_name() {
                Some(column) => AppError::Validation {
                    field: column.to_string(),
                    reason: "required".to_string(),
                },
                None => AppError::Database {
                    operation: operation.to_string(),
                    source: anyhow::Error::msg(format!(
                        "Not null constraint violation: {}",
                        message
                    )),
                },
            },
            DatabaseErrorKind::ClosedConnection => AppError::ConnectionPool {
                source: anyhow::Error::msg(format!("Connection closed: {}", message)),
            },
            _ => AppError::Database {
                operation: operation.to_string(),
                source: anyhow::Error::msg(format!("Database error: {}", message)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockDatabaseErrorInfo {
        message: String,
        column_name: Option<String>,
    }

    impl diesel::result::DatabaseErrorInformation for MockDatabaseErrorInfo {
        fn message(&self) -> &str {
            &self.message
        }

        fn details(&self) -> Option<&str> {
            None
        }

        fn hint(&self) -> Option<&str> {
            None
        }

        fn table_name(&self) -> Option<&str> {
            None
        }

        fn column_name(&self) -> Option<&str> {
            self.column_name.as_deref()
        }

        fn constraint_name(&self) -> Option<&str> {
            None
        }

        fn statement_position(&self) -> Option<i32> {
            None
        }
    }

    #[test]
    fn test_convert_not_found_error() {
        let result = DatabaseErrorConverter::convert_diesel_error(
            DieselError::NotFound,
            "book",
            "find book",
        );

        match result {
            AppError::NotFound { entity, field, .. } => {
                assert_eq!(entity, "book");
                assert_eq!(field, "id");
            }
            _ => panic!("Expected NotFound error"),
        }
    }

    #[test]
    fn test_convert_not_null_violation() {
        let info = MockDatabaseErrorInfo {
            message: "null value in column \"title\" violates not-null constraint".to_string(),
            column_name: Some("title".to_string()),
        };
        let error = DieselError::DatabaseError(DatabaseErrorKind::NotNullViolation, Box::new(info));

        match DatabaseErrorConverter::convert_diesel_error(error, "book", "insert book") {
            AppError::Validation { field, reason } => {
                assert_eq!(field, "title");
                assert_eq!(reason, "required");
            }
            other => panic!("Expected Validation error, got: {:?}", other),
        }
    }

    #[test]
    fn test_convert_closed_connection() {
        let info = MockDatabaseErrorInfo {
            message: "server closed the connection unexpectedly".to_string(),
            column_name: None,
        };
        let error = DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, Box::new(info));

        let result = DatabaseErrorConverter::convert_diesel_error(error, "book", "list books");
        assert!(matches!(result, AppError::ConnectionPool { .. }));
    }

    #[test]
    fn test_convert_other_database_error() {
        let info = MockDatabaseErrorInfo {
            message: "relation \"books\" does not exist".to_string(),
            column_name: None,
        };
        let error = DieselError::DatabaseError(DatabaseErrorKind::Unknown, Box::new(info));

        match DatabaseErrorConverter::convert_diesel_error(error, "book", "list books") {
            AppError::Database { operation, source } => {
                assert_eq!(operation, "list books");
                assert!(source.to_string().contains("does not exist"));
            }
            other => panic!("Expected Database error, got: {:?}", other),
        }
    }
}
