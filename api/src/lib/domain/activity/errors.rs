use thiserror::Error;

/// Top-level error for activity operations
#[derive(Debug, Clone, Error)]
pub enum ActivityError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}
