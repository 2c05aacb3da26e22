//! Repository implementations for database access
//!
//! Each repository borrows the pool and follows these patterns:
//! - One statement (or one transaction) per operation
//! - Parent rows are checked inside the same transaction as the insert
//! - Lists come back in a stable order

pub mod computers;
pub mod repairs;

pub use computers::ComputerRepo;
pub use repairs::RepairRepo;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

/// Escape LIKE wildcards so user input matches literally (`ESCAPE '\'`).
pub(crate) fn escape_like(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_like_special_chars() {
        assert_eq!(escape_like("hello"), "hello");
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("foo_bar"), "foo\\_bar");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
    }

    #[test]
    fn not_found_display() {
        let err = DbError::NotFound {
            resource: "computer",
            id: "7".into(),
        };
        assert_eq!(err.to_string(), "not found: computer '7'");
    }
}
