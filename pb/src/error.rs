//! Directory error types

use thiserror::Error;

/// Expected, recoverable outcomes of directory operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    #[error("First and last name must not be empty")]
    InvalidEntry,

    #[error("Directory is full ({capacity} entries)")]
    Full { capacity: usize },

    #[error("An entry named {first} {last} already exists")]
    Duplicate { first: String, last: String },

    #[error("No entry named {first} {last}")]
    NotFound { first: String, last: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_message() {
        let msg = DirectoryError::Full { capacity: 10 }.to_string();
        assert!(msg.contains("full"));
        assert!(msg.contains("10"));
    }

    #[test]
    fn test_duplicate_message() {
        let err = DirectoryError::Duplicate {
            first: "Ana".to_string(),
            last: "Lopez".to_string(),
        };

        let msg = err.to_string();
        assert!(msg.contains("Ana Lopez"));
        assert!(msg.contains("already exists"));
    }
}
