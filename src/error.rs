//! Error types for the VR feasibility analyzer.
//!
//! Per-file input problems are deliberately absent here: the report
//! assembler converts them into degraded error reports at its boundary.
//! This module covers the failures that may surface to callers, chiefly
//! registry configuration errors and IO around report persistence.

use thiserror::Error;

/// Primary error type for the analyzer.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed static registry data. This is a programming error and
    /// must abort startup, never a single analysis.
    #[error("Registry configuration error for engine '{engine}': {message}")]
    InvalidRegistry {
        /// Identifier of the engine whose registry entry is malformed.
        engine: String,
        /// What is wrong with the entry.
        message: String,
    },

    /// Report serialization failure.
    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias for analyzer operations.
pub type Result<T> = std::result::Result<T, AnalyzerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_registry_display() {
        let err = AnalyzerError::InvalidRegistry {
            engine: "unity".to_string(),
            message: "empty pattern list".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("unity"));
        assert!(msg.contains("empty pattern list"));
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: AnalyzerError = io.into();
        assert!(err.to_string().contains("gone"));
    }
}
