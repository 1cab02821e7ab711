//! # Error Types
//!
//! Structured error types for volt_core. These errors are designed to be
//! informative for both humans and LLMs, providing enough context to
//! understand and fix issues programmatically.
//!
//! ## Example
//!
//! ```rust
//! use volt_core::errors::{CalcError, CalcResult};
//!
//! fn validate_voltage(volts: f64) -> CalcResult<()> {
//!     if volts <= 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "volts".to_string(),
//!             value: volts.to_string(),
//!             reason: "Voltage must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for volt_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by LLMs and other consumers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, wrong type, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// A size or material has no entry in the relevant reference table
    #[error("No entry in {table} table for: {key}")]
    TableLookup { table: String, key: String },

    /// A resistor in a network carries a value that is not a positive
    /// finite number
    #[error("Resistor \"{label}\" must be > 0 (value: \"{value}\")")]
    InvalidResistor { label: String, value: String },

    /// A series/parallel group in a network has no children
    #[error("\"{label}\" has no elements")]
    EmptyGroup { label: String },

    /// A parallel group whose reciprocal sum collapsed to zero
    #[error("Parallel equivalent of \"{label}\" is undefined")]
    UndefinedParallel { label: String },

    /// Calculation failed (inconsistent inputs, unsolvable combination, etc.)
    #[error("Calculation failed: {calculation_type} - {reason}")]
    CalculationFailed {
        calculation_type: String,
        reason: String,
    },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// File is locked by another user/process
    #[error("File locked: '{path}' is locked by {locked_by} since {locked_at}")]
    FileLocked {
        path: String,
        locked_by: String,
        locked_at: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create a TableLookup error
    pub fn table_lookup(table: impl Into<String>, key: impl Into<String>) -> Self {
        CalcError::TableLookup {
            table: table.into(),
            key: key.into(),
        }
    }

    /// Create an InvalidResistor error
    pub fn invalid_resistor(label: impl Into<String>, value: impl Into<String>) -> Self {
        CalcError::InvalidResistor {
            label: label.into(),
            value: value.into(),
        }
    }

    /// Create an EmptyGroup error
    pub fn empty_group(label: impl Into<String>) -> Self {
        CalcError::EmptyGroup {
            label: label.into(),
        }
    }

    /// Create an UndefinedParallel error
    pub fn undefined_parallel(label: impl Into<String>) -> Self {
        CalcError::UndefinedParallel {
            label: label.into(),
        }
    }

    /// Create a CalculationFailed error
    pub fn calculation_failed(calculation_type: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::CalculationFailed {
            calculation_type: calculation_type.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileLocked error
    pub fn file_locked(path: impl Into<String>, locked_by: impl Into<String>, locked_at: impl Into<String>) -> Self {
        CalcError::FileLocked {
            path: path.into(),
            locked_by: locked_by.into(),
            locked_at: locked_at.into(),
        }
    }

    /// Check if this is a recoverable error (e.g., can retry)
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CalcError::FileLocked { .. })
    }

    /// Check if this error names a node in a resistance network.
    ///
    /// The presentation layer uses this to highlight the offending node.
    pub fn is_network_validation(&self) -> bool {
        matches!(
            self,
            CalcError::InvalidResistor { .. }
                | CalcError::EmptyGroup { .. }
                | CalcError::UndefinedParallel { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::TableLookup { .. } => "TABLE_LOOKUP",
            CalcError::InvalidResistor { .. } => "INVALID_RESISTOR",
            CalcError::EmptyGroup { .. } => "EMPTY_GROUP",
            CalcError::UndefinedParallel { .. } => "UNDEFINED_PARALLEL",
            CalcError::CalculationFailed { .. } => "CALCULATION_FAILED",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::FileLocked { .. } => "FILE_LOCKED",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::VersionMismatch { .. } => "VERSION_MISMATCH",
            CalcError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("volts", "-480", "Voltage must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::missing_field("test").error_code(), "MISSING_FIELD");
        assert_eq!(CalcError::table_lookup("THHN", "750 kcmil").error_code(), "TABLE_LOOKUP");
        assert_eq!(CalcError::empty_group("Branch A").error_code(), "EMPTY_GROUP");
    }

    #[test]
    fn test_network_error_messages_name_the_node() {
        let err = CalcError::invalid_resistor("R1", "abc");
        assert!(err.to_string().contains("R1"));
        assert!(err.is_network_validation());

        let err = CalcError::empty_group("Total");
        assert_eq!(err.to_string(), "\"Total\" has no elements");
    }
}
