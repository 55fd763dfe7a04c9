//! Diaguard Processor Library
//!
//! A Rust library for analyzing Diaguard diabetes diary backups and turning
//! them into clinical statistics reports.
//!
//! This library provides tools for:
//! - Parsing the semicolon-delimited Diaguard backup format, reconstructing
//!   multi-line diary entries and the food catalog they reference
//! - Filtering and grouping the parsed record set through a composable view
//!   pipeline (value ranges, tags, date windows, hour/day/weekday groups)
//! - Computing clinical statistics (estimated HbA1c, time in range, per-day
//!   and per-hour aggregates) with explicit missing-data semantics
//! - Assembling a serializable report consumed by the text and JSON renderers

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod backup_parser;
        pub mod query;
        pub mod statistics;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::Entry;
pub use app::services::backup_parser::{BackupParser, FoodCatalog, ParseResult, ParseStats};
pub use app::services::query::{EntryView, NumericField, RecordSet};
pub use app::services::statistics::{Report, ReportBuilder};
pub use config::{ParserConfig, ReportConfig};

/// Result type alias for the Diaguard processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for backup parsing and report generation
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// A record had fewer fields than its declared type requires
    #[error("malformed '{record_type}' record at line {line}: {message}")]
    MalformedLine {
        line: usize,
        record_type: String,
        message: String,
    },

    /// A measurement field was not numeric
    #[error("invalid number for '{field}' at line {line}: '{value}'")]
    UnparseableNumber {
        line: usize,
        field: String,
        value: String,
    },

    /// An entry date did not match the backup date format
    #[error("invalid entry date at line {line}: '{value}'")]
    UnparseableDate {
        line: usize,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// A foodEaten record referenced a food missing from the catalog
    #[error("unknown food '{name}' at line {line}")]
    UnknownFood { line: usize, name: String },

    /// Report serialization failed
    #[error("serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration error
    #[error("configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a malformed line error
    pub fn malformed_line(
        line: usize,
        record_type: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::MalformedLine {
            line,
            record_type: record_type.into(),
            message: message.into(),
        }
    }

    /// Create an unparseable number error
    pub fn unparseable_number(
        line: usize,
        field: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::UnparseableNumber {
            line,
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create an unparseable date error
    pub fn unparseable_date(
        line: usize,
        value: impl Into<String>,
        source: chrono::ParseError,
    ) -> Self {
        Self::UnparseableDate {
            line,
            value: value.into(),
            source,
        }
    }

    /// Create an unknown food error
    pub fn unknown_food(line: usize, name: impl Into<String>) -> Self {
        Self::UnknownFood {
            line,
            name: name.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Line position of a parse-time error, if it carries one
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::MalformedLine { line, .. }
            | Self::UnparseableNumber { line, .. }
            | Self::UnparseableDate { line, .. }
            | Self::UnknownFood { line, .. } => Some(*line),
            _ => None,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "report serialization failed".to_string(),
            source: error,
        }
    }
}
