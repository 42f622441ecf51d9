// src/error.rs
//! Error types for locating, decoding and exporting data-request tables.

use std::path::PathBuf;
use thiserror::Error;

/// A single cell that could not be coerced into its column type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    #[error("invalid integer {value:?}")]
    InvalidIntegerFormat { value: String },

    #[error("invalid float {value:?}")]
    InvalidFloatFormat { value: String },

    #[error("invalid timestamp {value:?}, expected YYYY-MM-DD HH:MM:SS")]
    InvalidTimestampFormat { value: String },
}

/// Failures while walking the document towards a section's table.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LocateError {
    #[error("no h1 heading titled {title:?}")]
    SectionNotFound { title: String },

    #[error("no h2 heading titled {title:?} under {section:?}")]
    SubsectionNotFound { section: String, title: String },

    #[error("no table after h2 heading {title:?}")]
    TableNotFound { title: String },

    #[error("table after {title:?} has no header cells")]
    EmptyHeader { title: String },
}

/// Failures while turning one row of strings into a record.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    #[error("header has {header} cells but row has {row}")]
    RowHeaderLengthMismatch { header: usize, row: usize },

    #[error("unknown column {0:?}")]
    UnknownColumn(String),

    #[error("column {column:?} with value {value:?}")]
    FieldParse {
        column: String,
        value: String,
        #[source]
        source: FieldError,
    },
}

/// Failures while extracting a whole section.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExtractError {
    #[error("section {section}")]
    Locate {
        section: &'static str,
        #[source]
        source: LocateError,
    },

    #[error("section {section}: table has no data rows")]
    NoDataRows { section: &'static str },

    #[error("section {section}: row {row}")]
    Row {
        section: &'static str,
        /// 1-based, in document order.
        row: usize,
        #[source]
        source: DecodeError,
    },
}

/// Top-level failures of an export run.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to read {}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error("failed to create directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write CSV {}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to build record batch for {section}")]
    Arrow {
        section: &'static str,
        #[source]
        source: arrow::error::ArrowError,
    },

    #[error("failed to write parquet {}", path.display())]
    Parquet {
        path: PathBuf,
        #[source]
        source: parquet::errors::ParquetError,
    },
}
