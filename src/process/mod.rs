// src/process/mod.rs
//! Turning the tables of a data-request document into typed records.

use arrow::{error::ArrowError, record_batch::RecordBatch};
use scraper::Html;
use tracing::{debug, info};

use crate::error::ExtractError;
use crate::schema::to_record_batch;
use crate::sections::{Section, SectionInfo};

pub mod date_parser;
pub mod decode;
pub mod fields;
pub mod locate;
pub mod raw_table;

pub use raw_table::RawTable;

/// The decoded rows of one section, in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSet<R> {
    pub info: SectionInfo,
    pub records: Vec<R>,
}

/// A decoded section with its record type erased, as seen by the writers.
pub trait Dataset {
    fn info(&self) -> SectionInfo;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Output field names, in file order.
    fn header(&self) -> Vec<&'static str>;

    /// One string per output field for every record.
    fn delimited_rows(&self) -> Vec<Vec<String>>;

    fn record_batch(&self) -> Result<RecordBatch, ArrowError>;

    /// Output fields that hold enumerated strings.
    fn dictionary_columns(&self) -> Vec<&'static str>;
}

impl<R: Section> Dataset for RecordSet<R> {
    fn info(&self) -> SectionInfo {
        self.info
    }

    fn len(&self) -> usize {
        self.records.len()
    }

    fn header(&self) -> Vec<&'static str> {
        R::output_fields().names()
    }

    fn delimited_rows(&self) -> Vec<Vec<String>> {
        let fields = R::output_fields();
        self.records
            .iter()
            .map(|r| fields.iter().map(|f| f.value(r).to_csv_string()).collect())
            .collect()
    }

    fn record_batch(&self) -> Result<RecordBatch, ArrowError> {
        to_record_batch(&R::output_fields(), &self.records)
    }

    fn dictionary_columns(&self) -> Vec<&'static str> {
        R::output_fields()
            .iter()
            .filter(|f| f.dictionary)
            .map(|f| f.name)
            .collect()
    }
}

/// Locates `R`'s table in `document` and decodes every data row.
///
/// Fails on the first row that does not decode; the error carries the
/// row's 1-based position.
#[tracing::instrument(level = "debug", skip(document), fields(section = R::INFO.name))]
pub fn extract<R: Section>(document: &Html) -> Result<RecordSet<R>, ExtractError> {
    let info = R::INFO;
    let table = locate::locate(document, info.title, info.subtitle).map_err(|source| {
        ExtractError::Locate {
            section: info.name,
            source,
        }
    })?;

    if table.rows.is_empty() {
        return Err(ExtractError::NoDataRows { section: info.name });
    }

    let columns = R::columns();
    let records = table
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            decode::decode(&table.headers, row, &columns).map_err(|source| ExtractError::Row {
                section: info.name,
                row: i + 1,
                source,
            })
        })
        .collect::<Result<Vec<R>, _>>()?;

    debug!(columns = table.headers.len(), "decoded table");
    info!(section = info.name, rows = records.len(), "extracted section");

    Ok(RecordSet { info, records })
}
