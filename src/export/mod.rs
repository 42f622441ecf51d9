// src/export/mod.rs
//! Runs the selected sections through extraction and writes their files.

use std::fs;
use std::path::{Path, PathBuf};

use scraper::Html;
use tracing::{debug, info, warn};

use crate::config::ExportConfig;
use crate::error::ExportError;
use crate::process::Dataset;

pub mod csv;
pub mod parquet;

/// What one section produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionReport {
    pub section: &'static str,
    pub rows: usize,
    pub files: Vec<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub sections: Vec<SectionReport>,
}

impl ExportSummary {
    pub fn written_files(&self) -> impl Iterator<Item = &PathBuf> {
        self.sections.iter().flat_map(|s| s.files.iter())
    }
}

pub struct Exporter {
    config: ExportConfig,
}

impl Exporter {
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    /// Extracts every selected section, then writes CSV and Parquet files
    /// for each one in turn.
    ///
    /// Nothing is written unless every section extracted. The first failure
    /// of either phase ends the run.
    #[tracing::instrument(level = "info", skip_all)]
    pub fn run(&self, document: &Html) -> Result<ExportSummary, ExportError> {
        let kinds = self.config.selected_sections();
        let datasets = kinds
            .iter()
            .map(|kind| kind.extract(document))
            .collect::<Result<Vec<_>, _>>()?;

        if !self.config.writes_anything() {
            warn!("no output directory given; sections validated but nothing written");
        }

        for dir in [&self.config.csv_dir, &self.config.parquet_dir]
            .into_iter()
            .flatten()
        {
            create_dir(dir)?;
        }

        let mut summary = ExportSummary::default();
        for dataset in &datasets {
            summary.sections.push(self.write_section(dataset.as_ref())?);
        }
        Ok(summary)
    }

    fn write_section(&self, dataset: &dyn Dataset) -> Result<SectionReport, ExportError> {
        let info = dataset.info();
        let mut files = Vec::new();

        if let Some(dir) = &self.config.csv_dir {
            let path = dir.join(format!("{}.csv", info.file_stem));
            csv::write_file(dataset, &path)?;
            info!(section = info.name, path = %path.display(), "wrote csv");
            files.push(path);
        }

        if let Some(dir) = &self.config.parquet_dir {
            let path = dir.join(format!("{}.parquet", info.file_stem));
            parquet::write_file(dataset, &path, self.config.compression.into())?;
            info!(section = info.name, path = %path.display(), "wrote parquet");
            files.push(path);
        }

        Ok(SectionReport {
            section: info.name,
            rows: dataset.len(),
            files,
        })
    }
}

/// Reads and parses the input page. Bytes that are not UTF-8 are replaced
/// rather than rejected.
#[tracing::instrument(level = "debug")]
pub fn read_document(path: &Path) -> Result<Html, ExportError> {
    let bytes = fs::read(path).map_err(|source| ExportError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    let html = String::from_utf8_lossy(&bytes);
    debug!(bytes = bytes.len(), "read input");
    Ok(Html::parse_document(&html))
}

fn create_dir(dir: &Path) -> Result<(), ExportError> {
    fs::create_dir_all(dir).map_err(|source| ExportError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// `<path>.tmp`, next to the final file.
pub(crate) fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}
