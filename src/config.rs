// src/config.rs

use std::path::PathBuf;

use clap::ValueEnum;
use parquet::basic::{BrotliLevel, Compression, GzipLevel, ZstdLevel};

use crate::sections::SectionKind;

/// Parquet codec choice exposed on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputCompression {
    #[default]
    Uncompressed,
    Snappy,
    Gzip,
    Zstd,
    Brotli,
}

impl From<OutputCompression> for Compression {
    fn from(c: OutputCompression) -> Self {
        match c {
            OutputCompression::Uncompressed => Compression::UNCOMPRESSED,
            OutputCompression::Snappy => Compression::SNAPPY,
            OutputCompression::Gzip => Compression::GZIP(GzipLevel::default()),
            OutputCompression::Zstd => Compression::ZSTD(ZstdLevel::default()),
            OutputCompression::Brotli => Compression::BROTLI(BrotliLevel::default()),
        }
    }
}

/// What to export and where.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportConfig {
    /// Directory for `.csv` files; `None` skips CSV output.
    pub csv_dir: Option<PathBuf>,
    /// Directory for `.parquet` files; `None` skips Parquet output.
    pub parquet_dir: Option<PathBuf>,
    pub sections: Vec<SectionKind>,
    pub compression: OutputCompression,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            csv_dir: None,
            parquet_dir: None,
            sections: SectionKind::ALL.to_vec(),
            compression: OutputCompression::default(),
        }
    }
}

impl ExportConfig {
    pub fn writes_anything(&self) -> bool {
        self.csv_dir.is_some() || self.parquet_dir.is_some()
    }

    /// Selected sections in export order, without duplicates.
    pub fn selected_sections(&self) -> Vec<SectionKind> {
        SectionKind::ALL
            .into_iter()
            .filter(|k| self.sections.contains(k))
            .collect()
    }
}
