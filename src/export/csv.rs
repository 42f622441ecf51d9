// src/export/csv.rs

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use super::tmp_path;
use crate::error::ExportError;
use crate::process::Dataset;

/// Writes a header line then one line per record.
pub fn write_records<W: Write>(dataset: &dyn Dataset, out: W) -> csv::Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(dataset.header())?;
    for row in dataset.delimited_rows() {
        writer.write_record(&row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes `dataset` to `path` through a sibling `.tmp` file that is renamed
/// into place once complete.
#[tracing::instrument(level = "debug", skip(dataset), fields(section = dataset.info().name))]
pub fn write_file(dataset: &dyn Dataset, path: &Path) -> Result<(), ExportError> {
    let tmp = tmp_path(path);
    let io_err = |source| ExportError::Io {
        path: tmp.clone(),
        source,
    };

    let file = File::create(&tmp).map_err(io_err)?;
    let mut out = BufWriter::new(file);
    write_records(dataset, &mut out).map_err(|source| ExportError::Csv {
        path: tmp.clone(),
        source,
    })?;
    out.flush().map_err(io_err)?;
    drop(out);

    fs::rename(&tmp, path).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(rows = dataset.len(), path = %path.display(), "csv written");
    Ok(())
}
