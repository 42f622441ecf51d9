// src/export/parquet.rs

use std::fs::{self, File};
use std::path::Path;

use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;
use parquet::schema::types::ColumnPath;
use tracing::debug;

use super::tmp_path;
use crate::error::ExportError;
use crate::process::Dataset;

/// Dictionary encoding only on enumerated-string columns.
fn writer_properties(dataset: &dyn Dataset, compression: Compression) -> WriterProperties {
    dataset
        .dictionary_columns()
        .into_iter()
        .fold(
            WriterProperties::builder()
                .set_compression(compression)
                .set_dictionary_enabled(false),
            |builder, name| {
                builder.set_column_dictionary_enabled(ColumnPath::from(name), true)
            },
        )
        .build()
}

/// Writes `dataset` as a single row group to `path`, via `<path>.tmp`.
#[tracing::instrument(level = "debug", skip(dataset), fields(section = dataset.info().name))]
pub fn write_file(
    dataset: &dyn Dataset,
    path: &Path,
    compression: Compression,
) -> Result<(), ExportError> {
    let batch = dataset
        .record_batch()
        .map_err(|source| ExportError::Arrow {
            section: dataset.info().name,
            source,
        })?;

    let tmp = tmp_path(path);
    let parquet_err = |source| ExportError::Parquet {
        path: tmp.clone(),
        source,
    };

    let file = File::create(&tmp).map_err(|source| ExportError::Io {
        path: tmp.clone(),
        source,
    })?;
    let props = writer_properties(dataset, compression);
    let mut writer =
        ArrowWriter::try_new(file, batch.schema(), Some(props)).map_err(parquet_err)?;
    writer.write(&batch).map_err(parquet_err)?;
    writer.close().map_err(parquet_err)?;

    let size = fs::metadata(&tmp)
        .map_err(|source| ExportError::Io {
            path: tmp.clone(),
            source,
        })?
        .len();
    fs::rename(&tmp, path).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(
        rows = batch.num_rows(),
        bytes = size,
        path = %path.display(),
        "parquet written"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::date_parser::parse_timestamp;
    use crate::process::RecordSet;
    use crate::sections::{CwZombiesEvent, Section};
    use arrow::array::{Array, Int64Array, StringArray, TimestampMillisecondArray};
    use arrow::datatypes::{DataType, TimeUnit};
    use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
    use parquet::basic::Encoding;
    use parquet::file::reader::{FileReader, SerializedFileReader};

    fn zombies() -> RecordSet<CwZombiesEvent> {
        RecordSet {
            info: CwZombiesEvent::INFO,
            records: vec![
                CwZombiesEvent {
                    timestamp: parse_timestamp("2021-02-14 23:01:44").unwrap(),
                    device_type: "PS5".into(),
                    kills: 412,
                    round_number: 31,
                    map: "Die Maschine".into(),
                    ..Default::default()
                },
                CwZombiesEvent {
                    timestamp: parse_timestamp("2021-02-13 20:12:09").unwrap(),
                    device_type: "PS5".into(),
                    kills: 97,
                    round_number: 12,
                    map: "Firebase Z".into(),
                    ..Default::default()
                },
            ],
        }
    }

    #[test]
    fn reads_back_with_declared_types() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zombies.parquet");
        write_file(&zombies(), &path, Compression::UNCOMPRESSED).unwrap();
        assert!(!tmp_path(&path).exists());

        let reader = ParquetRecordBatchReaderBuilder::try_new(File::open(&path).unwrap())
            .unwrap()
            .build()
            .unwrap();
        let batches: Vec<_> = reader.map(|b| b.unwrap()).collect();
        let total: usize = batches.iter().map(|b| b.num_rows()).sum();
        assert_eq!(total, 2);

        let batch = &batches[0];
        assert_eq!(
            batch.schema().field(0).data_type(),
            &DataType::Timestamp(TimeUnit::Millisecond, Some("UTC".into()))
        );
        let ts = batch
            .column(0)
            .as_any()
            .downcast_ref::<TimestampMillisecondArray>()
            .unwrap();
        assert_eq!(ts.value(0), 1_613_343_704_000);

        let map_idx = batch.schema().index_of("map").unwrap();
        let maps = batch
            .column(map_idx)
            .as_any()
            .downcast_ref::<StringArray>()
            .unwrap();
        assert_eq!(maps.value(1), "Firebase Z");

        let kills_idx = batch.schema().index_of("kills").unwrap();
        let kills = batch
            .column(kills_idx)
            .as_any()
            .downcast_ref::<Int64Array>()
            .unwrap();
        assert_eq!(kills.values().to_vec(), vec![412, 97]);
    }

    #[test]
    fn only_label_columns_are_dictionary_encoded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zombies.parquet");
        write_file(&zombies(), &path, Compression::SNAPPY).unwrap();

        let reader = SerializedFileReader::new(File::open(&path).unwrap()).unwrap();
        let metadata = reader.metadata();
        assert_eq!(metadata.num_row_groups(), 1);

        let group = metadata.row_group(0);
        for column in group.columns() {
            let name = column.column_path().string();
            let dictionary = column.encodings().contains(&Encoding::RLE_DICTIONARY);
            let expected = matches!(
                name.as_str(),
                "device_type" | "operator" | "weapon" | "field_upgrade" | "game_type" | "map"
            );
            assert_eq!(dictionary, expected, "{}", name);
            assert_eq!(column.compression(), Compression::SNAPPY);
        }
    }
}
