// src/schema/arrow.rs

use arrow::{
    array::{ArrayRef, Float32Array, Int64Array, StringArray, TimestampMillisecondArray},
    datatypes::{DataType, Field as ArrowField, Schema as ArrowSchema, TimeUnit},
    error::ArrowError,
    record_batch::RecordBatch,
};
use std::sync::Arc;

use super::types::{Getter, OutputField, OutputFields};
use crate::process::date_parser::to_epoch_millis;

const UTC: &str = "UTC";

/// Map an output field to its physical Arrow type.
///
/// - text / label → Utf8
/// - int          → Int64
/// - float        → Float32
/// - timestamp    → Timestamp(ms, UTC)
pub fn map_to_arrow_type<R>(field: &OutputField<R>) -> DataType {
    match field.getter {
        Getter::Text(_) => DataType::Utf8,
        Getter::Int(_) => DataType::Int64,
        Getter::Float(_) => DataType::Float32,
        Getter::Timestamp(_) => DataType::Timestamp(TimeUnit::Millisecond, Some(Arc::from(UTC))),
    }
}

/// Build an ArrowSchema (inside an Arc) from a section's output fields.
/// Every column is required: decoded records never carry gaps.
pub fn build_arrow_schema<R>(fields: &OutputFields<R>) -> Arc<ArrowSchema> {
    let fields: Vec<ArrowField> = fields
        .iter()
        .map(|f| ArrowField::new(f.name, map_to_arrow_type(f), false))
        .collect();

    Arc::new(ArrowSchema::new(fields))
}

/// Transpose records into one column array per output field.
pub fn to_record_batch<R>(fields: &OutputFields<R>, records: &[R]) -> Result<RecordBatch, ArrowError> {
    let schema = build_arrow_schema(fields);

    let columns: Vec<ArrayRef> = fields
        .iter()
        .map(|f| -> ArrayRef {
            match f.getter {
                Getter::Text(get) => {
                    Arc::new(StringArray::from_iter_values(records.iter().map(get)))
                }
                Getter::Int(get) => Arc::new(Int64Array::from_iter_values(records.iter().map(get))),
                Getter::Float(get) => Arc::new(Float32Array::from_iter_values(
                    records.iter().map(|r| get(r) as f32),
                )),
                Getter::Timestamp(get) => Arc::new(
                    TimestampMillisecondArray::from_iter_values(
                        records.iter().map(|r| to_epoch_millis(&get(r))),
                    )
                    .with_timezone(UTC),
                ),
            }
        })
        .collect();

    RecordBatch::try_new(schema, columns)
}
