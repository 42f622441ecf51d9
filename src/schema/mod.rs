pub mod arrow;
pub mod types;

pub use arrow::{build_arrow_schema, map_to_arrow_type, to_record_batch};
pub use types::{Getter, OutputField, OutputFields, Value};

/// Conversion of a decoded record into both export shapes.
///
/// Implementors only declare [`Exportable::output_fields`]; the delimited and
/// columnar views are derived from it so the CSV header, the CSV row and the
/// Parquet schema cannot drift apart.
pub trait Exportable: Sized {
    fn output_fields() -> OutputFields<Self>;

    /// One CSV row, aligned with `output_fields().names()`.
    fn to_delimited_fields(&self) -> Vec<String> {
        Self::output_fields()
            .iter()
            .map(|f| f.value(self).to_csv_string())
            .collect()
    }

    /// One schema-tagged row, aligned with `output_fields()`.
    fn to_columnar_record(&self) -> Vec<Value<'_>> {
        Self::output_fields().iter().map(|f| f.value(self)).collect()
    }
}
