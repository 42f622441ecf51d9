//! Schema-driven row decoding.
//!
//! A section declares its input columns as an ordered list of
//! `(column name, typed setter)` pairs. The setter's argument type selects the
//! cell parser, so a column can only ever write a value of its field's type.

use crate::error::DecodeError;
use crate::process::fields::{self, Timestamp};

/// Writes one parsed cell into a record.
pub enum Setter<R> {
    Text(fn(&mut R, String)),
    Int(fn(&mut R, i64)),
    Float(fn(&mut R, f64)),
    Timestamp(fn(&mut R, Timestamp)),
}

pub struct Column<R> {
    pub name: &'static str,
    pub setter: Setter<R>,
}

impl<R> Column<R> {
    /// Parses `cell` with this column's parser and stores it on `record`.
    fn apply(&self, record: &mut R, cell: &str) -> Result<(), DecodeError> {
        let wrap = |source| DecodeError::FieldParse {
            column: self.name.to_string(),
            value: cell.to_string(),
            source,
        };
        match &self.setter {
            Setter::Text(set) => set(record, fields::parse_text(cell)),
            Setter::Int(set) => set(record, fields::parse_int(cell).map_err(wrap)?),
            Setter::Float(set) => set(record, fields::parse_float(cell).map_err(wrap)?),
            Setter::Timestamp(set) => set(record, fields::parse_timestamp(cell).map_err(wrap)?),
        }
        Ok(())
    }
}

/// The input schema of one section.
pub struct Columns<R> {
    columns: Vec<Column<R>>,
}

impl<R> Default for Columns<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Columns<R> {
    pub fn new() -> Self {
        Self {
            columns: Vec::new(),
        }
    }

    pub fn text(mut self, name: &'static str, set: fn(&mut R, String)) -> Self {
        self.columns.push(Column {
            name,
            setter: Setter::Text(set),
        });
        self
    }

    pub fn int(mut self, name: &'static str, set: fn(&mut R, i64)) -> Self {
        self.columns.push(Column {
            name,
            setter: Setter::Int(set),
        });
        self
    }

    pub fn float(mut self, name: &'static str, set: fn(&mut R, f64)) -> Self {
        self.columns.push(Column {
            name,
            setter: Setter::Float(set),
        });
        self
    }

    pub fn timestamp(mut self, name: &'static str, set: fn(&mut R, Timestamp)) -> Self {
        self.columns.push(Column {
            name,
            setter: Setter::Timestamp(set),
        });
        self
    }

    pub fn get(&self, name: &str) -> Option<&Column<R>> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.columns.iter().map(|c| c.name)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Decodes one row against `columns`.
///
/// All-or-nothing: the record is built on the side and only returned once
/// every cell parsed. Schema columns missing from `header` keep their
/// default value.
pub fn decode<R: Default>(
    header: &[String],
    row: &[String],
    columns: &Columns<R>,
) -> Result<R, DecodeError> {
    if header.len() != row.len() {
        return Err(DecodeError::RowHeaderLengthMismatch {
            header: header.len(),
            row: row.len(),
        });
    }

    let mut record = R::default();
    for (name, cell) in header.iter().zip(row) {
        let column = columns
            .get(name)
            .ok_or_else(|| DecodeError::UnknownColumn(name.clone()))?;
        column.apply(&mut record, cell)?;
    }
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FieldError;
    use chrono::{TimeZone, Utc};

    #[derive(Debug, Default, PartialEq)]
    struct Probe {
        when: Timestamp,
        map: String,
        kills: i64,
        accuracy: f64,
    }

    fn columns() -> Columns<Probe> {
        Columns::<Probe>::new()
            .timestamp("UTC Timestamp", |r, v| r.when = v)
            .text("Map", |r, v| r.map = v)
            .int("Kills", |r, v| r.kills = v)
            .float("Accuracy", |r, v| r.accuracy = v)
    }

    fn strings(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn every_field_gets_its_parsed_cell() {
        let header = strings(&["UTC Timestamp", "Map", "Kills", "Accuracy"]);
        let row = strings(&["2024-01-15 13:45:30", "Skidrow", "17", "23.456%"]);
        let probe: Probe = decode(&header, &row, &columns()).unwrap();
        assert_eq!(
            probe,
            Probe {
                when: Utc.with_ymd_and_hms(2024, 1, 15, 13, 45, 30).unwrap(),
                map: "Skidrow".into(),
                kills: 17,
                accuracy: 23.46,
            }
        );
    }

    #[test]
    fn header_order_does_not_matter() {
        let header = strings(&["Kills", "Map"]);
        let row = strings(&["3", "Rust"]);
        let probe: Probe = decode(&header, &row, &columns()).unwrap();
        assert_eq!(probe.kills, 3);
        assert_eq!(probe.map, "Rust");
        assert_eq!(probe.accuracy, 0.0);
    }

    #[test]
    fn length_mismatch() {
        let header = strings(&["Map", "Kills"]);
        let row = strings(&["Rust"]);
        let err = decode::<Probe>(&header, &row, &columns()).unwrap_err();
        assert_eq!(
            err,
            DecodeError::RowHeaderLengthMismatch { header: 2, row: 1 }
        );
    }

    #[test]
    fn unknown_column() {
        let header = strings(&["Map", "Favourite Snack"]);
        let row = strings(&["Rust", "crisps"]);
        let err = decode::<Probe>(&header, &row, &columns()).unwrap_err();
        assert_eq!(err, DecodeError::UnknownColumn("Favourite Snack".into()));
    }

    #[test]
    fn field_error_names_column_and_value() {
        let header = strings(&["Map", "Kills"]);
        let row = strings(&["Rust", "1.5"]);
        let err = decode::<Probe>(&header, &row, &columns()).unwrap_err();
        assert_eq!(
            err,
            DecodeError::FieldParse {
                column: "Kills".into(),
                value: "1.5".into(),
                source: FieldError::InvalidIntegerFormat {
                    value: "1.5".into()
                },
            }
        );
    }

    #[test]
    fn schema_lookup() {
        let cols = columns();
        assert_eq!(cols.len(), 4);
        assert!(cols.get("Kills").is_some());
        assert!(cols.get("kills").is_none());
        assert_eq!(
            cols.names().collect::<Vec<_>>(),
            vec!["UTC Timestamp", "Map", "Kills", "Accuracy"]
        );
    }
}
