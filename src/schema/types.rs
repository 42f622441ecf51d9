// src/schema/types.rs

use crate::process::date_parser::{format_iso8601, Timestamp};

/// Reads one field off a record for output.
pub enum Getter<R> {
    Text(fn(&R) -> &str),
    Int(fn(&R) -> i64),
    Float(fn(&R) -> f64),
    Timestamp(fn(&R) -> Timestamp),
}

/// A single output column: its name in both files, how it is read off the
/// record, and whether Parquet should dictionary-encode it.
pub struct OutputField<R> {
    pub name: &'static str,
    pub dictionary: bool,
    pub getter: Getter<R>,
}

impl<R> OutputField<R> {
    pub fn value<'r>(&self, record: &'r R) -> Value<'r> {
        match &self.getter {
            Getter::Text(get) => Value::Text(get(record)),
            Getter::Int(get) => Value::Int(get(record)),
            Getter::Float(get) => Value::Float(get(record)),
            Getter::Timestamp(get) => Value::Timestamp(get(record)),
        }
    }
}

/// One cell of a columnar record, tagged with its physical type.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'r> {
    Text(&'r str),
    Int(i64),
    Float(f64),
    Timestamp(Timestamp),
}

impl Value<'_> {
    /// CSV rendering: integers in base 10, floats with two decimals,
    /// timestamps as ISO-8601 UTC.
    pub fn to_csv_string(&self) -> String {
        match self {
            Value::Text(s) => (*s).to_string(),
            Value::Int(i) => i.to_string(),
            Value::Float(f) => format!("{:.2}", f),
            Value::Timestamp(ts) => format_iso8601(ts),
        }
    }
}

/// Ordered output schema of one section.
pub struct OutputFields<R> {
    fields: Vec<OutputField<R>>,
}

impl<R> Default for OutputFields<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> OutputFields<R> {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    fn push(mut self, name: &'static str, dictionary: bool, getter: Getter<R>) -> Self {
        self.fields.push(OutputField {
            name,
            dictionary,
            getter,
        });
        self
    }

    /// Free-form string (ids and the like), plain encoded.
    pub fn text(self, name: &'static str, get: fn(&R) -> &str) -> Self {
        self.push(name, false, Getter::Text(get))
    }

    /// Enumerated string (maps, modes, platforms), dictionary encoded.
    pub fn label(self, name: &'static str, get: fn(&R) -> &str) -> Self {
        self.push(name, true, Getter::Text(get))
    }

    pub fn int(self, name: &'static str, get: fn(&R) -> i64) -> Self {
        self.push(name, false, Getter::Int(get))
    }

    pub fn float(self, name: &'static str, get: fn(&R) -> f64) -> Self {
        self.push(name, false, Getter::Float(get))
    }

    pub fn timestamp(self, name: &'static str, get: fn(&R) -> Timestamp) -> Self {
        self.push(name, false, Getter::Timestamp(get))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OutputField<R>> {
        self.fields.iter()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|f| f.name).collect()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
