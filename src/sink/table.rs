/// CSV rendering of a JSON list of objects.
///
/// Strict policy: every element must be an object with exactly the key set of
/// the first element. The header follows the first element's key order; later
/// rows may list the same keys in any order.
use std::io::Write;

use serde_json::{Map, Value};

use crate::client::{ClientError, CsvShape};

/// A validated list of uniform objects, ready to write.
#[derive(Debug)]
pub struct Table<'a> {
    header: Vec<&'a str>,
    rows: Vec<&'a Map<String, Value>>,
}

impl<'a> Table<'a> {
    /// Check the shape of `body` without writing anything.
    ///
    /// # Errors
    ///
    /// `UnsupportedCsvShape` for a scalar, an object, `[]`, a non-object
    /// element, a first element with no keys, or an element whose keys
    /// differ from the first one.
    pub fn from_value(body: &'a Value) -> Result<Self, ClientError> {
        let shape_err = ClientError::UnsupportedCsvShape;

        let items = body.as_array().ok_or(shape_err(CsvShape::NotAList))?;
        if items.is_empty() {
            return Err(shape_err(CsvShape::EmptyList));
        }

        let mut rows = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let object = item
                .as_object()
                .ok_or(shape_err(CsvShape::NotAnObject { index }))?;
            rows.push(object);
        }

        let first = rows[0];
        if first.is_empty() {
            return Err(shape_err(CsvShape::NoColumns));
        }
        for (index, row) in rows.iter().enumerate().skip(1) {
            let uniform = row.len() == first.len() && first.keys().all(|k| row.contains_key(k));
            if !uniform {
                return Err(shape_err(CsvShape::KeyMismatch { index }));
            }
        }

        Ok(Self {
            header: first.keys().map(String::as_str).collect(),
            rows,
        })
    }

    /// Write the header and one record per row.
    ///
    /// # Errors
    ///
    /// `Csv` when the underlying writer fails.
    pub fn write<W: Write>(&self, out: W) -> Result<(), ClientError> {
        let mut writer = ::csv::Writer::from_writer(out);
        writer.write_record(&self.header)?;
        for row in &self.rows {
            writer.write_record(self.header.iter().map(|key| cell(&row[*key])))?;
        }
        writer.flush().map_err(|e| ClientError::Csv(e.into()))?;
        Ok(())
    }
}

/// One CSV field. Strings are written raw, null is empty, everything else is
/// compact JSON.
fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
