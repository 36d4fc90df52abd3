use anyhow::Result;
use arrow::{
    array::{ArrayRef, StringBuilder},
    datatypes::{DataType, Field, Schema},
    record_batch::RecordBatch,
};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

use crate::normalize::normalize;
use crate::value::FieldValue;

/// Normalize the flagged columns of a batch to guaranteed text.
///
/// Flagged columns come back as non-nullable `Utf8`: nulls and NaN become
/// the empty string, text is trimmed, numeric and boolean cells are rendered
/// to their canonical text form. The output schema states the invariant the
/// caller relies on. Unflagged columns pass through untouched.
#[instrument(level = "debug", skip(batch), fields(rows = batch.num_rows()))]
pub fn normalize_columns(batch: &RecordBatch, columns: &[String]) -> Result<RecordBatch> {
    if columns.is_empty() {
        return Ok(batch.clone());
    }

    for name in columns {
        if batch.schema().column_with_name(name).is_none() {
            warn!(column = %name, "column not in batch, skipping");
        }
    }

    let mut fields = Vec::with_capacity(batch.num_columns());
    let mut cols = Vec::with_capacity(batch.num_columns());
    for (i, field) in batch.schema().fields().iter().enumerate() {
        let arr = batch.column(i);
        if columns.contains(field.name()) {
            let mut b = StringBuilder::new();
            for row in 0..arr.len() {
                b.append_value(normalize(&FieldValue::from_column(arr.as_ref(), row)));
            }
            fields.push(Field::new(field.name(), DataType::Utf8, false));
            cols.push(Arc::new(b.finish()) as ArrayRef);
        } else {
            fields.push(field.as_ref().clone());
            cols.push(arr.clone());
        }
    }

    debug!(normalized = columns.len(), "rebuilt batch");
    RecordBatch::try_new(Arc::new(Schema::new(fields)), cols).map_err(Into::into)
}
