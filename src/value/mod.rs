use arrow::array::{Array, BooleanArray, Float32Array, Float64Array, Int64Array, StringArray};
use arrow::util::display::array_value_to_string;
use serde::{Deserialize, Serialize};

/// One cell of a tabular record, as it actually arrives from the source.
///
/// The declared type of such a cell is usually "text", but real sources also
/// hand back null slots, NaN sentinels standing in for missing data, and the
/// odd numeric or boolean scalar. Modeling the cell as a tagged variant keeps
/// "missing" (`Absent`) distinct from "present but empty" (`Text("")`);
/// callers that care about the difference check here, before normalizing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Absent,
}

impl FieldValue {
    /// Build a float cell, folding the NaN missing-data sentinel into `Absent`.
    /// A present `Float` is therefore always finite-or-infinite, never NaN.
    pub fn float(v: f64) -> Self {
        if v.is_nan() {
            FieldValue::Absent
        } else {
            FieldValue::Float(v)
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, FieldValue::Absent)
    }

    /// Adapt one decoded JSON cell. `null` is the absence marker here;
    /// composite values are kept as their textual encoding.
    pub fn from_json(v: &serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => FieldValue::Absent,
            serde_json::Value::String(s) => FieldValue::Text(s.clone()),
            serde_json::Value::Bool(b) => FieldValue::Bool(*b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => FieldValue::Int(i),
                None => n.as_f64().map(Self::float).unwrap_or(FieldValue::Absent),
            },
            other => FieldValue::Text(other.to_string()),
        }
    }

    /// Adapt one cell of an Arrow column. Null slots and NaN in float columns
    /// are both absence markers; anything else is read as the scalar it is,
    /// falling back to Arrow's own textual rendering for exotic column types.
    pub fn from_column(arr: &dyn Array, row: usize) -> Self {
        if row >= arr.len() || arr.is_null(row) {
            return FieldValue::Absent;
        }
        if let Some(sarr) = arr.as_any().downcast_ref::<StringArray>() {
            return FieldValue::Text(sarr.value(row).to_string());
        }
        if let Some(farr) = arr.as_any().downcast_ref::<Float64Array>() {
            return Self::float(farr.value(row));
        }
        if let Some(farr) = arr.as_any().downcast_ref::<Float32Array>() {
            return Self::float(farr.value(row) as f64);
        }
        if let Some(iarr) = arr.as_any().downcast_ref::<Int64Array>() {
            return FieldValue::Int(iarr.value(row));
        }
        if let Some(barr) = arr.as_any().downcast_ref::<BooleanArray>() {
            return FieldValue::Bool(barr.value(row));
        }
        array_value_to_string(arr, row)
            .map(FieldValue::Text)
            .unwrap_or(FieldValue::Absent)
    }
}

impl From<Option<&str>> for FieldValue {
    fn from(v: Option<&str>) -> Self {
        match v {
            Some(s) => FieldValue::Text(s.to_string()),
            None => FieldValue::Absent,
        }
    }
}

impl From<Option<String>> for FieldValue {
    fn from(v: Option<String>) -> Self {
        match v {
            Some(s) => FieldValue::Text(s),
            None => FieldValue::Absent,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Text(v.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::Text(v)
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Int(v)
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        Self::float(v)
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        FieldValue::Bool(v)
    }
}
