pub mod batch;

pub use batch::normalize_columns;

use crate::value::FieldValue;

/// Normalize one field value to guaranteed text.
///
/// An absent cell (null slot or NaN sentinel) becomes the empty string;
/// anything present is rendered to its canonical text form and stripped of
/// leading/trailing whitespace. Never fails, so downstream code may call
/// text-only operations on the result unconditionally. Note this collapses
/// "missing" and "empty" into the same output on purpose.
pub fn normalize(value: &FieldValue) -> String {
    match value {
        FieldValue::Absent => String::new(),
        FieldValue::Text(s) => s.trim().to_string(),
        FieldValue::Int(i) => i.to_string(),
        FieldValue::Float(f) => f.to_string(),
        FieldValue::Bool(b) => b.to_string(),
    }
}

/// Shorthand for callers holding a raw optional cell.
pub fn normalize_cell(cell: Option<&str>) -> String {
    normalize(&FieldValue::from(cell))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absence_markers_normalize_to_empty() {
        assert_eq!(normalize(&FieldValue::Absent), "");
        assert_eq!(normalize(&FieldValue::from(None::<&str>)), "");
        assert_eq!(normalize(&FieldValue::float(f64::NAN)), "");
        assert_eq!(normalize_cell(None), "");
    }

    #[test]
    fn text_is_trimmed() {
        assert_eq!(
            normalize(&FieldValue::Text("  hello world  ".into())),
            "hello world"
        );
        assert_eq!(normalize(&FieldValue::Text("\t a@b.com \r\n".into())), "a@b.com");
        assert_eq!(normalize(&FieldValue::Text(String::new())), "");
        assert_eq!(normalize_cell(Some("  hi ")), "hi");
    }

    #[test]
    fn scalars_render_canonically() {
        assert_eq!(normalize(&FieldValue::Int(42)), "42");
        assert_eq!(normalize(&FieldValue::float(4.5)), "4.5");
        assert_eq!(normalize(&FieldValue::Bool(true)), "true");
        assert_eq!(normalize(&FieldValue::Bool(false)), "false");
    }

    #[test]
    fn normalize_is_idempotent() {
        let inputs = vec![
            FieldValue::Absent,
            FieldValue::Text("  hello world  ".into()),
            FieldValue::Text(String::new()),
            FieldValue::Int(42),
            FieldValue::float(f64::NAN),
            FieldValue::float(-0.25),
            FieldValue::Bool(true),
        ];
        for v in inputs {
            let once = normalize(&v);
            let twice = normalize(&FieldValue::Text(once.clone()));
            assert_eq!(once, twice, "not idempotent for {:?}", v);
        }
    }
}
