use serde_json::Value;

use crate::domain::RequestParams;

/// Flatten raw params into deepObject query pairs.
///
/// - nested objects become `outer[inner]=value`,
/// - arrays of scalars are joined with `,`,
/// - `null` and empty arrays are dropped (query strings cannot express them).
pub fn encode_query(params: &RequestParams) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for (key, value) in params.iter() {
        push_value(&mut pairs, key.clone(), value);
    }
    pairs
}

fn push_value(pairs: &mut Vec<(String, String)>, key: String, value: &Value) {
    match value {
        Value::Null => {}
        Value::Object(map) => {
            for (inner, nested) in map {
                push_value(pairs, format!("{key}[{inner}]"), nested);
            }
        }
        Value::Array(items) => {
            if items.iter().any(|item| item.is_object() || item.is_array()) {
                for (idx, item) in items.iter().enumerate() {
                    push_value(pairs, format!("{key}[{idx}]"), item);
                }
            } else {
                let rendered = items
                    .iter()
                    .filter_map(scalar_to_string)
                    .collect::<Vec<_>>();
                if !rendered.is_empty() {
                    pairs.push((key, rendered.join(",")));
                }
            }
        }
        scalar => {
            if let Some(rendered) = scalar_to_string(scalar) {
                pairs.push((key, rendered));
            }
        }
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
