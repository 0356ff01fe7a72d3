//! Unwrapping of the `included` field on courses and trips.
//!
//! The API stores this list as text and has re-encoded it on some write
//! paths, so the same field can arrive as a plain array, an array holding one
//! JSON string, a JSON string of a JSON string, or a bare scalar. The
//! normalizer peels those layers off in a bounded loop and never fails.

use serde_json::Value;

pub const MAX_UNWRAP_ATTEMPTS: usize = 10;

fn looks_like_json(s: &str) -> bool {
    matches!(s.trim_start().chars().next(), Some('[') | Some('{') | Some('"'))
}

fn entry_to_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

fn finish(items: Vec<Value>) -> Vec<String> {
    items.into_iter().filter_map(entry_to_string).collect()
}

/// Flatten an arbitrarily re-encoded `included` value into a list of strings.
pub fn normalize_included(value: &Value) -> Vec<String> {
    let mut current = value.clone();

    for _ in 0..MAX_UNWRAP_ATTEMPTS {
        current = match current {
            Value::Array(items) => {
                if let [Value::String(only)] = items.as_slice() {
                    if looks_like_json(only) {
                        match serde_json::from_str::<Value>(only) {
                            Ok(parsed) => {
                                current = parsed;
                                continue;
                            }
                            Err(_) => return finish(items),
                        }
                    }
                }

                if matches!(items.first(), Some(Value::Array(_))) {
                    // Unwrap one level of nesting, keeping every inner entry.
                    Value::Array(
                        items
                            .into_iter()
                            .flat_map(|item| match item {
                                Value::Array(inner) => inner,
                                other => vec![other],
                            })
                            .collect(),
                    )
                } else {
                    return finish(items);
                }
            }
            Value::String(s) => match serde_json::from_str::<Value>(&s) {
                Ok(parsed @ (Value::Array(_) | Value::String(_))) => parsed,
                _ => return entry_to_string(Value::String(s)).into_iter().collect(),
            },
            _ => return Vec::new(),
        };
    }

    log::debug!(
        "included value still encoded after {} attempts, dropping it",
        MAX_UNWRAP_ATTEMPTS
    );
    Vec::new()
}
