//! Raw issue record normalization.
//!
//! Producers are sloppy about issue records: some checks emit bare
//! strings, some emit partial objects, some the full tuple. Everything
//! coerces to a canonical [`Issue`] with safe defaults; nothing throws.

use crate::core::{Issue, UNKNOWN_LABEL};
use serde_json::Value;

/// Coerce one raw issue record into canonical form.
///
/// A bare string becomes the message; objects fill each field with a
/// default where it is missing or mistyped. Anything else (null,
/// numbers, nested arrays) degrades to the fully-unknown issue.
pub fn normalize_issue(raw: &Value) -> Issue {
    match raw {
        Value::String(message) => Issue {
            message: message.clone(),
            ..Issue::unknown()
        },
        Value::Object(record) => Issue {
            check: text_or_unknown(record.get("check")),
            message: text_or_unknown(record.get("message")),
            file: text_or_unknown(record.get("file")),
            line: line_number(record.get("line")),
            element: record
                .get("element")
                .and_then(Value::as_str)
                .map(str::to_string),
            ..Issue::unknown()
        },
        _ => Issue::unknown(),
    }
}

/// Normalize an optional raw issue array. Missing or mistyped arrays
/// degrade to the empty list.
pub fn normalize_issues(raw: Option<&Value>) -> Vec<Issue> {
    raw.and_then(Value::as_array)
        .map(|records| records.iter().map(normalize_issue).collect())
        .unwrap_or_default()
}

fn text_or_unknown(value: Option<&Value>) -> String {
    value
        .and_then(Value::as_str)
        .unwrap_or(UNKNOWN_LABEL)
        .to_string()
}

// Lines are 1-based; zero, negative, and non-numeric values all land on 1.
fn line_number(value: Option<&Value>) -> u32 {
    value
        .and_then(Value::as_f64)
        .filter(|line| line.is_finite() && *line >= 1.0)
        .map(|line| line.round().min(u32::MAX as f64) as u32)
        .unwrap_or(1)
}
