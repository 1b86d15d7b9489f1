//! JSON to context value conversion.

use super::{Row, Value};
use serde_json::{Number, Value as JsonValue};

/// Convert a top-level JSON field. `None` means the field is absent.
pub(super) fn field_value(value: &JsonValue) -> Option<Value> {
    match value {
        JsonValue::Array(items) => Some(Value::Rows(items.iter().map(row_from).collect())),
        other => scalar_text(other).map(Value::Scalar),
    }
}

/// Display form of a JSON value used as a scalar.
///
/// `null` has no display form. Containers keep their compact JSON text.
fn scalar_text(value: &JsonValue) -> Option<String> {
    match value {
        JsonValue::Null => None,
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Bool(b) => Some(b.to_string()),
        JsonValue::Number(n) => Some(number_text(n)),
        JsonValue::Array(_) | JsonValue::Object(_) => Some(value.to_string()),
    }
}

/// Non-object elements still count as rows, just with no fields.
fn row_from(item: &JsonValue) -> Row {
    match item {
        JsonValue::Object(map) => map
            .iter()
            .filter_map(|(k, v)| scalar_text(v).map(|text| (k.clone(), text)))
            .collect(),
        _ => Row::new(),
    }
}

/// Integers print as-is; floats follow `float_text`.
fn number_text(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        i.to_string()
    } else if let Some(u) = n.as_u64() {
        u.to_string()
    } else if let Some(f) = n.as_f64() {
        float_text(f)
    } else {
        n.to_string()
    }
}

/// ECMAScript `Number::toString` for a float.
///
/// Uses the shortest round-trip digits. Plain decimal notation is used while
/// the decimal exponent is in `-7 < e < 21`, exponent notation otherwise.
/// `2000.0` prints as `2000`, `1e21` as `1e+21`, `1.5e-7` as `1.5e-7` and
/// `-0.0` as `0`.
pub(super) fn float_text(f: f64) -> String {
    if f.is_nan() {
        return "NaN".to_string();
    }
    if f == 0.0 {
        return "0".to_string();
    }
    if f < 0.0 {
        return format!("-{}", float_text(-f));
    }
    if f.is_infinite() {
        return "Infinity".to_string();
    }

    // `{:e}` yields the shortest round-trip digits as `d.ddde<exp>`.
    let sci = format!("{:e}", f);
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    let n = exp.parse::<i32>().unwrap_or(0) + 1;

    if k <= n && n <= 21 {
        format!("{}{}", digits, "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int, frac) = digits.split_at(n as usize);
        format!("{}.{}", int, frac)
    } else if -6 < n && n <= 0 {
        format!("0.{}{}", "0".repeat((-n) as usize), digits)
    } else {
        let sign = if n - 1 < 0 { '-' } else { '+' };
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{}e{}{}", first, sign, (n - 1).abs())
        } else {
            format!("{}.{}e{}{}", first, rest, sign, (n - 1).abs())
        }
    }
}

pub(super) fn kind_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}
