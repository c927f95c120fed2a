//! Numeric input policy: coercion to zero and currency rounding
//!
//! Every amount that crosses the input boundary goes through [`to_number_or_zero`].
//! Absent, empty, non-numeric and non-finite values all become `0.0`; nothing here
//! ever returns an error. The serde helpers below apply the same rule to profile
//! fields so the policy lives in one place.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Coerce an arbitrary JSON value to a finite number, or zero
pub fn to_number_or_zero(value: &Value) -> f64 {
    let n = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => parse_number_or_zero(s),
        Value::Bool(true) => 1.0,
        Value::Bool(false) | Value::Null | Value::Array(_) | Value::Object(_) => 0.0,
    };
    if n.is_finite() { n } else { 0.0 }
}

/// Parse a text field the way the form submits it: surrounding blanks are ignored,
/// an empty string is zero, anything unparseable is zero.
pub fn parse_number_or_zero(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() => n,
        _ => 0.0,
    }
}

/// Round to cents, half toward positive infinity
///
/// Matches `Math.round(x * 100) / 100` of the legacy workbook export, which differs
/// from `f64::round` on negative halves.
pub fn round_currency(value: f64) -> f64 {
    (value * 100.0 + 0.5).floor() / 100.0
}

/// Serde adapter: any JSON value to a coerced `f64`
pub fn lenient_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(to_number_or_zero(&value))
}

/// Serde adapter for day counts: coerced, truncated, negatives become zero
pub fn lenient_days<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(days_from_number(to_number_or_zero(&value)))
}

/// Serde adapter for an optional day count
///
/// `null` and missing stay `None` (full month); anything else is coerced.
pub fn lenient_optional_days<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Null => Ok(None),
        Value::String(ref s) if s.trim().is_empty() => Ok(None),
        other => Ok(Some(days_from_number(to_number_or_zero(&other)))),
    }
}

/// Serde adapter for optional ISO dates; unparseable text is treated as absent
pub fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok(),
        _ => None,
    })
}

fn days_from_number(n: f64) -> u32 {
    if n <= 0.0 {
        0
    } else {
        n.trunc().min(u32::MAX as f64) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coercion_to_zero() {
        assert_eq!(to_number_or_zero(&json!(12.5)), 12.5);
        assert_eq!(to_number_or_zero(&json!("  42.10 ")), 42.10);
        assert_eq!(to_number_or_zero(&json!("")), 0.0);
        assert_eq!(to_number_or_zero(&json!("abc")), 0.0);
        assert_eq!(to_number_or_zero(&json!("12,5")), 0.0);
        assert_eq!(to_number_or_zero(&json!("NaN")), 0.0);
        assert_eq!(to_number_or_zero(&json!(null)), 0.0);
        assert_eq!(to_number_or_zero(&json!([1, 2])), 0.0);
        assert_eq!(to_number_or_zero(&json!(-300)), -300.0);
    }

    #[test]
    fn test_round_currency() {
        assert_eq!(round_currency(335.034166), 335.03);
        assert_eq!(round_currency(107.142857), 107.14);
        assert_eq!(round_currency(0.125), 0.13);
        // Half goes up, not away from zero
        assert_eq!(round_currency(-0.125), -0.12);
        assert_eq!(round_currency(0.0), 0.0);
    }

    #[test]
    fn test_lenient_days() {
        #[derive(Deserialize)]
        struct Days {
            #[serde(default, deserialize_with = "lenient_optional_days")]
            counted: Option<u32>,
            #[serde(default, deserialize_with = "lenient_days")]
            counter: u32,
        }

        let d: Days = serde_json::from_value(json!({"counted": "15", "counter": -3})).unwrap();
        assert_eq!(d.counted, Some(15));
        assert_eq!(d.counter, 0);

        let d: Days = serde_json::from_value(json!({"counted": null})).unwrap();
        assert_eq!(d.counted, None);
        assert_eq!(d.counter, 0);

        let d: Days = serde_json::from_value(json!({})).unwrap();
        assert_eq!(d.counted, None);
    }
}
