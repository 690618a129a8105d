//! Providers disagree on numeric encodings: Financial Modeling Prep sends JSON
//! numbers (sometimes floats for large caps), Alpha Vantage sends strings that
//! may read `"None"` or `"-"`, and `WhaleWisdom` cells can be either. These
//! helpers accept all of them and turn garbage into a `Coercion` error, which
//! callers downgrade to absence with [`or_absent`].

use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::Value;

use crate::SharefinderError;

/// Parse an integer from a JSON value.
///
/// `null` and missing values are `Ok(None)`. Integral numbers pass through;
/// finite floats are truncated toward zero. Strings must hold a plain integer
/// after trimming.
///
/// # Errors
/// Returns `Coercion` for booleans, arrays, objects, non-integer strings, and
/// numbers outside the `i64` range.
pub fn int_from_value(field: &str, value: Option<&Value>) -> Result<Option<i64>, SharefinderError> {
    let Some(v) = value else {
        return Ok(None);
    };
    match v {
        Value::Null => Ok(None),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Ok(Some(i));
            }
            match n.as_f64() {
                Some(f) if f.is_finite() && f.abs() < 9.2e18 => {
                    #[allow(clippy::cast_possible_truncation)]
                    Ok(Some(f.trunc() as i64))
                }
                _ => Err(SharefinderError::coercion(field, n.to_string())),
            }
        }
        Value::String(s) => int_from_str(field, s).map(Some),
        other => Err(SharefinderError::coercion(field, other.to_string())),
    }
}

/// Parse a plain integer string (optional sign, digits, surrounding blanks).
///
/// # Errors
/// Returns `Coercion` if the trimmed text is not an integer.
pub fn int_from_str(field: &str, raw: &str) -> Result<i64, SharefinderError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| SharefinderError::coercion(field, raw))
}

/// Parse a decimal from a JSON value (number or numeric string).
///
/// # Errors
/// Returns `Coercion` when the value is present but not numeric.
pub fn decimal_from_value(
    field: &str,
    value: Option<&Value>,
) -> Result<Option<Decimal>, SharefinderError> {
    let Some(v) = value else {
        return Ok(None);
    };
    let text = match v {
        Value::Null => return Ok(None),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.trim().to_string(),
        other => return Err(SharefinderError::coercion(field, other.to_string())),
    };
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map(Some)
        .map_err(|_| SharefinderError::coercion(field, text))
}

/// Collapse a coercion result to an optional value, logging the failure.
#[must_use]
pub fn or_absent<T>(res: Result<Option<T>, SharefinderError>) -> Option<T> {
    match res {
        Ok(v) => v,
        Err(_e) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(error = %_e, "treating unparseable field as absent");
            None
        }
    }
}
