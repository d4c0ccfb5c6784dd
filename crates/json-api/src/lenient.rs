//! Lenient numeric request fields.
//!
//! Storefront forms post numbers as strings (`"50"`), so numeric body fields
//! accept either form and are cast after extraction.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use bazaar_app::domain::validation::ValidationError;

/// A JSON number, or a string holding one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub(crate) struct LenientNumber(Value);

impl LenientNumber {
    /// Cast to a finite float.
    ///
    /// `null` and blank strings count as absent. Booleans cast to 1 and 0.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NotANumber`] for anything else.
    pub(crate) fn to_f64(&self, field: &'static str) -> Result<Option<f64>, ValidationError> {
        let number = match &self.0 {
            Value::Null => return Ok(None),
            Value::Bool(flag) => Some(if *flag { 1.0 } else { 0.0 }),
            Value::Number(number) => number.as_f64(),
            Value::String(text) if text.trim().is_empty() => return Ok(None),
            Value::String(text) => text.trim().parse::<f64>().ok(),
            Value::Array(_) | Value::Object(_) => None,
        };

        number
            .filter(|number| number.is_finite())
            .map(Some)
            .ok_or(ValidationError::NotANumber(field))
    }

    /// Cast to a non-negative integer that fits in `u32`.
    pub(crate) fn to_u32(&self) -> Option<u32> {
        match &self.0 {
            Value::Number(number) => number.as_u64().and_then(|n| u32::try_from(n).ok()),
            Value::String(text) => text.trim().parse::<u32>().ok(),
            Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
        }
    }
}

impl From<Value> for LenientNumber {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Cast an optional body field, treating an absent field like `null`.
pub(crate) fn optional_f64(
    field: &'static str,
    value: Option<&LenientNumber>,
) -> Result<Option<f64>, ValidationError> {
    value.map_or(Ok(None), |value| value.to_f64(field))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn lenient(value: Value) -> LenientNumber {
        LenientNumber::from(value)
    }

    #[test]
    fn numbers_and_numeric_strings_cast_to_f64() {
        assert_eq!(lenient(json!(50)).to_f64("price"), Ok(Some(50.0)));
        assert_eq!(lenient(json!(80.5)).to_f64("price"), Ok(Some(80.5)));
        assert_eq!(lenient(json!("50")).to_f64("price"), Ok(Some(50.0)));
        assert_eq!(lenient(json!(" 12.25 ")).to_f64("price"), Ok(Some(12.25)));
    }

    #[test]
    fn null_and_blank_strings_are_absent() {
        assert_eq!(lenient(json!(null)).to_f64("price"), Ok(None));
        assert_eq!(lenient(json!("")).to_f64("price"), Ok(None));
        assert_eq!(optional_f64("price", None), Ok(None));
    }

    #[test]
    fn non_numeric_values_are_not_a_number() {
        for value in [json!("cheap"), json!("NaN"), json!("inf"), json!([1]), json!({})] {
            assert_eq!(
                lenient(value.clone()).to_f64("new_price"),
                Err(ValidationError::NotANumber("new_price")),
                "{value}"
            );
        }
    }

    #[test]
    fn booleans_cast_to_one_and_zero() {
        assert_eq!(lenient(json!(true)).to_f64("price"), Ok(Some(1.0)));
        assert_eq!(lenient(json!(false)).to_f64("price"), Ok(Some(0.0)));
    }

    #[test]
    fn slots_accept_integers_and_integer_strings() {
        assert_eq!(lenient(json!(5)).to_u32(), Some(5));
        assert_eq!(lenient(json!("5")).to_u32(), Some(5));
        assert_eq!(lenient(json!(-1)).to_u32(), None);
        assert_eq!(lenient(json!(2.5)).to_u32(), None);
        assert_eq!(lenient(json!("five")).to_u32(), None);
        assert_eq!(lenient(json!(u64::from(u32::MAX) + 1)).to_u32(), None);
    }
}
