use serde_json::Value;

use crate::errors::ValidationError;
use crate::types::internal::ValidatedItem;

/// Checks raw item input against the item rules
///
/// Rules:
/// - `name` must be a string that is non-empty after trimming
/// - `price` must coerce to a finite number >= 0
pub struct ItemValidator;

impl ItemValidator {
    /// Validate and normalize raw create-item input
    ///
    /// # Returns
    /// * `Ok(ValidatedItem)` - Trimmed name and coerced price
    /// * `Err(ValidationError)` - First rule that failed (name is checked first)
    pub fn validate(
        name: Option<&Value>,
        price: Option<&Value>,
    ) -> Result<ValidatedItem, ValidationError> {
        let name = Self::normalize_name(name)?;
        let price = Self::coerce_price(price);

        if price.is_nan() || price.is_infinite() || price < 0.0 {
            return Err(ValidationError::InvalidPrice);
        }
        // "-0" passes the range check; store it as plain zero
        let price = if price == 0.0 { 0.0 } else { price };

        Ok(ValidatedItem { name, price })
    }

    fn normalize_name(name: Option<&Value>) -> Result<String, ValidationError> {
        match name {
            Some(Value::String(raw)) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    Err(ValidationError::NameRequired)
                } else {
                    Ok(trimmed.to_string())
                }
            }
            _ => Err(ValidationError::NameRequired),
        }
    }

    /// Loose numeric coercion as browsers apply it to form values
    ///
    /// Absent values, arrays and objects become NaN; `null` and the empty
    /// string become 0; booleans become 1/0.
    pub fn coerce_price(price: Option<&Value>) -> f64 {
        match price {
            None => f64::NAN,
            Some(Value::Null) => 0.0,
            Some(Value::Bool(flag)) => {
                if *flag {
                    1.0
                } else {
                    0.0
                }
            }
            Some(Value::Number(number)) => number.as_f64().unwrap_or(f64::NAN),
            Some(Value::String(raw)) => Self::parse_numeric_string(raw),
            Some(Value::Array(_)) | Some(Value::Object(_)) => f64::NAN,
        }
    }

    fn parse_numeric_string(raw: &str) -> f64 {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return 0.0;
        }

        let radix_literal = [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)]
            .iter()
            .find_map(|(prefix, radix)| trimmed.strip_prefix(*prefix).map(|digits| (digits, *radix)));
        if let Some((digits, radix)) = radix_literal {
            return Self::parse_radix_digits(digits, radix);
        }

        // Rust accepts spellings like "inf" and "nan" that browsers do not;
        // both end up rejected as non-finite anyway.
        trimmed.parse::<f64>().unwrap_or(f64::NAN)
    }

    /// Unsigned digits after a `0x`/`0o`/`0b` prefix; no sign, no separators
    fn parse_radix_digits(digits: &str, radix: u32) -> f64 {
        if digits.is_empty() {
            return f64::NAN;
        }

        // Accumulate in f64 so literals wider than 64 bits still yield a number
        digits
            .chars()
            .try_fold(0.0_f64, |acc, c| {
                c.to_digit(radix).map(|digit| acc * radix as f64 + digit as f64)
            })
            .unwrap_or(f64::NAN)
    }
}
