use serde::{Deserialize, Deserializer, Serialize};

/// Amount as it appears in a recipe file
///
/// Catalogs are hand-edited, so an amount may be a JSON number or a string
/// such as `"2"`, `"1 1/2"` or `"to taste"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    Number(f64),
    Text(String),
}

impl RawAmount {
    /// Numeric value of the amount, `None` when it cannot be measured
    pub fn value(&self) -> Option<f64> {
        match self {
            RawAmount::Number(value) if value.is_finite() => Some(*value),
            RawAmount::Number(_) => None,
            RawAmount::Text(text) => parse_quantity(text),
        }
    }
}

impl From<f64> for RawAmount {
    fn from(value: f64) -> Self {
        RawAmount::Number(value)
    }
}

impl From<&str> for RawAmount {
    fn from(value: &str) -> Self {
        RawAmount::Text(value.to_owned())
    }
}

/// Read an explicit `null` the same way as a missing field
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parse a quantity string into a decimal value
///
/// Supports formats:
/// - Decimals: "2", "0.5", " 1.25 "
/// - Pure fractions: "1/2" → 0.5
/// - Mixed fractions: "1 1/2" → 1.5
///
/// Anything else ("a pinch", "to taste", "", "NaN") yields `None`.
pub fn parse_quantity(quantity_str: &str) -> Option<f64> {
    let trimmed = quantity_str.trim();
    if trimmed.is_empty() {
        return None;
    }

    // Handle mixed fractions: "1 1/2"
    if let Some((whole, fraction)) = trimmed.split_once(char::is_whitespace) {
        let whole = parse_decimal(whole)?;
        let fraction = parse_fraction(fraction.trim())?;
        return Some(whole + fraction);
    }

    if trimmed.contains('/') {
        return parse_fraction(trimmed);
    }

    parse_decimal(trimmed)
}

fn parse_decimal(value: &str) -> Option<f64> {
    // `f64::from_str` accepts "inf" and "NaN", which are not amounts
    if !value
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'))
    {
        return None;
    }

    value.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_fraction(value: &str) -> Option<f64> {
    let (numerator, denominator) = value.split_once('/')?;
    let numerator = parse_decimal(numerator.trim())?;
    let denominator = parse_decimal(denominator.trim())?;

    if denominator == 0.0 {
        return None;
    }

    Some(numerator / denominator)
}
