//! Forgiving field deserializers for model-produced JSON.
//!
//! Vision models write `null` for fields they could not see, `2.0` for
//! counts and occasionally quote numbers. Each helper maps such values to
//! the field's default instead of failing the whole report.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Number {
    Int(u64),
    Float(f64),
    Text(String),
}

impl Number {
    fn as_f64(&self) -> Option<f64> {
        match self {
            Number::Int(n) => Some(*n as f64),
            Number::Float(f) => Some(*f),
            Number::Text(s) => s.trim().parse().ok(),
        }
        .filter(|f: &f64| f.is_finite())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Truthy {
    Bool(bool),
    Int(u64),
    Text(String),
}

/// Non-negative count; floats are rounded, anything unreadable is 0.
pub fn count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let value = Option::<Number>::deserialize(deserializer)?;
    Ok(match value {
        Some(Number::Int(n)) => u32::try_from(n).unwrap_or(u32::MAX),
        other => other
            .and_then(|n| n.as_f64())
            .filter(|f| *f > 0.0)
            .map(|f| f.round().min(f64::from(u32::MAX)) as u32)
            .unwrap_or(0),
    })
}

/// Any number; clamping happens later in `FeatureReport::normalized`.
pub fn number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let value = Option::<Number>::deserialize(deserializer)?;
    Ok(value.and_then(|n| n.as_f64()).unwrap_or(0.0))
}

pub fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let value = Option::<Truthy>::deserialize(deserializer)?;
    Ok(match value {
        Some(Truthy::Bool(b)) => b,
        Some(Truthy::Int(n)) => n > 0,
        Some(Truthy::Text(s)) => matches!(s.trim().to_lowercase().as_str(), "true" | "yes" | "y"),
        None => false,
    })
}

pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// `null` or absent means "use the default".
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Sample {
        #[serde(deserialize_with = "count")]
        count: u32,
        #[serde(deserialize_with = "number")]
        number: f64,
        #[serde(deserialize_with = "flag")]
        flag: bool,
        #[serde(deserialize_with = "text")]
        text: String,
        #[serde(deserialize_with = "or_default")]
        list: Vec<String>,
    }

    fn sample(json: &str) -> Sample {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn nulls_become_defaults() {
        let s = sample(r#"{"count": null, "number": null, "flag": null, "text": null, "list": null}"#);
        assert_eq!(s.count, 0);
        assert_eq!(s.number, 0.0);
        assert!(!s.flag);
        assert_eq!(s.text, "");
        assert!(s.list.is_empty());
    }

    #[test]
    fn counts_accept_floats_and_strings() {
        assert_eq!(sample(r#"{"count": 2.0}"#).count, 2);
        assert_eq!(sample(r#"{"count": 2.6}"#).count, 3);
        assert_eq!(sample(r#"{"count": "4"}"#).count, 4);
        assert_eq!(sample(r#"{"count": -3}"#).count, 0);
        assert_eq!(sample(r#"{"count": "several"}"#).count, 0);
    }

    #[test]
    fn numbers_accept_integers_and_strings() {
        assert_eq!(sample(r#"{"number": 1}"#).number, 1.0);
        assert_eq!(sample(r#"{"number": "0.75"}"#).number, 0.75);
    }

    #[test]
    fn flags_accept_words() {
        assert!(sample(r#"{"flag": "Yes"}"#).flag);
        assert!(sample(r#"{"flag": 1}"#).flag);
        assert!(!sample(r#"{"flag": "no"}"#).flag);
    }
}
