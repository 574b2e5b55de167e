//! Serde helpers for the normalizations Nobitex expects on the wire.
//!
//! Currency codes are sent lower-cased regardless of how the caller spelled
//! them, and multi-currency filters travel as one comma-separated string.

use serde::Serializer;

/// Serialize a string lower-cased.
///
/// # Example
///
/// ```rust
/// use serde::Serialize;
/// use nobitex_api_client::types::serde_helpers::lowercase;
///
/// #[derive(Serialize)]
/// struct Request {
///     #[serde(serialize_with = "lowercase")]
///     currency: String,
/// }
///
/// let json = serde_json::to_string(&Request { currency: "BTC".into() }).unwrap();
/// assert_eq!(json, r#"{"currency":"btc"}"#);
/// ```
pub fn lowercase<S>(value: &str, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_ascii_lowercase())
}

/// Serialize an optional string lower-cased.
pub fn lowercase_option<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(v) => lowercase(v, serializer),
        None => serializer.serialize_none(),
    }
}

/// Serialize a list of currency codes as one lower-cased, comma-separated string.
pub fn comma_separated_lowercase<S>(values: &[String], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let joined = values
        .iter()
        .map(|v| v.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join(",");
    serializer.serialize_str(&joined)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Filter {
        #[serde(serialize_with = "lowercase_option")]
        src: Option<String>,
        #[serde(serialize_with = "comma_separated_lowercase")]
        currencies: Vec<String>,
    }

    #[test]
    fn test_helpers() {
        let filter = Filter {
            src: Some("BTC".to_string()),
            currencies: vec!["RLS".to_string(), "Usdt".to_string()],
        };
        assert_eq!(
            serde_json::to_string(&filter).unwrap(),
            r#"{"src":"btc","currencies":"rls,usdt"}"#
        );
    }

    #[test]
    fn test_lowercase_option_none() {
        let filter = Filter {
            src: None,
            currencies: vec![],
        };
        assert_eq!(
            serde_json::to_string(&filter).unwrap(),
            r#"{"src":null,"currencies":""}"#
        );
    }
}
