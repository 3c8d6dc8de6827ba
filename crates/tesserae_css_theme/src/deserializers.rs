use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, de::Error};

use crate::TokenValue;

pub fn de_non_empty_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;

    if name.trim().is_empty() {
        return Err(D::Error::custom("theme name can't be empty."));
    }

    Ok(name)
}

pub fn de_tokens<'de, D>(deserializer: D) -> Result<IndexMap<String, TokenValue>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = IndexMap::<String, StringOrFloat>::deserialize(deserializer)?;

    Ok(raw
        .into_iter()
        .map(|(name, value)| {
            let value = match value {
                StringOrFloat::String(string) => TokenValue::Text(string),
                StringOrFloat::Float(number) => TokenValue::Number(number),
            };
            (name, value)
        })
        .collect())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrFloat {
    String(String),
    Float(f64),
}

#[cfg(test)]
mod tests {
    use crate::BaseTheme;

    #[test]
    fn test_rejects_nested_token_values() {
        let json = r##"{ "name": "Nested", "tokens": { "color": { "gray": "#ccc" } } }"##;
        assert!(BaseTheme::from_json(json).is_err());
    }

    #[test]
    fn test_rejects_empty_name() {
        let json = r#"{ "name": "  ", "tokens": {} }"#;
        assert!(BaseTheme::from_json(json).is_err());
    }

    #[test]
    fn test_keeps_token_order() {
        let json = r#"{ "name": "Ordered", "tokens": { "b": "1px", "a": 2 } }"#;
        let theme = BaseTheme::from_json(json).unwrap();
        let names: Vec<_> = theme.tokens.keys().map(String::as_str).collect();
        assert_eq!(names, ["b", "a"]);
    }
}
