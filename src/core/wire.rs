use serde::{Deserialize, Deserializer};

/// Accepts a JSON string or number and keeps it as provider-formatted text.
///
/// Catalogs disagree on whether years and scores are quoted, and the
/// profile only ever displays them.
pub(crate) fn de_text_from_any<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum AnyText {
        Str(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Option::<AnyText>::deserialize(deserializer)? {
        Some(AnyText::Str(s)) => Some(s),
        Some(AnyText::Int(i)) => Some(i.to_string()),
        Some(AnyText::Float(f)) => Some(f.to_string()),
        None => None,
    })
}

/// Keeps a field only if it holds something other than whitespace.
pub(crate) fn non_blank(s: Option<String>) -> Option<String> {
    s.filter(|v| !v.trim().is_empty())
}
